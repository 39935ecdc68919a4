// Test doubles shared by the unit tests of this crate

use jiaban_core::{TaskError, TaskExecutor, TaskOutcome, TaskResult};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Executor returning canned answers and counting calls
pub struct MockExecutor {
    pub submit: Mutex<TaskResult<TaskOutcome>>,
    pub report: Mutex<TaskResult<TaskOutcome>>,
    pub health: Mutex<TaskResult<bool>>,
    pub submit_calls: AtomicUsize,
    pub report_calls: AtomicUsize,
    pub health_calls: AtomicUsize,
    pub last_submit: Mutex<Option<(String, Option<String>)>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            submit: Mutex::new(Ok(TaskOutcome::success(
                Some(200),
                serde_json::json!({"id": 1}),
            ))),
            report: Mutex::new(Ok(TaskOutcome::success(
                Some(200),
                serde_json::json!({"content": "daily notes"}),
            ))),
            health: Mutex::new(Ok(true)),
            submit_calls: AtomicUsize::new(0),
            report_calls: AtomicUsize::new(0),
            health_calls: AtomicUsize::new(0),
            last_submit: Mutex::new(None),
        }
    }

    pub fn with_submit(self, result: TaskResult<TaskOutcome>) -> Self {
        *self.submit.lock().unwrap() = result;
        self
    }

    pub fn with_report(self, result: TaskResult<TaskOutcome>) -> Self {
        *self.report.lock().unwrap() = result;
        self
    }

    pub fn with_health(self, result: TaskResult<bool>) -> Self {
        *self.health.lock().unwrap() = result;
        self
    }

    pub fn auth_expired() -> TaskError {
        TaskError::AuthExpired("token rejected".to_string())
    }

    pub fn submits(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TaskExecutor for MockExecutor {
    async fn execute(&self, date: &str, content: Option<&str>) -> TaskResult<TaskOutcome> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_submit.lock().unwrap() = Some((date.to_string(), content.map(str::to_string)));
        self.submit.lock().unwrap().clone()
    }

    async fn health_check_token(&self) -> TaskResult<bool> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        self.health.lock().unwrap().clone()
    }

    async fn get_daily_report(&self, _date: &str) -> TaskResult<TaskOutcome> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);
        self.report.lock().unwrap().clone()
    }
}

/// Executor whose every call panics
pub struct PanickingExecutor;

#[async_trait::async_trait]
impl TaskExecutor for PanickingExecutor {
    async fn execute(&self, _date: &str, _content: Option<&str>) -> TaskResult<TaskOutcome> {
        panic!("executor bug in execute")
    }

    async fn health_check_token(&self) -> TaskResult<bool> {
        panic!("executor bug in health_check_token")
    }

    async fn get_daily_report(&self, _date: &str) -> TaskResult<TaskOutcome> {
        panic!("executor bug in get_daily_report")
    }
}

/// In-memory log sink for a `tracing_subscriber` fmt layer
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a DEBUG-level subscriber writing into this sink for the current thread
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_target(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
