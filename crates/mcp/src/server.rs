// MCP server: line-delimited JSON-RPC dispatch loop over an input/output stream pair

use crate::dispatch::TaskDispatcher;
use crate::error::HandlerError;
use crate::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolSchema,
    DEFAULT_PROTOCOL_VERSION,
};
use crate::tools::{self, DailyGetArgs, OvertimeSubmitArgs, ToolName};
use crate::version;
use anyhow::{Context, Result};
use jiaban_core::{TaskExecutor, TaskResult};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

pub const SERVER_NAME: &str = "jiaban-mcp";

/// Closed set of supported methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
}

impl Method {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "initialize" => Some(Method::Initialize),
            "tools/list" => Some(Method::ToolsList),
            "tools/call" => Some(Method::ToolsCall),
            _ => None,
        }
    }
}

/// What to do after one input line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Blank or malformed line; nothing to write
    Skipped,
    /// Keep serving; `None` for notifications
    Continue(Option<JsonRpcResponse>),
    /// Authentication expired: write the reply (if any) and stop
    Shutdown(Option<JsonRpcResponse>),
}

/// Why [`McpServer::serve`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeExit {
    EndOfInput,
    AuthExpired,
}

pub struct McpServer {
    dispatcher: TaskDispatcher,
    tools: Vec<ToolSchema>,
    server_info: ServerInfo,
}

impl McpServer {
    pub fn new(executor: Arc<dyn TaskExecutor>) -> Self {
        Self::with_version(executor, version::server_version())
    }

    pub fn with_version(executor: Arc<dyn TaskExecutor>, version: &str) -> Self {
        Self {
            dispatcher: TaskDispatcher::new(executor),
            tools: tools::catalog(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: version.to_string(),
            },
        }
    }

    /// Serve requests until the input ends or authentication expires.
    ///
    /// Requests are handled strictly one at a time; each reply is flushed
    /// before the next line is read.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<ServeExit>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("MCP server ready, reading requests");
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .context("Failed to read request line")?;
            if read == 0 {
                info!("Input closed, MCP server stopping");
                return Ok(ServeExit::EndOfInput);
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                debug!("Skipping line that is not valid UTF-8");
                continue;
            };

            match self.handle_line(line).await {
                LineOutcome::Skipped => {}
                LineOutcome::Continue(response) => {
                    if let Some(response) = response {
                        write_response(&mut writer, &response).await?;
                    }
                }
                LineOutcome::Shutdown(response) => {
                    if let Some(response) = response {
                        write_response(&mut writer, &response).await?;
                    }
                    error!("Authentication expired, MCP server stopping");
                    return Ok(ServeExit::AuthExpired);
                }
            }
        }
    }

    /// Handle one raw input line
    pub async fn handle_line(&self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Skipped;
        }

        let Some(request) = JsonRpcRequest::parse(line) else {
            debug!("Skipping malformed input line");
            return LineOutcome::Skipped;
        };

        let method = request.method.as_deref().unwrap_or("");
        debug!(method, id = ?request.id, "Request received");

        let result = self.route(&request).await;
        let fatal = matches!(&result, Err(err) if err.is_fatal());
        match &result {
            Err(err) if fatal => error!(method, "{}", err),
            Err(err) => warn!(method, "Request failed: {}", err),
            Ok(_) => {}
        }

        let response = if request.is_notification() {
            debug!(method, "Notification handled, no reply");
            None
        } else {
            let id = request.id.unwrap_or_default();
            Some(match result {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(err) => JsonRpcResponse::error(id, err.to_rpc_error()),
            })
        };

        if fatal {
            LineOutcome::Shutdown(response)
        } else {
            LineOutcome::Continue(response)
        }
    }

    async fn route(&self, request: &JsonRpcRequest) -> Result<Value, HandlerError> {
        let name = request.method.as_deref().unwrap_or_default();
        let method =
            Method::from_name(name).ok_or_else(|| HandlerError::UnknownMethod(name.to_string()))?;

        match method {
            Method::Initialize => self.handle_initialize(&request.params).await,
            Method::ToolsList => self.handle_tools_list(),
            Method::ToolsCall => self.handle_tools_call(&request.params).await,
        }
    }

    async fn handle_initialize(&self, params: &Value) -> Result<Value, HandlerError> {
        // Only an explicit authentication failure aborts initialization
        let executor = self.dispatcher.executor().clone();
        match isolated(async move { executor.health_check_token().await }).await {
            Ok(true) => debug!("Token health check passed"),
            Ok(false) => warn!("Token health check did not pass, continuing"),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => warn!("Token health check failed, continuing: {}", err),
        }

        let params: InitializeParams = serde_json::from_value(params.clone()).unwrap_or_default();
        let protocol_version = params
            .protocol_version
            .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string());
        info!(protocol_version = %protocol_version, "Client initialized");

        let result = InitializeResult {
            protocol_version,
            server_info: self.server_info.clone(),
            capabilities: ServerCapabilities::default(),
        };
        Ok(serde_json::to_value(result)?)
    }

    fn handle_tools_list(&self) -> Result<Value, HandlerError> {
        let result = ListToolsResult {
            tools: self.tools.clone(),
        };
        Ok(serde_json::to_value(result)?)
    }

    async fn handle_tools_call(&self, params: &Value) -> Result<Value, HandlerError> {
        let params: CallToolParams = serde_json::from_value(params.clone()).unwrap_or_default();
        let name = params.name.unwrap_or_default();
        let tool = ToolName::from_name(&name).ok_or(HandlerError::UnknownTool(name))?;

        let outcome = match tool {
            ToolName::DailyGet => {
                let args: DailyGetArgs = tools::parse_arguments(tool, &params.arguments)?;
                tools::validate_date(&args.date)?;
                let dispatcher = self.dispatcher.clone();
                let date = args.date.trim().to_string();
                isolated(async move { dispatcher.daily_report(&date).await }).await?
            }
            ToolName::OvertimeSubmit => {
                let args: OvertimeSubmitArgs = tools::parse_arguments(tool, &params.arguments)?;
                tools::validate_date(&args.date)?;
                let dispatcher = self.dispatcher.clone();
                let date = args.date.trim().to_string();
                let content = args.content().map(str::to_string);
                isolated(async move {
                    dispatcher
                        .dispatch_overtime(&date, content.as_deref())
                        .await
                })
                .await?
            }
        };

        let text = serde_json::to_string(&outcome)?;
        Ok(serde_json::to_value(CallToolResult::text(text))?)
    }
}

/// Run one executor call on its own task so a panic fails only the current request
async fn isolated<T, F>(call: F) -> Result<T, HandlerError>
where
    F: Future<Output = TaskResult<T>> + Send + 'static,
    T: Send + 'static,
{
    match tokio::spawn(call).await {
        Ok(result) => Ok(result?),
        Err(err) => Err(HandlerError::Internal(format!("Task executor failed: {}", err))),
    }
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(response).context("Failed to serialize response")?;
    line.push(b'\n');
    writer
        .write_all(&line)
        .await
        .context("Failed to write response")?;
    writer.flush().await.context("Failed to flush response")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{AUTH_EXPIRED, METHOD_NOT_FOUND, SERVER_ERROR};
    use crate::testing::{MockExecutor, PanickingExecutor};
    use jiaban_core::{TaskError, TaskOutcome};
    use serde_json::json;
    use std::sync::atomic::Ordering;

    fn server(executor: Arc<MockExecutor>) -> McpServer {
        McpServer::with_version(executor, "0.1.0-test")
    }

    fn lines(input: &[Value]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for message in input {
            bytes.extend(serde_json::to_vec(message).unwrap());
            bytes.push(b'\n');
        }
        bytes
    }

    async fn run(server: &McpServer, input: &[u8]) -> (ServeExit, Vec<Value>) {
        let mut output = Vec::new();
        let exit = server.serve(input, &mut output).await.unwrap();
        let responses = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (exit, responses)
    }

    fn reply(outcome: LineOutcome) -> Value {
        match outcome {
            LineOutcome::Continue(Some(response)) => serde_json::to_value(response).unwrap(),
            other => panic!("Expected a reply, got {:?}", other),
        }
    }

    fn tool_text(response: &Value) -> Value {
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_echoes_protocol_version() {
        let executor = Arc::new(MockExecutor::new());
        let server = server(executor.clone());

        let response = reply(
            server
                .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"t","version":"0"}}}"#)
                .await,
        );

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(response["result"]["serverInfo"]["version"], "0.1.0-test");
        assert_eq!(response["result"]["capabilities"], json!({"tools": {}}));
        assert_eq!(executor.health_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_initialize_defaults_protocol_version() {
        let server = server(Arc::new(MockExecutor::new()));
        let response = reply(server.handle_line(r#"{"id":1,"method":"initialize"}"#).await);

        assert_eq!(response["result"]["protocolVersion"], DEFAULT_PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_initialize_survives_health_check_failure() {
        let executor = Arc::new(
            MockExecutor::new().with_health(Err(TaskError::Upstream("connection refused".into()))),
        );
        let response = reply(
            server(executor)
                .handle_line(r#"{"id":1,"method":"initialize"}"#)
                .await,
        );

        assert!(response.get("result").is_some());
    }

    #[tokio::test]
    async fn test_initialize_survives_failed_token_check() {
        let executor = Arc::new(MockExecutor::new().with_health(Ok(false)));
        let response = reply(
            server(executor)
                .handle_line(r#"{"id":1,"method":"initialize"}"#)
                .await,
        );

        assert!(response.get("result").is_some());
    }

    #[tokio::test]
    async fn test_initialize_auth_expired_is_fatal() {
        let executor =
            Arc::new(MockExecutor::new().with_health(Err(MockExecutor::auth_expired())));
        let outcome = server(executor)
            .handle_line(r#"{"id":1,"method":"initialize"}"#)
            .await;

        match outcome {
            LineOutcome::Shutdown(Some(response)) => {
                assert_eq!(response.error.unwrap().code, AUTH_EXPIRED);
            }
            other => panic!("Expected shutdown, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = server(Arc::new(MockExecutor::new()));
        let response = reply(server.handle_line(r#"{"id":"list","method":"tools/list"}"#).await);

        let tools = response["result"]["tools"].as_array().unwrap();
        let submit = tools
            .iter()
            .find(|tool| tool["name"] == "overtime.submit")
            .unwrap();
        assert_eq!(submit["inputSchema"]["required"], json!(["date"]));
        assert!(submit["inputSchema"]["properties"]["content"].is_object());

        let daily = tools.iter().find(|tool| tool["name"] == "daily.get").unwrap();
        assert_eq!(daily["inputSchema"]["required"], json!(["date"]));
        assert!(daily["description"].as_str().unwrap().len() > 10);
    }

    #[tokio::test]
    async fn test_overtime_submit_success() {
        let executor = Arc::new(MockExecutor::new());
        let server = server(executor.clone());

        let response = reply(
            server
                .handle_line(r#"{"id":3,"method":"tools/call","params":{"name":"overtime.submit","arguments":{"date":"2026-01-07","content":"simulated submit"}}}"#)
                .await,
        );

        assert_eq!(response["id"], 3);
        assert_eq!(response["result"]["content"][0]["type"], "text");
        assert_eq!(tool_text(&response)["task_status"], "success");
        assert_eq!(
            *executor.last_submit.lock().unwrap(),
            Some(("2026-01-07".to_string(), Some("simulated submit".to_string())))
        );
    }

    #[tokio::test]
    async fn test_overtime_submit_forwards_content_verbatim() {
        let executor = Arc::new(MockExecutor::new());
        let server = server(executor.clone());

        server
            .handle_line(r#"{"id":3,"method":"tools/call","params":{"name":"overtime.submit","arguments":{"date":"2026-01-07","content":"  padded  "}}}"#)
            .await;

        assert_eq!(
            *executor.last_submit.lock().unwrap(),
            Some(("2026-01-07".to_string(), Some("  padded  ".to_string())))
        );
    }

    #[tokio::test]
    async fn test_overtime_submit_without_content() {
        let executor = Arc::new(MockExecutor::new());
        let server = server(executor.clone());

        server
            .handle_line(r#"{"id":3,"method":"tools/call","params":{"name":"overtime.submit","arguments":{"date":"2026-01-07"}}}"#)
            .await;

        assert_eq!(
            *executor.last_submit.lock().unwrap(),
            Some(("2026-01-07".to_string(), None))
        );
    }

    #[tokio::test]
    async fn test_skipped_outcome_is_a_successful_call() {
        let executor = Arc::new(MockExecutor::new().with_submit(Ok(TaskOutcome::skipped(
            Some(409),
            json!({"existing": 1}),
            "already submitted",
        ))));
        let response = reply(
            server(executor)
                .handle_line(r#"{"id":4,"method":"tools/call","params":{"name":"overtime.submit","arguments":{"date":"2026-01-07"}}}"#)
                .await,
        );

        assert!(response.get("error").is_none());
        let record = tool_text(&response);
        assert_eq!(record["task_status"], "skipped");
        assert_eq!(record["message"], "already submitted");
    }

    #[tokio::test]
    async fn test_daily_get() {
        let executor = Arc::new(MockExecutor::new());
        let server = server(executor.clone());

        let response = reply(
            server
                .handle_line(r#"{"id":5,"method":"tools/call","params":{"name":"daily.get","arguments":{"date":"2026-01-07"}}}"#)
                .await,
        );

        let record = tool_text(&response);
        assert_eq!(record["task_status"], "success");
        assert_eq!(record["data"]["content"], "daily notes");
        assert_eq!(executor.report_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let server = server(Arc::new(MockExecutor::new()));
        let response = reply(
            server
                .handle_line(r#"{"id":6,"method":"tools/call","params":{"name":"overtime.delete","arguments":{}}}"#)
                .await,
        );

        assert_eq!(response["id"], 6);
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_tool_name_is_unknown_tool() {
        let server = server(Arc::new(MockExecutor::new()));
        let response = reply(server.handle_line(r#"{"id":6,"method":"tools/call"}"#).await);

        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_method_echoes_id() {
        let server = server(Arc::new(MockExecutor::new()));
        let response = reply(server.handle_line(r#"{"id":"abc","method":"resources/list"}"#).await);

        assert_eq!(response["id"], "abc");
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_method_is_unknown_method() {
        let server = server(Arc::new(MockExecutor::new()));
        let response = reply(server.handle_line(r#"{"id":9}"#).await);

        assert_eq!(response["id"], 9);
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_date_is_server_error() {
        let executor = Arc::new(MockExecutor::new());
        let server = server(executor.clone());

        let response = reply(
            server
                .handle_line(r#"{"id":7,"method":"tools/call","params":{"name":"overtime.submit","arguments":{"date":"2026/01/07"}}}"#)
                .await,
        );

        assert_eq!(response["error"]["code"], SERVER_ERROR);
        assert!(response["error"]["message"].as_str().unwrap().contains("YYYY-MM-DD"));
        assert_eq!(executor.submits(), 0);
    }

    #[tokio::test]
    async fn test_missing_date_is_server_error() {
        let server = server(Arc::new(MockExecutor::new()));
        let response = reply(
            server
                .handle_line(r#"{"id":8,"method":"tools/call","params":{"name":"daily.get"}}"#)
                .await,
        );

        assert_eq!(response["error"]["code"], SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_executor_failure_is_server_error() {
        let executor = Arc::new(
            MockExecutor::new().with_submit(Err(TaskError::Upstream("connection reset".into()))),
        );
        let response = reply(
            server(executor)
                .handle_line(r#"{"id":10,"method":"tools/call","params":{"name":"overtime.submit","arguments":{"date":"2026-01-07"}}}"#)
                .await,
        );

        assert_eq!(response["error"]["code"], SERVER_ERROR);
        assert!(response["error"]["message"]
            .as_str()
            .unwrap()
            .contains("connection reset"));
    }

    #[tokio::test]
    async fn test_blank_and_malformed_lines_are_skipped() {
        let server = server(Arc::new(MockExecutor::new()));

        assert_eq!(server.handle_line("").await, LineOutcome::Skipped);
        assert_eq!(server.handle_line("   \t").await, LineOutcome::Skipped);
        assert_eq!(server.handle_line("{not json").await, LineOutcome::Skipped);
        assert_eq!(server.handle_line("[1,2]").await, LineOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_notification_has_side_effect_but_no_reply() {
        let executor = Arc::new(MockExecutor::new());
        let server = server(executor.clone());

        let outcome = server
            .handle_line(r#"{"method":"tools/call","params":{"name":"overtime.submit","arguments":{"date":"2026-01-07"}}}"#)
            .await;

        assert_eq!(outcome, LineOutcome::Continue(None));
        assert_eq!(executor.submits(), 1);
    }

    #[tokio::test]
    async fn test_serve_answers_in_order() {
        let server = server(Arc::new(MockExecutor::new()));
        let input = lines(&[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {"name": "overtime.submit", "arguments": {"date": "2026-01-07"}}}),
        ]);

        let (exit, responses) = run(&server, &input).await;

        assert_eq!(exit, ServeExit::EndOfInput);
        let ids: Vec<&Value> = responses.iter().map(|r| &r["id"]).collect();
        assert_eq!(ids, vec![&json!(1), &json!(2), &json!(3)]);
    }

    #[tokio::test]
    async fn test_serve_skips_noise_and_notifications() {
        let server = server(Arc::new(MockExecutor::new()));
        let mut input = b"\n   \ngarbage line\n".to_vec();
        input.extend([0xff, 0xfe, b'\n']);
        input.extend(lines(&[
            json!({"method": "tools/list"}),
            json!({"id": 42, "method": "tools/list"}),
        ]));

        let (exit, responses) = run(&server, &input).await;

        assert_eq!(exit, ServeExit::EndOfInput);
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 42);
    }

    #[tokio::test]
    async fn test_serve_handles_last_line_without_newline() {
        let server = server(Arc::new(MockExecutor::new()));
        let (_, responses) = run(&server, br#"{"id":1,"method":"tools/list"}"#).await;

        assert_eq!(responses.len(), 1);
    }

    #[tokio::test]
    async fn test_serve_continues_after_errors() {
        let executor = Arc::new(
            MockExecutor::new().with_report(Err(TaskError::Upstream("timeout".into()))),
        );
        let server = server(executor);
        let input = lines(&[
            json!({"id": 1, "method": "bogus"}),
            json!({"id": 2, "method": "tools/call", "params": {"name": "daily.get", "arguments": {"date": "2026-01-07"}}}),
            json!({"id": 3, "method": "tools/list"}),
        ]);

        let (exit, responses) = run(&server, &input).await;

        assert_eq!(exit, ServeExit::EndOfInput);
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(responses[1]["error"]["code"], SERVER_ERROR);
        assert!(responses[2].get("result").is_some());
    }

    #[tokio::test]
    async fn test_serve_stops_after_auth_expired() {
        let executor =
            Arc::new(MockExecutor::new().with_submit(Err(MockExecutor::auth_expired())));
        let server = server(executor.clone());
        let input = lines(&[
            json!({"id": 1, "method": "tools/list"}),
            json!({"id": 2, "method": "tools/call", "params": {"name": "overtime.submit", "arguments": {"date": "2026-01-07"}}}),
            json!({"id": 3, "method": "tools/call", "params": {"name": "overtime.submit", "arguments": {"date": "2026-01-08"}}}),
            json!({"id": 4, "method": "tools/list"}),
        ]);

        let (exit, responses) = run(&server, &input).await;

        assert_eq!(exit, ServeExit::AuthExpired);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["error"]["code"], AUTH_EXPIRED);
        assert_eq!(executor.submits(), 1);
    }

    #[tokio::test]
    async fn test_auth_expired_notification_stops_silently() {
        let executor =
            Arc::new(MockExecutor::new().with_submit(Err(MockExecutor::auth_expired())));
        let server = server(executor);
        let input = lines(&[
            json!({"method": "tools/call", "params": {"name": "overtime.submit", "arguments": {"date": "2026-01-07"}}}),
            json!({"id": 2, "method": "tools/list"}),
        ]);

        let (exit, responses) = run(&server, &input).await;

        assert_eq!(exit, ServeExit::AuthExpired);
        assert!(responses.is_empty());
    }

    #[tokio::test]
    async fn test_executor_panic_fails_only_that_request() {
        let server = McpServer::with_version(Arc::new(PanickingExecutor), "0.1.0-test");
        let input = lines(&[
            json!({"id": 1, "method": "initialize"}),
            json!({"id": 2, "method": "tools/call", "params": {"name": "overtime.submit", "arguments": {"date": "2026-01-07"}}}),
            json!({"id": 3, "method": "tools/call", "params": {"name": "daily.get", "arguments": {"date": "2026-01-07"}}}),
            json!({"id": 4, "method": "tools/list"}),
        ]);

        let (exit, responses) = run(&server, &input).await;

        assert_eq!(exit, ServeExit::EndOfInput);
        assert_eq!(responses.len(), 4);
        assert!(responses[0].get("result").is_some());
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["error"]["code"], SERVER_ERROR);
        assert_eq!(responses[2]["error"]["code"], SERVER_ERROR);
        assert!(responses[3]["result"]["tools"].is_array());
    }
}
