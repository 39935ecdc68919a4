// Server version resolution: ordered fallbacks, resolved once per process

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const UNKNOWN_VERSION: &str = "Unknown";

/// A single way of finding the version. Returns `None` instead of failing.
pub type VersionProvider = fn() -> Option<String>;

const DEFAULT_PROVIDERS: &[VersionProvider] = &[from_package_metadata, from_manifest_file];

/// Version reported in `serverInfo`, cached for the process lifetime
pub fn server_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| resolve_with(DEFAULT_PROVIDERS))
}

/// First version any provider yields, or [`UNKNOWN_VERSION`]
pub fn resolve_with(providers: &[VersionProvider]) -> String {
    providers
        .iter()
        .find_map(|provider| provider())
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
}

fn from_package_metadata() -> Option<String> {
    option_env!("CARGO_PKG_VERSION")
        .filter(|version| !version.is_empty())
        .map(str::to_string)
}

fn from_manifest_file() -> Option<String> {
    manifest_candidates()
        .iter()
        .find_map(|path| manifest_version(path))
}

fn manifest_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join("Cargo.toml"));
    }
    if let Ok(dir) = std::env::current_dir() {
        candidates.push(dir.join("Cargo.toml"));
    }
    candidates
}

/// Read `package.version` (or `workspace.package.version`) from a Cargo manifest
pub fn manifest_version(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let manifest: toml::Value = toml::from_str(&content).ok()?;

    let package_version = manifest
        .get("package")
        .and_then(|package| package.get("version"))
        .and_then(|version| version.as_str());
    let workspace_version = manifest
        .get("workspace")
        .and_then(|workspace| workspace.get("package"))
        .and_then(|package| package.get("version"))
        .and_then(|version| version.as_str());

    package_version.or(workspace_version).map(str::to_string)
}
