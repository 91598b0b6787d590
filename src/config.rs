use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default timeout for tool operations (30 seconds).
const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory the specification lookup starts from.
    pub spec_root: PathBuf,
    pub tool_timeout: Duration,
}

impl ServerConfig {
    /// Configuration with an explicit lookup root and default timeout.
    pub fn new(spec_root: impl Into<PathBuf>) -> Self {
        Self {
            spec_root: spec_root.into(),
            tool_timeout: Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment.
    ///
    /// - `ACL_SPEC_ROOT` (optional) — directory to start the `ACL.md` search
    ///   from; defaults to the directory holding the running executable, so
    ///   the host's working directory never matters
    /// - `ACL_TOOL_TIMEOUT_SECS` (optional, default 30) — max seconds per
    ///   specification load
    pub fn from_env() -> Result<Self, String> {
        let spec_root = match std::env::var_os("ACL_SPEC_ROOT") {
            Some(val) if !val.is_empty() => PathBuf::from(val),
            _ => install_dir()?,
        };

        let tool_timeout_secs = match std::env::var("ACL_TOOL_TIMEOUT_SECS") {
            Ok(val) => match val.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err("ACL_TOOL_TIMEOUT_SECS must be a positive integer".to_string()),
            },
            Err(_) => DEFAULT_TOOL_TIMEOUT_SECS,
        };

        Ok(Self {
            spec_root,
            tool_timeout: Duration::from_secs(tool_timeout_secs),
        })
    }
}

/// Directory containing the running executable.
fn install_dir() -> Result<PathBuf, String> {
    let exe = std::env::current_exe()
        .map_err(|e| format!("cannot determine executable location: {e}"))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| format!("executable path has no parent: {}", exe.display()))
}
