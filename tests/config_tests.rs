//! Environment-driven configuration.
//!
//! Kept in one test function: environment variables are process-wide.

use std::path::PathBuf;
use std::time::Duration;

use acl_mcp_server::config::ServerConfig;

#[test]
fn from_env_reads_overrides_and_defaults() {
    std::env::remove_var("ACL_SPEC_ROOT");
    std::env::remove_var("ACL_TOOL_TIMEOUT_SECS");

    let defaults = ServerConfig::from_env().unwrap();
    let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
    assert_eq!(defaults.spec_root, exe_dir, "default root is the executable's directory");
    assert_eq!(defaults.tool_timeout, Duration::from_secs(30));

    std::env::set_var("ACL_SPEC_ROOT", "/srv/acl");
    std::env::set_var("ACL_TOOL_TIMEOUT_SECS", "5");
    let overridden = ServerConfig::from_env().unwrap();
    assert_eq!(overridden.spec_root, PathBuf::from("/srv/acl"));
    assert_eq!(overridden.tool_timeout, Duration::from_secs(5));

    for bad in ["0", "-1", "soon"] {
        std::env::set_var("ACL_TOOL_TIMEOUT_SECS", bad);
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.contains("ACL_TOOL_TIMEOUT_SECS"), "{bad} should be rejected");
    }

    std::env::remove_var("ACL_SPEC_ROOT");
    std::env::remove_var("ACL_TOOL_TIMEOUT_SECS");
}

#[test]
fn new_uses_default_timeout() {
    let config = ServerConfig::new("/opt/acl/bin");
    assert_eq!(config.spec_root, PathBuf::from("/opt/acl/bin"));
    assert_eq!(config.tool_timeout, Duration::from_secs(30));
}
