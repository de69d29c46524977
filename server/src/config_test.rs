use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DID_BACKEND_URL");
        std::env::remove_var("DATAVERSE_URL");
        std::env::remove_var("DATAVERSE_API_TOKEN");
        std::env::remove_var("UPSTREAM_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("UPSTREAM_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults_leave_upstreams_unset() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.did_backend_url.is_none());
    assert!(cfg.dataverse.is_none());
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts {
            request_secs: DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_env_parses_overrides_and_trims_slashes() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("DID_BACKEND_URL", "http://backend.test:3001/");
        std::env::set_var("DATAVERSE_URL", "https://demo.dataverse.org//");
        std::env::set_var("DATAVERSE_API_TOKEN", "token-123");
        std::env::set_var("UPSTREAM_REQUEST_TIMEOUT_SECS", "12");
        std::env::set_var("UPSTREAM_CONNECT_TIMEOUT_SECS", "3");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.did_backend_url.as_deref(), Some("http://backend.test:3001"));
    assert_eq!(
        cfg.dataverse,
        Some(DataverseConfig {
            base_url: "https://demo.dataverse.org".into(),
            api_token: Some("token-123".into()),
        })
    );
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 12, connect_secs: 3 });

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("eighty"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_bad_timeouts_fall_back() {
    unsafe {
        clear_server_env();
        std::env::set_var("UPSTREAM_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS);

    unsafe { clear_server_env() };
}

#[test]
fn blank_values_are_treated_as_unset() {
    unsafe {
        clear_server_env();
        std::env::set_var("DID_BACKEND_URL", "  ");
        std::env::set_var("DATAVERSE_URL", "https://demo.dataverse.org");
        std::env::set_var("DATAVERSE_API_TOKEN", "");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert!(cfg.did_backend_url.is_none());
    assert_eq!(cfg.dataverse.and_then(|d| d.api_token), None);

    unsafe { clear_server_env() };
}
