use super::*;

/// # Safety
/// Every test touching these variables clears them first and last; the
/// variables are not read anywhere else in the test binary.
unsafe fn clear_client_env() {
    unsafe {
        std::env::remove_var("CHAOS_API_URL");
        std::env::remove_var("CHAOS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("CHAOS_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn new_trims_trailing_slash_and_uses_default_timeouts() {
    let cfg = ClientConfig::new("http://backend.test/api/");
    assert_eq!(cfg.base_url, "http://backend.test/api");
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
}

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ClientConfig::default().base_url, DEFAULT_API_URL);
}

#[test]
fn with_base_url_keeps_timeouts() {
    let cfg = ClientConfig {
        request_timeout: Duration::from_secs(1),
        ..ClientConfig::default()
    }
    .with_base_url("/api/");
    assert_eq!(cfg.base_url, "/api");
    assert_eq!(cfg.request_timeout, Duration::from_secs(1));
}

#[test]
fn from_env_reads_overrides_and_ignores_garbage() {
    unsafe {
        clear_client_env();
        std::env::set_var("CHAOS_API_URL", "https://chaos.example/api/");
        std::env::set_var("CHAOS_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("CHAOS_CONNECT_TIMEOUT_SECS", "soon");
    }

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.base_url, "https://chaos.example/api");
    assert_eq!(cfg.request_timeout, Duration::from_secs(42));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

    unsafe { clear_client_env() };
}

#[test]
fn env_parse_rejects_zero() {
    let key = "__TEST_CHAOS_ZERO_TIMEOUT_311__";
    unsafe { std::env::set_var(key, "0") };
    assert_eq!(env_parse_u64(key, 9), 9);
    unsafe { std::env::remove_var(key) };
}
