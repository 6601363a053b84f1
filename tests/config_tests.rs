use std::env;
use std::sync::Mutex;
use tz_time_service::config::{Config, DEFAULT_SERVER_TZ};

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HTTP_PORT", "8080");
    env::set_var("SERVER_TZ", "Asia/Bangkok");

    let config = Config::from_env().unwrap();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.server_tz.to_string(), "Asia/Bangkok");

    // Clean up
    env::remove_var("HTTP_PORT");
    env::remove_var("SERVER_TZ");
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::remove_var("HTTP_PORT");
    env::remove_var("SERVER_TZ");

    let config = Config::from_env().unwrap();

    assert_eq!(config.http_port, 1337);
    assert_eq!(config.server_tz.to_string(), DEFAULT_SERVER_TZ);
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    // Clean up
    env::remove_var("HTTP_PORT");
}

#[test]
fn test_config_invalid_server_tz() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("SERVER_TZ", "Not/AZone");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid SERVER_TZ"));

    // Clean up
    env::remove_var("SERVER_TZ");
}

#[test]
fn test_config_empty_server_tz_uses_default() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("SERVER_TZ", "");

    let config = Config::from_env().unwrap();
    assert_eq!(config.server_tz.to_string(), DEFAULT_SERVER_TZ);

    // Clean up
    env::remove_var("SERVER_TZ");
}

#[test]
fn test_config_whitespace_handling() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HTTP_PORT", "  3000  ");
    env::set_var("SERVER_TZ", "  UTC  ");

    let config = Config::from_env().unwrap();

    assert_eq!(config.http_port, 3000);
    assert_eq!(config.server_tz.to_string(), "UTC");

    // Clean up
    env::remove_var("HTTP_PORT");
    env::remove_var("SERVER_TZ");
}

#[test]
fn test_config_port_edge_cases() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    // Test port 0
    env::set_var("HTTP_PORT", "0");
    let config = Config::from_env().unwrap();
    assert_eq!(config.http_port, 0);

    // Test max port
    env::set_var("HTTP_PORT", "65535");
    let config = Config::from_env().unwrap();
    assert_eq!(config.http_port, 65535);

    // Test negative port (should fail)
    env::set_var("HTTP_PORT", "-1");
    let result = Config::from_env();
    assert!(result.is_err());

    // Clean up
    env::remove_var("HTTP_PORT");
}
