//! Construction and credential resolution tests.
//!
//! Cargo runs tests in parallel, so every test that touches the
//! `POE_API_KEY` variable serializes behind `ENV_LOCK`.

use poe_client::{API_KEY_VAR, DEFAULT_BASE_URL, PoeClient};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn set_key(value: &str) {
    unsafe { std::env::set_var(API_KEY_VAR, value) };
}

fn clear_key() {
    unsafe { std::env::remove_var(API_KEY_VAR) };
}

#[test]
fn from_env_without_key_fails() {
    let _guard = lock_env();
    clear_key();

    let err = PoeClient::from_env().expect_err("Construction must fail without a key");
    assert!(err.message.contains(API_KEY_VAR));
}

#[test]
fn from_env_with_empty_key_fails() {
    let _guard = lock_env();
    set_key("");

    let err = PoeClient::from_env().expect_err("Empty key is not a credential");
    assert!(err.message.contains(API_KEY_VAR));

    clear_key();
}

#[test]
fn explicit_key_sets_bearer_header() {
    let client = PoeClient::new("test_api_key_123").expect("Valid client");

    assert_eq!(
        client.headers().get(AUTHORIZATION).expect("Auth header set"),
        "Bearer test_api_key_123"
    );
    assert_eq!(
        client
            .headers()
            .get(CONTENT_TYPE)
            .expect("Content type set"),
        "application/json"
    );
}

#[test]
fn explicit_key_takes_precedence_over_env() {
    let _guard = lock_env();
    set_key("env_key_should_lose");

    let client = PoeClient::new("explicit_key_wins").expect("Valid client");
    assert_eq!(
        client.headers().get(AUTHORIZATION).expect("Auth header set"),
        "Bearer explicit_key_wins"
    );

    clear_key();
}

#[test]
fn from_env_reads_key() {
    let _guard = lock_env();
    set_key("env_test_key_456");

    let client = PoeClient::from_env().expect("Valid client from environment");
    assert_eq!(
        client.headers().get(AUTHORIZATION).expect("Auth header set"),
        "Bearer env_test_key_456"
    );

    clear_key();
}

#[test]
fn empty_explicit_key_fails() {
    let err = PoeClient::new("").expect_err("Empty key is not a credential");
    assert!(err.message.contains(API_KEY_VAR));
}

#[test]
fn base_url_defaults_to_production() {
    let client = PoeClient::new("test_key").expect("Valid client");
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn base_url_override_trims_trailing_slash() {
    let client = PoeClient::new("test_key")
        .expect("Valid client")
        .with_base_url("http://localhost:1234/");
    assert_eq!(client.base_url(), "http://localhost:1234");
}
