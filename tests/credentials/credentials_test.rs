//! Tests for credential validation.

use std::collections::BTreeMap;

use verdict::credentials::{
    missing_credentials, Credentials, CredentialsError, CHAT_ID, PRACTICUM_TOKEN, TELEGRAM_TOKEN,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn complete() -> Vec<(&'static str, &'static str)> {
    vec![
        (PRACTICUM_TOKEN, "practicum-secret"),
        (TELEGRAM_TOKEN, "123:telegram-secret"),
        (CHAT_ID, "42"),
    ]
}

#[test]
fn all_present_means_nothing_missing() {
    assert!(missing_credentials(&lookup(&complete())).is_empty());
}

#[test]
fn reports_every_missing_name_in_order() {
    let missing = missing_credentials(&lookup(&[]));
    assert_eq!(missing, vec![PRACTICUM_TOKEN, TELEGRAM_TOKEN, CHAT_ID]);
}

#[test]
fn blank_values_count_as_missing() {
    let mut pairs = complete();
    pairs[1] = (TELEGRAM_TOKEN, "   ");
    pairs[2] = (CHAT_ID, "");
    assert_eq!(
        missing_credentials(&lookup(&pairs)),
        vec![TELEGRAM_TOKEN, CHAT_ID]
    );
}

#[test]
fn from_lookup_builds_credentials() {
    let credentials = Credentials::from_lookup(lookup(&complete())).expect("complete");
    assert_eq!(credentials.practicum_token, "practicum-secret");
    assert_eq!(credentials.telegram_token, "123:telegram-secret");
    assert_eq!(credentials.chat_id, "42");
}

#[test]
fn missing_chat_id_is_an_error() {
    let pairs: Vec<_> = complete()
        .into_iter()
        .filter(|(k, _)| *k != CHAT_ID)
        .collect();
    let err = Credentials::from_lookup(lookup(&pairs)).expect_err("chat id missing");
    assert_eq!(err, CredentialsError::Missing(vec![CHAT_ID]));
    assert_eq!(
        err.to_string(),
        "missing required environment variables: CHAT_ID"
    );
}

#[test]
fn debug_output_redacts_tokens() {
    let credentials = Credentials::from_lookup(lookup(&complete())).expect("complete");
    let debug = format!("{credentials:?}");
    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("practicum-secret"));
    assert!(!debug.contains("telegram-secret"));
}
