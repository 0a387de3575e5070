//! Tests for response shape validation.

use serde_json::json;
use verdict::homework::{check_response, HomeworkError};

#[test]
fn accepts_object_with_homeworks_array() {
    let response = json!({
        "homeworks": [{"homework_name": "task1", "status": "approved"}],
        "current_date": 1_700_000_000
    });
    let homeworks = check_response(&response).expect("valid response");
    assert_eq!(homeworks.len(), 1);
    assert_eq!(homeworks[0]["homework_name"], "task1");
}

#[test]
fn accepts_empty_homeworks_array() {
    let response = json!({"homeworks": []});
    let homeworks = check_response(&response).expect("valid response");
    assert!(homeworks.is_empty());
}

#[test]
fn rejects_non_object_responses() {
    for response in [
        json!([{"homeworks": []}]),
        json!("homeworks"),
        json!(42),
        json!(null),
    ] {
        let result = check_response(&response);
        assert!(
            matches!(result, Err(HomeworkError::Shape(_))),
            "expected shape error for {response}"
        );
    }
}

#[test]
fn rejects_missing_homeworks_key() {
    let response = json!({"current_date": 1_700_000_000});
    let err = check_response(&response).expect_err("missing key");
    assert!(matches!(err, HomeworkError::Shape(ref msg) if msg.contains("homeworks")));
}

#[test]
fn rejects_non_array_homeworks() {
    for homeworks in [
        json!({"homework_name": "task1"}),
        json!("task1"),
        json!(null),
        json!(7),
    ] {
        let response = json!({ "homeworks": homeworks });
        assert!(
            matches!(check_response(&response), Err(HomeworkError::Shape(_))),
            "expected shape error for {response}"
        );
    }
}
