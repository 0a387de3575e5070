//! Tests for status-to-verdict mapping.

use serde_json::json;
use verdict::homework::{parse_status, HomeworkError, HomeworkStatus};

#[test]
fn describes_every_known_status() {
    for status in HomeworkStatus::ALL {
        let item = json!({"homework_name": "sprint_7", "status": status.code()});
        let text = parse_status(&item).expect("known status");
        assert_eq!(
            text,
            format!(
                "Status changed for submission \"sprint_7\". {}",
                status.verdict()
            )
        );
    }
}

#[test]
fn approved_message_matches_expected_text() {
    let item = json!({"homework_name": "task1", "status": "approved"});
    assert_eq!(
        parse_status(&item).expect("approved"),
        "Status changed for submission \"task1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn verdict_table_is_fixed() {
    assert_eq!(
        HomeworkStatus::Reviewing.verdict(),
        "Работа взята на проверку ревьюером."
    );
    assert_eq!(
        HomeworkStatus::Rejected.verdict(),
        "Работа проверена: у ревьюера есть замечания."
    );
}

#[test]
fn missing_name_is_rejected() {
    let item = json!({"status": "approved"});
    assert_eq!(
        parse_status(&item),
        Err(HomeworkError::MissingField("homework_name"))
    );
}

#[test]
fn null_name_is_rejected() {
    let item = json!({"homework_name": null, "status": "approved"});
    assert_eq!(
        parse_status(&item),
        Err(HomeworkError::MissingField("homework_name"))
    );
}

#[test]
fn missing_or_null_status_is_rejected() {
    for item in [
        json!({"homework_name": "task1"}),
        json!({"homework_name": "task1", "status": null}),
        json!({"homework_name": "task1", "status": 3}),
    ] {
        assert_eq!(
            parse_status(&item),
            Err(HomeworkError::MissingField("status")),
            "item {item}"
        );
    }
}

#[test]
fn unknown_status_is_rejected() {
    for code in ["", "pending", "APPROVED", "approved "] {
        let item = json!({"homework_name": "task1", "status": code});
        assert_eq!(
            parse_status(&item),
            Err(HomeworkError::UnknownStatus(code.to_owned())),
            "code {code:?}"
        );
    }
}

#[test]
fn non_object_item_is_rejected() {
    assert_eq!(
        parse_status(&json!("task1")),
        Err(HomeworkError::MissingField("homework_name"))
    );
}
