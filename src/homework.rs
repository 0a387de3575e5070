//! Homework response validation and status-to-verdict mapping.
//!
//! The status API answers with loosely typed JSON, so both checks work on
//! [`serde_json::Value`] and reject anything that does not have the expected
//! shape instead of skipping it.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

/// Key holding the list of homework submissions in an API response.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the submission name in a work item.
pub const NAME_KEY: &str = "homework_name";

/// Key holding the review status code in a work item.
pub const STATUS_KEY: &str = "status";

/// Errors raised while validating a response or describing a work item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HomeworkError {
    /// The response does not have the expected structure.
    #[error("unexpected API response shape: {0}")]
    Shape(String),
    /// A work item lacks a required string field.
    #[error("work item is missing field '{0}'")]
    MissingField(&'static str),
    /// A work item carries a status code outside the known set.
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),
}

/// Review status of a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// The reviewer accepted the work.
    Approved,
    /// The work is being reviewed.
    Reviewing,
    /// The reviewer left remarks.
    Rejected,
}

impl HomeworkStatus {
    /// Every recognized status, in table order.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Wire code used by the API.
    pub fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HomeworkStatus {
    type Err = HomeworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| HomeworkError::UnknownStatus(s.to_owned()))
    }
}

/// Check that a decoded API response can be indexed.
///
/// Returns the `homeworks` list on success. Order is newest first, so the
/// first element is the one that matters.
///
/// # Errors
///
/// Returns [`HomeworkError::Shape`] if the response is not an object, has no
/// `homeworks` key, or `homeworks` is not an array.
pub fn check_response(response: &Value) -> Result<&[Value], HomeworkError> {
    let object = response
        .as_object()
        .ok_or_else(|| HomeworkError::Shape("response must be a JSON object".to_owned()))?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| HomeworkError::Shape(format!("response has no '{HOMEWORKS_KEY}' key")))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| HomeworkError::Shape(format!("'{HOMEWORKS_KEY}' must be an array")))
}

/// Build the notification text for a single work item.
///
/// # Errors
///
/// Returns [`HomeworkError::MissingField`] if `homework_name` or `status` is
/// absent, null or not a string, and [`HomeworkError::UnknownStatus`] if the
/// status code is not recognized.
pub fn parse_status(homework: &Value) -> Result<String, HomeworkError> {
    let name = string_field(homework, NAME_KEY)?;
    let status: HomeworkStatus = string_field(homework, STATUS_KEY)?.parse()?;

    Ok(format!(
        "Status changed for submission \"{name}\". {}",
        status.verdict()
    ))
}

fn string_field<'a>(homework: &'a Value, key: &'static str) -> Result<&'a str, HomeworkError> {
    homework
        .get(key)
        .and_then(Value::as_str)
        .ok_or(HomeworkError::MissingField(key))
}
