use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub use models::tutorial::NewTutorial;

/// Persisted tutorial record.
pub type Tutorial = models::tutorial::Model;

pub const MSG_CREATED: &str = "tutorial created successfully";
pub const MSG_DELETED: &str = "tutorial deleted successfully";
pub const MSG_INTERNAL: &str = "internal server error";

/// Uniform result of the result-bearing operations (create, delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub success: bool,
    pub message: String,
    /// Id of the record created, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl OperationOutcome {
    pub fn created(id: i32) -> Self {
        Self { success: true, message: MSG_CREATED.into(), id: Some(id) }
    }

    pub fn deleted() -> Self {
        Self { success: true, message: MSG_DELETED.into(), id: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), id: None }
    }

    pub fn internal_error() -> Self { Self::failure(MSG_INTERNAL) }
}

/// Direction for rating-ordered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingOrder {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl FromStr for RatingOrder {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(RatingOrder::Ascending),
            "desc" | "descending" => Ok(RatingOrder::Descending),
            other => Err(ServiceError::Validation(format!(
                "unknown rating order `{other}` (expected ascending or descending)"
            ))),
        }
    }
}

/// How a store failure reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Logged and folded into a failed [`OperationOutcome`].
    Report,
    /// Logged and raised as [`ServiceError::Internal`].
    Raise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialOperation {
    Create,
    Delete,
    List,
    Get,
    Filter,
    Search,
}

impl TutorialOperation {
    pub fn policy(self) -> ErrorPolicy {
        match self {
            TutorialOperation::Create | TutorialOperation::Delete => ErrorPolicy::Report,
            TutorialOperation::List
            | TutorialOperation::Get
            | TutorialOperation::Filter
            | TutorialOperation::Search => ErrorPolicy::Raise,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TutorialOperation::Create => "create",
            TutorialOperation::Delete => "delete",
            TutorialOperation::List => "list",
            TutorialOperation::Get => "get",
            TutorialOperation::Filter => "filter",
            TutorialOperation::Search => "search",
        }
    }
}

impl fmt::Display for TutorialOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_order_parses_short_and_long_forms() {
        assert_eq!("asc".parse::<RatingOrder>().unwrap(), RatingOrder::Ascending);
        assert_eq!("Descending".parse::<RatingOrder>().unwrap(), RatingOrder::Descending);
        assert!(matches!("sideways".parse::<RatingOrder>(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn rating_order_serde_accepts_aliases() {
        let order: RatingOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, RatingOrder::Descending);
        assert_eq!(serde_json::to_string(&RatingOrder::Ascending).unwrap(), "\"ascending\"");
    }

    #[test]
    fn write_operations_report_and_reads_raise() {
        assert_eq!(TutorialOperation::Create.policy(), ErrorPolicy::Report);
        assert_eq!(TutorialOperation::Delete.policy(), ErrorPolicy::Report);
        for op in [
            TutorialOperation::List,
            TutorialOperation::Get,
            TutorialOperation::Filter,
            TutorialOperation::Search,
        ] {
            assert_eq!(op.policy(), ErrorPolicy::Raise, "{op}");
        }
    }

    #[test]
    fn outcome_omits_missing_id_when_serialized() {
        let json = serde_json::to_value(OperationOutcome::deleted()).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "message": MSG_DELETED}));
        let json = serde_json::to_value(OperationOutcome::created(7)).unwrap();
        assert_eq!(json["id"], 7);
    }
}
