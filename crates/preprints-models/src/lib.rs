#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared record types for the preprints moderation front-end.
//!
//! These are the records the external data layer hands to the UI: preprints,
//! their provider, files, and moderator review actions. Every relation is
//! optional so that partially loaded records degrade to defaults instead of
//! failing to decode.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission granted to preprint administrators on the backing node.
pub const ADMIN_PERMISSION: &str = "admin";

/// Moderation workflow configured on a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReviewsWorkflow {
    /// Submissions are reviewed before they become public.
    PreModeration,
    /// Submissions are public immediately and reviewed afterwards.
    PostModeration,
    /// Any workflow identifier this client does not know about.
    Other(String),
}

impl ReviewsWorkflow {
    /// Wire identifier for the workflow.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PreModeration => "pre-moderation",
            Self::PostModeration => "post-moderation",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for ReviewsWorkflow {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pre-moderation" => Self::PreModeration,
            "post-moderation" => Self::PostModeration,
            _ => Self::Other(value),
        }
    }
}

impl From<ReviewsWorkflow> for String {
    fn from(value: ReviewsWorkflow) -> Self {
        value.as_str().to_string()
    }
}

/// Preprint provider (a hosted preprint service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Provider identifier used in route paths.
    pub id: String,
    /// Short provider name (e.g. `engrxiv`).
    pub name: String,
    /// Moderation workflow, when the provider moderates submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_workflow: Option<ReviewsWorkflow>,
}

/// File attached to a preprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprintFile {
    /// File identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Size in bytes, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Project node backing a preprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier.
    pub id: String,
    /// Node title.
    #[serde(default)]
    pub title: String,
    /// Node description.
    #[serde(default)]
    pub description: String,
    /// Permissions the signed-in user holds on the node.
    #[serde(default)]
    pub current_user_permissions: Vec<String>,
}

impl Node {
    /// Whether the signed-in user administers the node.
    #[must_use]
    pub fn user_is_admin(&self) -> bool {
        self.current_user_permissions
            .iter()
            .any(|permission| permission == ADMIN_PERMISSION)
    }
}

/// License attached to a preprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License name.
    pub name: String,
    /// Full license text.
    #[serde(default)]
    pub text: String,
}

/// Preprint record as loaded by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preprint {
    /// Record identifier.
    pub id: String,
    /// Public preprint identifier used in download URLs (e.g. `6gtu`).
    #[serde(default)]
    pub preprint_id: String,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Abstract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hosting provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Primary file shown by default in the file viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_file: Option<PreprintFile>,
    /// Supplementary files selectable in the file viewer.
    #[serde(default)]
    pub files: Vec<PreprintFile>,
    /// Backing node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
    /// License.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// Current moderation state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_state: Option<ReviewState>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
}

/// Moderator action trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewTrigger {
    /// Initial submission.
    Submit,
    /// Accept the submission.
    Accept,
    /// Reject the submission.
    Reject,
    /// Edit an earlier decision comment.
    Edit,
    /// Withdraw the submission.
    Withdraw,
}

impl ReviewTrigger {
    /// Wire identifier for the trigger.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Edit => "edit",
            Self::Withdraw => "withdraw",
        }
    }
}

/// Moderation state of a preprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// Not yet submitted for review.
    Initial,
    /// Awaiting a moderator decision.
    Pending,
    /// Accepted by a moderator.
    Accepted,
    /// Rejected by a moderator.
    Rejected,
    /// Withdrawn by the submitter.
    Withdrawn,
}

impl ReviewState {
    /// Wire identifier for the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }
}

/// Fields used to create a new review action record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewActionFields {
    /// Action trigger.
    pub trigger: ReviewTrigger,
    /// Moderator comment (may be empty).
    pub comment: String,
    /// Identifier of the preprint under review.
    pub target_id: String,
}

/// Review action record, either freshly created or returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAction {
    /// Server-assigned identifier; `None` until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Action trigger.
    pub trigger: ReviewTrigger,
    /// Moderator comment.
    #[serde(default)]
    pub comment: String,
    /// Identifier of the preprint under review.
    pub target_id: String,
    /// State before the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_state: Option<ReviewState>,
    /// State after the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_state: Option<ReviewState>,
    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
}

impl From<ReviewActionFields> for ReviewAction {
    fn from(fields: ReviewActionFields) -> Self {
        Self {
            id: None,
            trigger: fields.trigger,
            comment: fields.comment,
            target_id: fields.target_id,
            from_state: None,
            to_state: None,
            date_created: None,
        }
    }
}

/// Failure reported by the persistence layer when saving a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// The server refused the record.
    #[error("record rejected with status {status}: {detail}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-provided detail.
        detail: String,
    },
    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body could not be decoded.
    #[error("response decode failure: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_round_trips_known_and_unknown_values() {
        let known: ReviewsWorkflow =
            serde_json::from_str("\"pre-moderation\"").expect("known workflow");
        assert_eq!(known, ReviewsWorkflow::PreModeration);

        let unknown: ReviewsWorkflow =
            serde_json::from_str("\"hybrid\"").expect("unknown workflow");
        assert_eq!(unknown, ReviewsWorkflow::Other("hybrid".to_string()));
        assert_eq!(
            serde_json::to_string(&unknown).expect("serialize"),
            "\"hybrid\""
        );
    }

    #[test]
    fn preprint_decodes_with_missing_relations() {
        let preprint: Preprint =
            serde_json::from_str(r#"{"id":"abc12"}"#).expect("sparse preprint");
        assert_eq!(preprint.id, "abc12");
        assert!(preprint.provider.is_none());
        assert!(preprint.primary_file.is_none());
        assert!(preprint.files.is_empty());
        assert!(preprint.description.is_none());
    }

    #[test]
    fn admin_permission_is_detected() {
        let node = Node {
            current_user_permissions: vec!["read".to_string(), "admin".to_string()],
            ..Node::default()
        };
        assert!(node.user_is_admin());
        assert!(!Node::default().user_is_admin());
    }

    #[test]
    fn action_from_fields_is_unsaved() {
        let action = ReviewAction::from(ReviewActionFields {
            trigger: ReviewTrigger::Accept,
            comment: String::new(),
            target_id: "6gtu".to_string(),
        });
        assert!(action.id.is_none());
        assert_eq!(action.trigger.as_str(), "accept");
        assert!(action.comment.is_empty());
    }

    #[test]
    fn persistence_errors_render_detail() {
        let err = PersistenceError::Rejected {
            status: 409,
            detail: "already decided".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "record rejected with status 409: already decided"
        );
    }
}
