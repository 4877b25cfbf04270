//! Preprint detail actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions that need collaborators (saving, navigation) are methods on the
//!   page state instead of variants here.

use preprints_models::{PreprintFile, ReviewState, ReviewTrigger};

/// Synchronous page actions emitted from UI controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailAction {
    /// Show or hide the license panel.
    ToggleShowLicense,
    /// Toggle the file viewer between inline and full screen.
    ExpandMfr,
    /// Expand or collapse the abstract.
    ExpandAbstract,
    /// Preview a different file.
    ChooseFile(PreprintFile),
    /// The moderator typed a comment or picked a decision.
    NoteReviewInput,
    /// Confirm leaving the page despite unsaved review input.
    LeavePage,
    /// Dismiss the unsaved-review warning and stay.
    StayOnPage,
}

/// Moderator decision offered by the review form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Accept the submission.
    Accept,
    /// Reject the submission.
    Reject,
}

impl ReviewDecision {
    /// Both decisions in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Accept, Self::Reject]
    }

    /// Trigger recorded on the review action.
    #[must_use]
    pub const fn trigger(self) -> ReviewTrigger {
        match self {
            Self::Accept => ReviewTrigger::Accept,
            Self::Reject => ReviewTrigger::Reject,
        }
    }

    /// State the preprint moves to once the action is saved.
    #[must_use]
    pub const fn target_state(self) -> ReviewState {
        match self {
            Self::Accept => ReviewState::Accepted,
            Self::Reject => ReviewState::Rejected,
        }
    }

    /// Translation key for the decision button.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Accept => "review.accept",
            Self::Reject => "review.reject",
        }
    }
}
