//! Pure helpers behind the preprint detail page.
//!
//! # Design
//! - Lengths are counted in characters, never bytes.
//! - Labels are returned as translation keys; rendering happens in the view.

use crate::core::config::AppConfig;
use crate::core::theme::Theme;
use preprints_models::ReviewsWorkflow;

/// Descriptions longer than this many characters get a "show more" toggle.
pub const DESCRIPTION_TRUNCATE_THRESHOLD: usize = 350;
/// Number of characters kept in the shortened description.
pub const SHORT_DESCRIPTION_CHARS: usize = DESCRIPTION_TRUNCATE_THRESHOLD - 1;

/// Translation key for review-action dates under pre-moderation.
pub const DATE_LABEL_SUBMITTED_ON: &str = "content.dateLabel.submittedOn";
/// Translation key for review-action dates under any other workflow.
pub const DATE_LABEL_CREATED_ON: &str = "content.dateLabel.createdOn";

/// Whether the description is long enough to be shortened.
#[must_use]
pub fn exceeds_truncate_threshold(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_TRUNCATE_THRESHOLD
}

/// Leading [`SHORT_DESCRIPTION_CHARS`] characters of the description.
#[must_use]
pub fn shorten_description(description: &str) -> String {
    description.chars().take(SHORT_DESCRIPTION_CHARS).collect()
}

/// Date label key for the provider's moderation workflow.
#[must_use]
pub const fn date_label_key(workflow: Option<&ReviewsWorkflow>) -> &'static str {
    match workflow {
        Some(ReviewsWorkflow::PreModeration) => DATE_LABEL_SUBMITTED_ON,
        _ => DATE_LABEL_CREATED_ON,
    }
}

/// Download link for a preprint's primary file.
///
/// The default theme downloads from the server origin; branded providers are
/// served under `/preprints/{provider}` on the current origin.
#[must_use]
pub fn download_url(
    theme: &Theme,
    config: &AppConfig,
    provider_name: &str,
    preprint_id: &str,
) -> String {
    let preprint_id = urlencoding::encode(preprint_id);
    if theme.is_branded() {
        format!(
            "{}/preprints/{}/{preprint_id}/download",
            config.current_origin,
            urlencoding::encode(provider_name)
        )
    } else {
        format!("{}/{preprint_id}/download", config.server_origin)
    }
}
