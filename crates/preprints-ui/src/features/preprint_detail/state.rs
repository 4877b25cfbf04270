//! Preprint detail page state and the unsaved-review navigation guard.
//!
//! # Design
//! - One [`ReviewUiState`] per page visit; derived values are getters over it.
//! - Persistence and navigation are collaborators injected at the call site.
//! - Once torn down, late save results are dropped without touching state.

use crate::core::config::AppConfig;
use crate::core::theme::Theme;
use crate::features::preprint_detail::actions::DetailAction;
use crate::features::preprint_detail::logic::{
    date_label_key, download_url, exceeds_truncate_threshold, shorten_description,
};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use preprints_models::{
    PersistenceError, Preprint, PreprintFile, ReviewAction, ReviewActionFields, ReviewState,
    ReviewTrigger,
};

/// Future returned by the save collaborator.
pub type SaveFuture = LocalBoxFuture<'static, Result<ReviewAction, PersistenceError>>;

/// Navigation that was intercepted and can be resumed later.
pub trait Transition {
    /// Resume the navigation.
    fn retry(&self);
}

/// Record store used to create and persist review actions.
pub trait ReviewActionStore {
    /// Create an unsaved review action record.
    fn create_review_action(&self, fields: ReviewActionFields) -> ReviewAction;

    /// Persist `action`, moving the preprint to `target_state`.
    fn save_action(&self, action: ReviewAction, target_state: ReviewState) -> SaveFuture;
}

/// Outcome of asking the page whether a navigation may leave it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision<T> {
    /// No unsaved input; navigate now.
    Proceed(T),
    /// Navigation stored; the warning dialog is showing.
    Blocked,
}

/// Transient UI state of a preprint detail page visit.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewUiState<T> {
    /// File viewer is full screen.
    pub full_screen_mfr: bool,
    /// Abstract is fully expanded.
    pub expanded_abstract: bool,
    /// License panel is visible.
    pub show_license: bool,
    /// A decision is being persisted.
    pub saving_action: bool,
    /// Moderator has typed a comment or chosen a decision.
    pub user_has_entered_review: bool,
    /// Unsaved-review confirmation dialog is visible.
    pub show_warning: bool,
    pending_transition: Option<T>,
    chosen_file: Option<PreprintFile>,
    preprint: Option<Preprint>,
    theme: Theme,
    config: AppConfig,
    last_saved_action: Option<ReviewAction>,
    torn_down: bool,
}

impl<T> Default for ReviewUiState<T> {
    fn default() -> Self {
        Self::new(Theme::default(), AppConfig::default())
    }
}

impl<T> ReviewUiState<T> {
    /// Fresh page state for the given theme and deployment settings.
    #[must_use]
    pub const fn new(theme: Theme, config: AppConfig) -> Self {
        Self {
            full_screen_mfr: false,
            expanded_abstract: false,
            show_license: false,
            saving_action: false,
            user_has_entered_review: false,
            show_warning: false,
            pending_transition: None,
            chosen_file: None,
            preprint: None,
            theme,
            config,
            last_saved_action: None,
            torn_down: false,
        }
    }

    /// Loaded preprint, if any.
    #[must_use]
    pub const fn preprint(&self) -> Option<&Preprint> {
        self.preprint.as_ref()
    }

    /// Replace the loaded preprint. A different preprint clears the chosen file.
    pub fn set_preprint(&mut self, preprint: Preprint) {
        let same_record = self
            .preprint
            .as_ref()
            .is_some_and(|current| current.id == preprint.id);
        if !same_record {
            self.chosen_file = None;
        }
        self.preprint = Some(preprint);
    }

    /// Replace the active theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Identifier of the file chosen for preview.
    #[must_use]
    pub fn chosen_file_id(&self) -> Option<&str> {
        self.chosen_file.as_ref().map(|file| file.id.as_str())
    }

    /// Navigation captured while the warning is showing.
    #[must_use]
    pub const fn pending_transition(&self) -> Option<&T> {
        self.pending_transition.as_ref()
    }

    /// Most recent decision persisted from this page.
    #[must_use]
    pub const fn last_saved_action(&self) -> Option<&ReviewAction> {
        self.last_saved_action.as_ref()
    }

    /// Whether the signed-in user administers the preprint's node.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.preprint
            .as_ref()
            .and_then(|preprint| preprint.node.as_ref())
            .is_some_and(preprints_models::Node::user_is_admin)
    }

    /// Translation key for the review-action date label.
    #[must_use]
    pub fn action_date_label(&self) -> &'static str {
        date_label_key(
            self.preprint
                .as_ref()
                .and_then(|preprint| preprint.provider.as_ref())
                .and_then(|provider| provider.reviews_workflow.as_ref()),
        )
    }

    fn full_description(&self) -> &str {
        self.preprint
            .as_ref()
            .and_then(|preprint| preprint.description.as_deref())
            .unwrap_or_default()
    }

    /// Whether the abstract is long enough to be shortened.
    #[must_use]
    pub fn has_shortened_description(&self) -> bool {
        exceeds_truncate_threshold(self.full_description())
    }

    /// Shortened abstract.
    #[must_use]
    pub fn description(&self) -> String {
        shorten_description(self.full_description())
    }

    /// Whether the view should render the shortened abstract.
    #[must_use]
    pub fn use_shortened_description(&self) -> bool {
        self.has_shortened_description() && !self.expanded_abstract
    }

    /// File shown in the viewer; `None` means the primary file by default.
    #[must_use]
    pub fn active_file(&self) -> Option<&PreprintFile> {
        let chosen = self.chosen_file.as_ref()?;
        let primary = self
            .preprint
            .as_ref()
            .and_then(|preprint| preprint.primary_file.as_ref());
        match primary {
            Some(primary) if primary.id == chosen.id => Some(primary),
            _ => Some(chosen),
        }
    }

    /// Download link for the preprint.
    #[must_use]
    pub fn file_download_url(&self) -> String {
        let (provider_name, preprint_id) =
            self.preprint
                .as_ref()
                .map_or(("", ""), |preprint| {
                    (
                        preprint
                            .provider
                            .as_ref()
                            .map_or("", |provider| provider.name.as_str()),
                        preprint.preprint_id.as_str(),
                    )
                });
        download_url(&self.theme, &self.config, provider_name, preprint_id)
    }

    /// Show or hide the license panel.
    pub const fn toggle_show_license(&mut self) {
        self.show_license = !self.show_license;
    }

    /// Toggle the full-screen file viewer.
    pub const fn expand_mfr(&mut self) {
        self.full_screen_mfr = !self.full_screen_mfr;
    }

    /// Expand or collapse the abstract.
    pub const fn expand_abstract(&mut self) {
        self.expanded_abstract = !self.expanded_abstract;
    }

    /// Preview `file`.
    pub fn choose_file(&mut self, file: PreprintFile) {
        self.chosen_file = Some(file);
    }

    /// Mark the review form as holding unsaved input.
    pub const fn note_review_input(&mut self) {
        self.user_has_entered_review = true;
    }

    /// Whether leaving the page would discard review input.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.user_has_entered_review
    }

    /// Record a decision and hand it to the store for persistence.
    ///
    /// The action is created with an empty comment. `saving_action` flips
    /// before the returned future resolves; pass its output to
    /// [`Self::finish_save`].
    pub fn submit_decision<S>(
        &mut self,
        store: &S,
        trigger: ReviewTrigger,
        target_state: ReviewState,
    ) -> SaveFuture
    where
        S: ReviewActionStore + ?Sized,
    {
        let target_id = self
            .preprint
            .as_ref()
            .map(|preprint| preprint.id.clone())
            .unwrap_or_default();
        let action = store.create_review_action(ReviewActionFields {
            trigger,
            comment: String::new(),
            target_id,
        });
        self.saving_action = !self.saving_action;
        self.user_has_entered_review = false;
        store.save_action(action, target_state)
    }

    /// Apply the result of a save started by [`Self::submit_decision`].
    ///
    /// # Errors
    /// Returns the persistence error unchanged so the caller can surface it.
    /// Results arriving after [`Self::teardown`] are discarded and yield `Ok`.
    pub fn finish_save(
        &mut self,
        result: Result<ReviewAction, PersistenceError>,
    ) -> Result<(), PersistenceError> {
        if self.torn_down {
            return Ok(());
        }
        self.saving_action = false;
        let action = result?;
        if let (Some(preprint), Some(state)) = (self.preprint.as_mut(), action.to_state) {
            preprint.review_state = Some(state);
        }
        self.last_saved_action = Some(action);
        Ok(())
    }

    /// Ask whether a navigation may leave the page.
    ///
    /// With unsaved review input the transition is stored and the warning
    /// shown; otherwise it is handed straight back.
    pub fn request_transition(&mut self, transition: T) -> GuardDecision<T> {
        if !self.user_has_entered_review {
            return GuardDecision::Proceed(transition);
        }
        self.pending_transition = Some(transition);
        self.show_warning = true;
        GuardDecision::Blocked
    }

    /// Dismiss the warning without leaving. Review input stays unsaved.
    pub fn stay_on_page(&mut self) {
        self.show_warning = false;
        self.pending_transition = None;
    }

    /// Mark the page as unmounted.
    pub const fn teardown(&mut self) {
        self.torn_down = true;
    }
}

impl<T: Transition> ReviewUiState<T> {
    /// Confirm leaving: clear review state and resume any blocked navigation.
    pub fn leave_page(&mut self) {
        self.show_warning = false;
        self.user_has_entered_review = false;
        if let Some(transition) = self.pending_transition.take() {
            transition.retry();
        }
    }

    /// Dispatch a synchronous page action.
    pub fn apply(&mut self, action: DetailAction) {
        match action {
            DetailAction::ToggleShowLicense => self.toggle_show_license(),
            DetailAction::ExpandMfr => self.expand_mfr(),
            DetailAction::ExpandAbstract => self.expand_abstract(),
            DetailAction::ChooseFile(file) => self.choose_file(file),
            DetailAction::NoteReviewInput => self.note_review_input(),
            DetailAction::LeavePage => self.leave_page(),
            DetailAction::StayOnPage => self.stay_on_page(),
        }
    }
}

/// Start an in-app navigation away from `page`.
///
/// Clean pages let the transition run at once. With unsaved review input the
/// transition is parked on the page and the warning shown. Returns whether
/// the navigation started.
pub fn guarded_navigate<T: Transition>(page: &RefCell<ReviewUiState<T>>, transition: T) -> bool {
    let decision = page.borrow_mut().request_transition(transition);
    match decision {
        GuardDecision::Proceed(transition) => {
            transition.retry();
            true
        }
        GuardDecision::Blocked => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::core::navigation::LeaveGuard;
    use futures::future::{self, FutureExt};
    use preprints_models::{Node, Provider, ReviewsWorkflow};
    use std::cell::Cell;
    use yew::Callback;
    use std::rc::Rc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct RecordingTransition {
        retries: Rc<Cell<u32>>,
    }

    impl Transition for RecordingTransition {
        fn retry(&self) {
            self.retries.set(self.retries.get() + 1);
        }
    }

    #[derive(Default)]
    struct StubStore {
        saved: RefCell<Vec<(ReviewAction, ReviewState)>>,
        fail_with: Option<PersistenceError>,
    }

    impl ReviewActionStore for StubStore {
        fn create_review_action(&self, fields: ReviewActionFields) -> ReviewAction {
            ReviewAction::from(fields)
        }

        fn save_action(&self, action: ReviewAction, target_state: ReviewState) -> SaveFuture {
            self.saved.borrow_mut().push((action.clone(), target_state));
            let result = self.fail_with.clone().map_or_else(
                || {
                    Ok(ReviewAction {
                        id: Some("action-1".to_string()),
                        to_state: Some(target_state),
                        ..action
                    })
                },
                Err,
            );
            future::ready(result).boxed_local()
        }
    }

    type Page = ReviewUiState<RecordingTransition>;

    fn file(id: &str) -> PreprintFile {
        PreprintFile {
            id: id.to_string(),
            name: format!("{id}.pdf"),
            size: None,
        }
    }

    fn preprint_with_description(description: &str) -> Preprint {
        Preprint {
            id: "pp1".to_string(),
            title: "test title".to_string(),
            description: Some(description.to_string()),
            ..Preprint::default()
        }
    }

    fn branded_config() -> AppConfig {
        AppConfig {
            server_origin: "http://localhost:5000".to_string(),
            current_origin: "https://engrxiv.example.org".to_string(),
            api_base_url: String::new(),
        }
    }

    #[test]
    fn initial_properties() {
        let page = Page::default();
        assert!(!page.full_screen_mfr);
        assert!(!page.saving_action);
        assert!(!page.show_license);
        assert!(!page.show_warning);
        assert!(!page.user_has_entered_review);
        assert!(page.active_file().is_none());
        assert!(page.chosen_file_id().is_none());
        assert!(page.pending_transition().is_none());
    }

    #[test]
    fn derived_values_degrade_without_preprint() {
        let page = Page::default();
        assert!(!page.is_admin());
        assert_eq!(page.action_date_label(), "content.dateLabel.createdOn");
        assert!(!page.has_shortened_description());
        assert!(!page.use_shortened_description());
        assert_eq!(page.description(), "");
        assert_eq!(page.file_download_url(), "http://localhost:5000//download");
    }

    #[test]
    fn is_admin_reads_node_permissions() {
        let mut page = Page::default();
        page.set_preprint(Preprint {
            node: Some(Node {
                id: "node1".to_string(),
                current_user_permissions: vec!["admin".to_string()],
                ..Node::default()
            }),
            ..Preprint::default()
        });
        assert!(page.is_admin());

        page.set_preprint(Preprint {
            node: Some(Node {
                current_user_permissions: vec!["read".to_string(), "write".to_string()],
                ..Node::default()
            }),
            ..Preprint::default()
        });
        assert!(!page.is_admin());
    }

    #[test]
    fn action_date_label_follows_workflow() {
        let mut page = Page::default();
        let mut preprint = Preprint {
            provider: Some(Provider {
                id: "osf".to_string(),
                name: "osf".to_string(),
                reviews_workflow: Some(ReviewsWorkflow::PreModeration),
            }),
            ..Preprint::default()
        };
        page.set_preprint(preprint.clone());
        assert_eq!(page.action_date_label(), "content.dateLabel.submittedOn");

        if let Some(provider) = preprint.provider.as_mut() {
            provider.reviews_workflow = Some(ReviewsWorkflow::PostModeration);
        }
        page.set_preprint(preprint);
        assert_eq!(page.action_date_label(), "content.dateLabel.createdOn");
    }

    #[test]
    fn description_is_shortened_past_threshold() {
        let mut page = Page::default();
        page.set_preprint(preprint_with_description("test description"));
        assert!(!page.has_shortened_description());
        assert!(!page.use_shortened_description());

        page.set_preprint(preprint_with_description(&"Lorem ipsum".repeat(35)));
        assert!(page.has_shortened_description());
        assert!(page.use_shortened_description());

        page.expand_abstract();
        assert!(!page.use_shortened_description());
    }

    #[test]
    fn description_keeps_first_349_characters() {
        let input = "test description length".repeat(20);
        let mut page = Page::default();
        page.set_preprint(preprint_with_description(&input));
        assert_eq!(page.description(), &input[..349]);
        assert_eq!(page.description().chars().count(), 349);
    }

    #[test]
    fn toggles_are_involutions() {
        let mut page = Page::default();
        let initial = page.clone();

        page.apply(DetailAction::ToggleShowLicense);
        assert!(page.show_license);
        page.apply(DetailAction::ExpandMfr);
        assert!(page.full_screen_mfr);
        page.apply(DetailAction::ExpandAbstract);
        assert!(page.expanded_abstract);

        page.apply(DetailAction::ToggleShowLicense);
        page.apply(DetailAction::ExpandMfr);
        page.apply(DetailAction::ExpandAbstract);
        assert_eq!(page, initial);
    }

    #[test]
    fn choose_file_records_id() {
        let mut page = Page::default();
        page.apply(DetailAction::ChooseFile(file("test1")));
        assert_eq!(page.chosen_file_id(), Some("test1"));
    }

    #[test]
    fn active_file_prefers_primary_record() {
        let primary = PreprintFile {
            name: "primary-record.pdf".to_string(),
            ..file("test1")
        };
        let other = file("test2");
        let mut page = Page::default();
        page.set_preprint(Preprint {
            id: "pp1".to_string(),
            primary_file: Some(primary.clone()),
            files: vec![other.clone()],
            ..Preprint::default()
        });
        assert!(page.active_file().is_none());

        page.choose_file(other.clone());
        assert_eq!(page.active_file(), Some(&other));

        page.choose_file(file("test1"));
        assert_eq!(page.active_file(), Some(&primary));
    }

    #[test]
    fn chosen_file_resets_when_preprint_changes() {
        let mut page = Page::default();
        page.set_preprint(preprint_with_description("first"));
        page.choose_file(file("test2"));

        page.set_preprint(preprint_with_description("reloaded"));
        assert_eq!(page.chosen_file_id(), Some("test2"));

        page.set_preprint(Preprint {
            id: "pp2".to_string(),
            ..Preprint::default()
        });
        assert!(page.chosen_file_id().is_none());
        assert!(page.active_file().is_none());
    }

    #[test]
    fn file_download_url_for_unbranded_theme() {
        let mut page = Page::new(Theme::new("osf"), branded_config());
        page.set_preprint(Preprint {
            preprint_id: "6gtu".to_string(),
            provider: Some(Provider {
                id: "osf".to_string(),
                name: "osf".to_string(),
                reviews_workflow: Some(ReviewsWorkflow::PreModeration),
            }),
            ..Preprint::default()
        });
        assert_eq!(page.file_download_url(), "http://localhost:5000/6gtu/download");
    }

    #[test]
    fn file_download_url_for_branded_theme() {
        let mut page = Page::new(Theme::new("engrxiv"), branded_config());
        page.set_preprint(Preprint {
            preprint_id: "6gtu".to_string(),
            provider: Some(Provider {
                id: "engrxiv".to_string(),
                name: "engrxiv".to_string(),
                reviews_workflow: Some(ReviewsWorkflow::PreModeration),
            }),
            ..Preprint::default()
        });
        assert_eq!(
            page.file_download_url(),
            "https://engrxiv.example.org/preprints/engrxiv/6gtu/download"
        );
    }

    #[test]
    fn submit_decision_flips_saving_and_delegates_once() {
        let store = StubStore::default();
        let mut page = Page::default();
        page.set_preprint(preprint_with_description("x"));
        page.note_review_input();
        let initial = page.saving_action;

        let _accept = page.submit_decision(&store, ReviewTrigger::Accept, ReviewState::Accepted);
        assert!(!page.user_has_entered_review);
        assert_eq!(page.saving_action, !initial);
        {
            let saved = store.saved.borrow();
            assert_eq!(saved.len(), 1);
            let (action, state) = &saved[0];
            assert_eq!(action.trigger, ReviewTrigger::Accept);
            assert_eq!(action.comment, "");
            assert_eq!(action.target_id, "pp1");
            assert_eq!(*state, ReviewState::Accepted);
        }

        let _reject = page.submit_decision(&store, ReviewTrigger::Reject, ReviewState::Rejected);
        assert!(!page.user_has_entered_review);
        assert_eq!(page.saving_action, initial);
        let saved = store.saved.borrow();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].1, ReviewState::Rejected);
    }

    #[test]
    fn finish_save_records_result() {
        let store = StubStore::default();
        let mut page = Page::default();
        page.set_preprint(preprint_with_description("x"));

        let pending = page.submit_decision(&store, ReviewTrigger::Accept, ReviewState::Accepted);
        assert!(page.saving_action);
        page.finish_save(block_on(pending)).expect("save succeeds");

        assert!(!page.saving_action);
        assert_eq!(
            page.last_saved_action().and_then(|action| action.id.as_deref()),
            Some("action-1")
        );
        assert_eq!(
            page.preprint().and_then(|preprint| preprint.review_state),
            Some(ReviewState::Accepted)
        );
    }

    #[test]
    fn finish_save_propagates_failures() {
        let store = StubStore {
            fail_with: Some(PersistenceError::Transport("offline".to_string())),
            ..StubStore::default()
        };
        let mut page = Page::default();
        let pending = page.submit_decision(&store, ReviewTrigger::Reject, ReviewState::Rejected);
        let err = page
            .finish_save(block_on(pending))
            .expect_err("failure propagates");
        assert_eq!(err, PersistenceError::Transport("offline".to_string()));
        assert!(!page.saving_action);
        assert!(page.last_saved_action().is_none());
    }

    #[test]
    fn late_save_after_teardown_is_discarded() {
        let store = StubStore {
            fail_with: Some(PersistenceError::Transport("offline".to_string())),
            ..StubStore::default()
        };
        let mut page = Page::default();
        let pending = page.submit_decision(&store, ReviewTrigger::Accept, ReviewState::Accepted);
        page.teardown();
        let before = page.clone();
        assert_eq!(page.finish_save(block_on(pending)), Ok(()));
        assert_eq!(page, before);
    }

    #[test]
    fn leave_page_without_pending_transition() {
        let mut page = Page::default();
        page.leave_page();
        assert!(!page.show_warning);
        assert!(!page.user_has_entered_review);
    }

    #[test]
    fn leave_page_resumes_pending_transition_once() {
        let transition = RecordingTransition::default();
        let retries = Rc::clone(&transition.retries);
        let mut page = Page::default();
        page.note_review_input();

        assert_eq!(page.request_transition(transition), GuardDecision::Blocked);
        assert!(page.show_warning);
        assert_eq!(retries.get(), 0);

        page.apply(DetailAction::LeavePage);
        assert!(!page.show_warning);
        assert!(!page.user_has_entered_review);
        assert!(page.pending_transition().is_none());
        assert_eq!(retries.get(), 1);

        page.leave_page();
        assert_eq!(retries.get(), 1);
    }

    #[test]
    fn clean_page_lets_transitions_through() {
        let mut page = Page::default();
        let transition = RecordingTransition::default();
        assert_eq!(
            page.request_transition(transition.clone()),
            GuardDecision::Proceed(transition)
        );
        assert!(!page.show_warning);
    }

    #[test]
    fn stay_on_page_dismisses_without_resuming() {
        let transition = RecordingTransition::default();
        let retries = Rc::clone(&transition.retries);
        let mut page = Page::default();
        page.apply(DetailAction::NoteReviewInput);
        assert_eq!(page.request_transition(transition), GuardDecision::Blocked);

        page.apply(DetailAction::StayOnPage);
        assert!(!page.show_warning);
        assert!(page.is_dirty());
        assert!(page.pending_transition().is_none());
        assert_eq!(retries.get(), 0);

        page.leave_page();
        assert_eq!(retries.get(), 0);
    }

    #[test]
    fn guarded_navigate_runs_clean_transitions() {
        let transition = RecordingTransition::default();
        let retries = Rc::clone(&transition.retries);
        let page = RefCell::new(Page::default());

        assert!(guarded_navigate(&page, transition));
        assert_eq!(retries.get(), 1);
        assert!(!page.borrow().show_warning);
    }

    #[test]
    fn guarded_navigate_parks_transition_while_dirty() {
        let transition = RecordingTransition::default();
        let retries = Rc::clone(&transition.retries);
        let page = RefCell::new(Page::default());
        page.borrow_mut().note_review_input();

        assert!(!guarded_navigate(&page, transition));
        assert_eq!(retries.get(), 0);
        assert!(page.borrow().show_warning);
        assert!(page.borrow().pending_transition().is_some());

        page.borrow_mut().apply(DetailAction::LeavePage);
        assert_eq!(retries.get(), 1);
    }

    #[test]
    fn shell_link_is_held_back_by_dirty_page() {
        let transition = RecordingTransition::default();
        let retries = Rc::clone(&transition.retries);
        let page = Rc::new(RefCell::new(Page::default()));
        let guard = LeaveGuard::<&'static str>::default();
        let token = {
            let page = Rc::clone(&page);
            guard.install(Callback::from(move |_route: &'static str| {
                guarded_navigate(&page, transition.clone());
            }))
        };
        page.borrow_mut().apply(DetailAction::NoteReviewInput);
        let mut pushed = false;

        assert!(guard.navigate("dashboard", |_| pushed = true));
        assert!(!pushed);
        assert_eq!(retries.get(), 0);
        assert!(page.borrow().show_warning);

        page.borrow_mut().apply(DetailAction::LeavePage);
        assert_eq!(retries.get(), 1);

        guard.release(token);
        assert!(!guard.navigate("dashboard", |_| pushed = true));
        assert!(pushed);
    }
}
