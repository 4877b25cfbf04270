//! Route naming and the scroll-reset guard.
//!
//! # Design
//! - Routes are identified by dotted names (`preprints.provider.settings`).
//! - The guard records the last transition and only decides; the app owns
//!   the actual viewport mutation through [`ScrollTarget`].

/// Transitions between these routes keep the current scroll position.
pub const SCROLL_RESET_DISABLED_ROUTES: &[&str] =
    &["preprints.provider.moderation", "preprints.provider.settings"];

/// Name of the implicit root route that heads every route tree.
pub const APPLICATION_ROUTE: &str = "application";

/// Every named route in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    /// Site root.
    Index,
    /// Catch-all for unknown URLs.
    PageNotFound,
    /// Bare `/preprints` section, which has no landing page.
    PreprintsNotFound,
    /// Provider onboarding.
    ProviderSetup,
    /// Provider moderation queue (provider default page).
    ProviderModeration,
    /// Provider moderation settings.
    ProviderSettings,
    /// Single preprint under review.
    PreprintDetail,
    /// Moderator dashboard.
    Dashboard,
    /// Access denied.
    Forbidden,
}

impl RouteName {
    /// Fully qualified dotted name.
    #[must_use]
    pub const fn dotted(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::PageNotFound => "page-not-found",
            Self::PreprintsNotFound => "preprints.page-not-found",
            Self::ProviderSetup => "preprints.provider.setup",
            Self::ProviderModeration => "preprints.provider.moderation",
            Self::ProviderSettings => "preprints.provider.settings",
            Self::PreprintDetail => "preprints.provider.preprint-detail",
            Self::Dashboard => "dashboard",
            Self::Forbidden => "forbidden",
        }
    }

    /// Matched route segments from the application root down to this route.
    #[must_use]
    pub fn route_infos(self) -> Vec<RouteInfo> {
        let dotted = self.dotted();
        let mut infos = vec![RouteInfo::new(APPLICATION_ROUTE)];
        let mut end = 0;
        for part in dotted.split('.') {
            end += part.len();
            infos.push(RouteInfo::new(&dotted[..end]));
            end += 1;
        }
        infos
    }
}

/// One matched segment of a route tree, carrying its qualified name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteInfo {
    /// Qualified route name (e.g. `preprints.provider`).
    pub name: String,
}

impl RouteInfo {
    /// Build a segment from its qualified name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Collapse a list of matched segments into the dotted path of the leaf route.
///
/// The root segment is skipped. Each following name contributes only the parts
/// not already covered by the longest suffix of the accumulated path that
/// prefixes it.
#[must_use]
pub fn route_path(infos: &[RouteInfo]) -> String {
    let mut path: Vec<&str> = Vec::new();
    for info in infos.iter().skip(1) {
        let parts: Vec<&str> = info.name.split('.').collect();
        let mut covered = path.len();
        while covered > 0 {
            let suffix = &path[path.len() - covered..];
            if parts.len() >= covered && parts[..covered] == *suffix {
                break;
            }
            covered -= 1;
        }
        path.extend_from_slice(&parts[covered..]);
    }
    path.join(".")
}

/// Source and destination of the most recently started transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Dotted name of the route being left.
    pub from_route: String,
    /// Dotted name of the route being entered.
    pub to_route: String,
}

/// Viewport that can be scrolled back to the origin.
pub trait ScrollTarget {
    /// Scroll to (0, 0).
    fn scroll_to_top(&self);
}

/// Decides whether a completed transition resets the scroll position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollGuard {
    record: TransitionRecord,
    block_set: &'static [&'static str],
}

impl ScrollGuard {
    /// Build a guard with the given exclusion set.
    #[must_use]
    pub fn new(block_set: &'static [&'static str]) -> Self {
        Self {
            record: TransitionRecord::default(),
            block_set,
        }
    }

    /// Last recorded transition.
    #[must_use]
    pub const fn record(&self) -> &TransitionRecord {
        &self.record
    }

    /// Record the source and destination of a starting transition.
    pub fn will_transition(&mut self, old_infos: &[RouteInfo], new_infos: &[RouteInfo]) {
        self.record.from_route = route_path(old_infos);
        self.record.to_route = route_path(new_infos);
    }

    /// True when both ends of the recorded transition are in the exclusion set.
    #[must_use]
    pub fn scroll_reset_disabled(&self) -> bool {
        self.is_blocked(&self.record.from_route) && self.is_blocked(&self.record.to_route)
    }

    /// Finish a transition, resetting the scroll position unless suppressed.
    ///
    /// Returns whether the viewport was reset.
    pub fn did_transition(&self, target: &impl ScrollTarget) -> bool {
        if self.scroll_reset_disabled() {
            return false;
        }
        target.scroll_to_top();
        true
    }

    fn is_blocked(&self, name: &str) -> bool {
        self.block_set.iter().any(|blocked| *blocked == name)
    }
}

impl Default for ScrollGuard {
    fn default() -> Self {
        Self::new(SCROLL_RESET_DISABLED_ROUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const ALL_ROUTES: [RouteName; 9] = [
        RouteName::Index,
        RouteName::PageNotFound,
        RouteName::PreprintsNotFound,
        RouteName::ProviderSetup,
        RouteName::ProviderModeration,
        RouteName::ProviderSettings,
        RouteName::PreprintDetail,
        RouteName::Dashboard,
        RouteName::Forbidden,
    ];

    #[derive(Default)]
    struct RecordingViewport {
        resets: Cell<u32>,
    }

    impl ScrollTarget for RecordingViewport {
        fn scroll_to_top(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[test]
    fn route_path_collapses_nested_names() {
        let infos = RouteName::ProviderModeration.route_infos();
        assert_eq!(
            infos.iter().map(|info| info.name.as_str()).collect::<Vec<_>>(),
            [
                "application",
                "preprints",
                "preprints.provider",
                "preprints.provider.moderation"
            ]
        );
        assert_eq!(route_path(&infos), "preprints.provider.moderation");
    }

    #[test]
    fn route_path_handles_unqualified_children() {
        let infos = [
            RouteInfo::new("application"),
            RouteInfo::new("preprints"),
            RouteInfo::new("provider"),
        ];
        assert_eq!(route_path(&infos), "preprints.provider");
        assert_eq!(route_path(&[RouteInfo::new("application")]), "");
    }

    #[test]
    fn every_route_name_round_trips_through_its_infos() {
        for name in ALL_ROUTES {
            assert_eq!(route_path(&name.route_infos()), name.dotted());
        }
    }

    #[test]
    fn scroll_reset_disabled_only_inside_block_set() {
        for from in ALL_ROUTES {
            for to in ALL_ROUTES {
                let mut guard = ScrollGuard::default();
                guard.will_transition(&from.route_infos(), &to.route_infos());
                let expected = SCROLL_RESET_DISABLED_ROUTES.contains(&from.dotted())
                    && SCROLL_RESET_DISABLED_ROUTES.contains(&to.dotted());
                assert_eq!(
                    guard.scroll_reset_disabled(),
                    expected,
                    "{} -> {}",
                    from.dotted(),
                    to.dotted()
                );
            }
        }
    }

    #[test]
    fn did_transition_scrolls_unless_suppressed() {
        let viewport = RecordingViewport::default();
        let mut guard = ScrollGuard::default();

        guard.will_transition(
            &RouteName::ProviderModeration.route_infos(),
            &RouteName::ProviderSettings.route_infos(),
        );
        assert!(!guard.did_transition(&viewport));
        assert_eq!(viewport.resets.get(), 0);

        guard.will_transition(
            &RouteName::ProviderSettings.route_infos(),
            &RouteName::PreprintDetail.route_infos(),
        );
        assert_eq!(
            guard.record(),
            &TransitionRecord {
                from_route: "preprints.provider.settings".to_string(),
                to_route: "preprints.provider.preprint-detail".to_string(),
            }
        );
        assert!(guard.did_transition(&viewport));
        assert_eq!(viewport.resets.get(), 1);
    }

    #[test]
    fn custom_block_set_is_honoured() {
        let mut guard = ScrollGuard::new(&["dashboard"]);
        guard.will_transition(
            &RouteName::Dashboard.route_infos(),
            &RouteName::Dashboard.route_infos(),
        );
        assert!(guard.scroll_reset_disabled());
    }
}
