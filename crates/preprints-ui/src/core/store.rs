//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep session-scoped state (router bookkeeping, active theme) in one store.
//! - Page-visit state stays with its page component, not here.

use crate::core::routing::{RouteName, ScrollGuard, ScrollTarget};
use crate::core::theme::Theme;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Transition bookkeeping for scroll-reset decisions.
    pub router: ScrollGuard,
    /// Active provider theme.
    pub theme: Theme,
    /// Route currently displayed, once the first transition completed.
    pub current_route: Option<RouteName>,
}

/// Apply a completed navigation to the store and reset scroll when allowed.
///
/// Returns whether the viewport was reset.
pub fn apply_route_change(
    store: &mut AppStore,
    next: RouteName,
    viewport: &impl ScrollTarget,
) -> bool {
    let previous = store.current_route.unwrap_or(RouteName::Index);
    store
        .router
        .will_transition(&previous.route_infos(), &next.route_infos());
    store.current_route = Some(next);
    store.router.did_transition(viewport)
}
