//! Moderation services shared with every page through context.
//!
//! # Design
//! - Pages load preprints through the client but persist decisions only
//!   through the `ReviewActionStore` seam.
//! - In-app links ask the leave guard before touching the router.

use crate::app::Route;
use crate::core::navigation::LeaveGuard;
use crate::features::preprint_detail::state::ReviewActionStore;
use crate::services::api::ApiClient;
use std::rc::Rc;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub(crate) struct ModerationCtx {
    preprints: Rc<ApiClient>,
    reviews: Rc<dyn ReviewActionStore>,
    leave_guard: LeaveGuard<Route>,
}

impl ModerationCtx {
    pub(crate) fn new(api_base_url: &str) -> Self {
        let client = Rc::new(ApiClient::new(api_base_url));
        Self {
            preprints: Rc::clone(&client),
            reviews: client,
            leave_guard: LeaveGuard::default(),
        }
    }

    pub(crate) fn preprints(&self) -> Rc<ApiClient> {
        Rc::clone(&self.preprints)
    }

    pub(crate) fn reviews(&self) -> Rc<dyn ReviewActionStore> {
        Rc::clone(&self.reviews)
    }

    pub(crate) const fn leave_guard(&self) -> &LeaveGuard<Route> {
        &self.leave_guard
    }

    /// Navigate to `route`, letting the mounted page veto it first.
    pub(crate) fn navigate(&self, navigator: &Navigator, route: Route) {
        self.leave_guard
            .navigate(route, |route| navigator.push(&route));
    }
}

impl PartialEq for ModerationCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.preprints, &other.preprints) && self.leave_guard == other.leave_guard
    }
}
