//! Scroll reset on route changes.

use crate::app::Route;
use crate::core::routing::ScrollTarget;
use crate::core::store::{AppStore, apply_route_change};
use gloo::utils::window;
use yew::prelude::*;
use yew_router::prelude::use_route;
use yewdux::prelude::Dispatch;

/// Browser viewport.
struct WindowViewport;

impl ScrollTarget for WindowViewport {
    fn scroll_to_top(&self) {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Feeds every completed navigation to the scroll guard. Renders nothing.
#[function_component(ScrollReset)]
pub(crate) fn scroll_reset() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |route: &Option<Route>| {
            if let Some(route) = route {
                let next = route.name();
                Dispatch::<AppStore>::new().reduce_mut(|store| {
                    apply_route_change(store, next, &WindowViewport);
                });
            }
            || ()
        },
        route,
    );
    html! {}
}
