//! Router link that respects the active page's leave guard.

use crate::app::Route;
use crate::app::context::ModerationCtx;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct GuardedLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GuardedLink)]
pub(crate) fn guarded_link(props: &GuardedLinkProps) -> Html {
    let ctx = use_context::<ModerationCtx>();
    let navigator = use_navigator();
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            match &ctx {
                Some(ctx) => ctx.navigate(navigator, to.clone()),
                None => navigator.push(&to),
            }
        })
    };
    html! {
        <a class={props.classes.clone()} href={props.to.to_path()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
