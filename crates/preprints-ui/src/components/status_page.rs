//! Static status pages (not found, forbidden, sections without a page yet).

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatusPageProps {
    /// Translation key prefix; `_title` and `_body` are appended.
    pub key_prefix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(StatusPage)]
pub(crate) fn status_page(props: &StatusPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let title = bundle.text(&format!("{}_title", props.key_prefix), "");
    let body = bundle.text(&format!("{}_body", props.key_prefix), "");
    let has_actions = props.children.iter().next().is_some();
    html! {
        <section class={classes!("status-page", props.class.clone())}>
            <h2>{title}</h2>
            <p class="muted">{body}</p>
            {if has_actions {
                html! { <div class="status-actions">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </section>
    }
}
