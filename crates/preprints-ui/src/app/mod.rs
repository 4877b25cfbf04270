use crate::app::context::ModerationCtx;
use crate::app::scroll::ScrollReset;
use crate::components::guarded_link::GuardedLink;
use crate::components::status_page::StatusPage;
use crate::core::config::AppConfig;
use crate::core::store::AppStore;
use crate::core::theme::Theme;
use crate::features::preprint_detail::view::PreprintDetailPage;
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use gloo::utils::window;
use preferences::{load_config, load_locale, load_theme, persist_locale};
pub(crate) use routes::Route;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod context;
mod preferences;
mod routes;
mod scroll;

#[function_component(PreprintsApp)]
pub(crate) fn preprints_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let moderation = {
        let base = config.api_base_url.clone();
        use_memo(move |_| ModerationCtx::new(&base), ())
    };
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let theme = use_selector(|store: &AppStore| store.theme.clone());

    {
        use_effect_with_deps(
            move |_| {
                let theme = load_theme();
                console::log!("active theme", theme.id.clone());
                Dispatch::<AppStore>::new().reduce_mut(|store| store.theme = theme);
                || ()
            },
            (),
        );
    }
    {
        let theme = (*theme).clone();
        use_effect_with_deps(
            move |theme: &Theme| {
                set_body_attribute("data-theme", &theme.id);
                || ()
            },
            theme,
        );
    }

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                persist_locale(next);
                locale.set(next);
            }
        })
    };

    let bundle_routes = bundle.clone();
    html! {
        <ContextProvider<ModerationCtx> context={(*moderation).clone()}>
            <ContextProvider<AppConfig> context={(*config).clone()}>
                <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                    <BrowserRouter>
                        <ScrollReset />
                        <header class="navbar">
                            <GuardedLink classes="btn btn-ghost" to={Route::Dashboard}>
                                {bundle.text("nav.dashboard", "Dashboard")}
                            </GuardedLink>
                            <select class="select select-sm" onchange={on_locale_change}>
                                {for LocaleCode::all().iter().map(|lc| html! {
                                    <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
                                })}
                            </select>
                        </header>
                        <main class="container">
                            <Switch<Route> render={move |route| {
                                let bundle = (*bundle_routes).clone();
                                render_route(route, &bundle)
                            }} />
                        </main>
                    </BrowserRouter>
                </ContextProvider<TranslationBundle>>
            </ContextProvider<AppConfig>>
        </ContextProvider<ModerationCtx>>
    }
}

fn render_route(route: Route, bundle: &TranslationBundle) -> Html {
    match route {
        Route::Index => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Dashboard => html! { <StatusPage key_prefix="placeholder.dashboard" /> },
        Route::ProviderModeration { .. } => {
            html! { <StatusPage key_prefix="placeholder.moderation" /> }
        }
        Route::ProviderSettings { .. } => {
            html! { <StatusPage key_prefix="placeholder.settings" /> }
        }
        Route::ProviderSetup { .. } => html! { <StatusPage key_prefix="placeholder.setup" /> },
        Route::PreprintDetail {
            provider_id,
            preprint_id,
        } => html! {
            <PreprintDetailPage key={preprint_id.clone()} provider_id={provider_id} preprint_id={preprint_id} />
        },
        Route::Forbidden => html! { <StatusPage key_prefix="placeholder.forbidden" /> },
        Route::PreprintsNotFound | Route::PageNotFound => html! {
            <StatusPage key_prefix="placeholder.not_found">
                <GuardedLink classes="btn" to={Route::Dashboard}>
                    {bundle.text("nav.dashboard", "Dashboard")}
                </GuardedLink>
            </StatusPage>
        },
    }
}

fn set_body_attribute(name: &str, value: &str) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        if let Err(err) = body.set_attribute(name, value) {
            console::error!("body attribute update failed", name, err);
        }
    }
}

/// Mount the application on `#root`, or on the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<PreprintsApp>::with_root(root).render();
    } else {
        yew::Renderer::<PreprintsApp>::new().render();
    }
}
