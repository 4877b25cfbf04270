//! Preprint detail page view.
//!
//! # Design
//! - Page state lives in a `RefCell` owned by the component so async save
//!   completions update the same instance the view renders.
//! - While mounted the page installs itself as the app's leave guard, so every
//!   in-app link passes the unsaved-review check. Tab close and reload are
//!   covered by a `beforeunload` listener while the form is dirty.

use crate::app::Route;
use crate::app::context::ModerationCtx;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::guarded_link::GuardedLink;
use crate::core::config::AppConfig;
use crate::core::store::AppStore;
use crate::core::theme::Theme;
use crate::features::preprint_detail::actions::{DetailAction, ReviewDecision};
use crate::features::preprint_detail::state::{ReviewUiState, Transition, guarded_navigate};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use preprints_models::{Preprint, PreprintFile, ReviewAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Router navigation held back by the unsaved-review guard.
#[derive(Clone)]
pub(crate) struct RouteTransition {
    navigator: Navigator,
    target: Route,
}

impl Transition for RouteTransition {
    fn retry(&self) {
        let navigator = self.navigator.clone();
        let target = self.target.clone();
        // Runs after the page-state borrow that triggered it is released.
        spawn_local(async move { navigator.push(&target) });
    }
}

type PageState = Rc<RefCell<ReviewUiState<RouteTransition>>>;

#[derive(Properties, PartialEq)]
pub(crate) struct PreprintDetailProps {
    pub provider_id: String,
    pub preprint_id: String,
}

#[function_component(PreprintDetailPage)]
pub(crate) fn preprint_detail_page(props: &PreprintDetailProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let ctx = use_context::<ModerationCtx>();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let theme = use_selector(|store: &AppStore| store.theme.clone());
    let navigator = use_navigator();
    let page: PageState = {
        let theme = (*theme).clone();
        use_mut_ref(move || ReviewUiState::new(theme, config))
    };
    let redraw = use_force_update();
    let load_error = use_state(|| None as Option<String>);
    let save_error = use_state(|| None as Option<String>);
    let comment = use_state(String::new);

    {
        let page = page.clone();
        use_effect_with_deps(move |_| move || page.borrow_mut().teardown(), ());
    }
    {
        let page = page.clone();
        let redraw = redraw.clone();
        let theme = (*theme).clone();
        use_effect_with_deps(
            move |theme: &Theme| {
                page.borrow_mut().set_theme(theme.clone());
                redraw.force_update();
                || ()
            },
            theme,
        );
    }
    {
        let page = page.clone();
        let redraw = redraw.clone();
        let load_error = load_error.clone();
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |preprint_id: &String| {
                if let Some(ctx) = ctx {
                    let client = ctx.preprints();
                    let preprint_id = preprint_id.clone();
                    spawn_local(async move {
                        match client.fetch_preprint(&preprint_id).await {
                            Ok(preprint) => {
                                page.borrow_mut().set_preprint(preprint);
                                load_error.set(None);
                            }
                            Err(err) => {
                                console::error!("preprint load failed", preprint_id, err.to_string());
                                load_error.set(Some(err.to_string()));
                            }
                        }
                        redraw.force_update();
                    });
                } else {
                    load_error.set(Some("Missing moderation context.".to_string()));
                }
                || ()
            },
            props.preprint_id.clone(),
        );
    }

    let dirty = page.borrow().is_dirty();
    use_effect_with_deps(
        move |dirty: &bool| {
            let listener = dirty.then(|| {
                EventListener::new(&window(), "beforeunload", |event| {
                    if let Some(event) = event.dyn_ref::<BeforeUnloadEvent>() {
                        event.prevent_default();
                        event.set_return_value("unsaved review");
                    }
                })
            });
            move || drop(listener)
        },
        dirty,
    );

    let on_action = {
        let page = page.clone();
        let redraw = redraw.clone();
        Callback::from(move |action: DetailAction| {
            page.borrow_mut().apply(action);
            redraw.force_update();
        })
    };

    let on_navigate = {
        let page = page.clone();
        let redraw = redraw.clone();
        Callback::from(move |target: Route| {
            let Some(navigator) = navigator.clone() else {
                return;
            };
            if !guarded_navigate(&page, RouteTransition { navigator, target }) {
                redraw.force_update();
            }
        })
    };
    {
        let ctx = ctx.clone();
        let on_navigate = on_navigate.clone();
        use_effect_with_deps(
            move |_| {
                let installed = ctx.map(|ctx| {
                    let token = ctx.leave_guard().install(on_navigate);
                    (ctx, token)
                });
                move || {
                    if let Some((ctx, token)) = installed {
                        ctx.leave_guard().release(token);
                    }
                }
            },
            (),
        );
    }

    let on_comment = {
        let comment = comment.clone();
        let on_action = on_action.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
            {
                comment.set(area.value());
                on_action.emit(DetailAction::NoteReviewInput);
            }
        })
    };

    let on_decide = {
        let page = page.clone();
        let redraw = redraw.clone();
        let comment = comment.clone();
        let save_error = save_error.clone();
        Callback::from(move |decision: ReviewDecision| {
            let Some(ctx) = ctx.as_ref() else {
                return;
            };
            let reviews = ctx.reviews();
            let pending = page.borrow_mut().submit_decision(
                reviews.as_ref(),
                decision.trigger(),
                decision.target_state(),
            );
            comment.set(String::new());
            save_error.set(None);
            redraw.force_update();

            let page = page.clone();
            let redraw = redraw.clone();
            let save_error = save_error.clone();
            spawn_local(async move {
                let result = pending.await;
                if let Err(err) = page.borrow_mut().finish_save(result) {
                    console::error!("review action save failed", err.to_string());
                    save_error.set(Some(err.to_string()));
                }
                redraw.force_update();
            });
        })
    };

    let state = page.borrow();
    let Some(preprint) = state.preprint().cloned() else {
        return html! {
            <section class="preprint-detail placeholder">
                {match (*load_error).clone() {
                    Some(detail) => html! {
                        <div class="alert alert-error" role="alert">
                            <span>{t("content.loadFailed")}</span>
                            <span class="muted">{detail}</span>
                        </div>
                    },
                    None => html! { <p class="muted">{t("content.loading")}</p> },
                }}
            </section>
        };
    };

    let moderation_route = Route::ProviderModeration {
        provider_id: props.provider_id.clone(),
    };

    let date_label = t(state.action_date_label());
    let date_created = preprint
        .date_created
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let abstract_text = if state.use_shortened_description() {
        format!("{}…", state.description())
    } else {
        preprint.description.clone().unwrap_or_default()
    };
    let shown_file = state
        .active_file()
        .or(preprint.primary_file.as_ref())
        .cloned();
    let viewer_class = classes!(
        "file-viewer",
        state.full_screen_mfr.then_some("full-screen")
    );

    html! {
        <article class="preprint-detail">
            <nav class="breadcrumbs text-sm">
                <GuardedLink to={moderation_route}>{t("nav.moderation")}</GuardedLink>
            </nav>
            <header>
                <h1 class="text-2xl font-semibold">{preprint.title.clone()}</h1>
                <p class="muted">
                    {format!("{date_label} {date_created}")}
                    {render_review_state(&bundle, &preprint)}
                </p>
                {render_last_decision(&bundle, state.last_saved_action())}
                {if state.is_admin() {
                    html! { <span class="badge badge-outline">{"admin"}</span> }
                } else {
                    html! {}
                }}
            </header>

            <section class={viewer_class}>
                <div class="viewer-toolbar">
                    <button class="btn btn-sm" onclick={on_action.reform(|_| DetailAction::ExpandMfr)}>
                        {if state.full_screen_mfr { t("content.collapseViewer") } else { t("content.expandViewer") }}
                    </button>
                    <a class="btn btn-sm btn-primary" href={state.file_download_url()}>{t("content.download")}</a>
                </div>
                {shown_file.map(|file| html! {
                    <p class="file-name">{file.name}</p>
                }).unwrap_or_default()}
                {render_file_list(&t("content.files"), &preprint, state.chosen_file_id(), &on_action)}
            </section>

            <section class="abstract">
                <h2>{t("content.abstract")}</h2>
                <p>{abstract_text}</p>
                {if state.has_shortened_description() {
                    html! {
                        <button class="btn btn-link btn-sm" onclick={on_action.reform(|_| DetailAction::ExpandAbstract)}>
                            {if state.expanded_abstract { t("content.seeLess") } else { t("content.seeMore") }}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </section>

            {preprint.license.clone().map(|license| html! {
                <section class="license">
                    <button class="btn btn-ghost btn-sm" onclick={on_action.reform(|_| DetailAction::ToggleShowLicense)}>
                        {format!("{}: {}", t("content.license"), license.name)}
                    </button>
                    {if state.show_license {
                        html! { <pre class="license-text">{license.text}</pre> }
                    } else {
                        html! {}
                    }}
                </section>
            }).unwrap_or_default()}

            <section class="review-panel">
                <h2>{t("review.heading")}</h2>
                <textarea
                    class="textarea textarea-bordered w-full"
                    placeholder={t("review.commentPlaceholder")}
                    value={(*comment).clone()}
                    oninput={on_comment}
                />
                <div class="review-actions">
                    {for ReviewDecision::all().into_iter().map(|decision| html! {
                        <button
                            class="btn"
                            disabled={state.saving_action}
                            onclick={on_decide.reform(move |_| decision)}
                        >
                            {t(decision.label_key())}
                        </button>
                    })}
                </div>
                {if state.saving_action {
                    html! { <p class="muted">{t("review.saving")}</p> }
                } else {
                    html! {}
                }}
                {(*save_error).clone().map(|detail| html! {
                    <div class="alert alert-error" role="alert">
                        <span>{t("review.saveFailed")}</span>
                        <span class="muted">{detail}</span>
                    </div>
                }).unwrap_or_default()}
            </section>

            <ConfirmDialog
                open={state.show_warning}
                title={t("warning.title")}
                body={t("warning.body")}
                confirm_label={t("warning.leave")}
                cancel_label={t("warning.stay")}
                on_confirm={on_action.reform(|()| DetailAction::LeavePage)}
                on_cancel={on_action.reform(|()| DetailAction::StayOnPage)}
            />
        </article>
    }
}

fn render_review_state(bundle: &TranslationBundle, preprint: &Preprint) -> Html {
    preprint
        .review_state
        .map(|state| {
            let label = bundle.text(&format!("review.state.{}", state.as_str()), state.as_str());
            html! { <span class="badge badge-ghost ml-2">{label}</span> }
        })
        .unwrap_or_default()
}

fn render_last_decision(bundle: &TranslationBundle, action: Option<&ReviewAction>) -> Html {
    let Some(action) = action else {
        return html! {};
    };
    let trigger = action.trigger.as_str();
    let date = action
        .date_created
        .map(|date| format!(" {}", date.format("%Y-%m-%d")))
        .unwrap_or_default();
    let line = format!(
        "{}: {}{date}",
        bundle.text("review.lastDecision", ""),
        bundle.text(&format!("review.trigger.{trigger}"), trigger)
    );
    html! { <p class="last-decision text-sm">{line}</p> }
}

fn render_file_list(
    heading: &str,
    preprint: &Preprint,
    chosen_id: Option<&str>,
    on_action: &Callback<DetailAction>,
) -> Html {
    let files: Vec<PreprintFile> = preprint
        .primary_file
        .iter()
        .chain(preprint.files.iter())
        .cloned()
        .collect();
    if files.len() < 2 {
        return html! {};
    }
    let selected = chosen_id.or_else(|| preprint.primary_file.as_ref().map(|file| file.id.as_str()));
    html! {
        <div class="file-list">
            <h3 class="text-sm">{heading.to_string()}</h3>
            <ul class="menu menu-sm">
                {for files.into_iter().map(|file| {
                    let active = selected == Some(file.id.as_str());
                    let label = file.name.clone();
                    html! {
                        <li>
                            <button
                                class={classes!(active.then_some("active"))}
                                onclick={on_action.reform(move |_| DetailAction::ChooseFile(file.clone()))}
                            >
                                {label}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
