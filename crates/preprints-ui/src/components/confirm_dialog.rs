//! Modal confirmation dialog.
//!
//! # Design
//! - Fully prop-driven; the owner decides what confirm and cancel mean.
//! - Clicking the backdrop counts as cancel.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDialogProps {
    #[prop_or_default]
    pub open: bool,
    pub title: AttrValue,
    pub body: AttrValue,
    pub confirm_label: AttrValue,
    pub cancel_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ConfirmDialog)]
pub(crate) fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let classes = classes!(
        "modal",
        props.open.then_some("modal-open"),
        props.class.clone()
    );

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class={classes} role="alertdialog" aria-modal="true" aria-hidden={(!props.open).to_string()}>
            <div class="modal-box">
                <h3 class="text-lg font-semibold">{props.title.clone()}</h3>
                <p class="py-4">{props.body.clone()}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={on_cancel.clone()}>{props.cancel_label.clone()}</button>
                    <button class="btn btn-warning" onclick={on_confirm}>{props.confirm_label.clone()}</button>
                </div>
            </div>
            <button class="modal-backdrop" onclick={on_cancel}></button>
        </div>
    }
}
