//! Modal dialog frame.
//!
//! # Design
//! - Visibility is owned by the caller; the frame only reports close requests.
//! - Submitting the inner form is routed through `on_submit` so Enter works.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or(AttrValue::from("Save"))]
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
                <div class="panel-head">
                    <h3>{props.title.clone()}</h3>
                    <button type="button" class="ghost" aria-label="Close" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                <form class="stacked" onsubmit={on_submit}>
                    { for props.children.iter() }
                    <div class="actions">
                        <button type="button" class="btn btn-ghost btn-sm" onclick={on_close}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary btn-sm" disabled={props.busy}>
                            {if props.busy { AttrValue::from("Saving…") } else { props.submit_label.clone() }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
