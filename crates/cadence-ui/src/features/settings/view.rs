//! Settings views: tabbed activity type and time slot management.
//!
//! # Design
//! - Both panels stay mounted; switching tabs only toggles visibility.
//! - Panels read through the shared `SettingsApi` so writes invalidate the list they render.
//! - Outcomes of writes are announced through the global notification queue.

use crate::app::api::ApiCtx;
use crate::components::Modal;
use crate::core::error::ApiError;
use crate::core::logic::format_duration;
use crate::core::store::{AppStore, app_dispatch, notify};
use crate::features::settings::actions::{
    ActivityTypeAction, SettingsWrite, TimeSlotAction, outcome_notification,
};
use crate::features::settings::api::{ActivityTypes, TimeSlots};
use crate::features::settings::state::{
    ActivityTypeModal, ActivityTypeSubmission, EditTarget, FormErrors, ListState, PanelView,
    Reload, ReloadCounter, SettingsTab, TimeSlotModal,
};
use cadence_api_models::{ActivityType, TimeSlot};
use gloo::console;
use gloo::dialogs::confirm;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let tab = use_state(SettingsTab::default);

    html! {
        <section class="settings-page">
            <div class="panel-head">
                <div>
                    <p class="eyebrow">{"Settings"}</p>
                    <h2>{"Scheduling reference data"}</h2>
                </div>
            </div>
            <div class="tabs" role="tablist">
                {for SettingsTab::all().into_iter().map(|candidate| {
                    let active = *tab == candidate;
                    let onclick = {
                        let tab = tab.clone();
                        Callback::from(move |_| tab.set(candidate))
                    };
                    html! {
                        <button
                            type="button"
                            role="tab"
                            class={classes!("tab", active.then_some("tab-active"))}
                            aria-selected={active.to_string()}
                            {onclick}
                        >
                            {candidate.label()}
                        </button>
                    }
                })}
            </div>
            <div role="tabpanel" hidden={*tab != SettingsTab::ActivityTypes}>
                <ActivityTypesPanel />
            </div>
            <div role="tabpanel" hidden={*tab != SettingsTab::TimeSlots}>
                <TimeSlotsPanel />
            </div>
        </section>
    }
}

#[function_component(ActivityTypesPanel)]
fn activity_types_panel() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let seed = api_ctx
        .as_ref()
        .and_then(|ctx| ctx.api.cached::<ActivityTypes>());
    let list = use_state(move || ListState::seeded(seed));
    let reload = use_reducer(ReloadCounter::default);
    let modal = use_state(ActivityTypeModal::default);
    let errors = use_state(FormErrors::default);
    let saving = use_state(|| false);
    let dispatch = app_dispatch();

    {
        let api_ctx = api_ctx.clone();
        let list = list.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    let previous = (*list).clone();
                    list.set(previous.fetching());
                    yew::platform::spawn_local(async move {
                        match ctx.api.list_activity_types().await {
                            Ok(rows) => list.set(ListState::loaded(rows)),
                            Err(err) => list.set(previous.failed(err.to_string())),
                        }
                    });
                }
                || ()
            },
            reload.get(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return missing_context();
    };

    let on_action = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let list = list.clone();
        let modal = modal.clone();
        let errors = errors.clone();
        let reload = reload.clone();
        Callback::from(move |action: ActivityTypeAction| match action {
            ActivityTypeAction::New => {
                errors.set(FormErrors::default());
                modal.set(ActivityTypeModal::create());
            }
            ActivityTypeAction::Edit(id) => {
                let entry = list
                    .data
                    .as_ref()
                    .and_then(|rows| rows.iter().find(|row| row.id == id).cloned());
                if let Some(entry) = entry {
                    errors.set(FormErrors::default());
                    modal.set(ActivityTypeModal::edit(&entry));
                }
            }
            ActivityTypeAction::Delete(id) => {
                if !confirm("Delete this activity type?") {
                    return;
                }
                let api = api_ctx.api.clone();
                let dispatch = dispatch.clone();
                let reload = reload.clone();
                yew::platform::spawn_local(async move {
                    let outcome = api.delete_activity_type(id).await;
                    finish_write(&dispatch, SettingsWrite::DeleteActivityType, &outcome);
                    if outcome.is_ok() {
                        reload.dispatch(Reload);
                    }
                });
            }
        })
    };

    let on_submit = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let modal = modal.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        Callback::from(move |()| {
            let submission = match modal.submission() {
                None => return,
                Some(Err(field_errors)) => {
                    errors.set(field_errors);
                    return;
                }
                Some(Ok(submission)) => submission,
            };
            errors.set(FormErrors::default());
            saving.set(true);
            let write = match submission {
                ActivityTypeSubmission::Create(_) => SettingsWrite::CreateActivityType,
                ActivityTypeSubmission::Update(..) => SettingsWrite::UpdateActivityType,
            };
            let api = api_ctx.api.clone();
            let dispatch = dispatch.clone();
            let modal = modal.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            yew::platform::spawn_local(async move {
                let outcome = api.submit_activity_type(&submission).await;
                finish_write(&dispatch, write, &outcome);
                if outcome.is_ok() {
                    modal.set(ActivityTypeModal::Closed);
                    reload.dispatch(Reload);
                }
                saving.set(false);
            });
        })
    };

    let on_close = {
        let modal = modal.clone();
        let errors = errors.clone();
        Callback::from(move |()| {
            errors.set(FormErrors::default());
            modal.set(ActivityTypeModal::Closed);
        })
    };

    let new_button = {
        let on_action = on_action.clone();
        html! {
            <button type="button" class="btn btn-primary btn-sm" onclick={Callback::from(move |_| on_action.emit(ActivityTypeAction::New))}>
                {"New activity type"}
            </button>
        }
    };

    let body = match list.view() {
        PanelView::Loading => loading_row(),
        PanelView::Failed(message) => error_row(&message),
        PanelView::Empty => empty_panel(
            "No activity types yet",
            "Create one to start categorising schedule entries.",
        ),
        PanelView::Rows(rows) => html! {
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Code"}</th>
                        <th>{"Color"}</th>
                        <th class="actions">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| activity_type_row(row, &on_action))}
                </tbody>
            </table>
        },
    };

    let title = match modal.target() {
        Some(EditTarget::Existing(_)) => "Edit activity type",
        _ => "New activity type",
    };
    let (name, code, color) = match &*modal {
        ActivityTypeModal::Open { form, .. } => {
            (form.name.clone(), form.code.clone(), form.color.clone())
        }
        ActivityTypeModal::Closed => (String::new(), String::new(), String::new()),
    };

    html! {
        <div class="panel">
            <div class="panel-subhead">
                <strong>{"Activity types"}</strong>
                {new_button}
            </div>
            {body}
            <Modal
                open={modal.is_open()}
                title={AttrValue::from(title)}
                busy={*saving}
                on_close={on_close}
                on_submit={on_submit}
            >
                {text_field("Name", "text", name, errors.get("name"), {
                    let modal = modal.clone();
                    Callback::from(move |value: String| update_state(&modal, |m| m.update_form(|form| form.name = value)))
                })}
                {text_field("Code", "text", code, errors.get("code"), {
                    let modal = modal.clone();
                    Callback::from(move |value: String| update_state(&modal, |m| m.update_form(|form| form.code = value)))
                })}
                {text_field("Color", "color", color, errors.get("color"), {
                    let modal = modal.clone();
                    Callback::from(move |value: String| update_state(&modal, |m| m.update_form(|form| form.color = value)))
                })}
            </Modal>
        </div>
    }
}

fn activity_type_row(row: &ActivityType, on_action: &Callback<ActivityTypeAction>) -> Html {
    let id = row.id;
    let on_edit = {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(ActivityTypeAction::Edit(id)))
    };
    let on_delete = {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(ActivityTypeAction::Delete(id)))
    };
    html! {
        <tr key={id.to_string()}>
            <td>{row.name.clone()}</td>
            <td><code>{row.code.clone()}</code></td>
            <td>
                <span class="swatch" style={format!("background-color: {}", row.color)} aria-hidden="true"></span>
                <span class="muted">{row.color.clone()}</span>
            </td>
            <td class="actions">
                <button type="button" class="btn btn-ghost btn-sm" onclick={on_edit}>{"Edit"}</button>
                <button type="button" class="btn btn-ghost btn-sm text-error" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

#[function_component(TimeSlotsPanel)]
fn time_slots_panel() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let seed = api_ctx.as_ref().and_then(|ctx| ctx.api.cached::<TimeSlots>());
    let list = use_state(move || ListState::seeded(seed));
    let reload = use_reducer(ReloadCounter::default);
    let modal = use_state(TimeSlotModal::default);
    let errors = use_state(FormErrors::default);
    let saving = use_state(|| false);
    let dispatch = app_dispatch();

    {
        let api_ctx = api_ctx.clone();
        let list = list.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = api_ctx {
                    let previous = (*list).clone();
                    list.set(previous.fetching());
                    yew::platform::spawn_local(async move {
                        match ctx.api.list_time_slots().await {
                            Ok(rows) => list.set(ListState::loaded(rows)),
                            Err(err) => list.set(previous.failed(err.to_string())),
                        }
                    });
                }
                || ()
            },
            reload.get(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return missing_context();
    };

    let on_action = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let modal = modal.clone();
        let errors = errors.clone();
        let reload = reload.clone();
        Callback::from(move |action: TimeSlotAction| match action {
            TimeSlotAction::New => {
                errors.set(FormErrors::default());
                modal.set(TimeSlotModal::create());
            }
            TimeSlotAction::Delete(id) => {
                if !confirm("Delete this time slot?") {
                    return;
                }
                let api = api_ctx.api.clone();
                let dispatch = dispatch.clone();
                let reload = reload.clone();
                yew::platform::spawn_local(async move {
                    let outcome = api.delete_time_slot(id).await;
                    finish_write(&dispatch, SettingsWrite::DeleteTimeSlot, &outcome);
                    if outcome.is_ok() {
                        reload.dispatch(Reload);
                    }
                });
            }
        })
    };

    let on_submit = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let modal = modal.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        Callback::from(move |()| {
            let input = match modal.submission() {
                None => return,
                Some(Err(field_errors)) => {
                    errors.set(field_errors);
                    return;
                }
                Some(Ok(input)) => input,
            };
            errors.set(FormErrors::default());
            saving.set(true);
            let api = api_ctx.api.clone();
            let dispatch = dispatch.clone();
            let modal = modal.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            yew::platform::spawn_local(async move {
                let outcome = api.create_time_slot(&input).await;
                finish_write(&dispatch, SettingsWrite::CreateTimeSlot, &outcome);
                if outcome.is_ok() {
                    modal.set(TimeSlotModal::Closed);
                    reload.dispatch(Reload);
                }
                saving.set(false);
            });
        })
    };

    let on_close = {
        let modal = modal.clone();
        let errors = errors.clone();
        Callback::from(move |()| {
            errors.set(FormErrors::default());
            modal.set(TimeSlotModal::Closed);
        })
    };

    let new_button = {
        let on_action = on_action.clone();
        html! {
            <button type="button" class="btn btn-primary btn-sm" onclick={Callback::from(move |_| on_action.emit(TimeSlotAction::New))}>
                {"New time slot"}
            </button>
        }
    };

    let body = match list.view() {
        PanelView::Loading => loading_row(),
        PanelView::Failed(message) => error_row(&message),
        PanelView::Empty => empty_panel(
            "No time slots yet",
            "Add the start and end times offered when building a schedule.",
        ),
        PanelView::Rows(rows) => html! {
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Start"}</th>
                        <th>{"End"}</th>
                        <th>{"Duration"}</th>
                        <th class="actions">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| time_slot_row(row, &on_action))}
                </tbody>
            </table>
        },
    };

    let (start_time, end_time) = match &*modal {
        TimeSlotModal::Open(form) => (form.start_time.clone(), form.end_time.clone()),
        TimeSlotModal::Closed => (String::new(), String::new()),
    };

    html! {
        <div class="panel">
            <div class="panel-subhead">
                <strong>{"Time slots"}</strong>
                {new_button}
            </div>
            {body}
            <Modal
                open={modal.is_open()}
                title={AttrValue::from("New time slot")}
                submit_label={AttrValue::from("Create")}
                busy={*saving}
                on_close={on_close}
                on_submit={on_submit}
            >
                {text_field("Start time", "time", start_time, errors.get("start_time"), {
                    let modal = modal.clone();
                    Callback::from(move |value: String| update_state(&modal, |m| m.update_form(|form| form.start_time = value)))
                })}
                {text_field("End time", "time", end_time, errors.get("end_time"), {
                    let modal = modal.clone();
                    Callback::from(move |value: String| update_state(&modal, |m| m.update_form(|form| form.end_time = value)))
                })}
            </Modal>
        </div>
    }
}

fn time_slot_row(row: &TimeSlot, on_action: &Callback<TimeSlotAction>) -> Html {
    let id = row.id;
    let on_delete = {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(TimeSlotAction::Delete(id)))
    };
    html! {
        <tr key={id.to_string()}>
            <td>{row.start_time.clone()}</td>
            <td>{row.end_time.clone()}</td>
            <td>{format_duration(&row.start_time, &row.end_time)}</td>
            <td class="actions">
                <button type="button" class="btn btn-ghost btn-sm text-error" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

fn text_field(
    label: &'static str,
    input_type: &'static str,
    value: String,
    error: Option<&str>,
    on_value: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            on_value.emit(input.value());
        }
    });
    html! {
        <label class="stack">
            <span>{label}</span>
            <input type={input_type} {value} {oninput} aria-invalid={error.is_some().to_string()} />
            {error.map(|message| html! { <p class="text-sm text-error">{message.to_string()}</p> }).unwrap_or_default()}
        </label>
    }
}

fn finish_write(
    dispatch: &Dispatch<AppStore>,
    write: SettingsWrite,
    outcome: &Result<(), ApiError>,
) {
    if let Err(err) = outcome {
        console::warn!("settings write failed", err.to_string());
    }
    notify(dispatch, outcome_notification(write, outcome));
}

fn empty_panel(title: &'static str, hint: &'static str) -> Html {
    html! {
        <div class="empty-state">
            <h4>{title}</h4>
            <p class="muted">{hint}</p>
        </div>
    }
}

fn loading_row() -> Html {
    html! { <p class="muted" aria-busy="true">{"Loading…"}</p> }
}

fn error_row(message: &str) -> Html {
    html! { <p class="text-sm text-error" role="alert">{format!("Could not load data: {message}")}</p> }
}

fn missing_context() -> Html {
    html! {
        <div class="panel">
            <p class="text-sm text-error">{"Missing API context."}</p>
        </div>
    }
}

fn update_state<T: Clone>(handle: &UseStateHandle<T>, update: impl FnOnce(&mut T)) {
    let mut next = (**handle).clone();
    update(&mut next);
    handle.set(next);
}
