use crate::core::clock::{Clock, SystemClock};
use crate::core::notifications::{Notification, NotificationId, NotificationVariant};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub notifications: Vec<Notification>,
    pub on_dismiss: Callback<NotificationId>,
    pub on_expire: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    {
        let notifications = props.notifications.clone();
        let on_expire = props.on_expire.clone();
        use_effect_with_deps(
            move |list: &Vec<Notification>| {
                let now = SystemClock.now_ms();
                let mut handles = Vec::new();
                for notification in list {
                    let on_expire = on_expire.clone();
                    let millis = notification.timer_delay_ms(now);
                    handles.push(Timeout::new(millis, move || on_expire.emit(())));
                }
                move || drop(handles)
            },
            notifications,
        );
    }

    html! {
        <ol class={classes!("toast-host", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for props.notifications.iter().map(|notification| render_toast(notification, &props.on_dismiss))}
        </ol>
    }
}

fn render_toast(notification: &Notification, on_dismiss: &Callback<NotificationId>) -> Html {
    let class = match notification.props.variant {
        NotificationVariant::Default => "default",
        NotificationVariant::Destructive => "destructive",
    };
    let id = notification.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };
    let props = &notification.props;
    // Actions have no handler of their own; activating one dismisses the toast.

    html! {
        <li class={classes!("toast", class)} role="status" data-toast-id={id.to_string()}>
            <div class="toast-body">
                {props.title.clone().map(|title| html! { <strong class="toast-title">{title}</strong> }).unwrap_or_default()}
                {props.description.clone().map(|text| html! { <p class="toast-description">{text}</p> }).unwrap_or_default()}
            </div>
            {props.action.clone().map(|action| html! {
                <button class="btn btn-sm" aria-label={action.alt_text} onclick={on_close.clone()}>{action.label}</button>
            }).unwrap_or_default()}
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </li>
    }
}
