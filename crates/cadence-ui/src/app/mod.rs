use crate::app::api::ApiCtx;
use crate::components::toast::ToastHost;
use crate::core::clock::{Clock, SystemClock};
use crate::core::notifications::NotificationId;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::settings::view::SettingsPage;
use preferences::load_config;
use yew::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
mod preferences;

#[function_component(CadenceApp)]
pub(crate) fn cadence_app() -> Html {
    let dispatch = app_dispatch();
    let api_ctx = use_memo(|_| ApiCtx::new(&load_config()), ());
    let notifications =
        use_selector(|store: &AppStore| store.notifications.entries().to_vec());

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: NotificationId| {
            dispatch.reduce_mut(|store| {
                store.dismiss(id);
            });
        })
    };
    let on_expire = Callback::from(move |()| {
        let now = SystemClock.now_ms();
        dispatch.reduce_mut(|store| {
            store.notifications.expire(now);
        });
    });

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <main class="app-shell">
                <header class="app-header">
                    <h1>{"Cadence"}</h1>
                </header>
                <SettingsPage />
            </main>
            <ToastHost
                notifications={(*notifications).clone()}
                {on_dismiss}
                {on_expire}
            />
        </ContextProvider<ApiCtx>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CadenceApp>::with_root(root).render();
    } else {
        yew::Renderer::<CadenceApp>::new().render();
    }
}
