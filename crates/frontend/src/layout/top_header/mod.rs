//! Top bar: sidebar toggle, application title, signed-in user and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(auth_state, set_auth_state).await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {icon("sidebar")}
                </button>
                <span class="top-header__title">"Pedidos de Alimentación"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__user-name">{move || auth_state.get().name}</span>
                    <span class="top-header__user-role">{move || auth_state.get().role.label()}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
