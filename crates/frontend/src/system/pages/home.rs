use contracts::system::access::{visible_pages, Page};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::page_icon;
use crate::system::auth::context::use_auth;

fn page_blurb(page: Page) -> &'static str {
    match page {
        Page::Home => "",
        Page::Menus => "Crear y administrar los menús del hospital",
        Page::RealizarPedido => "Seleccionar las comidas de un paciente",
        Page::PedidosPendientes => "Preparar y entregar los pedidos por sección",
        Page::HistorialPedidos => "Consultar pedidos completados",
        Page::GestionDatos => "Servicios, habitaciones, camas, pacientes, dietas y alergias",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let cards = move || {
        visible_pages(auth_state.get().role)
            .into_iter()
            .filter(|p| *p != Page::Home)
            .map(|page| {
                view! {
                    <div class="home-card" on:click=move |_| ctx.open_page(page)>
                        <div class="home-card__icon">{page_icon(page)}</div>
                        <div class="home-card__title">{page.title()}</div>
                        <div class="home-card__text">{page_blurb(page)}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page home">
            <div class="page__header">
                <h1 class="page__title">{move || format!("Bienvenido, {}", auth_state.get().name)}</h1>
                <span class="page__subtitle">{move || auth_state.get().role.label()}</span>
            </div>
            <div class="home-cards">{cards}</div>
        </div>
    }
}
