//! Page → view registry
//!
//! Every screen is wrapped in `RequireRole`, so a page restored from the URL
//! still honours the role table.

use crate::domain::a007_menu::ui::MenuList;
use crate::domain::a008_pedido::ui::{HistorialPedidos, PedidosPendientes};
use crate::domain::catalog::ui::GestionDatos;
use crate::system::auth::guard::RequireRole;
use crate::system::pages::home::HomePage;
use crate::usecases::u501_realizar_pedido::RealizarPedidoPage;
use contracts::system::access::Page;
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    let content = move || match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Menus => view! { <MenuList /> }.into_any(),
        Page::RealizarPedido => view! { <RealizarPedidoPage /> }.into_any(),
        Page::PedidosPendientes => view! { <PedidosPendientes /> }.into_any(),
        Page::HistorialPedidos => view! { <HistorialPedidos /> }.into_any(),
        Page::GestionDatos => view! { <GestionDatos /> }.into_any(),
    };

    view! {
        <RequireRole page=page>
            {content()}
        </RequireRole>
    }
    .into_any()
}
