//! Sidebar with the pages the signed-in role may open

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::page_icon;
use crate::system::auth::context::use_auth;
use contracts::system::access::visible_pages;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let pages = move || visible_pages(auth_state.get().role);

    view! {
        <div class="app-sidebar__content">
            <For
                each=pages
                key=|page| page.key()
                children=move |page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.get() == Some(page)
                            on:click=move |_| ctx.open_page(page)
                        >
                            <div class="app-sidebar__item-content">
                                {page_icon(page)}
                                <span>{page.title()}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
