use super::registry::render_page;
use crate::layout::global_context::AppGlobalContext;
use contracts::system::access::Page;
use leptos::prelude::*;

/// Wrapper of one open page; hidden instead of unmounted when inactive
#[component]
pub fn TabPage(page: Page, ctx: AppGlobalContext) -> impl IntoView {
    let is_active = move || ctx.active.get() == Some(page);

    log::debug!("tab mounted: {}", page.key());
    on_cleanup(move || log::debug!("tab unmounted: {}", page.key()));

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=page.key()
        >
            {render_page(page)}
        </div>
    }
}
