use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use contracts::system::access::Page;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(page: Page) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let is_active = Memo::new(move |_| ctx.active.get() == Some(page));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_page(page);
    };

    view! {
        <div class="tab" class:active=is_active on:click=move |_| ctx.activate(page)>
            <span>{page.title()}</span>
            <Show when=move || page != Page::Home>
                <button class="tab-close" on:click=on_close title="Cerrar">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Tab strip plus one kept-alive content pane per open page
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__strip">
                <For
                    each=move || ctx.opened.get()
                    key=|page| page.key()
                    children=move |page| view! { <TabHandle page=page /> }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || ctx.opened.get()
                    key=|page| page.key()
                    children=move |page| view! { <TabPage page=page ctx=ctx /> }
                />
                <Show when=move || ctx.opened.with(Vec::is_empty)>
                    <div class="tabs__empty">"Seleccione una opción del menú lateral"</div>
                </Show>
            </div>
        </div>
    }
}
