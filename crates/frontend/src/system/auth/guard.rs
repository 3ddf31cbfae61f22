use contracts::system::access::Page;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only when the current role may open `page`
#[component]
pub fn RequireRole(page: Page, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().can_access(page)
            fallback=move || view! {
                <div class="alert alert--error">
                    {format!("Acceso denegado: su rol no tiene permiso para ver \"{}\".", page.title())}
                </div>
            }
        >
            {children()}
        </Show>
    }
}
