use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::inactivity::InactivityWatcher;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    // a previous session may have left pages open that this role cannot see
    let state = auth_state.get_untracked();
    ctx.init_router_integration();
    ctx.retain_pages(|page| state.can_access(page));
    if ctx.opened.with_untracked(Vec::is_empty) {
        ctx.open_page(contracts::system::access::Page::Home);
    }

    view! {
        <InactivityWatcher />
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
