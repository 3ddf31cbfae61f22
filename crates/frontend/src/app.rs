use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use contracts::usecases::u501_realizar_pedido::RuleTable;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    // one rule table for the selection model and the validation pass
    provide_context(Arc::new(RuleTable::hospital_default()));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
