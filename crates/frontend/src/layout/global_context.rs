use contracts::system::access::Page;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open pages (tabs), the active one and sidebar visibility
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Page>>,
    pub active: RwSignal<Option<Page>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![Page::Home]),
            active: RwSignal::new(Some(Page::Home)),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores `?active=<page>` and keeps the query in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.open_page(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(page) = this.active.get() else {
                return;
            };
            let new_url = format!("?{}", query_for(page));
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
            }
        });
    }

    pub fn open_page(&self, page: Page) {
        let exists = self.opened.with_untracked(|pages| pages.contains(&page));
        if !exists {
            self.opened.update(|pages| pages.push(page));
            log::info!("page opened: {}", page.key());
        }
        self.activate(page);
    }

    pub fn activate(&self, page: Page) {
        self.active.set(Some(page));
    }

    pub fn close_page(&self, page: Page) {
        self.opened.update(|pages| pages.retain(|p| *p != page));
        if self.active.get_untracked() == Some(page) {
            let next = self.opened.with_untracked(|pages| pages.last().copied());
            self.active.set(next);
        }
    }

    /// Drop pages the current role may no longer open
    pub fn retain_pages(&self, allowed: impl Fn(Page) -> bool) {
        self.opened.update(|pages| pages.retain(|p| allowed(*p)));
        let active_allowed = self.active.get_untracked().map(&allowed).unwrap_or(false);
        if !active_allowed {
            let next = self.opened.with_untracked(|pages| pages.last().copied());
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| Page::from_key(key))
}

fn query_for(page: Page) -> String {
    serde_qs::to_string(&HashMap::from([("active", page.key())])).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_query_round_trip() {
        assert_eq!(page_from_query("?active=pedidos_pendientes"), Some(Page::PedidosPendientes));
        assert_eq!(page_from_query("?active=unknown"), None);
        assert_eq!(page_from_query(""), None);
        assert_eq!(query_for(Page::GestionDatos), "active=gestion_datos");
    }
}
