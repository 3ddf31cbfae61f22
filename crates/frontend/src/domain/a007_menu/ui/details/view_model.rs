use contracts::domain::a007_menu::{Menu, MenuDraft, MenuId, SectionTitle};
use leptos::prelude::*;

use crate::domain::a007_menu::api;
use crate::shared::api_client::ApiClient;

/// ViewModel of the menu composer
#[derive(Clone, Copy)]
pub struct MenuDetailsViewModel {
    client: ApiClient,
    pub editing: Option<MenuId>,
    pub draft: RwSignal<MenuDraft>,
    /// Pending option text per (section, option type) input
    pub inputs: RwSignal<std::collections::BTreeMap<(SectionTitle, String), String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl MenuDetailsViewModel {
    pub fn new(client: ApiClient, menu: Option<Menu>) -> Self {
        let editing = menu.as_ref().map(|m| m.id);
        let draft = menu.as_ref().map(MenuDraft::from_menu).unwrap_or_default();
        Self {
            client,
            editing,
            draft: RwSignal::new(draft),
            inputs: RwSignal::new(Default::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn input_text(&self, section: SectionTitle, tipo: &str) -> String {
        self.inputs
            .with(|m| m.get(&(section, tipo.to_string())).cloned().unwrap_or_default())
    }

    pub fn set_input(&self, section: SectionTitle, tipo: &str, text: String) {
        self.inputs.update(|m| {
            m.insert((section, tipo.to_string()), text);
        });
    }

    /// Move the typed text into the draft
    pub fn add_option(&self, section: SectionTitle, tipo: &str) {
        let text = self.input_text(section, tipo);
        let result = self
            .draft
            .try_update(|d| d.add_option(section, tipo, &text))
            .unwrap_or(Ok(()));
        match result {
            Ok(()) => {
                self.set_input(section, tipo, String::new());
                self.error.set(None);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }

    pub fn remove_option(&self, section: SectionTitle, tipo: &str, index: usize) {
        self.draft.update(|d| d.remove_option(section, tipo, index));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let request = match self.draft.with_untracked(MenuDraft::to_request) {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match this.editing {
                Some(id) => api::update_menu(this.client, id, &request).await,
                None => api::create_menu(this.client, &request).await,
            };
            this.saving.set(false);
            match result {
                Ok(menu) => {
                    log::info!("menu {} saved ({} sections)", menu.id, menu.sections.len());
                    on_saved.run(());
                }
                Err(e) => this.error.set(Some(format!("Error al guardar el menú: {}", e))),
            }
        });
    }
}
