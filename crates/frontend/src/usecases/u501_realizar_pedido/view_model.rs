use contracts::domain::a004_paciente::aggregate::{Paciente, PacienteId};
use contracts::domain::a007_menu::labels::option_type_label;
use contracts::domain::a007_menu::{Menu, MenuId, MenuOption, MenuOptionId, SectionTitle};
use contracts::domain::a008_pedido::BebidaPreparacion;
use contracts::usecases::u501_realizar_pedido::{
    CardinalityRule, CreatePedidoRequest, PedidoDraft, RuleTable, SelectionModel,
};
use leptos::prelude::*;
use std::sync::Arc;

use super::api::HttpPedidoGateway;
use super::submitter::{OrderSubmitter, SubmitError};
use crate::domain::a004_paciente::api as paciente_api;
use crate::domain::a007_menu::api as menu_api;
use crate::shared::api_client::ApiClient;

/// Beverage waiting for its preparation choice
#[derive(Debug, Clone, PartialEq)]
pub struct PreparacionPrompt {
    pub option: MenuOptionId,
    pub texto: String,
}

/// Notice shown when a group is already full
pub fn rejection_notice(section: SectionTitle, option_type: &str, rule: CardinalityRule) -> String {
    format!(
        "{} - {}: el límite es {}. Desmarque una opción para elegir otra.",
        section,
        option_type_label(option_type),
        rule
    )
}

/// What a checkbox change led to
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Applied,
    /// Picked a beverage that needs a preparation choice
    NeedsPreparacion,
    /// Group already full; carries the notice for the user
    Rejected(String),
}

/// Apply a checkbox change to `model` and decide what the screen does next
pub fn apply_toggle(
    model: &mut SelectionModel,
    section: SectionTitle,
    option_type: &str,
    option: MenuOptionId,
    desired: bool,
) -> ToggleOutcome {
    if !model.toggle(section, option_type, option, desired) {
        let notice = model
            .rules()
            .get(section, option_type)
            .map(|rule| rejection_notice(section, option_type, rule))
            .unwrap_or_default();
        return ToggleOutcome::Rejected(notice);
    }
    if desired && BebidaPreparacion::required_for(section, option_type) {
        ToggleOutcome::NeedsPreparacion
    } else {
        ToggleOutcome::Applied
    }
}

/// State of the order screen
#[derive(Clone)]
pub struct RealizarPedidoViewModel {
    client: ApiClient,
    submitter: OrderSubmitter,
    /// Full rule table; narrowed to the groups of the chosen menu
    rules: Arc<RuleTable>,
    pub pacientes: RwSignal<Vec<Paciente>>,
    pub menus: RwSignal<Vec<Menu>>,
    pub paciente_search: RwSignal<String>,
    pub draft: RwSignal<PedidoDraft>,
    pub selection: RwSignal<SelectionModel>,
    pub prompt: RwSignal<Option<PreparacionPrompt>>,
    /// Request awaiting confirmation
    pub confirming: RwSignal<Option<CreatePedidoRequest>>,
    pub confirm_open: RwSignal<bool>,
    pub notice: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
}

impl RealizarPedidoViewModel {
    pub fn new(client: ApiClient, rules: Arc<RuleTable>) -> Self {
        let submitter = OrderSubmitter::new(Arc::new(HttpPedidoGateway::new(client)));
        Self {
            client,
            submitter,
            rules: rules.clone(),
            pacientes: RwSignal::new(Vec::new()),
            menus: RwSignal::new(Vec::new()),
            paciente_search: RwSignal::new(String::new()),
            draft: RwSignal::new(PedidoDraft::default()),
            selection: RwSignal::new(SelectionModel::new(rules)),
            prompt: RwSignal::new(None),
            confirming: RwSignal::new(None),
            confirm_open: RwSignal::new(false),
            notice: RwSignal::new(None),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
        }
    }

    /// Fetch patients and menus; the screen is unusable until both arrive
    pub fn load(&self) {
        let this = self.clone();
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match paciente_api::fetch_active_pacientes(this.client).await {
                Ok(list) => this.pacientes.set(list),
                Err(e) => this.error.set(Some(format!("Error al cargar pacientes: {}", e))),
            }
            match menu_api::fetch_menus(this.client).await {
                Ok(list) => this.menus.set(list),
                Err(e) => this.error.set(Some(format!("Error al cargar menús: {}", e))),
            }
            this.loading.set(false);
        });
    }

    pub fn filtered_pacientes(&self) -> Vec<Paciente> {
        let term = self.paciente_search.get();
        self.pacientes.with(|list| {
            list.iter()
                .filter(|p| p.matches(&term))
                .cloned()
                .collect()
        })
    }

    pub fn selected_paciente(&self) -> Option<Paciente> {
        let id = self.draft.with(|d| d.paciente)?;
        self.pacientes
            .with(|list| list.iter().find(|p| p.id == id).cloned())
    }

    pub fn selected_menu(&self) -> Option<Menu> {
        let id = self.draft.with(|d| d.menu)?;
        self.menus
            .with(|list| list.iter().find(|m| m.id == id).cloned())
    }

    /// Clearing the patient resets the whole form
    pub fn select_paciente(&self, id: Option<PacienteId>) {
        match id {
            Some(id) => self.draft.update(|d| d.paciente = Some(id)),
            None => self.reset(),
        }
        self.error.set(None);
    }

    /// A different menu invalidates every picked option
    pub fn select_menu(&self, id: Option<MenuId>) {
        if self.draft.with_untracked(|d| d.menu) == id {
            return;
        }
        self.draft.update(|d| d.set_menu(id));
        let rules = id
            .and_then(|id| {
                self.menus.with_untracked(|list| {
                    list.iter()
                        .find(|m| m.id == id)
                        .map(|m| self.rules.restricted_to(m))
                })
            })
            .map(Arc::new)
            .unwrap_or_else(|| self.rules.clone());
        self.selection.set(SelectionModel::new(rules));
        self.prompt.set(None);
        self.notice.set(None);
        self.error.set(None);
    }

    pub fn is_selected(&self, section: SectionTitle, option_type: &str, id: MenuOptionId) -> bool {
        self.selection.with(|s| s.contains(section, option_type, id))
    }

    /// Returns whether the change was applied; a refused check leaves the
    /// option unselected
    pub fn toggle_option(
        &self,
        section: SectionTitle,
        option_type: &str,
        option: &MenuOption,
        desired: bool,
    ) -> bool {
        let outcome = self
            .selection
            .try_update(|s| apply_toggle(s, section, option_type, option.id, desired))
            .unwrap_or(ToggleOutcome::Applied);

        match outcome {
            ToggleOutcome::Rejected(notice) => {
                self.notice.set(Some(notice));
                return false;
            }
            ToggleOutcome::NeedsPreparacion => self.prompt.set(Some(PreparacionPrompt {
                option: option.id,
                texto: option.texto.clone(),
            })),
            ToggleOutcome::Applied if !desired => {
                self.draft.update(|d| d.drop_preparacion(option.id))
            }
            ToggleOutcome::Applied => {}
        }
        self.notice.set(None);
        true
    }

    pub fn choose_preparacion(&self, preparacion: BebidaPreparacion) {
        if let Some(prompt) = self.prompt.get_untracked() {
            self.draft
                .update(|d| d.set_preparacion(prompt.option, preparacion));
        }
        self.prompt.set(None);
    }

    /// Reopen the preparation dialog for an already picked beverage
    pub fn change_preparacion(&self, option: MenuOptionId) {
        let texto = self
            .selected_menu()
            .and_then(|m| m.find_option(option).map(|(_, _, o)| o.texto.clone()));
        if let Some(texto) = texto {
            self.prompt.set(Some(PreparacionPrompt { option, texto }));
        }
    }

    /// Run the pre-checks and open the confirmation step
    pub fn request_confirmation(&self) {
        let selections = self.selection.with_untracked(SelectionModel::snapshot);
        // only the sections this order picks from are held to their rules
        let rules = self
            .selection
            .with_untracked(|s| s.rules().for_ordered_sections(&selections));
        match self.draft.with_untracked(|d| d.prepare(&selections, &rules)) {
            Ok(request) => {
                self.error.set(None);
                self.confirming.set(Some(request));
                self.confirm_open.set(true);
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub fn cancel_confirmation(&self) {
        self.confirm_open.set(false);
        self.confirming.set(None);
    }

    pub fn submit(&self) {
        let Some(request) = self.confirming.get_untracked() else {
            return;
        };
        let this = self.clone();
        this.submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = this.submitter.submit_request(request).await;
            this.submitting.set(false);
            match outcome {
                Ok(_) => {
                    this.reset();
                    this.success.set(Some("Pedido creado exitosamente".to_string()));
                }
                // the first submission is still pending; keep the dialog open
                Err(SubmitError::InFlight) => {}
                Err(e) => {
                    this.cancel_confirmation();
                    this.error.set(Some(format!("Error al crear el pedido: {}", e)));
                }
            }
        });
    }

    pub fn reset(&self) {
        self.draft.set(PedidoDraft::default());
        self.selection.update(SelectionModel::clear);
        self.prompt.set(None);
        self.cancel_confirmation();
        self.notice.set(None);
        self.success.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_notice_names_group_and_limit() {
        assert_eq!(
            rejection_notice(SectionTitle::Desayuno, "acompanantes", CardinalityRule::exact(2)),
            "Desayuno - Acompañantes: el límite es exactamente 2 opciones. Desmarque una opción para elegir otra."
        );
        assert_eq!(
            rejection_notice(SectionTitle::Onces, "bebidas_frias", CardinalityRule::max(1)),
            "Onces - Bebidas Frías: el límite es máximo 1 opción. Desmarque una opción para elegir otra."
        );
    }

    fn model() -> SelectionModel {
        SelectionModel::new(Arc::new(RuleTable::hospital_default()))
    }

    #[test]
    fn test_refused_check_leaves_option_unselected() {
        let mut m = model();
        let (a, b) = (MenuOptionId(10), MenuOptionId(11));
        assert_eq!(
            apply_toggle(&mut m, SectionTitle::Almuerzo, "adicionales", a, true),
            ToggleOutcome::Applied
        );
        assert_eq!(
            apply_toggle(&mut m, SectionTitle::Almuerzo, "adicionales", b, true),
            ToggleOutcome::Rejected(
                "Almuerzo - Adicionales: el límite es máximo 1 opción. Desmarque una opción para elegir otra."
                    .to_string()
            )
        );
        // the checkbox is re-synced from the model after a refusal
        assert!(!m.contains(SectionTitle::Almuerzo, "adicionales", b));
        assert!(m.contains(SectionTitle::Almuerzo, "adicionales", a));
    }

    #[test]
    fn test_hot_beverage_asks_for_preparacion() {
        let mut m = model();
        let cafe = MenuOptionId(4);
        assert_eq!(
            apply_toggle(&mut m, SectionTitle::Desayuno, "bebidas", cafe, true),
            ToggleOutcome::NeedsPreparacion
        );
        assert_eq!(
            apply_toggle(&mut m, SectionTitle::Desayuno, "bebidas", cafe, false),
            ToggleOutcome::Applied
        );
        assert_eq!(
            apply_toggle(&mut m, SectionTitle::Almuerzo, "acompanantes", MenuOptionId(12), true),
            ToggleOutcome::Applied
        );
    }
}
