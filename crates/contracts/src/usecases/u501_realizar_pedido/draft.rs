use super::rules::RuleTable;
use super::selection::Selections;
use super::validation::{validate, Violation};
use crate::domain::a004_paciente::aggregate::PacienteId;
use crate::domain::a007_menu::labels::option_type_label;
use crate::domain::a007_menu::{Menu, MenuId, MenuOptionId, SectionTitle};
use crate::domain::a008_pedido::{Adicionales, BebidaPreparacion, PedidoStatus, SectionState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Reasons an order cannot move on to the confirmation step
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("Debe seleccionar un paciente")]
    MissingPaciente,
    #[error("Debe seleccionar un menú")]
    MissingMenu,
    #[error("Debe seleccionar al menos una opción para realizar el pedido")]
    EmptySelection,
    #[error("{}", join_violations(.0))]
    Violations(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body of `POST /pedidos/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePedidoRequest {
    pub paciente: PacienteId,
    pub menu: MenuId,
    pub opciones: Selections,
    pub observaciones: String,
    pub adicionales: Adicionales,
    pub status: PedidoStatus,
    #[serde(rename = "sectionStatus")]
    pub section_status: BTreeMap<String, SectionState>,
    /// Write-only aliases read by the orders endpoint
    pub paciente_id: PacienteId,
    pub menu_id: MenuId,
}

impl CreatePedidoRequest {
    /// Bare order: no notes, no preparations, fresh status
    pub fn new(paciente: PacienteId, menu: MenuId, opciones: Selections) -> Self {
        Self {
            paciente,
            menu,
            opciones,
            observaciones: String::new(),
            adicionales: Adicionales::default(),
            status: PedidoStatus::Pendiente,
            section_status: BTreeMap::new(),
            paciente_id: paciente,
            menu_id: menu,
        }
    }
}

/// Everything on the order screen besides the picked options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PedidoDraft {
    pub paciente: Option<PacienteId>,
    pub menu: Option<MenuId>,
    pub observaciones: String,
    pub preparaciones: BTreeMap<MenuOptionId, BebidaPreparacion>,
}

/// One line of the confirmation summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryItem {
    pub id: MenuOptionId,
    pub texto: String,
    pub preparacion: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryGroup {
    pub label: String,
    pub items: Vec<SummaryItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarySection {
    pub titulo: SectionTitle,
    pub groups: Vec<SummaryGroup>,
}

impl PedidoDraft {
    /// Choosing another menu invalidates every picked option
    pub fn set_menu(&mut self, menu: Option<MenuId>) {
        if self.menu != menu {
            self.preparaciones.clear();
        }
        self.menu = menu;
    }

    pub fn set_preparacion(&mut self, option: MenuOptionId, preparacion: BebidaPreparacion) {
        self.preparaciones.insert(option, preparacion);
    }

    pub fn drop_preparacion(&mut self, option: MenuOptionId) {
        self.preparaciones.remove(&option);
    }

    /// Run the pre-checks and build the request body.
    ///
    /// Checks run in screen order: patient, menu, non-empty selection,
    /// then the cardinality rules.
    pub fn prepare(
        &self,
        selections: &Selections,
        rules: &RuleTable,
    ) -> Result<CreatePedidoRequest, DraftError> {
        let paciente = self.paciente.ok_or(DraftError::MissingPaciente)?;
        let menu = self.menu.ok_or(DraftError::MissingMenu)?;
        if selections.is_empty() {
            return Err(DraftError::EmptySelection);
        }
        let violations = validate(selections, rules);
        if !violations.is_empty() {
            return Err(DraftError::Violations(violations));
        }

        let picked: Vec<MenuOptionId> = selections.iter().map(|(_, _, id)| id).collect();
        let bebidas_preparacion = self
            .preparaciones
            .iter()
            .filter(|(id, _)| picked.contains(*id))
            .map(|(id, p)| (*id, *p))
            .collect();
        let observaciones = self.observaciones.trim().to_string();

        let mut request = CreatePedidoRequest::new(paciente, menu, selections.clone());
        request.adicionales = Adicionales {
            observaciones: (!observaciones.is_empty()).then(|| observaciones.clone()),
            bebidas_preparacion,
        };
        request.observaciones = observaciones;
        Ok(request)
    }

    /// Picked options grouped by section (meal order) then option type
    pub fn summary(&self, menu: &Menu, selections: &Selections) -> Vec<SummarySection> {
        menu.ordered_sections()
            .into_iter()
            .filter_map(|section| {
                let groups: Vec<SummaryGroup> = section
                    .option_groups()
                    .filter_map(|(tipo, options)| {
                        let items: Vec<SummaryItem> = options
                            .iter()
                            .filter(|o| selections.contains(section.titulo, tipo, o.id))
                            .map(|o| SummaryItem {
                                id: o.id,
                                texto: o.texto.clone(),
                                preparacion: self.preparaciones.get(&o.id).map(|p| p.label()),
                            })
                            .collect();
                        (!items.is_empty()).then(|| SummaryGroup {
                            label: option_type_label(tipo),
                            items,
                        })
                    })
                    .collect();
                (!groups.is_empty()).then_some(SummarySection {
                    titulo: section.titulo,
                    groups,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_menu::aggregate::fixtures;
    use crate::domain::a007_menu::{MenuOption, MenuSection, MenuSectionId};
    use crate::usecases::u501_realizar_pedido::SelectionModel;
    use std::sync::Arc;

    fn filled_model() -> SelectionModel {
        let mut m = SelectionModel::new(Arc::new(RuleTable::hospital_default()));
        for section in [SectionTitle::Desayuno, SectionTitle::Almuerzo, SectionTitle::Cena] {
            m.toggle(section, "acompanantes", MenuOptionId(1), true);
            m.toggle(section, "acompanantes", MenuOptionId(2), true);
        }
        m.toggle(SectionTitle::Desayuno, "bebidas", MenuOptionId(4), true);
        m
    }

    fn draft() -> PedidoDraft {
        PedidoDraft {
            paciente: Some(PacienteId(7)),
            menu: Some(MenuId(1)),
            ..Default::default()
        }
    }

    #[test]
    fn test_prechecks_in_order() {
        let rules = RuleTable::hospital_default();
        let selections = Selections::default();

        let mut d = PedidoDraft::default();
        assert_eq!(d.prepare(&selections, &rules), Err(DraftError::MissingPaciente));
        d.paciente = Some(PacienteId(1));
        assert_eq!(d.prepare(&selections, &rules), Err(DraftError::MissingMenu));
        d.menu = Some(MenuId(1));
        assert_eq!(d.prepare(&selections, &rules), Err(DraftError::EmptySelection));

        let mut m = SelectionModel::new(Arc::new(rules.clone()));
        m.toggle(SectionTitle::Desayuno, "bebidas", MenuOptionId(4), true);
        match d.prepare(&m.snapshot(), &rules) {
            Err(DraftError::Violations(v)) => assert_eq!(v.len(), 3),
            other => panic!("expected violations, got {:?}", other),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let mut d = draft();
        d.observaciones = "  sin azúcar ".into();
        d.set_preparacion(MenuOptionId(4), BebidaPreparacion::LecheDeslactosada);
        d.set_preparacion(MenuOptionId(99), BebidaPreparacion::Agua);

        let request = d
            .prepare(&filled_model().snapshot(), &RuleTable::hospital_default())
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["paciente"], 7);
        assert_eq!(json["menu"], 1);
        assert_eq!(json["status"], "pendiente");
        assert_eq!(json["sectionStatus"], serde_json::json!({}));
        assert_eq!(json["observaciones"], "sin azúcar");
        assert_eq!(json["opciones"]["Desayuno"]["bebidas"], serde_json::json!([4]));
        assert_eq!(
            json["adicionales"],
            serde_json::json!({
                "observaciones": "sin azúcar",
                "bebidasPreparacion": { "4": "leche_deslactosada" }
            })
        );
    }

    #[test]
    fn test_menu_change_drops_preparations() {
        let mut d = draft();
        d.set_preparacion(MenuOptionId(4), BebidaPreparacion::Agua);
        d.set_menu(Some(MenuId(1)));
        assert_eq!(d.preparaciones.len(), 1);
        d.set_menu(Some(MenuId(2)));
        assert!(d.preparaciones.is_empty());
    }

    #[test]
    fn test_violation_error_lists_messages() {
        let err = DraftError::Violations(vec![Violation {
            section: SectionTitle::Cena,
            option_type: "acompanantes".into(),
            rule: crate::usecases::u501_realizar_pedido::CardinalityRule::exact(2),
            actual: 0,
        }]);
        assert_eq!(
            err.to_string(),
            "Cena - acompanantes: Debe seleccionar exactamente 2 opciones (seleccionadas: 0)"
        );
    }

    #[test]
    fn test_summary_groups_by_section() {
        let menu = fixtures::menu();
        let mut m = SelectionModel::new(Arc::new(RuleTable::hospital_default()));
        m.toggle(SectionTitle::Almuerzo, "adicionales", MenuOptionId(11), true);
        m.toggle(SectionTitle::Desayuno, "bebidas", MenuOptionId(4), true);
        let mut d = draft();
        d.set_preparacion(MenuOptionId(4), BebidaPreparacion::Agua);

        let summary = d.summary(&menu, &m.snapshot());
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].titulo, SectionTitle::Desayuno);
        assert_eq!(summary[0].groups[0].items[0].preparacion, Some("Agua"));
        assert_eq!(summary[1].groups[0].items[0].texto, "Fruta");
        assert_eq!(summary[1].groups[0].items[0].preparacion, None);
    }

    /// Fixture menu (breakfast + lunch) plus an afternoon snack, no dinner
    fn menu_with_onces() -> Menu {
        let mut menu = fixtures::menu();
        let mut opciones = BTreeMap::new();
        opciones.insert(
            "refrigerio_fit".to_string(),
            vec![MenuOption {
                id: MenuOptionId(30),
                texto: "Yogur griego".into(),
            }],
        );
        opciones.insert(
            "bebidas_frias".to_string(),
            vec![MenuOption {
                id: MenuOptionId(31),
                texto: "Jugo de mora".into(),
            }],
        );
        menu.sections.push(MenuSection {
            id: MenuSectionId(40),
            titulo: SectionTitle::Onces,
            opciones,
        });
        menu
    }

    #[test]
    fn test_snack_only_order_on_menu_without_dinner() {
        let menu = menu_with_onces();
        let base = RuleTable::hospital_default();
        let mut m = SelectionModel::new(Arc::new(base.restricted_to(&menu)));
        assert!(m.toggle(SectionTitle::Onces, "refrigerio_fit", MenuOptionId(30), true));
        let selections = m.snapshot();

        let request = draft()
            .prepare(&selections, &base.for_order(&menu, &selections))
            .unwrap();
        assert_eq!(request.opciones.total(), 1);

        // the unrestricted table counts every absent group as zero
        assert!(matches!(
            draft().prepare(&selections, &base),
            Err(DraftError::Violations(_))
        ));
    }

    #[test]
    fn test_touched_section_is_still_checked() {
        let menu = menu_with_onces();
        let base = RuleTable::hospital_default();
        let mut m = SelectionModel::new(Arc::new(base.restricted_to(&menu)));
        m.toggle(SectionTitle::Onces, "refrigerio_fit", MenuOptionId(30), true);
        m.toggle(SectionTitle::Desayuno, "acompanantes", MenuOptionId(1), true);
        let selections = m.snapshot();

        match draft().prepare(&selections, &base.for_order(&menu, &selections)) {
            Err(DraftError::Violations(v)) => {
                assert_eq!(v.len(), 1);
                assert_eq!(
                    v[0].to_string(),
                    "Desayuno - acompanantes: Debe seleccionar exactamente 2 opciones (seleccionadas: 1)"
                );
            }
            other => panic!("expected violations, got {:?}", other),
        }

        m.toggle(SectionTitle::Desayuno, "acompanantes", MenuOptionId(2), true);
        let selections = m.snapshot();
        assert!(draft()
            .prepare(&selections, &base.for_order(&menu, &selections))
            .is_ok());
    }
}
