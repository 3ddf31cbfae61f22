use super::BebidaPreparacion;
use crate::domain::a004_paciente::aggregate::{Paciente, PacienteId};
use crate::domain::a007_menu::{Menu, MenuId, MenuOption, MenuOptionId, SectionTitle};
use crate::domain::common::AggregateRoot;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

crate::aggregate_id!(
    /// Order identifier
    PedidoId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PedidoStatus {
    #[default]
    Pendiente,
    EnProceso,
    Completado,
}

impl PedidoStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PedidoStatus::Pendiente => "Pendiente",
            PedidoStatus::EnProceso => "En Proceso",
            PedidoStatus::Completado => "Completado",
        }
    }
}

/// Kitchen progress of one section; anything but "completado" is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionState {
    Completado,
    #[serde(other)]
    Pendiente,
}

/// Selected option as embedded in a fetched order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoOpcion {
    pub menu_option: MenuOption,
    #[serde(default)]
    pub selected: bool,
}

/// Free-form extras stored alongside an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adicionales {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(rename = "bebidasPreparacion", default)]
    pub bebidas_preparacion: BTreeMap<MenuOptionId, BebidaPreparacion>,
}

/// Meal order of one patient against one menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    pub id: PedidoId,
    pub paciente: Paciente,
    pub menu: Menu,
    #[serde(default)]
    pub opciones: Vec<PedidoOpcion>,
    #[serde(default)]
    pub status: PedidoStatus,
    pub fecha_pedido: DateTime<Utc>,
    #[serde(default)]
    pub adicionales: Adicionales,
    #[serde(rename = "sectionStatus", default)]
    pub section_status: BTreeMap<String, SectionState>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

/// Body of `PATCH /pedidos/{id}/status/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoStatusUpdate {
    pub status: PedidoStatus,
    #[serde(rename = "sectionStatus")]
    pub section_status: BTreeMap<String, SectionState>,
    pub menu_id: MenuId,
    pub adicionales: Adicionales,
    pub observaciones: String,
    /// Only sent while the patient is still admitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paciente_id: Option<PacienteId>,
}

impl Pedido {
    pub fn is_section_completed(&self, titulo: SectionTitle) -> bool {
        section_completed(&self.section_status, titulo)
    }

    /// (completed sections, sections in the menu)
    pub fn progress(&self) -> (usize, usize) {
        let total = self.menu.sections.len();
        let done = self
            .menu
            .sections
            .iter()
            .filter(|s| self.is_section_completed(s.titulo))
            .count();
        (done, total)
    }

    pub fn is_fully_completed(&self) -> bool {
        let (done, total) = self.progress();
        total > 0 && done == total
    }

    /// Build the update that marks `titulo` as delivered.
    ///
    /// The order becomes `completado` once every section of its menu is
    /// completed, otherwise `en_proceso`.
    pub fn complete_section(&self, titulo: SectionTitle) -> PedidoStatusUpdate {
        let mut section_status: BTreeMap<String, SectionState> = self
            .section_status
            .iter()
            .filter(|(key, _)| SectionTitle::parse(key) != Some(titulo))
            .map(|(key, state)| (key.clone(), *state))
            .collect();
        section_status.insert(titulo.as_str().to_string(), SectionState::Completado);

        let all_done = self
            .menu
            .sections
            .iter()
            .all(|s| section_completed(&section_status, s.titulo));

        PedidoStatusUpdate {
            status: if all_done {
                PedidoStatus::Completado
            } else {
                PedidoStatus::EnProceso
            },
            section_status,
            menu_id: self.menu.id,
            adicionales: self.adicionales.clone(),
            observaciones: self.observaciones.clone().unwrap_or_default(),
            paciente_id: self.paciente.activo.then_some(self.paciente.id),
        }
    }

    /// Warnings shown before closing the whole order
    pub fn completion_warnings(&self, today: NaiveDate) -> Vec<String> {
        let mut warnings = Vec::new();
        let fecha = self.fecha_pedido.date_naive();
        if fecha < today {
            warnings.push(format!(
                "Este pedido corresponde a un día anterior ({})",
                fecha.format("%d/%m/%Y")
            ));
        }
        if !self.paciente.activo {
            warnings.push(
                "Este pedido corresponde a un paciente que ha sido dado de alta. \
                 Se completará el pedido sin actualizar la información del paciente."
                    .to_string(),
            );
        }
        warnings
    }

    /// Selected options of one section grouped by option type
    pub fn selected_in(&self, titulo: SectionTitle) -> Vec<(&str, Vec<&MenuOption>)> {
        let Some(section) = self.menu.section(titulo) else {
            return Vec::new();
        };
        section
            .option_groups()
            .filter_map(|(tipo, options)| {
                let chosen: Vec<&MenuOption> = options
                    .iter()
                    .filter(|o| {
                        self.opciones
                            .iter()
                            .any(|p| p.selected && p.menu_option.id == o.id)
                    })
                    .collect();
                (!chosen.is_empty()).then_some((tipo, chosen))
            })
            .collect()
    }

    pub fn preparacion(&self, option: MenuOptionId) -> Option<BebidaPreparacion> {
        self.adicionales.bebidas_preparacion.get(&option).copied()
    }
}

fn section_completed(status: &BTreeMap<String, SectionState>, titulo: SectionTitle) -> bool {
    status
        .iter()
        .any(|(key, state)| SectionTitle::parse(key) == Some(titulo) && *state == SectionState::Completado)
}

impl AggregateRoot for Pedido {
    type Id = PedidoId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.paciente.name
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "pedidos"
    }

    fn element_name() -> &'static str {
        "Pedido"
    }

    fn list_name() -> &'static str {
        "Pedidos"
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::a007_menu::aggregate::fixtures as menu_fixtures;

    pub fn pedido(id: i64, paciente: &str, fecha: &str) -> Pedido {
        Pedido {
            id: PedidoId(id),
            paciente: serde_json::from_value(serde_json::json!({
                "id": id * 10,
                "cedula": format!("C{}", id),
                "name": paciente,
                "cama": {
                    "id": 1,
                    "nombre": "Cama 1",
                    "habitacion": {
                        "id": 1,
                        "nombre": "Hab 101",
                        "servicio": { "id": id % 2 + 1, "nombre": "Servicio" }
                    }
                },
                "activo": true
            }))
            .unwrap(),
            menu: menu_fixtures::menu(),
            opciones: vec![PedidoOpcion {
                menu_option: MenuOption {
                    id: MenuOptionId(4),
                    texto: "Café".into(),
                },
                selected: true,
            }],
            status: PedidoStatus::Pendiente,
            fecha_pedido: fecha.parse().unwrap(),
            adicionales: Adicionales::default(),
            section_status: BTreeMap::new(),
            observaciones: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::pedido;
    use super::*;

    #[test]
    fn test_complete_sections_until_done() {
        let mut p = pedido(1, "Ana", "2024-05-01T08:00:00Z");
        assert_eq!(p.progress(), (0, 2));

        let update = p.complete_section(SectionTitle::Desayuno);
        assert_eq!(update.status, PedidoStatus::EnProceso);
        assert_eq!(update.paciente_id, Some(PacienteId(10)));
        p.section_status = update.section_status;
        assert_eq!(p.progress(), (1, 2));
        assert!(!p.is_fully_completed());

        let update = p.complete_section(SectionTitle::Almuerzo);
        assert_eq!(update.status, PedidoStatus::Completado);
        p.section_status = update.section_status;
        assert!(p.is_fully_completed());
    }

    #[test]
    fn test_complete_section_replaces_legacy_key() {
        let mut p = pedido(1, "Ana", "2024-05-01T08:00:00Z");
        p.section_status
            .insert("desayuno".into(), SectionState::Pendiente);
        let update = p.complete_section(SectionTitle::Desayuno);
        assert_eq!(update.section_status.len(), 1);
        assert_eq!(update.section_status["Desayuno"], SectionState::Completado);
    }

    #[test]
    fn test_discharged_patient_is_not_resent() {
        let mut p = pedido(2, "Luis", "2024-05-01T08:00:00Z");
        p.paciente.activo = false;
        let update = p.complete_section(SectionTitle::Desayuno);
        assert_eq!(update.paciente_id, None);
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("paciente_id").is_none());
        assert_eq!(json["sectionStatus"]["Desayuno"], "completado");

        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(p.completion_warnings(today).len(), 2);
    }

    #[test]
    fn test_decode_backend_pedido() {
        let json = serde_json::json!({
            "id": 5,
            "paciente": { "id": 1, "cedula": "1", "name": "Ana" },
            "menu": { "id": 1, "nombre": "M", "sections": [] },
            "opciones": [{ "menu_option": { "id": 4, "texto": "Café" }, "selected": true }],
            "status": "en_proceso",
            "fecha_pedido": "2024-05-01T08:00:00Z",
            "adicionales": { "observaciones": "sin sal", "bebidasPreparacion": { "4": "agua" } },
            "sectionStatus": { "desayuno": "completado", "cena": "pendiente" },
            "observaciones": null,
            "is_fully_completed": false
        });
        let p: Pedido = serde_json::from_value(json).unwrap();
        assert_eq!(p.status, PedidoStatus::EnProceso);
        assert!(p.is_section_completed(SectionTitle::Desayuno));
        assert!(!p.is_section_completed(SectionTitle::Cena));
        assert_eq!(p.preparacion(MenuOptionId(4)), Some(BebidaPreparacion::Agua));
    }

    #[test]
    fn test_selected_in_groups_by_type() {
        let p = pedido(1, "Ana", "2024-05-01T08:00:00Z");
        let groups = p.selected_in(SectionTitle::Desayuno);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "bebidas");
        assert_eq!(groups[0].1[0].texto, "Café");
        assert!(p.selected_in(SectionTitle::Cena).is_empty());
    }
}
