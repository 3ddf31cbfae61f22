use crate::domain::a002_habitacion::aggregate::HabitacionId;
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(CamaId);

/// Bed inside a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cama {
    pub id: CamaId,
    pub nombre: String,
    pub habitacion: Option<HabitacionId>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CamaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CamaId>,
    pub nombre: String,
    pub habitacion: Option<HabitacionId>,
    pub activo: bool,
}

impl CamaDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre de la cama es obligatorio".into());
        }
        if self.habitacion.is_none() {
            return Err("Debe seleccionar una habitación".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Cama {
    type Id = CamaId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.nombre
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "camas"
    }

    fn element_name() -> &'static str {
        "Cama"
    }

    fn list_name() -> &'static str {
        "Camas"
    }
}
