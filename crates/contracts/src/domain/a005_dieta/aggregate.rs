use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(DietaId);

/// Diet prescribed by the treating physician
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dieta {
    pub id: DietaId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DietaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DietaId>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl DietaDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("Por favor, introduce el nombre de la dieta".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Dieta {
    type Id = DietaId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.nombre
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "dietas/dietas"
    }

    fn element_name() -> &'static str {
        "Dieta"
    }

    fn list_name() -> &'static str {
        "Dietas"
    }
}
