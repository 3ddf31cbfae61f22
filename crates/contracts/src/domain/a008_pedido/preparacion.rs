use crate::domain::a007_menu::SectionTitle;
use serde::{Deserialize, Serialize};

/// How a hot drink (or breakfast drink) must be prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BebidaPreparacion {
    LecheEntera,
    LecheDeslactosada,
    LecheAlmendras,
    Agua,
    UnicaPreparacion,
}

impl BebidaPreparacion {
    pub const ALL: [BebidaPreparacion; 5] = [
        BebidaPreparacion::LecheEntera,
        BebidaPreparacion::LecheDeslactosada,
        BebidaPreparacion::LecheAlmendras,
        BebidaPreparacion::Agua,
        BebidaPreparacion::UnicaPreparacion,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            BebidaPreparacion::LecheEntera => "leche_entera",
            BebidaPreparacion::LecheDeslactosada => "leche_deslactosada",
            BebidaPreparacion::LecheAlmendras => "leche_almendras",
            BebidaPreparacion::Agua => "agua",
            BebidaPreparacion::UnicaPreparacion => "unica_preparacion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BebidaPreparacion::LecheEntera => "Leche Entera",
            BebidaPreparacion::LecheDeslactosada => "Leche Deslactosada",
            BebidaPreparacion::LecheAlmendras => "Leche de Almendras",
            BebidaPreparacion::Agua => "Agua",
            BebidaPreparacion::UnicaPreparacion => "Única Preparación",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Whether picking an option of this group asks for a preparation
    pub fn required_for(section: SectionTitle, option_type: &str) -> bool {
        option_type == "bebidas_calientes"
            || (option_type == "bebidas" && section == SectionTitle::Desayuno)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_for() {
        assert!(BebidaPreparacion::required_for(SectionTitle::Onces, "bebidas_calientes"));
        assert!(BebidaPreparacion::required_for(SectionTitle::Desayuno, "bebidas"));
        assert!(!BebidaPreparacion::required_for(SectionTitle::Almuerzo, "bebidas"));
        assert!(!BebidaPreparacion::required_for(SectionTitle::Algo, "bebidas_frias"));
    }

    #[test]
    fn test_codes_match_serde() {
        for p in BebidaPreparacion::ALL {
            let json = serde_json::to_value(p).unwrap();
            assert_eq!(json, serde_json::Value::String(p.code().to_string()));
            assert_eq!(BebidaPreparacion::from_code(p.code()), Some(p));
        }
        assert_eq!(BebidaPreparacion::LecheAlmendras.label(), "Leche de Almendras");
    }
}
