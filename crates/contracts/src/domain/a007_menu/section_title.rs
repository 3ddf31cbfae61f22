use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal section of a menu
///
/// Declaration order is the order of the day and drives every ordered
/// traversal (validation messages, confirmation summary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SectionTitle {
    Desayuno,
    Algo,
    Almuerzo,
    Onces,
    Cena,
    Adicional,
}

impl SectionTitle {
    pub const ALL: [SectionTitle; 6] = [
        SectionTitle::Desayuno,
        SectionTitle::Algo,
        SectionTitle::Almuerzo,
        SectionTitle::Onces,
        SectionTitle::Cena,
        SectionTitle::Adicional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTitle::Desayuno => "Desayuno",
            SectionTitle::Algo => "Algo",
            SectionTitle::Almuerzo => "Almuerzo",
            SectionTitle::Onces => "Onces",
            SectionTitle::Cena => "Cena",
            SectionTitle::Adicional => "Adicional",
        }
    }

    /// Parse a section title as stored by the backend.
    ///
    /// Case-insensitive; also accepts the legacy slugs `media_manana`,
    /// `refrigerio` and `adicional_dia`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "desayuno" => Some(SectionTitle::Desayuno),
            "algo" | "media_manana" => Some(SectionTitle::Algo),
            "almuerzo" => Some(SectionTitle::Almuerzo),
            "onces" | "refrigerio" => Some(SectionTitle::Onces),
            "cena" => Some(SectionTitle::Cena),
            "adicional" | "adicional_dia" => Some(SectionTitle::Adicional),
            _ => None,
        }
    }
}

impl fmt::Display for SectionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for SectionTitle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SectionTitle::parse(&value).ok_or_else(|| format!("Sección de menú desconocida: {}", value))
    }
}

impl From<SectionTitle> for String {
    fn from(value: SectionTitle) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_parse_is_case_insensitive_with_legacy_slugs() {
        assert_eq!(SectionTitle::parse("DESAYUNO"), Some(SectionTitle::Desayuno));
        assert_eq!(SectionTitle::parse("adicional_dia"), Some(SectionTitle::Adicional));
        assert_eq!(SectionTitle::parse("refrigerio"), Some(SectionTitle::Onces));
        assert_eq!(SectionTitle::parse("merienda"), None);
    }

    #[test]
    fn test_serde_as_map_key() {
        let mut map = BTreeMap::new();
        map.insert(SectionTitle::Cena, 1);
        map.insert(SectionTitle::Desayuno, 2);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Desayuno":2,"Cena":1}"#);

        let back: BTreeMap<SectionTitle, i32> = serde_json::from_str(r#"{"almuerzo":3}"#).unwrap();
        assert_eq!(back.get(&SectionTitle::Almuerzo), Some(&3));
        assert!(serde_json::from_str::<SectionTitle>(r#""brunch""#).is_err());
    }
}
