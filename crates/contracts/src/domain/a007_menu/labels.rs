//! Display labels for option types

const KNOWN_LABELS: &[(&str, &str)] = &[
    ("acompanante", "Acompañante"),
    ("acompanantes", "Acompañantes"),
    ("bebidas_calientes", "Bebidas Calientes"),
    ("bebidas_frias", "Bebidas Frías"),
    ("sopa_del_dia", "Sopa del Día"),
    ("plato_principal", "Plato Principal"),
    ("media_manana_fit", "Media Mañana Fit"),
    ("media_manana_tradicional", "Media Mañana Tradicional"),
    ("refrigerio_fit", "Refrigerio Fit"),
    ("refrigerio_tradicional", "Refrigerio Tradicional"),
    ("entrada", "Entrada"),
    ("huevos", "Huevos"),
    ("toppings", "Toppings"),
    ("bebidas", "Bebidas"),
    ("vegetariano", "Vegetariano"),
    ("vegetales", "Vegetales"),
    ("postre", "Postre"),
    ("adicionales", "Adicionales"),
];

/// Human label for an option type slug (`sopa_del_dia` → `Sopa del Día`)
///
/// Unknown slugs are title-cased word by word, keeping Spanish articles and
/// prepositions lowercase after the first word.
pub fn option_type_label(tipo: &str) -> String {
    let lower = tipo.trim().to_lowercase();
    if let Some((_, label)) = KNOWN_LABELS.iter().find(|(slug, _)| *slug == lower) {
        return label.to_string();
    }

    lower
        .replace('_', " ")
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && matches!(word, "del" | "de" | "la" | "las" | "los") {
                word.to_string()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(option_type_label("sopa_del_dia"), "Sopa del Día");
        assert_eq!(option_type_label("BEBIDAS_FRIAS"), "Bebidas Frías");
    }

    #[test]
    fn test_fallback_title_case() {
        assert_eq!(option_type_label("jugo_de_la_casa"), "Jugo de la Casa");
        assert_eq!(option_type_label(""), "");
    }
}
