/// Lowercase and strip Spanish diacritics so "Plátano" matches "platano"
pub fn normalize_text(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Plátano "), "platano");
        assert_eq!(normalize_text("PEÑA Úrsula"), "pena ursula");
        assert_eq!(normalize_text(""), "");
    }
}
