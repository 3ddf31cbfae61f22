use serde_json::Value;

/// Extract a human message from a REST error body.
///
/// Looks at `detail`, `error` and `message` first, then takes the first
/// field error (`{"cedula": ["ya existe"]}` → `cedula: ya existe`).
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match &value {
        Value::String(s) if !s.trim().is_empty() => return Some(s.clone()),
        Value::Array(items) => return items.iter().find_map(as_text),
        Value::Object(_) => {}
        _ => return None,
    }

    for key in ["detail", "error", "message"] {
        if let Some(text) = value.get(key).and_then(as_text) {
            return Some(text);
        }
    }

    let map = value.as_object()?;
    map.iter().find_map(|(field, v)| {
        as_text(v).map(|text| {
            if field == "non_field_errors" {
                text
            } else {
                format!("{}: {}", field, text)
            }
        })
    })
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(as_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_and_error_keys() {
        assert_eq!(
            server_message(r#"{"detail": "Credenciales inválidas"}"#).as_deref(),
            Some("Credenciales inválidas")
        );
        assert_eq!(
            server_message(r#"{"error": "Paciente inactivo"}"#).as_deref(),
            Some("Paciente inactivo")
        );
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(
            server_message(r#"{"cedula": ["Ya existe un paciente con esta cédula."]}"#).as_deref(),
            Some("cedula: Ya existe un paciente con esta cédula.")
        );
        assert_eq!(
            server_message(r#"{"non_field_errors": ["Cama ocupada"]}"#).as_deref(),
            Some("Cama ocupada")
        );
        assert_eq!(server_message(r#"["Algo falló"]"#).as_deref(), Some("Algo falló"));
    }

    #[test]
    fn test_unusable_bodies() {
        assert_eq!(server_message("<html>500</html>"), None);
        assert_eq!(server_message(r#"{"detail": ""}"#), None);
        assert_eq!(server_message("42"), None);
    }
}
