use super::{Pedido, PedidoStatus};
use crate::domain::a001_servicio::aggregate::ServicioId;
use crate::domain::common::normalize_text;

/// Filter of the pending orders board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingFilter {
    pub search: String,
    pub servicio: Option<ServicioId>,
}

impl PendingFilter {
    /// Open orders matching the filter, oldest first
    pub fn apply<'a>(&self, pedidos: &'a [Pedido]) -> Vec<&'a Pedido> {
        let term = normalize_text(&self.search);
        let mut result: Vec<&Pedido> = pedidos
            .iter()
            .filter(|p| p.status != PedidoStatus::Completado)
            .filter(|p| term.is_empty() || search_fields(p).iter().any(|f| normalize_text(f).contains(&term)))
            .filter(|p| match self.servicio {
                Some(servicio) => p.paciente.servicio().map(|s| s.id) == Some(servicio),
                None => true,
            })
            .collect();
        result.sort_by_key(|p| p.fecha_pedido);
        result
    }
}

fn search_fields(pedido: &Pedido) -> Vec<&str> {
    let paciente = &pedido.paciente;
    let mut fields = vec![paciente.name.as_str(), paciente.cedula.as_str()];
    if let Some(cama) = &paciente.cama {
        fields.push(&cama.nombre);
        if let Some(habitacion) = &cama.habitacion {
            fields.push(&habitacion.nombre);
            if let Some(servicio) = &habitacion.servicio {
                fields.push(&servicio.nombre);
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_pedido::aggregate::fixtures::pedido;

    #[test]
    fn test_excludes_completed_and_sorts_oldest_first() {
        let mut done = pedido(3, "Carlos", "2024-05-01T06:00:00Z");
        done.status = PedidoStatus::Completado;
        let pedidos = vec![
            pedido(1, "Ana", "2024-05-01T09:00:00Z"),
            pedido(2, "Beto", "2024-05-01T07:00:00Z"),
            done,
        ];
        let ids: Vec<i64> = PendingFilter::default()
            .apply(&pedidos)
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_search_and_servicio() {
        let pedidos = vec![
            pedido(1, "Ana Gómez", "2024-05-01T09:00:00Z"),
            pedido(2, "Beto", "2024-05-01T07:00:00Z"),
        ];
        let filter = PendingFilter {
            search: "gomez".into(),
            servicio: None,
        };
        assert_eq!(filter.apply(&pedidos).len(), 1);

        let filter = PendingFilter {
            search: "hab 101".into(),
            servicio: Some(ServicioId(1)),
        };
        let found = filter.apply(&pedidos);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].paciente.name, "Beto");
    }
}
