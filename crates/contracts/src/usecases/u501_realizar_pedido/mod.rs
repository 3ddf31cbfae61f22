pub mod draft;
pub mod rules;
pub mod selection;
pub mod validation;

pub use draft::{CreatePedidoRequest, DraftError, PedidoDraft, SummaryGroup, SummaryItem, SummarySection};
pub use rules::{CardinalityRule, RuleKind, RuleTable};
pub use selection::{SelectionModel, Selections};
pub use validation::{validate, Violation};

use crate::usecases::common::UseCaseMetadata;

pub struct RealizarPedido;

impl UseCaseMetadata for RealizarPedido {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "realizar_pedido"
    }

    fn display_name() -> &'static str {
        "Realizar Pedido"
    }

    fn description() -> &'static str {
        "Selección de opciones del menú para un paciente y envío del pedido a cocina"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(RealizarPedido::full_name(), "u501_realizar_pedido");
    }
}
