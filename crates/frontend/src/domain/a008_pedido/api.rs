use contracts::domain::a008_pedido::{Pedido, PedidoId, PedidoStatusUpdate};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_client::{ApiClient, Verb};
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::collection_path;

pub async fn fetch_pedidos(client: ApiClient) -> Result<Vec<Pedido>, ApiError> {
    client.get_json(&collection_path(Pedido::collection_name())).await
}

/// `GET /pedidos/completados/?paciente=<term>`
pub async fn fetch_completados(client: ApiClient, paciente: &str) -> Result<Vec<Pedido>, ApiError> {
    client.get_json(&completados_path(paciente)).await
}

pub async fn update_status(
    client: ApiClient,
    id: PedidoId,
    update: &PedidoStatusUpdate,
) -> Result<Pedido, ApiError> {
    let path = format!("/{}/{}/status/", Pedido::collection_name(), id.value());
    client.send_json(Verb::Patch, &path, update).await
}

fn completados_path(paciente: &str) -> String {
    let base = format!("/{}/completados/", Pedido::collection_name());
    let term = paciente.trim();
    if term.is_empty() {
        base
    } else {
        format!("{}?paciente={}", base, urlencoding::encode(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completados_path() {
        assert_eq!(completados_path("  "), "/pedidos/completados/");
        assert_eq!(
            completados_path("Ana Gómez"),
            "/pedidos/completados/?paciente=Ana%20G%C3%B3mez"
        );
    }
}
