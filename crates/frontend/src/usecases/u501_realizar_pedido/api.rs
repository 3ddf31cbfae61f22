use async_trait::async_trait;
use contracts::domain::a008_pedido::{Pedido, PedidoId};
use contracts::domain::common::AggregateRoot;
use contracts::usecases::u501_realizar_pedido::CreatePedidoRequest;
use serde::Deserialize;

use super::submitter::PedidoGateway;
use crate::shared::api_client::{ApiClient, Verb};
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::collection_path;

/// Only the id of the created representation is read back
#[derive(Debug, Deserialize)]
struct CreatedPedido {
    id: PedidoId,
}

/// Posts orders through the authenticated REST client
pub struct HttpPedidoGateway {
    client: ApiClient,
}

impl HttpPedidoGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl PedidoGateway for HttpPedidoGateway {
    async fn create_pedido(&self, request: &CreatePedidoRequest) -> Result<PedidoId, ApiError> {
        let created: CreatedPedido = self
            .client
            .send_json(Verb::Post, &collection_path(Pedido::collection_name()), request)
            .await?;
        Ok(created.id)
    }
}
