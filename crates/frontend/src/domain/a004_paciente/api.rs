use contracts::domain::a004_paciente::aggregate::Paciente;
use contracts::domain::common::AggregateRoot;

use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::collection_path;

pub async fn fetch_pacientes(client: ApiClient) -> Result<Vec<Paciente>, ApiError> {
    client
        .get_json(&collection_path(Paciente::collection_name()))
        .await
}

/// Patients an order can be placed for
pub async fn fetch_active_pacientes(client: ApiClient) -> Result<Vec<Paciente>, ApiError> {
    let mut pacientes = fetch_pacientes(client).await?;
    pacientes.retain(|p| p.activo);
    pacientes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pacientes)
}
