use contracts::domain::a007_menu::{CreateMenuRequest, Menu, MenuId};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_client::{ApiClient, Verb};
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{collection_path, element_path};

pub async fn fetch_menus(client: ApiClient) -> Result<Vec<Menu>, ApiError> {
    client.get_json(&collection_path(Menu::collection_name())).await
}

pub async fn create_menu(client: ApiClient, request: &CreateMenuRequest) -> Result<Menu, ApiError> {
    client
        .send_json(Verb::Post, &collection_path(Menu::collection_name()), request)
        .await
}

pub async fn delete_menu(client: ApiClient, id: MenuId) -> Result<(), ApiError> {
    client
        .delete(&element_path(Menu::collection_name(), id.value()))
        .await
}

pub async fn update_menu(
    client: ApiClient,
    id: MenuId,
    request: &CreateMenuRequest,
) -> Result<Menu, ApiError> {
    client
        .send_json(Verb::Put, &element_path(Menu::collection_name(), id.value()), request)
        .await
}
