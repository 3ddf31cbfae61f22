//! REST client with bearer authentication
//!
//! Every call carries the access token of the current session. A 401 answer
//! triggers one token refresh and one retry; when the refresh itself fails
//! the session is cleared and the user lands on the login page.

use contracts::domain::common::{CatalogKind, CatalogRow};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api_error::ApiError;
use super::api_utils::{api_url, collection_path, element_path};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api as auth_api, storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Patch => Request::patch(url),
            Verb::Delete => Request::delete(url),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ApiClient {
    auth_state: ReadSignal<AuthState>,
    set_auth_state: WriteSignal<AuthState>,
}

impl ApiClient {
    pub fn new(auth_state: ReadSignal<AuthState>, set_auth_state: WriteSignal<AuthState>) -> Self {
        Self {
            auth_state,
            set_auth_state,
        }
    }

    /// Client bound to the session provided by `AuthProvider`
    pub fn from_context() -> Self {
        let (auth_state, set_auth_state) = use_auth();
        Self::new(auth_state, set_auth_state)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Verb::Get, path, None).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn send_json<B, T>(&self, verb: Verb, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let response = self.execute(verb, path, Some(body)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Verb::Delete, path, None).await.map(|_| ())
    }

    // ------------------------------------------------------------------
    // Catalog resources
    // ------------------------------------------------------------------

    pub async fn list_resource(&self, kind: CatalogKind) -> Result<Vec<CatalogRow>, ApiError> {
        let value: Value = self.get_json(&collection_path(kind.collection_name())).await?;
        kind.rows_from_json(value).map_err(ApiError::Decode)
    }

    pub async fn create_resource(&self, kind: CatalogKind, payload: &Value) -> Result<Value, ApiError> {
        self.send_json(Verb::Post, &collection_path(kind.collection_name()), payload)
            .await
    }

    pub async fn update_resource(
        &self,
        kind: CatalogKind,
        id: i64,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.send_json(Verb::Put, &element_path(kind.collection_name(), id), payload)
            .await
    }

    pub async fn delete_resource(&self, kind: CatalogKind, id: i64) -> Result<(), ApiError> {
        self.delete(&element_path(kind.collection_name(), id)).await
    }

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------

    async fn execute(&self, verb: Verb, path: &str, body: Option<String>) -> Result<Response, ApiError> {
        let url = api_url(path);
        let token = self.auth_state.get_untracked().access_token;
        let response = send(verb, &url, token, body.clone()).await?;
        if response.status() != 401 {
            return check(response).await;
        }

        log::info!("{:?} {} answered 401, refreshing token", verb, path);
        let token = self.refresh().await?;
        let response = send(verb, &url, Some(token), body).await?;
        if response.status() == 401 {
            self.expire();
            return Err(ApiError::Unauthorized);
        }
        check(response).await
    }

    async fn refresh(&self) -> Result<String, ApiError> {
        let Some(refresh) = self.auth_state.get_untracked().refresh_token else {
            self.expire();
            return Err(ApiError::Unauthorized);
        };

        match auth_api::refresh_token(refresh).await {
            Ok(response) => {
                storage::save_access_token(&response.access);
                if let Some(rotated) = &response.refresh {
                    storage::save_refresh_token(rotated);
                }
                let access = response.access.clone();
                self.set_auth_state.update(|state| {
                    state.access_token = Some(response.access);
                    if let Some(rotated) = response.refresh {
                        state.refresh_token = Some(rotated);
                    }
                });
                Ok(access)
            }
            Err(e) => {
                log::warn!("token refresh failed: {}", e);
                self.expire();
                Err(ApiError::Unauthorized)
            }
        }
    }

    fn expire(&self) {
        storage::clear_session();
        self.set_auth_state.set(AuthState::default());
    }
}

async fn send(
    verb: Verb,
    url: &str,
    token: Option<String>,
    body: Option<String>,
) -> Result<Response, ApiError> {
    let mut builder = verb.builder(url).header("Accept", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    let response = match body {
        Some(body) => {
            builder
                .header("Content-Type", "application/json")
                .body(body)?
                .send()
                .await?
        }
        None => builder.send().await?,
    };
    Ok(response)
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} answered {}", response.url(), status);
    Err(ApiError::from_status(status, &body))
}
