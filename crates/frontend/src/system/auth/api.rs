use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse};
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/auth/login/"))
        .json(&request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }

    Ok(response.json::<LoginResponse>().await?)
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh };

    let response = Request::post(&api_url("/auth/token/refresh/"))
        .json(&request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }

    Ok(response.json::<RefreshResponse>().await?)
}

/// Logout (blacklist the refresh token)
pub async fn logout(access_token: Option<String>, refresh: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh };

    let mut builder = Request::post(&api_url("/auth/logout/"));
    if let Some(token) = access_token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    let response = builder
        .json(&request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }

    Ok(())
}
