//! HTTP API client with bearer-token auth.

use mandazap_shared::{
    ActionResponse, ApiError, AuthResponse, Contact, CreateInstanceRequest, LoginRequest, Message,
    RegisterRequest, SendMessageRequest, User, WhatsAppInstance,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP client for the MandaZap backend.
///
/// Attaches `Authorization: Bearer <token>` to every request when a token is
/// configured. A 401 comes back as `ApiError::Http { status: 401, .. }`; the
/// auth session is responsible for reacting to it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            token: None,
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the bearer token attached to every request
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Make a GET request and decode the JSON response
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let mut rb = self.client.get(self.url(path));
        if let Some(token) = &self.token {
            rb = rb.bearer_auth(token);
        }

        let resp = rb
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Make a POST request with a JSON body and decode the JSON response
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let mut rb = self.client.post(self.url(path)).json(body);
        if let Some(token) = &self.token {
            rb = rb.bearer_auth(token);
        }
        self.finish_post(rb).await
    }

    /// Make a POST request with no body and decode the JSON response
    pub async fn post_empty<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let mut rb = self.client.post(self.url(path));
        if let Some(token) = &self.token {
            rb = rb.bearer_auth(token);
        }
        self.finish_post(rb).await
    }

    async fn finish_post<TRes: DeserializeOwned>(
        &self,
        rb: reqwest::RequestBuilder,
    ) -> Result<TRes, ApiError> {
        let resp = rb
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        if text.is_empty() {
            serde_json::from_str("null").map_err(|e| ApiError::Deserialize(e.to_string()))
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
        }
    }

    // --- Auth endpoints (no token required) ---

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_json(
            "/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.post_json(
            "/auth/register",
            &RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
                name: name.to_string(),
            },
        )
        .await
    }

    // --- User endpoints ---

    pub async fn profile(&self) -> Result<User, ApiError> {
        self.get_json("/users/profile").await
    }

    // --- Instance endpoints ---

    pub async fn list_instances(&self) -> Result<Vec<WhatsAppInstance>, ApiError> {
        self.get_json("/whatsapp/instances").await
    }

    pub async fn create_instance(&self, name: &str) -> Result<WhatsAppInstance, ApiError> {
        self.post_json(
            "/whatsapp/instances",
            &CreateInstanceRequest {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn connect_instance(&self, instance_id: &str) -> Result<ActionResponse, ApiError> {
        self.post_empty(&format!("/whatsapp/instances/{instance_id}/connect"))
            .await
    }

    pub async fn disconnect_instance(&self, instance_id: &str) -> Result<ActionResponse, ApiError> {
        self.post_empty(&format!("/whatsapp/instances/{instance_id}/disconnect"))
            .await
    }

    pub async fn instance_messages(&self, instance_id: &str) -> Result<Vec<Message>, ApiError> {
        self.get_json(&format!("/whatsapp/instances/{instance_id}/messages"))
            .await
    }

    pub async fn instance_contacts(&self, instance_id: &str) -> Result<Vec<Contact>, ApiError> {
        self.get_json(&format!("/whatsapp/instances/{instance_id}/contacts"))
            .await
    }

    pub async fn send_message(
        &self,
        instance_id: &str,
        to: &str,
        message: &str,
    ) -> Result<Message, ApiError> {
        self.post_json(
            &format!("/whatsapp/instances/{instance_id}/send-message"),
            &SendMessageRequest {
                to: to.to_string(),
                message: message.to_string(),
            },
        )
        .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
