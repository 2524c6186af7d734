//! HTTP gateway to the remote REST service.
//!
//! One method per external operation. Every call is a single attempt: a
//! transport failure and an application-level non-success status collapse
//! into the same error variant, with `status: None` marking the former.

use std::time::Duration;

use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{info, warn};

use orcalite_core::config::ApiConfig;
use orcalite_core::{
    ActionError, AuthError, Client, ClientDraft, ClientId, Quote, QuotePayload, User,
};

pub struct ApiGateway {
    http: HttpClient,
    config: ApiConfig,
}

// No Debug derive: the request body carries the exposed password.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    senha: &'a str,
}

impl ApiGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { http: HttpClient::new(), config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    /// `GET /Cliente/listar`. Success is whatever status the configuration
    /// says it is (201 on the deployed API); everything else, including a
    /// conventional 200, is a fetch failure and the caller renders an
    /// empty list plus an error.
    pub async fn list_clients(&self) -> Result<Vec<Client>, ActionError> {
        let response = self
            .http
            .get(self.url("/Cliente/listar"))
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|error| {
                warn!(%error, "client list request failed");
                ActionError::Fetch { status: None }
            })?;

        let status = response.status().as_u16();
        if status != self.config.list_success_status {
            warn!(status, expected = self.config.list_success_status, "unexpected listing status");
            return Err(ActionError::Fetch { status: Some(status) });
        }

        let clients = response.json::<Vec<Client>>().await.map_err(|error| {
            warn!(%error, "client list response did not parse");
            ActionError::Fetch { status: None }
        })?;
        info!(count = clients.len(), "client list loaded");
        Ok(clients)
    }

    /// `POST /cliente/criar`, success 201.
    pub async fn create_client(&self, draft: &ClientDraft) -> Result<(), ActionError> {
        let response = self
            .http
            .post(self.url("/cliente/criar"))
            .timeout(self.timeout())
            .json(draft)
            .send()
            .await
            .map_err(|error| {
                warn!(%error, "client registration request failed");
                ActionError::ClientCreate { status: None }
            })?;

        let status = response.status().as_u16();
        if status != 201 {
            warn!(status, nome = %draft.nome, "client registration rejected");
            return Err(ActionError::ClientCreate { status: Some(status) });
        }
        info!(nome = %draft.nome, "client registered");
        Ok(())
    }

    /// `DELETE /cliente/deletar/{id}`, success 200.
    pub async fn delete_client(&self, id: &ClientId) -> Result<(), ActionError> {
        let response = self
            .http
            .delete(self.url(&format!("/cliente/deletar/{id}")))
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|error| {
                warn!(%error, "client deletion request failed");
                ActionError::ClientDelete { status: None }
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            warn!(status, id = %id, "client deletion rejected");
            return Err(ActionError::ClientDelete { status: Some(status) });
        }
        info!(id = %id, "client deleted");
        Ok(())
    }

    /// `POST /usuario/login`, success 200. Blank credentials are rejected
    /// before any network call.
    pub async fn login(&self, email: &str, senha: &SecretString) -> Result<User, ActionError> {
        if email.trim().is_empty() || senha.expose_secret().trim().is_empty() {
            return Err(AuthError::BlankCredentials.into());
        }

        let body = LoginRequest { email, senha: senha.expose_secret() };
        let response = self
            .http
            .post(self.url("/usuario/login"))
            .timeout(self.timeout())
            .json(&body)
            .send()
            .await
            .map_err(|error| {
                warn!(%error, "login request failed");
                ActionError::from(AuthError::Rejected { status: None })
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            warn!(status, "login rejected");
            return Err(AuthError::Rejected { status: Some(status) }.into());
        }

        let user = response.json::<User>().await.map_err(|error| {
            warn!(%error, "login response did not parse");
            ActionError::from(AuthError::Rejected { status: None })
        })?;
        info!(user_id = %user.id, "login succeeded");
        Ok(user)
    }

    /// `POST /orcamento/criar`, success 201. Single attempt, no retry.
    pub async fn create_quote(&self, payload: &QuotePayload) -> Result<Quote, ActionError> {
        let response = self
            .http
            .post(self.url("/orcamento/criar"))
            .timeout(self.timeout())
            .json(payload)
            .send()
            .await
            .map_err(|error| {
                warn!(%error, "quote creation request failed");
                ActionError::Submit { status: None }
            })?;

        let status = response.status().as_u16();
        if status != 201 {
            warn!(status, cliente_id = %payload.cliente_id, "quote creation rejected");
            return Err(ActionError::Submit { status: Some(status) });
        }

        let quote = response.json::<Quote>().await.map_err(|error| {
            warn!(%error, "quote creation response did not parse");
            ActionError::Submit { status: None }
        })?;
        info!(num_orc = %quote.num_orc, "quote created");
        Ok(quote)
    }
}
