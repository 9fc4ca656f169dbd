//! Review Backend Client
//!
//! A client for the CodePulse review backend: file review, folder review and bug fixing.

use crate::backend::Backend;
use crate::backend::error::BackendError;
use crate::environment::Environment;
use crate::request::Request;
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("codepulse-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    environment: Environment,
}

impl BackendClient {
    /// Creates a client for the given environment.
    ///
    /// No request timeout is configured.
    pub fn new(environment: Environment) -> Result<Self, BackendError> {
        Ok(Self {
            client: ClientBuilder::new().user_agent(USER_AGENT).build()?,
            environment,
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    /// Sends one GET request and decodes the JSON body.
    pub async fn send(&self, request: &Request) -> Result<Value, BackendError> {
        let url = request.url(&self.environment.backend_url());
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl Backend for BackendClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn review_file(&self, file_path: &str) -> Result<Value, BackendError> {
        self.send(&Request::review_file(file_path)).await
    }

    async fn review_folder(
        &self,
        project_path: &str,
        ignore_files: &str,
        file_extensions: &str,
    ) -> Result<Value, BackendError> {
        self.send(&Request::review_folder(
            project_path,
            ignore_files,
            file_extensions,
        ))
        .await
    }

    async fn bug_fixer(&self, file_path: &str, error_msg: &str) -> Result<Value, BackendError> {
        self.send(&Request::bug_fix(file_path, error_msg)).await
    }
}
