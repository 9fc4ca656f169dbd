use crate::backend::error::BackendError;
use crate::environment::Environment;
use serde_json::Value;

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The review backend, one method per endpoint.
///
/// Each call issues exactly one request and resolves exactly once.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Review a single file.
    async fn review_file(&self, file_path: &str) -> Result<Value, BackendError>;

    /// Review every matching file under a project directory.
    async fn review_folder(
        &self,
        project_path: &str,
        ignore_files: &str,
        file_extensions: &str,
    ) -> Result<Value, BackendError>;

    /// Ask for a fix for an error raised by a file.
    async fn bug_fixer(&self, file_path: &str, error_msg: &str) -> Result<Value, BackendError>;
}
