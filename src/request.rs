//! Backend requests built from form values.

use std::fmt::{Display, Formatter};

/// The three review backend endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ReviewFile,
    ReviewFolder,
    BugFixer,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ReviewFile => "/review_file",
            Endpoint::ReviewFolder => "/review_folder",
            Endpoint::BugFixer => "/bug_fixer",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A single GET request: an endpoint plus its query parameters, in order.
///
/// Values are taken verbatim from the form; nothing is validated or trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl Request {
    pub fn review_file(file_path: &str) -> Self {
        Self {
            endpoint: Endpoint::ReviewFile,
            params: vec![("file_path", file_path.to_string())],
        }
    }

    pub fn review_folder(project_path: &str, ignore_files: &str, file_extensions: &str) -> Self {
        Self {
            endpoint: Endpoint::ReviewFolder,
            params: vec![
                ("project_path", project_path.to_string()),
                ("ignore_files", ignore_files.to_string()),
                ("file_extensions", file_extensions.to_string()),
            ],
        }
    }

    pub fn bug_fix(file_path: &str, error_msg: &str) -> Self {
        Self {
            endpoint: Endpoint::BugFixer,
            params: vec![
                ("file_path", file_path.to_string()),
                ("error_msg", error_msg.to_string()),
            ],
        }
    }

    /// Percent-encoded query string, `key=value` pairs joined by `&`.
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URL against the given backend base URL.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        format!("{}{}?{}", base, self.endpoint.path(), self.query_string())
    }
}
