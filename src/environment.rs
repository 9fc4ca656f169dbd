use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Base URL of the review backend when nothing else is configured.
pub const LOCAL_BACKEND_URL: &str = "http://localhost:8000";

/// Which review backend the CLI talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on this machine at the default port.
    #[default]
    Local,
    /// Backend at a user-supplied base URL.
    Custom { backend_url: String },
}

impl Environment {
    /// Returns the backend base URL, without a trailing slash.
    pub fn backend_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_BACKEND_URL.to_string(),
            Environment::Custom { backend_url } => backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Picks the environment from an explicit override, falling back to the local backend.
    pub fn resolve(backend_url: Option<&str>) -> Self {
        match backend_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.parse().unwrap_or_default(),
            _ => Environment::Local,
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::Custom {
                backend_url: s.trim_end_matches('/').to_string(),
            });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.backend_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_is_the_default() {
        assert_eq!(Environment::default().backend_url(), "http://localhost:8000");
        assert_eq!(Environment::resolve(None), Environment::Local);
        assert_eq!(Environment::resolve(Some("  ")), Environment::Local);
    }

    #[test]
    fn custom_url_drops_trailing_slash() {
        let env: Environment = "http://10.0.0.2:9000/".parse().unwrap();
        assert_eq!(env.backend_url(), "http://10.0.0.2:9000");
        assert_eq!(env.to_string(), "Custom");
    }

    #[test]
    fn rejects_values_that_are_not_urls() {
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::resolve(Some("staging")), Environment::Local);
    }
}
