use crate::constants::*;

/// Runtime configuration, loaded once at process start. The backend base URL
/// is injected here rather than read ad hoc so tests can point the server at
/// a stub backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the invoice backend API, without a trailing slash.
    pub backend_url: String,
    pub host: String,
    pub port: u16,
    /// Origin allowed by the CORS layer (the browser UI's dev server).
    pub frontend_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let backend_url = std::env::var("BACKEND_API_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if backend_url.is_empty() {
            return Err("BACKEND_API_URL cannot be empty".to_string());
        }
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(format!(
                "BACKEND_API_URL must be an http(s) URL, got '{}'",
                backend_url
            ));
        }

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port_str = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let port: u16 = port_str
            .parse()
            .map_err(|_| format!("Invalid PORT '{}'", port_str))?;

        let frontend_origin = std::env::var("FRONTEND_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string());

        Ok(Self {
            backend_url,
            host,
            port,
            frontend_origin,
        })
    }

    /// Build a config pointing at an arbitrary backend, for tests.
    pub fn for_backend(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            host: DEFAULT_HOST.to_string(),
            port: 0,
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
