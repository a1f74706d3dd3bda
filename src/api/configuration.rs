use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

pub const DEFAULT_BASE_PATH: &str = "/api/v3";

/// Passive holder for everything the client needs to address and
/// authenticate against the server. Construction strips trailing slashes
/// from the base path so endpoint paths can always be appended verbatim.
#[derive(Debug, Clone)]
pub struct Configuration {
    base_path: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub default_headers: Vec<(String, String)>,
    pub user_agent: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

impl Configuration {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: strip_trailing_slashes(base_path),
            api_key: None,
            access_token: None,
            username: None,
            password: None,
            default_headers: Vec::new(),
            user_agent: None,
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn set_base_path(&mut self, base_path: &str) {
        self.base_path = strip_trailing_slashes(base_path);
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// The `Authorization` header value, if any credentials are configured.
    /// A bearer token takes precedence over basic credentials.
    pub(super) fn authorization(&self) -> Option<String> {
        if let Some(token) = &self.access_token {
            return Some(format!("Bearer {}", token));
        }
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            let credentials = BASE64.encode(format!("{}:{}", username, password));
            return Some(format!("Basic {}", credentials));
        }
        None
    }
}

fn strip_trailing_slashes(base_path: &str) -> String {
    base_path.trim_end_matches('/').to_string()
}
