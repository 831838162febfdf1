use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "promptbox-server", about = "Prompt and file submission endpoint")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "PROMPTBOX_BIND", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PROMPTBOX_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Gemini API key. Loaded at startup; no route calls Gemini yet.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Maximum size of a request body, in bytes
    #[arg(long, env = "PROMPTBOX_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Allow cross-origin requests from any origin
    #[arg(long, env = "PROMPTBOX_CORS")]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            gemini_api_key: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig::new(self.gemini_api_key.clone())
    }
}

/// Gemini integration settings. Read-only after startup; a missing or blank
/// key means the integration is disabled.
#[derive(Clone, Default)]
pub struct GeminiConfig {
    api_key: Option<String>,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
