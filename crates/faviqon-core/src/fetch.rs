//! Single favicon GET.
//!
//! Uses the curl crate (libcurl easy interface). Runs in the current thread;
//! call from `spawn_blocking` when used from async code.

use std::time::Duration;

use crate::config::FaviqonConfig;

/// Transport failure for one favicon fetch. The HTTP status is never an error.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// URL rejected by libcurl before any network activity (e.g. embedded NUL).
    #[error("invalid URL: {0}")]
    InvalidUrl(curl::Error),
    /// Handle configuration failed (unsupported option in this libcurl build).
    #[error("curl setup: {0}")]
    Setup(curl::Error),
    /// DNS, connect, TLS, timeout, or body read failure.
    #[error("GET failed: {0}")]
    Transfer(curl::Error),
}

/// Coarse failure class, used as a structured log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Dns,
    Connection,
    Tls,
    Other,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Dns => "dns",
            FailureKind::Connection => "connection",
            FailureKind::Tls => "tls",
            FailureKind::Other => "other",
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Transfer(e) => classify_curl_error(e),
            FetchError::InvalidUrl(_) | FetchError::Setup(_) => FailureKind::Other,
        }
    }
}

/// Classify a curl error for diagnostics.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return FailureKind::Dns;
    }
    if e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cacert()
    {
        return FailureKind::Tls;
    }
    if e.is_couldnt_connect()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FailureKind::Connection;
    }
    FailureKind::Other
}

/// Retrieves raw favicon bytes. Implementations must be callable from many
/// threads at once; the dispatcher shares one instance across all tasks.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Transport options applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Whole-request timeout (connect, TLS handshake, and body read).
    pub timeout: Duration,
    /// Skip certificate and hostname verification. Recon targets routinely
    /// present expired or self-signed certificates, so this tool turns
    /// verification off; it must stay an explicit choice at this boundary.
    pub accept_invalid_certs: bool,
    /// Redirect hop limit (None = libcurl default).
    pub max_redirections: Option<u32>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            accept_invalid_certs: true,
            max_redirections: None,
        }
    }
}

impl From<&FaviqonConfig> for FetchOptions {
    fn from(cfg: &FaviqonConfig) -> Self {
        Self {
            // Zero would disable the libcurl timeout entirely.
            timeout: Duration::from_secs(cfg.request_timeout_secs.max(1)),
            accept_invalid_certs: cfg.accept_invalid_certs,
            max_redirections: cfg.max_redirections,
        }
    }
}

/// libcurl-backed fetcher. Each call uses its own easy handle, dropped (and its
/// connection released) when the call returns or unwinds.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: FetchOptions,
}

impl CurlFetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(FetchError::InvalidUrl)?;
        easy.get(true).map_err(FetchError::Setup)?;
        easy.follow_location(true).map_err(FetchError::Setup)?;
        if let Some(max) = self.opts.max_redirections {
            easy.max_redirections(max).map_err(FetchError::Setup)?;
        }
        easy.timeout(self.opts.timeout).map_err(FetchError::Setup)?;
        if self.opts.accept_invalid_certs {
            easy.ssl_verify_peer(false).map_err(FetchError::Setup)?;
            easy.ssl_verify_host(false).map_err(FetchError::Setup)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(FetchError::Setup)?;
            transfer.perform().map_err(FetchError::Transfer)?;
        }

        // Status is deliberately not checked: error pages are hashed like icons.
        if let Ok(code) = easy.response_code() {
            tracing::debug!(url, code, bytes = body.len(), "favicon fetched");
        }

        Ok(body)
    }
}
