use std::io;

use async_tungstenite::tungstenite;
use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;

pub type Result<T, E = CdpError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CdpError {
    #[error("{0}")]
    Ws(#[from] tungstenite::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Protocol(#[from] browsercdp_types::Error),
    #[error("received no response for the pending command")]
    ChannelCanceled(#[from] RecvError),
    #[error("connection to the browser was closed")]
    ConnectionClosed,
    #[error("failed to establish a connection to the browser: {0}")]
    ConnectionFailed(String),
    #[error("lost connection to the browser and could not reconnect: {0}")]
    ReconnectionFailed(String),
    #[error("exhausted retries resending command {method}: {reason}")]
    ResendCommandFailed { method: String, reason: String },
    #[error("the browser process exited before it was ready")]
    BrowserNotRunning,
    #[error("no free debugging port could be found in the configured range")]
    NoFreePort,
    #[error("timed out waiting for the browser process to become reachable")]
    StartupTimeout,
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("element is not visible: {0}")]
    ElementNotVisible(String),
    #[error("element is not interactable: {0}")]
    ElementNotInteractable(String),
    #[error("click was intercepted by another element")]
    ClickIntercepted,
    #[error("invalid selector criteria: {0}")]
    InvalidSelector(String),
    #[error("invalid callback registration: {0}")]
    InvalidCallback(String),
    #[error("waited {0:?} for condition that never became true")]
    WaitTimeout(std::time::Duration),
    #[error("{0}")]
    InvalidProxyUri(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
