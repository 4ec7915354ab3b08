//! Launches and tears down the browser binary, and waits for its debugging port to
//! come up.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::async_process::{Child, Command, Stdio};
use crate::error::{CdpError, Result};

/// Browsers bind their CDP debugging port in this range when none is requested
/// explicitly, to reduce collisions between concurrently running instances.
const PORT_RANGE: std::ops::RangeInclusive<u16> = 9223..=9322;

const STARTUP_POLL_INTERVAL: Duration = Duration::from_millis(100);
const STARTUP_TIMEOUT: Duration = Duration::from_secs(20);
const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(15);

pub fn pick_port() -> u16 {
    rand::thread_rng().gen_range(PORT_RANGE)
}

pub struct BrowserProcess {
    child: Child,
}

impl BrowserProcess {
    /// Spawns `binary` with `--remote-debugging-port=<port>` prepended to `arguments`,
    /// with stdout/stderr captured rather than inherited.
    pub fn spawn(binary: &str, port: u16, arguments: &[String]) -> Result<Self> {
        debug!("spawning {binary} on debugging port {port}");
        let mut cmd = Command::new(binary);
        cmd.arg(format!("--remote-debugging-port={port}"));
        cmd.args(arguments);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let child = cmd.spawn().map_err(|err| {
            CdpError::ConnectionFailed(format!("failed to spawn {binary}: {err}"))
        })?;
        Ok(Self { child })
    }

    /// Polls `http://127.0.0.1:<port>/json/version` until it answers or
    /// [`STARTUP_TIMEOUT`] elapses.
    pub async fn wait_until_reachable(&mut self, port: u16) -> Result<String> {
        let url = format!("http://127.0.0.1:{port}/json/version");
        let deadline = tokio::time::Instant::now() + STARTUP_TIMEOUT;

        loop {
            if let Some(status) = self.child.try_wait().map_err(CdpError::Io)? {
                return Err(CdpError::ConnectionFailed(format!(
                    "browser process exited early with status {status}"
                )));
            }

            match reqwest::get(&url).await {
                Ok(resp) if resp.status().is_success() => {
                    let body: serde_json::Value = resp.json().await?;
                    if let Some(ws_url) = body.get("webSocketDebuggerUrl").and_then(|v| v.as_str())
                    {
                        return Ok(ws_url.to_string());
                    }
                }
                Ok(_) | Err(_) => {}
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(CdpError::StartupTimeout);
            }
            tokio::time::sleep(STARTUP_POLL_INTERVAL).await;
        }
    }

    /// Terminates the process: SIGTERM (or the platform equivalent via `kill`) first,
    /// escalating to a hard kill if it hasn't exited within
    /// [`GRACEFUL_SHUTDOWN_TIMEOUT`].
    pub async fn stop(&mut self) -> Result<()> {
        if self.child.try_wait().map_err(CdpError::Io)?.is_some() {
            return Ok(());
        }

        self.child.kill().await.map_err(CdpError::Io)?;
        match tokio::time::timeout(GRACEFUL_SHUTDOWN_TIMEOUT, self.child.wait()).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(err)) => Err(CdpError::Io(err)),
            Err(_) => {
                warn!("browser process did not exit in time, forcing kill");
                self.child.kill().await.map_err(CdpError::Io)?;
                Ok(())
            }
        }
    }

    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }
}
