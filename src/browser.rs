//! Top-level handle to a single browser instance: launches (or attaches to) the
//! browser process, owns the root CDP connection, and hands out [`Tab`] handles for
//! the targets discovered on it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use browsercdp_cdp::browser::{
    Bounds, CloseParams, GetVersionParams, GetVersionReturns, GetWindowForTargetParams,
    GrantPermissionsParams, SetDownloadBehaviorParams, SetWindowBoundsParams,
};
use browsercdp_cdp::fetch;
use browsercdp_cdp::storage::{ClearCookiesParams, Cookie, GetCookiesParams, SetCookiesParams};
use browsercdp_cdp::target::{
    AttachToTargetParams, CreateBrowserContextParams, CreateTargetParams,
    DisposeBrowserContextParams, GetTargetsParams, SetDiscoverTargetsParams, TargetInfo,
};
use browsercdp_cdp::target::{BrowserContextId, TargetId};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::connection::ConnectionHandler;
use crate::error::{CdpError, Result};
use crate::events::Callback;
use crate::options::Options;
use crate::process::{pick_port, BrowserProcess};
use crate::proxy::extract_proxy_credentials;
use crate::tab::Tab;
use crate::tempdir::TempDirManager;

const PREFERENCES_RELATIVE_PATH: &str = "Default/Preferences";

pub struct Browser {
    connection: Arc<ConnectionHandler>,
    process: Mutex<Option<BrowserProcess>>,
    temp_dirs: Mutex<TempDirManager>,
    tabs: Mutex<HashMap<String, Tab>>,
    preferences_backup: Mutex<Option<(PathBuf, Vec<u8>)>>,
    options: Options,
}

impl Browser {
    /// Launches a fresh browser process per `options` and connects to it.
    pub async fn launch(mut options: Options) -> Result<Self> {
        let port = pick_port();
        let binary = options.resolve_binary()?;

        let proxy_credentials = extract_proxy_credentials(options.arguments_mut());

        let mut temp_dirs = TempDirManager::new();
        let fallback_dir = temp_dirs
            .create()
            .map_err(CdpError::Io)?
            .to_string_lossy()
            .to_string();

        let user_data_dir = options.resolved_user_data_dir(&fallback_dir).to_string();

        let preferences_backup = if options.has_prefs() {
            prepare_preferences(&options, &user_data_dir).await?
        } else {
            None
        };

        let args = options.assemble_arguments(&user_data_dir);
        let mut process = BrowserProcess::spawn(&binary, port, &args)?;
        let ws_url = process.wait_until_reachable(port).await?;

        info!("browser reachable at {ws_url}");
        let connection = Arc::new(ConnectionHandler::new(ws_url));

        let browser = Self {
            connection,
            process: Mutex::new(Some(process)),
            temp_dirs: Mutex::new(temp_dirs),
            tabs: Mutex::new(HashMap::new()),
            preferences_backup: Mutex::new(preferences_backup),
            options,
        };

        if let Some(creds) = proxy_credentials {
            browser.configure_proxy_auth(creds.username, creds.password).await?;
        }

        Ok(browser)
    }

    /// Attaches to an already-running browser at the given DevTools websocket URL,
    /// without spawning or owning a process.
    pub async fn connect(ws_url: impl Into<String>) -> Result<Self> {
        let connection = Arc::new(ConnectionHandler::new(ws_url.into()));
        Ok(Self {
            connection,
            process: Mutex::new(None),
            temp_dirs: Mutex::new(TempDirManager::new()),
            tabs: Mutex::new(HashMap::new()),
            preferences_backup: Mutex::new(None),
            options: Options::new(),
        })
    }

    async fn configure_proxy_auth(&self, username: String, password: String) -> Result<()> {
        self.connection
            .execute(fetch::EnableParams::auth_required())
            .await?;

        let connection = self.connection.clone();
        let username2 = username.clone();
        let password2 = password.clone();
        self.connection
            .register_callback(
                "Fetch.requestPaused",
                Callback::Async(Box::new(move |event| {
                    let connection = connection.clone();
                    Box::pin(async move {
                        if let Ok(paused) = serde_json::from_value::<
                            browsercdp_cdp::fetch::RequestPausedEvent,
                        >(event.params)
                        {
                            let _ = connection
                                .execute(browsercdp_cdp::fetch::ContinueRequestParams::new(
                                    paused.request_id,
                                ))
                                .await;
                        }
                    })
                })),
                false,
            )
            .await;

        let connection = self.connection.clone();
        self.connection
            .register_callback(
                "Fetch.authRequired",
                Callback::Async(Box::new(move |event| {
                    let connection = connection.clone();
                    let username = username2.clone();
                    let password = password2.clone();
                    Box::pin(async move {
                        if let Ok(required) = serde_json::from_value::<
                            browsercdp_cdp::fetch::AuthRequiredEvent,
                        >(event.params)
                        {
                            let _ = connection
                                .execute(browsercdp_cdp::fetch::ContinueWithAuthParams::provide_credentials(
                                    required.request_id,
                                    username,
                                    password,
                                ))
                                .await;
                            let _ = connection.execute(fetch::DisableParams {}).await;
                        }
                    })
                })),
                true,
            )
            .await;

        Ok(())
    }

    pub async fn version(&self) -> Result<GetVersionReturns> {
        Ok(self
            .connection
            .execute(GetVersionParams {})
            .await?
            .result)
    }

    pub async fn new_tab(&self, url: impl Into<String>) -> Result<Tab> {
        let resp = self
            .connection
            .execute(CreateTargetParams::new(url))
            .await?;
        self.attach_tab(resp.result.target_id).await
    }

    pub async fn new_blank_tab(&self) -> Result<Tab> {
        self.new_tab("about:blank").await
    }

    async fn attach_tab(&self, target_id: TargetId) -> Result<Tab> {
        let attach = self
            .connection
            .execute(AttachToTargetParams::new(target_id.clone()))
            .await?;
        let session = ConnectionHandler::for_session(&self.connection, attach.result.session_id.0);
        let tab = Tab::new(target_id.clone(), session);
        self.tabs.lock().await.insert(target_id.0.clone(), tab.clone());
        Ok(tab)
    }

    /// Returns every currently open tab, reconciled against the previous cache:
    /// targets the browser no longer reports are dropped, and targets discovered for
    /// the first time are inserted in the reverse order they were reported (newest
    /// target first), matching how the browser itself reports newly opened tabs.
    pub async fn tabs(&self) -> Result<Vec<Tab>> {
        self.connection
            .execute(SetDiscoverTargetsParams::new(true))
            .await
            .ok();
        let resp = self.connection.execute(GetTargetsParams {}).await?;
        let page_targets: Vec<&TargetInfo> = resp
            .result
            .target_infos
            .iter()
            .filter(|t| t.target_type == "page" && !t.url.contains("extension"))
            .collect();

        let mut cache = self.tabs.lock().await;
        let seen: Vec<String> = page_targets.iter().map(|t| t.target_id.0.clone()).collect();
        cache.retain(|id, _| seen.contains(id));

        let mut newly_discovered = Vec::new();
        for target in page_targets.iter().rev() {
            if !cache.contains_key(&target.target_id.0) {
                newly_discovered.push(target.target_id.clone());
            }
        }
        drop(cache);

        for target_id in newly_discovered {
            if let Err(err) = self.attach_tab(target_id.clone()).await {
                warn!("failed to attach to newly discovered tab {target_id:?}: {err}");
            }
        }

        let cache = self.tabs.lock().await;
        Ok(page_targets
            .iter()
            .filter_map(|t| cache.get(&t.target_id.0).cloned())
            .collect())
    }

    pub async fn create_browser_context(
        &self,
        proxy_server: Option<String>,
        proxy_bypass_list: Option<String>,
    ) -> Result<BrowserContextId> {
        let resp = self
            .connection
            .execute(CreateBrowserContextParams {
                dispose_on_detach: Some(true),
                proxy_server,
                proxy_bypass_list,
            })
            .await?;
        Ok(resp.result.browser_context_id)
    }

    pub async fn dispose_browser_context(&self, id: BrowserContextId) -> Result<()> {
        self.connection
            .execute(DisposeBrowserContextParams::new(id))
            .await?;
        Ok(())
    }

    pub async fn get_cookies(&self, browser_context_id: Option<BrowserContextId>) -> Result<Vec<Cookie>> {
        let resp = self
            .connection
            .execute(GetCookiesParams { browser_context_id })
            .await?;
        Ok(resp.result.cookies)
    }

    pub async fn set_cookies(&self, cookies: Vec<Cookie>) -> Result<()> {
        self.connection.execute(SetCookiesParams::new(cookies)).await?;
        Ok(())
    }

    pub async fn clear_cookies(&self, browser_context_id: Option<BrowserContextId>) -> Result<()> {
        self.connection
            .execute(ClearCookiesParams { browser_context_id })
            .await?;
        Ok(())
    }

    pub async fn window_bounds(&self, target_id: TargetId) -> Result<(i64, Bounds)> {
        let resp = self
            .connection
            .execute(GetWindowForTargetParams::new(target_id))
            .await?;
        Ok((resp.result.window_id, resp.result.bounds))
    }

    pub async fn set_window_bounds(&self, window_id: i64, bounds: Bounds) -> Result<()> {
        self.connection
            .execute(SetWindowBoundsParams::new(window_id, bounds))
            .await?;
        Ok(())
    }

    pub async fn set_download_behavior(
        &self,
        download_path: impl Into<String>,
        browser_context_id: Option<BrowserContextId>,
    ) -> Result<()> {
        self.connection
            .execute(SetDownloadBehaviorParams::allow(download_path, browser_context_id))
            .await?;
        Ok(())
    }

    pub async fn grant_permissions(
        &self,
        permissions: Vec<String>,
        origin: Option<String>,
        browser_context_id: Option<BrowserContextId>,
    ) -> Result<()> {
        self.connection
            .execute(GrantPermissionsParams::new(permissions, origin, browser_context_id))
            .await?;
        Ok(())
    }

    /// Sends `Browser.close`, terminates the owned process (if any), restores a
    /// backed-up `Preferences` file, and removes temp profile directories.
    pub async fn stop(&self) -> Result<()> {
        let _ = self.connection.execute(CloseParams {}).await;

        if let Some(mut process) = self.process.lock().await.take() {
            process.stop().await?;
        }

        if let Some((path, original)) = self.preferences_backup.lock().await.take() {
            if let Err(err) = tokio::fs::write(&path, original).await {
                warn!("failed to restore Preferences backup at {path:?}: {err}");
            }
        }

        self.temp_dirs.lock().await.cleanup().await;
        Ok(())
    }
}

/// Reads (or creates) the user-data-dir's `Default/Preferences` file, backs up the
/// original bytes if present, and writes a deep merge of the stored JSON with the
/// options' requested preference overrides.
async fn prepare_preferences(
    options: &Options,
    user_data_dir: &str,
) -> Result<Option<(PathBuf, Vec<u8>)>> {
    let default_dir = PathBuf::from(user_data_dir).join("Default");
    tokio::fs::create_dir_all(&default_dir).await.ok();
    let path = default_dir.join(
        PREFERENCES_RELATIVE_PATH
            .rsplit('/')
            .next()
            .unwrap_or("Preferences"),
    );

    let original = tokio::fs::read(&path).await.ok();
    let mut merged: Value = original
        .as_ref()
        .and_then(|bytes| serde_json::from_slice(bytes).ok())
        .unwrap_or_else(|| Value::Object(Map::new()));
    deep_merge(&mut merged, Value::Object(options.prefs().clone()));

    tokio::fs::write(&path, serde_json::to_vec_pretty(&merged)?).await.map_err(CdpError::Io)?;

    Ok(original.map(|bytes| (path.clone(), bytes)))
}

fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                deep_merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_merge_overwrites_leaves_and_preserves_untouched_siblings() {
        let mut base = serde_json::json!({
            "download": {"prompt_for_download": true},
            "profile": {"name": "default"},
        });
        let overlay = serde_json::json!({
            "download": {"prompt_for_download": false, "directory_upgrade": true},
        });
        deep_merge(&mut base, overlay);

        assert_eq!(
            base,
            serde_json::json!({
                "download": {"prompt_for_download": false, "directory_upgrade": true},
                "profile": {"name": "default"},
            })
        );
    }

    #[test]
    fn deep_merge_replaces_non_object_values_entirely() {
        let mut base = serde_json::json!({"flag": {"nested": true}});
        let overlay = serde_json::json!({"flag": false});
        deep_merge(&mut base, overlay);
        assert_eq!(base, serde_json::json!({"flag": false}));
    }
}
