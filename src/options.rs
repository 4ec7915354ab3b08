//! Command-line options for a browser instance: arguments, binary location, startup
//! timeout and the `Preferences` JSON overrides written into the profile directory.

use std::time::Duration;

use serde_json::{Map, Value};

use crate::error::{CdpError, Result};

#[derive(Debug, Clone, Default)]
pub struct Options {
    arguments: Vec<String>,
    binary_location: Option<String>,
    start_timeout: Duration,
    prefs: Map<String, Value>,
    headless: bool,
    user_data_dir: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self {
            start_timeout: Duration::from_secs(10),
            ..Default::default()
        }
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    /// Adds a command-line argument. Rejects a duplicate rather than silently
    /// deduplicating, since a repeated flag usually indicates caller confusion about
    /// what's already configured.
    pub fn add_argument(&mut self, argument: impl Into<String>) -> Result<()> {
        let argument = argument.into();
        if self.arguments.contains(&argument) {
            return Err(CdpError::InvalidSelector(format!(
                "argument already present: {argument}"
            )));
        }
        self.arguments.push(argument);
        Ok(())
    }

    pub fn binary_location(&self) -> Option<&str> {
        self.binary_location.as_deref()
    }

    pub fn set_binary_location(&mut self, location: impl Into<String>) {
        self.binary_location = Some(location.into());
    }

    /// The binary to launch: the explicitly configured location, or else the first of
    /// a handful of common Chromium-family binary names found on `PATH`, or (Windows
    /// only) the install path registered under `App Paths` in the registry. Resolved
    /// paths are canonicalized with `dunce` so a found path never carries Windows'
    /// `\\?\` verbatim-path prefix, which Chrome's own argument parsing rejects.
    pub fn resolve_binary(&self) -> Result<String> {
        if let Some(location) = &self.binary_location {
            return Ok(canonicalize_lossy(location));
        }
        const CANDIDATES: &[&str] = &[
            "google-chrome-stable",
            "google-chrome",
            "chromium-browser",
            "chromium",
            "msedge",
        ];
        if let Some(path) = CANDIDATES.iter().find_map(|name| which::which(name).ok()) {
            return Ok(canonicalize_lossy(&path.to_string_lossy()));
        }
        #[cfg(windows)]
        if let Some(path) = windows_registry_chrome_path() {
            return Ok(path);
        }
        Err(CdpError::ConnectionFailed(
            "no browser binary configured and none of the common Chromium binary names were found on PATH".into(),
        ))
    }

    pub fn start_timeout(&self) -> Duration {
        self.start_timeout
    }

    pub fn set_start_timeout(&mut self, timeout: Duration) {
        self.start_timeout = timeout;
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    pub fn set_headless(&mut self, headless: bool) {
        self.headless = headless;
    }

    pub fn user_data_dir(&self) -> Option<&str> {
        self.user_data_dir.as_deref()
    }

    pub fn set_user_data_dir(&mut self, dir: impl Into<String>) {
        self.user_data_dir = Some(dir.into());
    }

    pub fn set_proxy_server(&mut self, proxy: impl Into<String>) -> Result<()> {
        self.add_argument(format!("--proxy-server={}", proxy.into()))
    }

    /// Sets a nested preference, creating intermediate objects along `path` as
    /// needed, e.g. `["download", "default_directory"]`.
    pub fn set_pref_path(&mut self, path: &[&str], value: Value) {
        let Some((last, init)) = path.split_last() else {
            return;
        };
        let mut target = &mut self.prefs;
        for key in init {
            target = target
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .expect("set_pref_path segments never collide with a non-object value");
        }
        target.insert(last.to_string(), value);
    }

    pub fn set_default_download_directory(&mut self, path: impl Into<String>) {
        self.set_pref_path(&["download", "default_directory"], Value::String(path.into()));
    }

    pub fn set_prompt_for_download(&mut self, enabled: bool) {
        self.set_pref_path(&["download", "prompt_for_download"], Value::Bool(enabled));
    }

    pub fn prefs(&self) -> &Map<String, Value> {
        &self.prefs
    }

    pub fn has_prefs(&self) -> bool {
        !self.prefs.is_empty()
    }

    /// The user-data directory Chrome will actually be launched with: an explicit
    /// `--user-data-dir=...` argument wins, then `set_user_data_dir`, then `fallback`.
    /// Callers that need to act on the same directory Chrome uses (e.g. writing a
    /// `Preferences` file into it before launch) must resolve it through here rather
    /// than assuming `fallback` is what `assemble_arguments` will end up using.
    pub fn resolved_user_data_dir<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.arguments
            .iter()
            .find_map(|a| a.strip_prefix("--user-data-dir="))
            .or(self.user_data_dir.as_deref())
            .unwrap_or(fallback)
    }

    /// Resolves the arguments to launch the browser with: the configured arguments
    /// plus, unless the caller already supplied one, a fresh `--user-data-dir`.
    pub fn assemble_arguments(&self, fallback_user_data_dir: &str) -> Vec<String> {
        let mut args = self.arguments.clone();
        if self.headless && !args.iter().any(|a| a == "--headless" || a == "--headless=new") {
            args.push("--headless=new".to_string());
        }
        if !args.iter().any(|a| a.starts_with("--user-data-dir=")) {
            let dir = self.resolved_user_data_dir(fallback_user_data_dir);
            args.push(format!("--user-data-dir={dir}"));
        }
        args
    }
}

fn canonicalize_lossy(path: &str) -> String {
    dunce::canonicalize(path)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(windows)]
fn windows_registry_chrome_path() -> Option<String> {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    const APP_PATHS: &[&str] = &[
        r"SOFTWARE\Microsoft\Windows\CurrentVersion\App Paths\chrome.exe",
        r"SOFTWARE\Microsoft\Windows\CurrentVersion\App Paths\msedge.exe",
    ];
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    APP_PATHS
        .iter()
        .find_map(|subkey| hklm.open_subkey(subkey).and_then(|key| key.get_value::<String, _>("")).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_argument_is_rejected() {
        let mut opts = Options::new();
        opts.add_argument("--headless").unwrap();
        assert!(opts.add_argument("--headless").is_err());
    }

    #[test]
    fn nested_pref_path_builds_intermediate_objects() {
        let mut opts = Options::new();
        opts.set_default_download_directory("/tmp/downloads");
        assert_eq!(
            opts.prefs()["download"]["default_directory"],
            Value::String("/tmp/downloads".into())
        );
    }

    #[test]
    fn resolve_binary_prefers_explicit_location_over_path_search() {
        let mut opts = Options::new();
        opts.set_binary_location("/opt/custom-chrome");
        assert_eq!(opts.resolve_binary().unwrap(), "/opt/custom-chrome");
    }

    #[test]
    fn assemble_arguments_adds_user_data_dir_once() {
        let mut opts = Options::new();
        opts.add_argument("--user-data-dir=/custom").unwrap();
        let args = opts.assemble_arguments("/fallback");
        assert_eq!(args.iter().filter(|a| a.starts_with("--user-data-dir=")).count(), 1);
        assert!(args.contains(&"--user-data-dir=/custom".to_string()));
    }

    #[test]
    fn resolved_user_data_dir_prefers_explicit_argument_over_fallback() {
        let mut opts = Options::new();
        opts.add_argument("--user-data-dir=/custom").unwrap();
        assert_eq!(opts.resolved_user_data_dir("/fallback"), "/custom");
    }

    #[test]
    fn resolved_user_data_dir_prefers_set_user_data_dir_over_fallback() {
        let mut opts = Options::new();
        opts.set_user_data_dir("/profile");
        assert_eq!(opts.resolved_user_data_dir("/fallback"), "/profile");
    }

    #[test]
    fn resolved_user_data_dir_falls_back_when_unconfigured() {
        let opts = Options::new();
        assert_eq!(opts.resolved_user_data_dir("/fallback"), "/fallback");
    }
}
