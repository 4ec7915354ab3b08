use browsercdp_types::{Command, Method};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowserContextId(pub String);

impl AsRef<str> for BrowserContextId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl<T: Into<String>> From<T> for BrowserContextId {
    fn from(s: T) -> Self {
        BrowserContextId(s.into())
    }
}

#[doc = "Close the browser gracefully.\n[close](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-close)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseParams {}

impl CloseParams {
    pub const IDENTIFIER: &'static str = "Browser.close";
}

impl Method for CloseParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseReturns {}

impl Command for CloseParams {
    type Response = CloseReturns;
}

#[doc = "Returns version information.\n[getVersion](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-getVersion)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVersionParams {}

impl GetVersionParams {
    pub const IDENTIFIER: &'static str = "Browser.getVersion";
}

impl Method for GetVersionParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVersionReturns {
    pub protocol_version: String,
    pub product: String,
    pub revision: String,
    pub user_agent: String,
    pub js_version: String,
}

impl Command for GetVersionParams {
    type Response = GetVersionReturns;
}

#[doc = "Get the browser window that contains the devtools target.\n[getWindowForTarget](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-getWindowForTarget)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWindowForTargetParams {
    pub target_id: crate::target::TargetId,
}

impl GetWindowForTargetParams {
    pub fn new(target_id: crate::target::TargetId) -> Self {
        Self { target_id }
    }

    pub const IDENTIFIER: &'static str = "Browser.getWindowForTarget";
}

impl Method for GetWindowForTargetParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWindowForTargetReturns {
    pub window_id: i64,
    pub bounds: Bounds,
}

impl Command for GetWindowForTargetParams {
    type Response = GetWindowForTargetReturns;
}

#[doc = "Set position and/or size of the browser window.\n[setWindowBounds](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-setWindowBounds)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWindowBoundsParams {
    pub window_id: i64,
    pub bounds: Bounds,
}

impl SetWindowBoundsParams {
    pub fn new(window_id: i64, bounds: Bounds) -> Self {
        Self { window_id, bounds }
    }

    pub const IDENTIFIER: &'static str = "Browser.setWindowBounds";
}

impl Method for SetWindowBoundsParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWindowBoundsReturns {}

impl Command for SetWindowBoundsParams {
    type Response = SetWindowBoundsReturns;
}

#[doc = "Set the behavior when downloading a file.\n[setDownloadBehavior](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-setDownloadBehavior)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDownloadBehaviorParams {
    pub behavior: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_path: Option<String>,
}

impl SetDownloadBehaviorParams {
    pub fn allow(download_path: impl Into<String>, browser_context_id: Option<BrowserContextId>) -> Self {
        Self {
            behavior: "allow".into(),
            browser_context_id,
            download_path: Some(download_path.into()),
        }
    }

    pub const IDENTIFIER: &'static str = "Browser.setDownloadBehavior";
}

impl Method for SetDownloadBehaviorParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDownloadBehaviorReturns {}

impl Command for SetDownloadBehaviorParams {
    type Response = SetDownloadBehaviorReturns;
}

#[doc = "Grant specific permissions to the given origin and otherwise reject.\n[grantPermissions](https://chromedevtools.github.io/devtools-protocol/tot/Browser/#method-grantPermissions)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantPermissionsParams {
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
}

impl GrantPermissionsParams {
    pub fn new(permissions: Vec<String>, origin: Option<String>, browser_context_id: Option<BrowserContextId>) -> Self {
        Self {
            permissions,
            origin,
            browser_context_id,
        }
    }

    pub const IDENTIFIER: &'static str = "Browser.grantPermissions";
}

impl Method for GrantPermissionsParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantPermissionsReturns {}

impl Command for GrantPermissionsParams {
    type Response = GrantPermissionsReturns;
}
