use browsercdp_types::{Command, Method};
use serde::{Deserialize, Serialize};

use crate::browser::BrowserContextId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub String);

impl AsRef<str> for TargetId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl<T: Into<String>> From<T> for TargetId {
    fn from(s: T) -> Self {
        TargetId(s.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl<T: Into<String>> From<T> for SessionId {
    fn from(s: T) -> Self {
        SessionId(s.into())
    }
}

#[doc = "Info about a target, as returned by getTargets/targetCreated/targetInfoChanged."]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfo {
    pub target_id: TargetId,
    #[serde(rename = "type")]
    pub target_type: String,
    pub title: String,
    pub url: String,
    pub attached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opener_id: Option<TargetId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
}

#[doc = "Creates a new page.\n[createTarget](https://chromedevtools.github.io/devtools-protocol/tot/Target/#method-createTarget)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTargetParams {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_window: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,
}

impl CreateTargetParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
            browser_context_id: None,
            new_window: None,
            background: None,
        }
    }

    pub fn blank() -> Self {
        Self::new("about:blank")
    }

    pub const IDENTIFIER: &'static str = "Target.createTarget";
}

impl Method for CreateTargetParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTargetReturns {
    pub target_id: TargetId,
}

impl Command for CreateTargetParams {
    type Response = CreateTargetReturns;
}

#[doc = "Closes the target, equivalent to closing a browser tab.\n[closeTarget](https://chromedevtools.github.io/devtools-protocol/tot/Target/#method-closeTarget)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTargetParams {
    pub target_id: TargetId,
}

impl CloseTargetParams {
    pub fn new(target_id: impl Into<TargetId>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }

    pub const IDENTIFIER: &'static str = "Target.closeTarget";
}

impl Method for CloseTargetParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTargetReturns {
    pub success: bool,
}

impl Command for CloseTargetParams {
    type Response = CloseTargetReturns;
}

#[doc = "Attaches to the target with given id, using flat session-id addressing.\n[attachToTarget](https://chromedevtools.github.io/devtools-protocol/tot/Target/#method-attachToTarget)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachToTargetParams {
    pub target_id: TargetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatten: Option<bool>,
}

impl AttachToTargetParams {
    pub fn new(target_id: impl Into<TargetId>) -> Self {
        Self {
            target_id: target_id.into(),
            flatten: Some(true),
        }
    }

    pub const IDENTIFIER: &'static str = "Target.attachToTarget";
}

impl Method for AttachToTargetParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachToTargetReturns {
    pub session_id: SessionId,
}

impl Command for AttachToTargetParams {
    type Response = AttachToTargetReturns;
}

#[doc = "Returns the targets currently known about.\n[getTargets](https://chromedevtools.github.io/devtools-protocol/tot/Target/#method-getTargets)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTargetsParams {}

impl GetTargetsParams {
    pub const IDENTIFIER: &'static str = "Target.getTargets";
}

impl Method for GetTargetsParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTargetsReturns {
    pub target_infos: Vec<TargetInfo>,
}

impl Command for GetTargetsParams {
    type Response = GetTargetsReturns;
}

#[doc = "Creates a new empty browser context, isolated from other contexts, akin to an incognito profile.\n[createBrowserContext](https://chromedevtools.github.io/devtools-protocol/tot/Target/#method-createBrowserContext)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrowserContextParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispose_on_detach: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_bypass_list: Option<String>,
}

impl CreateBrowserContextParams {
    pub const IDENTIFIER: &'static str = "Target.createBrowserContext";
}

impl Method for CreateBrowserContextParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrowserContextReturns {
    pub browser_context_id: BrowserContextId,
}

impl Command for CreateBrowserContextParams {
    type Response = CreateBrowserContextReturns;
}

#[doc = "Disposes of a browser context, all the belonging pages will be closed without calling their beforeunload hooks.\n[disposeBrowserContext](https://chromedevtools.github.io/devtools-protocol/tot/Target/#method-disposeBrowserContext)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposeBrowserContextParams {
    pub browser_context_id: BrowserContextId,
}

impl DisposeBrowserContextParams {
    pub fn new(browser_context_id: BrowserContextId) -> Self {
        Self { browser_context_id }
    }

    pub const IDENTIFIER: &'static str = "Target.disposeBrowserContext";
}

impl Method for DisposeBrowserContextParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposeBrowserContextReturns {}

impl Command for DisposeBrowserContextParams {
    type Response = DisposeBrowserContextReturns;
}

#[doc = "Controls whether to discover available targets and notify via targetCreated/targetInfoChanged/targetDestroyed.\n[setDiscoverTargets](https://chromedevtools.github.io/devtools-protocol/tot/Target/#method-setDiscoverTargets)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDiscoverTargetsParams {
    pub discover: bool,
}

impl SetDiscoverTargetsParams {
    pub fn new(discover: bool) -> Self {
        Self { discover }
    }

    pub const IDENTIFIER: &'static str = "Target.setDiscoverTargets";
}

impl Method for SetDiscoverTargetsParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDiscoverTargetsReturns {}

impl Command for SetDiscoverTargetsParams {
    type Response = SetDiscoverTargetsReturns;
}

#[doc = "Issued when a possible inspection target is created.\n[targetCreated](https://chromedevtools.github.io/devtools-protocol/tot/Target/#event-targetCreated)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCreatedEvent {
    pub target_info: TargetInfo,
}

impl TargetCreatedEvent {
    pub const IDENTIFIER: &'static str = "Target.targetCreated";
}

#[doc = "Issued when some information about a target has changed.\n[targetInfoChanged](https://chromedevtools.github.io/devtools-protocol/tot/Target/#event-targetInfoChanged)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfoChangedEvent {
    pub target_info: TargetInfo,
}

impl TargetInfoChangedEvent {
    pub const IDENTIFIER: &'static str = "Target.targetInfoChanged";
}

#[doc = "Issued when a target is destroyed.\n[targetDestroyed](https://chromedevtools.github.io/devtools-protocol/tot/Target/#event-targetDestroyed)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDestroyedEvent {
    pub target_id: TargetId,
}

impl TargetDestroyedEvent {
    pub const IDENTIFIER: &'static str = "Target.targetDestroyed";
}
