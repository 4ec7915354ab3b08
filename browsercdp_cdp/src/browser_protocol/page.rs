use browsercdp_types::{Command, Method};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub String);

impl AsRef<str> for FrameId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl<T: Into<String>> From<T> for FrameId {
    fn from(s: T) -> Self {
        FrameId(s.into())
    }
}

#[doc = "Enables page domain notifications.\n[enable](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-enable)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableParams {}

impl EnableParams {
    pub const IDENTIFIER: &'static str = "Page.enable";
}

impl Method for EnableParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableReturns {}

impl Command for EnableParams {
    type Response = EnableReturns;
}

#[doc = "Navigates current page to the given URL.\n[navigate](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-navigate)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateParams {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<FrameId>,
}

impl NavigateParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            referrer: None,
            frame_id: None,
        }
    }

    pub const IDENTIFIER: &'static str = "Page.navigate";
}

impl Method for NavigateParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateReturns {
    pub frame_id: FrameId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

impl Command for NavigateParams {
    type Response = NavigateReturns;
}

#[doc = "Reloads given page, with the given options.\n[reload](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-reload)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_cache: Option<bool>,
}

impl ReloadParams {
    pub const IDENTIFIER: &'static str = "Page.reload";
}

impl Method for ReloadParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadReturns {}

impl Command for ReloadParams {
    type Response = ReloadReturns;
}

#[doc = "Returns present frame tree structure.\n[getFrameTree](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-getFrameTree)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFrameTreeParams {}

impl GetFrameTreeParams {
    pub const IDENTIFIER: &'static str = "Page.getFrameTree";
}

impl Method for GetFrameTreeParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub id: FrameId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<FrameId>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTree {
    pub frame: Frame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_frames: Option<Vec<FrameTree>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFrameTreeReturns {
    pub frame_tree: FrameTree,
}

impl Command for GetFrameTreeParams {
    type Response = GetFrameTreeReturns;
}

#[doc = "Creates an isolated world for the given frame.\n[createIsolatedWorld](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-createIsolatedWorld)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIsolatedWorldParams {
    pub frame_id: FrameId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_univeral_access: Option<bool>,
}

impl CreateIsolatedWorldParams {
    pub fn new(frame_id: impl Into<FrameId>) -> Self {
        Self {
            frame_id: frame_id.into(),
            world_name: None,
            grant_univeral_access: Some(true),
        }
    }

    pub const IDENTIFIER: &'static str = "Page.createIsolatedWorld";
}

impl Method for CreateIsolatedWorldParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIsolatedWorldReturns {
    pub execution_context_id: i64,
}

impl Command for CreateIsolatedWorldParams {
    type Response = CreateIsolatedWorldReturns;
}

#[doc = "Handles a JavaScript dialog (alert/confirm/prompt/beforeunload) currently showing.\n[handleJavaScriptDialog](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-handleJavaScriptDialog)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleJavaScriptDialogParams {
    pub accept: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_text: Option<String>,
}

impl HandleJavaScriptDialogParams {
    pub fn new(accept: bool) -> Self {
        Self {
            accept,
            prompt_text: None,
        }
    }

    pub const IDENTIFIER: &'static str = "Page.handleJavaScriptDialog";
}

impl Method for HandleJavaScriptDialogParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleJavaScriptDialogReturns {}

impl Command for HandleJavaScriptDialogParams {
    type Response = HandleJavaScriptDialogReturns;
}

#[doc = "Captures screenshot of the current page.\n[captureScreenshot](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-captureScreenshot)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureScreenshotParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_beyond_viewport: Option<bool>,
}

impl CaptureScreenshotParams {
    pub const IDENTIFIER: &'static str = "Page.captureScreenshot";
}

impl Method for CaptureScreenshotParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureScreenshotReturns {
    pub data: String,
}

impl Command for CaptureScreenshotParams {
    type Response = CaptureScreenshotReturns;
}

#[doc = "Print page as PDF.\n[printToPDF](https://chromedevtools.github.io/devtools-protocol/tot/Page/#method-printToPDF)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintToPdfParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landscape: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,
}

impl PrintToPdfParams {
    pub const IDENTIFIER: &'static str = "Page.printToPDF";
}

impl Method for PrintToPdfParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintToPdfReturns {
    pub data: String,
}

impl Command for PrintToPdfParams {
    type Response = PrintToPdfReturns;
}

#[doc = "Fired for top-level page lifecycle events.\n[loadEventFired](https://chromedevtools.github.io/devtools-protocol/tot/Page/#event-loadEventFired)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadEventFiredEvent {
    pub timestamp: f64,
}

impl LoadEventFiredEvent {
    pub const IDENTIFIER: &'static str = "Page.loadEventFired";
}

#[doc = "Fired when frame has stopped loading.\n[frameStoppedLoading](https://chromedevtools.github.io/devtools-protocol/tot/Page/#event-frameStoppedLoading)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStoppedLoadingEvent {
    pub frame_id: FrameId,
}

impl FrameStoppedLoadingEvent {
    pub const IDENTIFIER: &'static str = "Page.frameStoppedLoading";
}

#[doc = "Fired when a JavaScript initiated dialog is about to open.\n[javascriptDialogOpening](https://chromedevtools.github.io/devtools-protocol/tot/Page/#event-javascriptDialogOpening)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavascriptDialogOpeningEvent {
    pub url: String,
    pub message: String,
    #[serde(rename = "type")]
    pub dialog_type: String,
    #[serde(default)]
    pub has_browser_handler: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prompt: Option<String>,
}

impl JavascriptDialogOpeningEvent {
    pub const IDENTIFIER: &'static str = "Page.javascriptDialogOpening";
}

#[doc = "Fired when a JavaScript initiated dialog has been closed.\n[javascriptDialogClosed](https://chromedevtools.github.io/devtools-protocol/tot/Page/#event-javascriptDialogClosed)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavascriptDialogClosedEvent {
    pub result: bool,
    #[serde(default)]
    pub user_input: String,
}

impl JavascriptDialogClosedEvent {
    pub const IDENTIFIER: &'static str = "Page.javascriptDialogClosed";
}
