use browsercdp_types::{Command, Method};
use serde::{Deserialize, Serialize};

#[doc = "Dispatches a mouse event to the page.\n[dispatchMouseEvent](https://chromedevtools.github.io/devtools-protocol/tot/Input/#method-dispatchMouseEvent)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchMouseEventParams {
    #[serde(rename = "type")]
    pub event_type: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_count: Option<i64>,
}

impl DispatchMouseEventParams {
    pub fn click_at(x: f64, y: f64) -> [Self; 2] {
        [
            Self {
                event_type: "mousePressed".into(),
                x,
                y,
                button: Some("left".into()),
                click_count: Some(1),
            },
            Self {
                event_type: "mouseReleased".into(),
                x,
                y,
                button: Some("left".into()),
                click_count: Some(1),
            },
        ]
    }

    pub const IDENTIFIER: &'static str = "Input.dispatchMouseEvent";
}

impl Method for DispatchMouseEventParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchMouseEventReturns {}

impl Command for DispatchMouseEventParams {
    type Response = DispatchMouseEventReturns;
}

#[doc = "Dispatches a key event to the page.\n[dispatchKeyEvent](https://chromedevtools.github.io/devtools-protocol/tot/Input/#method-dispatchKeyEvent)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchKeyEventParams {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl DispatchKeyEventParams {
    pub fn char(text: impl Into<String>) -> Self {
        Self {
            event_type: "char".into(),
            text: Some(text.into()),
            key: None,
            code: None,
        }
    }

    pub const IDENTIFIER: &'static str = "Input.dispatchKeyEvent";
}

impl Method for DispatchKeyEventParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchKeyEventReturns {}

impl Command for DispatchKeyEventParams {
    type Response = DispatchKeyEventReturns;
}
