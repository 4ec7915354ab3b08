use browsercdp_types::{Command, Method};
use serde::{Deserialize, Serialize};

use crate::browser::BrowserContextId;

#[doc = "Represents a cookie object.\n[Cookie](https://chromedevtools.github.io/devtools-protocol/tot/Network/#type-Cookie)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub http_only: bool,
}

#[doc = "Gets all cookies for the current browser context.\n[getCookies](https://chromedevtools.github.io/devtools-protocol/tot/Storage/#method-getCookies)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCookiesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
}

impl GetCookiesParams {
    pub const IDENTIFIER: &'static str = "Storage.getCookies";
}

impl Method for GetCookiesParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCookiesReturns {
    pub cookies: Vec<Cookie>,
}

impl Command for GetCookiesParams {
    type Response = GetCookiesReturns;
}

#[doc = "Sets given cookies.\n[setCookies](https://chromedevtools.github.io/devtools-protocol/tot/Storage/#method-setCookies)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCookiesParams {
    pub cookies: Vec<Cookie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
}

impl SetCookiesParams {
    pub fn new(cookies: Vec<Cookie>) -> Self {
        Self {
            cookies,
            browser_context_id: None,
        }
    }

    pub const IDENTIFIER: &'static str = "Storage.setCookies";
}

impl Method for SetCookiesParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCookiesReturns {}

impl Command for SetCookiesParams {
    type Response = SetCookiesReturns;
}

#[doc = "Clears cookies.\n[clearCookies](https://chromedevtools.github.io/devtools-protocol/tot/Storage/#method-clearCookies)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCookiesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_context_id: Option<BrowserContextId>,
}

impl ClearCookiesParams {
    pub const IDENTIFIER: &'static str = "Storage.clearCookies";
}

impl Method for ClearCookiesParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCookiesReturns {}

impl Command for ClearCookiesParams {
    type Response = ClearCookiesReturns;
}
