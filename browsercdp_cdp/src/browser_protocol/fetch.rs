use std::collections::HashMap;

use browsercdp_types::{Command, Method};
use serde::{Deserialize, Serialize};

use crate::network::RequestId;

#[doc = "Enables issuing of requestPaused events. A request will be paused until client calls\none of continueRequest, failRequest or fulfillRequest.\n[enable](https://chromedevtools.github.io/devtools-protocol/tot/Fetch/#method-enable)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_auth_requests: Option<bool>,
}

impl EnableParams {
    pub fn auth_required() -> Self {
        Self {
            handle_auth_requests: Some(true),
        }
    }

    pub const IDENTIFIER: &'static str = "Fetch.enable";
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

#[doc = "Disables the fetch domain.\n[disable](https://chromedevtools.github.io/devtools-protocol/tot/Fetch/#method-disable)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableParams {}

impl DisableParams {
    pub const IDENTIFIER: &'static str = "Fetch.disable";
}

impl Method for DisableParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableReturns {}

impl Command for DisableParams {
    type Response = DisableReturns;
}

#[doc = "Continues the request, optionally modifying some of its parameters.\n[continueRequest](https://chromedevtools.github.io/devtools-protocol/tot/Fetch/#method-continueRequest)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueRequestParams {
    pub request_id: RequestId,
}

impl ContinueRequestParams {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    pub const IDENTIFIER: &'static str = "Fetch.continueRequest";
}

impl Method for ContinueRequestParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueRequestReturns {}

impl Command for ContinueRequestParams {
    type Response = ContinueRequestReturns;
}

#[doc = "Continues a request supplying authChallengeResponse following authRequired event.\n[continueWithAuth](https://chromedevtools.github.io/devtools-protocol/tot/Fetch/#method-continueWithAuth)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueWithAuthParams {
    pub request_id: RequestId,
    pub auth_challenge_response: AuthChallengeResponse,
}

impl ContinueWithAuthParams {
    pub fn provide_credentials(
        request_id: RequestId,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            request_id,
            auth_challenge_response: AuthChallengeResponse {
                response: "ProvideCredentials".into(),
                username: Some(username.into()),
                password: Some(password.into()),
            },
        }
    }

    pub const IDENTIFIER: &'static str = "Fetch.continueWithAuth";
}

impl Method for ContinueWithAuthParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthChallengeResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueWithAuthReturns {}

impl Command for ContinueWithAuthParams {
    type Response = ContinueWithAuthReturns;
}

#[doc = "Issued when the domain is enabled and the request URL matches the specified filter.\n[requestPaused](https://chromedevtools.github.io/devtools-protocol/tot/Fetch/#event-requestPaused)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPausedEvent {
    pub request_id: RequestId,
    pub request: FetchRequest,
}

impl RequestPausedEvent {
    pub const IDENTIFIER: &'static str = "Fetch.requestPaused";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[doc = "Issued when the domain is enabled with handleAuthRequests set to true, and an authentication\nchallenge is encountered.\n[authRequired](https://chromedevtools.github.io/devtools-protocol/tot/Fetch/#event-authRequired)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequiredEvent {
    pub request_id: RequestId,
    pub auth_challenge: AuthChallenge,
}

impl AuthRequiredEvent {
    pub const IDENTIFIER: &'static str = "Fetch.authRequired";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthChallenge {
    pub origin: String,
    pub scheme: String,
    pub realm: String,
}
