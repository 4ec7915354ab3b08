use std::borrow::Cow;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Identifier assigned to an outgoing command by a [`CommandRegistry`](https://docs.rs/browsercdp).
///
/// Scoped per connection: two commands on different connections may share an id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallId(u64);

impl CallId {
    pub fn new(id: u64) -> Self {
        CallId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallId({})", self.0)
    }
}

/// A message sent by the client: `{id, method, params}`, optionally scoped to a session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MethodCall {
    pub id: CallId,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub method: Cow<'static, str>,
    pub params: serde_json::Value,
}

/// Implemented by every CDP parameter type. Identifies the `Domain.method` string used
/// as both the wire `method` field and the dispatch key for the events registry.
pub trait Method {
    /// The whole string identifier for this method, e.g. `DOM.removeNode`.
    fn identifier(&self) -> Cow<'static, str>;

    /// The domain this method belongs to, e.g. `DOM`.
    fn domain_name(&self) -> Cow<'static, str> {
        self.split().0
    }

    /// The method name without its domain prefix, e.g. `removeNode`.
    fn method_name(&self) -> Cow<'static, str> {
        self.split().1
    }

    fn split(&self) -> (Cow<'static, str>, Cow<'static, str>) {
        let id = self.identifier();
        let mut iter = id.split('.');
        let domain = iter.next().unwrap_or_default().to_string();
        let method = iter.next().unwrap_or_default().to_string();
        (Cow::Owned(domain), Cow::Owned(method))
    }
}

/// A CDP command: a serializable parameter object paired with the type its response
/// deserializes into.
pub trait Command: Serialize + Method {
    type Response: DeserializeOwned + fmt::Debug;
}

/// A command response, still bearing the id and method it answers.
#[derive(Debug)]
pub struct CommandResponse<T> {
    pub id: CallId,
    pub method: Cow<'static, str>,
    pub result: T,
}

impl<T> std::ops::Deref for CommandResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.result
    }
}

/// The raw `{id, result | error}` envelope received over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    pub id: CallId,
    pub result: Option<serde_json::Value>,
    pub error: Option<Error>,
}

/// The raw `{method, params, sessionId?}` envelope received over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct EventMessage {
    pub method: String,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    pub params: serde_json::Value,
}

/// Either half of the discriminated incoming stream.
///
/// The discriminator is purely structural: `Response` requires an integer `id`, so
/// serde's untagged matching tries it first and falls through to `Event` when `id` is
/// absent from the top level of the message. This is deliberate: it is the only place
/// in the codebase that distinguishes a response from an event (Invariant 3).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Response(Response),
    Event(EventMessage),
}

/// A CDP-level error payload, as found in a `Response.error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub code: i64,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CDP error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_with_id_is_response() {
        let raw = r#"{"id": 7, "result": {}}"#;
        match serde_json::from_str::<Message>(raw).unwrap() {
            Message::Response(r) => assert_eq!(r.id, CallId::new(7)),
            Message::Event(_) => panic!("expected response"),
        }
    }

    #[test]
    fn nested_id_in_params_is_still_an_event() {
        // An `id` nested inside `params` must not be mistaken for the top-level
        // discriminator (Testable Property #5).
        let raw = r#"{"method": "X", "params": {"id": 7}}"#;
        match serde_json::from_str::<Message>(raw).unwrap() {
            Message::Event(e) => assert_eq!(e.method, "X"),
            Message::Response(_) => panic!("expected event"),
        }
    }

    #[test]
    fn event_without_id_is_event() {
        let raw = r#"{"method": "Page.loadEventFired", "params": {}}"#;
        match serde_json::from_str::<Message>(raw).unwrap() {
            Message::Event(e) => assert_eq!(e.method, "Page.loadEventFired"),
            Message::Response(_) => panic!("expected event"),
        }
    }
}
