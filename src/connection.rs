//! Owns the websocket to a single browser (or browser-context) endpoint and turns it
//! into a request/response + event-dispatch facade.
//!
//! The connection is established lazily on first use and transparently re-established
//! if it drops; commands in flight when the drop happens are failed and the caller is
//! expected to retry (see [`ConnectionHandler::execute`]).

use std::borrow::Cow;
use std::sync::Arc;

use async_tungstenite::tungstenite::Message as WsMessage;
use browsercdp_types::{Command, CommandResponse, Message, Method, MethodCall};
use futures::{SinkExt, StreamExt};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, warn};

use crate::commands::CommandManager;
use crate::error::{CdpError, Result};
use crate::events::{Callback, EventRegistry};
use crate::transport::{text_of, Transport};

const MAX_RESEND_ATTEMPTS: usize = 2;

struct Active {
    outgoing: mpsc::UnboundedSender<WsMessage>,
    reader: tokio::task::JoinHandle<()>,
}

pub struct ConnectionHandler {
    ws_url: String,
    active: Mutex<Option<Active>>,
    commands: Arc<CommandManager>,
    events: Arc<EventRegistry>,
    session_id: Option<String>,
}

impl ConnectionHandler {
    pub fn new(ws_url: impl Into<String>) -> Self {
        Self {
            ws_url: ws_url.into(),
            active: Mutex::new(None),
            commands: Arc::new(CommandManager::new()),
            events: Arc::new(EventRegistry::new()),
            session_id: None,
        }
    }

    /// A handler scoped to a specific CDP session (flattened target protocol), sharing
    /// the same commands/events registries as its parent connection.
    pub fn for_session(parent: &Arc<Self>, session_id: impl Into<String>) -> SessionHandle {
        SessionHandle {
            parent: parent.clone(),
            session_id: session_id.into(),
        }
    }

    pub fn events(&self) -> &Arc<EventRegistry> {
        &self.events
    }

    async fn ensure_connected(&self) -> Result<()> {
        let mut active = self.active.lock().await;
        if active.is_some() {
            return Ok(());
        }
        *active = Some(self.connect_once().await?);
        Ok(())
    }

    async fn connect_once(&self) -> Result<Active> {
        debug!("connecting to {}", self.ws_url);
        let transport = Transport::connect(&self.ws_url).await?;
        let (outgoing_tx, mut outgoing_rx) = mpsc::unbounded_channel::<WsMessage>();

        let mut sink = transport.sink;
        tokio::spawn(async move {
            while let Some(msg) = outgoing_rx.recv().await {
                if sink.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let commands = self.commands.clone();
        let events = self.events.clone();
        let mut stream = transport.stream;
        let reader = tokio::spawn(async move {
            while let Some(frame) = stream.next().await {
                let frame = match frame {
                    Ok(frame) => frame,
                    Err(err) => {
                        warn!("websocket read error: {err}");
                        break;
                    }
                };
                let Some(text) = text_of(frame) else {
                    continue;
                };
                match serde_json::from_str::<Message>(&text) {
                    Ok(Message::Response(resp)) => commands.resolve(resp),
                    Ok(Message::Event(event)) => {
                        if let Err(err) = events.dispatch(event).await {
                            error!("event dispatch failed: {err}");
                        }
                    }
                    Err(err) => {
                        error!("malformed message from browser: {err} ({text})");
                    }
                }
            }
            commands.fail_all();
        });

        Ok(Active {
            outgoing: outgoing_tx,
            reader,
        })
    }

    async fn reconnect(&self) -> Result<()> {
        let mut active = self.active.lock().await;
        if let Some(old) = active.take() {
            old.reader.abort();
        }
        *active = Some(self.connect_once().await?);
        Ok(())
    }

    pub async fn register_callback(
        &self,
        event: impl Into<String>,
        callback: Callback,
        temporary: bool,
    ) -> u64 {
        self.events.register(event, callback, temporary)
    }

    pub fn remove_callback(&self, id: u64) -> bool {
        self.events.remove(id)
    }

    pub async fn execute<C: Command>(&self, cmd: C) -> Result<CommandResponse<C::Response>> {
        self.execute_in_session(cmd, None).await
    }

    pub async fn execute_in_session<C: Command>(
        &self,
        cmd: C,
        session_id: Option<String>,
    ) -> Result<CommandResponse<C::Response>> {
        let method = cmd.identifier();
        let params = serde_json::to_value(&cmd)?;

        let mut last_err = None;
        for attempt in 0..=MAX_RESEND_ATTEMPTS {
            if attempt > 0 {
                warn!("resending {method} after a failed send attempt {attempt}");
            }
            match self
                .try_execute(method.clone(), params.clone(), session_id.clone())
                .await
            {
                Ok(resp) => return self.into_command_response(resp, method),
                Err(err) => last_err = Some(err),
            }
        }

        Err(CdpError::ResendCommandFailed {
            method: method.into_owned(),
            reason: last_err.map(|e| e.to_string()).unwrap_or_default(),
        })
    }

    async fn try_execute(
        &self,
        method: Cow<'static, str>,
        params: serde_json::Value,
        session_id: Option<String>,
    ) -> Result<browsercdp_types::Response> {
        self.ensure_connected().await?;

        let (id, rx) = self.commands.create_pending();
        let call = MethodCall {
            id,
            session_id,
            method,
            params,
        };
        let text = serde_json::to_string(&call)?;

        let sent = {
            let active = self.active.lock().await;
            match active.as_ref() {
                Some(active) => active.outgoing.send(WsMessage::Text(text)).is_ok(),
                None => false,
            }
        };
        if !sent {
            self.commands.cancel(id);
            self.reconnect().await?;
            return Err(CdpError::ConnectionClosed);
        }

        rx.await.map_err(CdpError::from)
    }

    fn into_command_response<R: serde::de::DeserializeOwned + std::fmt::Debug>(
        &self,
        resp: browsercdp_types::Response,
        method: Cow<'static, str>,
    ) -> Result<CommandResponse<R>> {
        if let Some(err) = resp.error {
            return Err(CdpError::Protocol(err));
        }
        let result = resp.result.unwrap_or(serde_json::Value::Null);
        Ok(CommandResponse {
            id: resp.id,
            method,
            result: serde_json::from_value(result)?,
        })
    }
}

/// A lightweight handle scoping command execution to a particular CDP session
/// (`Target.attachToTarget`'s flattened mode), while sharing the underlying websocket.
#[derive(Clone)]
pub struct SessionHandle {
    parent: Arc<ConnectionHandler>,
    session_id: String,
}

impl SessionHandle {
    pub async fn execute<C: Command>(&self, cmd: C) -> Result<CommandResponse<C::Response>> {
        self.parent
            .execute_in_session(cmd, Some(self.session_id.clone()))
            .await
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn events(&self) -> &Arc<EventRegistry> {
        self.parent.events()
    }
}
