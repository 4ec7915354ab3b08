//! Dispatches incoming CDP events to registered callbacks, and maintains the
//! connection-level state that falls out of observing the event stream: a bounded
//! network request log and the most recent open JavaScript dialog, if any.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use browsercdp_types::EventMessage;
use tracing::{error, warn};

use crate::error::{CdpError, Result};

const MAX_NETWORK_LOG: usize = 10_000;

type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

pub enum Callback {
    Sync(Box<dyn Fn(&EventMessage) + Send + Sync>),
    Async(Box<dyn Fn(EventMessage) -> BoxFuture + Send + Sync>),
}

struct Registration {
    id: u64,
    event: String,
    callback: Callback,
    temporary: bool,
}

#[derive(Default)]
pub struct EventRegistry {
    callbacks: Mutex<Vec<Registration>>,
    next_id: Mutex<u64>,
    network_log: Mutex<VecDeque<EventMessage>>,
    dialog: Mutex<Option<EventMessage>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for `event`, returning an id that can later be passed to
    /// [`EventRegistry::remove`]. `temporary` callbacks fire at most once.
    pub fn register(&self, event: impl Into<String>, callback: Callback, temporary: bool) -> u64 {
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        self.callbacks.lock().unwrap().push(Registration {
            id,
            event: event.into(),
            callback,
            temporary,
        });
        id
    }

    pub fn remove(&self, id: u64) -> bool {
        let mut callbacks = self.callbacks.lock().unwrap();
        let before = callbacks.len();
        callbacks.retain(|r| r.id != id);
        callbacks.len() != before
    }

    pub fn clear(&self) {
        self.callbacks.lock().unwrap().clear();
    }

    pub fn network_log(&self) -> Vec<EventMessage> {
        self.network_log.lock().unwrap().iter().cloned().collect()
    }

    pub fn current_dialog(&self) -> Option<EventMessage> {
        self.dialog.lock().unwrap().clone()
    }

    /// Runs every registered callback for this event, in registration order, then
    /// drops the temporary ones that just fired. Async callbacks are spawned as
    /// independent tasks rather than awaited inline: a callback that itself submits a
    /// command and awaits its response would otherwise deadlock against the very
    /// reader loop that is driving this dispatch.
    pub async fn dispatch(&self, event: EventMessage) -> Result<()> {
        if event.method == "Network.requestWillBeSent" {
            let mut log = self.network_log.lock().unwrap();
            log.push_back(event.clone());
            while log.len() > MAX_NETWORK_LOG {
                log.pop_front();
            }
        }
        if event.method == "Page.javascriptDialogOpening" {
            *self.dialog.lock().unwrap() = Some(event.clone());
        }
        if event.method == "Page.javascriptDialogClosed" {
            *self.dialog.lock().unwrap() = None;
        }

        let mut fired = Vec::new();
        let mut spawned = Vec::new();
        {
            let callbacks = self.callbacks.lock().unwrap();
            for reg in callbacks.iter() {
                if reg.event != event.method {
                    continue;
                }
                match &reg.callback {
                    Callback::Sync(f) => {
                        f(&event);
                    }
                    Callback::Async(f) => {
                        spawned.push(f(event.clone()));
                    }
                }
                if reg.temporary {
                    fired.push(reg.id);
                }
            }
        }

        for fut in spawned {
            tokio::spawn(async move {
                fut.await;
            });
        }

        for id in fired {
            self.remove(id);
        }

        Ok(())
    }
}

pub fn invalid_callback(msg: impl Into<String>) -> CdpError {
    let msg = msg.into();
    warn!("rejected callback registration: {msg}");
    CdpError::InvalidCallback(msg)
}

pub(crate) fn log_callback_panic(event: &str, err: &dyn std::fmt::Display) {
    error!("callback for {event} failed: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn event(method: &str) -> EventMessage {
        EventMessage {
            method: method.to_string(),
            session_id: None,
            params: serde_json::json!({}),
        }
    }

    #[tokio::test]
    async fn dispatches_in_registration_order() {
        let registry = EventRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            registry.register(
                "Foo.bar",
                Callback::Sync(Box::new(move |_| order.lock().unwrap().push(i))),
                false,
            );
        }

        registry.dispatch(event("Foo.bar")).await.unwrap();
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn temporary_callback_fires_once() {
        let registry = EventRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count2 = count.clone();
        registry.register(
            "Foo.bar",
            Callback::Sync(Box::new(move |_| {
                count2.fetch_add(1, Ordering::SeqCst);
            })),
            true,
        );

        registry.dispatch(event("Foo.bar")).await.unwrap();
        registry.dispatch(event("Foo.bar")).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn network_log_is_bounded() {
        let registry = EventRegistry::new();
        for _ in 0..(MAX_NETWORK_LOG + 5) {
            registry
                .dispatch(event("Network.requestWillBeSent"))
                .await
                .unwrap();
        }
        assert_eq!(registry.network_log().len(), MAX_NETWORK_LOG);
    }

    #[tokio::test]
    async fn dialog_tracks_open_and_close() {
        let registry = EventRegistry::new();
        assert!(registry.current_dialog().is_none());
        registry
            .dispatch(event("Page.javascriptDialogOpening"))
            .await
            .unwrap();
        assert!(registry.current_dialog().is_some());
        registry
            .dispatch(event("Page.javascriptDialogClosed"))
            .await
            .unwrap();
        assert!(registry.current_dialog().is_none());
    }
}
