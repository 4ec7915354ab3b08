//! Correlates outgoing commands with their responses.
//!
//! Every command gets a fresh monotonic [`CallId`]; the matching response is
//! delivered to whichever caller is still holding the other end of the oneshot
//! channel registered for that id. A command whose caller gave up (timeout, dropped
//! future) is simply dropped from the map without ceremony.

use std::collections::HashMap;
use std::sync::Mutex;

use browsercdp_types::CallId;
use tokio::sync::oneshot;

use browsercdp_types::Response;

#[derive(Default)]
pub struct CommandManager {
    pending: Mutex<HashMap<CallId, oneshot::Sender<Response>>>,
    next_id: Mutex<u64>,
}

impl CommandManager {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            next_id: Mutex::new(0),
        }
    }

    /// Reserves the next id and registers a receiver that will resolve when the
    /// matching response arrives.
    pub fn create_pending(&self) -> (CallId, oneshot::Receiver<Response>) {
        let mut next_id = self.next_id.lock().unwrap();
        let id = CallId::new(*next_id);
        *next_id = next_id.wrapping_add(1);

        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().insert(id, tx);
        (id, rx)
    }

    /// Resolves the pending command with the given id, if still registered.
    pub fn resolve(&self, response: Response) {
        if let Some(tx) = self.pending.lock().unwrap().remove(&response.id) {
            let _ = tx.send(response);
        }
    }

    /// Drops a pending command without resolving it, e.g. after a client-side
    /// timeout.
    pub fn cancel(&self, id: CallId) {
        self.pending.lock().unwrap().remove(&id);
    }

    /// Fails every still-pending command, used when the connection drops.
    pub fn fail_all(&self) {
        self.pending.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_matching_id_only() {
        let mgr = CommandManager::new();
        let (id_a, rx_a) = mgr.create_pending();
        let (_id_b, rx_b) = mgr.create_pending();

        mgr.resolve(Response {
            id: id_a,
            result: Some(serde_json::json!({"ok": true})),
            error: None,
        });

        assert!(rx_a.try_recv().is_ok());
        assert!(rx_b.try_recv().is_err());
    }

    #[test]
    fn ids_are_monotonic() {
        let mgr = CommandManager::new();
        let (id_a, _) = mgr.create_pending();
        let (id_b, _) = mgr.create_pending();
        assert!(id_b.value() > id_a.value());
    }
}
