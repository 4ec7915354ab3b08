//! Per-target facade: navigation, screenshots/PDF, script evaluation, network logs,
//! dialog handling, and document-root-scoped element lookups.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use browsercdp_cdp::dom::GetDocumentParams;
use browsercdp_cdp::network::{GetResponseBodyParams, RequestId};
use browsercdp_cdp::page::{
    EnableParams as PageEnableParams, HandleJavaScriptDialogParams, NavigateParams,
    PrintToPdfParams, ReloadParams,
};
use browsercdp_cdp::page::CaptureScreenshotParams;
use browsercdp_cdp::runtime::EvaluateParams;
use browsercdp_cdp::target::TargetId;
use browsercdp_cdp::{fetch, log as cdp_log, network};

use crate::connection::SessionHandle;
use crate::element::{Element, Realm};
use crate::error::{CdpError, Result};
use crate::events::Callback;
use crate::html::decode_base64;
use crate::locator::FindCriteria;

const LOAD_EVENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Idempotent toggles for the optional CDP domains a tab may subscribe to.
#[derive(Default)]
struct DomainToggles {
    page: AtomicBool,
    network: AtomicBool,
    fetch: AtomicBool,
    log: AtomicBool,
}

#[derive(Clone)]
pub struct Tab {
    target_id: TargetId,
    session: SessionHandle,
    toggles: Arc<DomainToggles>,
}

impl Tab {
    pub(crate) fn new(target_id: TargetId, session: SessionHandle) -> Self {
        Self {
            target_id,
            session,
            toggles: Arc::new(DomainToggles::default()),
        }
    }

    pub fn target_id(&self) -> &TargetId {
        &self.target_id
    }

    /// Navigates to `url` and waits for `Page.loadEventFired`, temporarily enabling
    /// `Page` events if they weren't already on.
    pub async fn go_to(&self, url: impl Into<String>) -> Result<()> {
        self.enable_page_events().await?;
        let wait = self.wait_for_load_event();
        self.session.execute(NavigateParams::new(url)).await?;
        wait.await
    }

    pub async fn refresh(&self) -> Result<()> {
        self.enable_page_events().await?;
        let wait = self.wait_for_load_event();
        self.session.execute(ReloadParams::default()).await?;
        wait.await
    }

    async fn wait_for_load_event(&self) -> Result<()> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let tx = std::sync::Mutex::new(Some(tx));
        self.session
            .events()
            .register(
                "Page.loadEventFired",
                Callback::Sync(Box::new(move |_| {
                    if let Some(tx) = tx.lock().unwrap().take() {
                        let _ = tx.send(());
                    }
                })),
                true,
            );
        match tokio::time::timeout(LOAD_EVENT_TIMEOUT, rx).await {
            Ok(Ok(())) => Ok(()),
            _ => Err(CdpError::WaitTimeout(LOAD_EVENT_TIMEOUT)),
        }
    }

    pub async fn enable_page_events(&self) -> Result<()> {
        if !self.toggles.page.swap(true, Ordering::SeqCst) {
            self.session.execute(PageEnableParams {}).await?;
        }
        Ok(())
    }

    pub async fn enable_network_events(&self) -> Result<()> {
        if !self.toggles.network.swap(true, Ordering::SeqCst) {
            self.session.execute(network::EnableParams {}).await?;
        }
        Ok(())
    }

    pub async fn enable_fetch_events(&self) -> Result<()> {
        if !self.toggles.fetch.swap(true, Ordering::SeqCst) {
            self.session.execute(fetch::EnableParams::default()).await?;
        }
        Ok(())
    }

    pub async fn enable_log_events(&self) -> Result<()> {
        if !self.toggles.log.swap(true, Ordering::SeqCst) {
            self.session.execute(cdp_log::EnableParams {}).await?;
        }
        Ok(())
    }

    /// Registers a callback for `event_name` on this tab's session. Async callbacks
    /// are spawned as independent tasks, never awaited inline by the dispatcher.
    pub fn on(&self, event_name: impl Into<String>, callback: Callback, temporary: bool) -> u64 {
        self.session.events().register(event_name, callback, temporary)
    }

    pub fn remove_listener(&self, id: u64) -> bool {
        self.session.events().remove(id)
    }

    pub async fn execute_js_script(&self, expression: impl Into<String>) -> Result<serde_json::Value> {
        let resp = self.session.execute(EvaluateParams::new(expression)).await?;
        if let Some(exc) = resp.result.exception_details {
            return Err(CdpError::ElementNotInteractable(exc.text));
        }
        Ok(resp.result.result.value.unwrap_or(serde_json::Value::Null))
    }

    pub async fn current_url(&self) -> Result<String> {
        let value = self.execute_js_script("window.location.href").await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| CdpError::ElementNotFound("window.location.href was not a string".into()))
    }

    pub async fn page_source(&self) -> Result<String> {
        self.document_root().await?.outer_html().await
    }

    pub async fn get_screenshot(&self) -> Result<Vec<u8>> {
        let resp = self.session.execute(CaptureScreenshotParams::default()).await?;
        decode_base64(&resp.result.data)
    }

    pub async fn print_to_pdf(&self) -> Result<Vec<u8>> {
        let resp = self.session.execute(PrintToPdfParams::default()).await?;
        decode_base64(&resp.result.data)
    }

    /// Returns the buffered `Network.requestWillBeSent` events whose request URL
    /// contains one of `match_patterns`. Callers that want everything should pass an
    /// empty slice.
    pub fn get_network_logs(&self, match_patterns: &[&str]) -> Result<Vec<network::RequestWillBeSentEvent>> {
        let entries: Vec<network::RequestWillBeSentEvent> = self
            .session
            .events()
            .network_log()
            .into_iter()
            .filter_map(|event| serde_json::from_value(event.params).ok())
            .filter(|entry: &network::RequestWillBeSentEvent| {
                match_patterns.is_empty()
                    || match_patterns.iter().any(|pattern| entry.request.url.contains(pattern))
            })
            .collect();
        if !match_patterns.is_empty() && entries.is_empty() {
            return Err(CdpError::ElementNotFound(format!(
                "no network request matched {match_patterns:?}"
            )));
        }
        Ok(entries)
    }

    pub async fn get_network_response_body(&self, request_id: RequestId) -> Result<String> {
        let resp = self.session.execute(GetResponseBodyParams::new(request_id)).await?;
        if resp.result.base64_encoded {
            let bytes = decode_base64(&resp.result.body)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        } else {
            Ok(resp.result.body)
        }
    }

    /// Whether a JavaScript dialog (alert/confirm/prompt/beforeunload) is currently
    /// open on this tab.
    pub fn has_dialog(&self) -> bool {
        self.session.events().current_dialog().is_some()
    }

    pub async fn handle_dialog(&self, accept: bool, prompt_text: Option<String>) -> Result<()> {
        if !self.has_dialog() {
            return Err(CdpError::ElementNotFound("no dialog is currently open".into()));
        }
        self.session
            .execute(HandleJavaScriptDialogParams {
                accept,
                prompt_text,
            })
            .await?;
        Ok(())
    }

    async fn document_root(&self) -> Result<Element> {
        let resp = self.session.execute(GetDocumentParams::default()).await?;
        Ok(Element::new(self.session.clone(), resp.result.root.node_id, Realm::default()))
    }

    pub async fn find_element(&self, criteria: &FindCriteria) -> Result<Element> {
        self.document_root().await?.find_element(criteria).await
    }

    pub async fn find_element_by(&self, expression: &str) -> Result<Element> {
        self.document_root().await?.find_element_by(expression).await
    }

    pub async fn find_or_wait_element(&self, criteria: &FindCriteria, timeout: Duration) -> Result<Element> {
        self.document_root().await?.find_or_wait_element(criteria, timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionHandler;
    use browsercdp_types::EventMessage;
    use std::sync::Arc;

    fn tab() -> Tab {
        let connection = Arc::new(ConnectionHandler::new("ws://127.0.0.1:0/"));
        let session = ConnectionHandler::for_session(&connection, "session-1");
        Tab::new(TargetId("target-1".into()), session)
    }

    fn request_will_be_sent(url: &str) -> EventMessage {
        EventMessage {
            method: "Network.requestWillBeSent".into(),
            session_id: None,
            params: serde_json::json!({
                "requestId": "1",
                "request": {"url": url, "method": "GET"},
                "timestamp": 0.0,
            }),
        }
    }

    #[tokio::test]
    async fn get_network_logs_filters_by_url_substring() {
        let tab = tab();
        tab.session.events().dispatch(request_will_be_sent("https://a.example/one")).await.unwrap();
        tab.session.events().dispatch(request_will_be_sent("https://b.example/two")).await.unwrap();

        let all = tab.get_network_logs(&[]).unwrap();
        assert_eq!(all.len(), 2);

        let matched = tab.get_network_logs(&["a.example"]).unwrap();
        assert_eq!(matched.len(), 1);
        assert!(matched[0].request.url.contains("a.example"));
    }

    #[tokio::test]
    async fn get_network_logs_errors_when_pattern_matches_nothing() {
        let tab = tab();
        tab.session.events().dispatch(request_will_be_sent("https://a.example/one")).await.unwrap();

        let err = tab.get_network_logs(&["no-such-host"]).unwrap_err();
        assert!(matches!(err, CdpError::ElementNotFound(_)));
    }

    #[tokio::test]
    async fn has_dialog_tracks_open_and_close() {
        let tab = tab();
        assert!(!tab.has_dialog());

        tab.session
            .events()
            .dispatch(EventMessage {
                method: "Page.javascriptDialogOpening".into(),
                session_id: None,
                params: serde_json::json!({}),
            })
            .await
            .unwrap();
        assert!(tab.has_dialog());

        tab.session
            .events()
            .dispatch(EventMessage {
                method: "Page.javascriptDialogClosed".into(),
                session_id: None,
                params: serde_json::json!({}),
            })
            .await
            .unwrap();
        assert!(!tab.has_dialog());
    }

    #[tokio::test]
    async fn handle_dialog_without_open_dialog_errors() {
        let tab = tab();
        let err = tab.handle_dialog(true, None).await.unwrap_err();
        assert!(matches!(err, CdpError::ElementNotFound(_)));
    }
}
