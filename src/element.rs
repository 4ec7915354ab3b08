//! A single DOM element, scoped to the frame/execution-context it was found in so
//! that nested lookups (`element.find_element(...)`) never leak across an iframe
//! boundary.

use std::time::Duration;

use browsercdp_cdp::dom::{
    DescribeNodeParams, GetBoxModelParams, GetOuterHtmlParams, NodeId, QuerySelectorParams,
    RequestNodeParams, ResolveNodeParams, ScrollIntoViewIfNeededParams,
};
use browsercdp_cdp::input::{DispatchKeyEventParams, DispatchMouseEventParams};
use browsercdp_cdp::page::CreateIsolatedWorldParams;
use browsercdp_cdp::runtime::{CallArgument, CallFunctionOnParams};

use crate::connection::SessionHandle;
use crate::error::{CdpError, Result};
use crate::locator::{classify, ensure_relative_xpath, FindCriteria, Locator};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Resolves the realm (frame + execution context) a downstream script evaluation
/// should run in. `None` means the page's default main-world context.
#[derive(Debug, Clone, Copy, Default)]
pub struct Realm {
    pub execution_context_id: Option<i64>,
}

#[derive(Clone)]
pub struct Element {
    session: SessionHandle,
    node_id: NodeId,
    realm: Realm,
}

impl Element {
    pub(crate) fn new(session: SessionHandle, node_id: NodeId, realm: Realm) -> Self {
        Self {
            session,
            node_id,
            realm,
        }
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub async fn outer_html(&self) -> Result<String> {
        let resp = self
            .session
            .execute(GetOuterHtmlParams::new(self.node_id))
            .await?;
        Ok(resp.result.outer_html)
    }

    pub async fn attributes(&self) -> Result<Vec<(String, String)>> {
        let node = self.describe().await?;
        Ok(node.attribute_pairs())
    }

    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self
            .attributes()
            .await?
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value))
    }

    /// Visible text content of this element, joined with `separator` and trimmed
    /// per-fragment when `strip` is set. Script/style/template contents are ignored.
    pub async fn text(&self, separator: &str, strip: bool) -> Result<String> {
        let html = self.outer_html().await?;
        Ok(crate::html::extract_text(&html, separator, strip))
    }

    async fn describe(&self) -> Result<browsercdp_cdp::dom::Node> {
        let resp = self
            .session
            .execute(DescribeNodeParams::new(self.node_id))
            .await?;
        Ok(resp.result.node)
    }

    /// If this element is an `<iframe>`, resolves the isolated world inside it so
    /// subsequent lookups/evaluations run against the iframe's own document rather
    /// than the parent frame.
    async fn realm_for_descendants(&self) -> Result<Realm> {
        let node = self.describe().await?;
        if !node.is_iframe() {
            return Ok(self.realm);
        }
        let frame_id = node
            .frame_id
            .ok_or_else(|| CdpError::ElementNotFound("iframe has no frameId".into()))?;
        let resp = self
            .session
            .execute(CreateIsolatedWorldParams::new(frame_id))
            .await?;
        Ok(Realm {
            execution_context_id: Some(resp.result.execution_context_id),
        })
    }

    async fn remote_object_id(&self) -> Result<String> {
        let resp = self
            .session
            .execute(ResolveNodeParams::new(self.node_id))
            .await?;
        resp.result
            .object
            .object_id
            .ok_or_else(|| CdpError::ElementNotFound("node has no remote object".into()))
    }

    async fn scroll_into_view(&self) -> Result<()> {
        self.session
            .execute(ScrollIntoViewIfNeededParams::new(self.node_id))
            .await?;
        Ok(())
    }

    async fn box_center(&self) -> Result<(f64, f64)> {
        let resp = self.session.execute(GetBoxModelParams::new(self.node_id)).await?;
        let quad = &resp.result.model.content;
        if quad.len() < 8 {
            return Err(CdpError::ElementNotVisible(
                "element has no box model (display:none?)".into(),
            ));
        }
        let xs = [quad[0], quad[2], quad[4], quad[6]];
        let ys = [quad[1], quad[3], quad[5], quad[7]];
        let cx = xs.iter().sum::<f64>() / 4.0;
        let cy = ys.iter().sum::<f64>() / 4.0;
        Ok((cx, cy))
    }

    /// Clicking an `<option>` sets its parent `<select>`'s `value` instead of
    /// dispatching a synthetic mouse click: native `<select>` dropdowns are rendered
    /// by the OS, not the page, so a coordinate-based click cannot reach the option at
    /// all once the dropdown is open.
    pub async fn click(&self) -> Result<()> {
        let node = self.describe().await?;
        if node.is_select_option() {
            return self.select_option().await;
        }
        self.scroll_into_view().await?;
        let (x, y) = self.box_center().await?;
        for event in DispatchMouseEventParams::click_at(x, y) {
            self.session.execute(event).await?;
        }
        Ok(())
    }

    async fn select_option(&self) -> Result<()> {
        self.call_method(
            "function() { \
                this.selected = true; \
                const parent = this.parentElement; \
                if (parent && parent.tagName === 'SELECT') { \
                    parent.value = this.value; \
                    parent.dispatchEvent(new Event('change', { bubbles: true })); \
                } \
            }",
            Vec::new(),
        )
        .await?;
        Ok(())
    }

    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.click().await?;
        for ch in text.chars() {
            self.session
                .execute(DispatchKeyEventParams::char(ch.to_string()))
                .await?;
        }
        Ok(())
    }

    pub async fn call_method(&self, function_declaration: &str, args: Vec<serde_json::Value>) -> Result<serde_json::Value> {
        let object_id = self.remote_object_id().await?;
        let arguments = args
            .into_iter()
            .map(|value| CallArgument {
                value: Some(value),
                object_id: None,
            })
            .collect();
        let resp = self
            .session
            .execute(CallFunctionOnParams {
                function_declaration: function_declaration.to_string(),
                object_id: Some(object_id),
                arguments: Some(arguments),
                return_by_value: Some(true),
                execution_context_id: None,
            })
            .await?;
        if let Some(exc) = resp.result.exception_details {
            return Err(CdpError::ElementNotInteractable(exc.text));
        }
        Ok(resp.result.result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Finds a single descendant, scoped to this element's realm and relative to
    /// this node (an absolute `//` or `/` expression is normalized to `.//`/`./`
    /// first so it can't escape this subtree).
    pub async fn find_element(&self, criteria: &FindCriteria) -> Result<Element> {
        self.find_in_subtree(criteria.compile()).await
    }

    pub async fn find_element_by(&self, expression: &str) -> Result<Element> {
        self.find_in_subtree(classify(expression)).await
    }

    async fn find_in_subtree(&self, locator: Locator) -> Result<Element> {
        let realm = self.realm_for_descendants().await?;
        match locator {
            Locator::Css(selector) => {
                let resp = self
                    .session
                    .execute(QuerySelectorParams::new(self.node_id, selector.clone()))
                    .await?;
                if resp.result.node_id.0 == 0 {
                    return Err(CdpError::ElementNotFound(selector));
                }
                Ok(Element::new(self.session.clone(), resp.result.node_id, realm))
            }
            Locator::XPath(xpath) => {
                let xpath = ensure_relative_xpath(&xpath);
                let object_id = self.remote_object_id().await?;
                self.evaluate_xpath_first(&xpath, object_id, realm).await
            }
        }
    }

    /// Evaluates `document.evaluate(xpath, this, ...)` scoped to `scope_object_id`,
    /// and resolves the resulting JS node reference back into a `NodeId` via
    /// `DOM.requestNode`.
    async fn evaluate_xpath_first(&self, xpath: &str, scope_object_id: String, realm: Realm) -> Result<Element> {
        let script = format!(
            "function() {{ return document.evaluate({xpath:?}, this, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue; }}"
        );
        let resp = self
            .session
            .execute(CallFunctionOnParams {
                function_declaration: script,
                object_id: Some(scope_object_id),
                arguments: None,
                return_by_value: Some(false),
                execution_context_id: None,
            })
            .await?;
        if let Some(exc) = resp.result.exception_details {
            return Err(CdpError::ElementNotFound(exc.text));
        }
        let remote_object_id = resp
            .result
            .result
            .object_id
            .ok_or_else(|| CdpError::ElementNotFound(xpath.to_string()))?;
        let node = self
            .session
            .execute(RequestNodeParams::new(remote_object_id))
            .await?;
        Ok(Element::new(self.session.clone(), node.result.node_id, realm))
    }

    /// Polls this element's subtree every 500ms until a match appears or the
    /// timeout elapses. A `timeout` of zero means exactly one attempt.
    pub async fn find_or_wait_element(&self, criteria: &FindCriteria, timeout: Duration) -> Result<Element> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            match self.find_element(criteria).await {
                Ok(el) => return Ok(el),
                Err(err) if timeout.is_zero() => return Err(err),
                Err(_) => {
                    if tokio::time::Instant::now() >= deadline {
                        return Err(CdpError::WaitTimeout(timeout));
                    }
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }
        }
    }
}
