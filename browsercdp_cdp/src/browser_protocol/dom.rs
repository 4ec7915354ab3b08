use browsercdp_types::{Command, Method};
use serde::{Deserialize, Serialize};

use crate::page::FrameId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendNodeId(pub i64);

#[doc = "DOM interaction is implemented in terms of mirror objects that represent the actual DOM nodes.\n[Node](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#type-Node)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub node_id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
    pub backend_node_id: BackendNodeId,
    pub node_type: u32,
    pub node_name: String,
    pub local_name: String,
    pub node_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_node_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    #[doc = "Flat array of `[name1, value1, name2, value2, ...]`."]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
    #[doc = "Frame id for frame owner elements such as iframe."]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<FrameId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_document: Option<Box<Node>>,
}

impl Node {
    /// The node's attributes as name/value pairs, decoded from the protocol's flat
    /// `[name1, value1, ...]` encoding.
    pub fn attribute_pairs(&self) -> Vec<(String, String)> {
        self.attributes
            .as_ref()
            .map(|flat| {
                flat.chunks_exact(2)
                    .map(|pair| (pair[0].clone(), pair[1].clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_iframe(&self) -> bool {
        self.node_name.eq_ignore_ascii_case("iframe")
    }

    pub fn is_select_option(&self) -> bool {
        self.node_name.eq_ignore_ascii_case("option")
    }
}

#[doc = "Returns the root DOM node (and optionally the subtree) to the caller.\n[getDocument](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-getDocument)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocumentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pierce: Option<bool>,
}

impl GetDocumentParams {
    pub const IDENTIFIER: &'static str = "DOM.getDocument";
}

impl Method for GetDocumentParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocumentReturns {
    pub root: Node,
}

impl Command for GetDocumentParams {
    type Response = GetDocumentReturns;
}

#[doc = "Executes querySelector on a given node.\n[querySelector](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-querySelector)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySelectorParams {
    pub node_id: NodeId,
    pub selector: String,
}

impl QuerySelectorParams {
    pub fn new(node_id: NodeId, selector: impl Into<String>) -> Self {
        Self {
            node_id,
            selector: selector.into(),
        }
    }

    pub const IDENTIFIER: &'static str = "DOM.querySelector";
}

impl Method for QuerySelectorParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySelectorReturns {
    pub node_id: NodeId,
}

impl Command for QuerySelectorParams {
    type Response = QuerySelectorReturns;
}

#[doc = "Executes querySelectorAll on a given node.\n[querySelectorAll](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-querySelectorAll)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySelectorAllParams {
    pub node_id: NodeId,
    pub selector: String,
}

impl QuerySelectorAllParams {
    pub fn new(node_id: NodeId, selector: impl Into<String>) -> Self {
        Self {
            node_id,
            selector: selector.into(),
        }
    }

    pub const IDENTIFIER: &'static str = "DOM.querySelectorAll";
}

impl Method for QuerySelectorAllParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySelectorAllReturns {
    pub node_ids: Vec<NodeId>,
}

impl Command for QuerySelectorAllParams {
    type Response = QuerySelectorAllReturns;
}

#[doc = "Describes node given its id, does not require domain to be enabled.\n[describeNode](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-describeNode)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeNodeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_node_id: Option<BackendNodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pierce: Option<bool>,
}

impl DescribeNodeParams {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id: Some(node_id),
            ..Default::default()
        }
    }

    pub const IDENTIFIER: &'static str = "DOM.describeNode";
}

impl Method for DescribeNodeParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeNodeReturns {
    pub node: Node,
}

impl Command for DescribeNodeParams {
    type Response = DescribeNodeReturns;
}

#[doc = "Returns node's HTML markup.\n[getOuterHTML](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-getOuterHTML)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOuterHtmlParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
}

impl GetOuterHtmlParams {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id: Some(node_id),
        }
    }

    pub const IDENTIFIER: &'static str = "DOM.getOuterHTML";
}

impl Method for GetOuterHtmlParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOuterHtmlReturns {
    pub outer_html: String,
}

impl Command for GetOuterHtmlParams {
    type Response = GetOuterHtmlReturns;
}

#[doc = "Requests that the node is sent to the caller given the JavaScript node object reference.\n[requestNode](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-requestNode)"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestNodeParams {
    pub object_id: String,
}

impl RequestNodeParams {
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
        }
    }

    pub const IDENTIFIER: &'static str = "DOM.requestNode";
}

impl Method for RequestNodeParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestNodeReturns {
    pub node_id: NodeId,
}

impl Command for RequestNodeParams {
    type Response = RequestNodeReturns;
}

#[doc = "Requests that the node is sent to the caller given its path.\n[resolveNode](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-resolveNode)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveNodeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_context_id: Option<i64>,
}

impl ResolveNodeParams {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id: Some(node_id),
            ..Default::default()
        }
    }

    pub const IDENTIFIER: &'static str = "DOM.resolveNode";
}

impl Method for ResolveNodeParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteObjectRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveNodeReturns {
    pub object: RemoteObjectRef,
}

impl Command for ResolveNodeParams {
    type Response = ResolveNodeReturns;
}

#[doc = "Performs a scroll, centers the node so that it's visible in the viewport and returns its box model.\n[getBoxModel](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-getBoxModel)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBoxModelParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
}

impl GetBoxModelParams {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id: Some(node_id),
        }
    }

    pub const IDENTIFIER: &'static str = "DOM.getBoxModel";
}

impl Method for GetBoxModelParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxModel {
    pub content: Vec<f64>,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBoxModelReturns {
    pub model: BoxModel,
}

impl Command for GetBoxModelParams {
    type Response = GetBoxModelReturns;
}

#[doc = "Scrolls the given rect of the node into view, if not already visible.\n[scrollIntoViewIfNeeded](https://chromedevtools.github.io/devtools-protocol/tot/DOM/#method-scrollIntoViewIfNeeded)"]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollIntoViewIfNeededParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
}

impl ScrollIntoViewIfNeededParams {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id: Some(node_id),
        }
    }

    pub const IDENTIFIER: &'static str = "DOM.scrollIntoViewIfNeeded";
}

impl Method for ScrollIntoViewIfNeededParams {
    fn identifier(&self) -> ::std::borrow::Cow<'static, str> {
        Self::IDENTIFIER.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollIntoViewIfNeededReturns {}

impl Command for ScrollIntoViewIfNeededParams {
    type Response = ScrollIntoViewIfNeededReturns;
}
