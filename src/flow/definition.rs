use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// Opaque node identifier, unique within one flow document.
pub type NodeId = String;

/// Identifier of the synthetic entry marker injected by layout and edge
/// derivation. It never exists in the document and is never forwarded to the
/// source-span locator.
pub const START_MARKER_ID: &str = "start";

/// The role a node plays in the call flow, parsed from its `type` tag.
///
/// Unrecognized or missing tags fall back to [`NodeKind::Generic`]; the
/// document is live-edited, so an unknown tag is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Branching node with ordered match successors and an optional
    /// no-match successor.
    Condition,
    /// Terminal node that ends the call.
    Exit,
    /// Language-model turn.
    Llm,
    /// Speech-to-text turn.
    Stt,
    /// Any other processing step.
    Generic,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "condition" => NodeKind::Condition,
            "exit" => NodeKind::Exit,
            "llm" => NodeKind::Llm,
            "stt" => NodeKind::Stt,
            _ => NodeKind::Generic,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            NodeKind::Condition => "condition",
            NodeKind::Exit => "exit",
            NodeKind::Llm => "llm",
            NodeKind::Stt => "stt",
            NodeKind::Generic => "generic",
        };
        write!(f, "{}", tag)
    }
}

/// Label attached to an edge leaving a condition node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeRole {
    #[serde(rename = "Match")]
    Match,
    #[serde(rename = "No Match")]
    NoMatch,
}

impl fmt::Display for EdgeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeRole::Match => write!(f, "Match"),
            EdgeRole::NoMatch => write!(f, "No Match"),
        }
    }
}

/// Outgoing successors of a node, shaped by its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Successors {
    /// Condition nodes: ordered match successors plus at most one no-match
    /// successor.
    Branch {
        matches: Vec<NodeId>,
        no_match: Option<NodeId>,
    },
    /// Every other kind: at most one unconditional successor.
    Linear(Option<NodeId>),
}

impl Successors {
    /// All successor ids with their edge role, in semantic order: match
    /// successors in list order, then the no-match successor. This order
    /// drives both BFS enqueue order and edge emission order.
    pub fn targets(&self) -> Vec<(&NodeId, Option<EdgeRole>)> {
        match self {
            Successors::Branch { matches, no_match } => matches
                .iter()
                .map(|id| (id, Some(EdgeRole::Match)))
                .chain(no_match.iter().map(|id| (id, Some(EdgeRole::NoMatch))))
                .collect(),
            Successors::Linear(next) => next.iter().map(|id| (id, None)).collect(),
        }
    }
}

/// One typed step in the call flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Display name; falls back to the node's own id when the document does
    /// not provide one.
    pub name: String,
    pub successors: Successors,
}

/// The typed node-graph extracted from one flow document.
///
/// `start_node` is not guaranteed to exist in `nodes`; such a graph is
/// treated as empty. Successor ids pointing outside `nodes` are valid and
/// are dropped silently when edges are derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    pub start_node: NodeId,
    nodes: AHashMap<NodeId, FlowNode>,
    /// Document order of node ids, so derivations are deterministic across
    /// processes rather than following hash-map iteration order.
    order: Vec<NodeId>,
}

impl FlowGraph {
    pub fn new(start_node: impl Into<NodeId>) -> Self {
        FlowGraph {
            start_node: start_node.into(),
            nodes: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Inserts a node, keeping first-seen document order. Re-inserting an id
    /// replaces the record but keeps its original position.
    pub fn insert(&mut self, node: FlowNode) {
        if !self.nodes.contains_key(&node.id) {
            self.order.push(node.id.clone());
        }
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn get(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when there is nothing to render: no nodes, or a start reference
    /// that does not resolve to a node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() || !self.nodes.contains_key(&self.start_node)
    }

    /// Nodes in document order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &FlowNode> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }
}
