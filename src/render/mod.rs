//! Renderer-facing model: the derived edge list and the assembled set of
//! positioned, visually categorized nodes. The core never constructs
//! presentation markup; consumers map [`NodeVisual`] and [`EdgeRole`] onto
//! whatever widget set they render with.

use serde::Serialize;

use crate::flow::{EdgeRole, FlowGraph, NodeId, NodeKind, START_MARKER_ID, Successors};
use crate::layout::{assign_levels, place};

/// Visual category of a rendered node, derived from its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeVisual {
    /// Condition nodes render as diamonds.
    Diamond,
    Exit,
    Llm,
    Stt,
    Default,
    /// The synthetic entry marker.
    StartMarker,
}

impl NodeVisual {
    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Condition => NodeVisual::Diamond,
            NodeKind::Exit => NodeVisual::Exit,
            NodeKind::Llm => NodeVisual::Llm,
            NodeKind::Stt => NodeVisual::Stt,
            NodeKind::Generic => NodeVisual::Default,
        }
    }
}

/// A positioned node enriched with its label and visual category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub visual: NodeVisual,
}

/// One renderable edge. The id is derived deterministically from source,
/// target, role, and ordinal, so repeated derivations on unchanged input
/// produce identical sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderEdge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<EdgeRole>,
}

/// Everything a renderer needs for one derivation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderModel {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

/// Derives the renderable edge list from the graph.
///
/// The synthetic entry edge comes first, then each node's edges in document
/// order: match edges in list order, the no-match edge, or the single
/// unlabeled edge for non-branching nodes. Edges whose target id does not
/// resolve to a node are dropped silently; a partially edited document must
/// never raise here.
pub fn derive_edges(graph: &FlowGraph) -> Vec<RenderEdge> {
    let mut edges = Vec::new();
    if graph.is_empty() {
        return edges;
    }

    edges.push(RenderEdge {
        id: format!("{}-{}", START_MARKER_ID, graph.start_node),
        source: START_MARKER_ID.to_string(),
        target: graph.start_node.clone(),
        label: None,
    });

    for node in graph.iter_ordered() {
        match &node.successors {
            Successors::Branch { matches, no_match } => {
                // The ordinal is the position in the authored list, so a
                // dropped entry does not shift the ids of later edges.
                for (i, target) in matches.iter().enumerate() {
                    if !graph.contains(target) {
                        continue;
                    }
                    edges.push(RenderEdge {
                        id: format!("{}-{}-match-{}", node.id, target, i),
                        source: node.id.clone(),
                        target: target.clone(),
                        label: Some(EdgeRole::Match),
                    });
                }
                if let Some(target) = no_match {
                    if graph.contains(target) {
                        edges.push(RenderEdge {
                            id: format!("{}-{}-no-match", node.id, target),
                            source: node.id.clone(),
                            target: target.clone(),
                            label: Some(EdgeRole::NoMatch),
                        });
                    }
                }
            }
            Successors::Linear(next) => {
                if let Some(target) = next {
                    if graph.contains(target) {
                        edges.push(RenderEdge {
                            id: format!("{}-{}", node.id, target),
                            source: node.id.clone(),
                            target: target.clone(),
                            label: None,
                        });
                    }
                }
            }
        }
    }

    edges
}

/// Runs leveling, placement, and edge derivation in one pass and attaches
/// labels and visual categories. This is the product handed to a renderer on
/// every content change.
pub fn render_model(graph: &FlowGraph) -> RenderModel {
    let leveling = assign_levels(graph);
    let placed = place(graph, &leveling);

    let nodes = placed
        .into_iter()
        .map(|p| {
            if p.id == START_MARKER_ID {
                return RenderNode {
                    id: p.id,
                    x: p.x,
                    y: p.y,
                    label: "Start".to_string(),
                    visual: NodeVisual::StartMarker,
                };
            }
            let (label, visual) = match graph.get(&p.id) {
                Some(node) => (node.name.clone(), NodeVisual::for_kind(node.kind)),
                None => (p.id.clone(), NodeVisual::Default),
            };
            RenderNode {
                id: p.id,
                x: p.x,
                y: p.y,
                label,
                visual,
            }
        })
        .collect();

    RenderModel {
        nodes,
        edges: derive_edges(graph),
    }
}
