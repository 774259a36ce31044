use serde_yaml::Value;

use super::definition::{FlowGraph, FlowNode, NodeKind, Successors};
use crate::error::DocumentError;

/// Extracts the typed node-graph from a decoded flow document.
///
/// Total over any input: a tree that lacks the `tree` section, the
/// `start_node` reference, or the `nodes` mapping yields an empty graph, and
/// any malformed node body degrades to a node with no successors. Callers
/// treat an empty graph as "nothing to render", never as an error, because
/// the document is keystroke-driven and transiently invalid while the author
/// types.
pub fn extract(doc: &Value) -> FlowGraph {
    let Some(tree) = doc.get("tree") else {
        return FlowGraph::default();
    };
    let Some(start_node) = tree.get("start_node").and_then(Value::as_str) else {
        return FlowGraph::default();
    };
    let Some(nodes) = tree.get("nodes").and_then(Value::as_mapping) else {
        return FlowGraph::default();
    };

    let mut graph = FlowGraph::new(start_node);
    for (key, body) in nodes {
        let Some(id) = key.as_str() else { continue };
        let kind = body
            .get("type")
            .and_then(Value::as_str)
            .map(NodeKind::from_tag)
            .unwrap_or(NodeKind::Generic);
        let name = body
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(id)
            .to_string();
        let successors = match kind {
            NodeKind::Condition => branch_successors(body),
            _ => Successors::Linear(string_field(body, "next_node")),
        };
        graph.insert(FlowNode {
            id: id.to_string(),
            kind,
            name,
            successors,
        });
    }
    graph
}

/// Reads a condition node's successors from its `node_config`.
///
/// The canonical dialect is the ordered `next_nodes` list plus
/// `no_match_node`. The legacy binary dialect (`true_node` / `false_node`)
/// is accepted when the canonical keys are absent: `true_node` maps onto a
/// single-element match list and `false_node` onto the no-match successor.
fn branch_successors(body: &Value) -> Successors {
    let mut matches = Vec::new();
    let mut no_match = None;

    if let Some(config) = body.get("node_config") {
        if let Some(list) = config.get("next_nodes").and_then(Value::as_sequence) {
            for entry in list {
                // Non-string or empty entries are skipped, not errors.
                if let Some(target) = entry.as_str() {
                    if !target.is_empty() {
                        matches.push(target.to_string());
                    }
                }
            }
        } else if let Some(target) = string_field(config, "true_node") {
            matches.push(target);
        }

        no_match = string_field(config, "no_match_node")
            .or_else(|| string_field(config, "false_node"));
    }

    Successors::Branch { matches, no_match }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Decodes raw document text and extracts its graph, degrading to an empty
/// graph on blank input or any YAML parse failure. This is the entry point
/// for the live-editing path.
pub fn parse_document(text: &str) -> FlowGraph {
    if text.trim().is_empty() {
        return FlowGraph::default();
    }
    match serde_yaml::from_str::<Value>(text) {
        Ok(doc) => extract(&doc),
        Err(_) => FlowGraph::default(),
    }
}

/// Decodes raw document text, surfacing the parse error instead of degrading.
/// Used by callers that report problems to a human, such as the CLI.
pub fn parse_document_strict(text: &str) -> Result<Value, DocumentError> {
    serde_yaml::from_str(text).map_err(|e| DocumentError::Yaml(e.to_string()))
}
