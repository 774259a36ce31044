//! Common test utilities for building flow graphs and documents.
use keiro::prelude::*;

/// Creates a non-branching node whose name equals its id.
#[allow(dead_code)]
pub fn linear_node(id: &str, kind: NodeKind, next: Option<&str>) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        kind,
        name: id.to_string(),
        successors: Successors::Linear(next.map(String::from)),
    }
}

/// Creates a condition node with the given match and no-match successors.
#[allow(dead_code)]
pub fn condition_node(id: &str, matches: &[&str], no_match: Option<&str>) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        kind: NodeKind::Condition,
        name: id.to_string(),
        successors: Successors::Branch {
            matches: matches.iter().map(|m| m.to_string()).collect(),
            no_match: no_match.map(String::from),
        },
    }
}

/// A graph with one branching level: `ask` matches into `n2` and `n3`,
/// falls through to `n4`, and `n3` continues into `n4`.
#[allow(dead_code)]
pub fn branching_graph() -> FlowGraph {
    let mut graph = FlowGraph::new("ask");
    graph.insert(condition_node("ask", &["n2", "n3"], Some("n4")));
    graph.insert(linear_node("n2", NodeKind::Llm, None));
    graph.insert(linear_node("n3", NodeKind::Generic, Some("n4")));
    graph.insert(linear_node("n4", NodeKind::Exit, None));
    graph
}

/// A complete flow document exercising every node kind and both successor
/// shapes.
#[allow(dead_code)]
pub fn sample_document() -> &'static str {
    "\
tree:
  start_node: greet
  nodes:
    greet:
      type: llm
      name: Greeting
      next_node: listen
    listen:
      type: stt
      next_node: route
    route:
      type: condition
      name: Route intent
      node_config:
        next_nodes:
          - transfer
          - hangup
        no_match_node: listen
    transfer:
      next_node: hangup
    hangup:
      type: exit
      name: Hang up
"
}
