//! Unit tests for core keiro types.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn test_node_kind_from_tag() {
    assert_eq!(NodeKind::from_tag("condition"), NodeKind::Condition);
    assert_eq!(NodeKind::from_tag("exit"), NodeKind::Exit);
    assert_eq!(NodeKind::from_tag("llm"), NodeKind::Llm);
    assert_eq!(NodeKind::from_tag("stt"), NodeKind::Stt);
    assert_eq!(NodeKind::from_tag("generic"), NodeKind::Generic);
    // Unknown tags are not an error while the author types.
    assert_eq!(NodeKind::from_tag("llm_v2"), NodeKind::Generic);
    assert_eq!(NodeKind::from_tag(""), NodeKind::Generic);
}

#[test]
fn test_node_kind_display_round_trips() {
    for kind in [
        NodeKind::Condition,
        NodeKind::Exit,
        NodeKind::Llm,
        NodeKind::Stt,
        NodeKind::Generic,
    ] {
        assert_eq!(NodeKind::from_tag(&kind.to_string()), kind);
    }
}

#[test]
fn test_edge_role_display() {
    assert_eq!(EdgeRole::Match.to_string(), "Match");
    assert_eq!(EdgeRole::NoMatch.to_string(), "No Match");
}

#[test]
fn test_successor_targets_order() {
    let node = condition_node("ask", &["n2", "n3"], Some("n4"));
    let targets: Vec<(&str, Option<EdgeRole>)> = node
        .successors
        .targets()
        .into_iter()
        .map(|(id, role)| (id.as_str(), role))
        .collect();
    assert_eq!(
        targets,
        vec![
            ("n2", Some(EdgeRole::Match)),
            ("n3", Some(EdgeRole::Match)),
            ("n4", Some(EdgeRole::NoMatch)),
        ]
    );

    let terminal = linear_node("end", NodeKind::Exit, None);
    assert!(terminal.successors.targets().is_empty());
}

#[test]
fn test_graph_insert_keeps_first_seen_order() {
    let mut graph = FlowGraph::new("a");
    graph.insert(linear_node("a", NodeKind::Generic, Some("b")));
    graph.insert(linear_node("b", NodeKind::Generic, None));
    // Re-inserting replaces the record without moving it.
    graph.insert(linear_node("a", NodeKind::Llm, Some("b")));

    let ids: Vec<&str> = graph.iter_ordered().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(graph.get("a").unwrap().kind, NodeKind::Llm);
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_source_span_helpers() {
    let span = SourceSpan { start: 2, end: 8 };
    assert_eq!(span.len(), 6);
    assert!(!span.is_empty());
    assert_eq!(span.slice("  nodeA:  "), "nodeA:");
}

#[test]
fn test_document_error_display() {
    let err = DocumentError::Yaml("mapping values are not allowed here".to_string());
    assert!(err.to_string().contains("parse"));
    assert!(err.to_string().contains("mapping values"));

    let err = DocumentError::Io("no such file".to_string());
    assert!(err.to_string().contains("read"));
}
