//! Level-based layout for the extracted flow graph.
//!
//! Every node reachable from the start node receives an integer depth via a
//! single breadth-first pass, then each depth level is placed on its own
//! horizontal row, centered around x = 0. The result is fully deterministic
//! for a given graph: no randomness, no force simulation, identical output
//! on every invocation.

use ahash::AHashMap;
use itertools::Itertools;
use serde::Serialize;
use std::collections::VecDeque;

use crate::flow::{FlowGraph, NodeId, START_MARKER_ID};

/// Horizontal distance between siblings on the same level.
pub const X_SPACING: f64 = 280.0;
/// Vertical distance between consecutive levels.
pub const Y_SPACING: f64 = 180.0;
/// How far above the start node the synthetic entry marker sits.
pub const START_MARKER_RISE: f64 = 100.0;

/// Depth assignment produced by one BFS pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leveling {
    depth: AHashMap<NodeId, usize>,
    levels: Vec<Vec<NodeId>>,
}

impl Leveling {
    /// BFS depth of a node, or `None` if it is unreachable from the start
    /// node (unreachable nodes are never laid out or rendered).
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.depth.get(id).copied()
    }

    /// Node ids per depth, each level in discovery order.
    pub fn levels(&self) -> &[Vec<NodeId>] {
        &self.levels
    }

    pub fn node_count(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// One-line-per-level summary, used by the CLI.
    pub fn describe(&self) -> String {
        self.levels
            .iter()
            .enumerate()
            .map(|(depth, ids)| format!("level {}: {}", depth, ids.iter().join(", ")))
            .join("\n")
    }
}

/// A laid-out node: pure geometry, visual category attached later by the
/// render model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// Assigns every reachable node a depth, breadth-first from the start node.
///
/// A node's depth is fixed the moment it is first enqueued; it is never
/// re-enqueued or re-leveled, so cyclic graphs terminate with each node
/// leveled exactly once. Enqueue order follows each node's successor order
/// (match successors before the no-match successor), which makes the whole
/// layout deterministic.
pub fn assign_levels(graph: &FlowGraph) -> Leveling {
    let mut leveling = Leveling::default();
    if graph.is_empty() {
        return leveling;
    }

    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
    leveling.depth.insert(graph.start_node.clone(), 0);
    queue.push_back((graph.start_node.clone(), 0));

    while let Some((id, level)) = queue.pop_front() {
        if leveling.levels.len() <= level {
            leveling.levels.resize_with(level + 1, Vec::new);
        }
        leveling.levels[level].push(id.clone());

        let Some(node) = graph.get(&id) else { continue };
        for (target, _role) in node.successors.targets() {
            // Dangling successors get no level; they are dropped at edge
            // derivation as well.
            if graph.contains(target) && !leveling.depth.contains_key(target) {
                leveling.depth.insert(target.clone(), level + 1);
                queue.push_back((target.clone(), level + 1));
            }
        }
    }

    leveling
}

/// Places every leveled node on the plane and injects the synthetic entry
/// marker directly above the start node.
///
/// Within a level of `k` nodes the x positions are evenly spaced and
/// symmetric around 0; y grows with depth. The marker is first in the
/// output; an empty graph produces no nodes and no marker.
pub fn place(graph: &FlowGraph, leveling: &Leveling) -> Vec<PositionedNode> {
    let mut placed = Vec::with_capacity(leveling.node_count() + 1);
    let mut start_anchor = None;

    for (level, ids) in leveling.levels().iter().enumerate() {
        let first_x = -((ids.len() as f64 - 1.0) * X_SPACING) / 2.0;
        for (i, id) in ids.iter().enumerate() {
            let x = first_x + i as f64 * X_SPACING;
            let y = level as f64 * Y_SPACING;
            if *id == graph.start_node {
                start_anchor = Some((x, y));
            }
            placed.push(PositionedNode {
                id: id.clone(),
                x,
                y,
            });
        }
    }

    if let Some((x, y)) = start_anchor {
        placed.insert(
            0,
            PositionedNode {
                id: START_MARKER_ID.to_string(),
                x,
                y: y - START_MARKER_RISE,
            },
        );
    }

    placed
}
