//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! keiro crate. Import this module to get access to the core functionality
//! without having to import each item individually.
//!
//! # Example
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! let text = "tree:\n  start_node: greet\n  nodes:\n    greet:\n      type: llm\n";
//! let graph = parse_document(text);
//! let model = render_model(&graph);
//!
//! for node in &model.nodes {
//!     println!("{} at ({}, {})", node.id, node.x, node.y);
//! }
//! ```

// Graph extraction
pub use crate::flow::{
    EdgeRole, FlowGraph, FlowNode, NodeId, NodeKind, START_MARKER_ID, Successors, extract,
    parse_document, parse_document_strict,
};

// Layout
pub use crate::layout::{Leveling, PositionedNode, assign_levels, place};

// Render model
pub use crate::render::{
    NodeVisual, RenderEdge, RenderModel, RenderNode, derive_edges, render_model,
};

// Source spans and navigation
pub use crate::locator::{SourceSpan, locate};
pub use crate::navigate::{TextSelectionSink, navigate_to_node};

// Error types
pub use crate::error::DocumentError;
