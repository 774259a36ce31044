//! # Keiro - Call-Flow Graph Derivation and Layout Engine
//!
//! **Keiro** turns a declarative call-flow document (a directed graph of typed
//! nodes authored as YAML) into a renderable diagram model, and maps diagram
//! nodes back to their exact character range in the source text so a click on
//! the diagram can select the node's definition.
//!
//! ## Core Workflow
//!
//! Every derivation is pure and recomputed from the current text; nothing is
//! cached between content changes, so the whole pipeline is safe to re-run on
//! every keystroke debounce tick:
//!
//! 1. **Extract**: decode the document and read its typed node-graph
//!    ([`flow::parse_document`], or [`flow::extract`] over an already-decoded
//!    tree). Malformed input degrades to an empty graph, never an error.
//! 2. **Lay out**: assign every reachable node a BFS depth and a deterministic
//!    planar position ([`layout::assign_levels`], [`layout::place`]).
//! 3. **Derive edges**: produce the labeled edge list, including the synthetic
//!    entry edge ([`render::derive_edges`]), or get nodes and edges together
//!    from [`render::render_model`].
//! 4. **Navigate**: on a diagram click, resolve the node id to its source span
//!    ([`locator::locate`]) and drive the caller's
//!    [`navigate::TextSelectionSink`].
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! let text = "\
//! tree:
//!   start_node: greet
//!   nodes:
//!     greet:
//!       type: llm
//!       next_node: route
//!     route:
//!       type: condition
//!       node_config:
//!         next_nodes:
//!           - hangup
//!     hangup:
//!       type: exit
//! ";
//!
//! // Extract the typed graph and build the render model.
//! let graph = parse_document(text);
//! let model = render_model(&graph);
//! assert_eq!(model.nodes.len(), 4); // three nodes plus the entry marker
//!
//! // Map a clicked node back to its definition block in the text.
//! let span = locate(text, "route").unwrap();
//! assert!(span.slice(text).starts_with("    route:"));
//! ```

pub mod error;
pub mod flow;
pub mod layout;
pub mod locator;
pub mod navigate;
pub mod prelude;
pub mod render;
