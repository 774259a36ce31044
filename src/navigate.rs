//! Click-to-source navigation.
//!
//! The core never touches a concrete text surface. Consumers hand in a
//! [`TextSelectionSink`] capability and the handler drives it, which keeps
//! the locator testable without any UI in the loop.

use crate::flow::START_MARKER_ID;
use crate::locator::locate;

/// Capability over whatever surface displays the raw document, addressed as
/// a flat byte-offset range.
pub trait TextSelectionSink {
    fn set_selection(&mut self, start: usize, end: usize);
    fn scroll_to_offset(&mut self, offset: usize);
}

/// Handles a click on a diagram node: locates the node's definition block
/// and selects it on the sink, scrolling its start into view.
///
/// Returns `false` without touching the sink when the clicked id is the
/// synthetic entry marker or the id does not occur in the text, so the
/// consumer's current selection survives.
pub fn navigate_to_node(text: &str, node_id: &str, sink: &mut dyn TextSelectionSink) -> bool {
    if node_id == START_MARKER_ID {
        return false;
    }
    match locate(text, node_id) {
        Some(span) => {
            sink.set_selection(span.start, span.end);
            sink.scroll_to_offset(span.start);
            true
        }
        None => false,
    }
}
