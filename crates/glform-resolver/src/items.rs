//! Item lists that may span several physical lines.

use glform_core::ControlId;
use glform_parser::{parse_items, LIST_TERMINATOR};
use smallvec::SmallVec;

/// Where the resolver is while walking the input.
#[derive(Debug, Default)]
pub(crate) enum ScanState {
    /// Reading one statement per line.
    #[default]
    Scanning,
    /// Inside an `Items.AddRange` list, waiting for its closing line.
    AccumulatingList(PendingList),
}

/// An item list that has been opened but not yet closed.
#[derive(Debug)]
pub(crate) struct PendingList {
    pub control: ControlId,
    pub start_line: usize,
    buffer: String,
}

impl PendingList {
    /// Start a list with the text following its opening brace.
    pub fn open(control: ControlId, tail: &str, start_line: usize) -> Self {
        Self {
            control,
            start_line,
            buffer: tail.to_string(),
        }
    }

    /// Append the next physical line.
    pub fn push_line(&mut self, content: &str) {
        self.buffer.push(' ');
        self.buffer.push_str(content);
    }

    /// Whether the last line pushed closes the list.
    pub fn is_closed(&self) -> bool {
        self.buffer.trim_end().ends_with(LIST_TERMINATOR)
    }

    /// The list's string literals, or `None` if it holds anything else.
    pub fn into_items(self) -> Option<SmallVec<[String; 4]>> {
        parse_items(&self.buffer).map(|items| items.into_iter().map(String::from).collect())
    }
}
