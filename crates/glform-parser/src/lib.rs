//! Parser for Windows Forms designer files.
//!
//! This crate classifies designer lines into statements and runs the first
//! pass of the converter: extracting control declarations into a
//! [`FormModel`](glform_core::FormModel). Built on `nom` combinators.

mod extract;
mod grammar;
mod lexer;

pub use extract::{extract, Extraction};
pub use grammar::{
    classify, parse_items, CallArgs, Member, Statement, LIST_TERMINATOR, SECTION_MARKER,
};
pub use lexer::{split_lines, Line};

/// Extract control declarations from designer source text.
///
/// # Example
///
/// ```ignore
/// use glform_parser::extract_document;
///
/// let source = "#endregion\nprivate System.Windows.Forms.Button okButton;\n";
/// let extraction = extract_document(source);
/// assert_eq!(extraction.model.len(), 1);
/// ```
pub fn extract_document(source: &str) -> Extraction {
    extract(&split_lines(source))
}
