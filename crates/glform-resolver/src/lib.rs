//! Second pass of the converter.
//!
//! Resolves geometry, text, item lists and containment onto the controls the
//! parser extracted, producing a finished [`FormModel`](glform_core::FormModel).

mod items;
mod properties;

pub use properties::resolve_properties;

use glform_core::ParseError;
use glform_parser::{extract, split_lines, Extraction};

/// Run both passes over a designer file.
///
/// Diagnostics from extraction and resolution are returned together, in the
/// order they were found.
pub fn resolve_document(source: &str) -> Result<Extraction, ParseError> {
    let lines = split_lines(source);
    let mut extraction = extract(&lines);
    let diagnostics = resolve_properties(&lines, &mut extraction.model)?;
    extraction.diagnostics.extend(diagnostics);
    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glform_core::DiagnosticKind;

    #[test]
    fn test_resolve_document_collects_diagnostics() {
        let source = r#"
            this.combo.Items.AddRange(new object[] { "A"});
            this.combo.Location = new System.Drawing.Point(3, 4);
            #endregion
            private System.Windows.Forms.ComboBox combo;
            private System.Windows.Forms.PictureBox preview;
"#;
        let extraction = resolve_document(source).unwrap();
        assert_eq!(extraction.model.len(), 1);
        assert_eq!(extraction.model.controls()[0].items.as_slice(), ["A"]);
        assert_eq!(extraction.diagnostics.len(), 1);
        assert_eq!(extraction.diagnostics[0].kind, DiagnosticKind::UnrecognizedType);
    }

    #[test]
    fn test_resolve_document_propagates_parse_errors() {
        let source = "this.ClientSize = new System.Drawing.Size(a, b);\n";
        assert!(matches!(
            resolve_document(source),
            Err(ParseError::InvalidNumber { line: 1, .. })
        ));
    }
}
