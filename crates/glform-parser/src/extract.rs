//! Declaration extraction: the first pass over a designer file.

use glform_core::{map_type, Control, Diagnostic, DiagnosticKind, FormModel};
use tracing::{debug, warn};

use crate::grammar::{classify, Statement, SECTION_MARKER};
use crate::lexer::Line;

/// A freshly extracted model and what was skipped along the way.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub model: FormModel,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build one control per recognized declaration.
///
/// Declarations are only read after the section marker; everything before it
/// is designer boilerplate. Controls keep file order.
pub fn extract(lines: &[Line<'_>]) -> Extraction {
    let mut extraction = Extraction::default();
    let mut in_section = false;

    for line in lines {
        if !in_section {
            in_section = line.content == SECTION_MARKER;
            continue;
        }

        let Statement::Declaration { source_type, name } = classify(line.content) else {
            continue;
        };

        let Some(target_type) = map_type(source_type) else {
            warn!(
                name,
                source_type,
                line = line.line_number,
                "skipping control of unsupported type"
            );
            extraction
                .diagnostics
                .push(Diagnostic::unrecognized_type(name, source_type, line.line_number));
            continue;
        };

        if extraction
            .model
            .insert(Control::new(name, source_type, target_type))
            .is_none()
        {
            warn!(name, line = line.line_number, "skipping duplicate declaration");
            extraction.diagnostics.push(Diagnostic::new(
                DiagnosticKind::DuplicateDeclaration,
                Some(line.line_number),
                format!("Skipped duplicate declaration of {name}"),
            ));
        }
    }

    if !in_section {
        warn!("no {SECTION_MARKER} marker found, no controls extracted");
        extraction.diagnostics.push(Diagnostic::new(
            DiagnosticKind::MissingSectionMarker,
            None,
            format!("No {SECTION_MARKER} marker found"),
        ));
    }

    debug!(
        controls = extraction.model.len(),
        skipped = extraction.diagnostics.len(),
        "extracted declarations"
    );
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::split_lines;
    use glform_core::{ControlId, TargetType};

    #[test]
    fn test_extract_after_marker_only() {
        let input = r#"
            private System.Windows.Forms.Button early;
        #endregion
            private System.Windows.Forms.Button okButton;
            private System.Windows.Forms.GroupBox panel;
"#;
        let extraction = extract(&split_lines(input));
        let model = &extraction.model;

        assert_eq!(model.len(), 2);
        assert_eq!(model.lookup("early"), None);
        assert_eq!(model.lookup("okButton"), Some(ControlId(0)));
        assert_eq!(model.lookup("panel"), Some(ControlId(1)));
        assert_eq!(model.controls()[1].target_type, TargetType::GLTitledPanel);
        assert_eq!(model.controls()[1].source_type, "GroupBox");
        assert!(extraction.diagnostics.is_empty());
    }

    #[test]
    fn test_extract_skips_unknown_type() {
        let input = "#endregion\n\
                     private System.Windows.Forms.Panel placeHolder;\n\
                     private System.Windows.Forms.Label label1;\n";
        let extraction = extract(&split_lines(input));

        assert_eq!(extraction.model.len(), 1);
        assert_eq!(extraction.diagnostics.len(), 1);
        let diag = &extraction.diagnostics[0];
        assert_eq!(diag.kind, DiagnosticKind::UnrecognizedType);
        assert_eq!(diag.line, Some(2));
        assert_eq!(diag.message, "Skipped object placeHolder of type Panel");
    }

    #[test]
    fn test_extract_ignores_non_forms_fields() {
        let input = "#endregion\n\
            private System.ComponentModel.BackgroundWorker worker;\n\
            private MyLib.Widgets.Label x;\n\
            private System.Windows.Forms.Label label1;\n";
        let extraction = extract(&split_lines(input));

        assert_eq!(extraction.model.len(), 1);
        assert_eq!(extraction.model.lookup("x"), None);
        assert_eq!(extraction.model.lookup("label1"), Some(ControlId(0)));
        assert!(extraction.diagnostics.is_empty());
    }

    #[test]
    fn test_extract_skips_duplicate() {
        let input = "#endregion\n\
                     private System.Windows.Forms.Label a;\n\
                     private System.Windows.Forms.Button a;\n";
        let extraction = extract(&split_lines(input));

        assert_eq!(extraction.model.len(), 1);
        assert_eq!(extraction.model.controls()[0].target_type, TargetType::GLLabel);
        assert_eq!(extraction.diagnostics[0].kind, DiagnosticKind::DuplicateDeclaration);
    }

    #[test]
    fn test_extract_without_marker() {
        let input = "private System.Windows.Forms.Label a;\n";
        let extraction = extract(&split_lines(input));

        assert!(extraction.model.is_empty());
        assert_eq!(extraction.diagnostics.len(), 1);
        assert_eq!(extraction.diagnostics[0].kind, DiagnosticKind::MissingSectionMarker);
    }

    #[test]
    fn test_extract_fixture() {
        let input = include_str!("../../../tests/fixtures/CreateShape.Designer.cs");
        let extraction = extract(&split_lines(input));

        // 49 supported declarations, one Panel skipped.
        assert_eq!(extraction.model.len(), 49);
        assert_eq!(extraction.diagnostics.len(), 1);
        assert!(extraction.model.lookup("placeHolder").is_none());
    }
}
