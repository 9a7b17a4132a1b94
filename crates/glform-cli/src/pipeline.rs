//! The full conversion pipeline: extract, resolve, generate.

use glform_codegen::{CodeGenerator, CodegenError, EmitOptions, GeneratedUnit, GlToolkitGenerator};
use glform_core::{Diagnostic, FormModel, ParseError};
use glform_resolver::resolve_document;
use thiserror::Error;
use tracing::info;

/// Any fatal pipeline failure.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Result of one conversion run.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The resolved model the code was generated from.
    pub model: FormModel,
    pub unit: GeneratedUnit,
    /// Input that was skipped along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Header and body in the single-file layout.
    pub fn text(&self) -> String {
        self.unit.combined()
    }
}

/// Convert designer source text to GLToolkit C++.
pub fn convert(source: &str, options: &EmitOptions) -> Result<Conversion, ConvertError> {
    let extraction = resolve_document(source)?;
    let unit = GlToolkitGenerator::with_options(*options)?.generate(&extraction.model)?;

    info!(
        form = %extraction.model.form.name,
        controls = extraction.model.len(),
        skipped = extraction.diagnostics.len(),
        "converted form"
    );

    Ok(Conversion {
        model: extraction.model,
        unit,
        diagnostics: extraction.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glform_core::DiagnosticKind;

    #[test]
    fn test_convert_fixture() {
        let source = include_str!("../../../tests/fixtures/FacetAdvParams.Designer.cs");
        let conversion = convert(source, &EmitOptions::default()).unwrap();
        assert_eq!(
            conversion.text(),
            include_str!("../../../tests/fixtures/FacetAdvParams.expected.txt")
        );
        assert!(conversion.diagnostics.is_empty());
    }

    #[test]
    fn test_convert_reports_skipped_controls() {
        let source = include_str!("../../../tests/fixtures/CreateShape.Designer.cs");
        let conversion = convert(source, &EmitOptions::default()).unwrap();
        assert_eq!(conversion.diagnostics.len(), 1);
        assert_eq!(conversion.diagnostics[0].kind, DiagnosticKind::UnrecognizedType);
        assert_eq!(conversion.model.len(), 49);
    }

    #[test]
    fn test_convert_parse_error() {
        let source = "this.ClientSize = new System.Drawing.Size(1, 2, 3);\n";
        let err = convert(source, &EmitOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(ParseError::InvalidFieldCount { found: 3, .. })));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_convert_rejects_size_beyond_i32() {
        let source = "this.ClientSize = new System.Drawing.Size(99999999999, 2);\n#endregion\n";
        let err = convert(source, &EmitOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Parse(ParseError::InvalidNumber { ref value, line: 1 })
                if value == "99999999999"
        ));
    }
}
