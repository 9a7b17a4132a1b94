//! Non-fatal findings reported back to the caller.

use std::fmt;

/// What kind of input was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    /// A declaration names a type absent from the mapping table.
    UnrecognizedType,
    /// A second declaration reuses an already declared name.
    DuplicateDeclaration,
    /// The `#endregion` marker never appeared, so no declarations were read.
    MissingSectionMarker,
    /// An item list was still open when the input ended.
    UnterminatedList,
}

/// A skipped statement, with the line it was found on when known.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    pub fn unrecognized_type(name: &str, source_type: &str, line: usize) -> Self {
        Self::new(
            DiagnosticKind::UnrecognizedType,
            Some(line),
            format!("Skipped object {name} of type {source_type}"),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_type_message() {
        let diag = Diagnostic::unrecognized_type("placeHolder", "Panel", 612);
        assert_eq!(diag.kind, DiagnosticKind::UnrecognizedType);
        assert_eq!(diag.to_string(), "line 612: Skipped object placeHolder of type Panel");
    }
}
