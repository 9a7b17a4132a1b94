//! Core value types: widget kinds, the type mapping table, and geometry.

use std::fmt;

/// GLToolkit widget kinds the converter can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetType {
    GLCombo,
    GLTitledPanel,
    GLButton,
    GLLabel,
    GLTextField,
    GLToggle,
}

/// Source control type name → target widget kind.
///
/// This table is closed: a declaration whose type is not listed here is
/// skipped by the extractor.
pub const TYPE_MAP: [(&str, TargetType); 6] = [
    ("ComboBox", TargetType::GLCombo),
    ("GroupBox", TargetType::GLTitledPanel),
    ("Button", TargetType::GLButton),
    ("Label", TargetType::GLLabel),
    ("TextBox", TargetType::GLTextField),
    ("CheckBox", TargetType::GLToggle),
];

/// Look up the target kind for a bare source type name (e.g. `"Button"`).
pub fn map_type(source_type: &str) -> Option<TargetType> {
    TYPE_MAP
        .iter()
        .find(|(name, _)| *name == source_type)
        .map(|(_, target)| *target)
}

impl TargetType {
    /// The C++ class name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GLCombo => "GLCombo",
            Self::GLTitledPanel => "GLTitledPanel",
            Self::GLButton => "GLButton",
            Self::GLLabel => "GLLabel",
            Self::GLTextField => "GLTextField",
            Self::GLToggle => "GLToggle",
        }
    }

    /// Whether the constructor takes a leading component handle (`0`).
    pub fn takes_handle(self) -> bool {
        matches!(self, Self::GLButton | Self::GLToggle | Self::GLTextField)
    }

    /// Choice widgets are filled from a list of items instead of a text label.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::GLCombo)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A position in pixels, relative to the owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_known_types() {
        assert_eq!(map_type("ComboBox"), Some(TargetType::GLCombo));
        assert_eq!(map_type("GroupBox"), Some(TargetType::GLTitledPanel));
        assert_eq!(map_type("CheckBox"), Some(TargetType::GLToggle));
    }

    #[test]
    fn test_map_unknown_type() {
        assert_eq!(map_type("Panel"), None);
        assert_eq!(map_type("button"), None);
    }

    #[test]
    fn test_handle_kinds() {
        let with_handle: Vec<_> = TYPE_MAP
            .iter()
            .map(|(_, t)| *t)
            .filter(|t| t.takes_handle())
            .collect();
        assert_eq!(
            with_handle,
            vec![TargetType::GLButton, TargetType::GLTextField, TargetType::GLToggle]
        );
        assert!(!TargetType::GLCombo.takes_handle());
    }

    #[test]
    fn test_display_matches_name() {
        for (_, target) in TYPE_MAP {
            assert_eq!(target.to_string(), target.name());
        }
    }
}
