//! The control model built from a designer file.
//!
//! Controls live in a flat arena owned by [`FormModel`]. Containment is
//! recorded as a [`ControlId`] index into that arena, never as a reference,
//! so controls never borrow each other.

use crate::types::{Point, Size, TargetType};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Index of a control in its [`FormModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlId(pub usize);

/// One declared UI control.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Control {
    /// Field name in the designer file; unique within a model.
    pub name: String,
    /// Bare source type name, e.g. `"GroupBox"`.
    pub source_type: String,
    pub target_type: TargetType,
    /// Owning container, or `None` when owned by the form itself.
    pub parent: Option<ControlId>,
    pub position: Point,
    pub size: Size,
    pub text: String,
    /// Choice entries, only filled for choice widgets.
    pub items: SmallVec<[String; 4]>,
    /// Reachable from the form, either directly or through a container.
    pub added: bool,
    /// At least one other control names this one as its parent.
    pub is_parent: bool,
}

impl Control {
    pub fn new(
        name: impl Into<String>,
        source_type: impl Into<String>,
        target_type: TargetType,
    ) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            target_type,
            parent: None,
            position: Point::default(),
            size: Size::default(),
            text: String::new(),
            items: SmallVec::new(),
            added: false,
            is_parent: false,
        }
    }

    pub fn is_choice(&self) -> bool {
        self.target_type.is_choice()
    }
}

/// Form-level attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Form {
    pub name: String,
    pub title: String,
    pub client_width: i32,
    pub client_height: i32,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            name: "Form1".to_string(),
            title: "Form1 Untitled".to_string(),
            client_width: 0,
            client_height: 0,
        }
    }
}

/// Everything known about one designer file: the form and its controls.
///
/// A model is built by the extractor, filled in by the resolver and read by
/// the emitter. It is not shared between runs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormModel {
    pub form: Form,
    controls: Vec<Control>,
    index: IndexMap<String, ControlId>,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control and index it by name.
    ///
    /// Returns `None`, leaving the model untouched, if the name is taken.
    pub fn insert(&mut self, control: Control) -> Option<ControlId> {
        if self.index.contains_key(&control.name) {
            return None;
        }
        let id = ControlId(self.controls.len());
        self.index.insert(control.name.clone(), id);
        self.controls.push(control);
        Some(id)
    }

    /// Find a control by name.
    pub fn lookup(&self, name: &str) -> Option<ControlId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id.0)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(id.0)
    }

    /// All controls in declaration order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Controls paired with their ids, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ControlId, &Control)> {
        self.controls
            .iter()
            .enumerate()
            .map(|(i, c)| (ControlId(i), c))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Mark a control as owned directly by the form.
    pub fn attach_to_form(&mut self, id: ControlId) {
        if let Some(control) = self.get_mut(id) {
            control.added = true;
        }
    }

    /// Record `child` as contained in `parent`.
    ///
    /// A later containment statement for the same child replaces the earlier
    /// parent; the earlier parent keeps its `is_parent` flag.
    pub fn attach_child(&mut self, parent: ControlId, child: ControlId) {
        if parent.0 >= self.controls.len() || child.0 >= self.controls.len() {
            return;
        }
        let node = &mut self.controls[child.0];
        node.parent = Some(parent);
        node.added = true;
        self.controls[parent.0].is_parent = true;
    }
}
