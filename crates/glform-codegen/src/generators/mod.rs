//! Code generators for glform models.

mod gltoolkit;
mod templates;

pub use gltoolkit::GlToolkitGenerator;
pub use templates::TemplateEngine;

use std::fs;
use std::path::{Path, PathBuf};

use glform_core::{ControlId, FormModel};

use crate::error::Result;

/// Pixels added to the client size for the dialog bounds.
pub const DEFAULT_PADDING: i32 = 15;

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Generate the header and body for one form.
    fn generate(&self, model: &FormModel) -> Result<GeneratedUnit>;
}

/// Options for emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Added to both client dimensions.
    pub padding: i32,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name, e.g. `MoveFacet.h`.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GeneratedFile {
    /// Write the file into `dir`, returning the full path.
    pub fn write_in(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.path);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Header and body generated for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub header: GeneratedFile,
    pub body: GeneratedFile,
}

impl GeneratedUnit {
    /// Both sections in one text, each under its file name.
    pub fn combined(&self) -> String {
        format!(
            "{}:\n\n{}\n\n\n{}:\n\n{}",
            self.header.path, self.header.content, self.body.path, self.body.content
        )
    }

    /// Write the header and body as separate files into `dir`.
    pub fn write_split(&self, dir: &Path) -> Result<[PathBuf; 2]> {
        Ok([self.header.write_in(dir)?, self.body.write_in(dir)?])
    }
}

/// Controls to emit, in order: every added container first, then every other
/// added control. Declaration order is kept within each group.
pub fn emission_order(model: &FormModel) -> Vec<ControlId> {
    let added = || model.iter().filter(|(_, c)| c.added);
    added()
        .filter(|(_, c)| c.is_parent)
        .chain(added().filter(|(_, c)| !c.is_parent))
        .map(|(id, _)| id)
        .collect()
}
