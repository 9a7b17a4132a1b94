//! Code generation from resolved glform models to GLToolkit C++.
//!
//! The generator turns a [`FormModel`](glform_core::FormModel) into two text
//! sections: member declarations for the dialog header and the construction
//! code for its body.
//!
//! # Example
//!
//! ```ignore
//! use glform_codegen::{CodeGenerator, GlToolkitGenerator};
//!
//! let generator = GlToolkitGenerator::new()?;
//! let unit = generator.generate(&model)?;
//! println!("{}", unit.combined());
//! ```

pub mod error;
pub mod generators;

pub use error::{CodegenError, Result};
pub use generators::{
    emission_order, CodeGenerator, EmitOptions, GeneratedFile, GeneratedUnit, GlToolkitGenerator,
    TemplateEngine, DEFAULT_PADDING,
};
