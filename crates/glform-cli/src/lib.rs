//! Windows Forms designer to GLToolkit C++ converter.
//!
//! Ties the parser, resolver and code generator into one pipeline and hosts
//! the `glform` command-line front end.
//!
//! # Example
//!
//! ```ignore
//! use glform::{convert, EmitOptions};
//!
//! let source = std::fs::read_to_string("MoveFacet.Designer.cs")?;
//! let conversion = convert(&source, &EmitOptions::default())?;
//! println!("{}", conversion.text());
//! ```

pub mod commands;
pub mod config;
pub mod pipeline;

pub use glform_codegen::EmitOptions;
pub use pipeline::{convert, Conversion, ConvertError};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the default level
/// from `info` to `debug` and then `trace`.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("glform={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
