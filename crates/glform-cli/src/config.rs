//! Command-line arguments and the `glform.toml` configuration file.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use glform_codegen::{EmitOptions, DEFAULT_PADDING};
use serde::{Deserialize, Serialize};

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "glform.toml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "glform",
    version,
    about = "Convert Windows Forms designer files to GLToolkit C++"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: glform.toml in current dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a designer file to GLToolkit C++
    Convert {
        /// Designer file, e.g. MoveFacet.Designer.cs
        input: PathBuf,

        /// Output file (default: the input path plus the configured suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixels added to the client size for the dialog bounds
        #[arg(long)]
        padding: Option<i32>,

        /// Write <Form>.h and <Form>.cpp next to the output instead of one file
        #[arg(long)]
        split: bool,

        /// Print the result instead of writing files
        #[arg(long, conflicts_with_all = ["output", "split"])]
        stdout: bool,
    },

    /// Print the resolved control model as JSON
    Inspect {
        /// Designer file
        input: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

// ============================================================================
// Config File Model (optional TOML)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlformConfig {
    #[serde(default)]
    pub emit: EmitConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitConfig {
    #[serde(default = "default_padding")]
    pub padding: i32,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default)]
    pub split: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            split: false,
        }
    }
}

// Serde default helpers
fn default_padding() -> i32 { DEFAULT_PADDING }
fn default_suffix() -> String { "_out.txt".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load the config file.
///
/// A missing default file yields defaults. A path given explicitly must exist,
/// and a file that does not parse is always an error.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GlformConfig> {
    let (config_path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => {
            return Ok(GlformConfig::default())
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config {}", config_path.display()))
        }
    };

    toml::from_str(&content).with_context(|| format!("malformed config {}", config_path.display()))
}

// ============================================================================
// Settings (merge CLI args with config file)
// ============================================================================

/// Where converted output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// One file holding both sections.
    File(PathBuf),
    /// `<Form>.h` and `<Form>.cpp` in this directory.
    Split(PathBuf),
}

/// Fully resolved settings for `glform convert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSettings {
    pub destination: Destination,
    pub options: EmitOptions,
}

impl ConvertSettings {
    /// CLI flags win over the config file.
    pub fn resolve(
        input: &Path,
        output: Option<PathBuf>,
        padding: Option<i32>,
        split: bool,
        stdout: bool,
        config: &GlformConfig,
    ) -> Self {
        let output = output.unwrap_or_else(|| default_output_path(input, &config.output.suffix));
        let destination = if stdout {
            Destination::Stdout
        } else if split || config.output.split {
            Destination::Split(parent_dir(&output))
        } else {
            Destination::File(output)
        };

        Self {
            destination,
            options: EmitOptions {
                padding: padding.unwrap_or(config.emit.padding),
            },
        }
    }
}

/// `MoveFacet.Designer.cs` → `MoveFacet.Designer.cs_out.txt`
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
