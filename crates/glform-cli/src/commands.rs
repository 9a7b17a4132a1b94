use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use glform_core::{Diagnostic, FormModel};
use glform_resolver::resolve_document;

use crate::config::{ConvertSettings, Destination};
use crate::pipeline::convert;

// ============================================================================
// convert subcommand
// ============================================================================

/// Convert `input` and write the result. Returns the files written, which is
/// empty when printing to stdout.
pub fn cmd_convert(input: &Path, settings: &ConvertSettings) -> anyhow::Result<Vec<PathBuf>> {
    let source = read_source(input)?;
    let conversion = convert(&source, &settings.options)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    let written = match &settings.destination {
        Destination::Stdout => {
            print!("{}", conversion.text());
            Vec::new()
        }
        Destination::File(path) => {
            fs::write(path, conversion.text())
                .with_context(|| format!("failed to write {}", path.display()))?;
            vec![path.clone()]
        }
        Destination::Split(dir) => conversion
            .unit
            .write_split(dir)
            .with_context(|| format!("failed to write into {}", dir.display()))?
            .to_vec(),
    };

    for path in &written {
        info!(path = %path.display(), "wrote output");
    }
    Ok(written)
}

// ============================================================================
// inspect subcommand
// ============================================================================

#[derive(Serialize)]
struct Inspection<'a> {
    model: &'a FormModel,
    diagnostics: &'a [Diagnostic],
}

/// Resolve `input` and render the model and diagnostics as JSON.
pub fn cmd_inspect(input: &Path, pretty: bool) -> anyhow::Result<String> {
    let source = read_source(input)?;
    let extraction = resolve_document(&source)
        .with_context(|| format!("failed to resolve {}", input.display()))?;

    let inspection = Inspection {
        model: &extraction.model,
        diagnostics: &extraction.diagnostics,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&inspection)?
    } else {
        serde_json::to_string(&inspection)?
    };
    Ok(json)
}

fn read_source(input: &Path) -> anyhow::Result<String> {
    fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glform_codegen::EmitOptions;

    #[test]
    fn test_cmd_convert_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("MoveFacet.Designer.cs");
        fs::write(&input, include_str!("../../../tests/fixtures/MoveFacet.Designer.cs")).unwrap();
        let output = dir.path().join("out.txt");

        let settings = ConvertSettings {
            destination: Destination::File(output.clone()),
            options: EmitOptions::default(),
        };
        let written = cmd_convert(&input, &settings).unwrap();

        assert_eq!(written, vec![output.clone()]);
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            include_str!("../../../tests/fixtures/MoveFacet.expected.txt")
        );
    }

    #[test]
    fn test_cmd_convert_missing_input() {
        let settings = ConvertSettings {
            destination: Destination::Stdout,
            options: EmitOptions::default(),
        };
        let err = cmd_convert(Path::new("/nonexistent/Form.Designer.cs"), &settings).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_cmd_inspect_reports_resolve_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Broken.Designer.cs");
        fs::write(&input, "this.ClientSize = new System.Drawing.Size(wide, 1);\n").unwrap();

        let err = cmd_inspect(&input, false).unwrap_err();
        assert!(err.to_string().starts_with("failed to resolve"));
        assert!(format!("{err:#}").contains("Invalid number at line 1"));
    }

    #[test]
    fn test_cmd_inspect() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Form.Designer.cs");
        fs::write(
            &input,
            "this.ok.Text = \"OK\";\nthis.Controls.Add(this.ok);\n\
             #endregion\nprivate System.Windows.Forms.Button ok;\n",
        )
        .unwrap();

        let report = cmd_inspect(&input, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report).unwrap();
        let control = &json["model"]["controls"][0];
        assert_eq!(control["name"], "ok");
        assert_eq!(control["target_type"], "GLButton");
        assert_eq!(control["text"], "OK");
        assert_eq!(control["added"], true);
        assert_eq!(json["diagnostics"], serde_json::json!([]));
    }
}
