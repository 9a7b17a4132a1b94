//! GLToolkit C++ generator.

use glform_core::{Control, FormModel};
use serde::Serialize;
use tracing::debug;

use super::templates::TemplateEngine;
use super::{emission_order, CodeGenerator, EmitOptions, GeneratedFile, GeneratedUnit};
use crate::error::{CodegenError, Result};

const DIMENSIONS: &str = "dimensions";
const EPILOGUE: &str = "epilogue";

const DIMENSIONS_TEMPLATE: &str = "\
int wD = {{add client_width padding}};
int hD = {{add client_height padding}};
";

const EPILOGUE_TEMPLATE: &str = "\
SetTitle({{c_string title}});
// Center dialog
int wS,hS;
GLToolkit::GetScreenSize(&wS,&hS);
int xD = (wS-wD)/2;
int yD = (hS-hD)/2;
SetBounds(xD,yD,wD,hD);
";

/// Form-level values fed to the templates.
#[derive(Serialize)]
struct DialogContext<'m> {
    title: &'m str,
    client_width: i32,
    client_height: i32,
    padding: i32,
}

/// Generates a `GLWindow` subclass body for the GLToolkit C++ UI library.
pub struct GlToolkitGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: EmitOptions,
}

impl<'a> GlToolkitGenerator<'a> {
    /// Create a generator with the default padding.
    pub fn new() -> Result<Self> {
        Self::with_options(EmitOptions::default())
    }

    /// Create a generator with explicit options.
    pub fn with_options(options: EmitOptions) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(DIMENSIONS, DIMENSIONS_TEMPLATE)?;
        engine.register_template(EPILOGUE, EPILOGUE_TEMPLATE)?;
        Ok(Self { engine, options })
    }

    pub fn options(&self) -> EmitOptions {
        self.options
    }

    /// Member declarations, one per emitted control, in declaration order.
    fn generate_header(&self, model: &FormModel) -> String {
        model
            .controls()
            .iter()
            .filter(|c| c.added)
            .map(|c| format!("{}\t*{};\n", c.target_type, c.name))
            .collect()
    }

    /// Construction, bounds, attach and item statements for one control.
    fn generate_control(&self, model: &FormModel, control: &Control) -> Result<String> {
        let name = &control.name;
        let target = control.target_type;
        let mut lines = Vec::new();

        let handle = if target.takes_handle() { "0," } else { "" };
        let label = if target.is_choice() {
            "0".to_string()
        } else {
            format!("\"{}\"", control.text)
        };
        lines.push(format!("{} = new {}({}{});", name, target, handle, label));

        let (x, y) = (control.position.x, control.position.y);
        let (w, h) = (control.size.width, control.size.height);
        match control.parent {
            Some(parent_id) => {
                let parent = model.get(parent_id).ok_or_else(|| CodegenError::DanglingParent {
                    control: name.clone(),
                    parent: parent_id.0,
                })?;
                lines.push(format!(
                    "{}->SetCompBounds({},{},{},{},{});",
                    parent.name, name, x, y, w, h
                ));
                lines.push(format!("{}->Add({});", parent.name, name));
            }
            None => {
                lines.push(format!("{}->SetBounds({},{},{},{});", name, x, y, w, h));
                lines.push(format!("Add({});", name));
            }
        }

        if target.is_choice() {
            lines.push(format!("{}->SetSize({});", name, control.items.len()));
            for (i, item) in control.items.iter().enumerate() {
                lines.push(format!("{}->SetValueAt({},\"{}\");", name, i, item));
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn generate_body(&self, model: &FormModel) -> Result<String> {
        let context = DialogContext {
            title: &model.form.title,
            client_width: model.form.client_width,
            client_height: model.form.client_height,
            padding: self.options.padding,
        };

        let mut body = self.engine.render(DIMENSIONS, &context)?;
        for id in emission_order(model) {
            let Some(control) = model.get(id) else {
                continue;
            };
            body.push_str(&self.generate_control(model, control)?);
            if !control.is_parent {
                body.push('\n');
            }
        }
        body.push_str(&self.engine.render(EPILOGUE, &context)?);
        Ok(body)
    }
}

impl<'a> CodeGenerator for GlToolkitGenerator<'a> {
    fn framework_name(&self) -> &'static str {
        "GLToolkit"
    }

    fn generate(&self, model: &FormModel) -> Result<GeneratedUnit> {
        let header = self.generate_header(model);
        let body = self.generate_body(model)?;
        debug!(
            form = %model.form.name,
            declared = model.len(),
            emitted = header.lines().count(),
            "generated GLToolkit unit"
        );

        Ok(GeneratedUnit {
            header: GeneratedFile {
                path: format!("{}.h", model.form.name),
                content: header,
            },
            body: GeneratedFile {
                path: format!("{}.cpp", model.form.name),
                content: body,
            },
        })
    }
}
