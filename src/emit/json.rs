//! JSON emitter: the binding model as data, for custom code generators.

use crate::emit::{EmitOptions, Emitter};
use crate::model::{BindingModel, FunctionDeclaration};
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonEmitter;

#[derive(Serialize)]
struct JsonDocument<'a> {
    class: &'a str,
    library: &'a str,
    functions: &'a [FunctionDeclaration],
}

impl Emitter for JsonEmitter {
    fn emit(&self, model: &BindingModel, options: &EmitOptions) -> Result<String> {
        let doc = JsonDocument {
            class: &options.class_name,
            library: &options.lib_name,
            functions: &model.functions,
        };
        let mut out =
            serde_json::to_string_pretty(&doc).context("failed to serialize binding model")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
