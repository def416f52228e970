//! Emitter module with trait-based output format dispatch.

pub mod csharp;
pub mod json;

use crate::model::BindingModel;
use anyhow::{anyhow, Result};

/// Naming used by every emitter.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Name of the generated static class
    pub class_name: String,
    /// Native library base name, without `lib` prefix or extension
    pub lib_name: String,
}

/// Trait for turning a [`BindingModel`] into one output document.
pub trait Emitter {
    fn emit(&self, model: &BindingModel, options: &EmitOptions) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create an emitter for the given format name.
pub fn create_emitter(format: &str) -> Result<Box<dyn Emitter>> {
    match format {
        "csharp" | "cs" => Ok(Box::new(csharp::CSharpEmitter)),
        "json" => Ok(Box::new(json::JsonEmitter)),
        _ => Err(anyhow!("unknown format: {}. Use csharp or json", format)),
    }
}
