//! Unity C# emitter producing a static class of `[DllImport]` externs.
//!
//! The library name is chosen per platform with Unity's scripting defines,
//! so one generated file works in the editor and every player build.

use crate::emit::{EmitOptions, Emitter};
use crate::model::{BindingModel, DocComment, FunctionDeclaration};
use anyhow::Result;

pub struct CSharpEmitter;

/// Platforms the preamble selects a library file name for, in `#if` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    /// Anything else (iOS): statically linked into the player
    Static,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Windows,
        Platform::Linux,
        Platform::MacOs,
        Platform::Static,
    ];

    /// Unity scripting defines guarding this platform, `None` for the fallback.
    pub fn defines(self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("UNITY_STANDALONE_WIN || UNITY_EDITOR_WIN"),
            Platform::Linux => Some("UNITY_STANDALONE_LINUX || UNITY_EDITOR_LINUX"),
            Platform::MacOs => Some("UNITY_STANDALONE_OSX || UNITY_EDITOR_OSX"),
            Platform::Static => None,
        }
    }

    /// Value of `LIB_NAME` on this platform.
    pub fn library_file(self, lib: &str) -> String {
        match self {
            Platform::Windows => lib.to_string(),
            Platform::Linux => format!("lib{}.so", lib),
            Platform::MacOs => format!("lib{}.dylib", lib),
            Platform::Static => "__Internal".to_string(),
        }
    }

    fn note(self, lib: &str) -> String {
        match self {
            Platform::Windows => format!("{}.dll", lib),
            Platform::Linux => "Linux".to_string(),
            Platform::MacOs => "macOS".to_string(),
            Platform::Static => "iOS uses static linking".to_string(),
        }
    }
}

impl Emitter for CSharpEmitter {
    fn emit(&self, model: &BindingModel, options: &EmitOptions) -> Result<String> {
        let mut out = String::new();
        out.push_str("using System;\n");
        out.push_str("using System.Runtime.InteropServices;\n\n");
        out.push_str(&format!("public static class {}\n{{\n", options.class_name));
        out.push_str(&render_preamble(&options.lib_name));

        for func in &model.functions {
            out.push('\n');
            out.push_str(&render_function(func));
            out.push('\n');
        }

        out.push_str("}\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "cs"
    }
}

fn render_preamble(lib: &str) -> String {
    let mut out = String::new();
    for (i, platform) in Platform::ALL.iter().enumerate() {
        match (i, platform.defines()) {
            (0, Some(defines)) => out.push_str(&format!("#if {}\n", defines)),
            (_, Some(defines)) => out.push_str(&format!("#elif {}\n", defines)),
            (_, None) => out.push_str("#else\n"),
        }
        out.push_str(&format!(
            "    const string LIB_NAME = \"{}\"; // {}\n",
            platform.library_file(lib),
            platform.note(lib)
        ));
    }
    out.push_str("#endif\n");
    out
}

fn render_function(func: &FunctionDeclaration) -> String {
    let mut out = String::new();
    if let Some(ref doc) = func.doc {
        out.push_str(&render_doc(doc));
    }

    let params: Vec<String> = func
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.ty.csharp(), p.name))
        .collect();

    out.push_str("    [DllImport(LIB_NAME)]\n");
    out.push_str(&format!(
        "    public static extern {} {}({});",
        func.return_type.csharp(),
        func.name,
        params.join(", ")
    ));
    out
}

fn render_doc(doc: &DocComment) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !doc.summary.is_empty() {
        lines.push("<summary>".to_string());
        lines.extend(doc.summary.iter().map(|l| xml_escape(l)));
        lines.push("</summary>".to_string());
    }
    for param in &doc.params {
        lines.push(format!(
            "<param name=\"{}\">{}</param>",
            xml_escape(&param.name),
            xml_escape(&param.description)
        ));
    }
    if !doc.returns.is_empty() {
        lines.push(format!("<returns>{}</returns>", xml_escape(&doc.returns)));
    }

    lines
        .iter()
        .map(|l| {
            if l.is_empty() {
                "    ///\n".to_string()
            } else {
                format!("    /// {}\n", l)
            }
        })
        .collect()
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parameter;
    use crate::types::PrimitiveType;

    fn options() -> EmitOptions {
        EmitOptions {
            class_name: "CppNative".into(),
            lib_name: "mylib".into(),
        }
    }

    fn func(name: &str, doc: Option<DocComment>) -> FunctionDeclaration {
        FunctionDeclaration {
            name: name.into(),
            parameters: vec![
                Parameter { ty: PrimitiveType::CharPtr, name: "label".into() },
                Parameter { ty: PrimitiveType::FloatPtr, name: "values".into() },
            ],
            return_type: PrimitiveType::Void,
            doc,
        }
    }

    #[test]
    fn preamble_lists_every_platform() {
        let pre = render_preamble("mylib");
        assert!(pre.starts_with("#if UNITY_STANDALONE_WIN || UNITY_EDITOR_WIN\n"));
        assert!(pre.contains("    const string LIB_NAME = \"mylib\"; // mylib.dll\n"));
        assert!(pre.contains("#elif UNITY_STANDALONE_LINUX || UNITY_EDITOR_LINUX\n    const string LIB_NAME = \"libmylib.so\"; // Linux\n"));
        assert!(pre.contains("\"libmylib.dylib\"; // macOS\n"));
        assert!(pre.contains("#else\n    const string LIB_NAME = \"__Internal\"; // iOS uses static linking\n#endif\n"));
    }

    #[test]
    fn undocumented_function() {
        let out = render_function(&func("draw", None));
        assert_eq!(
            out,
            "    [DllImport(LIB_NAME)]\n    public static extern void draw(string label, IntPtr values);"
        );
    }

    #[test]
    fn documented_function() {
        let mut doc = DocComment::from_summary(vec!["Draw a plot.".into(), "".into(), "Fast.".into()]);
        doc.set_param("label", "Title");
        doc.returns = "nothing".into();
        let out = render_function(&func("draw", Some(doc)));
        assert_eq!(
            out,
            concat!(
                "    /// <summary>\n",
                "    /// Draw a plot.\n",
                "    ///\n",
                "    /// Fast.\n",
                "    /// </summary>\n",
                "    /// <param name=\"label\">Title</param>\n",
                "    /// <returns>nothing</returns>\n",
                "    [DllImport(LIB_NAME)]\n",
                "    public static extern void draw(string label, IntPtr values);",
            )
        );
    }

    #[test]
    fn doc_text_is_escaped() {
        let doc = DocComment::from_summary(vec!["a < b && b > c".into()]);
        let out = render_doc(&doc);
        assert!(out.contains("a &lt; b &amp;&amp; b &gt; c"));
    }

    #[test]
    fn empty_model_is_a_bare_class() {
        let out = CSharpEmitter.emit(&BindingModel::default(), &options()).unwrap();
        assert!(out.starts_with("using System;\nusing System.Runtime.InteropServices;\n\npublic static class CppNative\n{\n#if "));
        assert!(out.ends_with("#endif\n}\n"));
    }
}
