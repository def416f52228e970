//! Binding model, the format-agnostic result of scraping one or more headers.

use crate::types::PrimitiveType;
use serde::Serialize;

/// Ordered list of exported functions, in header order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BindingModel {
    pub functions: Vec<FunctionDeclaration>,
}

/// One matched `EXTERN_C_API` declaration.
///
/// Duplicate names are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: PrimitiveType,
    pub doc: Option<DocComment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: PrimitiveType,
    pub name: String,
}

/// Documentation scraped from the comment above a declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DocComment {
    pub summary: Vec<String>,
    /// `@param` entries, first-seen order
    pub params: Vec<ParamDoc>,
    /// `@return` text, empty when absent
    pub returns: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    pub description: String,
}

impl DocComment {
    /// Comment with only summary lines (line comments, one-line blocks).
    pub fn from_summary(summary: Vec<String>) -> Self {
        DocComment {
            summary,
            ..Default::default()
        }
    }

    /// Record a `@param` description. A repeated name replaces the earlier
    /// text but keeps its position.
    pub fn set_param(&mut self, name: &str, description: &str) {
        match self.params.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.description = description.to_string(),
            None => self.params.push(ParamDoc {
                name: name.to_string(),
                description: description.to_string(),
            }),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.description.as_str())
    }
}

impl BindingModel {
    /// Append `other`'s functions after this model's.
    pub fn extend(&mut self, other: BindingModel) {
        self.functions.extend(other.functions);
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_header;

    #[test]
    fn repeated_param_overwrites_in_place() {
        let mut doc = DocComment::default();
        doc.set_param("a", "first");
        doc.set_param("b", "second");
        doc.set_param("a", "again");
        assert_eq!(doc.params.len(), 2);
        assert_eq!(doc.params[0].name, "a");
        assert_eq!(doc.param("a"), Some("again"));
        assert_eq!(doc.param("b"), Some("second"));
        assert_eq!(doc.param("c"), None);
    }

    #[test]
    fn extend_appends_in_call_order() {
        let first = parse_header("EXTERN_C_API int one();\nEXTERN_C_API int two();\n", "EXTERN_C_API").unwrap();
        let second = parse_header("EXTERN_C_API void three();\n", "EXTERN_C_API").unwrap();

        let mut model = BindingModel::default();
        assert!(model.is_empty());
        model.extend(first.clone());
        model.extend(second.clone());
        let names: Vec<&str> = model.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
        assert_eq!(model.len(), 3);

        let mut reversed = BindingModel::default();
        reversed.extend(second);
        reversed.extend(first);
        let names: Vec<&str> = reversed.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["three", "one", "two"]);
    }
}
