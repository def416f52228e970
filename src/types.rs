//! Closed set of C type spellings understood by the scraper.
//!
//! Both directions are exhaustive matches: adding a type means touching
//! [`PrimitiveType::resolve`] and [`PrimitiveType::csharp`] together.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "char*")]
    CharPtr,
    #[serde(rename = "int*")]
    IntPtr,
    #[serde(rename = "float*")]
    FloatPtr,
    #[serde(rename = "double*")]
    DoublePtr,
    #[serde(rename = "void*")]
    VoidPtr,
}

impl PrimitiveType {
    /// Look up a normalized type spelling (`int`, `char*`, ...).
    ///
    /// The keyword is matched case-insensitively. The `*` suffix must already
    /// be attached without whitespace; the parser normalizes `char *` first.
    pub fn resolve(spelling: &str) -> Option<Self> {
        let ty = match spelling.to_ascii_lowercase().as_str() {
            "int" => PrimitiveType::Int,
            "float" => PrimitiveType::Float,
            "double" => PrimitiveType::Double,
            "void" => PrimitiveType::Void,
            "string" => PrimitiveType::String,
            "char" => PrimitiveType::Char,
            "char*" => PrimitiveType::CharPtr,
            "int*" => PrimitiveType::IntPtr,
            "float*" => PrimitiveType::FloatPtr,
            "double*" => PrimitiveType::DoublePtr,
            "void*" => PrimitiveType::VoidPtr,
            _ => return None,
        };
        Some(ty)
    }

    /// Canonical C spelling.
    pub fn c_spelling(self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
            PrimitiveType::String => "string",
            PrimitiveType::Char => "char",
            PrimitiveType::CharPtr => "char*",
            PrimitiveType::IntPtr => "int*",
            PrimitiveType::FloatPtr => "float*",
            PrimitiveType::DoublePtr => "double*",
            PrimitiveType::VoidPtr => "void*",
        }
    }

    /// Spelling used in a C# `extern` signature.
    ///
    /// `char*` marshals as `string`; every other pointer is an opaque `IntPtr`.
    pub fn csharp(self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
            PrimitiveType::String => "string",
            PrimitiveType::Char => "char",
            PrimitiveType::CharPtr => "string",
            PrimitiveType::IntPtr
            | PrimitiveType::FloatPtr
            | PrimitiveType::DoublePtr
            | PrimitiveType::VoidPtr => "IntPtr",
        }
    }
}
