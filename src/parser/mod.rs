//! Parser module: declaration scan plus comment association per header.

pub mod comment;
pub mod declaration;

use crate::error::ParseError;
use crate::model::BindingModel;

/// Parse one header's text into a binding model.
///
/// Declarations appear in source order, each carrying the doc comment found
/// directly above it (if any).
pub fn parse_header(text: &str, marker: &str) -> Result<BindingModel, ParseError> {
    let functions = declaration::extract(text, marker)?
        .into_iter()
        .map(|(span, mut decl)| {
            decl.doc = comment::associate(text, span.start);
            decl
        })
        .collect();
    Ok(BindingModel { functions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parameter;
    use crate::types::PrimitiveType;

    const M: &str = "EXTERN_C_API";

    const MYLIB: &str = r#"#ifdef _WIN32
  #define EXTERN_C_API __declspec(dllexport)
#else
  #define EXTERN_C_API
#endif

extern "C" {
    /**
     * Add two integers together
     * @param a First integer
     * @param b Second integer
     * @return The sum of the two integers
     */
    EXTERN_C_API int add(int a, int b);

    // Subtract two integers
    EXTERN_C_API int subtract(int a, int b);

    /**  Multiply two integer **/
    EXTERN_C_API int multiply(int a, int b);

    // Divide two integers
    // return a // b
    EXTERN_C_API int divide(int a, int b);
}
"#;

    #[test]
    fn parse_demo_header() {
        let model = parse_header(MYLIB, M).unwrap();
        let names: Vec<&str> = model.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["add", "subtract", "multiply", "divide"]);

        let add = &model.functions[0];
        let doc = add.doc.as_ref().unwrap();
        assert_eq!(doc.summary, vec!["Add two integers together"]);
        assert_eq!(doc.param("b"), Some("Second integer"));

        let divide = model.functions[3].doc.as_ref().unwrap();
        assert_eq!(divide.summary, vec!["Divide two integers", "return a // b"]);
    }

    #[test]
    fn scenario_documented_add() {
        let text = "/** Adds two numbers.\n * @param a first\n * @param b second\n * @return sum */\nEXTERN_C_API int Add(int a, int b)";
        let model = parse_header(text, M).unwrap();
        assert_eq!(model.len(), 1);
        let add = &model.functions[0];
        assert_eq!(add.name, "Add");
        assert_eq!(add.return_type, PrimitiveType::Int);
        assert_eq!(
            add.parameters,
            vec![
                Parameter { ty: PrimitiveType::Int, name: "a".into() },
                Parameter { ty: PrimitiveType::Int, name: "b".into() },
            ]
        );
        let doc = add.doc.as_ref().unwrap();
        assert_eq!(doc.summary, vec!["Adds two numbers."]);
        assert_eq!(doc.param("a"), Some("first"));
        assert_eq!(doc.param("b"), Some("second"));
        assert_eq!(doc.returns, "sum");
    }

    #[test]
    fn scenario_undocumented_pair() {
        let text = "int unrelated;\nEXTERN_C_API int f(int a);\nEXTERN_C_API void g();\n";
        let model = parse_header(text, M).unwrap();
        assert_eq!(model.len(), 2);
        assert!(model.functions.iter().all(|f| f.doc.is_none()));
    }

    #[test]
    fn scenario_malformed_parameter() {
        let err = parse_header("EXTERN_C_API int f(42);", M).unwrap_err();
        assert!(matches!(err, ParseError::MalformedParameter { ref segment, .. } if segment == "42"));
    }

    #[test]
    fn void_parameter_list_is_rejected() {
        let err = parse_header("EXTERN_C_API int f(void);", M).unwrap_err();
        assert!(matches!(err, ParseError::MalformedParameter { ref segment, .. } if segment == "void"));
    }

    #[test]
    fn scenario_unknown_return_type() {
        let err = parse_header("EXTERN_C_API long f();", M).unwrap_err();
        assert!(matches!(err, ParseError::UnknownType { ref token, .. } if token == "long"));
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse_header(MYLIB, M).unwrap(), parse_header(MYLIB, M).unwrap());
    }

    #[test]
    fn identical_declarations_keep_their_own_comments() {
        let text = "// first\nEXTERN_C_API int f();\n\n// second\nEXTERN_C_API int f();\n";
        let model = parse_header(text, M).unwrap();
        assert_eq!(model.functions[0].doc.as_ref().unwrap().summary, vec!["first"]);
        assert_eq!(model.functions[1].doc.as_ref().unwrap().summary, vec!["second"]);
    }

    #[test]
    fn custom_marker() {
        let text = "MYLIB_API float lerp(float a, float b, float t);";
        assert_eq!(parse_header(text, "MYLIB_API").unwrap().len(), 1);
        assert!(parse_header(text, M).unwrap().is_empty());
    }
}
