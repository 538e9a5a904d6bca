use std::fs;

use glam::Vec3;
use hotprops::{
    LoadError, Value, ValueKind, build_bindings,
    error::{EvalError, ParseError},
    interpreter::parser::expression::MAX_NESTING_DEPTH,
};
use walkdir::WalkDir;

#[test]
fn demo_files_load() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "properties"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = build_bindings(&content) {
            panic!("Demo {path:?} failed to load:\n{e}");
        }
    }

    assert!(count > 0, "No demo files found in demos/");
}

fn eval(src: &str, name: &str) -> Value {
    match build_bindings(src) {
        Ok(bindings) => bindings.get(name)
                                .cloned()
                                .unwrap_or_else(|| panic!("'{name}' not bound")),
        Err(e) => panic!("Source failed: {e}"),
    }
}

fn eval_error(src: &str) -> EvalError {
    match build_bindings(src) {
        Err(LoadError::Eval(e)) => e,
        other => panic!("Expected an evaluation error, got {other:?}"),
    }
}

#[test]
fn literals_round_trip() {
    assert_eq!(eval("float z_near = 3.0f;", "z_near"), Value::Float(3.0));
    assert_eq!(eval("float f = 0.032f;", "f"), Value::Float("0.032".parse().unwrap()));
    assert_eq!(eval("float f = 100.f;", "f"), Value::Float(100.0));
    assert_eq!(eval("float f = .5f;", "f"), Value::Float(0.5));
    assert_eq!(eval("float f = -2.0f;", "f"), Value::Float(-2.0));
    assert_eq!(eval("bool flag = true;", "flag"), Value::Bool(true));
    assert_eq!(eval("bool flag = false;", "flag"), Value::Bool(false));
    assert_eq!(eval(r#"std::string title = "demo";"#, "title"), Value::from("demo"));
    assert_eq!(eval(r#"std::string empty = "";"#, "empty"), Value::from(""));
}

#[test]
fn vec3_constructor() {
    assert_eq!(eval("glm::vec3 v = { 1.0f, 2.0f, 3.0f };", "v"),
               Value::Vec3(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(eval("float a = 2.0f;\nglm::vec3 v = { a, a * 2.0f, -1.0f };", "v"),
               Value::Vec3(Vec3::new(2.0, 4.0, -1.0)));
}

#[test]
fn float_arithmetic() {
    assert_eq!(eval("float x = 1.0f + 2.0f;", "x"), Value::Float(3.0));
    assert_eq!(eval("float x = 8.0f - 5.0f;", "x"), Value::Float(3.0));
    assert_eq!(eval("float x = 7.0f * 9.0f;", "x"), Value::Float(63.0));
    assert_eq!(eval("float x = 10.0f / 4.0f;", "x"), Value::Float(2.5));
    assert_eq!(eval("float x = 1.0f / 0.0f;", "x"), Value::Float(f32::INFINITY));
}

#[test]
fn operator_chains_are_right_associative() {
    assert_eq!(eval("float r = 10.0f - 3.0f - 2.0f;", "r"), Value::Float(9.0));
    assert_eq!(eval("float r = 8.0f / 4.0f / 2.0f;", "r"), Value::Float(4.0));
    assert_eq!(eval("float r = 2.0f * 3.0f + 1.0f;", "r"), Value::Float(8.0));
}

#[test]
fn vec3_and_string_operators() {
    let src = "glm::vec3 a = { 1.0f, 2.0f, 3.0f };\n\
               glm::vec3 b = { 0.5f, 0.5f, 0.5f };\n\
               glm::vec3 sum = a + b;\n\
               glm::vec3 diff = a - b;";
    assert_eq!(eval(src, "sum"), Value::Vec3(Vec3::new(1.5, 2.5, 3.5)));
    assert_eq!(eval(src, "diff"), Value::Vec3(Vec3::new(0.5, 1.5, 2.5)));

    let src = r#"std::string a = "hello, "; std::string b = a + "world";"#;
    assert_eq!(eval(src, "b"), Value::from("hello, world"));
}

#[test]
fn later_definitions_see_earlier_ones() {
    let src = "float screen_width = 1024.f;\n\
               float screen_height = 768.f;\n\
               float aspect = screen_width / screen_height;";
    assert_eq!(eval(src, "aspect"), Value::Float(1024.0 / 768.0));
}

#[test]
fn last_write_wins() {
    let src = "float k = 1.0f;\nfloat k = 2.0f;";
    assert_eq!(eval(src, "k"), Value::Float(2.0));

    let src = "float k = 1.0f;\nstd::string k = \"now a string\";";
    assert_eq!(eval(src, "k"), Value::from("now a string"));

    let src = "float k = 1.0f;\nfloat k = k + 1.0f;";
    assert_eq!(eval(src, "k"), Value::Float(2.0));
}

#[test]
fn comments_and_includes_are_ignored() {
    let src = "#include <glm/vec3.hpp>\n\
               // a comment\n\
               float a = 1.0f; // trailing\n\
               # another one\n\
               float b = a;\n\
               // no newline at the end";
    assert_eq!(eval(src, "b"), Value::Float(1.0));
}

#[test]
fn empty_source_has_no_bindings() {
    assert!(build_bindings("").unwrap().is_empty());
    assert!(build_bindings("// only a comment\n").unwrap().is_empty());
}

#[test]
fn type_tags_are_not_checked() {
    assert_eq!(eval("bool x = 1.0f;", "x"), Value::Float(1.0));
}

#[test]
fn forward_reference_is_error() {
    let error = eval_error("float b = a + 1.0f;\nfloat a = 2.0f;");
    assert_eq!(error,
               EvalError::UndefinedIdentifier { name: "a".to_string(),
                                                line: 1, });
}

#[test]
fn self_reference_is_error() {
    let error = eval_error("float a = a;");
    assert!(matches!(error, EvalError::UndefinedIdentifier { ref name, .. } if name == "a"));
}

#[test]
fn unsupported_operators_are_errors() {
    let error = eval_error(r#"std::string s = "a" - "b";"#);
    assert_eq!(error,
               EvalError::UnsupportedOperator { op:    "-".to_string(),
                                                left:  ValueKind::String,
                                                right: ValueKind::String,
                                                line:  1, });

    assert!(matches!(eval_error("bool b = true + false;"),
                     EvalError::UnsupportedOperator { left: ValueKind::Bool, .. }));
    assert!(matches!(eval_error("glm::vec3 v = { 1.0f, 1.0f, 1.0f };\nglm::vec3 w = v * v;"),
                     EvalError::UnsupportedOperator { left: ValueKind::Vec3, line: 2, .. }));
    assert!(matches!(eval_error("float x = 1.0f + \"one\";"),
                     EvalError::UnsupportedOperator { left:  ValueKind::Float,
                                                      right: ValueKind::String,
                                                      .. }));
    assert!(matches!(eval_error("float a = 1.0f;\nfloat b = a = 2.0f;"),
                     EvalError::UnsupportedOperator { .. }));
}

#[test]
fn vec3_components_must_be_floats() {
    let error = eval_error("glm::vec3 v = { 1.0f, true, 3.0f };");
    assert_eq!(error,
               EvalError::ExpectedFloat { axis:  'y',
                                          found: ValueKind::Bool,
                                          line:  1, });
}

#[test]
fn unterminated_string_is_lex_error() {
    let src = "float a = 1.0f;\nstd::string title = \"demo;\nfloat b = 2.0f;";
    match build_bindings(src) {
        Err(LoadError::Lex(e)) => {
            assert_eq!(e.line, 2);
            assert_eq!(e.remaining, "\"demo;\nfloat b = 2.0f;");
        },
        other => panic!("Expected a lex error, got {other:?}"),
    }
}

#[test]
fn unknown_character_is_lex_error() {
    match build_bindings("float a = 1.0f $;") {
        Err(LoadError::Lex(e)) => assert_eq!(e.remaining, "$;"),
        other => panic!("Expected a lex error, got {other:?}"),
    }
}

#[test]
fn missing_semicolon_points_at_token() {
    let src = "float a = 1.0f;\nfloat b = 2.0f\nfloat c = 3.0f;";
    match build_bindings(src) {
        Err(LoadError::Parse(ParseError::UnexpectedToken { expected,
                                                           found,
                                                           line,
                                                           pointer, })) => {
            assert_eq!(expected, "operator");
            assert_eq!(found, "type tag 'float'");
            assert_eq!(line, 3);
            assert_eq!(pointer, "float c = 3.0f;\n^");
        },
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn parse_error_message_has_caret() {
    let src = "float x = = 1.0f;";
    let message = build_bindings(src).unwrap_err().to_string();
    assert!(message.contains("expected expression"), "{message}");
    assert!(message.ends_with("float x = = 1.0f;\n          ^"), "{message}");
}

#[test]
fn definition_needs_assign_operator() {
    assert!(matches!(build_bindings("float x + 1.0f;"),
                     Err(LoadError::Parse(ParseError::UnexpectedToken { expected: "'='", .. }))));
}

#[test]
fn definition_needs_type_tag() {
    assert!(matches!(build_bindings("x = 1.0f;"),
                     Err(LoadError::Parse(ParseError::UnexpectedToken { expected: "type tag", .. }))));
}

#[test]
fn truncated_input_is_error() {
    assert!(matches!(build_bindings("float x = 1.0f"),
                     Err(LoadError::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(build_bindings("glm::vec3 v = { 1.0f, 2.0f"),
                     Err(LoadError::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(build_bindings("float x ="),
                     Err(LoadError::Parse(ParseError::UnexpectedEndOfInput { expected: "expression",
                                                                             .. }))));
}

#[test]
fn vec3_needs_three_components() {
    assert!(matches!(build_bindings("glm::vec3 v = { 1.0f, 2.0f };"),
                     Err(LoadError::Parse(ParseError::UnexpectedToken { expected: "','", .. }))));
}

#[test]
fn long_operator_chain_loads() {
    let src = format!("float x = {}1.0f;", "1.0f + ".repeat(10_000));
    assert_eq!(eval(&src, "x"), Value::Float(10_001.0));

    // Right to left: x - (x - (... - x)) over an odd number of operands.
    let src = format!("float x = 1.0f;\nfloat y = {}x;", "x - ".repeat(10_000));
    assert_eq!(eval(&src, "y"), Value::Float(1.0));
}

#[test]
fn long_chain_reports_first_undefined_operand() {
    let src = format!("float x = {}nope + also_nope;", "1.0f + ".repeat(10_000));
    assert_eq!(eval_error(&src),
               EvalError::UndefinedIdentifier { name: "nope".to_string(),
                                                line: 1, });
}

fn nested_vec3(depth: usize) -> String {
    format!("glm::vec3 v = {}1.0f{};",
            "{ ".repeat(depth),
            ", 1.0f, 1.0f }".repeat(depth))
}

#[test]
fn vec3_nesting_at_limit_parses() {
    // Nested constructors parse; the inner vec3 is not a float component.
    assert!(matches!(eval_error(&nested_vec3(MAX_NESTING_DEPTH)),
                     EvalError::ExpectedFloat { axis: 'x',
                                                found: ValueKind::Vec3,
                                                .. }));
}

#[test]
fn vec3_nesting_beyond_limit_is_parse_error() {
    for depth in [MAX_NESTING_DEPTH + 1, 10_000] {
        match build_bindings(&nested_vec3(depth)) {
            Err(LoadError::Parse(ParseError::NestingTooDeep { limit, line, .. })) => {
                assert_eq!(limit, MAX_NESTING_DEPTH);
                assert_eq!(line, 1);
            },
            other => panic!("Expected a nesting error, got {other:?}"),
        }
    }
}
