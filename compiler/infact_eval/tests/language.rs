#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end language behavior through `Interpreter::eval_str`.

use infact_eval::{EvalErrorKind, GetError, Interpreter, Registry, ScalarType, Slot, Type};
use pretty_assertions::assert_eq;

fn eval(source: &str) -> Interpreter {
    let mut interp = Interpreter::new(Registry::new());
    interp.eval_str(source).expect("source should evaluate");
    interp
}

#[test]
fn references_resolve_to_earlier_bindings() {
    let interp = eval("a = 1; b = a; c = {a, b};");

    assert_eq!(interp.get::<i64>("a").unwrap(), 1);
    assert_eq!(interp.get::<i64>("b").unwrap(), 1);
    assert_eq!(interp.get::<Vec<i64>>("c").unwrap(), vec![1, 1]);

    let types: Vec<String> = interp
        .env()
        .iter()
        .map(|(name, binding)| format!("{name}: {}", binding.ty))
        .collect();
    assert_eq!(types, ["a: int", "b: int", "c: int[]"]);
}

#[test]
fn bind_then_get() {
    let mut interp = Interpreter::new(Registry::new());
    interp
        .env_mut()
        .bind("x", infact_eval::Value::Int(5), Type::INT);

    assert_eq!(interp.get::<i64>("x").unwrap(), 5);
    assert_eq!(
        interp.get::<String>("x").unwrap_err(),
        GetError::TypeMismatch {
            name: "x".to_string(),
            expected: "string".to_string(),
            found: Type::INT,
        }
    );
    assert_eq!(
        interp.get::<i64>("y").unwrap_err(),
        GetError::NotFound("y".to_string())
    );
}

#[test]
fn reassignment_replaces_value_and_type() {
    let interp = eval("x = 1; x = \"a\";");
    assert_eq!(interp.get::<String>("x").unwrap(), "a");
    assert!(interp.get::<i64>("x").is_err());
    assert_eq!(interp.env().len(), 1);
}

#[test]
fn vectors_keep_order() {
    let interp = eval("v = {3, 1, 2};");
    assert_eq!(interp.get::<Vec<i64>>("v").unwrap(), vec![3, 1, 2]);
}

#[test]
fn types_are_inferred_from_literals() {
    let interp = eval("x = true; y = {1, 2, 3};");
    assert_eq!(interp.env().lookup("x").unwrap().ty, Type::BOOL);
    assert_eq!(
        interp.env().lookup("y").unwrap().ty,
        Type::vector(ScalarType::Int)
    );
    assert!(interp.get::<bool>("x").unwrap());
}

#[test]
fn explicit_type_specifiers() {
    let interp = eval(
        "double d = 3;\n\
         string[] names = {\"a\", \"b\"};\n\
         bool [] flags = {true, false};\n\
         int i = -7;\n\
         double e = 1e3;",
    );
    assert_eq!(interp.get::<f64>("d").unwrap(), 3.0);
    assert_eq!(interp.get::<Vec<String>>("names").unwrap(), ["a", "b"]);
    assert_eq!(interp.get::<Vec<bool>>("flags").unwrap(), [true, false]);
    assert_eq!(interp.get::<i32>("i").unwrap(), -7);
    assert_eq!(interp.get::<f64>("e").unwrap(), 1000.0);
}

#[test]
fn reads_check_the_declared_type() {
    let interp = eval("string[] names = {};\nModel m = null;");
    assert!(interp.get::<Vec<String>>("names").unwrap().is_empty());
    assert_eq!(
        interp.get::<Vec<i64>>("names").unwrap_err(),
        GetError::TypeMismatch {
            name: "names".to_string(),
            expected: "int[]".to_string(),
            found: Type::STRING.to_vector(),
        }
    );
    assert_eq!(
        interp.get::<Option<String>>("m").unwrap_err(),
        GetError::TypeMismatch {
            name: "m".to_string(),
            expected: "string or null".to_string(),
            found: Type::object("Model"),
        }
    );
}

#[test]
fn comments_and_empty_statement_lists() {
    let interp = eval("// nothing here\n");
    assert!(interp.env().is_empty());

    let interp = eval("a = 1; // one\n// two\nb = \"// not a comment\";");
    assert_eq!(interp.get::<String>("b").unwrap(), "// not a comment");
}

#[test]
fn string_escapes() {
    let interp = eval(r#"s = "tab\there \"quoted\"\n";"#);
    assert_eq!(interp.get::<String>("s").unwrap(), "tab\there \"quoted\"\n");
}

#[test]
fn undefined_reference_fails_anywhere() {
    for source in [
        "x = nope;",
        "a = 1;\n\n x = {a, nope};",
        "string s = nope;",
    ] {
        let err = Interpreter::new(Registry::new())
            .eval_str(source)
            .unwrap_err();
        assert!(
            matches!(&err.kind, EvalErrorKind::UndefinedVariable(name) if name == "nope"),
            "{source}: {err}"
        );
    }
}

#[test]
fn duplicate_argument_fails_before_construction() {
    let mut interp = Interpreter::new(Registry::new());
    let err = interp.eval_str("f = Foo(x(1), x(2));").unwrap_err();

    // An unregistered type would otherwise fail as unknown.
    assert_eq!(
        err.to_string(),
        "<string>:1:15: duplicate argument `x` in construction of `Foo`"
    );
    assert!(!interp.env().contains("f"));
}

#[test]
fn lexical_error_keeps_earlier_statements() {
    let mut interp = Interpreter::new(Registry::new());
    let err = interp.eval_str("a = 1;\nb = \"open").unwrap_err();

    assert_eq!(err.to_string(), "<string>:2:5: unterminated string literal");
    assert_eq!(interp.get::<i64>("a").unwrap(), 1);
}

#[test]
fn unrecognized_character() {
    let err = Interpreter::new(Registry::new())
        .eval_str("a = 1 # 2;")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "<string>:1:7: unrecognized character '#'"
    );
}

#[test]
fn missing_semicolon() {
    let err = Interpreter::new(Registry::new())
        .eval_str("x = 1")
        .unwrap_err();
    assert_eq!(err.message(), "expected `;`, found end of input");
}

#[test]
fn get_many_stops_at_first_failure() {
    let interp = eval("i = 6; f = \"foo\"; d = 2.5;");

    let (mut i, mut f, mut d) = (0i64, String::new(), 0.0f64);
    interp
        .get_many(&mut [
            Slot::new("i", &mut i),
            Slot::new("f", &mut f),
            Slot::new("d", &mut d),
        ])
        .unwrap();
    assert_eq!((i, f.as_str(), d), (6, "foo", 2.5));

    let (mut i, mut missing, mut d) = (0i64, 0i64, 0.0f64);
    let err = interp
        .get_many(&mut [
            Slot::new("i", &mut i),
            Slot::new("missing", &mut missing),
            Slot::new("d", &mut d),
        ])
        .unwrap_err();
    assert_eq!(err, GetError::NotFound("missing".to_string()));
    assert_eq!((i, d), (6, 0.0));
}

#[test]
fn printed_environment_reads_back() {
    let source = "b = true; i = 3; d = 0.5; s = \"a\\\"b\"; v = {1.0, 2};";
    let first = eval(source);
    let printed = first.env().to_string();

    let second = eval(&printed);
    assert_eq!(second.env().to_string(), printed);
    assert_eq!(second.get::<Vec<f64>>("v").unwrap(), [1.0, 2.0]);
    assert_eq!(second.get::<String>("s").unwrap(), "a\"b");
}
