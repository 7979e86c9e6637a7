use super::*;


#[test]
fn render_plain() {
    assert_eq!(render(&Value::number(-5), false), "-5");
    assert_eq!(
        render(&Value::error("Division by zero is not supported"), false),
        "Error: Division by zero is not supported"
    );

    let value = Value::from(vec![Value::symbol("+"), Value::list()]);
    assert_eq!(render(&value, false), "(+ ())");
}

#[test]
fn render_colored_keeps_text() {
    colored::control::set_override(true);
    let value = Value::from(vec![Value::symbol("+"), Value::error("x")]);
    let out = render(&value, true);
    assert!(out.contains("Error: x"));
    assert!(out.contains('+'));
    assert_ne!(out, "(+ Error: x)");
    colored::control::unset_override();
}

#[test]
fn respond_to_lines() {
    assert_eq!(respond("<stdin>", "(+ 1 2 3)", false), "6");
    assert_eq!(respond("<stdin>", "", false), "()");
    assert_eq!(
        respond("<stdin>", "(1 2 3)", false),
        "Error: S-expression does not start with symbol"
    );
    assert_eq!(
        respond("<stdin>", "(+ 1", false),
        "<stdin>:1:5: error: expected ')' at end of input"
    );
}

#[test]
fn default_options() {
    let options = ReplOptions::default();
    assert_eq!(options.prompt, "simplysp> ");
    assert!(options.history.is_none());
    assert!(options.color);
    assert!(options.banner);
}

#[test]
fn readline_errors_ending_session() {
    assert!(ends_session(&ReadlineError::Interrupted));
    assert!(ends_session(&ReadlineError::Eof));
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "terminal gone");
    assert!(ends_session(&ReadlineError::Io(io)));
}

#[test]
fn run_file_reports_missing_file() {
    let err = run_file("/nonexistent/simplysp/input.lisp", false).unwrap_err();
    assert_eq!(err.kind().name(), "StdError");
}

#[test]
fn run_file_transcript() {
    let path = std::env::temp_dir().join(format!("simplysp-run-file-{}.lisp", std::process::id()));
    fs::write(&path, "(+ 1 2)\n\n(/ 4 0)\n(+ 1\n").unwrap();
    assert!(run_file(&path, false).is_ok());
    fs::remove_file(&path).unwrap();
}
