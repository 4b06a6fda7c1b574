//! The `check` and `dump` commands.

use infact_eval::{EvalError, Interpreter};

use crate::RecordFactory;

/// Evaluate `path` with a [`RecordFactory`].
pub fn evaluate(path: &str) -> Result<Interpreter, EvalError> {
    let mut interp = Interpreter::new(RecordFactory);
    interp.eval_file(path)?;
    Ok(interp)
}

fn evaluate_or_exit(path: &str) -> Interpreter {
    match evaluate(path) {
        Ok(interp) => interp,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Evaluate a file and report whether it succeeded.
pub fn check_file(path: &str) {
    let interp = evaluate_or_exit(path);
    println!("OK: {path} ({} variables)", interp.env().len());
}

/// Evaluate a file and print the resulting environment.
pub fn dump_file(path: &str) {
    let interp = evaluate_or_exit(path);
    print!("{}", interp.env());
}
