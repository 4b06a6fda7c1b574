//! Command handlers for the `infact` CLI.
//!
//! Each handler prints its result and exits with status 1 on failure. The
//! formatting behind them is exposed separately so it can be tested.

mod debug;
mod eval;

pub use debug::{format_tokens, lex_file};
pub use eval::{check_file, dump_file, evaluate};

pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
