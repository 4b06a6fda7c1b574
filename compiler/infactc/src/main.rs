//! infact CLI

use infactc::commands::{check_file, dump_file, lex_file};

fn main() {
    infactc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" | "dump" | "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: infact {command} <file>");
                std::process::exit(1);
            };
            match command.as_str() {
                "check" => check_file(path),
                "dump" => dump_file(path),
                _ => lex_file(path),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("infact {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("infact configuration interpreter");
    println!();
    println!("Usage: infact <command> <file>");
    println!();
    println!("Commands:");
    println!("  check <file>    Evaluate a file and report errors");
    println!("  dump <file>     Evaluate a file and print every variable");
    println!("  lex <file>      Tokenize and display tokens");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=infact_eval=debug) to trace evaluation.");
}
