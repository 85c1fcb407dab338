//! `jlscan` CLI
//!
//! Tokenizes Julia sources with the external scanner.

use jlscan::commands::{lex_file, parse_lex_options};
use jlscan::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: jlscan lex <file.jl> [--no-trivia] [--text]");
                fail(&CliError::MissingPath);
            }
            let result = parse_lex_options(&args[3..])
                .and_then(|options| lex_file(&args[2], &options));
            match result {
                Ok(out) => print!("{out}"),
                Err(e) => fail(&e),
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("jlscan {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Julia external scanner");
    println!();
    println!("Usage: jlscan <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.jl>        Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --no-trivia          Hide whitespace and comments");
    println!("  --text, -t           Show each token's source text");
    println!();
    println!("Set RUST_LOG=jl_scanner=trace to trace scanner decisions.");
}
