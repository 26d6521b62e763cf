//! Command-line interface for offside
//! This binary tokenizes minihs source files and shows the token stream
//! before and after layout resolution.
//!
//! Usage:
//!   offside tokens `<path>` [--format `<format>`]   - Print the raw token stream
//!   offside resolve `<path>` [--format `<format>`]  - Print the layout-resolved stream

use clap::{Arg, Command};

use offside::layout::LayoutToken;
use offside::minihs::{lex, tokenize, Token};

fn main() {
    let matches = Command::new("offside")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting layout resolution of minihs files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the raw token stream, before layout resolution")
                .arg(
                    Arg::new("path")
                        .help("Path to the minihs file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Print the token stream after layout resolution")
                .arg(
                    Arg::new("path")
                        .help("Path to the minihs file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        Some(("resolve", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_resolve_command(path, format);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let source = read_source(path);
    let tokens = tokenize(&source);

    match format {
        "json" => {
            let rows: Vec<_> = tokens
                .iter()
                .map(|(kind, span)| {
                    serde_json::json!({
                        "kind": kind,
                        "start": span.start,
                        "end": span.end,
                    })
                })
                .collect();
            print_json(&rows);
        }
        "text" => {
            for (kind, span) in &tokens {
                println!("{:>5}..{:<5} {:?}", span.start, span.end, kind);
            }
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Handle the resolve command
fn handle_resolve_command(path: &str, format: &str) {
    let source = read_source(path);
    let tokens = lex(&source);

    match format {
        "json" => print_json(&tokens),
        "text" => {
            for token in &tokens {
                println!("{}", describe(token));
            }
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    let output = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

fn describe(token: &LayoutToken<Token>) -> String {
    let kind = match token.kind {
        Some(kind) => format!("{:?}", kind),
        None => "Eof".to_string(),
    };
    let marker = if token.kind.map(|k| k.is_virtual()).unwrap_or(false) {
        " *"
    } else {
        ""
    };
    format!(
        "{:>5}..{:<5} col {:<3} {}{}",
        token.start, token.end, token.column, kind, marker
    )
}
