//! Command-line interface for formdex
//! This binary extracts the id -> form-name map literal from a TypeScript
//! source file and emits it as a JSON document.
//!
//! Usage:
//!   formdex `<path>`                      - Print the JSON document to stdout
//!   formdex `<path>` -o `<out.json>`        - Write the JSON document to a file
//!   formdex `<path>` --stats --sample 3   - Also print a summary and a sample

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use std::path::Path;

use formdex::processor::{extract_file, render_json, write_json};
use formdex::report::{sample_lines, summarize};

fn main() {
    let mut command = Command::new("formdex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract the id -> form-name map inside a TypeScript file")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the TypeScript file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Write the resulting JSON to this path (defaults to stdout)"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("5")
                .help("Show the first N entries after parsing (default: 5). Set to 0 to skip"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .action(ArgAction::SetTrue)
                .help("Print a short summary about the parsed data"),
        );
    let matches = command.get_matches_mut();

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    if !Path::new(input).exists() {
        command
            .error(ErrorKind::ValueValidation, format!("{} does not exist", input))
            .exit();
    }

    let entries = extract_file(input).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let document = render_json(&entries).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(output) => {
            if let Err(e) = write_json(output, &document) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => println!("{}", document),
    }

    let sample = *matches
        .get_one::<usize>("sample")
        .expect("sample has a default value");
    if sample > 0 {
        println!("\nSample entries:");
        for line in sample_lines(&entries, sample) {
            println!("  {}", line);
        }
    }

    if matches.get_flag("stats") {
        println!("\n{}", summarize(&entries));
    }
}
