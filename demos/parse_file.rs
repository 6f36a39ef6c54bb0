//! Parse an INI file, printing every malformed line as a diagnostic, then
//! dump the document in canonical form together with its statistics.
//!
//! Usage: `cargo run --example parse_file -- path/to/file.ini`

use std::process::ExitCode;
use std::time::Instant;

use inifile::{ErrorAction, Parser};

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: parse_file <ini-file>");
        return ExitCode::FAILURE;
    };

    let start = Instant::now();
    let result = Parser::new()
        .on_error(|event| {
            eprintln!(
                "{}:{}:{}: {}",
                event.source_name, event.line_number, event.column, event.error
            );
            if !event.line.is_empty() {
                eprintln!("  {}", event.line);
            }
            ErrorAction::Continue
        })
        .parse_file(&path);
    let elapsed = start.elapsed();

    let doc = match result {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("could not parse {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    println!("The properties retrieved from {} are:\n", path);
    print!("{}", doc.to_ini_string());

    let stats = doc.stats();
    println!(
        "{} named sections, {} properties, {} arena chunks holding {} bytes",
        stats.sections, stats.properties, stats.arena_chunks, stats.arena_bytes
    );
    println!("Parsed in {:?}", elapsed);
    ExitCode::SUCCESS
}
