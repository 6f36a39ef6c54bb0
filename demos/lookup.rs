//! Look up a single property in an INI file.
//!
//! Usage: `cargo run --example lookup -- file.ini [section] key`
//!
//! Omit the section argument to search the global section.

use std::process::ExitCode;

use inifile::from_file;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, section, key) = match args.as_slice() {
        [path, key] => (path, None, key),
        [path, section, key] => (path, Some(section.as_str()), key),
        _ => {
            eprintln!("Usage: lookup <ini-file> [section] <key>");
            return ExitCode::FAILURE;
        }
    };

    let doc = match from_file(path) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("could not parse {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    match doc.find_property(section, key) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
