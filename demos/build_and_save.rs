//! Build a document programmatically and save it, demonstrating the
//! insertion API, re-opened sections, and canonical output order.
//!
//! Usage: `cargo run --example build_and_save -- out.ini`

use std::process::ExitCode;

use inifile::IniDocument;

fn build() -> inifile::Result<IniDocument> {
    let mut doc = IniDocument::new();

    // Properties added before any section land in the global section.
    doc.add_property("version", "1")?;

    doc.add_section("server")?;
    doc.add_property("port", "8080")?;
    doc.add_property("host", "0.0.0.0")?;

    doc.add_section("logging")?;
    doc.add_property("level", "info")?;

    // Re-opening a section appends to it instead of duplicating it.
    doc.add_section("server")?;
    doc.add_property("workers", "4")?;

    Ok(doc)
}

fn main() -> ExitCode {
    let doc = match build() {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("failed to build document: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match std::env::args().nth(1) {
        Some(path) => match doc.save(&path) {
            Ok(()) => {
                println!("saved to {}", path);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("could not save to {}: {}", path, err);
                ExitCode::FAILURE
            }
        },
        None => {
            print!("{}", doc.to_ini_string());
            ExitCode::SUCCESS
        }
    }
}
