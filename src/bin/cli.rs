//! Interactive command-line fallback for environments without a browser.
//!
//! Reads English text line by line, runs the same transformation pipeline as
//! the server, and prints the three numbered sections.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use trilipi::transform::{TransformConfig, TransformEngine};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match TransformConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::from(1);
        }
    };

    let engine = match TransformEngine::new(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("failed to create engine: {e}");
            return ExitCode::from(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    println!("trilipi — English to Hindi text transformer (model: {})", engine.model());
    println!("Enter English text, or 'quit' to exit.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        if std::io::stdout().flush().is_err() {
            return ExitCode::from(1);
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                return ExitCode::from(1);
            }
        }

        let input = line.trim_end_matches(['\n', '\r']);
        if matches!(input.trim(), "quit" | "exit" | "q") {
            break;
        }
        if input.trim().is_empty() {
            println!("Please enter some text.");
            continue;
        }

        match rt.block_on(engine.transform(input)) {
            Ok(outcome) => {
                if let Some(warning) = &outcome.warning {
                    eprintln!("warning: reply was missing sections: {}", warning.describe());
                }
                println!("{}", outcome.result.to_numbered_block());
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }

    ExitCode::SUCCESS
}
