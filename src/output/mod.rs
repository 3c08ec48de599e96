//! Output generation for the questionnaire CLI application

use owo_colors::OwoColorize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Write the result of a command either to the named file or, if none was
/// given (or it was "-"), to standard output.
pub(crate) fn emit(target: Option<&Path>, content: &str) {
    let result = match target {
        Some(filename) if filename.to_str() != Some("-") => {
            info!("Writing file: {}", filename.display());
            std::fs::write(filename, content)
        }
        _ => {
            debug!("Writing {} bytes to stdout", content.len());
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
        }
    };

    if let Err(error) = result {
        debug!(?error);
        eprintln!(
            "{}: Unable to write output: {}",
            "error".bright_red(),
            error
                .kind()
                .to_string()
                .bold()
        );
        std::process::exit(1);
    }
}
