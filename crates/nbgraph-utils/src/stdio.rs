use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use eyre::WrapErr;

/// Whether the given path argument means stdio rather than a file.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Get a writer for the given path.
///
/// If `-` or if `None`, use stdout, otherwise use the given file
pub fn get_output_writer(output: &Option<PathBuf>) -> eyre::Result<Box<dyn Write>> {
    match output {
        None => Ok(Box::new(std::io::stdout())),
        Some(path) if is_stdio(path) => Ok(Box::new(std::io::stdout())),
        Some(path) => {
            let file =
                File::create(path).wrap_err(format!("Failed to create output file: {path:?}"))?;
            Ok(Box::new(file))
        }
    }
}

/// Get a reader for the given path.
///
/// If `-` or if `None`, use stdin, otherwise use the given file
pub fn get_input_reader(input: &Option<PathBuf>) -> eyre::Result<Box<dyn Read>> {
    match input {
        None => Ok(Box::new(std::io::stdin())),
        Some(path) if is_stdio(path) => Ok(Box::new(std::io::stdin())),
        Some(path) => {
            let file = File::open(path).wrap_err(format!("Failed to open input file: {path:?}"))?;
            Ok(Box::new(file))
        }
    }
}

/// Read the whole input (file or stdin) into a string
pub fn read_input_text(input: &Option<PathBuf>) -> eyre::Result<String> {
    let mut reader = get_input_reader(input)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .wrap_err("Failed to read input")?;
    Ok(text)
}

/// Read a configuration file that must exist on disk (never stdin)
pub fn read_config_file(path: &Path) -> eyre::Result<String> {
    std::fs::read_to_string(path).wrap_err(format!("Failed to read config file: {path:?}"))
}
