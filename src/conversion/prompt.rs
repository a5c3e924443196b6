//! Prompt assembly from input source files.

use anyhow::Result;
use std::fs;
use std::io;

use crate::error::Error;

/// Sent as the system message with every completion request.
pub const SYSTEM_PROMPT: &str =
    "You will receive source code files and must convert them to the desired language.";

/// Instruction header placed before the file blocks. The response must be
/// bare code: no prose, no surrounding backtick fences.
pub const PROMPT_HEADER_TEMPLATE: &str = "Convert the following source code files to {language}. \
     Do not include any sentences in your response. \
     Your response must consist entirely of the requested code. \
     Do not use backticks (`) to enclose the code in your response.\n\n";

/// Per-file size cap. Larger inputs fail fast instead of being shipped to
/// the API and billed.
const MAX_INPUT_SIZE: u64 = 1024 * 1024; // 1MB

/// Builds the user prompt: the instruction header followed by one
/// labeled block per input file, in the given order.
///
/// All-or-nothing: if any file cannot be read, no partial prompt is
/// returned.
///
/// # Errors
///
/// Returns [`Error::InputRead`] (exit code 21) if any file is missing,
/// unreadable, not valid UTF-8, or over the size cap.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(language: &str, input_files: &[String]) -> Result<String> {
    // {language} is a placeholder for string replacement, not a format argument
    let mut prompt = PROMPT_HEADER_TEMPLATE.replace("{language}", language);

    for path in input_files {
        let content = read_source_file(path)
            .map_err(|source| Error::InputRead { path: path.clone(), source })?;
        prompt.push_str(&format!("{path}:\n```\n{content}```\n"));
    }

    Ok(prompt)
}

fn read_source_file(path: &str) -> io::Result<String> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_INPUT_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::FileTooLarge,
            format!(
                "input size ({:.1} MB) exceeds maximum allowed size (1 MB)",
                metadata.len() as f64 / 1024.0 / 1024.0
            ),
        ));
    }

    fs::read_to_string(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_header_names_language_and_forbids_fences() {
        let prompt = build_prompt("Rust", &[]).unwrap();
        assert!(prompt.starts_with("Convert the following source code files to Rust."));
        assert!(prompt.contains("Do not use backticks"));
        assert!(prompt.contains("Do not include any sentences"));
    }

    #[test]
    fn test_file_blocks_preserve_input_order() {
        let dir = TempDir::new().unwrap();
        let first = write_file(&dir, "a.js", "console.log('a');\n");
        let second = write_file(&dir, "b.js", "console.log('b');\n");

        let prompt = build_prompt("Rust", &[first.clone(), second.clone()]).unwrap();

        let first_pos = prompt.find(&first).unwrap();
        let second_pos = prompt.find(&second).unwrap();
        assert!(first_pos < second_pos);

        // Reversed input order reverses the blocks
        let reversed = build_prompt("Rust", &[second.clone(), first.clone()]).unwrap();
        assert!(reversed.find(&second).unwrap() < reversed.find(&first).unwrap());
    }

    #[test]
    fn test_file_block_format() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.js", "let x = 1;\n");

        let prompt = build_prompt("Rust", &[path.clone()]).unwrap();
        assert!(prompt.contains(&format!("{path}:\n```\nlet x = 1;\n```\n")));
    }

    #[test]
    fn test_unreadable_file_is_input_read_error() {
        let err = build_prompt("Rust", &["/nonexistent/app.js".to_string()]).unwrap_err();

        let input_err = err.downcast_ref::<Error>().unwrap();
        assert_eq!(input_err.exit_code(), 21);
        assert!(err.to_string().contains("/nonexistent/app.js"));
    }

    #[test]
    fn test_no_partial_prompt_on_failure() {
        let dir = TempDir::new().unwrap();
        let readable = write_file(&dir, "a.js", "let x = 1;\n");

        let result = build_prompt("Rust", &[readable, "/nonexistent/b.js".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_file_is_input_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("huge.js");
        let mut file = fs::File::create(&path).unwrap();
        // One byte over the cap
        file.write_all(&vec![b'x'; (MAX_INPUT_SIZE + 1) as usize])
            .unwrap();

        let err = build_prompt("Rust", &[path.to_str().unwrap().to_string()]).unwrap_err();
        assert_eq!(err.downcast_ref::<Error>().unwrap().exit_code(), 21);
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_non_utf8_file_is_input_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.js");
        fs::write(&path, [0xFF, 0xFE, 0x00, 0x01]).unwrap();

        let err = build_prompt("Rust", &[path.to_str().unwrap().to_string()]).unwrap_err();
        assert_eq!(err.downcast_ref::<Error>().unwrap().exit_code(), 21);
    }
}
