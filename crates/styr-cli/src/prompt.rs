use std::io::{BufRead, Write};
use std::path::PathBuf;

use styr_registry::DirectoryPicker;

/// Terminal stand-in for a folder dialog: asks for one line of input.
///
/// An empty line, EOF or a read error counts as cancelling.
pub struct PromptPicker<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<R: BufRead, W: Write> DirectoryPicker for PromptPicker<R, W> {
    fn pick(&mut self) -> Option<PathBuf> {
        let _ = write!(self.prompt, "Select directory (leave empty to cancel): ");
        let _ = self.prompt.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                }
            }
            Err(e) => {
                tracing::warn!("Failed to read directory from stdin: {}", e);
                None
            }
        }
    }
}
