use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path value that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read a whole pasted-text block from a file, or from stdin when the path is `-`.
pub fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        return Ok(text);
    }

    Ok(fs::read_to_string(path)?)
}

/// Like [`read_text`] but an absent path yields an empty block.
pub fn read_optional_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_text(path),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_text_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "2.44\t301.35")?;
        writeln!(temp_file, "2.61\t303.69")?;

        let text = read_text(temp_file.path())?;
        assert_eq!(text, "2.44\t301.35\n2.61\t303.69\n");

        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_text(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(crate::error::ProcessingError::Io(_))));
    }

    #[test]
    fn test_optional_text() -> Result<()> {
        assert_eq!(read_optional_text(None)?, "");
        Ok(())
    }
}
