use std::path::Path;

use eyre::{Result, WrapErr};
use tracing::debug;

/// Write `content` to `path`, replacing whatever was there.
///
/// Missing parent directories are created.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("gen").join("table.h");

        write_file(&path, "#pragma once\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "#pragma once\n");
    }

    #[test]
    fn test_write_file_truncates_longer_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.c");

        write_file(&path, "a much longer first version\n").unwrap();
        write_file(&path, "short\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_write_file_under_a_regular_file_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_file(&blocker.join("main.c"), "x").unwrap_err();
        assert!(err.to_string().starts_with("failed to create directory"));
    }
}
