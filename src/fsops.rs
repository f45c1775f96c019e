use std::fs;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;

/// Ensure a directory exists, creating it recursively if needed.
///
/// Succeeds silently when the directory is already present. Fails when a
/// non-directory entry occupies the path; the entry is left untouched.
pub fn ensure_dir(path: &Utf8Path) -> Result<()> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        bail!("{} exists but is not a directory", path);
    }
    fs::create_dir_all(path.as_std_path())
        .with_context(|| format!("creating directory {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> Utf8PathBuf {
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("save-logo-test-{ts}"));
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }

    #[test]
    fn creates_missing_directories_recursively() {
        let root = unique_temp_dir();
        let target = root.join("web").join("assets").join("images");

        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
        // Only the directory itself; nothing is written into it.
        assert_eq!(fs::read_dir(target.as_std_path()).unwrap().count(), 0);

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn second_call_is_a_no_op() {
        let root = unique_temp_dir();
        let target = root.join("images");

        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn fails_when_a_file_occupies_the_path() {
        let root = unique_temp_dir();
        fs::create_dir_all(root.as_std_path()).unwrap();
        let target = root.join("images");
        fs::write(target.as_std_path(), b"occupied").unwrap();

        let err = ensure_dir(&target).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        assert_eq!(fs::read(target.as_std_path()).unwrap(), b"occupied");

        let _ = fs::remove_dir_all(root.as_std_path());
    }
}
