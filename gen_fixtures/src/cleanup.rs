use std::{io::ErrorKind, path::Path};

/// What happened to a directory we tried to get rid of.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Cleanup {
    Removed,
    Missing,
    Failed(ErrorKind),
}

/// Recursively removes `path` if it is there.
///
/// Never fails: the outcome is only reported back so callers can choose to
/// ignore it, which the generator does.
pub fn remove_stale_dir(path: &Path) -> Cleanup {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Cleanup::Removed,
        Err(e) if e.kind() == ErrorKind::NotFound => Cleanup::Missing,
        Err(e) => Cleanup::Failed(e.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_directory_with_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("k4,4");
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("nested/k4,4.tex"), "stale").unwrap();

        assert_eq!(remove_stale_dir(&dir), Cleanup::Removed);
        assert!(!dir.exists());
    }

    #[test]
    fn missing_directory_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(remove_stale_dir(&tmp.path().join("k7,7")), Cleanup::Missing);
    }
}
