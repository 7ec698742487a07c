use crate::error::OrganizeError;
use std::fs;
use std::io;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<(), OrganizeError> {
    if !path.exists() {
        return Err(OrganizeError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(OrganizeError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does_not_exist");

        let err = validate_directory_exists(&missing).unwrap_err();
        assert!(matches!(err, OrganizeError::PathNotFound(_)));
    }

    #[test]
    fn test_validate_file_is_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("file.mp4");
        fs::write(&file_path, "video").unwrap();

        let err = validate_directory_exists(&file_path).unwrap_err();
        assert!(matches!(err, OrganizeError::NotADirectory(_)));
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("Group_1");

        ensure_directory_exists(&target).unwrap();
        ensure_directory_exists(&target).unwrap();
        assert!(target.is_dir());
    }
}
