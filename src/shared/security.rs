use crate::shared::error::ConfiguratorError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest catalog file accepted (20 MB)
pub const MAX_CATALOG_SIZE: u64 = 20 * 1024 * 1024;

/// Checks that `path` is an existing regular catalog file of sane size
///
/// Symbolic links are rejected; `symlink_metadata` inspects the link
/// itself rather than its target.
pub fn validate_catalog_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|_| ConfiguratorError::CatalogNotFound {
        path: path.to_path_buf(),
    })?;

    if metadata.is_symlink() {
        return Err(ConfiguratorError::SecurityError {
            path: path.to_path_buf(),
            reason: "Catalog path is a symbolic link".to_string(),
            hint: "Point --catalog at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ConfiguratorError::CatalogParseError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > MAX_CATALOG_SIZE {
        return Err(ConfiguratorError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Catalog is too large ({} bytes). Maximum allowed size is {} bytes",
                metadata.len(),
                MAX_CATALOG_SIZE
            ),
            hint: "Split the catalog or trim unused categories".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `path` can be written without following a symbolic link
pub fn validate_output_target(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(ConfiguratorError::CartWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(ConfiguratorError::SecurityError {
                path: path.to_path_buf(),
                reason: "Output path is a symbolic link".to_string(),
                hint: "Write to a regular file path instead".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_catalog_file_ok() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{}").unwrap();
        assert!(validate_catalog_file(&path).is_ok());
    }

    #[test]
    fn test_validate_catalog_file_missing() {
        let result = validate_catalog_file(&PathBuf::from("/nonexistent/catalog.json"));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Catalog file not found"));
    }

    #[test]
    fn test_validate_catalog_file_directory() {
        let dir = TempDir::new().unwrap();
        let err = validate_catalog_file(dir.path()).unwrap_err().to_string();
        assert!(err.contains("Not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_catalog_file_symlink() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.json");
        let link = dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_catalog_file(&link).unwrap_err().to_string();
        assert!(err.contains("Security violation"));
    }

    #[test]
    fn test_validate_output_target_new_file() {
        let dir = TempDir::new().unwrap();
        assert!(validate_output_target(&dir.path().join("cart.json")).is_ok());
    }

    #[test]
    fn test_validate_output_target_missing_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cart.json");
        let err = validate_output_target(&path).unwrap_err().to_string();
        assert!(err.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_output_target_symlink() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.json");
        let link = dir.path().join("cart.json");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(validate_output_target(&link).is_err());
    }
}
