use sass_variables_core::VariableMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Failed to serialize variables: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Renders the variables as an ES module exporting `sassVariables`.
pub fn render_module(variables: &VariableMap) -> Result<String, ArtifactError> {
    let json = serde_json::to_string(variables)?;
    Ok(format!(
        "/* eslint-disable */\n\
         /* jshint ignore:start */\n\
         // DON'T UPDATE THIS FILE MANUALLY, IT IS AUTO-GENERATED.\n\
         const sassVariables = JSON.parse(`{json}`);\n\
         \n\
         export default sassVariables;\n\
         /* jshint ignore:end */"
    ))
}

/// Writes `content` to `path` unless the file already holds exactly that.
///
/// Parent directories are created as needed.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome, ArtifactError> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(WriteOutcome::Unchanged);
    }

    let write_error = |source: std::io::Error| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)?;

    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sass_variables_core::extract;
    use tempfile::TempDir;

    #[test]
    fn test_render_module() {
        let variables = extract("$gutter-width: 16px;\n$sizes: (1, 2);");
        let module = render_module(&variables).unwrap();

        assert_eq!(
            module,
            "/* eslint-disable */\n\
             /* jshint ignore:start */\n\
             // DON'T UPDATE THIS FILE MANUALLY, IT IS AUTO-GENERATED.\n\
             const sassVariables = JSON.parse(`{\"gutter-width\":\"16px\",\"gutterWidth\":\"16px\",\"sizes\":[\"1\",\"2\"]}`);\n\
             \n\
             export default sassVariables;\n\
             /* jshint ignore:end */"
        );
    }

    #[test]
    fn test_render_empty_module() {
        let module = render_module(&VariableMap::new()).unwrap();
        assert!(module.contains("JSON.parse(`{}`)"));
        assert!(!module.ends_with('\n'));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app/utils/sass-variables.js");

        let outcome = write_if_changed(&path, "export default {};").unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export default {};");
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sass-variables.js");
        fs::write(&path, "same").unwrap();

        assert_eq!(write_if_changed(&path, "same").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(write_if_changed(&path, "different").unwrap(), WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "different");
    }

    #[test]
    fn test_write_error_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("sass-variables.js");

        let err = write_if_changed(&path, "x").unwrap_err();

        assert!(matches!(err, ArtifactError::Write { .. }));
        assert!(err.to_string().contains("not-a-dir"));
    }
}
