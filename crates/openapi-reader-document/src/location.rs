use openapi_reader_core::constants::DOCUMENT_FILE_CANDIDATES;
use openapi_reader_core::error::LoadError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the description document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Resolve a user-supplied location to a concrete document source.
///
/// URLs are used as-is. A directory is probed for `openapi.yaml`, then
/// `openapi.yml`. Any other existing path is used directly.
pub fn resolve_document_location(location: &str) -> Result<DocumentSource, LoadError> {
    if is_url(location) {
        return Ok(DocumentSource::Url(location.to_string()));
    }

    let path = Path::new(location);
    let metadata = std::fs::metadata(path).map_err(|_| LoadError::PathNotFound {
        path: location.to_string(),
    })?;

    if !metadata.is_dir() {
        return Ok(DocumentSource::File(path.to_path_buf()));
    }

    DOCUMENT_FILE_CANDIDATES
        .iter()
        .map(|name| path.join(name))
        .find(|candidate| candidate.is_file())
        .map(DocumentSource::File)
        .ok_or_else(|| LoadError::NoDocumentInDirectory {
            dir: location.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_pass_through_untouched() {
        let source = resolve_document_location("https://example.com/api/openapi.json").unwrap();
        assert_eq!(
            source,
            DocumentSource::Url("https://example.com/api/openapi.json".to_string())
        );
        assert!(is_url("http://localhost:8080/spec"));
        assert!(!is_url("ftp://example.com/spec"));
    }

    #[test]
    fn directory_prefers_yaml_over_yml() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("openapi.yml"), "openapi: 3.0.0").unwrap();
        std::fs::write(tmp.path().join("openapi.yaml"), "openapi: 3.0.0").unwrap();

        let source = resolve_document_location(&tmp.path().to_string_lossy()).unwrap();
        assert_eq!(source, DocumentSource::File(tmp.path().join("openapi.yaml")));
    }

    #[test]
    fn directory_falls_back_to_yml() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("openapi.yml"), "openapi: 3.0.0").unwrap();

        let source = resolve_document_location(&tmp.path().to_string_lossy()).unwrap();
        assert_eq!(source, DocumentSource::File(tmp.path().join("openapi.yml")));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = resolve_document_location(&tmp.path().to_string_lossy()).unwrap_err();
        assert!(matches!(err, LoadError::NoDocumentInDirectory { .. }));
    }

    #[test]
    fn direct_file_path_is_used_as_is() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("petstore.json");
        std::fs::write(&file, "{}").unwrap();

        let source = resolve_document_location(&file.to_string_lossy()).unwrap();
        assert_eq!(source, DocumentSource::File(file));
    }

    #[test]
    fn missing_path_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.yaml");
        let err = resolve_document_location(&missing.to_string_lossy()).unwrap_err();
        assert!(matches!(err, LoadError::PathNotFound { .. }));
    }
}
