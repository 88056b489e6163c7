//! JSON export of the contact directory.
//!
//! The file is a single JSON object keyed by contact name, in directory
//! order, each value holding `phones` and `emails` arrays:
//!
//! ```json
//! {
//!   "Alice": {
//!     "phones": ["+123"],
//!     "emails": ["a@b.co"]
//!   }
//! }
//! ```

use crate::error::{ExportError, ExportResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Serializes a slice of contacts as a name-keyed JSON object.
struct DirectoryView<'a>(&'a [Contact]);

impl Serialize for DirectoryView<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for contact in self.0 {
            map.serialize_entry(contact.name.as_str(), contact)?;
        }
        map.end()
    }
}

/// Render the whole directory as pretty-printed JSON with a trailing newline.
///
/// The output depends only on the directory contents, so exporting the same
/// state twice yields identical text.
pub fn to_json<R: ContactRepository + ?Sized>(repo: &R) -> ExportResult<String> {
    let mut json = serde_json::to_string_pretty(&DirectoryView(repo.contacts()))?;
    json.push('\n');
    Ok(json)
}

/// Write the directory to `path`.
///
/// The JSON is written to a uniquely named temporary file in the target's
/// directory which is then renamed over `path`, so the target is either
/// fully replaced or left untouched. Returns the number of contacts written.
pub fn export_to_file<R: ContactRepository + ?Sized>(
    repo: &R,
    path: impl AsRef<Path>,
) -> ExportResult<usize> {
    let path = path.as_ref();
    let io_error = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str().is_empty() {
        return Err(io_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "export path is empty",
        )));
    }

    let json = to_json(repo)?;
    let mut file = NamedTempFile::new_in(parent_dir(path)).map_err(io_error)?;
    debug!(path = %file.path().display(), bytes = json.len(), "Writing export to temporary file");

    file.write_all(json.as_bytes()).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    // On failure the returned handle is dropped, which removes the temporary file.
    file.persist(path).map_err(|e| io_error(e.error))?;

    info!(path = %path.display(), contacts = repo.len(), "Directory exported");
    Ok(repo.len())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactName, EmailAddress, PhoneNumber};
    use crate::repositories::Directory;
    use tempfile::tempdir;

    fn sample_directory() -> Directory {
        let mut directory = Directory::new();
        directory.add_phone(
            ContactName::new("Alice").unwrap(),
            PhoneNumber::new("+123").unwrap(),
        );
        directory.add_email(
            ContactName::new("Alice").unwrap(),
            EmailAddress::new("a@b.co").unwrap(),
        );
        directory
    }

    #[test]
    fn test_to_json_structure() {
        let json = to_json(&sample_directory()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"Alice": {"phones": ["+123"], "emails": ["a@b.co"]}})
        );
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_to_json_empty_directory() {
        let json = to_json(&Directory::new()).unwrap();
        assert_eq!(json, "{}\n");
    }

    #[test]
    fn test_to_json_keeps_directory_order() {
        let mut directory = Directory::new();
        for name in ["Zed", "Alice", "Mike"] {
            directory.add_phone(
                ContactName::new(name).unwrap(),
                PhoneNumber::new("+1").unwrap(),
            );
        }

        let json = to_json(&directory).unwrap();
        let zed = json.find("\"Zed\"").unwrap();
        let alice = json.find("\"Alice\"").unwrap();
        let mike = json.find("\"Mike\"").unwrap();
        assert!(zed < alice && alice < mike);
    }

    #[test]
    fn test_to_json_is_deterministic() {
        let directory = sample_directory();
        assert_eq!(to_json(&directory).unwrap(), to_json(&directory).unwrap());
    }

    #[test]
    fn test_parent_dir_of_bare_file_name() {
        assert_eq!(parent_dir(Path::new("book.json")), Path::new("."));
        assert_eq!(parent_dir(Path::new("out/book.json")), Path::new("out"));
    }

    #[test]
    fn test_export_leaves_unrelated_tmp_file_alone() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("book.json");
        let sibling = dir.path().join("book.json.tmp");
        std::fs::write(&sibling, "kept by the user").unwrap();

        export_to_file(&sample_directory(), &target).unwrap();

        assert_eq!(std::fs::read_to_string(&sibling).unwrap(), "kept by the user");
        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            to_json(&sample_directory()).unwrap()
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_export_rejects_empty_path() {
        let result = export_to_file(&sample_directory(), "");
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
