//! File-name validation against the supported format list.
//!
//! Only the extension is checked. Contents are never inspected, so a renamed
//! file passes; that is a known limitation of an extension-only check.

use crate::config::SUPPORTED_FORMATS;
use crate::error::{ValidationError, ValidationResult};
use crate::types::FileHandle;

/// Lowercased text after the last `.`, if the name has a dot.
///
/// A bare name (`README`) has no extension; a trailing dot yields `""`.
pub fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Whether the file name has an allow-listed extension.
pub fn is_supported(name: &str) -> bool {
    extension(name)
        .map(|ext| SUPPORTED_FORMATS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Validate a file handle by name.
pub fn validate<F: FileHandle>(file: &F) -> ValidationResult<()> {
    if is_supported(file.name()) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFormat {
            name: file.name().to_string(),
        })
    }
}

/// `accept` attribute for the file picker (`.doc,.docx,...`).
pub fn accept_attribute() -> String {
    SUPPORTED_FORMATS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// Human-readable format list (`doc, docx, ...`).
pub fn formats_hint() -> String {
    SUPPORTED_FORMATS.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileMeta;

    #[test]
    fn test_accepts_every_format_in_any_case() {
        for ext in SUPPORTED_FORMATS {
            assert!(is_supported(&format!("file.{}", ext)), "{}", ext);
            assert!(is_supported(&format!("file.{}", ext.to_uppercase())), "{}", ext);
        }
        assert!(is_supported("Report.PdF"));
    }

    #[test]
    fn test_rejects_unknown_and_missing_extensions() {
        for name in ["README", "pdf", "archive.zip", "script.exe", "notes.", "", "a.pdf.exe"] {
            assert!(!is_supported(name), "{}", name);
        }
    }

    #[test]
    fn test_uses_last_extension() {
        assert!(is_supported("backup.exe.pdf"));
        assert_eq!(extension("a.tar.GZ").as_deref(), Some("gz"));
        assert_eq!(extension("noext"), None);
    }

    #[test]
    fn test_validate_names_offending_file() {
        let err = validate(&FileMeta::new("photo.gif", 10)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedFormat {
                name: "photo.gif".into()
            }
        );
        assert!(validate(&FileMeta::new("photo.JPEG", 10)).is_ok());
    }

    #[test]
    fn test_accept_attribute_matches_allow_list() {
        let accept = accept_attribute();
        assert!(accept.starts_with(".doc,.docx,"));
        assert_eq!(accept.split(',').count(), SUPPORTED_FORMATS.len());
        assert!(formats_hint().contains("pages, ppt"));
    }
}
