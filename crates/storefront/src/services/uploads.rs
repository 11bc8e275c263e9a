//! Design-file intake.
//!
//! Files never leave the customer's session: we hold local blob references
//! only, attached to cart lines. The extension allow-list and per-file size
//! cap are advisory - violations are logged and reported back, never fatal,
//! because print staff resolve unusable files over the messaging channel.

use serde::Deserialize;
use tracing::warn;

/// Accepted design-file extensions: common images, PDF, and the two
/// proprietary design formats (Adobe Illustrator, Photoshop).
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "pdf", "ai", "psd"];

/// Advisory per-file size cap (10 MB).
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// A user-supplied design file reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFile {
    /// Original file name, used for the extension check.
    pub name: String,
    /// Session-local blob reference.
    pub reference: String,
    /// Reported size in bytes, when the client knows it.
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

/// Whether a file name carries an allow-listed extension.
#[must_use]
pub fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, extension)| {
            !stem.is_empty() && ALLOWED_EXTENSIONS.contains(&extension.to_lowercase().as_str())
        })
}

/// Advisory warnings for a batch of design files.
///
/// Never rejects anything; callers attach all references regardless.
#[must_use]
pub fn advisory_warnings(files: &[DesignFile]) -> Vec<String> {
    let mut warnings = Vec::new();

    for file in files {
        if !has_allowed_extension(&file.name) {
            warnings.push(format!(
                "{}: unrecognized format (accepted: JPG, PNG, GIF, WEBP, PDF, AI, PSD)",
                file.name
            ));
        }
        if let Some(size) = file.size_bytes
            && size > MAX_FILE_BYTES
        {
            warnings.push(format!("{}: larger than the 10MB per-file limit", file.name));
        }
    }

    for warning in &warnings {
        warn!(warning = %warning, "design file advisory");
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size_bytes: Option<u64>) -> DesignFile {
        DesignFile {
            name: name.to_string(),
            reference: format!("blob:{name}"),
            size_bytes,
        }
    }

    #[test]
    fn test_allowed_extensions() {
        assert!(has_allowed_extension("logo.ai"));
        assert!(has_allowed_extension("artwork.PSD"));
        assert!(has_allowed_extension("photo.jpeg"));
        assert!(has_allowed_extension("proof.pdf"));
        assert!(!has_allowed_extension("design.svg"));
        assert!(!has_allowed_extension("archive.zip"));
        assert!(!has_allowed_extension("no-extension"));
        assert!(!has_allowed_extension(".hidden"));
    }

    #[test]
    fn test_warnings_are_advisory_only() {
        let files = vec![
            file("logo.ai", Some(1024)),
            file("huge.png", Some(MAX_FILE_BYTES + 1)),
            file("model.stl", Some(2048)),
        ];
        let warnings = advisory_warnings(&files);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("huge.png")));
        assert!(warnings.iter().any(|w| w.contains("model.stl")));
    }

    #[test]
    fn test_clean_batch_has_no_warnings() {
        let files = vec![file("front.pdf", Some(1024)), file("back.psd", None)];
        assert!(advisory_warnings(&files).is_empty());
    }
}
