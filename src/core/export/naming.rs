//! Archive path rule
//!
//! Pure functions mapping an organization and a fetched document onto the
//! entry path `{organization}/{stem}_{document id}{extension}`. Embedding the
//! document id keeps paths unique within an organization even when filenames
//! repeat.

use crate::domain::{DocumentId, Organization, OrganizationId};

/// Filename used when a fetched filename has no usable final component
const FALLBACK_FILENAME: &str = "document";

/// Reduces an organization name to a safe path prefix
///
/// Keeps alphanumeric characters, spaces, hyphens and underscores, then trims
/// surrounding whitespace. A name with nothing left falls back to the
/// organization id.
///
/// # Examples
///
/// ```
/// use casefile::core::export::naming::sanitize_organization_name;
/// use casefile::domain::OrganizationId;
///
/// assert_eq!(sanitize_organization_name("Gamma/Inc", OrganizationId::new(3)), "GammaInc");
/// assert_eq!(sanitize_organization_name("///", OrganizationId::new(7)), "7");
/// ```
pub fn sanitize_organization_name(name: &str, id: OrganizationId) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    let trimmed = kept.trim();
    if trimmed.is_empty() {
        id.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Splits a filename into stem and extension
///
/// The last `.` starts the extension unless every character before it is a
/// dot, so `.env` has no extension while `archive.tar.gz` yields `.gz`.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].chars().any(|c| c != '.') => {
            (&filename[..idx], &filename[idx..])
        }
        _ => (filename, ""),
    }
}

/// Final path component of a filename, accepting both separator styles
fn base_name(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

/// Builds the entry filename `{stem}_{document id}{extension}`
///
/// Directory components in the fetched filename are dropped so an entry can
/// never leave its organization prefix.
pub fn entry_filename(filename: &str, document_id: DocumentId) -> String {
    let base = match base_name(filename.trim()) {
        "" => FALLBACK_FILENAME,
        name => name,
    };
    let (stem, extension) = split_extension(base);
    format!("{stem}_{document_id}{extension}")
}

/// Builds the full archive path for one document
pub fn entry_path(organization: &Organization, document_id: DocumentId, filename: &str) -> String {
    format!(
        "{}/{}",
        sanitize_organization_name(&organization.name, organization.id),
        entry_filename(filename, document_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Acme Corp", "Acme Corp" ; "plain name")]
    #[test_case("Gamma/Inc", "GammaInc" ; "slash removed")]
    #[test_case("  Delta & Sons  ", "Delta  Sons" ; "ampersand removed and trimmed")]
    #[test_case("Epsilon_Co-op", "Epsilon_Co-op" ; "hyphen and underscore kept")]
    #[test_case("Société Générale", "Société Générale" ; "unicode letters kept")]
    #[test_case("../../etc", "etc" ; "traversal stripped")]
    fn test_sanitize_organization_name(name: &str, expected: &str) {
        assert_eq!(
            sanitize_organization_name(name, OrganizationId::new(1)),
            expected
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace only")]
    #[test_case("!!!" ; "punctuation only")]
    fn test_sanitize_falls_back_to_id(name: &str) {
        assert_eq!(sanitize_organization_name(name, OrganizationId::new(42)), "42");
    }

    #[test_case("contract.pdf", "contract", ".pdf" ; "simple")]
    #[test_case("archive.tar.gz", "archive.tar", ".gz" ; "last dot wins")]
    #[test_case("README", "README", "" ; "no extension")]
    #[test_case(".env", ".env", "" ; "dotfile")]
    #[test_case("..hidden", "..hidden", "" ; "leading dots only")]
    #[test_case("trailing.", "trailing", "." ; "trailing dot")]
    fn test_split_extension(filename: &str, stem: &str, extension: &str) {
        assert_eq!(split_extension(filename), (stem, extension));
    }

    #[test_case("contract.pdf", 10, "contract_10.pdf" ; "with extension")]
    #[test_case("README", 11, "README_11" ; "without extension")]
    #[test_case(".env", 12, ".env_12" ; "dotfile")]
    #[test_case("", 13, "document_13" ; "empty filename")]
    #[test_case("../../secret.txt", 14, "secret_14.txt" ; "unix traversal")]
    #[test_case("C:\\scans\\deed.tiff", 15, "deed_15.tiff" ; "windows path")]
    #[test_case("folder/", 16, "document_16" ; "directory only")]
    fn test_entry_filename(filename: &str, id: i64, expected: &str) {
        assert_eq!(entry_filename(filename, DocumentId::new(id)), expected);
    }

    #[test]
    fn test_entry_path_sanitizes_organization() {
        let org = Organization::new(3, "Gamma/Inc");
        assert_eq!(
            entry_path(&org, DocumentId::new(20), "notes.txt"),
            "GammaInc/notes_20.txt"
        );
    }

    #[test]
    fn test_entry_path_unique_for_repeated_filenames() {
        let org = Organization::new(4, "Delta");
        let first = entry_path(&org, DocumentId::new(40), "report.pdf");
        let second = entry_path(&org, DocumentId::new(41), "report.pdf");

        assert_eq!(first, "Delta/report_40.pdf");
        assert_eq!(second, "Delta/report_41.pdf");
        assert_ne!(first, second);
    }
}
