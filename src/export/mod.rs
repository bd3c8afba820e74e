mod sink;
mod summary;

pub use sink::{ExportSink, FileExportSink};
pub use summary::build_export_summary;

/// UTF-8 byte-order mark written ahead of exported text, so editors pick
/// the right encoding for non-ASCII player names.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Encode `text` as UTF-8 prefixed with [`UTF8_BOM`].
pub fn encode_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(text.as_bytes());
    bytes
}

/// Suggested file name for a match log exported on `date_label`.
///
/// Path separators, colons and whitespace in the label become `-`.
pub fn export_filename(date_label: &str) -> String {
    let date: String = date_label
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_whitespace() => '-',
            c => c,
        })
        .collect();
    format!("dziennik_meczu_{date}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_with_bom_keeps_polish_characters() {
        let bytes = encode_with_bom("Gol: Łukasz Ż.");
        assert_eq!(&bytes[..3], UTF8_BOM);
        assert_eq!(std::str::from_utf8(&bytes[3..]).unwrap(), "Gol: Łukasz Ż.");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("01.01.2025"), "dziennik_meczu_01.01.2025.txt");
        assert_eq!(
            export_filename("2025/01/01 18:30"),
            "dziennik_meczu_2025-01-01-18-30.txt"
        );
    }
}
