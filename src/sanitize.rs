//! Filesystem-safe name handling

use crate::constants::FILENAME_STEM_MAX;

/// Characters rejected by at least one of Windows/macOS/Linux filenames.
const ILLEGAL: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Strips characters that are invalid in filenames. Pure and total; never
/// fails, never errors on odd input.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| !ILLEGAL.contains(c)).collect()
}

/// Sanitizes and caps the result at [FILENAME_STEM_MAX] characters so the
/// final path stays well under platform limits.
pub fn filename_stem(input: &str) -> String {
    sanitize(input).chars().take(FILENAME_STEM_MAX).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_illegal_characters() {
        let out = sanitize(r#"neon\ci/ty*scape?fi:le"na<m>e|"#);
        assert_eq!(out, "neoncityscapefilename");
        for c in ILLEGAL {
            assert!(!out.contains(c), "output still contains {:?}", c);
        }
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let input = r#"Skyline: "after dark" <v2>?"#;
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_sanitize_passes_clean_input_through() {
        assert_eq!(sanitize("Neon Harbor at Dusk"), "Neon Harbor at Dusk");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_filename_stem_caps_length() {
        let long = "a".repeat(200);
        assert_eq!(filename_stem(&long).chars().count(), FILENAME_STEM_MAX);
        assert_eq!(filename_stem("short"), "short");
    }

    #[test]
    fn test_filename_stem_counts_characters_not_bytes() {
        let long = "ü".repeat(80);
        let stem = filename_stem(&long);
        assert_eq!(stem.chars().count(), FILENAME_STEM_MAX);
        assert!(stem.chars().all(|c| c == 'ü'));
    }
}
