//! Filename derivation from payload text

/// Base name used when nothing usable survives sanitizing
pub const FALLBACK_FILE_NAME: &str = "qrcode";

/// Map arbitrary text to a lowercase, filesystem-safe base name.
///
/// Every character outside ASCII `[A-Za-z0-9]` becomes `_`. When no ASCII
/// alphanumeric survives, [`FALLBACK_FILE_NAME`] is returned instead. The
/// mapping is not unique: distinct payloads may share a name.
pub fn sanitize_file_name(input: &str) -> String {
    let name: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if name.bytes().any(|b| b.is_ascii_alphanumeric()) {
        name
    } else {
        FALLBACK_FILE_NAME.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_safe(name: &str) -> bool {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    }

    #[test]
    fn test_punctuation_and_case() {
        assert_eq!(sanitize_file_name("Hello, World!"), "hello__world_");
        assert_eq!(sanitize_file_name("https://Example.com/a?b=1"), "https___example_com_a_b_1");
    }

    #[test]
    fn test_fallback_when_nothing_survives() {
        assert_eq!(sanitize_file_name(""), "qrcode");
        assert_eq!(sanitize_file_name("日本語"), "qrcode");
        assert_eq!(sanitize_file_name("!!! ???"), "qrcode");
    }

    #[test]
    fn test_non_ascii_letters_are_replaced() {
        assert_eq!(sanitize_file_name("Café 2"), "caf__2");
    }

    #[test]
    fn test_output_charset_and_idempotence() {
        let inputs = [
            "Hello, World!",
            "日本語",
            "  spaced  out  ",
            "MiXeD-123_abc",
            "emoji 🚀 rocket",
            "___",
            "\t\n",
        ];
        for input in inputs {
            let once = sanitize_file_name(input);
            assert!(is_safe(&once), "unsafe output {once:?} for {input:?}");
            assert_eq!(sanitize_file_name(&once), once, "not idempotent for {input:?}");
            assert_eq!(sanitize_file_name(input), once, "not deterministic for {input:?}");
        }
    }
}
