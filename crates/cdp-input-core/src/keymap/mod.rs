//! Key name → legacy Windows virtual key code resolution.
//!
//! The wire format carries both the symbolic key name and a numeric virtual
//! key code. Key names are resolved to codes here, at the dispatch boundary,
//! so the controller never stores numeric codes itself.
//!
//! # Resolution policy
//!
//! The policy is fixed by the wire contract and must not be reordered:
//!
//! 1. If the key name has a named entry in the table
//!    ([`legacy_vk::named_key_code`]), use its code.
//! 2. Otherwise, if the key name is exactly one UTF-16 code unit long, use
//!    the code unit of its uppercased character. This is how lowercase
//!    letters resolve: `"a"` is not in the table, but `'A'` is `65`.
//! 3. Otherwise the key is unresolvable and the code is `0`. The event is
//!    still dispatched with code 0 so the remote side can decide what to do
//!    with it.
//!
//! The one-code-unit check is deliberately UTF-16, not bytes or scalar
//! values: the remote protocol inherited JavaScript string semantics, where
//! `"é"` has length 1 but an astral-plane character has length 2.

pub mod legacy_vk;

/// Resolves a key name to its legacy Windows virtual key code.
///
/// Returns `0` for unresolvable keys (multi-character names with no table
/// entry). Never fails.
///
/// # Examples
///
/// ```rust
/// use cdp_input_core::keymap::virtual_key_for;
///
/// assert_eq!(virtual_key_for("Enter"), 13);
/// assert_eq!(virtual_key_for("a"), 65); // uppercased fallback
/// assert_eq!(virtual_key_for("NoSuchKey"), 0);
/// ```
pub fn virtual_key_for(key: &str) -> u16 {
    if let Some(code) = legacy_vk::named_key_code(key) {
        return code;
    }
    single_unit_code(key).unwrap_or(0)
}

/// Fallback for key names that are exactly one UTF-16 code unit: the code
/// unit of the uppercased character.
fn single_unit_code(key: &str) -> Option<u16> {
    let mut units = key.encode_utf16();
    let unit = units.next()?;
    if units.next().is_some() {
        return None;
    }
    // A lone UTF-16 unit from a valid &str is always a BMP scalar value.
    let ch = char::from_u32(u32::from(unit))?;
    // Uppercasing can expand to multiple characters (ß → SS); the wire code
    // is the first UTF-16 unit of the result, matching JS toUpperCase +
    // charCodeAt(0).
    let upper = ch.to_uppercase().next().unwrap_or(ch);
    let mut buf = [0u16; 2];
    Some(upper.encode_utf16(&mut buf)[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys_resolve_from_table() {
        // Arrange: a spread of named entries across the table
        let cases = [
            ("Enter", 13),
            ("Backspace", 8),
            ("Tab", 9),
            ("Shift", 16),
            ("Control", 17),
            ("Alt", 18),
            ("Meta", 91),
            ("Escape", 27),
            ("ArrowLeft", 37),
            ("ArrowUp", 38),
            ("ArrowRight", 39),
            ("ArrowDown", 40),
            ("F1", 112),
            ("F12", 123),
            ("F24", 135),
            ("NumLock", 144),
            ("ContextMenu", 93),
            ("AltGraph", 225),
            ("ZoomOut", 251),
        ];

        for (key, expected) in cases {
            // Act / Assert
            assert_eq!(virtual_key_for(key), expected, "{key} should be {expected}");
        }
    }

    #[test]
    fn test_lowercase_letters_resolve_via_uppercase_fallback() {
        assert_eq!(virtual_key_for("a"), 65);
        assert_eq!(virtual_key_for("z"), 90);
        // Uppercase letters take the same path.
        assert_eq!(virtual_key_for("A"), 65);
    }

    #[test]
    fn test_digits_resolve_via_fallback() {
        // Digits are not named entries; only their shifted punctuation is.
        assert_eq!(virtual_key_for("0"), 48);
        assert_eq!(virtual_key_for("9"), 57);
    }

    #[test]
    fn test_shifted_punctuation_uses_named_entries() {
        // '!' is a named entry mapping to the digit-1 code, not to '!' itself.
        assert_eq!(virtual_key_for("!"), 49);
        assert_eq!(virtual_key_for("("), 57);
        assert_eq!(virtual_key_for(")"), 48);
    }

    #[test]
    fn test_punctuation_aliases_share_codes() {
        // Unshifted and shifted variants of the same physical key share a code.
        assert_eq!(virtual_key_for(";"), 186);
        assert_eq!(virtual_key_for(":"), 186);
        assert_eq!(virtual_key_for("="), 187);
        assert_eq!(virtual_key_for("+"), 187);
        assert_eq!(virtual_key_for("/"), 191);
        assert_eq!(virtual_key_for("?"), 191);
        assert_eq!(virtual_key_for("'"), 222);
        assert_eq!(virtual_key_for("\""), 222);
        assert_eq!(virtual_key_for("\\"), 220);
        assert_eq!(virtual_key_for("|"), 220);
    }

    #[test]
    fn test_non_ascii_single_character_uses_uppercased_code_unit() {
        // 'é' uppercases to 'É' (U+00C9).
        assert_eq!(virtual_key_for("é"), 0x00C9);
        // 'ß' uppercases to "SS"; the code is the first unit, 'S'.
        assert_eq!(virtual_key_for("ß"), 83);
    }

    #[test]
    fn test_unknown_multi_character_names_resolve_to_zero() {
        assert_eq!(virtual_key_for("unknown-multi-char"), 0);
        assert_eq!(virtual_key_for("Spacebar"), 0);
        assert_eq!(virtual_key_for(""), 0);
    }

    #[test]
    fn test_astral_plane_character_is_not_a_single_unit() {
        // U+1F600 needs two UTF-16 units, so the fallback does not apply.
        assert_eq!(virtual_key_for("\u{1F600}"), 0);
    }

    #[test]
    fn test_space_character_resolves_but_space_name_does_not() {
        // The table has no "Space" entry; only the literal character resolves.
        assert_eq!(virtual_key_for(" "), 32);
        assert_eq!(virtual_key_for("Space"), 0);
    }

    #[test]
    fn test_named_entry_wins_over_single_character_fallback() {
        // '!' is one character AND a named entry; the table must win
        // (fallback would give '!' = 33, not the digit-1 code 49).
        assert_eq!(virtual_key_for("!"), 49);
    }
}
