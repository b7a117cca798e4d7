//! Sentinel masking for non-boundary punctuation
//!
//! A masked character is shifted into Supplementary Private Use Area-A
//! (`U+F0000 + code point`). Any BMP character can be masked this way and
//! restored exactly, so the rule catalog never needs a per-character
//! lookup table. Input characters that already live in the reserved range
//! are stripped before resolution.

use std::borrow::Cow;

/// First code point of the reserved sentinel range
pub const SENTINEL_BASE: u32 = 0xF0000;

/// Last code point of the reserved sentinel range
pub const SENTINEL_MAX: u32 = 0xFFFFD;

/// Highest code point that can be masked (BMP minus the noncharacters)
const MASKABLE_MAX: u32 = 0xFFFD;

/// Mask a character so the boundary scanner no longer sees it.
///
/// Returns `None` for characters outside the BMP, which cannot be shifted
/// into the reserved range.
#[inline]
pub fn mask(ch: char) -> Option<char> {
    let cp = ch as u32;
    if cp > MASKABLE_MAX {
        return None;
    }
    char::from_u32(SENTINEL_BASE + cp)
}

/// Whether a character is a sentinel produced by [`mask`]
#[inline]
pub fn is_sentinel(ch: char) -> bool {
    (SENTINEL_BASE..=SENTINEL_MAX).contains(&(ch as u32))
}

/// Original character behind a sentinel, or the character itself
#[inline]
pub fn unmask(ch: char) -> char {
    if is_sentinel(ch) {
        char::from_u32(ch as u32 - SENTINEL_BASE).unwrap_or(ch)
    } else {
        ch
    }
}

/// Whether `ch` is `target` either plainly or masked
#[inline]
pub fn is_masked(ch: char, target: char) -> bool {
    mask(target) == Some(ch)
}

/// Restore every sentinel in `text` to its original character
pub fn restore(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_sentinel) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(unmask).collect())
}

/// Remove characters from the reserved range so they cannot be confused
/// with sentinels
pub fn strip_reserved(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_sentinel) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|&c| !is_sentinel(c)).collect())
}
