//! Small standalone utilities: human-readable random strings and compact
//! UTC timestamps.

use chrono::{DateTime, Utc};
use rand::Rng;

// The alphabets omit "lIO10" (lowercase ell, uppercase eye and oh, digits
// one and zero) so generated strings stay unambiguous to human readers.

/// Lowercase ASCII letters, minus the ambiguous `l`.
pub const UNAMBIGUOUS_LOWER: &str = "qwertyuiopasdfghjkzxcvbnm";

/// Uppercase ASCII letters, minus the ambiguous `I` and `O`.
pub const UNAMBIGUOUS_UPPER: &str = "QWERTYUPASDFGHJKLZXCVBNM";

/// ASCII digits, minus the ambiguous `1` and `0`.
pub const UNAMBIGUOUS_DIGITS: &str = "23456789";

/// Printable ASCII punctuation.
pub const UNAMBIGUOUS_SYMBOLS: &str = "~!@#$%^&*()_-+=[]{};:<>,.?/";

/// Unambiguous letters of both cases.
pub const UNAMBIGUOUS_ALPHA: &str =
    concat!("qwertyuiopasdfghjkzxcvbnm", "QWERTYUPASDFGHJKLZXCVBNM");

/// Unambiguous letters and digits.
pub const UNAMBIGUOUS_ALPHANUM: &str = concat!(
    "qwertyuiopasdfghjkzxcvbnm",
    "QWERTYUPASDFGHJKLZXCVBNM",
    "23456789"
);

/// Unambiguous letters, digits and punctuation.
pub const UNAMBIGUOUS_ASCII: &str = concat!(
    "qwertyuiopasdfghjkzxcvbnm",
    "QWERTYUPASDFGHJKLZXCVBNM",
    "23456789",
    "~!@#$%^&*()_-+=[]{};:<>,.?/"
);

/// Build a random string of `len` characters drawn uniformly from
/// `alphabet`.
///
/// # Panics
///
/// Panics if `alphabet` is empty.
///
/// # Example
///
/// ```rust
/// use repool::helpers::{UNAMBIGUOUS_ALPHANUM, random_unambiguous_string};
///
/// let token = random_unambiguous_string(12, UNAMBIGUOUS_ALPHANUM);
/// assert_eq!(token.chars().count(), 12);
/// assert!(token.chars().all(|ch| UNAMBIGUOUS_ALPHANUM.contains(ch)));
/// ```
pub fn random_unambiguous_string(len: usize, alphabet: &str) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    assert!(!chars.is_empty(), "alphabet must not be empty");
    let mut rng = rand::rng();
    (0..len).map(|_| chars[rng.random_range(0..chars.len())]).collect()
}

/// The current UTC time as a compact `YYYYMMDDTHHMMSSZ` stamp.
pub fn utc_stamp() -> String {
    utc_stamp_at(Utc::now())
}

/// Format an explicit instant as a compact `YYYYMMDDTHHMMSSZ` stamp.
///
/// The result is always 16 characters: an 8-digit date, a literal `T`, a
/// 6-digit time, and a trailing `Z`.
pub fn utc_stamp_at(when: DateTime<Utc>) -> String {
    when.format("%Y%m%dT%H%M%SZ").to_string()
}
