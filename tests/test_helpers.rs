use chrono::{TimeZone, Utc};
use repool::helpers::{
    UNAMBIGUOUS_ALPHA, UNAMBIGUOUS_ALPHANUM, UNAMBIGUOUS_ASCII, UNAMBIGUOUS_DIGITS,
    UNAMBIGUOUS_LOWER, UNAMBIGUOUS_SYMBOLS, UNAMBIGUOUS_UPPER, random_unambiguous_string,
    utc_stamp, utc_stamp_at,
};

fn assert_drawn_from(alphabet: &str) {
    let result = random_unambiguous_string(300, alphabet);
    assert_eq!(result.chars().count(), 300);
    for ch in result.chars() {
        assert!(alphabet.contains(ch), "{ch:?} not in {alphabet:?}");
    }
}

#[test]
fn random_strings_stay_inside_their_alphabet() {
    assert_drawn_from(UNAMBIGUOUS_LOWER);
    assert_drawn_from(UNAMBIGUOUS_UPPER);
    assert_drawn_from(UNAMBIGUOUS_DIGITS);
    assert_drawn_from(UNAMBIGUOUS_SYMBOLS);
    assert_drawn_from(UNAMBIGUOUS_ALPHA);
    assert_drawn_from(UNAMBIGUOUS_ALPHANUM);
    assert_drawn_from(UNAMBIGUOUS_ASCII);
}

#[test]
fn ambiguous_characters_never_appear() {
    let result = random_unambiguous_string(2000, UNAMBIGUOUS_ASCII);
    for ambiguous in ['l', 'I', 'O', '1', '0'] {
        assert!(!result.contains(ambiguous), "found ambiguous {ambiguous:?}");
    }
}

#[test]
fn zero_length_string_is_empty() {
    assert_eq!(random_unambiguous_string(0, UNAMBIGUOUS_LOWER), "");
}

#[test]
fn utc_stamp_has_the_compact_shape() {
    let stamp = utc_stamp();
    assert_eq!(stamp.len(), 16);
    assert_eq!(stamp.as_bytes()[8], b'T');
    assert!(stamp.ends_with('Z'));
}

#[test]
fn utc_stamp_formats_an_explicit_instant() {
    let when = Utc.with_ymd_and_hms(2076, 7, 4, 5, 0, 0).unwrap();
    assert_eq!(utc_stamp_at(when), "20760704T050000Z");
}
