#![allow(missing_docs)]
use sspad_core::CodecError;
use sspad_core::codec::{self, MODULUS};
use sspad_core::random::SecureRandomInt;
use std::collections::HashSet;

#[test]
fn test_encode_char_produces_valid_pairs() {
    let mut rng = SecureRandomInt::os();
    for c in [' ', 'a', '~', '\0'] {
        let mut all_a = HashSet::new();
        let mut all_b = HashSet::new();

        for _ in 0..100 {
            let (a, b) = codec::encode_char(&mut rng, c).unwrap();
            assert!(a < MODULUS);
            assert!(b < MODULUS);
            assert_eq!(u32::from(codec::decode_char(a, b)), u32::from(c));
            all_a.insert(a);
            all_b.insert(b);
        }

        // The same character must not keep producing the same codes.
        assert!(all_a.len() > 5);
        assert!(all_b.len() > 5);
    }
}

#[test]
fn test_every_encodable_character_round_trips() {
    let mut rng = SecureRandomInt::os();
    let encodable = std::iter::once('\0').chain(' '..='~');
    for c in encodable {
        for _ in 0..20 {
            let (a, b) = codec::encode_char(&mut rng, c).unwrap();
            assert_eq!(codec::decode_char(a, b), c as u16);
        }
    }
}

#[test]
fn test_encode_char_rejects_unprintable_characters() {
    let mut rng = SecureRandomInt::os();
    for c in ['\x1F', '\x7F', '\u{80}', '\u{1234}', '\n'] {
        match codec::encode_char(&mut rng, c) {
            Err(CodecError::InvalidCharacter { position, code }) => {
                assert_eq!(position, 0);
                assert_eq!(code, u32::from(c));
            }
            other => panic!("expected InvalidCharacter for {c:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_decode_char_wraps_modulo_thousand() {
    assert_eq!(codec::decode_char(999, 999), 998);
    assert_eq!(codec::decode_char(500, 500), 0);
    assert_eq!(codec::decode_char(0, 65), 65);
}

#[test]
fn test_encode_string_splits_each_position() {
    let mut rng = SecureRandomInt::os();
    let (codes_a, codes_b) = codec::encode_string(&mut rng, "Hello, world!").unwrap();
    assert_eq!(codes_a.len(), 13);
    assert_eq!(codes_b.len(), 13);

    let decoded: String = codes_a
        .iter()
        .zip(&codes_b)
        .map(|(&a, &b)| char::from(codec::decode_char(a, b) as u8))
        .collect();
    assert_eq!(decoded, "Hello, world!");
}

#[test]
fn test_encode_string_reports_failing_position() {
    let mut rng = SecureRandomInt::os();
    let err = codec::encode_string(&mut rng, "ab\u{e9}c").unwrap_err();
    assert!(matches!(
        err,
        CodecError::InvalidCharacter {
            position: 2,
            code: 0xe9
        }
    ));
}

#[test]
fn test_encode_string_empty() {
    let mut rng = SecureRandomInt::os();
    let (codes_a, codes_b) = codec::encode_string(&mut rng, "").unwrap();
    assert!(codes_a.is_empty());
    assert!(codes_b.is_empty());
}

#[test]
fn test_first_invalid() {
    assert_eq!(codec::first_invalid("plain ASCII ~"), None);
    assert_eq!(codec::first_invalid("tab\there"), Some((3, 9)));
    assert!(codec::is_encodable('\0'));
    assert!(!codec::is_encodable('\u{7f}'));
}
