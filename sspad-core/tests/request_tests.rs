#![allow(missing_docs)]
use sspad_core::random::{EntropySource, SecureRandomInt};
use sspad_core::request::{
    self, MAX_PADS, MIN_PADS, PadRequest, PadSetNumber, letters_for, pad_colour,
    secrets_from_json, validate_letters,
};
use sspad_core::{EntropyError, PadError, PadLetter, PadSetGenerator, SecretInput};
use std::collections::VecDeque;

struct Scripted(VecDeque<u16>);

impl EntropySource for Scripted {
    fn next_u16(&mut self) -> Result<u16, EntropyError> {
        self.0
            .pop_front()
            .ok_or_else(|| EntropyError("script exhausted".to_string()))
    }
}

#[test]
fn test_letters_for_pad_count() {
    let letters = letters_for(4).unwrap();
    assert_eq!(letters, vec![PadLetter('A'), PadLetter('B'), PadLetter('C'), PadLetter('D')]);
    assert_eq!(letters_for(MAX_PADS).unwrap().last(), Some(&PadLetter('Z')));
}

#[test]
fn test_pad_count_bounds() {
    for count in [0, 1, MAX_PADS + 1] {
        match letters_for(count) {
            Err(PadError::PadCount { count: c, min, max }) => {
                assert_eq!(c, count);
                assert_eq!(min, MIN_PADS);
                assert_eq!(max, MAX_PADS);
            }
            other => panic!("expected PadCount for {count}, got {other:?}"),
        }
    }
}

#[test]
fn test_duplicate_letters_rejected() {
    let letters = [PadLetter('A'), PadLetter('B'), PadLetter('A')];
    assert!(matches!(
        validate_letters(&letters),
        Err(PadError::DuplicateLetter('A'))
    ));
    assert!(validate_letters(&[PadLetter('X'), PadLetter('Y')]).is_ok());
}

#[test]
fn test_pad_colours_spread_over_hue() {
    assert_eq!(pad_colour(0, 3), "hsl(0, 100%, 40%)");
    assert_eq!(pad_colour(1, 3), "hsl(120, 100%, 40%)");
    assert_eq!(pad_colour(2, 3), "hsl(240, 100%, 40%)");
    // 360 / 7 = 51.43 rounds down, 3 * 360 / 7 = 154.29, 4 * 360 / 7 = 205.71 rounds up.
    assert_eq!(pad_colour(1, 7), "hsl(51, 100%, 40%)");
    assert_eq!(pad_colour(4, 7), "hsl(206, 100%, 40%)");
}

#[test]
fn test_pad_set_number_is_six_digits() {
    let mut rng = SecureRandomInt::new(Scripted(VecDeque::from([12, 345])));
    let number = PadSetNumber::draw(&mut rng).unwrap();
    assert_eq!(number.value(), 12_345);
    assert_eq!(number.to_string(), "012345");

    let mut rng = SecureRandomInt::os();
    for _ in 0..100 {
        let number = PadSetNumber::draw(&mut rng).unwrap();
        assert!(number.value() <= PadSetNumber::MAX);
        assert_eq!(number.to_string().len(), 6);
    }
}

#[test]
fn test_unencodable_secret_rejected_before_generation() {
    let request = PadRequest::new(
        "",
        3,
        vec![
            SecretInput::new("fine", "", "abc", true),
            SecretInput::new("emoji", "", "pin \u{1f511}", true),
        ],
    );
    // Validation fails before any entropy is drawn.
    let mut generator = PadSetGenerator::new(Scripted(VecDeque::new()));
    match request.build_with(&mut generator) {
        Err(PadError::InvalidCharacter {
            secret_index,
            char_index,
            code,
        }) => {
            assert_eq!(secret_index, 1);
            assert_eq!(char_index, 4);
            assert_eq!(code, 0x1f511);
        }
        other => panic!("expected InvalidCharacter, got {other:?}"),
    }
}

#[test]
fn test_overlong_secret_rejected() {
    let secrets = vec![SecretInput::new("big", "", "x".repeat(70_000), false)];
    assert!(matches!(
        request::validate_secrets(&secrets),
        Err(PadError::SecretTooLong {
            secret_index: 0,
            length: 70_000,
            ..
        })
    ));
}

#[test]
fn test_bundle_carries_print_metadata() {
    let request = PadRequest::new(
        "Keep one pad at home",
        3,
        vec![SecretInput::new("Wifi", "Home network", "hunter2", true)],
    );
    let bundle = request.build().unwrap();

    assert_eq!(bundle.description, "Keep one pad at home");
    assert_eq!(bundle.pad_set.len(), 3);
    assert_eq!(bundle.colours.len(), 3);
    assert_eq!(bundle.colour(PadLetter('B')), Some("hsl(120, 100%, 40%)"));
    assert_eq!(
        bundle.title(),
        format!("Secret Sharing Pads {}{{A,B,C}}", bundle.pad_set_number)
    );
}

#[test]
fn test_bundle_serializes_to_json() {
    let request = PadRequest::new("", 2, vec![SecretInput::new("n", "d", "x", false)]);
    let bundle = request.build().unwrap();
    let json: serde_json::Value = serde_json::to_value(&bundle).unwrap();

    assert_eq!(json["pad_set"][0]["letter"], "A");
    assert_eq!(json["pad_set"][0]["entries"][0]["name"], "n");
    assert_eq!(json["pad_set"][0]["entries"][0]["shares"][0]["partner"], "B");
    assert_eq!(json["colours"][1]["letter"], "B");
    assert!(json["pad_set_number"].is_u64());
}

#[test]
fn test_secrets_from_json() {
    let secrets = secrets_from_json(
        r#"[
            {"name": "Bank PIN", "description": "Card ending 1234", "plaintext": "8842"},
            {"name": "Router", "secret": "admin pass", "obscure_length": false},
            {"name": "Legacy", "secret": "x", "obscureLength": false}
        ]"#,
    )
    .unwrap();

    assert_eq!(secrets.len(), 3);
    assert_eq!(secrets[0].plaintext, "8842");
    assert!(secrets[0].obscure_length);
    assert_eq!(secrets[1].description, "");
    assert_eq!(secrets[1].plaintext, "admin pass");
    assert!(!secrets[1].obscure_length);
    assert!(!secrets[2].obscure_length);
}

#[test]
fn test_secrets_from_json_rejects_garbage() {
    assert!(matches!(
        secrets_from_json("{\"name\": 1}"),
        Err(PadError::SecretsFile(_))
    ));
}

#[test]
fn test_secret_debug_hides_plaintext() {
    let secret = SecretInput::new("name", "desc", "TOP-SECRET", true);
    let debug = format!("{secret:?}");
    assert!(debug.contains("name"));
    assert!(!debug.contains("TOP-SECRET"));
}
