//! Scheme matrix and reference-engine properties for base64 decoding.

use argconv_base64::{Base64Error, Encoding};
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use proptest::prelude::*;

const SCHEMES: [Encoding; 3] = [Encoding::Basic, Encoding::Url, Encoding::Mime];

// ---------------------------------------------------------------------------
// Supported values
// ---------------------------------------------------------------------------

#[test]
fn common_values_for_every_scheme() {
    let cases: [(&str, Vec<u8>); 6] = [
        ("", vec![]),
        ("AA", vec![0]),
        ("AA==", vec![0]),
        ("AAA", vec![0; 2]),
        ("AAA=", vec![0; 2]),
        ("AAAA", vec![0; 3]),
    ];
    for encoding in SCHEMES {
        for (input, expected) in &cases {
            assert_eq!(&encoding.decode(input).unwrap(), expected, "{encoding} {input:?}");
            assert_eq!(
                &encoding.decode_bytes(input.as_bytes()).unwrap(),
                expected,
                "{encoding} bytes {input:?}"
            );
        }
    }
}

#[test]
fn scheme_specific_values() {
    let long = "A".repeat(78) + "==";
    let cases = [
        (Encoding::Basic, "Pz8/".to_string(), vec![63, 63, 63]),
        (Encoding::Basic, long.clone(), vec![0; 58]),
        (Encoding::Url, "Pz8_".to_string(), vec![63, 63, 63]),
        (Encoding::Url, long, vec![0; 58]),
        (Encoding::Mime, "Pz\r\n8/".to_string(), vec![63, 63, 63]),
        (
            Encoding::Mime,
            "A".repeat(76) + "\r\nAA==",
            vec![0; 58],
        ),
    ];
    for (encoding, input, expected) in cases {
        assert_eq!(encoding.decode(&input).unwrap(), expected, "{encoding} {input:?}");
    }
}

// ---------------------------------------------------------------------------
// Unsupported values
// ---------------------------------------------------------------------------

#[test]
fn unsupported_values_for_basic() {
    let cases = [
        (" ", Base64Error::TooShort),
        ("A", Base64Error::TooShort),
        ("  ", Base64Error::IllegalCharacter(0x20)),
        ("A=", Base64Error::LastUnit),
    ];
    for (input, expected) in cases {
        assert_eq!(Encoding::Basic.decode(input), Err(expected), "{input:?}");
    }
}

#[test]
fn line_breaks_are_only_tolerated_by_mime() {
    let input = "Pz\r\n8/";
    assert_eq!(
        Encoding::Basic.decode(input),
        Err(Base64Error::IllegalCharacter(b'\r'))
    );
    assert_eq!(
        Encoding::Url.decode(input),
        Err(Base64Error::IllegalCharacter(b'\r'))
    );
}

// ---------------------------------------------------------------------------
// Reference-engine properties
// ---------------------------------------------------------------------------

fn wrap_lines(text: &str, width: usize) -> String {
    text.as_bytes()
        .chunks(width)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\r\n")
}

proptest! {
    #[test]
    fn prop_basic_matches_reference(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(Encoding::Basic.decode(&STANDARD.encode(&bytes)).unwrap(), bytes.clone());
        prop_assert_eq!(Encoding::Basic.decode(&STANDARD_NO_PAD.encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn prop_url_matches_reference(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(Encoding::Url.decode(&URL_SAFE.encode(&bytes)).unwrap(), bytes.clone());
        prop_assert_eq!(Encoding::Url.decode(&URL_SAFE_NO_PAD.encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn prop_mime_matches_reference_with_line_breaks(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        units in 1usize..=19,
    ) {
        // Line length is a whole number of 4-symbol units, as MIME encoders emit.
        let wrapped = wrap_lines(&STANDARD.encode(&bytes), units * 4);
        prop_assert_eq!(Encoding::Mime.decode(&wrapped).unwrap(), bytes);
    }
}
