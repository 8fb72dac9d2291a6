//! Integration tests for hufftext

use hufftext::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bits(s: &str) -> BitSeq {
    s.chars().map(|c| c == '1').collect()
}

#[test]
fn test_full_lifecycle() {
    let mut codec = TextCodec::default();
    codec.train("it was the best of times, it was the worst of times");
    codec.train("it was the age of wisdom, it was the age of foolishness");
    codec.ensure_minimum_coverage();
    codec.build_tree().unwrap();

    let text = "wisdom of the ages";
    let encoded = codec.encode(text).unwrap();
    assert!(!encoded.is_empty());
    assert_eq!(codec.decode(&encoded).unwrap(), text);
}

#[test]
fn test_reference_scenario() {
    let mut codec = TextCodec::default();
    codec.train("aaaaabbc");
    codec.build_tree().unwrap();

    assert_eq!(codec.end_events(), 1);
    let mut freqs: Vec<(char, u64)> = codec.frequencies().collect();
    freqs.sort_unstable();
    assert_eq!(freqs, vec![('a', 5), ('b', 2), ('c', 1)]);

    let encoded = codec.encode("aabc").unwrap();
    assert_eq!(encoded.to_string(), "1100010011");
    assert_eq!(codec.decode(&encoded).unwrap(), "aabc");

    assert!(matches!(
        codec.encode("d"),
        Err(CodecError::UnmappedSymbol('d'))
    ));
    assert!(matches!(
        codec.decode(&bits("1100")),
        Err(CodecError::TruncatedData)
    ));
}

#[test]
fn test_random_roundtrip_over_trained_alphabet() {
    let alphabet: Vec<char> = "abcdefgh .,\n".chars().collect();
    let mut codec = TextCodec::default();
    codec.train(&alphabet.iter().collect::<String>());
    codec.train("a common enough sample, padded with the full alphabet above");
    codec.build_tree().unwrap();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..50 {
        let len = rng.gen_range(0..200);
        let text: String = (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();
        let encoded = codec.encode(&text).unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), text);
    }
}

#[test]
fn test_coverage_guarantee() {
    let mut codec = TextCodec::default();
    codec.train("eeee");
    codec.ensure_minimum_coverage();
    codec.build_tree().unwrap();

    // None of these symbols appeared in training.
    let text = "The quick brown fox jumps over the lazy dog!\n0123456789 ~";
    let encoded = codec.encode(text).unwrap();
    assert_eq!(codec.decode(&encoded).unwrap(), text);
}

#[test]
fn test_unicode_text_roundtrip() {
    let mut codec = TextCodec::default();
    codec.train("grüße aus münchen, äöüß und noch mehr text");
    codec.build_tree().unwrap();

    let text = "münchen grüßt";
    let encoded = codec.encode(text).unwrap();
    assert_eq!(codec.decode(&encoded).unwrap(), text);
}

#[test]
fn test_byte_packing_roundtrip() {
    let mut codec = TextCodec::default();
    codec.train("pack me into bytes and back again");
    codec.build_tree().unwrap();

    let text = "bytes and back";
    let packed = codec.encode(text).unwrap().to_bytes();
    // The zero padding added by packing sits past the end marker and is
    // ignored on decode.
    let unpacked = BitSeq::from_bytes(&packed);
    assert_eq!(codec.decode(&unpacked).unwrap(), text);
}

#[test]
fn test_degenerate_end_only_codec() {
    let mut codec = TextCodec::default();
    codec.train("");
    codec.build_tree().unwrap();

    assert!(codec.encode("").unwrap().is_empty());
    assert_eq!(codec.decode(&BitSeq::new()).unwrap(), "");
    assert_eq!(codec.decode(&bits("0110")).unwrap(), "");
    assert!(matches!(
        codec.encode("x"),
        Err(CodecError::UnmappedSymbol('x'))
    ));
}

#[test]
fn test_rebuild_changes_codes_for_new_distribution() {
    let mut codec = TextCodec::default();
    codec.train("aaab");
    codec.build_tree().unwrap();
    let before = codec.encode("ab").unwrap();

    codec.train("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
    codec.build_tree().unwrap();
    let after = codec.encode("ab").unwrap();

    // Same text, new tree, and the new tree still round-trips.
    assert_eq!(codec.decode(&after).unwrap(), "ab");
    assert_ne!(before, after);
}

#[test]
fn test_tree_paths_expose_every_trained_symbol() {
    let mut codec = TextCodec::default();
    codec.train("abcabcabc");
    codec.build_tree().unwrap();

    let paths = codec.tree().unwrap().paths();
    let mut symbols: Vec<Option<char>> = paths.iter().map(|p| p.symbol).collect();
    symbols.sort_unstable();
    assert_eq!(
        symbols,
        vec![None, Some('a'), Some('b'), Some('c')]
    );
}
