//! Property based tests for the codec, using proptest.

use huffpack::bitstream::bitreader::BitReader;
use huffpack::{compress, HuffError, HuffmanCodec};
use proptest::prelude::*;

/// Byte strings over a small alphabet, so codes of several lengths show up.
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"aaaabbbccdeu \n".to_vec()), 0..400)
}

proptest! {
    #[test]
    fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 0..2000)) {
        let (codec, packed) = compress(&data).unwrap();
        prop_assert_eq!(codec.decompress(&packed).unwrap(), data);
    }

    #[test]
    fn prop_roundtrip_text(data in text_strategy()) {
        let (codec, packed) = compress(&data).unwrap();
        prop_assert_eq!(codec.decompress(&packed).unwrap(), data);
    }

    #[test]
    fn prop_deterministic(data in text_strategy()) {
        let (_, first) = compress(&data).unwrap();
        let (_, second) = compress(&data).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_prefix_free(data in prop::collection::vec(any::<u8>(), 1..1000)) {
        let codec = HuffmanCodec::from_data(&data).unwrap();
        let codes: Vec<&[bool]> = codec.code_table().iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                prop_assert!(!a.starts_with(b) && !b.starts_with(a));
            }
        }
    }

    #[test]
    fn prop_padding_accounts_for_every_bit(data in prop::collection::vec(any::<u8>(), 1..1000)) {
        let (codec, packed) = compress(&data).unwrap();
        let expected_bits = codec
            .code_table()
            .encoded_bit_len(codec.frequencies())
            .unwrap();

        let mut br = BitReader::new(&packed);
        let padding = br.byte().unwrap() as usize;
        prop_assert!((1..=8).contains(&padding));
        prop_assert_eq!(br.bits_left() - padding, expected_bits);
        prop_assert_eq!((expected_bits + padding) % 8, 0);
    }

    #[test]
    fn prop_corruption_is_detected_or_decodes(
        data in text_strategy().prop_filter("non-empty", |d| !d.is_empty()),
        flip in any::<prop::sample::Index>(),
    ) {
        let (codec, mut packed) = compress(&data).unwrap();
        // Flip one bit past the header.
        let bit = flip.index((packed.len() - 1) * 8);
        packed[1 + bit / 8] ^= 0x80 >> (bit % 8);
        match codec.decompress(&packed) {
            Ok(_) => {}
            Err(HuffError::MalformedStream { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }
}
