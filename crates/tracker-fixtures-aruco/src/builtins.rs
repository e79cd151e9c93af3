//! Embedded built-in dictionaries.
//!
//! Code tables are maintained directly in this file: one `u64` per marker,
//! row-major bit packing, black = 1, bit index `y * marker_size + x`.

#![allow(clippy::unreadable_literal)]

use crate::Dictionary;

/// Dictionary the downstream web tracker detects against.
///
/// The generator and the tracker must agree on the symbol set; this constant
/// is the single place that agreement lives.
pub const TRACKER_DICT: Dictionary = DICT_6X6_250;

/// Names accepted by [`builtin_dictionary`].
pub const BUILTIN_NAMES: [&str; 2] = ["DICT_4X4_50", "DICT_6X6_250"];

/// Look up a built-in dictionary by name.
pub fn builtin_dictionary(name: &str) -> Option<Dictionary> {
    match name {
        "DICT_4X4_50" => Some(DICT_4X4_50),
        "DICT_6X6_250" => Some(DICT_6X6_250),
        _ => None,
    }
}

/// ArUco 4x4, 50 markers (published code table).
pub const DICT_4X4_50: Dictionary = Dictionary {
    name: "DICT_4X4_50",
    marker_size: 4,
    max_correction_bits: 1,
    codes: &DICT_4X4_50_CODES,
};

#[rustfmt::skip]
const DICT_4X4_50_CODES: [u64; 50] = [
    0x000000004cad, 0x0000000059f0, 0x00000000b4cc, 0x000000006299,
    0x00000000792a, 0x00000000b39e, 0x000000007479, 0x000000004f23,
    0x000000005b7f, 0x000000006af3, 0x00000000899f, 0x00000000e588,
    0x00000000ed70, 0x00000000f054, 0x000000008d24, 0x000000007c64,
    0x00000000a662, 0x000000000066, 0x000000007a36, 0x00000000f56e,
    0x00000000d161, 0x00000000d40d, 0x00000000ab33, 0x0000000041bb,
    0x00000000e27f, 0x000000008e29, 0x000000002735, 0x000000002aa5,
    0x00000000c484, 0x00000000f62c, 0x00000000a822, 0x000000004dea,
    0x00000000f379, 0x00000000d30f, 0x000000007510, 0x000000009490,
    0x00000000ae18, 0x00000000ff20, 0x000000006fb0, 0x000000005a38,
    0x0000000018e8, 0x000000001454, 0x00000000314c, 0x000000004d1c,
    0x000000001724, 0x00000000d774, 0x00000000fcb4, 0x0000000026d2,
    0x00000000740a, 0x00000000c80a,
];

/// ArUco 6x6, 250 markers.
///
/// Minimum Hamming distance 11 between any two codes over all four rotations
/// (self-rotations included), hence 5 correctable bits.
pub const DICT_6X6_250: Dictionary = Dictionary {
    name: "DICT_6X6_250",
    marker_size: 6,
    max_correction_bits: 5,
    codes: &DICT_6X6_250_CODES,
};

#[rustfmt::skip]
const DICT_6X6_250_CODES: [u64; 250] = [
    0x0000000faf8f54e6, 0x000000061baa3839, 0x00000006ca4d4a89, 0x0000000e3c80fc2b,
    0x000000090019ce8a, 0x0000000c20a7ab09, 0x0000000ac416ffe8, 0x0000000e33036aaa,
    0x00000005e8a17df4, 0x000000053c71b39d, 0x000000057090110e, 0x000000041652d3cc,
    0x0000000f021f4e95, 0x000000099c41574d, 0x00000007eae9ea4a, 0x0000000ed5efbe3c,
    0x0000000fe69134fb, 0x0000000fe52b3601, 0x00000006acb67e53, 0x000000003f3d1176,
    0x0000000ff6322e46, 0x000000068a018a46, 0x00000005df07efa6, 0x000000061e877714,
    0x00000005534e4231, 0x0000000d94365ab8, 0x00000007ac63f909, 0x00000003b6c6e9aa,
    0x0000000831013cf3, 0x00000006ba4b1bfb, 0x00000008cfe52397, 0x0000000e4ad499db,
    0x0000000a6a1c1fe5, 0x00000004c16ad925, 0x0000000b9af99625, 0x0000000aefd83bd2,
    0x00000000b24dbe38, 0x0000000bffead3c4, 0x000000001502ef4b, 0x00000003a2edd080,
    0x000000008f1fc6c2, 0x0000000241d79647, 0x0000000bea1ab22b, 0x00000002957f3770,
    0x0000000203ba485a, 0x0000000ed77be56d, 0x000000066b7287f5, 0x0000000a7374f97f,
    0x0000000d6722b5c2, 0x0000000864aed981, 0x000000033d199d38, 0x00000006e9786fea,
    0x0000000fa8ac97e0, 0x0000000eb15b10ca, 0x00000005f38dfbf2, 0x0000000ddd72c139,
    0x000000069e55c72d, 0x0000000e29ce9a67, 0x0000000791c2a72c, 0x00000005d8bb4803,
    0x000000019bb3ea95, 0x00000009b2154a2f, 0x00000008ed480c5c, 0x00000005a8f4f124,
    0x0000000b93467783, 0x00000007ab6d5947, 0x0000000e454ad283, 0x0000000ca311577a,
    0x0000000f4ca35f99, 0x0000000b5045c287, 0x000000059370065b, 0x0000000cbfbb0321,
    0x00000004f21c474d, 0x0000000e0474b3b4, 0x00000008bed1d5a1, 0x000000093667d429,
    0x000000046e1854ef, 0x00000004de4d7c3f, 0x00000007d1beed8b, 0x0000000e7d37d0c2,
    0x0000000f51c4ebe0, 0x0000000f94a111d1, 0x00000008ef20c015, 0x0000000619187290,
    0x0000000960635f68, 0x00000004d8ecf4f9, 0x000000042c24d963, 0x00000001dce247ee,
    0x00000001ce9757bd, 0x000000012a14ffac, 0x000000069e9c8af2, 0x0000000971d6ce00,
    0x0000000f70ee6d30, 0x0000000d44c470ce, 0x000000027d2da232, 0x0000000ac5ae67ff,
    0x0000000041523fe1, 0x0000000ad6614189, 0x000000081c23064a, 0x0000000853350e3c,
    0x0000000bbd563ae4, 0x0000000adac764c1, 0x00000002f303d91c, 0x00000002b0f30d0d,
    0x00000009d6fee937, 0x0000000fbc89a1a5, 0x0000000cc1996155, 0x000000027ec4df07,
    0x0000000177547336, 0x00000009737eb40f, 0x0000000701d52ed6, 0x000000070a8e6d43,
    0x00000002d5308321, 0x0000000275d546e0, 0x0000000caa5e9198, 0x00000003d2056f4e,
    0x0000000988c7363b, 0x0000000163b08999, 0x0000000da27c53fd, 0x00000008f7d71c35,
    0x00000001a1e302d8, 0x00000005e4270346, 0x00000007877534a1, 0x00000001770dad04,
    0x00000003c84e9abc, 0x00000003b1ef63eb, 0x00000000d806fb21, 0x00000009a22def65,
    0x0000000c8504450d, 0x000000082489f2a4, 0x00000009eaf446e2, 0x0000000ad69e38df,
    0x0000000ea62f3a79, 0x00000001b13d5bce, 0x000000004309fac9, 0x0000000f3ce5a979,
    0x0000000b7d5848fb, 0x0000000032bc928b, 0x00000008ba279cc0, 0x0000000cf4410b0f,
    0x0000000c8b47ebe8, 0x00000007c6564d1d, 0x00000004cd871290, 0x0000000ba539a6ef,
    0x0000000a742292bb, 0x000000046bfe53ae, 0x0000000461417113, 0x000000078f8a9854,
    0x0000000555b8b5df, 0x00000009f3baab86, 0x00000001950fe628, 0x0000000f9871ba40,
    0x0000000dfbe4401b, 0x0000000000a715e0, 0x00000007e3d81d55, 0x0000000f6590e337,
    0x0000000bb87b09e6, 0x0000000d93810306, 0x0000000211f4a0a5, 0x00000001289e85a6,
    0x00000007532bc382, 0x000000005909433c, 0x0000000460ff2012, 0x000000014b27ca6c,
    0x00000003b59fd843, 0x0000000dc84ca9c9, 0x0000000bad43ca90, 0x0000000be808d543,
    0x0000000754204a72, 0x0000000ad4abeb48, 0x00000001fbc8e511, 0x00000005f234db1a,
    0x00000001d5fa262b, 0x000000056713c80e, 0x000000034d7f80af, 0x00000005efc3b2db,
    0x00000009908a8278, 0x0000000c0783a67a, 0x000000077ba279c5, 0x0000000c31f3ffd1,
    0x0000000720133488, 0x00000003ff49788d, 0x00000002a258e4e8, 0x0000000639bb8ca5,
    0x0000000f73630c84, 0x0000000a3c0a9305, 0x0000000165c0ec7a, 0x00000009eaa7a154,
    0x0000000d9f1016bd, 0x0000000a2509289d, 0x0000000f8deee005, 0x0000000e572f3988,
    0x0000000d07de8790, 0x000000029874d6c7, 0x0000000587eaf6bf, 0x0000000a767c81d3,
    0x000000076893087b, 0x000000038e4126ae, 0x0000000cd99bd5cf, 0x0000000b9be7fb7d,
    0x00000000f855859c, 0x000000091759370a, 0x0000000d4c36fc14, 0x0000000fe2a058ad,
    0x0000000e5f0b6bd6, 0x00000004c08bbcb6, 0x0000000a69439f3f, 0x00000000cc7b1f0a,
    0x00000007e1c4db4b, 0x000000052984e6c8, 0x00000002354b5f22, 0x0000000e36381c61,
    0x00000001a75783ee, 0x0000000e930689dd, 0x000000004ed88d4f, 0x0000000048cea344,
    0x0000000ba8c2218e, 0x0000000a093ecb92, 0x000000028cfbbbe7, 0x00000008d53de785,
    0x0000000dd9c3f02a, 0x000000047ae5569c, 0x00000001c8664bd5, 0x000000012e0a7164,
    0x000000052fd93886, 0x00000004a4c38591, 0x0000000c34fbd93b, 0x00000006e7ea4f13,
    0x0000000d93f585ea, 0x00000008761db6b3, 0x000000012d2714c7, 0x00000006f326b343,
    0x00000007498e565d, 0x000000056474f2d3, 0x0000000c5b1c5797, 0x00000007f8055661,
    0x0000000a86d7c2dc, 0x0000000e148b187e, 0x0000000bf5840348, 0x00000009a8d2cb7f,
    0x0000000558344dc9, 0x00000005c14d22ec, 0x000000036ebbbfa8, 0x00000008f4efb047,
    0x00000006ae7009ab, 0x000000009b5debb3, 0x0000000cca54af75, 0x00000000eaa01bc3,
    0x0000000fe87a0e3d, 0x000000065971cb98,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotate_code_u64;
    use std::collections::HashSet;

    #[test]
    fn builtin_lookup_finds_known_names() {
        let dict = builtin_dictionary("DICT_6X6_250").expect("builtin dict");
        assert_eq!(dict.marker_size, 6);
        assert_eq!(dict.len(), 250);

        let dict = builtin_dictionary("DICT_4X4_50").expect("builtin dict");
        assert_eq!(dict.marker_size, 4);
        assert_eq!(dict.len(), 50);
    }

    #[test]
    fn builtin_lookup_rejects_unknown_names() {
        assert!(builtin_dictionary("DICT_5X5_100").is_none());
        assert!(builtin_dictionary("").is_none());
    }

    #[test]
    fn tracker_dict_is_the_6x6_250_family() {
        assert_eq!(TRACKER_DICT.name, "DICT_6X6_250");
        assert_eq!(TRACKER_DICT.marker_size, 6);
        assert_eq!(TRACKER_DICT.len(), 250);
        assert_eq!(TRACKER_DICT.bit_count(), 36);
    }

    #[test]
    fn codes_fit_their_bit_count() {
        for dict in BUILTIN_NAMES.map(|n| builtin_dictionary(n).unwrap()) {
            let mask = (1u64 << dict.bit_count()) - 1;
            for &code in dict.codes {
                assert_eq!(code & !mask, 0, "{}: code wider than grid", dict.name);
            }
        }
    }

    #[test]
    fn dict_6x6_250_codes_distinct_across_rotations() {
        let dict = DICT_6X6_250;
        let mut seen = HashSet::new();
        for &code in dict.codes {
            for rot in 0..4 {
                seen.insert(rotate_code_u64(code, dict.marker_size, rot));
            }
        }
        // No code may collide with any rotation of any code (itself included).
        assert_eq!(seen.len(), dict.len() * 4);
    }

    #[test]
    fn dict_4x4_50_codes_distinct() {
        let unique: HashSet<u64> = DICT_4X4_50.codes.iter().copied().collect();
        assert_eq!(unique.len(), DICT_4X4_50.len());
    }
}
