/// RDS group framing.
///
/// A group is four 26-bit blocks, each 16 data bits followed by a 10-bit checkword. The checkword is
/// the CRC of the data under g(x) = x^10 + x^8 + x^7 + x^5 + x^4 + x^3 + 1, XORed with an offset word
/// that marks the block's position, so the remainder of a whole valid block is its offset word.
use std::fmt;

use crate::{prelude::ErrorsOracle, serialize::literal::CustomLiteral};

pub const BLOCK_BITS: usize = 26;
pub const GROUP_BITS: usize = 4 * BLOCK_BITS;

const GENERATOR: u32 = 0x5B9;

pub const OFFSET_A: u16 = 0x0FC;
pub const OFFSET_B: u16 = 0x198;
pub const OFFSET_C: u16 = 0x168;
pub const OFFSET_C_PRIME: u16 = 0x350;
pub const OFFSET_D: u16 = 0x1B4;

/// Offset words accepted at each block position.
const POSITION_OFFSETS: [&[u16]; 4] = [
    &[OFFSET_A],
    &[OFFSET_B],
    &[OFFSET_C, OFFSET_C_PRIME],
    &[OFFSET_D],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RdsFrame {
    pub blocks: [u16; 4],
}

impl RdsFrame {
    pub const fn new(a: u16, b: u16, c: u16, d: u16) -> Self {
        Self { blocks: [a, b, c, d] }
    }
}

impl fmt::Display for RdsFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.blocks;
        write!(f, "{{{{{{0x{a:04x}, 0x{b:04x}, 0x{c:04x}, 0x{d:04x}}}}}}}")
    }
}

impl CustomLiteral for RdsFrame {
    fn to_literal(&self) -> Result<String, ErrorsOracle> {
        Ok(self.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RdsFrameVector(pub Vec<RdsFrame>);

impl CustomLiteral for RdsFrameVector {
    fn to_literal(&self) -> Result<String, ErrorsOracle> {
        let frames: Vec<String> = self.0.iter().map(RdsFrame::to_string).collect();
        Ok(format!(
            "require('radio.blocks.protocol.rdsframe').RDSFrameType.vector_from_array({{{}}})",
            frames.join(", ")
        ))
    }
}

/// Remainder of a 26-bit block modulo the generator polynomial.
pub fn syndrome(block: u32) -> u16 {
    let mut reg = block & ((1 << BLOCK_BITS) - 1);
    for bit in (10..BLOCK_BITS).rev() {
        if reg & (1 << bit) != 0 {
            reg ^= GENERATOR << (bit - 10);
        }
    }
    reg as u16
}

/// Checkword for `data` at a position marked by `offset`.
pub fn checkword(data: u16, offset: u16) -> u16 {
    syndrome((data as u32) << 10) ^ offset
}

/// Data word of a block whose syndrome matches one of `offsets`, correcting at most one flipped bit.
pub fn validate_block(block: u32, offsets: &[u16]) -> Option<u16> {
    let data = |b: u32| (b >> 10) as u16;
    if offsets.contains(&syndrome(block)) {
        return Some(data(block));
    }
    (0..BLOCK_BITS)
        .map(|bit| block ^ (1 << bit))
        .find(|candidate| offsets.contains(&syndrome(*candidate)))
        .map(data)
}

fn pack(bits: &[bool]) -> u32 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | u32::from(b))
}

/// Decode one group from exactly `GROUP_BITS` bits, most significant bit first.
pub fn validate_group(bits: &[bool]) -> Result<RdsFrame, ErrorsOracle> {
    if bits.len() != GROUP_BITS {
        return Err(ErrorsOracle::IncompatibleArraySizes((bits.len(), GROUP_BITS)));
    }
    let mut blocks = [0u16; 4];
    for (position, chunk) in bits.chunks_exact(BLOCK_BITS).enumerate() {
        blocks[position] = validate_block(pack(chunk), POSITION_OFFSETS[position]).ok_or_else(|| {
            ErrorsOracle::precondition(format!("RDS block {position} fails its checkword"))
        })?;
    }
    Ok(RdsFrame { blocks })
}

/// Bits of a '0'/'1' string; anything else is a precondition failure.
pub fn parse_bits(pattern: &str) -> Result<Vec<bool>, ErrorsOracle> {
    pattern
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(ErrorsOracle::precondition(format!("invalid bit {other:?}"))),
        })
        .collect()
}

/// Assert that a group pattern decodes to the frame a fixture expects from it.
pub fn confirm_group(bits: &[bool], expected: RdsFrame) -> Result<(), ErrorsOracle> {
    let decoded = validate_group(bits)?;
    if decoded != expected {
        return Err(ErrorsOracle::precondition(format!(
            "RDS pattern decodes to {decoded}, expected {expected}"
        )));
    }
    Ok(())
}

/// Known-good groups and the frames they carry.
pub const GROUP_1_BITS: &str =
    "00111010101010110111011000000000101100100110110000110000011000001000001010001101100100011010011111000110";
pub const GROUP_2_BITS: &str =
    "00111010101010110111011000100000101100100011000011010100100001001001100101101100101001000110000100100010";
pub const GROUP_3_BITS: &str =
    "00111010101010110111011000000000101100101000000010001110001100001010010100001001101111001000001101110110";

pub const GROUP_1_FRAME: RdsFrame = RdsFrame::new(0x3aab, 0x02c9, 0x0608, 0x6469);
pub const GROUP_2_FRAME: RdsFrame = RdsFrame::new(0x3aab, 0x82c8, 0x4849, 0x2918);
pub const GROUP_3_FRAME: RdsFrame = RdsFrame::new(0x3aab, 0x02ca, 0xe30a, 0x6f20);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_literal() {
        assert_eq!(GROUP_1_FRAME.to_string(), "{{{0x3aab, 0x02c9, 0x0608, 0x6469}}}");
        let vector = RdsFrameVector(vec![GROUP_1_FRAME, GROUP_3_FRAME]);
        assert_eq!(
            vector.to_literal().unwrap(),
            "require('radio.blocks.protocol.rdsframe').RDSFrameType.vector_from_array({{{{0x3aab, 0x02c9, 0x0608, 0x6469}}}, {{{0x3aab, 0x02ca, 0xe30a, 0x6f20}}}})"
        );
    }

    #[test]
    fn test_known_groups_validate() {
        for (pattern, frame) in [
            (GROUP_1_BITS, GROUP_1_FRAME),
            (GROUP_2_BITS, GROUP_2_FRAME),
            (GROUP_3_BITS, GROUP_3_FRAME),
        ] {
            let bits = parse_bits(pattern).unwrap();
            assert_eq!(validate_group(&bits).unwrap(), frame);
        }
    }

    #[test]
    fn test_checkword_round_trip() {
        for (data, offset) in [(0x3aabu16, OFFSET_A), (0x82c8, OFFSET_B), (0xe30a, OFFSET_C)] {
            let block = ((data as u32) << 10) | checkword(data, offset) as u32;
            assert_eq!(syndrome(block), offset);
        }
    }

    #[test]
    fn test_single_bit_errors_are_corrected() {
        let mut bits = parse_bits(GROUP_1_BITS).unwrap();
        bits[7] = !bits[7];
        confirm_group(&bits, GROUP_1_FRAME).unwrap();

        let mut bits = parse_bits(GROUP_2_BITS).unwrap();
        bits[19] = !bits[19];
        confirm_group(&bits, GROUP_2_FRAME).unwrap();
    }

    #[test]
    fn test_double_errors_and_mismatches_are_rejected() {
        let mut bits = parse_bits(GROUP_1_BITS).unwrap();
        bits[0] = !bits[0];
        bits[1] = !bits[1];
        assert!(validate_group(&bits).is_err());

        let bits = parse_bits(GROUP_1_BITS).unwrap();
        assert!(confirm_group(&bits, GROUP_2_FRAME).is_err());
        assert!(validate_group(&bits[..100]).is_err());
        assert!(parse_bits("01x").is_err());
    }
}
