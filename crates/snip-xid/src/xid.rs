use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Length of the textual form of an [`Xid`].
pub const ENCODED_LEN: usize = 20;

const RAW_LEN: usize = 12;
const PADDING_BITS: u32 = 4;
const SYMBOL_MASK: u128 = 0x1f;
const ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// A 12-byte identifier: 4 bytes of Unix seconds, 3 bytes machine id,
/// 2 bytes process id and a 3-byte counter, all big-endian.
///
/// Ordering of `Xid` values, and of their string form, follows creation time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Xid([u8; RAW_LEN]);

impl Xid {
    /// Assembles an id from its fields. Only the low 24 bits of `counter` are kept.
    pub fn from_parts(timestamp: u32, machine_id: [u8; 3], process_id: u16, counter: u32) -> Self {
        let mut raw = [0_u8; RAW_LEN];
        raw[0..4].copy_from_slice(&timestamp.to_be_bytes());
        raw[4..7].copy_from_slice(&machine_id);
        raw[7..9].copy_from_slice(&process_id.to_be_bytes());
        raw[9..12].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(raw)
    }

    pub const fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.0
    }

    /// Seconds since the Unix epoch at which the id was minted.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn machine_id(&self) -> [u8; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    pub fn process_id(&self) -> u16 {
        u16::from_be_bytes([self.0[7], self.0[8]])
    }

    pub fn counter(&self) -> u32 {
        u32::from_be_bytes([0, self.0[9], self.0[10], self.0[11]])
    }

    /// Renders the id as 20 base32hex characters.
    ///
    /// The 96 id bits are followed by 4 zero bits so they split evenly into
    /// twenty 5-bit symbols.
    pub fn encode(&self) -> String {
        let bits = self.to_bits();
        (0..ENCODED_LEN)
            .map(|index| {
                let shift = 5 * (ENCODED_LEN - 1 - index);
                ALPHABET[((bits >> shift) & SYMBOL_MASK) as usize] as char
            })
            .collect()
    }

    fn to_bits(self) -> u128 {
        let mut wide = [0_u8; 16];
        wide[16 - RAW_LEN..].copy_from_slice(&self.0);
        u128::from_be_bytes(wide) << PADDING_BITS
    }
}

fn decode_symbol(symbol: u8) -> Option<u8> {
    match symbol {
        b'0'..=b'9' => Some(symbol - b'0'),
        b'a'..=b'v' => Some(symbol - b'a' + 10),
        _ => None,
    }
}

impl FromStr for Xid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ENCODED_LEN {
            return Err(Error::InvalidLength {
                expected: ENCODED_LEN,
                actual: s.len(),
            });
        }

        let mut bits: u128 = 0;
        for (position, (symbol, character)) in s.bytes().zip(s.chars()).enumerate() {
            let value = decode_symbol(symbol).ok_or(Error::InvalidCharacter {
                character,
                position,
            })?;
            bits = (bits << 5) | u128::from(value);
        }

        if bits & ((1_u128 << PADDING_BITS) - 1) != 0 {
            return Err(Error::NonZeroPadding);
        }

        let wide = (bits >> PADDING_BITS).to_be_bytes();
        let mut raw = [0_u8; RAW_LEN];
        raw.copy_from_slice(&wide[16 - RAW_LEN..]);
        Ok(Self(raw))
    }
}

impl fmt::Display for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xid")
            .field("timestamp", &self.timestamp())
            .field("machine_id", &self.machine_id())
            .field("process_id", &self.process_id())
            .field("counter", &self.counter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [u8; RAW_LEN] = [
        0x4d, 0x88, 0xe1, 0x5b, 0x60, 0xf4, 0x86, 0xe4, 0x28, 0x41, 0x2d, 0xc9,
    ];

    #[test]
    fn encodes_known_id() {
        let id = Xid::from_bytes(KNOWN);
        assert_eq!(id.to_string(), "9m4e2mr0ui3e8a215n4g");
    }

    #[test]
    fn exposes_fields() {
        let id = Xid::from_bytes(KNOWN);
        assert_eq!(id.timestamp(), 1_300_816_219);
        assert_eq!(id.machine_id(), [0x60, 0xf4, 0x86]);
        assert_eq!(id.process_id(), 0xe428);
        assert_eq!(id.counter(), 4_271_561);
    }

    #[test]
    fn from_parts_matches_raw_layout() {
        let id = Xid::from_parts(1_300_816_219, [0x60, 0xf4, 0x86], 0xe428, 4_271_561);
        assert_eq!(id.as_bytes(), &KNOWN);
    }

    #[test]
    fn from_parts_truncates_counter_to_24_bits() {
        let id = Xid::from_parts(0, [0; 3], 0, 0xff00_0001);
        assert_eq!(id.counter(), 1);
    }

    #[test]
    fn encoding_bounds() {
        assert_eq!(Xid::from_bytes([0; RAW_LEN]).encode(), "00000000000000000000");
        assert_eq!(
            Xid::from_bytes([0xff; RAW_LEN]).encode(),
            "vvvvvvvvvvvvvvvvvvvg"
        );
    }

    #[test]
    fn parses_its_own_output() {
        let id = Xid::from_bytes(KNOWN);
        let parsed: Xid = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "9m4e2mr0ui3e8a215n4".parse::<Xid>(),
            Err(Error::InvalidLength {
                expected: 20,
                actual: 19
            })
        );
    }

    #[test]
    fn parse_rejects_symbols_outside_alphabet() {
        assert_eq!(
            "9m4e2mr0ui3e8a215n4w".parse::<Xid>(),
            Err(Error::InvalidCharacter {
                character: 'w',
                position: 19
            })
        );
        assert!(matches!(
            "9M4E2MR0UI3E8A215N4G".parse::<Xid>(),
            Err(Error::InvalidCharacter { position: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_non_zero_padding() {
        assert_eq!(
            "9m4e2mr0ui3e8a215n4h".parse::<Xid>(),
            Err(Error::NonZeroPadding)
        );
    }

    #[test]
    fn string_order_follows_byte_order() {
        let earlier = Xid::from_parts(100, [0xff; 3], u16::MAX, 0x00ff_ffff);
        let later = Xid::from_parts(101, [0; 3], 0, 0);
        assert!(earlier < later);
        assert!(earlier.to_string() < later.to_string());
    }
}
