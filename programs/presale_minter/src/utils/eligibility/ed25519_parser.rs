/// `instruction_index` value meaning "data lives in this same instruction"
const CURRENT_INSTRUCTION: u16 = u16::MAX;

/// Size of the fixed header: signature count, padding and one offsets block
const HEADER_LEN: usize = 16;

/// Parsed components of an Ed25519 signature verification instruction
///
/// Contains the extracted signature count, public key, and message data
/// from a Solana Ed25519 instruction for cryptographic verification.
pub struct ParsedEd25519 {
    /// Number of signatures in the instruction (must be 1 for single signature verification)
    pub sig_count: u8,
    /// 32-byte Ed25519 public key used for signature verification
    pub pubkey: [u8; 32],
    /// Message bytes that were signed
    pub message: Vec<u8>,
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

/// Parse Ed25519 verify instruction data into useful parts.
///
/// Expected data format (Solana Ed25519 instruction format):
/// ```text
/// Bytes 0:     Number of signatures (u8) - must be 1
/// Bytes 1:     Padding (u8)
/// Bytes 2-3:   Signature offset (u16 little-endian)
/// Bytes 4-5:   Signature instruction index (u16 little-endian)
/// Bytes 6-7:   Public key offset (u16 little-endian)
/// Bytes 8-9:   Public key instruction index (u16 little-endian)
/// Bytes 10-11: Message data offset (u16 little-endian)
/// Bytes 12-13: Message data size (u16 little-endian)
/// Bytes 14-15: Message instruction index (u16 little-endian)
/// ```
///
/// The signature, public key and message must all live in the Ed25519 instruction
/// itself. Offsets that point into another instruction are rejected, otherwise the
/// bytes read here would not be the bytes the precompile verified.
///
/// Returns None if data is malformed or doesn't follow expected format.
pub fn parse_ed25519_ix(data: &[u8]) -> Option<ParsedEd25519> {
    if data.len() < HEADER_LEN {
        return None;
    }
    let sig_count = data[0];
    if sig_count != 1 {
        return None;
    }

    let sig_offset = read_u16(data, 2) as usize;
    let sig_ix_index = read_u16(data, 4);
    let pubkey_offset = read_u16(data, 6) as usize;
    let pubkey_ix_index = read_u16(data, 8);
    let msg_offset = read_u16(data, 10) as usize;
    let msg_size = read_u16(data, 12) as usize;
    let msg_ix_index = read_u16(data, 14);

    if sig_ix_index != CURRENT_INSTRUCTION
        || pubkey_ix_index != CURRENT_INSTRUCTION
        || msg_ix_index != CURRENT_INSTRUCTION
    {
        return None;
    }

    if sig_offset + 64 > data.len() {
        return None;
    }

    if pubkey_offset + 32 > data.len() {
        return None;
    }
    let mut pubkey = [0u8; 32];
    pubkey.copy_from_slice(&data[pubkey_offset..pubkey_offset + 32]);

    if msg_offset + msg_size > data.len() {
        return None;
    }
    let message = data[msg_offset..msg_offset + msg_size].to_vec();

    Some(ParsedEd25519 {
        sig_count,
        pubkey,
        message,
    })
}
