use log::{debug, trace};

use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;

/*
    Packed stream layout:

    [padding: u8][code bits ... ][padding zero bits]

    The header counts the zero bits appended to the last byte. A bit string that is
    already byte aligned still gets a whole byte of padding, so the header is always
    1..=8 for a non-empty input. Empty input packs to an empty stream.
*/

/// Zero bits needed after `bit_len` data bits (plus the 8 bit header) to end on a byte
/// boundary. Returns 8, not 0, when `bit_len` is already a multiple of 8.
pub fn padding_for(bit_len: usize) -> u8 {
    (8 - bit_len % 8) as u8
}

/// Encode `data` with the session's code table and pack it behind the padding header.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    // Look every code up first: the header needs the padding before any code goes out.
    let codes = data
        .iter()
        .map(|&byte| table.code(byte).ok_or(HuffError::UnknownSymbol(byte)))
        .collect::<Result<Vec<&[bool]>>>()?;
    let bit_len: usize = codes.iter().map(|code| code.len()).sum();
    let padding = padding_for(bit_len);

    let mut bp = BitPacker::new(1 + (bit_len + padding as usize) / 8);
    bp.out8(padding);
    codes.iter().for_each(|code| bp.out_code(code));
    trace!("Wrote {} code bits, now at {}", bit_len, bp.loc());
    bp.out_zeros(padding as usize);

    let packed = bp.finish()?;
    debug!(
        "Encoded {} bytes into {} bits, {} bits of padding, {} bytes packed",
        data.len(),
        bit_len,
        padding,
        packed.len()
    );
    Ok(packed)
}
