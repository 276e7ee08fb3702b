use log::{debug, error};

use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::{code_to_string, Code, CodeTable};

const EOF_MESSAGE: &str = "Unexpected end of packed stream";

/// Decode a packed stream produced by `encode` with the same code table.
pub fn decode(packed: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    if packed.is_empty() {
        return Ok(Vec::new());
    }

    let mut br = BitReader::new(packed);

    // The header tells us how many bits at the end are filler.
    let padding = br.byte().ok_or_else(|| HuffError::malformed(EOF_MESSAGE))? as usize;
    if padding > 8 {
        error!("Padding header is {}, which is more than one byte.", padding);
        return Err(HuffError::malformed(format!(
            "padding header {} is larger than 8",
            padding
        )));
    }
    let payload = br.bits_left();
    if padding > payload {
        return Err(HuffError::malformed(format!(
            "{} bits of padding but only {} bits of payload",
            padding, payload
        )));
    }
    let data_bits = payload - padding;

    let mut output = Vec::with_capacity(data_bits / table.max_code_len().max(1));
    let mut current_code: Code = Vec::with_capacity(table.max_code_len());

    // Codes are prefix-free, so the first match is the only possible match.
    for _ in 0..data_bits {
        let bit = br.bool_bit().ok_or_else(|| HuffError::malformed(EOF_MESSAGE))?;
        current_code.push(bit);
        if let Some(symbol) = table.symbol(&current_code) {
            output.push(symbol);
            current_code.clear();
        } else if current_code.len() >= table.max_code_len() {
            error!(
                "No code matches {} (ending at {}).",
                code_to_string(&current_code),
                br.loc()
            );
            return Err(HuffError::malformed(format!(
                "bits {} match no code in the table",
                code_to_string(&current_code)
            )));
        }
    }

    if !current_code.is_empty() {
        return Err(HuffError::malformed(format!(
            "stream ends in the middle of a code ({} dangling bits)",
            current_code.len()
        )));
    }

    while let Some(bit) = br.bool_bit() {
        if bit {
            return Err(HuffError::malformed("padding bits are not all zero"));
        }
    }

    debug!(
        "Decoded {} data bits into {} bytes ({} bits of padding)",
        data_bits,
        output.len(),
        padding
    );
    Ok(output)
}
