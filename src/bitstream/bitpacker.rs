use log::error;

use crate::error::{HuffError, Result};

/// Packs bits MSB-first into a byte buffer.
pub struct BitPacker {
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified (in bytes).
    /// Call finish() to get the packed bytes back.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts 8 bits of pre-packed data on the stream.
    pub fn out8(&mut self, data: u8) {
        self.queue <<= 8;
        self.queue |= data as u64;
        self.q_bits += 8;
        self.write_stream();
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.write_stream();
    }

    /// Puts every bit of a huffman code on the stream, first bit first.
    pub fn out_code(&mut self, code: &[bool]) {
        code.iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Puts n zero bits on the stream.
    pub fn out_zeros(&mut self, n: usize) {
        (0..n).for_each(|_| self.out_bit(false));
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize
    }

    /// Hand back the packed bytes. Everything put on the stream must add up to whole bytes;
    /// leftover bits mean the caller padded wrong.
    pub fn finish(self) -> Result<Vec<u8>> {
        if self.q_bits > 0 {
            error!("Stuff left in the BitPacker queue: {} bits.", self.q_bits);
            return Err(HuffError::invariant(format!(
                "packed stream is {} bits, not a multiple of 8",
                self.bit_len()
            )));
        }
        Ok(self.output)
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_len() / 8, self.bit_len() % 8)
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;
    use crate::error::HuffError;

    #[test]
    fn out8_test() {
        let mut bp = BitPacker::new(100);
        bp.out8(b'!');
        bp.out8(b' ');
        assert_eq!(bp.finish().unwrap(), "! ".as_bytes());
    }

    #[test]
    fn out_bit_and_loc_test() {
        let mut bp = BitPacker::new(100);
        for &bit in &[false, false, true, false, false, false, false, true] {
            bp.out_bit(bit);
        }
        assert_eq!("[1.0]", &bp.loc());
        bp.out_bit(true);
        bp.out_bit(true);
        assert_eq!("[1.2]", &bp.loc());
        bp.out_zeros(6);
        assert_eq!(bp.finish().unwrap(), vec![33, 0b1100_0000]);
    }

    #[test]
    fn unaligned_header_and_code_test() {
        let mut bp = BitPacker::new(100);
        bp.out_code(&[true, false, true]);
        bp.out8(0xff);
        bp.out_zeros(5);
        assert_eq!(bp.finish().unwrap(), vec![0b1011_1111, 0b1110_0000]);
    }

    #[test]
    fn leftover_bits_test() {
        let mut bp = BitPacker::new(100);
        bp.out8(7);
        bp.out_bit(true);
        assert!(matches!(
            bp.finish(),
            Err(HuffError::InvariantViolation { .. })
        ));
    }
}
