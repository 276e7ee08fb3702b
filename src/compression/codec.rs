use log::info;

use super::{compress::encode, decompress::decode};
use crate::error::Result;
use crate::huffman_coding::{code_table::CodeTable, huffman::HuffmanTree};
use crate::tools::freq_count::FreqTable;

/// One compression session: the frequency table, tree and code table built for one input.
///
/// The code table is not written into the packed stream, so the same session that
/// compressed the data has to decompress it.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    freqs: FreqTable,
    tree: Option<HuffmanTree>,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Build a session for `data`. Empty data gives an empty session, which packs empty
    /// input to an empty stream and nothing else.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        let freqs = FreqTable::from_data(data);
        if freqs.is_empty() {
            info!("Input is empty, nothing to build a tree from.");
            return Ok(Self::default());
        }
        Self::from_frequencies(&freqs)
    }

    /// Build a session from counts gathered elsewhere.
    pub fn from_frequencies(freqs: &FreqTable) -> Result<Self> {
        let tree = HuffmanTree::build(freqs)?;
        tree.log_structure();
        let table = CodeTable::from_tree(&tree);
        info!(
            "Code table ready: {} symbols, longest code {} bits.",
            table.len(),
            table.max_code_len()
        );
        Ok(Self {
            freqs: freqs.clone(),
            tree: Some(tree),
            table,
        })
    }

    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        encode(data, &self.table)
    }

    pub fn decompress(&self, packed: &[u8]) -> Result<Vec<u8>> {
        decode(packed, &self.table)
    }

    pub fn frequencies(&self) -> &FreqTable {
        &self.freqs
    }

    /// None for a session built from empty input.
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }
}

/// Build a session for `data` and compress it in one go.
pub fn compress(data: &[u8]) -> Result<(HuffmanCodec, Vec<u8>)> {
    let codec = HuffmanCodec::from_data(data)?;
    let packed = codec.compress(data)?;
    Ok((codec, packed))
}
