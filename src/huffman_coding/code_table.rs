//! Symbol to bit-string mapping (and its inverse) derived from a huffman tree.
//!
//! Codes are held as `Vec<bool>`, `false` for a `0` bit and `true` for a `1` bit. Every symbol
//! sits on its own leaf and no leaf is an ancestor of another, so the codes are prefix-free.

use rustc_hash::FxHashMap;

use super::huffman::{HuffmanTree, Node, NodeData};
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FreqTable;

pub type Code = Vec<bool>;

/// Render a code as a string of '0' and '1'.
pub fn code_to_string(code: &[bool]) -> String {
    code.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

/// Parse a string of '0' and '1' into a code. `None` if any other character shows up.
pub fn parse_code(bits: &str) -> Option<Code> {
    bits.chars()
        .map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<u8, Code>,
    reverse: FxHashMap<Code, u8>,
    max_code_len: usize,
}

impl CodeTable {
    /// Walk the tree depth first, left branch before right, recording the path to every leaf.
    /// A tree made of a single leaf gets the one-bit code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        let root = tree.root();

        if let NodeData::Leaf(symbol) = root.node_data {
            table.insert(symbol, vec![false]);
            return table;
        }

        let mut stack: Vec<(&Node, Code)> = vec![(root, Vec::new())];
        while let Some((node, path)) = stack.pop() {
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    let mut left_path = path;
                    left_path.push(false);
                    // Pushed last, so the left subtree is visited first.
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
                NodeData::Leaf(symbol) => table.insert(*symbol, path),
            }
        }
        table
    }

    fn insert(&mut self, symbol: u8, code: Code) {
        self.max_code_len = self.max_code_len.max(code.len());
        self.reverse.insert(code.clone(), symbol);
        self.codes.insert(symbol, code);
    }

    pub fn code(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// Reverse lookup: the symbol whose code is exactly `code`.
    pub fn symbol(&self, code: &[bool]) -> Option<u8> {
        self.reverse.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> {
        let mut entries: Vec<(u8, &[bool])> = self
            .codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_slice()))
            .collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries.into_iter()
    }

    /// Number of bits the symbols counted in `freqs` take once encoded.
    pub fn encoded_bit_len(&self, freqs: &FreqTable) -> Result<usize> {
        freqs.sorted().into_iter().try_fold(0, |bits, (symbol, count)| {
            let code = self.code(symbol).ok_or(HuffError::UnknownSymbol(symbol))?;
            Ok(bits + count * code.len())
        })
    }
}

#[cfg(test)]
mod test {
    use super::{code_to_string, parse_code, CodeTable};
    use crate::huffman_coding::huffman::HuffmanTree;
    use crate::tools::freq_count::FreqTable;

    fn table_for(data: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&FreqTable::from_data(data)).unwrap())
    }

    fn code_str(table: &CodeTable, symbol: u8) -> String {
        code_to_string(table.code(symbol).unwrap())
    }

    #[test]
    fn hello_codes_test() {
        let table = table_for(b"hello");
        assert_eq!(code_str(&table, b'e'), "00");
        assert_eq!(code_str(&table, b'h'), "01");
        assert_eq!(code_str(&table, b'o'), "10");
        assert_eq!(code_str(&table, b'l'), "11");
        assert_eq!(table.symbol(&parse_code("11").unwrap()), Some(b'l'));
        assert_eq!(table.symbol(&parse_code("1").unwrap()), None);
        assert_eq!(table.max_code_len(), 2);
    }

    #[test]
    fn parse_code_test() {
        assert_eq!(parse_code("0110"), Some(vec![false, true, true, false]));
        assert_eq!(parse_code(""), Some(Vec::new()));
        assert_eq!(parse_code("01x0"), None);
        assert_eq!(parse_code("012"), None);
        assert_eq!(code_to_string(&parse_code("1001").unwrap()), "1001");
    }

    #[test]
    fn abacba_codes_test() {
        let table = table_for(b"abacba");
        assert_eq!(code_str(&table, b'a'), "0");
        assert_eq!(code_str(&table, b'c'), "10");
        assert_eq!(code_str(&table, b'b'), "11");
    }

    #[test]
    fn single_symbol_code_test() {
        let table = table_for(b"aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(code_str(&table, b'a'), "0");
        assert_eq!(table.symbol(&[false]), Some(b'a'));
    }

    #[test]
    fn prefix_free_test() {
        let table = table_for(b"It was the best of times, it was the worst of times.");
        let codes: Vec<&[bool]> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{} prefixes {}", code_to_string(a), code_to_string(b));
                }
            }
        }
    }

    #[test]
    fn iter_is_sorted_test() {
        let table = table_for(b"zyxzyz");
        let symbols: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'x', b'y', b'z']);
    }

    #[test]
    fn encoded_bit_len_test() {
        let freqs = FreqTable::from_data(b"hello");
        let table = table_for(b"hello");
        assert_eq!(table.encoded_bit_len(&freqs).unwrap(), 10);
        assert!(table.encoded_bit_len(&FreqTable::from_data(b"q")).is_err());
    }

    #[test]
    fn deep_tree_codes_test() {
        let freqs: FreqTable = (0..40_u8).map(|i| (i, 1_usize << i)).collect();
        let table = CodeTable::from_tree(&HuffmanTree::build(&freqs).unwrap());
        assert_eq!(table.max_code_len(), 39);
        assert_eq!(table.code(39).unwrap().len(), 1);
    }
}
