use rustc_hash::FxHashMap;

/// Occurrence count of every distinct byte in a piece of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreqTable {
    counts: FxHashMap<u8, usize>,
}

impl FreqTable {
    /// Returns a frequency count of the input data. Bytes that never occur get no entry.
    pub fn from_data(data: &[u8]) -> Self {
        let mut counts = FxHashMap::default();
        data.iter().for_each(|&el| *counts.entry(el).or_insert(0) += 1);
        Self { counts }
    }

    pub fn get(&self, symbol: u8) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of symbols counted, i.e. the length of the input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// (symbol, count) pairs in ascending symbol order. The tree builder relies on this
    /// order to number its leaves.
    pub fn sorted(&self) -> Vec<(u8, usize)> {
        let mut pairs: Vec<(u8, usize)> = self.counts.iter().map(|(&s, &c)| (s, c)).collect();
        pairs.sort_unstable();
        pairs
    }
}

impl FromIterator<(u8, usize)> for FreqTable {
    /// Build a table from explicit counts. Zero counts are dropped so every entry stays positive.
    fn from_iter<I: IntoIterator<Item = (u8, usize)>>(iter: I) -> Self {
        let mut counts = FxHashMap::default();
        for (symbol, count) in iter.into_iter().filter(|&(_, c)| c > 0) {
            *counts.entry(symbol).or_insert(0) += count;
        }
        Self { counts }
    }
}

#[cfg(test)]
mod test {
    use super::FreqTable;

    #[test]
    fn hello_test() {
        let freqs = FreqTable::from_data(b"hello");
        assert_eq!(freqs.len(), 4);
        assert_eq!(freqs.get(b'h'), Some(1));
        assert_eq!(freqs.get(b'e'), Some(1));
        assert_eq!(freqs.get(b'l'), Some(2));
        assert_eq!(freqs.get(b'o'), Some(1));
        assert_eq!(freqs.get(b'z'), None);
        assert_eq!(freqs.total(), 5);
    }

    #[test]
    fn empty_test() {
        let freqs = FreqTable::from_data(&[]);
        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
        assert!(freqs.sorted().is_empty());
    }

    #[test]
    fn sorted_test() {
        let freqs = FreqTable::from_data(b"abacba");
        assert_eq!(freqs.sorted(), vec![(b'a', 3), (b'b', 2), (b'c', 1)]);
    }

    #[test]
    fn from_iter_drops_zero_counts() {
        let freqs: FreqTable = vec![(b'x', 0), (b'y', 4)].into_iter().collect();
        assert_eq!(freqs.len(), 1);
        assert_eq!(freqs.get(b'y'), Some(4));
    }
}
