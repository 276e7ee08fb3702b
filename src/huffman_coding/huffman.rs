use log::{debug, log_enabled, trace, Level};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FreqTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: usize,
    /// Order in which the node entered the priority queue. Unique within a tree.
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: usize, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing sequence number, so the max-heap
    /// pops the lightest node first and the oldest one among equal weights.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An immutable huffman tree built from a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree bottom-up with a min-priority queue.
    ///
    /// Leaves are queued in ascending symbol order and numbered as they go in; every merged
    /// node takes the next number. Nodes are ordered by (weight, number), which makes the
    /// shape of the tree a pure function of the frequency table. The first node popped
    /// becomes the left child.
    pub fn build(freqs: &FreqTable) -> Result<Self> {
        if freqs.is_empty() {
            return Err(HuffError::EmptyInput);
        }

        let mut heap = BinaryHeap::with_capacity(freqs.len());
        let mut seq = 0_u32;
        for (symbol, weight) in freqs.sorted() {
            heap.push(Node::new(weight, seq, NodeData::Leaf(symbol)));
            seq += 1;
        }

        // Pare the queue down to one single node with child nodes.
        while heap.len() > 1 {
            let left_child = heap
                .pop()
                .ok_or_else(|| HuffError::invariant("priority queue underflow"))?;
            let right_child = heap
                .pop()
                .ok_or_else(|| HuffError::invariant("priority queue underflow"))?;
            heap.push(Node::new(
                left_child.weight + right_child.weight,
                seq,
                NodeData::Kids(Box::new(left_child), Box::new(right_child)),
            ));
            seq += 1;
        }

        let root = heap
            .pop()
            .ok_or_else(|| HuffError::invariant("priority queue drained before the root"))?;
        let tree = HuffmanTree { root };
        debug!(
            "Built huffman tree: {} symbols, weight {}, depth {}",
            tree.leaf_count(),
            tree.weight(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight, which is the length of the input the tree was built from.
    pub fn weight(&self) -> usize {
        self.root.weight
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
                NodeData::Leaf(_) => deepest = deepest.max(depth),
            }
        }
        deepest
    }

    pub fn leaf_count(&self) -> usize {
        let mut leaves = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    stack.push(right);
                    stack.push(left);
                }
                NodeData::Leaf(_) => leaves += 1,
            }
        }
        leaves
    }

    /// Dump the tree shape at trace level.
    pub fn log_structure(&self) {
        if !log_enabled!(Level::Trace) {
            return;
        }
        trace!("Huffman tree structure:");
        let mut stack = vec![(&self.root, 0_usize, "root")];
        while let Some((node, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    trace!("{}{}-> Internal [weight: {}]", indent, label, node.weight);
                    stack.push((right, depth + 1, "R"));
                    stack.push((left, depth + 1, "L"));
                }
                NodeData::Leaf(byte) => {
                    trace!(
                        "{}{}-> Leaf: {:?} [weight: {}]",
                        indent,
                        label,
                        *byte as char,
                        node.weight
                    );
                }
            }
        }
    }
}
