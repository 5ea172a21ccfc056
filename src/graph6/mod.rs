//! The graph6 textual encoding.
//!
//! The first byte is `63 + n` for a graph of order `n`. The following bytes
//! carry 6 bits each (`byte - 63`, most significant bit first), one bit per
//! vertex pair `(u, v)`, enumerated as `v = 1..n`, `u = 0..v`. A set bit
//! means `{u, v}` is an edge.

pub use parser::decode;
pub use reader::{read_file, Reader};
pub use writer::encode;

mod parser;
mod reader;
mod writer;

use crate::types::VId;

/// The offset added to every 6-bit value.
pub(crate) const BIAS: u8 = 63;

/// Number of body bytes a graph of order `n` needs.
pub(crate) fn body_len(n: usize) -> usize {
    let num_pairs = n * n.saturating_sub(1) / 2;
    (num_pairs + 5) / 6
}

/// The vertex pairs of a graph of order `n` in bit order.
pub(crate) fn pairs(n: usize) -> impl Iterator<Item = (VId, VId)> {
    (1..n).flat_map(|v| (0..v).map(move |u| (u, v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_len() {
        assert_eq!(body_len(0), 0);
        assert_eq!(body_len(1), 0);
        assert_eq!(body_len(2), 1);
        assert_eq!(body_len(4), 1);
        assert_eq!(body_len(5), 2);
        assert_eq!(body_len(16), 20);
    }

    #[test]
    fn test_pairs() {
        assert_eq!(
            pairs(4).collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (2, 3)]
        );
        assert_eq!(pairs(1).count(), 0);
    }
}
