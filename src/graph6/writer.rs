use super::{pairs, BIAS};
use crate::{graph::Graph, types::VId};
use itertools::Itertools;

/// Encode `graph` in graph6.
///
/// graph6 only knows the slots `0..n`, so the present vertices are relabeled
/// in ascending slot order. A graph whose vertices are a prefix of the slots
/// is encoded as is.
pub fn encode(graph: &Graph) -> String {
    let slots: Vec<VId> = graph.vertices().iter().collect();
    let n = slots.len();
    let mut text = String::with_capacity(1 + super::body_len(n));
    text.push((BIAS + n as u8) as char);
    let bits = pairs(n).map(|(u, v)| graph.is_edge(slots[u], slots[v]));
    for chunk in &bits.chunks(6) {
        let (group, len) = chunk.fold((0u8, 0), |(group, len), bit| {
            ((group << 1) | bit as u8, len + 1)
        });
        text.push((BIAS + (group << (6 - len))) as char);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph6::decode;
    use std::collections::BTreeSet;

    #[test]
    fn test_encode() {
        assert_eq!(encode(&Graph::new()), "?");
        assert_eq!(encode(&Graph::star(1).unwrap()), "@");
        assert_eq!(encode(&Graph::star(2).unwrap()), "A_");
        assert_eq!(encode(&Graph::star(4).unwrap()), "Cs");
    }

    #[test]
    fn test_padding() {
        let mut g = Graph::with_order(10);
        g.add_edge(8, 9).unwrap();
        assert_eq!(encode(&g), "I???????G");
    }

    #[test]
    fn test_relabel() {
        let mut g = Graph::new();
        g.add_vertex(3).unwrap();
        g.add_vertex(11).unwrap();
        g.add_vertex(14).unwrap();
        g.add_edge(3, 14).unwrap();
        g.add_edge(11, 14).unwrap();
        let h = decode(&encode(&g)).unwrap();
        assert_eq!(h.vertex_set(), vec![0, 1, 2].into_iter().collect::<BTreeSet<_>>());
        assert_eq!(h.edge_set(), vec![(0, 2), (1, 2)].into_iter().collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_decode_encode() {
        for text in &["?", "@", "A?", "Bg", "C~", "I_??????G", "ICRdlpzxo"] {
            assert_eq!(encode(&decode(text).unwrap()), *text);
        }
    }
}
