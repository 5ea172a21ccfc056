use super::{body_len, pairs, BIAS};
use crate::{
    error::{EncodingError, Result},
    graph::Graph,
};
use log::debug;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "graph6/grammar.pest"]
struct Graph6Parser;

/// Decode one graph6 string.
///
/// Bytes past the ones the order requires are not interpreted, but must
/// still be valid graph6 characters.
pub fn decode(text: &str) -> Result<Graph> {
    let (mut n, mut groups) = (0, Vec::new());
    let parsed = Graph6Parser::parse(Rule::graph6, text)
        .map_err(|e| EncodingError::Syntax(e.to_string()))?;
    for pair in parsed {
        match pair.as_rule() {
            Rule::order => n = value(pair) as usize,
            Rule::group => groups.push(value(pair)),
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    let expected = body_len(n);
    if groups.len() < expected {
        return Err(EncodingError::Truncated {
            expected,
            found: groups.len(),
        }
        .into());
    }
    let bits = groups[..expected]
        .iter()
        .flat_map(|&group| (0..6).rev().map(move |k| group & (1 << k) != 0));
    let mut graph = Graph::with_order(n);
    for ((u, v), bit) in pairs(n).zip(bits) {
        if bit {
            graph.insert_edge(u, v)?;
        }
    }
    debug!(
        "decoded {:?}: {} vertices, {} edges",
        text,
        n,
        graph.number_of_edges()
    );
    Ok(graph)
}

fn value(pair: Pair<Rule>) -> u8 {
    pair.as_str().bytes().next().map_or(0, |b| b - BIAS)
}
