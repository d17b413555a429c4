//! Plain-text format for generator sets.
//!
//! One block per matrix, blocks separated by blank lines. Each line of a
//! block is a row of whitespace-separated entries: a non-negative integer,
//! or `-` for infinity.
//!
//! ```text
//! 0 -
//! 1 0
//!
//! - 1
//! 1 -
//! ```

use crate::error::{BoundednessError, Result};
use crate::types::Weight;
use crate::TropicalMatrix;

fn parse_entry(token: &str, line: usize) -> Result<Weight> {
    if token == "-" {
        return Ok(Weight::Infinite);
    }
    token
        .parse::<u32>()
        .map(Weight::Finite)
        .map_err(|_| BoundednessError::Parse {
            line,
            token: token.to_string(),
        })
}

fn parse_block(rows: &[Vec<Weight>]) -> Result<TropicalMatrix> {
    TropicalMatrix::from_rows(rows)
}

/// Parse a generator set. Empty input yields an empty set.
///
/// ```
/// use tropical_bounded::{parse_generators, Weight};
///
/// let gens = parse_generators("0 -\n1 0\n\n- 1\n1 -\n").unwrap();
/// assert_eq!(gens.len(), 2);
/// assert_eq!(gens[0].get(0, 1), Weight::Infinite);
/// assert_eq!(gens[1].get(1, 0), Weight::Finite(1));
/// ```
pub fn parse_generators(input: &str) -> Result<Vec<TropicalMatrix>> {
    let mut generators = Vec::new();
    let mut block: Vec<Vec<Weight>> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            if !block.is_empty() {
                generators.push(parse_block(&block)?);
                block.clear();
            }
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| parse_entry(token, line_no))
            .collect::<Result<Vec<_>>>()?;
        block.push(row);
    }
    if !block.is_empty() {
        generators.push(parse_block(&block)?);
    }
    Ok(generators)
}

/// Render a generator set so that [`parse_generators`] reads it back.
pub fn format_generators(generators: &[TropicalMatrix]) -> String {
    generators
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::mat::strategies::tropical;

    const INF: Weight = Weight::Infinite;

    fn w(v: u32) -> Weight {
        Weight::Finite(v)
    }

    #[test]
    fn test_parse_blocks() {
        let text = "0   -\n12  3\n\n\n  -  -  \n 0  7\n";
        let gens = parse_generators(text).unwrap();
        assert_eq!(gens.len(), 2);
        assert_eq!(gens[0], TropicalMatrix::from_rows(&[[w(0), INF], [w(12), w(3)]]).unwrap());
        assert_eq!(gens[1], TropicalMatrix::from_rows(&[[INF, INF], [w(0), w(7)]]).unwrap());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_generators("").unwrap().is_empty());
        assert!(parse_generators("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        match parse_generators("0 1\n-3 0\n") {
            Err(BoundednessError::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "-3");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse_generators("0 x\n1 0"),
            Err(BoundednessError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_generators("0 1.5\n1 0"),
            Err(BoundednessError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_square_block() {
        assert!(matches!(
            parse_generators("0 1 2\n1 0 2\n"),
            Err(BoundednessError::NotSquare { rows: 2, cols: 3 })
        ));
        assert!(matches!(
            parse_generators("0 1\n1\n"),
            Err(BoundednessError::NotSquare { rows: 2, cols: 1 })
        ));
    }

    #[test]
    fn test_format() {
        let a = TropicalMatrix::from_rows(&[[w(0), INF], [w(10), w(1)]]).unwrap();
        let b = TropicalMatrix::from_rows(&[[w(2)]]).unwrap();
        assert_eq!(format_generators(&[a, b]), "0   -\n10  1\n\n2");
        assert_eq!(format_generators(&[]), "");
    }

    proptest! {
        #[test]
        fn prop_format_then_parse(
            gens in (1usize..5).prop_flat_map(|n| prop::collection::vec(tropical(n), 0..4))
        ) {
            let parsed = parse_generators(&format_generators(&gens)).unwrap();
            prop_assert_eq!(parsed, gens);
        }
    }
}
