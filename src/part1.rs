use itertools::Itertools;
use miette::*;

use crate::parse::{self, Point};

/// Inclusive tile area of the axis-aligned rectangle cornered on `a` and `b`.
///
/// Coordinates name whole tiles, so a rectangle spanning equal corners still
/// covers one tile.
fn bounding_area(a: Point, b: Point) -> u64 {
    let width = (a.x - b.x).unsigned_abs() + 1;
    let height = (a.y - b.y).unsigned_abs() + 1;
    width * height
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let vertices = parse::vertices(input)?;

    // Every unordered pair of vertices spans a candidate; the outline
    // between them is irrelevant for this part.
    let best = vertices
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| bounding_area(a, b))
        .max()
        .unwrap_or(0);

    Ok(best.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
        assert_eq!("50", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case::empty("", "0")]
    #[case::single_vertex("4,2", "0")]
    #[case::rectangle("0,0\n0,3\n5,3\n5,0", "24")]
    #[case::negative_rectangle("-2,-1\n-2,2\n3,2\n3,-1", "24")]
    #[case::diagonal_pair("0,0\n3,4", "20")]
    fn spans_any_two_vertices(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
