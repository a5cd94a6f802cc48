use chumsky::prelude::*;
use glam::I64Vec2;
use miette::*;

pub type Point = I64Vec2;

/// Parser for the vertex list: one `x,y` pair per non-blank line, in the
/// order the outline walks them.
///
/// Coordinates may be negative. Inline whitespace around the numbers and the
/// comma is tolerated, as are blank lines between vertices.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let hspace = one_of(" \t").repeated();

    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .from_str::<i64>()
        .unwrapped();

    let vertex = coord
        .then_ignore(just(',').padded_by(hspace))
        .then(coord)
        .map(|(x, y)| Point::new(x, y))
        .padded_by(hspace);

    vertex
        .separated_by(hspace.then(text::newline()).repeated().at_least(1))
        .allow_trailing()
        .collect()
        .padded()
}

/// Parses the whole input stream into the ordered vertex list.
pub fn vertices(input: &str) -> Result<Vec<Point>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Invalid coordinate list: {:?}", e))
}
