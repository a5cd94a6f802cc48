use miette::*;

use red_tiles::{part1, part2};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let input = std::io::read_to_string(std::io::stdin())
        .map_err(|e| miette!("Failed to read input: {e}"))?;

    // Both answers are computed before either prints, so an invalid outline
    // never produces partial output.
    let part1 = part1::process(&input)?;
    let part2 = part2::process(&input)?;

    println!("Part 1: {}", part1);
    println!("Part 2: {}", part2);
    Ok(())
}
