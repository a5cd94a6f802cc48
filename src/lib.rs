//! Solver for the red-tile floor puzzle: given the vertices of a simple
//! rectilinear outline, find the largest axis-aligned rectangle spanned by
//! two of its vertices, first anywhere on the floor and then constrained to
//! lie entirely within the closed outline.

pub mod parse;
pub mod part1;
pub mod part2;
