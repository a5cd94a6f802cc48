use std::collections::VecDeque;

use bitvec::prelude::*;
use miette::*;

use crate::parse::{self, Point};

// -----------------------------------------------------------------------------
// Compressed grid
// -----------------------------------------------------------------------------

/// Sorted, deduplicated coordinate values along one axis.
///
/// A coordinate's compressed index is its rank in the sorted order, so
/// distinct inputs map onto `0..len()` without gaps and relative order is
/// preserved.
#[derive(Debug, Clone)]
struct AxisMap {
    values: Vec<i64>,
}

impl AxisMap {
    fn new(coords: impl Iterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = coords.collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Rank of a coordinate the map was built from.
    #[inline]
    fn rank(&self, val: i64) -> usize {
        self.values
            .binary_search(&val)
            .expect("coordinate missing from axis map")
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

/// A dense 2D grid stored as a flattened vector, indexed by (row, col).
#[derive(Debug, Clone)]
struct Grid2D<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid2D<T> {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Grid2D<T> {
    #[inline(always)]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }

    #[inline(always)]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Cell {
    /// Not yet touched by rasterization or classification.
    #[default]
    Open,
    /// On a rasterized outline edge.
    Boundary,
    /// Reachable from the grid border without crossing the outline.
    Exterior,
    /// Enclosed by the outline.
    Interior,
}

/// A polygon vertex carrying both its original coordinates and its
/// compressed grid position, offset by the border ring.
#[derive(Debug, Clone, Copy)]
struct Vertex {
    pos: Point,
    row: usize,
    col: usize,
}

// -----------------------------------------------------------------------------
// Outline rasterization & region classification
// -----------------------------------------------------------------------------

/// Draws the outline onto a bordered grid, marking every cell each cyclic
/// edge passes through as `Boundary`.
///
/// Consecutive vertices must share a row or a column; repeated vertices are
/// fine and mark a single cell.
fn rasterize(vertices: &[Vertex], rows: usize, cols: usize) -> Result<Grid2D<Cell>> {
    let mut grid = Grid2D::new(rows, cols);

    for (i, a) in vertices.iter().enumerate() {
        let j = (i + 1) % vertices.len();
        let b = &vertices[j];

        if a.row != b.row && a.col != b.col {
            return Err(miette!(
                "Non-axial edge between vertices {} and {}: ({}, {}) -> ({}, {})",
                i,
                j,
                a.pos.x,
                a.pos.y,
                b.pos.x,
                b.pos.y
            ));
        }

        // One of the two ranges is a single index, so this walks a straight
        // segment either way.
        for r in a.row.min(b.row)..=a.row.max(b.row) {
            for c in a.col.min(b.col)..=a.col.max(b.col) {
                *grid.get_mut(r, c) = Cell::Boundary;
            }
        }
    }

    Ok(grid)
}

/// Resolves every non-boundary cell to `Exterior` or `Interior`.
///
/// Breadth-first flood fill seeded from the whole border ring: anything
/// reachable through open cells touches the grid edge and is therefore
/// outside the outline. The frontier is an explicit queue, so fill depth
/// never grows the call stack, and the visited set admits each cell once.
fn classify(grid: &mut Grid2D<Cell>) {
    let (rows, cols) = (grid.rows, grid.cols);
    let mut visited = bitvec![u64, Lsb0; 0; rows * cols];
    let mut frontier: VecDeque<(usize, usize)> = VecDeque::new();

    let border = (0..cols)
        .flat_map(|c| [(0, c), (rows - 1, c)])
        .chain((0..rows).flat_map(|r| [(r, 0), (r, cols - 1)]));
    for (r, c) in border {
        let idx = r * cols + c;
        if !visited[idx] && *grid.get(r, c) != Cell::Boundary {
            visited.set(idx, true);
            frontier.push_back((r, c));
        }
    }

    while let Some((r, c)) = frontier.pop_front() {
        for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
            let nr = r as isize + dr;
            let nc = c as isize + dc;
            if nr < 0 || nr >= rows as isize || nc < 0 || nc >= cols as isize {
                continue;
            }

            let (nr, nc) = (nr as usize, nc as usize);
            let idx = nr * cols + nc;
            if !visited[idx] && *grid.get(nr, nc) != Cell::Boundary {
                visited.set(idx, true);
                frontier.push_back((nr, nc));
            }
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let cell = grid.get_mut(r, c);
            if *cell == Cell::Open {
                *cell = if visited[r * cols + c] {
                    Cell::Exterior
                } else {
                    Cell::Interior
                };
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Containment index & search
// -----------------------------------------------------------------------------

/// Prefix sums of exterior-cell counts over the core grid, ring excluded.
///
/// `prefix.get(r, c)` holds the number of exterior cells in rows `1..=r`,
/// columns `1..=c` of the classified grid, so any inclusive sub-rectangle
/// resolves with four lookups.
#[derive(Debug)]
struct ContainmentIndex {
    prefix: Grid2D<u64>,
}

impl ContainmentIndex {
    fn build(grid: &Grid2D<Cell>) -> Self {
        let rows = grid.rows - 2;
        let cols = grid.cols - 2;
        let mut prefix = Grid2D::new(rows + 1, cols + 1);

        for r in 1..=rows {
            for c in 1..=cols {
                let exterior = u64::from(*grid.get(r, c) == Cell::Exterior);
                let sum = exterior + *prefix.get(r - 1, c) + *prefix.get(r, c - 1)
                    - *prefix.get(r - 1, c - 1);
                *prefix.get_mut(r, c) = sum;
            }
        }

        Self { prefix }
    }

    /// Number of exterior cells in the inclusive rectangle `[r1, r2] x
    /// [c1, c2]`, in ring-offset grid coordinates. Zero means the rectangle
    /// lies entirely on boundary or interior tiles.
    fn exterior_count(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> u64 {
        // Operand order keeps the intermediate sums from underflowing.
        let total = *self.prefix.get(r2, c2) + *self.prefix.get(r1 - 1, c1 - 1);
        total - *self.prefix.get(r1 - 1, c2) - *self.prefix.get(r2, c1 - 1)
    }
}

/// Finds the largest vertex-pair rectangle containing no exterior cell.
///
/// A candidate that cannot beat the running best skips the containment
/// query; area is the only criterion, so nothing is lost by the skip, and
/// ties keep the first winner.
fn largest_contained(vertices: &[Vertex], index: &ContainmentIndex) -> u64 {
    let mut best = 0;

    for (i, a) in vertices.iter().enumerate() {
        for b in vertices.iter().skip(i + 1) {
            let width = (a.pos.x - b.pos.x).unsigned_abs() + 1;
            let height = (a.pos.y - b.pos.y).unsigned_abs() + 1;
            let area = width * height;
            if area <= best {
                continue;
            }

            let (r1, r2) = (a.row.min(b.row), a.row.max(b.row));
            let (c1, c2) = (a.col.min(b.col), a.col.max(b.col));
            if index.exterior_count(r1, c1, r2, c2) == 0 {
                best = area;
            }
        }
    }

    best
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse::vertices(input)?;
    if points.len() < 2 {
        return Ok("0".to_string());
    }

    let x_map = AxisMap::new(points.iter().map(|p| p.x));
    let y_map = AxisMap::new(points.iter().map(|p| p.y));

    let vertices: Vec<Vertex> = points
        .iter()
        .map(|&pos| Vertex {
            pos,
            row: y_map.rank(pos.y) + 1,
            col: x_map.rank(pos.x) + 1,
        })
        .collect();

    // One spare ring around the compressed extent keeps every region that is
    // truly outside the outline connected to the grid edge.
    let mut grid = rasterize(&vertices, y_map.len() + 2, x_map.len() + 2)?;
    classify(&mut grid);
    let index = ContainmentIndex::build(&grid);

    Ok(largest_contained(&vertices, &index).to_string())
}
