use divan::black_box;

use red_tiles::{part1, part2};

fn main() {
    divan::main();
}

/// Staircase outline with `steps` steps: `2 * steps + 2` vertices, every
/// consecutive pair axis-aligned.
fn staircase(steps: i64) -> String {
    let mut out = String::new();
    out.push_str("0,0\n");
    out.push_str(&format!("0,{steps}\n"));
    for k in 0..steps {
        out.push_str(&format!("{},{}\n", k + 1, steps - k));
        out.push_str(&format!("{},{}\n", k + 1, steps - k - 1));
    }
    out
}

#[divan::bench(args = [64, 256, 1024])]
fn part1(bencher: divan::Bencher, steps: i64) {
    let input = staircase(steps);
    bencher.bench(|| part1::process(black_box(&input)).unwrap());
}

#[divan::bench(args = [64, 256, 1024])]
fn part2(bencher: divan::Bencher, steps: i64) {
    let input = staircase(steps);
    bencher.bench(|| part2::process(black_box(&input)).unwrap());
}
