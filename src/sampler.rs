//! Uniform random record sampling

use crate::reader::Records;
use crate::{MAX_SAMPLE_SIZE, SAMPLE_FRACTION};
use rand::Rng;

/// Number of records drawn from a population of the given size: a
/// quarter of the population, rounded down, capped at [`MAX_SAMPLE_SIZE`].
pub fn sample_size(population: usize) -> usize {
    let scaled = (population as f64 * SAMPLE_FRACTION).floor() as usize;
    scaled.min(MAX_SAMPLE_SIZE)
}

/// Draw [`sample_size`] items uniformly without replacement. The result
/// is in draw order, not input order.
pub fn draw<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let amount = sample_size(items.len());
    rand::seq::index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

/// Draw a sample from parsed records, keeping the representation (and
/// dialect) of the input.
pub fn draw_records<R: Rng + ?Sized>(records: &Records, rng: &mut R) -> Records {
    match records {
        Records::Lines(lines) => Records::Lines(draw(lines, rng)),
        Records::Rows { dialect, rows } => Records::Rows {
            dialect: *dialect,
            rows: draw(rows, rng),
        },
    }
}
