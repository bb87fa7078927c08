use std::time::Instant;

use crate::pentrix::prelude::*;

/// Keeps the first shape of every rotation class, in stream order, each expanded into its full rotation cycle.
///
/// A shape is a duplicate when its normalized form already appears in the cycle of a kept entry.
pub fn dedup_rotations(shapes: impl IntoIterator<Item = Shape>) -> Vec<RotationCycle> {
    let mut known: HashSet<Shape> = HashSet::new();
    let mut cycles = vec![];
    for shape in shapes {
        let normalized = shape.normalize();
        if known.contains(&normalized) {
            continue;
        }
        let cycle = normalized.rotation_cycle();
        known.extend(cycle.iter().cloned());
        cycles.push(cycle);
    }
    cycles
}

/// Grows every fixed polyomino of `n` cells one level at a time. Each level keeps only distinct normalized
/// shapes, so duplicate construction orders are pruned before they multiply.
fn grow_fixed(n: usize) -> BTreeSet<Shape> {
    let mut level = BTreeSet::from([Shape::from_iter([Coord::origin()])]);
    for _ in 1..n {
        level = level
            .iter()
            .flat_map(|shape| {
                shape
                    .iter()
                    .flat_map(|cell| cell.neighbours())
                    .filter(|next| !shape.contains(next))
                    .map(|next| shape.with(next).normalize())
                    .collect::<Vec<_>>()
            })
            .collect();
    }
    level
}

/// Builds the catalog entry list for size `n`: every polyomino of `n` cells counted once up to rotation
/// (reflections stay distinct), with its full rotation cycle.
pub fn generate_catalog(n: usize) -> Result<Vec<RotationCycle>> {
    if n == 0 || n > MAX_FIGURE_SIZE {
        return Err(anyhow!("polyomino size {n} out of range; expected 1 to {MAX_FIGURE_SIZE}"));
    }
    let timer = Instant::now();
    let cycles = dedup_rotations(grow_fixed(n));
    log::debug!("generated {} figures of size {n} in {:?}", cycles.len(), timer.elapsed());
    Ok(cycles)
}
