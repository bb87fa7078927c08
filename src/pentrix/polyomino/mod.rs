pub mod catalog;
pub mod generator;

use super::prelude::*;

use itertools::Itertools;
pub use catalog::{dedup_rotations, generate_catalog};
pub use generator::{generate_all, RawShapes};

/// Precomputed figures for every requested size, each listed once with its full rotation cycle.
///
/// Built once per process and shared read-only by every session and selector.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    figures: BTreeMap<usize, Vec<RotationCycle>>,
}

impl Catalog {
    /// Generates the figures of every given size. Duplicated sizes are generated once.
    pub fn generate(sizes: impl IntoIterator<Item = usize>) -> Result<Catalog> {
        let mut figures = BTreeMap::new();
        for size in sizes.into_iter().sorted().dedup() {
            let cycles = generate_catalog(size).with_context(|| format!("cannot build figures of size {size}"))?;
            figures.insert(size, cycles);
        }
        log::info!("catalog ready with figure sizes [{}]", figures.keys().join(", "));
        Ok(Catalog { figures })
    }

    /// The sizes this catalog was generated for, ascending.
    pub fn available_sizes(&self) -> Vec<usize> {
        self.figures.keys().copied().collect()
    }

    /// The figures of one size.
    pub fn figures(&self, size: usize) -> Result<&[RotationCycle]> {
        self.figures
            .get(&size)
            .map(|v| v.as_slice())
            .ok_or_else(|| anyhow!("figures of size {size} were not generated; available: [{}]", self.figures.keys().join(", ")))
    }

    /// Whether figures of the given size are available.
    pub fn has_size(&self, size: usize) -> bool {
        self.figures.contains_key(&size)
    }

    /// Total number of figures across every size.
    pub fn len(&self) -> usize {
        self.figures.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}
