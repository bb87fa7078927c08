use rand::Rng;

use super::prelude::*;

/// Draws random figures from the catalog for spawning.
///
/// Uniform mode picks evenly among every figure of every configured size, so sizes with more figures come up
/// more often. Balanced mode first picks a size evenly, then a figure of that size.
#[derive(Clone, Debug)]
pub struct PieceSelector<'a> {
    /// One non-empty pool per configured size.
    pools: Vec<&'a [RotationCycle]>,

    /// Every figure of every configured size.
    flat: Vec<&'a RotationCycle>,

    balance: bool,
}

impl<'a> PieceSelector<'a> {
    /// Builds a selector over the given sizes, each of which must be present in the catalog.
    pub fn new(catalog: &'a Catalog, sizes: &BTreeSet<usize>, balance: bool) -> Result<PieceSelector<'a>> {
        if sizes.is_empty() {
            return Err(anyhow!("at least one figure size is required"));
        }
        let pools = sizes.iter().map(|&size| catalog.figures(size)).collect::<Result<Vec<_>>>()?;
        if let Some(empty) = pools.iter().position(|pool| pool.is_empty()) {
            return Err(anyhow!("catalog holds no figures for size {}", sizes.iter().nth(empty).unwrap_or(&0)));
        }
        let flat = pools.iter().flat_map(|pool| pool.iter()).collect();
        Ok(PieceSelector { pools, flat, balance })
    }

    /// Picks the next figure, showing its first orientation.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Piece {
        let cycle = if self.balance {
            let pool = self.pools[rng.gen_range(0..self.pools.len())];
            &pool[rng.gen_range(0..pool.len())]
        } else {
            self.flat[rng.gen_range(0..self.flat.len())]
        };
        Piece::from_cycle(cycle.clone())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::pentrix::prelude::*;

    fn catalog() -> Catalog {
        Catalog::generate([1, 2, 3, 5]).unwrap()
    }

    #[test]
    fn draws_only_configured_sizes() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        for balance in [false, true] {
            let selector = PieceSelector::new(&catalog, &BTreeSet::from([1, 3]), balance).unwrap();
            for _ in 0..200 {
                let size = selector.choose(&mut rng).size();
                assert!(size == 1 || size == 3);
            }
        }
    }

    #[test]
    fn balance_evens_out_sizes() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let sizes = BTreeSet::from([1, 5]);

        let uniform = PieceSelector::new(&catalog, &sizes, false).unwrap();
        let monominoes = (0..2000).filter(|_| uniform.choose(&mut rng).size() == 1).count();
        assert!(monominoes < 400, "1 of 19 figures should rarely come up, got {monominoes}");

        let balanced = PieceSelector::new(&catalog, &sizes, true).unwrap();
        let monominoes = (0..2000).filter(|_| balanced.choose(&mut rng).size() == 1).count();
        assert!((700..1300).contains(&monominoes), "expected about half, got {monominoes}");
    }

    #[test]
    fn rejects_missing_sizes() {
        let catalog = catalog();
        assert!(PieceSelector::new(&catalog, &BTreeSet::new(), false).is_err());
        assert!(PieceSelector::new(&catalog, &BTreeSet::from([4]), false).is_err());
    }
}
