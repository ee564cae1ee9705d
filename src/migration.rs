//! The migration router.
//!
//! After reproduction, each child's home-island gene names its destination.
//! Children whose gene matches the island that produced them stay; the rest
//! join a generation-wide emigrant pool and are delivered once every island
//! has been processed, in the order they were produced.

use crate::individual::Individual;
use crate::island::Island;

/// Partitions an island's freshly produced children into keepers and
/// emigrants, preserving relative order in both halves.
///
/// `island_index` is the producing island's physical (0-based) index; a
/// child stays exactly when its home-island gene equals it.
pub fn split_emigrants(
    children: Vec<Individual>,
    island_index: usize,
) -> (Vec<Individual>, Vec<Individual>) {
    children
        .into_iter()
        .partition(|child| child.home_island() == island_index)
}

/// Appends every emigrant to the island its home-island gene names.
///
/// Delivery order is the pool order, so a seeded run is reproducible.
pub fn deliver(islands: &mut [Island], emigrants: Vec<Individual>) {
    for emigrant in emigrants {
        let destination = emigrant.home_island();
        debug_assert!(destination < islands.len(), "home island out of range");
        islands[destination].push(emigrant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::Landscape;

    fn individual(home: usize, first_bit: bool) -> Individual {
        Individual::new(vec![first_bit, false], home, &Landscape::LeadingOnes)
    }

    #[test]
    fn test_split_partitions_by_home_island() {
        let children = vec![
            individual(1, true),
            individual(0, false),
            individual(1, false),
            individual(2, true),
        ];
        let (keep, emigrate) = split_emigrants(children, 1);
        assert_eq!(keep.len(), 2);
        assert_eq!(emigrate.len(), 2);
        assert!(keep.iter().all(|c| c.home_island() == 1));
        assert!(emigrate.iter().all(|c| c.home_island() != 1));
    }

    #[test]
    fn test_split_preserves_order() {
        let children = vec![
            individual(0, true),
            individual(1, true),
            individual(0, false),
        ];
        let (keep, emigrate) = split_emigrants(children, 0);
        assert_eq!(keep[0].bits()[0], true);
        assert_eq!(keep[1].bits()[0], false);
        assert_eq!(emigrate.len(), 1);
    }

    #[test]
    fn test_split_everything_stays() {
        let children = vec![individual(2, true), individual(2, false)];
        let (keep, emigrate) = split_emigrants(children, 2);
        assert_eq!(keep.len(), 2);
        assert!(emigrate.is_empty());
    }

    #[test]
    fn test_deliver_appends_to_declared_target() {
        let mut islands = vec![Island::new(), Island::new(), Island::new()];
        islands[0].push(individual(0, true));
        deliver(
            &mut islands,
            vec![individual(2, true), individual(0, false), individual(2, false)],
        );
        assert_eq!(islands[0].len(), 2);
        assert_eq!(islands[1].len(), 0);
        assert_eq!(islands[2].len(), 2);
        // Pool order preserved at the destination.
        assert_eq!(islands[2].members()[0].bits()[0], true);
        assert_eq!(islands[2].members()[1].bits()[0], false);
    }
}
