//! Option sampler - draws the flowers offered for one question.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{FlowerOption, OptionCatalog, OptionId};
use crate::ports::RandomSource;

/// The flowers offered for one question, in presentation order.
///
/// # Invariants
///
/// - every element comes from the catalog it was sampled from
/// - no two elements share an id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet(Vec<FlowerOption>);

impl OptionSet {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn options(&self) -> &[FlowerOption] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlowerOption> {
        self.0.iter()
    }

    pub fn get(&self, id: &OptionId) -> Option<&FlowerOption> {
        self.0.iter().find(|option| option.id() == id)
    }

    pub fn contains(&self, id: &OptionId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a FlowerOption;
    type IntoIter = std::slice::Iter<'a, FlowerOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Draws `size` distinct options uniformly without replacement, in random order.
///
/// A `size` larger than the catalog is capped at the catalog length.
pub fn sample(catalog: &OptionCatalog, size: usize, random: &mut dyn RandomSource) -> OptionSet {
    let mut pool = catalog.list().to_vec();
    let size = size.min(pool.len());

    // Partial Fisher-Yates: positions 0..size end up holding the draw.
    for i in 0..size {
        let j = i + random.next_index(pool.len() - i);
        pool.swap(i, j);
    }
    pool.truncate(size);

    OptionSet(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::{ScriptedRandom, SystemRandom};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ids(set: &OptionSet) -> Vec<&str> {
        set.iter().map(|option| option.id().as_str()).collect()
    }

    #[test]
    fn scripted_draw_picks_expected_flowers() {
        let catalog = OptionCatalog::standard();
        // 0 keeps rose in front; 1 + 2 swaps hibiscus into second place
        let set = sample(catalog, 2, &mut ScriptedRandom::new(vec![0, 2]));
        assert_eq!(ids(&set), vec!["rose", "hibiscus"]);
    }

    #[test]
    fn draw_order_is_randomized() {
        let catalog = OptionCatalog::standard();
        let set = sample(catalog, 3, &mut ScriptedRandom::new(vec![7, 6, 0]));
        assert_eq!(ids(&set), vec!["leaf", "rose", "cherry-blossom"]);
    }

    #[test]
    fn oversized_request_is_capped_at_catalog_length() {
        let catalog = OptionCatalog::standard();
        let set = sample(catalog, 20, &mut SystemRandom::seeded(7));
        assert_eq!(set.len(), catalog.len());
    }

    #[test]
    fn zero_size_gives_empty_set() {
        let set = sample(OptionCatalog::standard(), 0, &mut SystemRandom::seeded(1));
        assert!(set.is_empty());
    }

    #[test]
    fn option_set_lookup_by_id() {
        let catalog = OptionCatalog::standard();
        let set = sample(catalog, 2, &mut ScriptedRandom::new(vec![0, 0]));

        assert!(set.contains(&OptionId::new("rose")));
        assert!(set.contains(&OptionId::new("sunflower")));
        assert!(!set.contains(&OptionId::new("leaf")));
        assert_eq!(set.get(&OptionId::new("rose")).unwrap().meaning(), "Yes");
    }

    proptest! {
        #[test]
        fn sample_is_exact_size_distinct_and_from_catalog(size in 0usize..=8, seed in any::<u64>()) {
            let catalog = OptionCatalog::standard();
            let set = sample(catalog, size, &mut SystemRandom::seeded(seed));

            prop_assert_eq!(set.len(), size);
            let unique: HashSet<_> = set.iter().map(|o| o.id().clone()).collect();
            prop_assert_eq!(unique.len(), size);
            for option in &set {
                prop_assert!(catalog.contains(option));
            }
        }
    }
}
