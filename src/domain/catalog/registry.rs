//! The fixed flower catalog.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::option::{FlowerOption, OptionId};
use crate::domain::foundation::ValidationError;

static STANDARD_CATALOG: Lazy<OptionCatalog> = Lazy::new(|| OptionCatalog {
    options: vec![
        FlowerOption::new("rose", "🌹", "Rose", "Yes", "Love and passion"),
        FlowerOption::new("sunflower", "🌻", "Sunflower", "No", "Joy and positivity"),
        FlowerOption::new(
            "cherry-blossom",
            "🌸",
            "Cherry Blossom",
            "Maybe",
            "Transience and beauty",
        ),
        FlowerOption::new("hibiscus", "🌺", "Hibiscus", "Absolutely", "Courage and strength"),
        FlowerOption::new("tulip", "🌷", "Tulip", "Later", "Perfect love"),
        FlowerOption::new("daisy", "🌼", "Daisy", "Not now", "Purity and innocence"),
        FlowerOption::new("bouquet", "💐", "Bouquet", "Try everything", "Diversity"),
        FlowerOption::new("leaf", "🌿", "Leaf", "Leave it to nature", "Growth and renewal"),
    ],
});

/// Ordered, read-only registry of flower options.
///
/// # Invariants
///
/// - at least one option
/// - `id` and `label` are unique across the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCatalog {
    options: Vec<FlowerOption>,
}

impl OptionCatalog {
    /// The process-wide catalog of eight flowers.
    pub fn standard() -> &'static OptionCatalog {
        &STANDARD_CATALOG
    }

    /// Builds a custom catalog, enforcing the uniqueness invariants.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `options` is empty
    /// - `InvalidFormat` if an id or label appears twice
    pub fn from_options(options: Vec<FlowerOption>) -> Result<Self, ValidationError> {
        if options.is_empty() {
            return Err(ValidationError::empty_field("options"));
        }

        let mut ids = HashSet::new();
        let mut labels = HashSet::new();
        for option in &options {
            if !ids.insert(option.id().clone()) {
                return Err(ValidationError::invalid_format(
                    "options",
                    format!("duplicate id '{}'", option.id()),
                ));
            }
            if !labels.insert(option.label().to_string()) {
                return Err(ValidationError::invalid_format(
                    "options",
                    format!("duplicate label '{}'", option.label()),
                ));
            }
        }

        Ok(Self { options })
    }

    /// All options in stable catalog order.
    pub fn list(&self) -> &[FlowerOption] {
        &self.options
    }

    pub fn get(&self, id: &OptionId) -> Option<&FlowerOption> {
        self.options.iter().find(|option| option.id() == id)
    }

    pub fn contains(&self, option: &FlowerOption) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_eight_flowers_in_order() {
        let catalog = OptionCatalog::standard();
        let labels: Vec<&str> = catalog.list().iter().map(|o| o.label()).collect();

        assert_eq!(catalog.len(), 8);
        assert_eq!(
            labels,
            vec![
                "Rose",
                "Sunflower",
                "Cherry Blossom",
                "Hibiscus",
                "Tulip",
                "Daisy",
                "Bouquet",
                "Leaf"
            ]
        );
    }

    #[test]
    fn standard_catalog_satisfies_uniqueness() {
        let catalog = OptionCatalog::standard();
        let rebuilt = OptionCatalog::from_options(catalog.list().to_vec());
        assert_eq!(rebuilt.as_ref(), Ok(catalog));
    }

    #[test]
    fn get_finds_option_by_id() {
        let catalog = OptionCatalog::standard();
        let rose = catalog.get(&OptionId::new("rose")).unwrap();

        assert_eq!(rose.meaning(), "Yes");
        assert!(catalog.get(&OptionId::new("orchid")).is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let result = OptionCatalog::from_options(vec![
            FlowerOption::new("rose", "🌹", "Rose", "Yes", "Love"),
            FlowerOption::new("rose", "🌻", "Sunflower", "No", "Joy"),
        ]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let result = OptionCatalog::from_options(vec![
            FlowerOption::new("rose", "🌹", "Rose", "Yes", "Love"),
            FlowerOption::new("red-rose", "🌹", "Rose", "No", "Joy"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(
            OptionCatalog::from_options(Vec::new()),
            Err(ValidationError::empty_field("options"))
        );
    }
}
