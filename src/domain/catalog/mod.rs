//! Flower catalog - the fixed inventory of symbolic answers.

mod registry;
mod option;

pub use registry::OptionCatalog;
pub use option::{FlowerOption, OptionId};
