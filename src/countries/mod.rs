mod country;
mod country_data;
mod registry;

use std::sync::LazyLock;

pub use country::Country;
pub use registry::CountryRegistry;

/// Process-wide registry over the built-in table, loaded on first use.
pub static REGISTRY: LazyLock<CountryRegistry> = LazyLock::new(CountryRegistry::built_in);
