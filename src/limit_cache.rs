use dashmap::DashMap;

/// Memoized digit limits keyed by upper-cased country code.
///
/// `None` is cached too: a country without an example number stays without
/// one for the lifetime of the facility.
pub struct LimitCache {
    cache: DashMap<String, Option<usize>>,
}

impl LimitCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_or_insert_with<F>(&self, country_code: &str, compute: F) -> Option<usize>
    where
        F: FnOnce() -> Option<usize>,
    {
        if let Some(limit) = self.cache.get(country_code).map(|entry| *entry.value()) {
            return limit;
        }
        *self
            .cache
            .entry(country_code.to_string())
            .or_insert_with(compute)
            .value()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for LimitCache {
    fn default() -> Self {
        Self::new()
    }
}
