pub const PLUS_SIGN: &str = "+";

// Ceiling used when no example number exists for a country: the ITU
// E.164 maximum for the whole number.
pub const MAX_LENGTH_FOR_NATIONAL_NUMBER: usize = 15;

// Initial capacity of the per-country digit limit cache.
pub const LIMIT_CACHE_CAPACITY: usize = 64;
