mod controller;
mod digit_limiter;
pub mod e164_codec;
pub mod enums;
pub mod errors;
pub mod helper_constants;
mod helper_types;
mod normalizer;

use std::sync::LazyLock;

pub use controller::{OnChangeText, OnValidationChange, PhoneInput, PhoneInputProps, PhoneInputSnapshot};
pub use e164_codec::compose;
pub use enums::{CountryResolution, Stimulus};
pub use helper_types::{DecomposedNumber, ExampleNumber, PhoneEditState};
pub use normalizer::PhoneNumberNormalizer;

/// Normalizer over the built-in registry and the `phonenumber` metadata.
pub static PHONE_NUMBER_NORMALIZER: LazyLock<PhoneNumberNormalizer> =
    LazyLock::new(PhoneNumberNormalizer::new);
