pub mod countries;
pub mod interfaces;
pub mod phoneinput;
mod limit_cache;
mod metadata_based_facility;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use countries::{Country, CountryRegistry, REGISTRY};
pub use metadata_based_facility::MetadataBasedFacility;
pub use phoneinput::{
    CountryResolution, DecomposedNumber, ExampleNumber, PHONE_NUMBER_NORMALIZER, PhoneEditState,
    PhoneInput, PhoneInputProps, PhoneInputSnapshot, PhoneNumberNormalizer, compose,
    errors::{ExampleNumberError, FormattingFault, PhoneInputFault},
};
