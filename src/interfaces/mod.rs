//! Collaborator contracts consumed by the normalizer and the input
//! controller. They isolate the underlying phone metadata implementation so
//! a different one can be swapped in easily.

use crate::{
    countries::Country,
    phoneinput::{
        ExampleNumber,
        errors::{ExampleNumberError, FormattingFault},
    },
};

pub trait ValidityApi {
    /// Returns whether the given E.164 string is a valid phone number.
    fn is_valid_phone_number(&self, e164: &str) -> bool;
}

pub trait AsYouTypeFormatterApi {
    /// Renders national digits typed so far into a display string for the
    /// given country. May fail for unsupported countries or input it can't
    /// make sense of.
    fn format_as_you_type(&self, country: &Country, digits: &str) -> Result<String, FormattingFault>;
}

pub trait ExampleNumberApi {
    /// Returns a representative valid number for the country.
    fn get_example_number(&self, country_code: &str) -> Result<ExampleNumber, ExampleNumberError>;
}

/// Everything the normalizer needs from the outside world.
pub trait PhoneFacility: ValidityApi + AsYouTypeFormatterApi + ExampleNumberApi + Send + Sync {}

impl<T> PhoneFacility for T where T: ValidityApi + AsYouTypeFormatterApi + ExampleNumberApi + Send + Sync {}
