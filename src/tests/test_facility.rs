use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    countries::Country,
    interfaces::{AsYouTypeFormatterApi, ExampleNumberApi, ValidityApi},
    phoneinput::{
        ExampleNumber,
        errors::{ExampleNumberError, FormattingFault},
    },
};

/// Deterministic collaborator with a handful of example numbers.
///
/// A number is valid when its national part is exactly as long as the
/// example of some country with the same calling code.
pub struct TestFacility {
    examples: HashMap<&'static str, ExampleNumber>,
    fail_formatting: bool,
    example_lookups: Arc<AtomicUsize>,
}

impl TestFacility {
    pub fn new() -> Self {
        let examples = [
            ("US", ExampleNumber::new(1, "2015550123")),
            ("CA", ExampleNumber::new(1, "5062345678")),
            ("AI", ExampleNumber::new(1, "2642351234")),
            ("GB", ExampleNumber::new(44, "7400123456")),
            ("JE", ExampleNumber::new(44, "7797712345")),
            ("KZ", ExampleNumber::new(7, "7710009998")),
            ("RU", ExampleNumber::new(7, "9123456789")),
            ("AU", ExampleNumber::new(61, "412345678")),
            ("DE", ExampleNumber::new(49, "15123456789")),
        ]
        .into_iter()
        .collect();

        Self {
            examples,
            fail_formatting: false,
            example_lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Formatter that fails for every input.
    pub fn with_failing_formatter(mut self) -> Self {
        self.fail_formatting = true;
        self
    }

    pub fn with_lookup_counter(mut self, counter: Arc<AtomicUsize>) -> Self {
        self.example_lookups = counter;
        self
    }
}

impl ValidityApi for TestFacility {
    fn is_valid_phone_number(&self, e164: &str) -> bool {
        let Some(digits) = e164.strip_prefix('+') else {
            return false;
        };
        self.examples.values().any(|example| {
            let calling_code = example.country_calling_code.to_string();
            digits.starts_with(&calling_code)
                && digits.len() == calling_code.len() + example.national_number.len()
        })
    }
}

impl AsYouTypeFormatterApi for TestFacility {
    fn format_as_you_type(&self, country: &Country, digits: &str) -> Result<String, FormattingFault> {
        if self.fail_formatting {
            return Err(FormattingFault::Unparsable(digits.to_owned()));
        }
        if !self.examples.contains_key(country.code) {
            return Err(FormattingFault::UnsupportedCountry(country.code.to_owned()));
        }
        // groups of three: "555 123 456 7"
        let groups: Vec<&str> = digits
            .as_bytes()
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok())
            .collect();
        Ok(groups.join(" "))
    }
}

impl ExampleNumberApi for TestFacility {
    fn get_example_number(&self, country_code: &str) -> Result<ExampleNumber, ExampleNumberError> {
        self.example_lookups.fetch_add(1, Ordering::SeqCst);
        self.examples
            .get(country_code)
            .cloned()
            .ok_or_else(|| ExampleNumberError::UnknownCountry(country_code.to_owned()))
    }
}
