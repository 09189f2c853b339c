// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use super::{errors::FormattingFault, helper_constants::LIMIT_CACHE_CAPACITY};
use crate::{
    countries::{Country, CountryRegistry, REGISTRY},
    interfaces::PhoneFacility,
    limit_cache::LimitCache,
    metadata_based_facility::MetadataBasedFacility,
};

/// Stateless phone number operations shared by every input field: digit
/// limits, E.164 compose/decompose, validity and display formatting.
///
/// Digit limits and decomposition live in `digit_limiter.rs` and
/// `e164_codec.rs`.
pub struct PhoneNumberNormalizer {
    /// Country table used for dial-code resolution.
    pub(super) registry: &'static CountryRegistry,

    /// An API for example numbers, validity checking and display formatting.
    pub(super) facility: Box<dyn PhoneFacility>,

    /// Digit limits already derived from example numbers.
    pub(crate) limits: LimitCache,
}

impl PhoneNumberNormalizer {
    pub(super) fn new() -> Self {
        Self::with_facility(&REGISTRY, Box::new(MetadataBasedFacility::new()))
    }

    pub fn with_facility(registry: &'static CountryRegistry, facility: Box<dyn PhoneFacility>) -> Self {
        Self {
            registry,
            facility,
            limits: LimitCache::with_capacity(LIMIT_CACHE_CAPACITY),
        }
    }

    pub fn registry(&self) -> &'static CountryRegistry {
        self.registry
    }

    /// Country a fresh input starts with: the hinted one if the registry
    /// knows it, the first registry row otherwise.
    pub fn default_country(&self, default_country_code: Option<&str>) -> Option<Country> {
        default_country_code
            .and_then(|code| self.registry.find_by_code(code))
            .or_else(|| self.registry.first())
    }

    /// Validity of a canonical value. The empty value is never valid.
    pub fn is_valid(&self, canonical_value: &str) -> bool {
        if canonical_value.is_empty() {
            return false;
        }
        let valid = self.facility.is_valid_phone_number(canonical_value);
        trace!("Number '{canonical_value}' validity: {valid}");
        valid
    }

    /// Display form of national digits. Errors are cosmetic, callers show
    /// the raw digits instead.
    pub fn format_for_display(&self, country: &Country, digits: &str) -> Result<String, FormattingFault> {
        self.facility.format_as_you_type(country, digits)
    }
}
