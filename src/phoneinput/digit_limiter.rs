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

use log::{debug, warn};

use super::{
    PhoneNumberNormalizer, errors::PhoneInputFault,
    helper_constants::MAX_LENGTH_FOR_NATIONAL_NUMBER,
};
use crate::string_util::normalize_digits;

impl PhoneNumberNormalizer {
    /// Maximum count of national digits accepted for `country_code`.
    ///
    /// Derived from the country's example number. `preferred_country_code`
    /// stands in when `country_code` has no example and both share a dial
    /// code. Falls back to [`MAX_LENGTH_FOR_NATIONAL_NUMBER`] otherwise.
    pub fn max_digits(&self, country_code: &str, preferred_country_code: Option<&str>) -> usize {
        self.max_digits_with_fault(country_code, preferred_country_code).0
    }

    pub(crate) fn max_digits_with_fault(
        &self,
        country_code: &str,
        preferred_country_code: Option<&str>,
    ) -> (usize, Option<PhoneInputFault>) {
        if let Some(limit) = self.example_digit_count(country_code) {
            return (limit, None);
        }

        let preferred_limit = preferred_country_code
            .filter(|preferred| self.shares_dial_code(country_code, preferred))
            .and_then(|preferred| self.example_digit_count(preferred));
        if let Some(limit) = preferred_limit {
            debug!("Using digit limit of preferred country for {country_code}: {limit}");
            return (limit, None);
        }

        debug!(
            "No example number for {country_code}, digit limit falls back to {}",
            MAX_LENGTH_FOR_NATIONAL_NUMBER
        );
        let fault = PhoneInputFault::UnknownCountryLimit {
            country_code: country_code.to_owned(),
            fallback: MAX_LENGTH_FOR_NATIONAL_NUMBER,
        };
        (MAX_LENGTH_FOR_NATIONAL_NUMBER, Some(fault))
    }

    fn example_digit_count(&self, country_code: &str) -> Option<usize> {
        let key = country_code.to_ascii_uppercase();
        self.limits.get_or_insert_with(&key, || {
            let example = match self.facility.get_example_number(&key) {
                Ok(example) => example,
                Err(err) => {
                    debug!("No example number for {key}: {err}");
                    return None;
                }
            };
            let national_number = normalize_digits(&example.national_number);
            let mut count = national_number.len();

            // Dial codes such as "1264" (Anguilla) carry the leading national
            // digits, which are never part of the typed digits.
            if let Some(country) = self.registry.find_by_code(&key) {
                let mut buf = itoa::Buffer::new();
                let calling_code = buf.format(example.country_calling_code);
                match country.dial_code.strip_prefix(calling_code) {
                    Some(extension) if national_number.starts_with(extension) => {
                        count -= extension.len();
                    }
                    Some(_) => {}
                    None => warn!(
                        "Dial code {} of {key} disagrees with calling code {calling_code}",
                        country.dial_code
                    ),
                }
            }

            (count > 0).then_some(count)
        })
    }

    fn shares_dial_code(&self, country_code: &str, other_country_code: &str) -> bool {
        match (
            self.registry.find_by_code(country_code),
            self.registry.find_by_code(other_country_code),
        ) {
            (Some(country), Some(other)) => country.dial_code == other.dial_code,
            _ => false,
        }
    }
}
