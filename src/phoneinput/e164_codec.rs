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

use super::{
    DecomposedNumber, PhoneNumberNormalizer, enums::CountryResolution,
    helper_constants::PLUS_SIGN,
};
use crate::string_util::{normalize_digits, strip_cow_prefix, truncate_cow};

/// Canonical `+<dial code><digits>` form. Does not apply the "cleared"
/// rule, see [`PhoneEditState::canonical_value`](super::PhoneEditState::canonical_value).
pub fn compose(dial_code: &str, raw_digits: &str) -> String {
    fast_cat::concat_str!(PLUS_SIGN, dial_code, raw_digits)
}

impl PhoneNumberNormalizer {
    /// Splits a canonical value into a country and its national digits.
    ///
    /// The longest dial code that prefixes the digits wins. When several
    /// countries share it, `preferred_country_code` is taken if it is among
    /// them, the first one in registry order otherwise. Digits are cut down
    /// to the resolved country's limit.
    ///
    /// Returns `None` for an empty value or digits that match no dial code.
    pub fn decompose(
        &self,
        canonical_value: &str,
        preferred_country_code: Option<&str>,
    ) -> Option<DecomposedNumber> {
        let digits = normalize_digits(canonical_value);
        if digits.is_empty() {
            return None;
        }

        let candidates = self.registry.match_dial_code(&digits);
        let longest = candidates.first()?.dial_code.len();
        let tied: Vec<_> = candidates
            .into_iter()
            .take_while(|country| country.dial_code.len() == longest)
            .collect();

        let preferred = preferred_country_code.and_then(|preferred| {
            tied.iter()
                .find(|country| country.code.eq_ignore_ascii_case(preferred))
                .copied()
        });
        let (country, resolution) = match preferred {
            _ if tied.len() == 1 => (tied[0], CountryResolution::Unique),
            Some(country) => (country, CountryResolution::PreferredHint),
            None => (tied[0], CountryResolution::RegistryOrder),
        };
        trace!(
            "Resolved '{canonical_value}' to {} (+{}) by {}",
            country.code,
            country.dial_code,
            <&'static str>::from(resolution)
        );

        let national = strip_cow_prefix(digits, country.dial_code)?;
        let limit = self.max_digits(country.code, preferred_country_code);
        let national = truncate_cow(national, limit);

        Some(DecomposedNumber {
            country,
            digits: national.into_owned(),
            resolution,
        })
    }
}
