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

use std::collections::HashMap;

use log::{trace, warn};

use super::{
    Country,
    country::{is_valid_country_code, is_valid_dial_code},
    country_data::COUNTRIES,
};
use crate::{phoneinput::helper_constants::PLUS_SIGN, string_util::strip_cow_prefix};

/// Immutable table of countries and their dial codes.
///
/// Rows keep the order they were supplied in; every query that returns more
/// than one country returns them in that order.
pub struct CountryRegistry {
    countries: Vec<Country>,

    /// Upper-cased country code to row index.
    code_to_index: HashMap<String, usize>,

    /// A mapping from a dial code to the row indices sharing it. Note that
    /// Canada and the United States share dial code 1, so under this map
    /// 1 is mapped to both, Canada first because it is listed first.
    dial_code_to_indices: HashMap<&'static str, Vec<usize>>,

    /// Length of the longest dial code in the table, bounds prefix probing.
    max_dial_code_len: usize,
}

impl CountryRegistry {
    pub fn new(countries: Vec<Country>) -> Self {
        let mut instance = Self {
            countries: Vec::with_capacity(countries.len()),
            code_to_index: Default::default(),
            dial_code_to_indices: Default::default(),
            max_dial_code_len: 0,
        };

        for country in countries {
            if !is_valid_country_code(country.code) || !is_valid_dial_code(country.dial_code) {
                warn!(
                    "Skipping malformed registry row: code '{}', dial code '{}'",
                    country.code, country.dial_code
                );
                continue;
            }
            let upper_code = country.code.to_ascii_uppercase();
            if instance.code_to_index.contains_key(&upper_code) {
                warn!("Skipping duplicated country code: {}", country.code);
                continue;
            }

            let index = instance.countries.len();
            instance.code_to_index.insert(upper_code, index);
            instance
                .dial_code_to_indices
                .entry(country.dial_code)
                .or_default()
                .push(index);
            instance.max_dial_code_len = instance.max_dial_code_len.max(country.dial_code.len());
            instance.countries.push(country);
        }
        trace!("Registry loaded with {} countries", instance.countries.len());
        instance
    }

    /// Registry over the built-in country table.
    pub fn built_in() -> Self {
        Self::new(COUNTRIES.to_vec())
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// First row in registry order, the fallback selection of a fresh input.
    pub fn first(&self) -> Option<Country> {
        self.countries.first().copied()
    }

    /// Exact, case-insensitive lookup by two-letter country code.
    pub fn find_by_code(&self, country_code: &str) -> Option<Country> {
        self.code_to_index
            .get(&country_code.to_ascii_uppercase())
            .map(|&index| self.countries[index])
    }

    /// Exact dial-code lookup. Accepts the dial code with or without `+`.
    pub fn find_by_dial_code(&self, dial_code: &str) -> Vec<Country> {
        let dial_code = dial_code.strip_prefix(PLUS_SIGN).unwrap_or(dial_code);
        self.dial_code_to_indices
            .get(dial_code)
            .map(|indices| indices.iter().map(|&index| self.countries[index]).collect())
            .unwrap_or_default()
    }

    /// Case-insensitive substring search over name, code and dial code.
    /// A leading `+` in the query only matches against dial codes.
    ///
    /// An empty query returns the whole table.
    pub fn search(&self, query: &str) -> Vec<Country> {
        let query = query.trim();
        if query.is_empty() {
            return self.countries.clone();
        }

        let lowered = query.to_lowercase();
        let dial_query = strip_cow_prefix(lowered.as_str().into(), PLUS_SIGN);

        self.countries
            .iter()
            .filter(|country| match &dial_query {
                Some(dial_query) => country.dial_code.contains(&**dial_query),
                None => {
                    country.name.to_lowercase().contains(&lowered)
                        || country.code.to_lowercase().contains(&lowered)
                        || country.dial_code.contains(&lowered)
                }
            })
            .copied()
            .collect()
    }

    /// Countries whose dial code is a prefix of `candidate_digits`, longest
    /// prefix first, registry order among equal lengths.
    pub fn match_dial_code(&self, candidate_digits: &str) -> Vec<Country> {
        let probe_len = candidate_digits.len().min(self.max_dial_code_len);
        let mut matched = Vec::new();

        for len in (1..=probe_len).rev() {
            // dial codes are ASCII digits, non-ASCII input can't match
            let Some(prefix) = candidate_digits.get(..len) else {
                continue;
            };
            if let Some(indices) = self.dial_code_to_indices.get(prefix) {
                matched.extend(indices.iter().map(|&index| self.countries[index]));
            }
        }
        matched
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::built_in()
    }
}
