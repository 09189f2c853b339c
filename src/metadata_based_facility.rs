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
use phonenumber::{Mode, metadata::DATABASE};

use crate::{
    countries::Country,
    interfaces::{AsYouTypeFormatterApi, ExampleNumberApi, ValidityApi},
    phoneinput::{
        ExampleNumber,
        e164_codec::compose,
        errors::{ExampleNumberError, FormattingFault},
    },
    string_util::normalize_digits,
};

/// Collaborator backed by the compiled-in metadata of the `phonenumber`
/// crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataBasedFacility;

impl MetadataBasedFacility {
    pub fn new() -> Self {
        Self
    }
}

impl ValidityApi for MetadataBasedFacility {
    fn is_valid_phone_number(&self, e164: &str) -> bool {
        match phonenumber::parse(None, e164) {
            Ok(number) => phonenumber::is_valid(&number),
            Err(err) => {
                trace!("Number '{e164}' is not parsable: {err}");
                false
            }
        }
    }
}

impl AsYouTypeFormatterApi for MetadataBasedFacility {
    fn format_as_you_type(&self, country: &Country, digits: &str) -> Result<String, FormattingFault> {
        if DATABASE.by_id(country.code).is_none() {
            return Err(FormattingFault::UnsupportedCountry(country.code.to_owned()));
        }
        if digits.is_empty() {
            return Ok(String::new());
        }

        let e164 = compose(country.dial_code, digits);
        let number = phonenumber::parse(None, &e164)
            .map_err(|err| FormattingFault::Unparsable(err.to_string()))?;
        let international = number.format().mode(Mode::International).to_string();

        // International form is "+<calling code> <national groups>"; only the
        // national groups are shown next to the country picker.
        let national = international
            .split_once(' ')
            .map(|(_, national)| national.to_owned())
            .ok_or_else(|| FormattingFault::Unparsable(international.clone()))?;

        // The display text is fed back as keystrokes, so it must carry
        // exactly the typed digits.
        if normalize_digits(&national) != digits {
            return Err(FormattingFault::Unparsable(international));
        }
        Ok(national)
    }
}

impl ExampleNumberApi for MetadataBasedFacility {
    fn get_example_number(&self, country_code: &str) -> Result<ExampleNumber, ExampleNumberError> {
        let metadata = DATABASE
            .by_id(country_code)
            .ok_or_else(|| ExampleNumberError::UnknownCountry(country_code.to_owned()))?;
        let descriptors = metadata.descriptors();

        // Mobile first: a sign-up form is filled with mobile numbers.
        let example = descriptors
            .mobile()
            .and_then(|desc| desc.example())
            .or_else(|| descriptors.fixed_line().and_then(|desc| desc.example()))
            .or_else(|| descriptors.general().example())
            .ok_or(ExampleNumberError::NoExampleNumber)?;

        Ok(ExampleNumber::new(metadata.country_code(), example))
    }
}
