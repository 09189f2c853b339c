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

use log::{trace, warn};

use super::{
    PhoneEditState, PhoneNumberNormalizer,
    enums::{CountryResolution, Stimulus},
    errors::PhoneInputFault,
};
use crate::{
    countries::Country,
    string_util::{normalize_digits, truncate_cow},
};

pub type OnChangeText = Box<dyn FnMut(&str)>;
pub type OnValidationChange = Box<dyn FnMut(bool)>;

/// Parameters of a phone input, supplied at mount and on every re-render.
#[derive(Default)]
pub struct PhoneInputProps {
    /// Externally owned canonical value, or empty.
    pub value: String,
    /// Tie-break hint, and the initial country while nothing was picked.
    pub default_country_code: Option<String>,
    /// Display-only error text, passed through untouched.
    pub error: Option<String>,
    pub on_change_text: Option<OnChangeText>,
    pub on_validation_change: Option<OnValidationChange>,
}

impl PhoneInputProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), ..Default::default() }
    }

    pub fn with_default_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.default_country_code = Some(country_code.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn on_change_text(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change_text = Some(Box::new(callback));
        self
    }

    pub fn on_validation_change(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_validation_change = Some(Box::new(callback));
        self
    }
}

/// Everything a renderer needs to draw the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInputSnapshot {
    pub country: Country,
    pub display_text: String,
    pub canonical_value: String,
    pub is_valid: bool,
    pub error: Option<String>,
}

/// Holds the most recently supplied callback. Replacing it never notifies,
/// so a caller handing over a new closure on every render can't retrigger
/// a notification by doing so.
struct CallbackSlot<F: ?Sized> {
    callback: Option<Box<F>>,
}

impl<F: ?Sized> CallbackSlot<F> {
    fn new(callback: Option<Box<F>>) -> Self {
        Self { callback }
    }

    fn replace(&mut self, callback: Option<Box<F>>) {
        self.callback = callback;
    }

    fn get_mut(&mut self) -> Option<&mut F> {
        self.callback.as_deref_mut()
    }
}

/// Stateful phone number field.
///
/// Turns keystrokes, country picks and externally supplied values into a
/// canonical E.164 string plus a validity flag. No operation fails: every
/// collaborator fault degrades to a fallback and is recorded in
/// [`last_faults`](Self::last_faults).
pub struct PhoneInput<'n> {
    normalizer: &'n PhoneNumberNormalizer,
    state: PhoneEditState,

    /// Last externally supplied value.
    value: String,
    default_country_code: Option<String>,
    error: Option<String>,

    on_change_text: CallbackSlot<dyn FnMut(&str)>,
    on_validation_change: CallbackSlot<dyn FnMut(bool)>,

    /// Validity of the state, as last reported to `on_validation_change`.
    last_validity: Option<bool>,
    display_text: String,
    last_faults: Vec<PhoneInputFault>,
}

impl<'n> PhoneInput<'n> {
    /// Mounts the field. Adopts `props.value` if it is set and reports its
    /// validity once.
    pub fn new(normalizer: &'n PhoneNumberNormalizer, props: PhoneInputProps) -> Self {
        let selected_country = normalizer
            .default_country(props.default_country_code.as_deref())
            .unwrap_or(Country::unknown());

        let mut instance = Self {
            normalizer,
            state: PhoneEditState::empty(selected_country),
            value: String::new(),
            default_country_code: props.default_country_code,
            error: props.error,
            on_change_text: CallbackSlot::new(props.on_change_text),
            on_validation_change: CallbackSlot::new(props.on_validation_change),
            last_validity: None,
            display_text: String::new(),
            last_faults: Vec::new(),
        };

        instance.begin(Stimulus::Mount);
        instance.adopt_external_value(props.value);
        instance.refresh_validity();
        instance.render_display_text();
        instance
    }

    /// Re-render with fresh props. Callbacks and the error text are swapped
    /// in silently; only a changed value or default country is reacted to.
    pub fn update(&mut self, props: PhoneInputProps) {
        self.on_change_text.replace(props.on_change_text);
        self.on_validation_change.replace(props.on_validation_change);
        self.error = props.error;

        if props.value != self.value {
            self.external_value_changed(&props.value, props.default_country_code.as_deref());
        } else if props.default_country_code != self.default_country_code {
            self.set_default_country_code(props.default_country_code.as_deref());
        }
    }

    /// Keystroke in the national number field. `text` may carry any
    /// punctuation, only digits are kept.
    pub fn local_digits_changed(&mut self, text: &str) {
        self.begin(Stimulus::Keystroke);

        let limit = self.digit_limit(self.state.selected_country);
        self.state.raw_digits = truncate_cow(normalize_digits(text), limit).into_owned();
        if !self.state.raw_digits.is_empty() {
            self.state.cleared = false;
        }
        self.emit_change();
    }

    /// Explicit country pick. Existing digits are kept, cut to the new
    /// country's limit.
    pub fn country_selected(&mut self, country: Country) {
        self.begin(Stimulus::CountrySelected);

        self.state.selected_country = country;
        self.state.is_user_selected_country = true;
        self.state.cleared = false;
        let limit = self.digit_limit(country);
        self.state.raw_digits.truncate(limit);
        self.emit_change();
    }

    /// A new value supplied by the owner of the field.
    pub fn external_value_changed(&mut self, new_value: &str, default_country_hint: Option<&str>) {
        self.begin(Stimulus::ExternalValueChanged);

        self.default_country_code = default_country_hint.map(str::to_owned);
        let previous_state = self.state.clone();
        self.adopt_external_value(new_value.to_owned());
        if self.state != previous_state {
            self.refresh_validity();
        }
        self.render_display_text();
    }

    /// A new default country hint with the value unchanged. Ignored once a
    /// country was picked explicitly.
    pub fn set_default_country_code(&mut self, default_country_code: Option<&str>) {
        self.begin(Stimulus::DefaultCountryChanged);
        self.default_country_code = default_country_code.map(str::to_owned);

        if self.state.is_user_selected_country {
            trace!(
                "Keeping explicitly selected {} over default {:?}",
                self.state.selected_country.code, default_country_code
            );
            return;
        }

        let previous_state = self.state.clone();
        if self.state.raw_digits.is_empty() {
            if let Some(country) = self.normalizer.default_country(default_country_code) {
                self.state.selected_country = country;
            }
        } else {
            let canonical_value = self.state.canonical_value();
            self.adopt_decomposed(&canonical_value, default_country_code);
        }
        if self.state != previous_state {
            self.refresh_validity();
        }
        self.render_display_text();
    }

    pub fn state(&self) -> &PhoneEditState {
        &self.state
    }

    pub fn selected_country(&self) -> Country {
        self.state.selected_country
    }

    pub fn canonical_value(&self) -> String {
        self.state.canonical_value()
    }

    /// Last externally supplied value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_country_code(&self) -> Option<&str> {
        self.default_country_code.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Formatted national digits, the raw digits if formatting failed.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn is_valid(&self) -> bool {
        self.last_validity.unwrap_or(false)
    }

    /// Faults recovered from while handling the most recent stimulus.
    pub fn last_faults(&self) -> &[PhoneInputFault] {
        &self.last_faults
    }

    pub fn snapshot(&self) -> PhoneInputSnapshot {
        PhoneInputSnapshot {
            country: self.state.selected_country,
            display_text: self.display_text.clone(),
            canonical_value: self.state.canonical_value(),
            is_valid: self.is_valid(),
            error: self.error.clone(),
        }
    }

    fn begin(&mut self, stimulus: Stimulus) {
        trace!("Phone input stimulus: {}", <&'static str>::from(stimulus));
        self.last_faults.clear();
    }

    fn adopt_external_value(&mut self, new_value: String) {
        // An echo of what this field emitted leaves the state as it is.
        if new_value == self.state.canonical_value() {
            self.value = new_value;
            return;
        }

        if new_value.is_empty() {
            self.reset();
        } else {
            // An explicit pick outranks the default hint as tie-break.
            let preferred = if self.state.is_user_selected_country {
                Some(self.state.selected_country.code.to_owned())
            } else {
                self.default_country_code.clone()
            };
            if !self.adopt_decomposed(&new_value, preferred.as_deref()) {
                warn!("Value '{new_value}' matches no dial code, clearing digits");
                self.reset();
            }
        }
        self.value = new_value;
    }

    /// Returns `false` if the value could not be decomposed.
    fn adopt_decomposed(&mut self, value: &str, preferred_country_code: Option<&str>) -> bool {
        let Some(decomposed) = self.normalizer.decompose(value, preferred_country_code) else {
            return false;
        };

        if decomposed.resolution == CountryResolution::RegistryOrder {
            self.last_faults.push(PhoneInputFault::AmbiguousDialCode {
                dial_code: decomposed.country.dial_code.to_owned(),
                resolved_to: decomposed.country.code.to_owned(),
            });
        }

        self.state.cleared = false;
        let keeps_explicit_country = self.state.is_user_selected_country
            && decomposed.country.dial_code == self.state.selected_country.dial_code;
        if keeps_explicit_country {
            let limit = self.digit_limit(self.state.selected_country);
            self.state.raw_digits = decomposed.digits;
            self.state.raw_digits.truncate(limit);
        } else {
            // The value encodes another country than the one picked, the value wins.
            self.state.selected_country = decomposed.country;
            self.state.is_user_selected_country = false;
            self.state.raw_digits = decomposed.digits;
        }
        true
    }

    /// Clears the digits. A picked country stays selected and keeps
    /// outranking the default hint, otherwise the default country comes back.
    fn reset(&mut self) {
        self.state.raw_digits.clear();
        if self.state.is_user_selected_country {
            self.state.cleared = true;
        } else if let Some(country) =
            self.normalizer.default_country(self.default_country_code.as_deref())
        {
            self.state.selected_country = country;
        }
    }

    fn digit_limit(&mut self, country: Country) -> usize {
        let (limit, fault) = self
            .normalizer
            .max_digits_with_fault(country.code, self.default_country_code.as_deref());
        self.last_faults.extend(fault);
        limit
    }

    fn emit_change(&mut self) {
        let canonical_value = self.state.canonical_value();
        self.refresh_validity();
        if let Some(on_change_text) = self.on_change_text.get_mut() {
            on_change_text(&canonical_value);
        }
        self.render_display_text();
    }

    /// Checks the current state and reports the result to
    /// `on_validation_change`. Called once per state change.
    fn refresh_validity(&mut self) {
        let canonical_value = self.state.canonical_value();
        let valid = self.normalizer.is_valid(&canonical_value);
        if !valid && !canonical_value.is_empty() {
            self.last_faults.push(PhoneInputFault::InvalidNumber(canonical_value));
        }

        self.last_validity = Some(valid);
        if let Some(on_validation_change) = self.on_validation_change.get_mut() {
            on_validation_change(valid);
        }
    }

    fn render_display_text(&mut self) {
        let country = self.state.selected_country;
        self.display_text = match self.normalizer.format_for_display(&country, &self.state.raw_digits) {
            Ok(display_text) => display_text,
            Err(fault) => {
                warn!("Showing raw digits for {}: {fault}", country.code);
                self.last_faults.push(fault.into());
                self.state.raw_digits.clone()
            }
        };
    }
}
