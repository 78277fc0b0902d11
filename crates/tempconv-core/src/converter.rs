//! State holders for the three converter patterns.
//!
//! All three share one rule: the input text is stored verbatim and the paired
//! output is recomputed synchronously from it, so there is never a moment where
//! the output disagrees with the latest input. They differ only in who owns
//! the strings:
//!
//! - [`ConverterState`] is the plain, serializable pair a caller hoists and
//!   passes down to a stateless field.
//! - [`StatefulConverter`] keeps the same pair private to the component.
//! - [`TwoWayConverter`] keeps one string per scale and rewrites the other
//!   field on every edit.

use serde::{Deserialize, Serialize};

use crate::scale::TemperatureScale;

/// Celsius input and its Fahrenheit rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterState {
    /// Raw text as typed.
    pub input: String,
    /// Fahrenheit rendering of `input`.
    pub output: String,
}

impl ConverterState {
    /// Builds the state for `input` with its output already computed.
    pub fn from_input(input: impl Into<String>) -> Self {
        let input = input.into();
        let output = TemperatureScale::Celsius.convert_text(&input);
        Self { input, output }
    }

    /// Replaces the input and recomputes the output.
    ///
    /// Returns `false` without touching anything when `input` equals the text
    /// already held.
    pub fn on_input_change(&mut self, input: &str) -> bool {
        if self.input == input {
            return false;
        }
        self.input.clear();
        self.input.push_str(input);
        self.output = TemperatureScale::Celsius.convert_text(input);
        log::debug!("converter input {:?} -> {:?}", self.input, self.output);
        true
    }

    /// Whether `output` is what the current `input` converts to.
    ///
    /// Restored state is checked with this before it is trusted.
    pub fn is_consistent(&self) -> bool {
        self.output == TemperatureScale::Celsius.convert_text(&self.input)
            || (self.input.is_empty() && self.output.is_empty())
    }
}

/// Single-field converter that owns its own state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatefulConverter {
    state: ConverterState,
}

impl StatefulConverter {
    /// Empty input and empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.state.input
    }

    /// Current Fahrenheit text.
    pub fn output(&self) -> &str {
        &self.state.output
    }

    /// Stores `input` and recomputes the output. See [`ConverterState::on_input_change`].
    pub fn on_input_change(&mut self, input: &str) -> bool {
        self.state.on_input_change(input)
    }
}

/// Two fields, one per scale, that rewrite each other on edit.
///
/// Each edit recomputes the other field from scratch. Nothing keeps a single
/// canonical number, so alternating edits can accumulate rounding drift; that
/// drift is part of the observable behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TwoWayConverter {
    celsius: String,
    fahrenheit: String,
}

impl TwoWayConverter {
    /// Both fields empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown in the field for `scale`.
    pub fn text(&self, scale: TemperatureScale) -> &str {
        match scale {
            TemperatureScale::Celsius => &self.celsius,
            TemperatureScale::Fahrenheit => &self.fahrenheit,
        }
    }

    /// Celsius field text.
    pub fn celsius(&self) -> &str {
        &self.celsius
    }

    /// Fahrenheit field text.
    pub fn fahrenheit(&self) -> &str {
        &self.fahrenheit
    }

    /// Applies an edit of the `scale` field and overwrites the other field.
    ///
    /// Text identical to what the field already shows is not an edit: nothing
    /// is recomputed and `false` is returned. Hosts rely on this to ignore the
    /// echo of the programmatic update they push into the other field.
    pub fn edit(&mut self, scale: TemperatureScale, text: &str) -> bool {
        if self.text(scale) == text {
            return false;
        }
        let converted = scale.convert_text(text);
        let (edited, other) = match scale {
            TemperatureScale::Celsius => (&mut self.celsius, &mut self.fahrenheit),
            TemperatureScale::Fahrenheit => (&mut self.fahrenheit, &mut self.celsius),
        };
        edited.clear();
        edited.push_str(text);
        *other = converted;
        log::debug!(
            "two-way edit {} {:?} -> {} {:?}",
            scale,
            text,
            scale.counterpart(),
            other
        );
        true
    }
}
