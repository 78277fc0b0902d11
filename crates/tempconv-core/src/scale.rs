//! Temperature scales shown by the converter fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// One of the two supported scales, each with a fixed display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureScale {
    /// Both scales in display order.
    pub const ALL: [TemperatureScale; 2] =
        [TemperatureScale::Celsius, TemperatureScale::Fahrenheit];

    /// Name used in field labels.
    pub const fn display_name(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
        }
    }

    /// The scale a value typed in `self` is converted into.
    pub const fn counterpart(self) -> TemperatureScale {
        match self {
            TemperatureScale::Celsius => TemperatureScale::Fahrenheit,
            TemperatureScale::Fahrenheit => TemperatureScale::Celsius,
        }
    }

    /// Converts text expressed in this scale into text for [`Self::counterpart`].
    pub fn convert_text(self, text: &str) -> String {
        match self {
            TemperatureScale::Celsius => celsius_to_fahrenheit(text),
            TemperatureScale::Fahrenheit => fahrenheit_to_celsius(text),
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
