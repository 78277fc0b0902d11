#![deny(missing_docs)]

//! Conversion rules and state holders behind the temperature converter demo.
//!
//! Nothing in this crate knows about the UI framework. The app feeds raw text
//! from its text fields into the converters and renders whatever text comes
//! back, so every observable behavior of the demo can be tested here.

pub mod convert;
pub mod converter;
pub mod labels;
pub mod saved_state;
pub mod scale;

pub use convert::{
    celsius_to_fahrenheit, fahrenheit_to_celsius, format_double, parse_decimal, NO_VALUE,
};
pub use converter::{ConverterState, StatefulConverter, TwoWayConverter};
pub use saved_state::{SavedStateError, SavedStateRegistry};
pub use scale::TemperatureScale;

/// Convenience imports for converter hosts.
pub mod prelude {
    pub use crate::convert::{celsius_to_fahrenheit, fahrenheit_to_celsius, NO_VALUE};
    pub use crate::converter::{ConverterState, StatefulConverter, TwoWayConverter};
    pub use crate::labels;
    pub use crate::saved_state::{SavedStateError, SavedStateRegistry};
    pub use crate::scale::TemperatureScale;
}
