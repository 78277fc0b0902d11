//! Fixed display strings for the converter screen.

use crate::scale::TemperatureScale;

/// Heading of the converter that keeps its own state.
pub const STATEFUL_CONVERTER: &str = "Stateful Converter";
/// Heading of the converter whose state is owned by its caller.
pub const STATELESS_CONVERTER: &str = "Stateless Converter";
/// Heading of the two linked fields.
pub const TWO_WAY_CONVERTER: &str = "Two Way Converter";
/// Label of the single Celsius input field.
pub const ENTER_CELSIUS: &str = "Enter Celsius";

/// Label of a two-way field, e.g. `Enter Fahrenheit`.
pub fn enter_temperature(scale: TemperatureScale) -> String {
    format!("Enter {}", scale.display_name())
}

/// Result line under a single-field converter.
pub fn temperature_fahrenheit(value: &str) -> String {
    format!("Fahrenheit: {value}")
}
