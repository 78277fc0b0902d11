use cranpose_core::useState;
use cranpose_ui::{composable, Column, ColumnSpec, Modifier, Text};
use tempconv_core::{labels, TemperatureScale, TwoWayConverter};

use super::field::{OnValueChange, TemperatureField};
use super::heading_modifier;

/// Celsius and Fahrenheit fields that rewrite each other.
///
/// An edit in one field replaces the other field's text wholesale. The
/// rewritten field then shows the new text, which the converter treats as no
/// edit, so the update does not bounce back.
#[composable]
pub fn TwoWayConverterApp() {
    let converter = useState(TwoWayConverter::new);

    Column(Modifier::empty().padding(16.0), ColumnSpec::default(), move || {
        let current = converter.get();
        Text(labels::TWO_WAY_CONVERTER, heading_modifier());
        GeneralTemperatureInput(
            TemperatureScale::Celsius,
            current.celsius().to_string(),
            OnValueChange::new(move |text| {
                converter.update(|converter| {
                    converter.edit(TemperatureScale::Celsius, text);
                });
            }),
        );
        GeneralTemperatureInput(
            TemperatureScale::Fahrenheit,
            current.fahrenheit().to_string(),
            OnValueChange::new(move |text| {
                converter.update(|converter| {
                    converter.edit(TemperatureScale::Fahrenheit, text);
                });
            }),
        );
    });
}

#[composable]
pub fn GeneralTemperatureInput(
    scale: TemperatureScale,
    input: String,
    on_value_change: OnValueChange,
) {
    TemperatureField(labels::enter_temperature(scale), input, on_value_change);
}
