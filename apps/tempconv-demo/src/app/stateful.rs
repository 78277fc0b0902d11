use cranpose_core::useState;
use cranpose_ui::{composable, Column, ColumnSpec, Modifier, Text};
use tempconv_core::{labels, StatefulConverter};

use super::field::{OnValueChange, TemperatureField};
use super::heading_modifier;

/// Converter that keeps its input and output to itself. The state is gone
/// once the composable leaves the composition.
#[composable]
pub fn StatefulTemperatureInput() {
    let converter = useState(StatefulConverter::new);

    Column(Modifier::empty().padding(16.0), ColumnSpec::default(), move || {
        let current = converter.get();
        Text(labels::STATEFUL_CONVERTER, heading_modifier());
        TemperatureField(
            labels::ENTER_CELSIUS.to_string(),
            current.input().to_string(),
            OnValueChange::new(move |text| {
                converter.update(|converter| {
                    converter.on_input_change(text);
                });
            }),
        );
        Text(
            labels::temperature_fahrenheit(current.output()),
            Modifier::empty().padding(4.0),
        );
    });
}
