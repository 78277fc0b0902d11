#![allow(non_snake_case)]

//! The converter screen: three independent converters stacked in a column.

mod field;
mod hoisted;
mod stateful;
mod two_way;

pub use field::{FieldAction, FieldSync, OnValueChange, TemperatureField};
#[cfg(test)]
pub(crate) use field::take_created_fields;
pub use hoisted::{
    restore_converter_state, save_converter_state, ConverterApp, StatelessTemperatureInput,
    HOISTED_STATE_KEY,
};
pub use stateful::StatefulTemperatureInput;
pub use two_way::{GeneralTemperatureInput, TwoWayConverterApp};

use cranpose_ui::{composable, Color, Column, ColumnSpec, Modifier};

fn heading_modifier() -> Modifier {
    Modifier::empty()
        .padding(8.0)
        .background(Color(0.16, 0.22, 0.36, 0.9))
        .rounded_corners(8.0)
}

#[composable]
pub fn converter_app() {
    Column(
        Modifier::empty()
            .fill_max_size()
            .background(Color(0.08, 0.08, 0.1, 1.0)),
        ColumnSpec::default(),
        || {
            StatefulTemperatureInput();
            ConverterApp();
            TwoWayConverterApp();
        },
    );
}
