use std::cell::RefCell;

use cranpose_core::useState;
use cranpose_ui::{composable, Column, ColumnSpec, Modifier, Text};
use tempconv_core::{labels, ConverterState, SavedStateRegistry};

use super::field::{OnValueChange, TemperatureField};
use super::heading_modifier;

/// Save slot of [`ConverterApp`].
pub const HOISTED_STATE_KEY: &str = "converter_app/hoisted";

thread_local! {
    // Outlives any single composition on the UI thread.
    static SAVED_STATE: RefCell<SavedStateRegistry> = RefCell::new(SavedStateRegistry::new());
}

/// Reads the converter state saved under `key`.
///
/// Missing, unreadable, or inconsistent entries restore as an empty state.
pub fn restore_converter_state(key: &str) -> ConverterState {
    let restored = SAVED_STATE.with(|registry| registry.borrow().restore::<ConverterState>(key));
    match restored {
        Ok(Some(state)) if state.is_consistent() => {
            log::debug!("restored `{}`: {:?}", key, state);
            state
        }
        Ok(Some(state)) => {
            log::warn!("discarding inconsistent saved state `{}`: {:?}", key, state);
            ConverterState::default()
        }
        Ok(None) => ConverterState::default(),
        Err(err) => {
            log::warn!("{err}");
            ConverterState::default()
        }
    }
}

/// Writes `state` to the slot under `key`, logging instead of failing.
pub fn save_converter_state(key: &str, state: &ConverterState) {
    let saved = SAVED_STATE.with(|registry| registry.borrow_mut().save(key, state));
    if let Err(err) = saved {
        log::warn!("{err}");
    }
}

#[cfg(test)]
pub(crate) fn saved_state_bundle() -> Result<String, tempconv_core::SavedStateError> {
    SAVED_STATE.with(|registry| registry.borrow().to_bundle())
}

#[cfg(test)]
pub(crate) fn restore_saved_state_bundle(
    bundle: &str,
) -> Result<(), tempconv_core::SavedStateError> {
    let registry = SavedStateRegistry::from_bundle(bundle)?;
    SAVED_STATE.with(|slot| *slot.borrow_mut() = registry);
    Ok(())
}

/// Owner of the hoisted state. Restores from the save slot when it enters the
/// composition and saves after every edit.
#[composable]
pub fn ConverterApp() {
    let state = useState(|| restore_converter_state(HOISTED_STATE_KEY));
    let current = state.get();

    StatelessTemperatureInput(
        current.input,
        current.output,
        OnValueChange::new(move |text| {
            state.update(|state| {
                if state.on_input_change(text) {
                    save_converter_state(HOISTED_STATE_KEY, state);
                }
            });
        }),
    );
}

/// Renders whatever it is given and reports edits; holds no state of its own.
#[composable]
pub fn StatelessTemperatureInput(
    input: String,
    output: String,
    on_value_change: OnValueChange,
) {
    Column(Modifier::empty().padding(16.0), ColumnSpec::default(), move || {
        Text(labels::STATELESS_CONVERTER, heading_modifier());
        TemperatureField(
            labels::ENTER_CELSIUS.to_string(),
            input.clone(),
            on_value_change.clone(),
        );
        Text(
            labels::temperature_fahrenheit(&output),
            Modifier::empty().padding(4.0),
        );
    });
}
