//! Labeled text field that reports edits through a callback.
//!
//! `BasicTextField` owns its text in a `TextFieldState`. The converters want
//! the opposite shape: the caller owns the text and is told about every edit.
//! [`TemperatureField`] bridges the two by comparing three values on each
//! composition: the text the owner passes in, the text last pushed into the
//! widget, and the text the widget currently shows.

use std::cell::RefCell;
use std::rc::Rc;

use cranpose_core::LaunchedEffect;
use cranpose_foundation::text::TextFieldState;
use cranpose_ui::widgets::BasicTextField;
use cranpose_ui::{composable, Color, Column, ColumnSpec, Modifier, Text};

/// Callback fired with the full text of the field after each edit.
#[derive(Clone)]
pub struct OnValueChange(Rc<dyn Fn(&str)>);

impl OnValueChange {
    pub fn new(callback: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn call(&self, text: &str) {
        (self.0)(text)
    }
}

impl PartialEq for OnValueChange {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// What a field has to do after comparing owner text and widget text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldAction {
    /// The owner changed the value; show it in the widget.
    PushToWidget(String),
    /// The user typed; report the widget text to the owner.
    Notify(String),
    Idle,
}

/// Remembers the last owner value the widget was synced to.
#[derive(Debug)]
pub struct FieldSync {
    last_owner_value: String,
}

impl FieldSync {
    pub fn new(owner_value: &str) -> Self {
        Self {
            last_owner_value: owner_value.to_string(),
        }
    }

    /// Owner changes win over a pending widget edit: the owner only changes
    /// its value in response to an edit it was already told about, or to
    /// rewrite a linked field.
    pub fn reconcile(&mut self, owner_value: &str, widget_text: &str) -> FieldAction {
        if owner_value != self.last_owner_value {
            self.last_owner_value = owner_value.to_string();
            if widget_text == owner_value {
                return FieldAction::Idle;
            }
            return FieldAction::PushToWidget(owner_value.to_string());
        }
        if widget_text != owner_value {
            return FieldAction::Notify(widget_text.to_string());
        }
        FieldAction::Idle
    }
}

#[cfg(test)]
thread_local! {
    // Widget states in creation order, so tests can type into them.
    static CREATED_FIELDS: RefCell<Vec<TextFieldState>> = RefCell::new(Vec::new());
}

/// Drains the widget states created on this thread since the last call.
#[cfg(test)]
pub(crate) fn take_created_fields() -> Vec<TextFieldState> {
    CREATED_FIELDS.with(|fields| std::mem::take(&mut *fields.borrow_mut()))
}

#[composable]
pub fn TemperatureField(label: String, value: String, on_value_change: OnValueChange) {
    let field_state = cranpose_core::remember(|| {
        let state = TextFieldState::new(value.as_str());
        #[cfg(test)]
        CREATED_FIELDS.with(|fields| fields.borrow_mut().push(state.clone()));
        state
    })
    .with(|state| state.clone());
    let sync = cranpose_core::remember(|| Rc::new(RefCell::new(FieldSync::new(&value))))
        .with(|sync| sync.clone());

    let widget_text = field_state.text().to_string();
    let action = sync.borrow_mut().reconcile(&value, &widget_text);
    match action {
        FieldAction::PushToWidget(text) => {
            log::trace!("field `{}` <- {:?}", label, text);
            field_state.set_text(text);
        }
        FieldAction::Notify(text) => {
            let callback = on_value_change.clone();
            LaunchedEffect!(text.clone(), move |_scope| {
                callback.call(&text);
            });
        }
        FieldAction::Idle => {}
    }

    Column(Modifier::empty().padding(4.0), ColumnSpec::default(), move || {
        Text(label.clone(), Modifier::empty().padding(2.0));
        BasicTextField(
            field_state.clone(),
            Modifier::empty()
                .fill_max_width()
                .padding(6.0)
                .background(Color(0.12, 0.14, 0.2, 1.0))
                .rounded_corners(6.0),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn typing_notifies_the_owner() {
        let mut sync = FieldSync::new("");
        assert_eq!(sync.reconcile("", "1"), FieldAction::Notify("1".to_string()));
        // Owner accepted the edit and echoes it back.
        assert_eq!(sync.reconcile("1", "1"), FieldAction::Idle);
    }

    #[test]
    fn owner_rewrite_is_pushed_into_the_widget() {
        let mut sync = FieldSync::new("");
        assert_eq!(
            sync.reconcile("212.0", ""),
            FieldAction::PushToWidget("212.0".to_string())
        );
        // Next pass sees the pushed text and stays quiet.
        assert_eq!(sync.reconcile("212.0", "212.0"), FieldAction::Idle);
    }

    #[test]
    fn unchanged_values_are_idle() {
        let mut sync = FieldSync::new("37");
        assert_eq!(sync.reconcile("37", "37"), FieldAction::Idle);
    }

    #[test]
    fn callback_identity_drives_equality() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let callback = OnValueChange::new(move |_| counter.set(counter.get() + 1));
        let same = callback.clone();
        let other = OnValueChange::new(|_| {});

        assert!(callback == same);
        assert!(callback != other);

        same.call("5");
        assert_eq!(hits.get(), 1);
    }
}
