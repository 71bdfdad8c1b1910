//! Measurement-kind selector for the exercise catalogue form.
//!
//! An exercise records at most two kinds per set. The selection model
//! enforces the cap interactively: a third pick is rejected and the
//! selection left untouched, with a message for the feedback dialog.

use api::MeasurementKind;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

pub const MAX_KINDS: usize = 2;
pub const MAX_KINDS_MESSAGE: &str = "Máximo de 2 tipos de medição por exercício";

/// Ordered selection of up to two measurement kinds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KindSelection {
    selected: Vec<MeasurementKind>,
}

impl KindSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_exercise(primary: MeasurementKind, secondary: Option<MeasurementKind>) -> Self {
        let mut selected = vec![primary];
        selected.extend(secondary);
        Self { selected }
    }

    pub fn contains(&self, kind: MeasurementKind) -> bool {
        self.selected.contains(&kind)
    }

    pub fn primary(&self) -> Option<MeasurementKind> {
        self.selected.first().copied()
    }

    pub fn secondary(&self) -> Option<MeasurementKind> {
        self.selected.get(1).copied()
    }

    /// Select or deselect a kind. Selecting beyond the cap changes nothing
    /// and returns the validation message.
    pub fn toggle(&mut self, kind: MeasurementKind) -> Result<(), &'static str> {
        if let Some(position) = self.selected.iter().position(|k| *k == kind) {
            self.selected.remove(position);
            return Ok(());
        }
        if self.selected.len() >= MAX_KINDS {
            return Err(MAX_KINDS_MESSAGE);
        }
        self.selected.push(kind);
        Ok(())
    }
}

/// Toggle-button row over all kinds; rejection is reported to the caller.
#[component]
pub fn KindSelector(
    selection: KindSelection,
    on_toggle: EventHandler<MeasurementKind>,
) -> Element {
    rsx! {
        div {
            class: "kind-selector",
            for kind in MeasurementKind::ALL {
                Button {
                    variant: if selection.contains(kind) { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    onclick: move |_| on_toggle.call(kind),
                    {kind.label()}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_selection_rejected_and_unchanged() {
        let mut selection = KindSelection::new();
        selection.toggle(MeasurementKind::Reps).unwrap();
        selection.toggle(MeasurementKind::Weight).unwrap();

        let err = selection.toggle(MeasurementKind::Time).unwrap_err();
        assert_eq!(err, MAX_KINDS_MESSAGE);
        assert_eq!(selection.primary(), Some(MeasurementKind::Reps));
        assert_eq!(selection.secondary(), Some(MeasurementKind::Weight));
    }

    #[test]
    fn test_toggle_off_frees_a_slot() {
        let mut selection =
            KindSelection::from_exercise(MeasurementKind::Reps, Some(MeasurementKind::Weight));
        selection.toggle(MeasurementKind::Weight).unwrap();
        assert!(selection.secondary().is_none());
        selection.toggle(MeasurementKind::Distance).unwrap();
        assert_eq!(selection.secondary(), Some(MeasurementKind::Distance));
    }

    #[test]
    fn test_from_exercise_roundtrip() {
        let selection = KindSelection::from_exercise(MeasurementKind::Time, None);
        assert_eq!(selection.primary(), Some(MeasurementKind::Time));
        assert!(selection.secondary().is_none());
    }
}
