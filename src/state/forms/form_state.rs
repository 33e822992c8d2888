//! Form state management for the panel forms

use super::field::FormField;
use crate::config::FormDefaults;
use crate::state::PanelId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_FEEDBACK_TYPE: &str = "feedbackType";
pub const FIELD_MESSAGE: &str = "message";

/// Options offered by the feedback type selector
pub const FEEDBACK_TYPES: &[&str] = &["General", "Bug report", "Feature request", "Content issue"];

/// Field values captured at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub panel: PanelId,
    pub fields: Vec<(String, String)>,
    pub submitted_at: DateTime<Utc>,
}

impl FormSnapshot {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Values of one panel's form plus keyboard focus.
///
/// The focus index runs over every field and then one extra slot for the
/// submit button row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active_field_index: 0,
        }
    }

    /// Contact slide-over: who is writing, what about, and the message
    pub fn contact(defaults: &FormDefaults) -> Self {
        Self::new(vec![
            FormField::text(FIELD_NAME, "Name", defaults.name.clone()),
            FormField::text(FIELD_EMAIL, "Email", defaults.email.clone()),
            FormField::choice(
                FIELD_FEEDBACK_TYPE,
                "Feedback type",
                FEEDBACK_TYPES,
                &defaults.feedback_type,
            ),
            FormField::multiline(FIELD_MESSAGE, "Message", defaults.message.clone()),
        ])
    }

    /// Feedback modal: a type and a message
    pub fn feedback(defaults: &FormDefaults) -> Self {
        Self::new(vec![
            FormField::choice(
                FIELD_FEEDBACK_TYPE,
                "Feedback type",
                FEEDBACK_TYPES,
                &defaults.feedback_type,
            ),
            FormField::multiline(FIELD_MESSAGE, "Message", defaults.message.clone()),
        ])
    }

    /// Overwrite one field. Returns false if no field has that name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Only the message is required
    pub fn is_submittable(&self) -> bool {
        self.field(FIELD_MESSAGE)
            .is_some_and(|m| !m.trim().is_empty())
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Number of focus slots (fields + submit button row)
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }

    /// Focus the first empty text field, or the message if all are filled
    pub fn focus_first_empty(&mut self) {
        let index = self
            .fields
            .iter()
            .position(|f| !f.is_choice() && f.value.is_empty())
            .or_else(|| self.fields.iter().position(|f| f.name == FIELD_MESSAGE))
            .unwrap_or(0);
        self.set_active_field(index);
    }

    pub fn active_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field().is_some_and(FormField::is_multiline)
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.get_active_field_mut() {
            field.cycle(forward);
        }
    }

    pub fn snapshot(&self, panel: PanelId) -> FormSnapshot {
        FormSnapshot {
            panel,
            fields: self
                .fields
                .iter()
                .map(|f| (f.name.to_string(), f.value.clone()))
                .collect(),
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_contact() -> FormState {
        FormState::contact(&FormDefaults::default())
    }

    mod submittable {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_whitespace_message_is_not_submittable() {
            let mut form = empty_contact();
            form.set_field(FIELD_MESSAGE, "   ");
            assert!(!form.is_submittable());
            form.set_field(FIELD_MESSAGE, "help");
            assert!(form.is_submittable());
        }

        #[test]
        fn test_other_fields_do_not_matter() {
            let mut form = empty_contact();
            form.set_field(FIELD_NAME, "");
            form.set_field(FIELD_EMAIL, "not an email");
            form.set_field(FIELD_MESSAGE, "\n\thi\n");
            assert!(form.is_submittable());

            form.set_field(FIELD_NAME, "Ada");
            form.set_field(FIELD_MESSAGE, "\n\t ");
            assert!(!form.is_submittable());
        }

        #[test]
        fn test_empty_form_is_not_submittable() {
            assert!(!empty_contact().is_submittable());
            assert!(!FormState::feedback(&FormDefaults::default()).is_submittable());
        }

        #[test]
        fn test_form_without_message_field_is_not_submittable() {
            let form = FormState::new(vec![FormField::text(FIELD_NAME, "Name", "x")]);
            assert!(!form.is_submittable());
        }
    }

    mod fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_field_overwrites_only_that_field() {
            let mut form = empty_contact();
            let before = form.clone();
            assert!(form.set_field(FIELD_EMAIL, "ada@example.com"));

            for (old, new) in before.fields().iter().zip(form.fields()) {
                if new.name == FIELD_EMAIL {
                    assert_eq!(new.value, "ada@example.com");
                } else {
                    assert_eq!(old, new);
                }
            }
        }

        #[test]
        fn test_set_unknown_field_is_rejected() {
            let mut form = FormState::feedback(&FormDefaults::default());
            let before = form.clone();
            assert!(!form.set_field(FIELD_NAME, "Ada"));
            assert_eq!(form, before);
        }

        #[test]
        fn test_defaults_are_applied() {
            let defaults = FormDefaults {
                name: "Sample Learner".to_string(),
                email: "learner@example.com".to_string(),
                feedback_type: "Bug report".to_string(),
                message: String::new(),
            };
            let form = FormState::contact(&defaults);
            assert_eq!(form.field(FIELD_NAME), Some("Sample Learner"));
            assert_eq!(form.field(FIELD_EMAIL), Some("learner@example.com"));
            assert_eq!(form.field(FIELD_FEEDBACK_TYPE), Some("Bug report"));
            assert_eq!(form.field(FIELD_MESSAGE), Some(""));
        }

        #[test]
        fn test_snapshot_preserves_field_order() {
            let mut form = empty_contact();
            form.set_field(FIELD_MESSAGE, "hello");
            let snapshot = form.snapshot(PanelId::ContactSlideOver);
            let names: Vec<&str> = snapshot.fields.iter().map(|(n, _)| n.as_str()).collect();
            assert_eq!(
                names,
                vec![FIELD_NAME, FIELD_EMAIL, FIELD_FEEDBACK_TYPE, FIELD_MESSAGE]
            );
            assert_eq!(snapshot.get(FIELD_MESSAGE), Some("hello"));
            assert_eq!(snapshot.panel, PanelId::ContactSlideOver);
        }

        #[test]
        fn test_snapshot_serializes_to_json() {
            let form = FormState::feedback(&FormDefaults::default());
            let snapshot = form.snapshot(PanelId::FeedbackModal);
            let json = serde_json::to_string(&snapshot).unwrap();
            let parsed: FormSnapshot = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, snapshot);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_cycles_through_buttons_row() {
            let mut form = empty_contact();
            assert_eq!(form.field_count(), 5);
            for _ in 0..4 {
                form.next_field();
            }
            assert!(form.is_buttons_row_active());
            assert!(form.active_field().is_none());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut form = FormState::feedback(&FormDefaults::default());
            form.prev_field();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = empty_contact();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }

        #[test]
        fn test_typing_goes_to_active_field() {
            let mut form = empty_contact();
            form.set_active_field(3);
            assert!(form.is_active_field_multiline());
            for c in "hi".chars() {
                form.push_char(c);
            }
            form.pop_char();
            assert_eq!(form.field(FIELD_MESSAGE), Some("h"));
        }

        #[test]
        fn test_typing_on_buttons_row_is_ignored() {
            let mut form = empty_contact();
            form.set_active_field(4);
            let before = form.clone();
            form.push_char('x');
            form.cycle_choice(true);
            assert_eq!(form, before);
        }

        #[test]
        fn test_focus_first_empty_skips_prefilled() {
            let defaults = FormDefaults {
                name: "Sample Learner".to_string(),
                ..Default::default()
            };
            let mut form = FormState::contact(&defaults);
            form.focus_first_empty();
            assert_eq!(form.active_field().unwrap().name, FIELD_EMAIL);

            let mut feedback = FormState::feedback(&FormDefaults::default());
            feedback.focus_first_empty();
            assert_eq!(feedback.active_field().unwrap().name, FIELD_MESSAGE);
        }

        #[test]
        fn test_focus_first_empty_falls_back_to_message() {
            let defaults = FormDefaults {
                name: "a".to_string(),
                email: "b".to_string(),
                feedback_type: String::new(),
                message: "c".to_string(),
            };
            let mut form = FormState::contact(&defaults);
            form.focus_first_empty();
            assert_eq!(form.active_field().unwrap().name, FIELD_MESSAGE);
        }

        #[test]
        fn test_cycle_choice_changes_feedback_type() {
            let mut form = empty_contact();
            form.set_active_field(2);
            form.cycle_choice(true);
            assert_eq!(form.field(FIELD_FEEDBACK_TYPE), Some("Bug report"));
        }
    }
}
