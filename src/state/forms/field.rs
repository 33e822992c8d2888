//! Form field value objects

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Free text that accepts newlines
    Multiline,
    /// One of a fixed set of options, cycled with the arrow keys
    Choice(&'static [&'static str]),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    /// Create a new text field with initial value
    pub fn text(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            value: value.into(),
        }
    }

    /// Create a new multiline field with initial value
    pub fn multiline(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Multiline,
            value: value.into(),
        }
    }

    /// Create a new choice field. An initial value outside `options` falls
    /// back to the first option.
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        value: &str,
    ) -> Self {
        let value = options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(value))
            .or_else(|| options.first())
            .map(|o| (*o).to_string())
            .unwrap_or_default();
        Self {
            name,
            label,
            kind: FieldKind::Choice(options),
            value,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text if c == '\n' => {}
            FieldKind::Text | FieldKind::Multiline => self.value.push(c),
            // Choice fields only change through cycling
            FieldKind::Choice(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if !self.is_choice() {
            self.value.pop();
        }
    }

    /// Move to the next (or previous) option of a choice field, wrapping
    pub fn cycle(&mut self, forward: bool) {
        let FieldKind::Choice(options) = self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| *o == self.value).unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else if current == 0 {
            options.len() - 1
        } else {
            current - 1
        };
        self.value = options[next].to_string();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(_) => format!("◂ {} ▸", self.value),
            _ => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["General", "Bug report", "Feature request"];

    #[test]
    fn test_text_ignores_newline() {
        let mut field = FormField::text("name", "Name", "Ada");
        field.push_char('\n');
        field.push_char('!');
        assert_eq!(field.value, "Ada!");
    }

    #[test]
    fn test_multiline_accepts_newline() {
        let mut field = FormField::multiline("message", "Message", "");
        field.push_char('a');
        field.push_char('\n');
        field.push_char('b');
        assert_eq!(field.value, "a\nb");
        assert!(field.is_multiline());
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("email", "Email", "");
        field.pop_char();
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_choice_falls_back_to_first_option() {
        let field = FormField::choice("feedbackType", "Type", OPTIONS, "nonsense");
        assert_eq!(field.value, "General");
    }

    #[test]
    fn test_choice_matches_case_insensitively() {
        let field = FormField::choice("feedbackType", "Type", OPTIONS, "bug REPORT");
        assert_eq!(field.value, "Bug report");
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut field = FormField::choice("feedbackType", "Type", OPTIONS, "General");
        field.cycle(false);
        assert_eq!(field.value, "Feature request");
        field.cycle(true);
        assert_eq!(field.value, "General");
        field.cycle(true);
        assert_eq!(field.value, "Bug report");
    }

    #[test]
    fn test_choice_ignores_typing() {
        let mut field = FormField::choice("feedbackType", "Type", OPTIONS, "General");
        field.push_char('x');
        field.pop_char();
        assert_eq!(field.value, "General");
    }

    #[test]
    fn test_cycle_on_text_is_noop() {
        let mut field = FormField::text("name", "Name", "Ada");
        field.cycle(true);
        assert_eq!(field.value, "Ada");
    }

    #[test]
    fn test_display_value_decorates_choice() {
        let field = FormField::choice("feedbackType", "Type", OPTIONS, "Bug report");
        assert_eq!(field.display_value(), "◂ Bug report ▸");
        let text = FormField::text("name", "Name", "Ada");
        assert_eq!(text.display_value(), "Ada");
    }
}
