// statsplay/src/tui/widgets.rs
//! Widget models for the interactive shell.
//!
//! These hold widget state only; drawing happens in `tui::ui`.

/// A numeric slider with a fixed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Decimal places shown next to the slider.
    pub decimals: usize,
}

impl Slider {
    pub fn new(label: &'static str, value: f64, min: f64, max: f64, step: f64, decimals: usize) -> Self {
        Self { label, value: value.clamp(min, max), min, max, step, decimals }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        // Snap to the step grid so repeated steps do not drift.
        let steps = ((value - self.min) / self.step).round();
        self.value = (self.min + steps * self.step).clamp(self.min, self.max);
    }

    pub fn increment(&mut self) {
        self.set(self.value + self.step);
    }

    pub fn decrement(&mut self) {
        self.set(self.value - self.step);
    }

    pub fn to_min(&mut self) {
        self.value = self.min;
    }

    pub fn to_max(&mut self) {
        self.value = self.max;
    }

    /// Position of the value within the range, 0.0 to 1.0.
    pub fn ratio(&self) -> f64 {
        if self.max > self.min { (self.value - self.min) / (self.max - self.min) } else { 0.0 }
    }

    pub fn display_value(&self) -> String {
        format!("{:.*}", self.decimals, self.value)
    }
}

/// Single or multi-line text input with a character cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub label: &'static str,
    text: String,
    /// Cursor position in characters.
    cursor: usize,
    pub multiline: bool,
}

impl TextInput {
    pub fn new(label: &'static str, text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { label, text, cursor, multiline: false }
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text.char_indices().nth(char_index).map_or(self.text.len(), |(i, _)| i)
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Inserts a line break; ignored for single-line inputs.
    pub fn newline(&mut self) -> bool {
        if !self.multiline {
            return false;
        }
        self.insert('\n');
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// A set of mutually exclusive options. `selected` starts empty for quizzes.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioGroup {
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl RadioGroup {
    pub fn new(label: &'static str, options: Vec<String>, selected: Option<usize>) -> Self {
        let selected = selected.filter(|i| *i < options.len());
        Self { label, options, selected }
    }

    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    pub fn previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.and_then(|i| self.options.get(i)).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clamps_at_both_ends() {
        let mut slider = Slider::new("Red balls", 9.0, 1.0, 10.0, 1.0, 0);
        slider.increment();
        slider.increment();
        assert_eq!(slider.value(), 10.0);
        slider.to_min();
        slider.decrement();
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn slider_steps_do_not_drift() {
        let mut slider = Slider::new("σ", 1.0, 0.1, 5.0, 0.1, 1);
        for _ in 0..7 {
            slider.increment();
        }
        assert_eq!(slider.display_value(), "1.7");
        assert!((slider.value() - 1.7).abs() < 1e-9);
    }

    #[test]
    fn slider_new_clamps_initial_value() {
        assert_eq!(Slider::new("n", 500.0, 10.0, 200.0, 5.0, 0).value(), 200.0);
    }

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::new("Numbers", "1, 3");
        input.left();
        input.insert('2');
        assert_eq!(input.text(), "1, 23");
        input.home();
        input.delete();
        assert_eq!(input.text(), ", 23");
        input.end();
        assert!(input.backspace());
        assert_eq!(input.text(), ", 2");
        input.home();
        assert!(!input.backspace());
    }

    #[test]
    fn text_input_handles_multibyte_characters() {
        let mut input = TextInput::new("Concept", "μσ");
        input.left();
        input.insert('x');
        assert_eq!(input.text(), "μxσ");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn newline_only_in_multiline_inputs() {
        let mut single = TextInput::new("Concept", "a");
        assert!(!single.newline());
        let mut area = TextInput::new("Lesson", "a").multiline();
        assert!(area.newline());
        assert_eq!(area.text(), "a\n");
    }

    #[test]
    fn radio_group_wraps_and_starts_unselected() {
        let mut radio = RadioGroup::new("Answer", vec!["0.25".into(), "0.5".into(), "1".into()], None);
        assert_eq!(radio.selected_label(), None);
        radio.previous();
        assert_eq!(radio.selected_label(), Some("1"));
        radio.next();
        assert_eq!(radio.selected, Some(0));
    }
}
