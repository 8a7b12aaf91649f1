// statsplay/src/tui/app.rs
//! Application state for the Stats Playground TUI.
//!
//! Holds the widget values, focus, the session and the last computed demo
//! output. Every key event runs through [`App::handle_key`], which applies
//! the event to the focused widget and recomputes the output.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use statsplay_core::demos::normal::{MU_RANGE, SIGMA_RANGE};
use statsplay_core::demos::probability::{MAX_BALLS, MIN_BALLS};
use statsplay_core::demos::regression::{NOISE_RANGE, POINTS_RANGE};
use statsplay_core::{
    dispatch, route, topic_demo, Ball, BallCounts, Concept, ConceptParams, DemoOutput, NormalParams,
    PlaygroundConfig, PlaygroundError, RegressionParams, Session, Topic, Variant,
};

use crate::tui::widgets::{RadioGroup, Slider, TextInput};

/// Every focusable widget in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetId {
    Concept,
    Numbers,
    RedSlider,
    BlueSlider,
    PickButton,
    MuSlider,
    SigmaSlider,
    PointsSlider,
    NoiseSlider,
    ResampleButton,
    TopicSelect,
    QuizRadio,
    LessonArea,
}

pub struct App {
    pub variant: Variant,
    pub dark_mode: bool,
    pub should_quit: bool,
    pub session: Session,

    pub concept: TextInput,
    pub numbers: TextInput,
    pub red: Slider,
    pub blue: Slider,
    pub mu: Slider,
    pub sigma: Slider,
    pub points: Slider,
    pub noise: Slider,

    pub topic: RadioGroup,
    pub outlier_quiz: RadioGroup,
    pub coin_quiz: RadioGroup,
    pub lesson: TextInput,

    /// Index into [`App::widgets`].
    pub focus: usize,
    /// Output of the active demo; `None` while the concept box is blank.
    pub output: Option<DemoOutput>,
    /// One-line feedback for explicit actions.
    pub status: Option<String>,
}

fn quiz_radio(topic: Topic) -> RadioGroup {
    let options = topic
        .quiz()
        .map(|q| q.options.iter().map(|o| o.to_string()).collect())
        .unwrap_or_default();
    RadioGroup::new("Answer", options, None)
}

impl App {
    pub fn new(config: &PlaygroundConfig) -> Result<Self, PlaygroundError> {
        let params = config.concept_params()?;
        let mut app = Self {
            variant: config.variant(),
            dark_mode: config.dark_mode(),
            should_quit: false,
            session: Session::new(config.seed),
            concept: TextInput::new("Concept", config.initial_concept()),
            numbers: TextInput::new("Numbers", params.numbers),
            red: Slider::new("Red balls", params.balls.red() as f64, MIN_BALLS as f64, MAX_BALLS as f64, 1.0, 0),
            blue: Slider::new("Blue balls", params.balls.blue() as f64, MIN_BALLS as f64, MAX_BALLS as f64, 1.0, 0),
            mu: Slider::new("Mean (μ)", params.normal.mu(), MU_RANGE.0, MU_RANGE.1, 0.1, 1),
            sigma: Slider::new("Std dev (σ)", params.normal.sigma(), SIGMA_RANGE.0, SIGMA_RANGE.1, 0.1, 1),
            points: Slider::new(
                "Points",
                params.regression.points() as f64,
                POINTS_RANGE.0 as f64,
                POINTS_RANGE.1 as f64,
                1.0,
                0,
            ),
            noise: Slider::new("Noise", params.regression.noise(), NOISE_RANGE.0, NOISE_RANGE.1, 0.1, 1),
            topic: RadioGroup::new(
                "Topic",
                Topic::ALL.iter().map(|t| t.label().to_string()).collect(),
                Some(0),
            ),
            outlier_quiz: quiz_radio(Topic::MeanMedian),
            coin_quiz: quiz_radio(Topic::ProbabilityBasics),
            lesson: TextInput::new("Lesson", "").multiline(),
            focus: 0,
            output: None,
            status: None,
        };
        app.refresh();
        Ok(app)
    }

    /// Current widget values as handler parameters.
    pub fn params(&self) -> ConceptParams {
        ConceptParams {
            numbers: self.numbers.text().to_string(),
            balls: BallCounts::clamped(self.red.value() as u32, self.blue.value() as u32),
            normal: NormalParams::clamped(self.mu.value(), self.sigma.value()),
            regression: RegressionParams::clamped(self.points.value() as usize, self.noise.value()),
        }
    }

    /// The concept the text box currently routes to.
    pub fn concept(&self) -> Option<Concept> {
        route(self.concept.text())
    }

    pub fn current_topic(&self) -> Topic {
        self.topic.selected.and_then(|i| Topic::ALL.get(i).copied()).unwrap_or(Topic::MeanMedian)
    }

    /// Quiz options for the current topic, if it has a quiz.
    pub fn quiz(&self) -> Option<&RadioGroup> {
        match self.current_topic() {
            Topic::MeanMedian => Some(&self.outlier_quiz),
            Topic::ProbabilityBasics => Some(&self.coin_quiz),
            Topic::Distributions | Topic::CustomLesson => None,
        }
    }

    fn quiz_mut(&mut self) -> Option<&mut RadioGroup> {
        match self.current_topic() {
            Topic::MeanMedian => Some(&mut self.outlier_quiz),
            Topic::ProbabilityBasics => Some(&mut self.coin_quiz),
            Topic::Distributions | Topic::CustomLesson => None,
        }
    }

    /// Focus order of the widgets visible right now.
    pub fn widgets(&self) -> Vec<WidgetId> {
        match self.variant {
            Variant::Concepts => {
                let mut ids = vec![WidgetId::Concept];
                match self.concept() {
                    Some(Concept::Probability) => {
                        ids.extend([WidgetId::RedSlider, WidgetId::BlueSlider, WidgetId::PickButton])
                    }
                    Some(Concept::MeanMedian) => ids.push(WidgetId::Numbers),
                    Some(Concept::NormalDistribution) => ids.extend([WidgetId::MuSlider, WidgetId::SigmaSlider]),
                    Some(Concept::Regression) => {
                        ids.extend([WidgetId::PointsSlider, WidgetId::NoiseSlider, WidgetId::ResampleButton])
                    }
                    Some(Concept::Unrecognized) | None => {}
                }
                ids
            }
            Variant::Topics => {
                let mut ids = vec![WidgetId::TopicSelect];
                match self.current_topic() {
                    Topic::MeanMedian => ids.push(WidgetId::QuizRadio),
                    Topic::ProbabilityBasics => ids.extend([WidgetId::ResampleButton, WidgetId::QuizRadio]),
                    Topic::Distributions => ids.push(WidgetId::ResampleButton),
                    Topic::CustomLesson => ids.push(WidgetId::LessonArea),
                }
                ids
            }
        }
    }

    pub fn focused(&self) -> WidgetId {
        let widgets = self.widgets();
        widgets.get(self.focus).copied().unwrap_or(widgets[0])
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.widgets().len();
    }

    pub fn focus_previous(&mut self) {
        let len = self.widgets().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn toggle_variant(&mut self) {
        self.variant = match self.variant {
            Variant::Concepts => Variant::Topics,
            Variant::Topics => Variant::Concepts,
        };
        self.focus = 0;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Draws one ball with the current slider counts.
    pub fn pick(&mut self) -> Ball {
        let ball = self.session.pick_ball(self.params().balls);
        self.status = Some(format!("You picked a {} ball.", if ball == Ball::Red { "red" } else { "blue" }));
        ball
    }

    pub fn resample(&mut self) {
        self.session.resample();
        self.status = Some("New random sample drawn.".to_string());
    }

    pub fn reset_counters(&mut self) {
        self.session.reset_counters();
        self.status = Some("Pick counters reset.".to_string());
    }

    fn slider_mut(&mut self, id: WidgetId) -> Option<&mut Slider> {
        match id {
            WidgetId::RedSlider => Some(&mut self.red),
            WidgetId::BlueSlider => Some(&mut self.blue),
            WidgetId::MuSlider => Some(&mut self.mu),
            WidgetId::SigmaSlider => Some(&mut self.sigma),
            WidgetId::PointsSlider => Some(&mut self.points),
            WidgetId::NoiseSlider => Some(&mut self.noise),
            _ => None,
        }
    }

    fn text_mut(&mut self, id: WidgetId) -> Option<&mut TextInput> {
        match id {
            WidgetId::Concept => Some(&mut self.concept),
            WidgetId::Numbers => Some(&mut self.numbers),
            WidgetId::LessonArea => Some(&mut self.lesson),
            _ => None,
        }
    }

    /// Applies one key press and recomputes the output.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::F(2) => self.toggle_variant(),
            KeyCode::F(3) => self.toggle_dark_mode(),
            KeyCode::F(5) => self.resample(),
            KeyCode::F(6) => self.reset_counters(),
            _ => self.handle_widget_key(key, ctrl),
        }

        // Typing in the concept box can change which widgets exist.
        self.focus = self.focus.min(self.widgets().len() - 1);
        self.refresh();
    }

    fn handle_widget_key(&mut self, key: KeyEvent, ctrl: bool) {
        let id = self.focused();

        if let Some(input) = self.text_mut(id) {
            match key.code {
                KeyCode::Char(c) if !ctrl => input.insert(c),
                KeyCode::Enter => {
                    input.newline();
                }
                KeyCode::Backspace => {
                    input.backspace();
                }
                KeyCode::Delete => {
                    input.delete();
                }
                KeyCode::Left => input.left(),
                KeyCode::Right => input.right(),
                KeyCode::Home => input.home(),
                KeyCode::End => input.end(),
                KeyCode::Up => self.focus_previous(),
                KeyCode::Down => self.focus_next(),
                _ => {}
            }
            return;
        }

        if let Some(slider) = self.slider_mut(id) {
            match key.code {
                KeyCode::Left | KeyCode::Char('-') => slider.decrement(),
                KeyCode::Right | KeyCode::Char('+') => slider.increment(),
                KeyCode::Home => slider.to_min(),
                KeyCode::End => slider.to_max(),
                KeyCode::Up => self.focus_previous(),
                KeyCode::Down => self.focus_next(),
                _ => {}
            }
            return;
        }

        match id {
            WidgetId::PickButton | WidgetId::ResampleButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if id == WidgetId::PickButton {
                        self.pick();
                    } else {
                        self.resample();
                    }
                }
                KeyCode::Up | KeyCode::Left => self.focus_previous(),
                KeyCode::Down | KeyCode::Right => self.focus_next(),
                _ => {}
            },
            WidgetId::TopicSelect => match key.code {
                KeyCode::Left | KeyCode::Up => self.topic.previous(),
                KeyCode::Right | KeyCode::Down => self.topic.next(),
                _ => {}
            },
            WidgetId::QuizRadio => {
                if let Some(quiz) = self.quiz_mut() {
                    match key.code {
                        KeyCode::Left | KeyCode::Up => quiz.previous(),
                        KeyCode::Right | KeyCode::Down => quiz.next(),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    /// Recomputes the demo output from the current widget values.
    pub fn refresh(&mut self) {
        self.output = match self.variant {
            Variant::Concepts => self
                .concept()
                .map(|concept| dispatch(concept, &self.params(), &self.session)),
            Variant::Topics => {
                let topic = self.current_topic();
                let answer = self.quiz().and_then(|q| q.selected);
                Some(topic_demo(topic, &self.session, answer, self.lesson.text()))
            }
        };
        debug!(
            "Refreshed output: {:?}",
            self.output.as_ref().map(|o| o.heading.as_str())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statsplay_core::NoticeLevel;

    fn app() -> App {
        let mut config = PlaygroundConfig::load_default().unwrap();
        config.seed = Some(42);
        App::new(&config).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn blank_concept_shows_nothing() {
        let app = app();
        assert!(app.output.is_none());
        assert_eq!(app.widgets(), vec![WidgetId::Concept]);
    }

    #[test]
    fn typing_a_concept_routes_to_its_demo() {
        let mut app = app();
        type_text(&mut app, "what is a median?");
        let output = app.output.as_ref().unwrap();
        assert_eq!(output.stat_value("Mean"), Some("5.00"));
        assert_eq!(app.widgets(), vec![WidgetId::Concept, WidgetId::Numbers]);
    }

    #[test]
    fn unknown_concept_shows_help() {
        let mut app = app();
        type_text(&mut app, "entropy");
        assert!(app.output.as_ref().unwrap().has_level(NoticeLevel::Info));
    }

    #[test]
    fn focus_cycles_through_visible_widgets() {
        let mut app = app();
        type_text(&mut app, "normal");
        assert_eq!(app.focused(), WidgetId::Concept);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), WidgetId::MuSlider);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), WidgetId::SigmaSlider);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), WidgetId::Concept);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused(), WidgetId::SigmaSlider);
    }

    #[test]
    fn sliders_clamp_and_feed_the_handler() {
        let mut app = app();
        type_text(&mut app, "normal");
        press(&mut app, KeyCode::Tab);
        for _ in 0..100 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.mu.value(), MU_RANGE.1);
        assert_eq!(app.output.as_ref().unwrap().stat_value("Mean (μ)"), Some("5.00"));
    }

    #[test]
    fn pick_button_keeps_counter_invariant() {
        let mut app = app();
        type_text(&mut app, "probability");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), WidgetId::PickButton);
        for _ in 0..12 {
            press(&mut app, KeyCode::Enter);
        }
        let counters = app.session.counters();
        assert_eq!(counters.total(), 12);
        assert_eq!(counters.red_picked() + counters.blue_picked(), 12);
        assert_eq!(app.output.as_ref().unwrap().stat_value("Total picks"), Some("12"));

        press(&mut app, KeyCode::F(6));
        assert_eq!(app.session.counters().total(), 0);
    }

    #[test]
    fn slider_changes_do_not_touch_counters() {
        let mut app = app();
        type_text(&mut app, "prob");
        app.pick();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.red.value(), 4.0);
        assert_eq!(app.session.counters().total(), 1);
    }

    #[test]
    fn focus_is_clamped_when_widgets_disappear() {
        let mut app = app();
        type_text(&mut app, "regression");
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused(), WidgetId::ResampleButton);
        app.concept.clear();
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.focused(), WidgetId::Concept);
        assert!(app.dark_mode);
    }

    #[test]
    fn topics_variant_gives_quiz_feedback_after_selection() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.variant, Variant::Topics);
        assert_eq!(app.focused(), WidgetId::TopicSelect);
        let output = app.output.as_ref().unwrap();
        assert!(!output.has_level(NoticeLevel::Success));
        assert!(!output.has_level(NoticeLevel::Error));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused(), WidgetId::QuizRadio);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.outlier_quiz.selected_label(), Some("Mean"));
        assert!(app.output.as_ref().unwrap().has_level(NoticeLevel::Success));
    }

    #[test]
    fn custom_lesson_echoes_typed_text() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        for _ in 0..3 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.current_topic(), Topic::CustomLesson);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Variance");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.lesson.text(), "Variance\n");
        assert!(app.output.as_ref().unwrap().has_level(NoticeLevel::Info));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.concept.text(), "");
    }
}
