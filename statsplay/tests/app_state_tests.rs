// statsplay/tests/app_state_tests.rs
//! Drives the interactive shell's state machine with synthetic key events,
//! starting from a user configuration file. No terminal is involved.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io::Write;
use tempfile::NamedTempFile;

use statsplay::tui::app::{App, WidgetId};
use statsplay::utils::settings::load_config;
use statsplay_core::{NoticeLevel, Variant};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn app_from_yaml(yaml: &str) -> Result<App> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{}", yaml)?;
    let config = load_config(Some(file.path()))?;
    Ok(App::new(&config)?)
}

#[test_log::test]
fn configured_concept_opens_its_demo() -> Result<()> {
    let app = app_from_yaml("seed: 5\ndefaults:\n  concept: regression\n  points: 120\n  noise: 0.0")?;
    assert_eq!(app.focused(), WidgetId::Concept);
    assert_eq!(app.points.value(), 120.0);

    let output = app.output.as_ref().expect("regression output");
    assert_eq!(output.stat_value("Slope"), Some("2.00"));
    assert_eq!(output.stat_value("Intercept"), Some("3.00"));
    Ok(())
}

#[test_log::test]
fn regression_sample_only_changes_on_resample() -> Result<()> {
    let mut app = app_from_yaml("seed: 5\ndefaults:\n  concept: regression\n  noise: 1.5")?;
    let before = app.output.clone();

    press(&mut app, KeyCode::F(3));
    assert_eq!(app.output, before);

    press(&mut app, KeyCode::F(5));
    assert_ne!(app.output, before);
    Ok(())
}

#[test_log::test]
fn topics_variant_from_config() -> Result<()> {
    let mut app = app_from_yaml("variant: topics\ndark_mode: true")?;
    assert_eq!(app.variant, Variant::Topics);
    assert!(app.dark_mode);

    // Probability Basics: resample button, then the coin quiz.
    press(&mut app, KeyCode::Right);
    assert_eq!(app.widgets(), vec![WidgetId::TopicSelect, WidgetId::ResampleButton, WidgetId::QuizRadio]);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.coin_quiz.selected_label(), Some("0.5"));
    assert!(app.output.as_ref().expect("topic output").has_level(NoticeLevel::Success));
    Ok(())
}
