//! `statsplay topic`: print one of the fixed lessons.

use anyhow::Result;
use log::info;

use statsplay_core::{lesson, PlaygroundConfig, Session, Topic};

use crate::cli::TopicCommand;
use crate::commands::print_to_stdout;
use crate::ui::theme::ThemeMap;

pub fn run_topic(cmd: &TopicCommand, config: &PlaygroundConfig, theme_map: &ThemeMap) -> Result<()> {
    let topic = Topic::from(cmd.topic);
    info!("Showing topic '{}'", topic.label());

    let session = Session::new(config.seed);
    let output = lesson(topic, cmd.answer.as_deref(), cmd.lesson.as_deref().unwrap_or(""), &session);
    print_to_stdout(&output, cmd.json, theme_map)
}
