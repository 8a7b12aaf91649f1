// statsplay/src/tui/ui.rs
//! TUI rendering for Stats Playground.
//!
//! Layout: a title bar with key hints, a controls sidebar on the left, and
//! the demo output (heading, statistics, notices, chart) on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap},
};

use statsplay_core::{DemoOutput, Variant};

use crate::tui::app::{App, WidgetId};
use crate::tui::widgets::{RadioGroup, Slider, TextInput};
use crate::ui::chart_view::render_chart;
use crate::ui::theme::{ThemeEntry, ThemeMap, style_for};

pub const TITLE: &str = "Stats Playground";

/// Main draw cycle.
pub fn draw(f: &mut Frame, app: &App, theme_map: &ThemeMap) {
    f.render_widget(Block::default().style(style_for(ThemeEntry::Background, theme_map)), f.area());

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8), Constraint::Length(1)])
        .split(f.area());

    render_header(f, app, vertical_chunks[0], theme_map);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(30)])
        .split(vertical_chunks[1]);

    render_controls(f, app, content_chunks[0], theme_map);
    render_output(f, app, content_chunks[1], theme_map);

    let status = app.status.clone().unwrap_or_default();
    f.render_widget(
        Paragraph::new(Span::styled(status, style_for(ThemeEntry::Info, theme_map))),
        vertical_chunks[2],
    );
}

fn render_header(f: &mut Frame, app: &App, area: Rect, theme_map: &ThemeMap) {
    let mode = match app.variant {
        Variant::Concepts => "Concepts",
        Variant::Topics => "Topics",
    };
    let hint = style_for(ThemeEntry::Prompt, theme_map);
    let header_text = Line::from(vec![
        Span::styled(format!(" {} ", TITLE), style_for(ThemeEntry::Header, theme_map).bold()),
        Span::raw(format!("[{}] | ", mode)),
        Span::styled("[Tab] Focus ", hint),
        Span::styled("[←/→] Adjust ", hint),
        Span::styled("[Enter] Press ", hint),
        Span::styled("[F2] Variant ", hint),
        Span::styled("[F3] Dark ", hint),
        Span::styled("[F5] Resample ", hint),
        Span::styled("[F6] Reset ", hint),
        Span::styled("[Esc] Quit", style_for(ThemeEntry::Error, theme_map)),
    ]);

    let header = Paragraph::new(header_text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style_for(ThemeEntry::Border, theme_map)),
    );
    f.render_widget(header, area);
}

fn control_block<'a>(title: &'a str, focused: bool, theme_map: &ThemeMap) -> Block<'a> {
    let border = if focused {
        style_for(ThemeEntry::Focus, theme_map).add_modifier(Modifier::BOLD)
    } else {
        style_for(ThemeEntry::Border, theme_map)
    };
    let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(border);
    if title.is_empty() {
        return block;
    }
    block.title(Span::styled(format!(" {} ", title), style_for(ThemeEntry::Prompt, theme_map)))
}

fn widget_height(app: &App, id: WidgetId) -> u16 {
    match id {
        WidgetId::TopicSelect => 2 + app.topic.options.len() as u16,
        WidgetId::QuizRadio => 3 + app.quiz().map_or(0, |q| q.options.len() as u16),
        WidgetId::LessonArea => 8,
        _ => 3,
    }
}

fn render_controls(f: &mut Frame, app: &App, area: Rect, theme_map: &ThemeMap) {
    let outer = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style_for(ThemeEntry::Border, theme_map))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let widgets = app.widgets();
    let focused = app.focused();
    let mut constraints: Vec<Constraint> = widgets.iter().map(|id| Constraint::Length(widget_height(app, *id))).collect();
    constraints.push(Constraint::Min(0));
    let slots = Layout::default().direction(Direction::Vertical).constraints(constraints).split(inner);

    for (id, slot) in widgets.iter().zip(slots.iter()) {
        let is_focused = *id == focused;
        match id {
            WidgetId::Concept => render_text_input(f, *slot, &app.concept, "Type a concept", is_focused, theme_map),
            WidgetId::Numbers => render_text_input(f, *slot, &app.numbers, "Numbers (comma separated)", is_focused, theme_map),
            WidgetId::LessonArea => render_text_input(f, *slot, &app.lesson, "Paste your lesson", is_focused, theme_map),
            WidgetId::RedSlider => render_slider(f, *slot, &app.red, is_focused, theme_map),
            WidgetId::BlueSlider => render_slider(f, *slot, &app.blue, is_focused, theme_map),
            WidgetId::MuSlider => render_slider(f, *slot, &app.mu, is_focused, theme_map),
            WidgetId::SigmaSlider => render_slider(f, *slot, &app.sigma, is_focused, theme_map),
            WidgetId::PointsSlider => render_slider(f, *slot, &app.points, is_focused, theme_map),
            WidgetId::NoiseSlider => render_slider(f, *slot, &app.noise, is_focused, theme_map),
            WidgetId::PickButton => render_button(f, *slot, "Pick a Ball", is_focused, theme_map),
            WidgetId::ResampleButton => render_button(f, *slot, "Resample", is_focused, theme_map),
            WidgetId::TopicSelect => render_radio(f, *slot, &app.topic, None, is_focused, theme_map),
            WidgetId::QuizRadio => {
                if let Some(radio) = app.quiz() {
                    let prompt = app.current_topic().quiz().map(|q| q.prompt);
                    render_radio(f, *slot, radio, prompt, is_focused, theme_map);
                }
            }
        }
    }
}

fn render_text_input(f: &mut Frame, area: Rect, input: &TextInput, title: &str, focused: bool, theme_map: &ThemeMap) {
    let text_style = style_for(ThemeEntry::Text, theme_map);
    let para = Paragraph::new(input.text().to_string())
        .style(text_style)
        .wrap(Wrap { trim: false })
        .block(control_block(title, focused, theme_map));
    f.render_widget(para, area);

    if focused && !input.multiline {
        // Single-line inputs scroll off the right edge; keep the cursor on the border.
        let x = area.x + 1 + (input.cursor() as u16).min(area.width.saturating_sub(3));
        f.set_cursor_position((x, area.y + 1));
    }
}

fn render_slider(f: &mut Frame, area: Rect, slider: &Slider, focused: bool, theme_map: &ThemeMap) {
    let gauge = Gauge::default()
        .block(control_block(slider.label, focused, theme_map))
        .gauge_style(style_for(if focused { ThemeEntry::Focus } else { ThemeEntry::Stat }, theme_map))
        .label(slider.display_value())
        .ratio(slider.ratio().clamp(0.0, 1.0));
    f.render_widget(gauge, area);
}

fn render_button(f: &mut Frame, area: Rect, label: &str, focused: bool, theme_map: &ThemeMap) {
    let style = if focused {
        style_for(ThemeEntry::Focus, theme_map).add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style_for(ThemeEntry::Prompt, theme_map)
    };
    let button = Paragraph::new(Span::styled(format!(" {} ", label), style))
        .alignment(Alignment::Center)
        .block(control_block("", focused, theme_map));
    f.render_widget(button, area);
}

fn render_radio(
    f: &mut Frame,
    area: Rect,
    radio: &RadioGroup,
    prompt: Option<&str>,
    focused: bool,
    theme_map: &ThemeMap,
) {
    let mut lines = Vec::new();
    if let Some(prompt) = prompt {
        lines.push(Line::from(Span::styled(prompt.to_string(), style_for(ThemeEntry::Text, theme_map))));
    }
    for (i, option) in radio.options.iter().enumerate() {
        let selected = radio.selected == Some(i);
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected { style_for(ThemeEntry::Stat, theme_map).bold() } else { style_for(ThemeEntry::Text, theme_map) };
        lines.push(Line::from(Span::styled(format!("{} {}", marker, option), style)));
    }
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(control_block(radio.label, focused, theme_map));
    f.render_widget(para, area);
}

fn output_lines<'a>(output: &'a DemoOutput, theme_map: &ThemeMap) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if !output.stats.is_empty() {
        let width = output.stats.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
        for stat in &output.stats {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<width$}  ", stat.label, width = width), style_for(ThemeEntry::Prompt, theme_map)),
                Span::styled(stat.value.as_str(), style_for(ThemeEntry::Stat, theme_map).bold()),
            ]));
        }
        lines.push(Line::default());
    }
    for notice in &output.notices {
        let style = style_for(ThemeEntry::for_notice(notice.level), theme_map);
        for text in notice.message.lines() {
            lines.push(Line::from(Span::styled(text, style)));
        }
    }
    lines
}

fn render_output(f: &mut Frame, app: &App, area: Rect, theme_map: &ThemeMap) {
    let Some(output) = &app.output else {
        let hint = Paragraph::new("Type a concept such as 'probability', 'median', 'normal' or 'regression'.")
            .style(style_for(ThemeEntry::Text, theme_map))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style_for(ThemeEntry::Border, theme_map)),
            );
        f.render_widget(hint, area);
        return;
    };

    let lines = output_lines(output, theme_map);
    let text_height = (lines.len() as u16 + 2).min(area.height / 2).max(3);
    let constraints = if output.chart.is_some() {
        vec![Constraint::Length(text_height), Constraint::Min(6)]
    } else {
        vec![Constraint::Min(3)]
    };
    let chunks = Layout::default().direction(Direction::Vertical).constraints(constraints).split(area);

    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", output.heading),
                    style_for(ThemeEntry::Heading, theme_map).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style_for(ThemeEntry::Border, theme_map))
                .padding(Padding::new(1, 1, 0, 0)),
        );
    f.render_widget(text, chunks[0]);

    if let Some(chart) = &output.chart {
        render_chart(f, chunks[1], chart, theme_map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use statsplay_core::PlaygroundConfig;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_title_and_demo_heading() {
        let mut config = PlaygroundConfig::load_default().unwrap();
        config.seed = Some(3);
        let mut app = App::new(&config).unwrap();
        for c in "regression".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let theme = crate::ui::theme::ThemeStyle::default_theme_map();
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| draw(f, &app, &theme)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains(TITLE));
        assert!(text.contains("Linear Regression"));
        assert!(text.contains("Resample"));
    }

    #[test]
    fn draws_topics_variant_in_dark_mode() {
        let mut config = PlaygroundConfig::load_default().unwrap();
        config.variant = Some(Variant::Topics);
        let app = App::new(&config).unwrap();
        let theme = crate::ui::theme::ThemeStyle::dark_theme_map();
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| draw(f, &app, &theme)).unwrap();
        assert!(screen_text(&terminal).contains("Understanding Mean & Median"));
    }
}
