//! Headless commands: render one demo to stdout and exit.

pub mod explain;
pub mod topic;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io::{self, Write};

use statsplay_core::DemoOutput;

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Writes `output` as colored text, or as pretty JSON when `json` is set.
pub fn emit_output<W: Write>(writer: &mut W, output: &DemoOutput, json: bool, theme_map: &ThemeMap, color: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(output).context("Failed to serialize demo output")?;
        writeln!(writer, "{}", text)?;
    } else {
        output_format::print_demo_output(writer, output, theme_map, color).context("Failed to write demo output")?;
    }
    Ok(())
}

/// [`emit_output`] to stdout, colored only when stdout is a terminal.
pub fn print_to_stdout(output: &DemoOutput, json: bool, theme_map: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    emit_output(&mut writer, output, json, theme_map, supports_color)
}
