use crate::content::{HEADER_STATUS, HEADER_TITLE};
use clap::ValueEnum;
use crossterm::style::{style, Stylize};
use crossterm::tty::IsTty;

pub const RULE_CHAR: char = '─';
pub const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves against the process environment: `NO_COLOR` and whether
    /// stdout is a terminal.
    pub fn enabled(self) -> bool {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        self.resolve(no_color, std::io::stdout().is_tty())
    }

    pub fn resolve(self, no_color: bool, is_tty: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !no_color && is_tty,
        }
    }
}

/// Bold cyan when `color` is set, the text itself otherwise.
pub fn emphasize(text: &str, color: bool) -> String {
    if color {
        style(text).cyan().bold().to_string()
    } else {
        text.to_string()
    }
}

fn rule() -> String {
    RULE_CHAR.to_string().repeat(RULE_WIDTH)
}

/// The four-line header shown when `create cluster` starts. No trailing
/// newline.
pub fn render_header(color: bool) -> String {
    let rule = rule();
    format!(
        "{rule}\n{}\n{rule}\n{}",
        emphasize(HEADER_TITLE, color),
        emphasize(HEADER_STATUS, color),
    )
}
