//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, fill, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn terrain_style(&self) -> ColoredString;
    fn treasure_style(&self) -> ColoredString;
    fn gold_style(&self) -> ColoredString;
    fn news_style(&self) -> ColoredString;
    fn brawl_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn title_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn terrain_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn treasure_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn gold_style(&self) -> ColoredString {
        self.truecolor(255, 200, 0)
    }
    fn news_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn brawl_style(&self) -> ColoredString {
        self.bold().truecolor(230, 80, 80)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
}

impl GameStyle for String {
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn terrain_style(&self) -> ColoredString {
        self.as_str().terrain_style()
    }
    fn treasure_style(&self) -> ColoredString {
        self.as_str().treasure_style()
    }
    fn gold_style(&self) -> ColoredString {
        self.as_str().gold_style()
    }
    fn news_style(&self) -> ColoredString {
        self.as_str().news_style()
    }
    fn brawl_style(&self) -> ColoredString {
        self.as_str().brawl_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
}

/// Wrap narration to the terminal width, keeping its own line breaks.
pub fn wrap_narration(text: &str) -> String {
    let options = Options::new(termwidth().min(100)).subsequent_indent("  ");
    text.lines()
        .map(|line| fill(line, &options))
        .collect::<Vec<_>>()
        .join("\n")
}
