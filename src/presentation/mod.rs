//! Client-side front end: picks an action, calls the HTTP endpoints and
//! renders the answer for a terminal.

pub mod client;

pub use client::{PresentationError, ReferentClient};

use clap::ValueEnum;
use std::fmt::{Display, Formatter};

use crate::generation::GenerationMode;

const BULLET: &str = "•";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// What the article is about
    Summary,
    /// Key theses as a list
    Thesis,
    /// Ready-to-publish Telegram post
    Telegram,
    /// Full Russian translation
    Translate,
}

impl Action {
    /// The generation mode behind the action; `None` for translation,
    /// which goes through the parse and translate endpoints instead.
    pub fn mode(self) -> Option<GenerationMode> {
        match self {
            Self::Summary => Some(GenerationMode::Summary),
            Self::Thesis => Some(GenerationMode::Thesis),
            Self::Telegram => Some(GenerationMode::Telegram),
            Self::Translate => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "What is the article about?",
            Self::Thesis => "Theses",
            Self::Telegram => "Telegram post",
            Self::Translate => "Translation",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.mode() {
            Some(mode) => f.write_str(mode.as_str()),
            None => f.write_str("translate"),
        }
    }
}

/// Thesis output becomes one bullet per non-empty line, whatever list
/// marker the model used. Everything else is shown verbatim.
pub fn render(action: Action, text: &str) -> String {
    if action != Action::Thesis {
        return text.to_string();
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let item = line
                .strip_prefix(BULLET)
                .or_else(|| line.strip_prefix('-'))
                .or_else(|| line.strip_prefix('*'))
                .unwrap_or(line)
                .trim_start();
            format!("{} {}", BULLET, item)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
