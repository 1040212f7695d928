use hourscope_types::SubredditSuggestion;
use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::DisplayOptions;

/// Numbered suggestion list; numbers are what `:pick` takes.
pub struct SuggestionListView<'a> {
    pub suggestions: &'a [SubredditSuggestion],
    pub options: &'a DisplayOptions,
}

impl<'a> fmt::Display for SuggestionListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.suggestions.is_empty() {
            return writeln!(f, "No matching subreddits.");
        }
        let width = self
            .suggestions
            .iter()
            .map(|s| s.name.len() + 2)
            .max()
            .unwrap_or(0);
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            let name = format!("{:<width$}", format!("r/{}", suggestion.name), width = width + 2);
            if self.options.enable_color {
                writeln!(f, "{:>3}. {} {}", i + 1, name.cyan(), suggestion.title.dimmed())?;
            } else {
                writeln!(f, "{:>3}. {} {}", i + 1, name, suggestion.title)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hourscope_testing::fixtures::suggestions;

    #[test]
    fn test_plain_list() {
        let list = suggestions(&[("rust", "Rust"), ("rust_gamedev", "Rust Gamedev")]);
        let options = DisplayOptions::default();
        let out = SuggestionListView {
            suggestions: &list,
            options: &options,
        }
        .to_string();
        assert_eq!(
            out,
            "  1. r/rust           Rust\n  2. r/rust_gamedev   Rust Gamedev\n"
        );
    }

    #[test]
    fn test_empty_list() {
        let options = DisplayOptions::default();
        let out = SuggestionListView {
            suggestions: &[],
            options: &options,
        }
        .to_string();
        assert_eq!(out, "No matching subreddits.\n");
    }
}
