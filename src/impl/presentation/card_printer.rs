use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    config::CardConfig,
    entities::{PrintableCard, Recibo},
    errors::UnreplacedPlaceholdersRemain,
    presentation::recibo_fmt::PLACEHOLDER_KEYS,
};

/// Lays out receipts into printable cards following a [`CardConfig`]
/// template.
pub(crate) struct CardPrinter {
    config: CardConfig,
    placeholder_pattern: Regex,
}

impl CardPrinter {
    /// Fails if the template references a key no receipt can fill.
    pub(crate) fn new(config: CardConfig) -> Result<Self, ServerError> {
        // Placeholders of the form {{key}}.
        let placeholder_pattern =
            Regex::new(r"\{\{(\w+)\}\}").expect("hardcoded regex should be valid");

        let mut unknown_keys: Vec<String> = Vec::new();
        for line in &config.lines {
            for caps in placeholder_pattern.captures_iter(line) {
                if !PLACEHOLDER_KEYS.contains(&&caps[1]) {
                    unknown_keys.push(caps[1].to_string());
                }
            }
        }
        if !unknown_keys.is_empty() {
            return Err(UnreplacedPlaceholdersRemain::new(&unknown_keys));
        }

        Ok(Self {
            config,
            placeholder_pattern,
        })
    }

    pub(crate) fn print(&self, recibo: &Recibo) -> PrintableCard {
        let width = self.config.width;
        let separator = "-".repeat(width);
        let mut lines = Vec::new();

        lines.extend(centered(&self.config.title, width));
        lines.push(separator.clone());
        for template in &self.config.lines {
            let filled = self
                .placeholder_pattern
                .replace_all(template, |caps: &regex::Captures| {
                    recibo.placeholder(&caps[1]).unwrap_or_default()
                });
            lines.extend(textwrap::wrap(&filled, width).into_iter().map(|l| l.into_owned()));
        }
        lines.push(separator);
        for footer in &self.config.footer {
            lines.extend(centered(footer, width));
        }

        PrintableCard {
            recibo_id: recibo.id.clone(),
            lines,
        }
    }
}

/// Wraps `text` to `width` and centres each resulting line.
fn centered(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width)
        .into_iter()
        .map(|l| format!("{:^width$}", l).trim_end().to_string())
        .collect()
}
