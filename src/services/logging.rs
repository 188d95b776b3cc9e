// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Logging setup and helpers for keeping user input out of log lines.

use tracing_subscriber::EnvFilter;

const MAX_LOGGED_CHARS: usize = 64;

/// Install the global `tracing` subscriber, filtered by `RUST_LOG` (default `info`).
/// Logs go to stderr so command output on stdout stays machine readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Shorten free text (search queries) for logging.
/// Cuts on a character boundary and marks the cut with "...".
pub fn truncate_for_log(text: &str) -> String {
    match text.char_indices().nth(MAX_LOGGED_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_for_log("limpeza urbana"), "limpeza urbana");
        assert_eq!(truncate_for_log(""), "");
    }

    #[test]
    fn test_long_text_truncated() {
        let long = "a".repeat(100);
        let logged = truncate_for_log(&long);
        assert_eq!(logged.len(), MAX_LOGGED_CHARS + 3);
        assert!(logged.ends_with("..."));
    }

    #[test]
    fn test_truncation_respects_multibyte_chars() {
        let long = "ç".repeat(100);
        let logged = truncate_for_log(&long);
        assert_eq!(logged.chars().count(), MAX_LOGGED_CHARS + 3);
    }
}
