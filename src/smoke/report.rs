//! Parsing of `key=value` lines printed by smoke snippets.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One `key=value` pair per line; anything else is ignored.
static REPORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([A-Za-z_][A-Za-z0-9_]*)=(.*?)\r?$").expect("REPORT_LINE must compile")
});

/// Values reported by a snippet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetReport {
    values: HashMap<String, String>,
}

impl SnippetReport {
    /// Parse snippet stdout. Later duplicates win.
    pub fn parse(stdout: &str) -> Self {
        let values = REPORT_LINE
            .captures_iter(stdout)
            .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
            .collect();
        Self { values }
    }

    /// Reported value for `key`, if non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// First of `keys` that was not reported.
    pub fn missing<'a>(&self, keys: &[&'a str]) -> Option<&'a str> {
        keys.iter().copied().find(|key| self.get(key).is_none())
    }
}
