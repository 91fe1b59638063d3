//! Keyword matching (Aho-Corasick)

use aho_corasick::AhoCorasick;
use custdna_core::Result;

/// Case-insensitive substring matcher over a fixed keyword list
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    name: String,
    keywords: Vec<String>,
    automaton: AhoCorasick,
}

impl KeywordMatcher {
    /// Build a matcher. Empty keywords are dropped.
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| !k.is_empty())
            .collect();

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&keywords)
            .map_err(|e| {
                custdna_core::Error::config(format!("Failed to build {name} keyword matcher: {e}"))
            })?;

        Ok(Self {
            name,
            keywords,
            automaton,
        })
    }

    /// True when any keyword occurs anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        !self.keywords.is_empty() && self.automaton.is_match(text)
    }

    /// The leftmost keyword found in `text`
    pub fn first_match(&self, text: &str) -> Option<&str> {
        if self.keywords.is_empty() {
            return None;
        }
        self.automaton
            .find(text)
            .map(|m| self.keywords[m.pattern().as_usize()].as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
