use log::trace;

use crate::core::error::{ParseError, Result};
use crate::core::parsed_name::ParsedName;
use crate::dict::suffix_lexicon::SuffixLexicon;

/// Positional name segmenter.
///
/// Assigns first/middle/last/suffix purely by token position and count,
/// plus an exact-match suffix lexicon on the trailing token. Pure and
/// reentrant; safe to share across threads.
pub struct NameSegmenter {
    lexicon: SuffixLexicon,
}

impl Default for NameSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSegmenter {
    pub fn new() -> Self {
        NameSegmenter {
            lexicon: SuffixLexicon::default(),
        }
    }

    pub fn with_lexicon(lexicon: SuffixLexicon) -> Self {
        NameSegmenter { lexicon }
    }

    pub fn lexicon(&self) -> &SuffixLexicon {
        &self.lexicon
    }

    /// Splits `full_name` into first name, middle name(s), last name and
    /// suffix. `"Charles Emerson Winchester, III"` comes back as
    /// `("Charles", "Emerson", "Winchester", "III")`.
    pub fn parse(&self, full_name: &str) -> Result<ParsedName> {
        let tokens: Vec<&str> = full_name.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let count = tokens.len();
        let last = tokens[count - 1];

        // A lone token never carries a suffix, even when it matches the
        // lexicon; one token is sorted as a last name (Plato, Aristotle).
        let mut name = if count >= 2 && self.lexicon.contains(last) {
            trace!("suffix branch: {} tokens, suffix {:?}", count, last);
            match count {
                // last name, suffix
                2 => ParsedName::new("", "", tokens[0], last),
                // first name, last name, suffix
                3 => ParsedName::new(tokens[0], "", tokens[1], last),
                // first name, middle name(s), last name, suffix
                _ => ParsedName::new(
                    tokens[0],
                    tokens[1..count - 2].join(" "),
                    tokens[count - 2],
                    last,
                ),
            }
        } else {
            trace!("positional branch: {} tokens", count);
            match count {
                1 => ParsedName::new("", "", tokens[0], ""),
                // first name, last name
                2 => ParsedName::new(tokens[0], "", last, ""),
                // first name, middle name(s), last name
                _ => ParsedName::new(
                    tokens[0],
                    tokens[1..count - 1].join(" "),
                    last,
                    "",
                ),
            }
        };

        // drop the comma left between last name and suffix ("Winchester,")
        let keep = name.last_name.trim_end_matches(',').len();
        name.last_name.truncate(keep);
        Ok(name)
    }
}
