use std::collections::HashSet;

use phf::{phf_set, Set};

use crate::config::configuration::LexiconConfig;

// Generational and honorific suffixes recognized out of the box.
// Membership is exact and case-sensitive.
static BUILTIN_SUFFIXES: Set<&'static str> = phf_set! {
    "Jr",
    "Jr.",
    "Sr",
    "Sr.",
    "I",
    "II",
    "III",
    "IV",
    "V",
    "Esq",
    "Esq.",
    "MD",
    "M.D.",
    "PhD",
    "Ph.D.",
};

/// Suffix lexicon manager: builtin set plus caller extensions, with a
/// disable list masking individual entries.
#[derive(Debug, Default, Clone)]
pub struct SuffixLexicon {
    // caller-added entries
    extension: HashSet<String>,
    // masked entries
    disabled: HashSet<String>,
}

impl SuffixLexicon {
    pub fn from_config(cfg: &LexiconConfig) -> Self {
        let mut lexicon = SuffixLexicon::default();
        lexicon.add_suffixes(cfg.extra_suffixes.iter().map(String::as_str).collect());
        lexicon.disable_suffixes(cfg.disabled_suffixes.iter().map(String::as_str).collect());
        log::info!(
            "suffix lexicon loaded: {} active entries ({} extra, {} disabled)",
            lexicon.len(),
            cfg.extra_suffixes.len(),
            cfg.disabled_suffixes.len()
        );
        lexicon
    }

    // batch-add new entries
    pub fn add_suffixes(&mut self, suffixes: Vec<&str>) {
        for suffix in suffixes {
            self.disabled.remove(suffix);
            self.extension.insert(suffix.to_string());
        }
    }

    // batch-mask entries
    pub fn disable_suffixes(&mut self, suffixes: Vec<&str>) {
        for suffix in suffixes {
            self.disabled.insert(suffix.to_string());
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        if self.disabled.contains(token) {
            return false;
        }
        BUILTIN_SUFFIXES.contains(token) || self.extension.contains(token)
    }

    /// Count of active entries.
    pub fn len(&self) -> usize {
        BUILTIN_SUFFIXES
            .iter()
            .filter(|s| !self.extension.contains(**s))
            .count()
            + self.extension.len()
            - self.disabled.iter().filter(|s| self.contains_raw(s)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // membership ignoring the disable list
    fn contains_raw(&self, token: &str) -> bool {
        BUILTIN_SUFFIXES.contains(token) || self.extension.contains(token)
    }
}
