pub mod config;
pub mod core;
pub mod dict;

use once_cell::sync::Lazy;

pub use crate::config::configuration::LexiconConfig;
pub use crate::core::error::{ParseError, Result};
pub use crate::core::name_segmenter::NameSegmenter;
pub use crate::core::parsed_name::ParsedName;
pub use crate::dict::suffix_lexicon::SuffixLexicon;

pub static GLOBAL_SEGMENTER: Lazy<NameSegmenter> = Lazy::new(NameSegmenter::new);

/// Parses `full_name` with the default suffix lexicon. For a custom
/// lexicon build a [`NameSegmenter`] via [`NameSegmenter::with_lexicon`].
pub fn parse(full_name: &str) -> Result<ParsedName> {
    GLOBAL_SEGMENTER.parse(full_name)
}

#[cfg(test)]
mod tests {
    use crate::ParsedName;

    fn test_once(input: &str, expect: (&str, &str, &str, &str)) {
        let name = crate::parse(input).unwrap();
        assert_eq!(
            ParsedName::new(expect.0, expect.1, expect.2, expect.3),
            name
        );
    }

    #[test]
    fn nameseg_works() {
        test_once(
            "Charles Emerson Winchester, III",
            ("Charles", "Emerson", "Winchester", "III"),
        );
        test_once("Plato", ("", "", "Plato", ""));
        test_once("Jane Doe", ("Jane", "", "Doe", ""));
        test_once("Doe Jr", ("", "", "Doe", "Jr"));
        test_once(
            "John Paul George Ringo",
            ("John", "Paul George", "Ringo", ""),
        );
    }

    #[test]
    fn empty_input_errors() {
        assert!(crate::parse("").is_err());
        assert!(crate::parse(" \n ").is_err());
    }

    #[test]
    fn global_segmenter_is_shareable() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| crate::parse("Jane Q Public Esq.").unwrap()))
            .collect();
        for handle in handles {
            let name = handle.join().unwrap();
            assert_eq!(ParsedName::new("Jane", "Q", "Public", "Esq."), name);
        }
    }
}
