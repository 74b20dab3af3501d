pub mod suffix_lexicon;
