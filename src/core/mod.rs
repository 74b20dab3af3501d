pub mod error;
pub mod name_segmenter;
pub mod parsed_name;
