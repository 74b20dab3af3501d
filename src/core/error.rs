use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    /// Input produced zero tokens after whitespace splitting.
    #[error("empty input: no name tokens after whitespace splitting")]
    EmptyInput,

    #[error("lexicon config read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lexicon config parse error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
