use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Segmentation result: four fields, always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedName {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
}

impl ParsedName {
    pub fn new(
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        ParsedName {
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            last_name: last_name.into(),
            suffix: suffix.into(),
        }
    }

    // non-empty fields in input order
    pub fn fields(&self) -> Vec<&str> {
        [
            self.first_name.as_str(),
            self.middle_name.as_str(),
            self.last_name.as_str(),
            self.suffix.as_str(),
        ]
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect()
    }
}

impl Display for ParsedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fields().join(" "))
    }
}
