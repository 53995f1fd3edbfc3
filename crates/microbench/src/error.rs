use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("Invalid version `{version}`: segment `{segment}` is not a non-negative integer")]
    Parse { version: String, segment: String },
    #[error("Cannot select the latest release out of an empty list")]
    EmptyInput,
}

impl Error {
    pub(crate) fn parse(version: &str, segment: &str) -> Self {
        Self::Parse {
            version: version.to_string(),
            segment: segment.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
