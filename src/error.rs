use thiserror::Error;

use crate::domain::{InstrumentId, Quantity};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors a back office reports when it cannot place an order.
///
/// The `Display` text is what observers see in a failure notice, so it is
/// written for humans.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("{0}")]
    Rejected(String),

    #[error("not enough stock available for {instrument}: requested {requested}, available {available}")]
    InsufficientStock {
        instrument: InstrumentId,
        requested: Quantity,
        available: Quantity,
    },

    #[error("instrument not offered by back office: {0}")]
    UnknownInstrument(InstrumentId),

    #[error("back office unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("invalid tick on line {line}: {source}")]
    Tick {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_shown_verbatim() {
        let err = ExecutionError::Rejected("No enough stock available".into());
        assert_eq!(err.to_string(), "No enough stock available");
    }

    #[test]
    fn insufficient_stock_names_instrument_and_amounts() {
        let err = ExecutionError::InsufficientStock {
            instrument: InstrumentId::from("FB"),
            requested: 100,
            available: 40,
        };
        assert_eq!(
            err.to_string(),
            "not enough stock available for FB: requested 100, available 40"
        );
    }

    #[test]
    fn config_error_converts_into_error() {
        let err: Error = ConfigError::MissingField { field: "instrument" }.into();
        assert!(matches!(err, Error::Config(ConfigError::MissingField { .. })));
        assert_eq!(err.to_string(), "missing required field: instrument");
    }
}
