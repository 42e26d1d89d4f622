use thiserror::Error;

/// Convenient result alias for the kinematics library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raised when an input is non-numeric, non-finite, or negative where a
    /// negative value has no physical meaning.
    #[error("invalid {name}: {message}")]
    InvalidArgument { name: String, message: String },

    /// Raised when the requested burn would take more fuel than the tank holds.
    #[error(
        "fuel exhausted: burn of {requested_kg:.2} kg exceeds the {available_kg:.2} kg available"
    )]
    FuelExhausted { requested_kg: f64, available_kg: f64 },
}

impl Error {
    pub(crate) fn invalid(name: &str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error is the fuel exhaustion condition rather than bad input.
    pub fn is_fuel_exhausted(&self) -> bool {
        matches!(self, Error::FuelExhausted { .. })
    }
}
