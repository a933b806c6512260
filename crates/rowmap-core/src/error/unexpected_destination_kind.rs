use super::Error;
use crate::map::DestinationKind;

/// Error when a mapping operation receives a destination shape it cannot
/// populate.
#[derive(Debug)]
pub(super) struct UnexpectedDestinationKindError {
    kind: DestinationKind,
    type_name: &'static str,
}

impl std::error::Error for UnexpectedDestinationKindError {}

impl core::fmt::Display for UnexpectedDestinationKindError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unexpected destination kind: {} ({})",
            self.kind, self.type_name
        )
    }
}

impl Error {
    /// Creates an unexpected destination kind error.
    pub fn unexpected_destination_kind(kind: DestinationKind, type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::UnexpectedDestinationKind(
            UnexpectedDestinationKindError { kind, type_name },
        ))
    }

    /// Returns `true` if this error is an unexpected destination kind error.
    pub fn is_unexpected_destination_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnexpectedDestinationKind(_))
    }
}
