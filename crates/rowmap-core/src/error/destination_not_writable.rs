use super::Error;

/// Error when the destination cannot be written through.
#[derive(Debug)]
pub(super) struct DestinationNotWritableError {
    type_name: &'static str,
}

impl std::error::Error for DestinationNotWritableError {}

impl core::fmt::Display for DestinationNotWritableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "destination is not writable: {} is shared",
            self.type_name
        )
    }
}

impl Error {
    /// Creates a destination-not-writable error.
    pub fn destination_not_writable(type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::DestinationNotWritable(
            DestinationNotWritableError { type_name },
        ))
    }

    /// Returns `true` if this error is a destination-not-writable error.
    pub fn is_destination_not_writable(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DestinationNotWritable(_))
    }
}
