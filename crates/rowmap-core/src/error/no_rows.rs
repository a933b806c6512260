use super::Error;

/// Error when a single-record destination receives an empty result and the
/// mapper is configured with `NoRowsPolicy::Error`.
#[derive(Debug)]
pub(super) struct NoRowsError {
    context: Option<Box<str>>,
}

impl std::error::Error for NoRowsError {}

impl core::fmt::Display for NoRowsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no rows returned")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a no-rows error, naming the statement that returned nothing.
    pub fn no_rows(context: impl Into<String>) -> Error {
        let context = context.into();
        Error::from(super::ErrorKind::NoRows(NoRowsError {
            context: (!context.is_empty()).then(|| context.into()),
        }))
    }

    /// Returns `true` if this error is a no-rows error.
    pub fn is_no_rows(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoRows(_))
    }
}
