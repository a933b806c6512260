use super::Error;

/// Error when a row value could not be scanned into its bound slot.
#[derive(Debug)]
pub(super) struct ColumnScanError {
    column: Box<str>,
    position: usize,
}

impl std::error::Error for ColumnScanError {}

impl core::fmt::Display for ColumnScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to scan column `{}` (position {})",
            self.column, self.position
        )
    }
}

impl Error {
    /// Creates a column scan error.
    ///
    /// Usually attached with [`Error::context`] on top of the conversion or
    /// driver error that caused the scan to fail.
    pub fn column_scan(column: impl Into<String>, position: usize) -> Error {
        Error::from(super::ErrorKind::ColumnScan(ColumnScanError {
            column: column.into().into(),
            position,
        }))
    }

    /// Returns `true` if this error is a column scan error.
    pub fn is_column_scan(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ColumnScan(_))
    }
}
