use crate::{schema::Primitive, stmt::Value, Result};

/// A location a row value can be scanned into.
pub trait Scan: Send {
    fn scan(&mut self, value: Value) -> Result<()>;
}

impl<T: Primitive> Scan for T {
    fn scan(&mut self, value: Value) -> Result<()> {
        *self = T::load(value)?;
        Ok(())
    }
}

/// One scan target per result column.
pub enum Slot<'a> {
    /// Writes into a destination field
    Bound(&'a mut dyn Scan),

    /// Reads the value and drops it
    Discard,
}

impl Slot<'_> {
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Writes `value` through the slot.
    pub fn fill(&mut self, value: Value) -> Result<()> {
        match self {
            Self::Bound(target) => target.scan(value),
            Self::Discard => Ok(()),
        }
    }
}

impl core::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Bound(_) => f.write_str("Bound"),
            Self::Discard => f.write_str("Discard"),
        }
    }
}
