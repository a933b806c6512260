//! Maps result rows onto records.
//!
//! A call resolves its destination once into a [`Destination`], executes the
//! statement through a [`Session`](crate::Session), then binds each row's
//! columns to the destination's fields by name and scans the values in.

mod bind;
pub use bind::RowBinder;

mod conditional;
pub use conditional::ConditionalMapper;

mod destination;
pub use destination::{
    commit, Destination, DestinationKind, Element, IntoDestination, Sequence, Shape,
};

mod result;
pub use result::{NoRowsPolicy, ResultMapper};

mod slot;
pub use slot::{Scan, Slot};
