use super::Scan;
use crate::{
    schema::{Primitive, Record, RecordSchema},
    stmt::Type,
};

use std::{any::Any, sync::Arc};
use uuid::Uuid;

/// The shape of a mapping destination, resolved once when a call starts.
pub enum Destination<'a> {
    /// A single record, filled from the first row
    Record(&'a mut dyn Element),

    /// A growable sequence, extended with one element per row
    Sequence(&'a mut dyn Sequence),

    /// A bare primitive value
    Scalar(&'static str),

    /// A record that is shared and therefore cannot be written through
    Shared(&'static str),
}

/// Discriminant of [`Destination`], carried by destination errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKind {
    Record,
    Sequence,
    Scalar,
    Shared,
}

impl Destination<'_> {
    pub fn kind(&self) -> DestinationKind {
        match self {
            Self::Record(_) => DestinationKind::Record,
            Self::Sequence(_) => DestinationKind::Sequence,
            Self::Scalar(_) => DestinationKind::Scalar,
            Self::Shared(_) => DestinationKind::Shared,
        }
    }

    /// Rust type name of the destination, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Record(element) => element.type_name(),
            Self::Sequence(sequence) => sequence.type_name(),
            Self::Scalar(type_name) | Self::Shared(type_name) => type_name,
        }
    }
}

impl core::fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("Destination")
            .field(&self.kind())
            .field(&self.type_name())
            .finish()
    }
}

impl core::fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self {
            Self::Record => "record",
            Self::Sequence => "sequence",
            Self::Scalar => "scalar",
            Self::Shared => "shared record",
        })
    }
}

/// Types that can be handed to a mapper as a destination.
pub trait IntoDestination {
    fn as_destination(&mut self) -> Destination<'_>;
}

/// Whether an element is populated by column name or by position.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Record(&'static RecordSchema),
    Scalar(Type),
}

/// A value the mapper can allocate, scan into, and commit: either a record or
/// a primitive.
pub trait Element: Send + 'static {
    fn shape(&self) -> Shape;

    /// Scan targets in field order; a primitive returns itself.
    fn scan_targets(&mut self) -> Vec<&mut dyn Scan>;

    /// A zero-valued instance.
    fn zeroed() -> Self
    where
        Self: Sized;

    /// A boxed zero-valued instance of the same type as `self`.
    fn scratch(&self) -> Box<dyn Element>;

    /// Replaces `self` with a scratch instance produced by [`Element::scratch`].
    fn commit(&mut self, scratch: Box<dyn Element>);

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Moves a scratch element into `dst`.
///
/// `scratch` must come from `dst.scratch()`; elements of any other type are
/// dropped.
pub fn commit<T: Element>(dst: &mut T, scratch: Box<dyn Element>) {
    match scratch.into_any().downcast::<T>() {
        Ok(value) => *dst = *value,
        Err(_) => debug_assert!(false, "scratch element is not a {}", dst.type_name()),
    }
}

/// A growable sequence of elements.
pub trait Sequence: Send {
    /// A boxed zero-valued element.
    fn scratch(&self) -> Box<dyn Element>;

    /// Appends an element produced by [`Sequence::scratch`].
    fn push(&mut self, element: Box<dyn Element>);

    fn reserve(&mut self, additional: usize);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn type_name(&self) -> &'static str;
}

impl<T: Element> Sequence for Vec<T> {
    fn scratch(&self) -> Box<dyn Element> {
        Box::new(T::zeroed())
    }

    fn push(&mut self, element: Box<dyn Element>) {
        match element.into_any().downcast::<T>() {
            Ok(element) => Vec::push(self, *element),
            Err(_) => debug_assert!(false, "element is not a {}", core::any::type_name::<T>()),
        }
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<T: Element> IntoDestination for Vec<T> {
    fn as_destination(&mut self) -> Destination<'_> {
        Destination::Sequence(self)
    }
}

impl<T: Record + Element> IntoDestination for Arc<T> {
    fn as_destination(&mut self) -> Destination<'_> {
        match Arc::get_mut(self) {
            Some(record) => Destination::Record(record),
            None => Destination::Shared(core::any::type_name::<Self>()),
        }
    }
}

macro_rules! impl_scalar_element {
    ( $( $ty:ty ),* ) => {
        $(
            impl Element for $ty {
                fn shape(&self) -> Shape {
                    Shape::Scalar(<$ty as Primitive>::ty())
                }

                fn scan_targets(&mut self) -> Vec<&mut dyn Scan> {
                    vec![self as &mut dyn Scan]
                }

                fn zeroed() -> Self {
                    <$ty>::default()
                }

                fn scratch(&self) -> Box<dyn Element> {
                    Box::new(Self::zeroed())
                }

                fn commit(&mut self, scratch: Box<dyn Element>) {
                    commit(self, scratch)
                }

                fn into_any(self: Box<Self>) -> Box<dyn Any> {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_scalar_destination {
    ( $( $ty:ty ),* ) => {
        $(
            impl IntoDestination for $ty {
                fn as_destination(&mut self) -> Destination<'_> {
                    Destination::Scalar(core::any::type_name::<Self>())
                }
            }
        )*
    };
}

impl_scalar_element!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Vec<u8>, Uuid);

// `Vec<u8>` is a sequence destination, not a scalar one.
impl_scalar_destination!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Uuid);

impl<T: Primitive> Element for Option<T> {
    fn shape(&self) -> Shape {
        Shape::Scalar(T::ty())
    }

    fn scan_targets(&mut self) -> Vec<&mut dyn Scan> {
        vec![self as &mut dyn Scan]
    }

    fn zeroed() -> Self {
        None
    }

    fn scratch(&self) -> Box<dyn Element> {
        Box::new(Self::zeroed())
    }

    fn commit(&mut self, scratch: Box<dyn Element>) {
        commit(self, scratch)
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<T: Primitive> IntoDestination for Option<T> {
    fn as_destination(&mut self) -> Destination<'_> {
        Destination::Scalar(core::any::type_name::<Self>())
    }
}
