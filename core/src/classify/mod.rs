//! Presence classification: deciding whether a value represents "no value".
//!
//! Every classified type reports a [`Kind`]. Reference-like kinds may be *unbound* (the handle refers to
//! nothing), which makes the value absent. Concrete values are never absent, even when they are zero, empty, or
//! `NaN`: an allocated empty `Vec` is present, while a `None::<Vec<_>>` is a nil sequence and thus absent.

use crate::error::{value_required, ValueRequired};
use crate::util::type_name::short_type_name;

pub use dynamic::{Dyn, DynValue};

/// Implements [`Classify`] for allocated containers, which are concrete values; a nil container is an `Option`
/// handle to one, reporting the given handle kind.
macro_rules! impl_container {
  ($handle_kind:expr; $($ty:ty => [$($param:ident),*]),* $(,)?) => {
    $(
      impl<$($param),*> Classify for $ty {
        #[inline]
        fn kind(&self) -> Kind { Kind::Value }
        #[inline]
        fn handle_kind() -> Kind { $handle_kind }
      }
    )*
  };
}

mod dynamic;
mod std_impls;
mod third_party;

/// Runtime category of a classified value.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Kind {
  /// The untyped absence marker; always absent.
  Nothing,
  /// Optional reference to a value, such as `Option<Box<T>>`.
  Pointer,
  /// Raw pointer, which is unbound when null.
  RawPointer,
  /// Dynamically typed box, classified by unwrapping it one level.
  Dynamic,
  /// Optional handle to an associative container.
  Map,
  /// Optional handle to a sequential container.
  Sequence,
  /// Optional handle to a channel endpoint.
  Channel,
  /// Optional handle to a callable.
  Callable,
  /// Concrete value; never absent.
  Value,
}

impl Kind {
  /// Whether values of this kind can be absent.
  #[inline]
  pub const fn is_nullable(self) -> bool {
    !matches!(self, Kind::Value)
  }
}

/// A value whose presence can be classified.
///
/// Implementations exist for the standard library types; use [`impl_present!`](crate::impl_present) to mark your
/// own concrete types.
pub trait Classify {
  /// The runtime kind of this value.
  fn kind(&self) -> Kind;

  /// For nullable kinds, whether this handle refers to something. Ignored for [`Kind::Value`].
  #[inline]
  fn is_bound(&self) -> bool { true }

  /// For [`Kind::Dynamic`], the boxed payload, or `None` if the box is empty.
  #[inline]
  fn payload(&self) -> Option<&dyn Classify> { None }

  /// The kind of a nullable handle to a value of this type, as reported by `Option<Self>`.
  #[inline]
  fn handle_kind() -> Kind where Self: Sized { Kind::Pointer }
}

/// Returns whether `value` represents "no value".
///
/// Dynamic boxes are unwrapped exactly one level: an empty box is absent, and a non-empty box is absent only if
/// its payload is of a nullable kind and unbound. A box nested inside a box is absent only if the inner box is
/// empty; its payload is not inspected.
pub fn is_absent<T: Classify + ?Sized>(value: &T) -> bool {
  match value.kind() {
    Kind::Dynamic => match value.payload() {
      None => true,
      Some(payload) => is_absent_unwrapped(payload),
    },
    kind => is_absent_by_kind(kind, value.is_bound()),
  }
}

fn is_absent_unwrapped(payload: &dyn Classify) -> bool {
  match payload.kind() {
    Kind::Dynamic => payload.payload().is_none(),
    kind => is_absent_by_kind(kind, payload.is_bound()),
  }
}

#[inline]
fn is_absent_by_kind(kind: Kind, is_bound: bool) -> bool {
  match kind {
    Kind::Nothing => true,
    kind if kind.is_nullable() => !is_bound,
    _ => false,
  }
}

/// Returns `value` unchanged.
///
/// # Panics
///
/// Panics with [`ValueRequired`] if `value` [is absent](is_absent).
#[track_caller]
pub fn require_non_absent<T: Classify>(value: T) -> T {
  if is_absent(&value) {
    value_required(&short_type_name::<T>())
  }
  value
}

/// Returns `value` if it is present, or [`ValueRequired`] if it [is absent](is_absent).
pub fn try_require_non_absent<T: Classify>(value: T) -> Result<T, ValueRequired> {
  if is_absent(&value) {
    Err(ValueRequired)
  } else {
    Ok(value)
  }
}

/// The untyped absence marker: a value of no particular type that is always absent.
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Nil;

impl Classify for Nil {
  #[inline]
  fn kind(&self) -> Kind { Kind::Nothing }
}

/// Implements [`Classify`] for concrete types, so that their values are always present.
///
/// ```
/// struct Point { x: i32, y: i32 }
/// optional_core::impl_present!(Point);
/// assert!(!optional_core::classify::is_absent(&Point { x: 0, y: 0 }));
/// ```
#[macro_export]
macro_rules! impl_present {
  ($($ty:ty),* $(,)?) => {
    $(
      impl $crate::classify::Classify for $ty {
        #[inline]
        fn kind(&self) -> $crate::classify::Kind { $crate::classify::Kind::Value }
      }
    )*
  };
}
