use std::any::Any;
use std::fmt;

use crate::util::type_name::shorten;

use super::{Classify, Kind};

/// A classifiable value that can be boxed into a [`Dyn`].
pub trait DynValue: Classify + Any + fmt::Debug {
  fn as_any(&self) -> &dyn Any;
  fn as_classify(&self) -> &dyn Classify;
  /// Name of the concrete type of this value.
  fn type_name(&self) -> &'static str;
}

impl<T: Classify + Any + fmt::Debug> DynValue for T {
  #[inline]
  fn as_any(&self) -> &dyn Any { self }
  #[inline]
  fn as_classify(&self) -> &dyn Classify { self }
  #[inline]
  fn type_name(&self) -> &'static str { std::any::type_name::<T>() }
}

/// A dynamically typed value: an empty box, or a box holding a value of any classifiable type.
///
/// Classification unwraps a `Dyn` one level, so a `Dyn` holding a `None` is absent just like an empty `Dyn`.
#[derive(Default)]
pub struct Dyn(Option<Box<dyn DynValue>>);

impl Dyn {
  /// Creates an empty box.
  #[inline]
  pub fn nil() -> Self { Self(None) }

  /// Boxes `value`.
  #[inline]
  pub fn new<T: DynValue>(value: T) -> Self { Self(Some(Box::new(value))) }

  /// Whether this box is empty. A non-empty box may still hold an absent value.
  #[inline]
  pub fn is_nil(&self) -> bool { self.0.is_none() }

  /// Kind of the boxed value, or `None` if this box is empty.
  #[inline]
  pub fn inner_kind(&self) -> Option<Kind> {
    self.0.as_deref().map(|value| value.kind())
  }

  /// Name of the concrete type of the boxed value, with module paths stripped, or `None` if this box is empty.
  pub fn inner_type_name(&self) -> Option<String> {
    self.0.as_deref().map(|value| shorten(value.type_name()))
  }

  #[inline]
  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.0.as_deref().and_then(|value| value.as_any().downcast_ref())
  }
}

impl Classify for Dyn {
  #[inline]
  fn kind(&self) -> Kind { Kind::Dynamic }
  #[inline]
  fn is_bound(&self) -> bool { !self.is_nil() }
  #[inline]
  fn payload(&self) -> Option<&dyn Classify> {
    self.0.as_deref().map(|value| value.as_classify())
  }
}

impl fmt::Debug for Dyn {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0.as_deref() {
      None => f.write_str("Dyn(<nil>)"),
      Some(value) => write!(f, "Dyn<{}>({:?})", shorten(value.type_name()), value),
    }
  }
}
