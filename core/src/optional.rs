use std::fmt;

use crate::classify::{is_absent, require_non_absent, try_require_non_absent, Classify, Kind};
use crate::error::{value_required, ValueRequired};
use crate::util::type_name::short_type_name;

/// A container that either holds exactly one present value, or holds none.
///
/// Presence is decided once at construction time and never changes; every combinator returns a new `Optional`.
/// An absent `Optional` still stores a payload: the default value of `T` when created with [`empty`](Self::empty),
/// or the absent value itself when created with [`of_nullable`](Self::of_nullable). That payload is never
/// treated as meaningful.
#[derive(Clone, Copy, Debug)]
pub struct Optional<T> {
  value: T,
  present: bool,
}


// Construction

impl<T: Classify> Optional<T> {
  /// Creates a present `Optional` holding `value`, for when the caller guarantees that `value` is present.
  ///
  /// # Panics
  ///
  /// Panics with [`ValueRequired`] if `value` [is absent](is_absent).
  #[track_caller]
  #[inline]
  pub fn of_present(value: T) -> Self {
    Self { value: require_non_absent(value), present: true }
  }

  /// Creates a present `Optional` holding `value`, or returns [`ValueRequired`] if `value` [is absent](is_absent).
  #[inline]
  pub fn try_of_present(value: T) -> Result<Self, ValueRequired> {
    try_require_non_absent(value).map(|value| Self { value, present: true })
  }

  /// Creates an `Optional` holding `value`, which is present unless `value` [is absent](is_absent).
  #[inline]
  pub fn of_nullable(value: T) -> Self {
    let present = !is_absent(&value);
    Self { value, present }
  }
}

impl<T: Default> Optional<T> {
  /// Creates an absent `Optional`.
  #[inline]
  pub fn empty() -> Self {
    Self { value: T::default(), present: false }
  }
}

impl<T: Default> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::empty() }
}


// Accessors

impl<T> Optional<T> {
  #[inline]
  pub fn is_present(&self) -> bool { self.present }

  #[inline]
  pub fn is_empty(&self) -> bool { !self.present }

  /// Returns the stored payload, which is meaningless when [empty](Self::is_empty).
  #[inline]
  pub fn value(&self) -> &T { &self.value }

  /// Returns the stored payload, which is meaningless when [empty](Self::is_empty).
  #[inline]
  pub fn into_value(self) -> T { self.value }

  /// Returns the value if present.
  ///
  /// # Panics
  ///
  /// Panics with [`ValueRequired`] if [empty](Self::is_empty).
  #[track_caller]
  #[inline]
  pub fn require_value(self) -> T {
    if self.present {
      self.value
    } else {
      value_required(&short_type_name::<T>())
    }
  }

  /// Returns the value if present, or [`ValueRequired`] if [empty](Self::is_empty).
  #[inline]
  pub fn try_value(self) -> Result<T, ValueRequired> {
    if self.present { Ok(self.value) } else { Err(ValueRequired) }
  }

  /// Returns the value if present, otherwise `default`. `default` is evaluated eagerly; use
  /// [`or_else_compute`](Self::or_else_compute) for fallbacks that are expensive to create.
  #[inline]
  pub fn or_else(self, default: T) -> T {
    if self.present { self.value } else { default }
  }

  /// Returns the value if present, otherwise the result of `supplier`, which is only called when empty.
  #[inline]
  pub fn or_else_compute(self, supplier: impl FnOnce() -> T) -> T {
    if self.present { self.value } else { supplier() }
  }

  /// Calls `action` with the value if present.
  #[inline]
  pub fn if_present(self, action: impl FnOnce(T)) {
    if self.present {
      action(self.value);
    }
  }

  /// Returns `self` if empty or if the value matches `predicate`, otherwise an empty `Optional`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self where
    T: Default
  {
    if !self.present || predicate(&self.value) {
      self
    } else {
      Self::empty()
    }
  }

  /// Borrows the payload, keeping presence.
  #[inline]
  pub fn as_ref(&self) -> Optional<&T> {
    Optional { value: &self.value, present: self.present }
  }

  /// Converts into an [`Option`], which is `None` when empty.
  #[inline]
  pub fn into_option(self) -> Option<T> {
    if self.present { Some(self.value) } else { None }
  }
}

impl<T: Default> Optional<Optional<T>> {
  /// Removes one level of nesting; empty if either level is empty.
  #[inline]
  pub fn flatten(self) -> Optional<T> {
    if self.present { self.value } else { Optional::empty() }
  }
}


// Combinators

impl<T> Optional<T> {
  /// Applies `f` to the value if present, wrapping the result [as if by `of_nullable`](Self::of_nullable), so an
  /// absent result gives an empty `Optional`. If empty, `f` is not called.
  ///
  /// `E` must implement [`Default`] because an empty result holds the default payload. Types without a default,
  /// such as references, raw pointers or channel endpoints, can be wrapped in an `Option` to map to them, and then
  /// classify as a nil handle when `None`.
  #[inline]
  pub fn map<E: Classify + Default>(self, f: impl FnOnce(T) -> E) -> Optional<E> {
    if self.present {
      Optional::of_nullable(f(self.value))
    } else {
      Optional::empty()
    }
  }

  /// Applies `f` to this whole `Optional` if present, wrapping the result
  /// [as if by `of_nullable`](Self::of_nullable). Unlike [`map`](Self::map), `f` receives the container, not the
  /// value. If empty, `f` is not called.
  #[inline]
  pub fn flat_map<E: Classify + Default>(self, f: impl FnOnce(Self) -> E) -> Optional<E> {
    if self.present {
      Optional::of_nullable(f(self))
    } else {
      Optional::empty()
    }
  }

  /// Like [`map`](Self::map), passing `ctx` through to `f` without inspecting it.
  #[inline]
  pub fn map_ctx<C: ?Sized, E: Classify + Default>(self, ctx: &C, f: impl FnOnce(&C, T) -> E) -> Optional<E> {
    self.map(|value| f(ctx, value))
  }

  /// Like [`flat_map`](Self::flat_map), passing `ctx` through to `f` without inspecting it.
  #[inline]
  pub fn flat_map_ctx<C: ?Sized, E: Classify + Default>(
    self,
    ctx: &C,
    f: impl FnOnce(&C, Self) -> E,
  ) -> Optional<E> {
    self.flat_map(|optional| f(ctx, optional))
  }
}


// Conversions

impl<T: Classify + Default> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Self::of_nullable(value),
      None => Self::empty(),
    }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_option() }
}

impl<T> Classify for Optional<T> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
}


// Rendering

impl<T: fmt::Debug> fmt::Display for Optional<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let prefix = if self.present { "Optional" } else { "EmptyOptional" };
    write!(f, "{}[{}]{{{:?}}}", prefix, short_type_name::<T>(), self.value)
  }
}
