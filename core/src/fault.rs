//! Combinators that thread an external fault through a chain of [`Optional`]s.
//!
//! A chain is a `Result<Optional<T>, X>`, where `Err` holds the incoming fault. Faults take priority over
//! presence: once a fault is present it is propagated unchanged and no mapping function is called. Faults are
//! ordinary values of the caller's type `X`, unlike the [`ValueRequired`](crate::error::ValueRequired) panic.

use crate::classify::Classify;
use crate::optional::Optional;
use crate::util::type_name::short_type_name;

/// Fault-threading combinators for `Result<Optional<T>, X>`.
pub trait TryOptional<T, X> {
  /// If a fault is incoming, returns it without calling `f`. If empty, returns an empty `Optional`. Otherwise
  /// applies `f` to the value, returning its fault, or its result wrapped
  /// [as if by `of_nullable`](Optional::of_nullable).
  fn map_with_err<E: Classify + Default>(self, f: impl FnOnce(T) -> Result<E, X>) -> Result<Optional<E>, X>;

  /// Like [`map_with_err`](Self::map_with_err), but `f` receives the whole `Optional`.
  fn flat_map_with_err<E: Classify + Default>(
    self,
    f: impl FnOnce(Optional<T>) -> Result<E, X>,
  ) -> Result<Optional<E>, X>;

  /// Like [`map_with_err`](Self::map_with_err), passing `ctx` through to `f` without inspecting it.
  fn map_ctx_with_err<C: ?Sized, E: Classify + Default>(
    self,
    ctx: &C,
    f: impl FnOnce(&C, T) -> Result<E, X>,
  ) -> Result<Optional<E>, X>;

  /// Like [`flat_map_with_err`](Self::flat_map_with_err), passing `ctx` through to `f` without inspecting it.
  fn flat_map_ctx_with_err<C: ?Sized, E: Classify + Default>(
    self,
    ctx: &C,
    f: impl FnOnce(&C, Optional<T>) -> Result<E, X>,
  ) -> Result<Optional<E>, X>;
}

impl<T, X> TryOptional<T, X> for Result<Optional<T>, X> {
  #[inline]
  fn map_with_err<E: Classify + Default>(self, f: impl FnOnce(T) -> Result<E, X>) -> Result<Optional<E>, X> {
    self.flat_map_with_err(|optional| f(optional.into_value()))
  }

  fn flat_map_with_err<E: Classify + Default>(
    self,
    f: impl FnOnce(Optional<T>) -> Result<E, X>,
  ) -> Result<Optional<E>, X> {
    let optional = match self {
      Ok(optional) => optional,
      Err(fault) => {
        tracing::trace!(target_type = %short_type_name::<E>(), "short-circuiting on incoming fault");
        return Err(fault);
      }
    };
    if optional.is_empty() {
      return Ok(Optional::empty());
    }
    match f(optional) {
      Ok(value) => Ok(Optional::of_nullable(value)),
      Err(fault) => {
        tracing::trace!(target_type = %short_type_name::<E>(), "mapping function failed");
        Err(fault)
      }
    }
  }

  #[inline]
  fn map_ctx_with_err<C: ?Sized, E: Classify + Default>(
    self,
    ctx: &C,
    f: impl FnOnce(&C, T) -> Result<E, X>,
  ) -> Result<Optional<E>, X> {
    self.map_with_err(|value| f(ctx, value))
  }

  #[inline]
  fn flat_map_ctx_with_err<C: ?Sized, E: Classify + Default>(
    self,
    ctx: &C,
    f: impl FnOnce(&C, Optional<T>) -> Result<E, X>,
  ) -> Result<Optional<E>, X> {
    self.flat_map_with_err(|optional| f(ctx, optional))
  }
}

impl<T> Optional<T> {
  /// Starts a fault-threading chain without an incoming fault; see [`TryOptional::map_with_err`].
  #[inline]
  pub fn try_map<E: Classify + Default, X>(self, f: impl FnOnce(T) -> Result<E, X>) -> Result<Optional<E>, X> {
    Ok(self).map_with_err(f)
  }

  /// Starts a fault-threading chain without an incoming fault; see [`TryOptional::flat_map_with_err`].
  #[inline]
  pub fn try_flat_map<E: Classify + Default, X>(
    self,
    f: impl FnOnce(Self) -> Result<E, X>,
  ) -> Result<Optional<E>, X> {
    Ok(self).flat_map_with_err(f)
  }
}
