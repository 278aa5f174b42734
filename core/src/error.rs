/// A value was required, but the value was absent.
///
/// Raised as a panic by [`Optional::of_present`](crate::optional::Optional::of_present) and
/// [`Optional::require_value`](crate::optional::Optional::require_value), and returned by their `try_` variants.
/// This signals a violated precondition, as opposed to the external faults threaded through
/// [`TryOptional`](crate::fault::TryOptional).
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("value required")]
pub struct ValueRequired;

/// Logs the violation and panics with [`ValueRequired`].
#[track_caller]
#[cold]
pub(crate) fn value_required(type_name: &str) -> ! {
  tracing::error!(type_name, "absent value where a value is required");
  panic!("{}", ValueRequired)
}
