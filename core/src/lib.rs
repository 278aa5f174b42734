pub mod util;
pub mod error;

pub mod classify;
pub mod optional;
pub mod fault;

#[cfg(feature = "serde")]
pub mod serde_impls;

pub use classify::{is_absent, require_non_absent, Classify, Dyn, Kind, Nil};
pub use error::ValueRequired;
pub use fault::TryOptional;
pub use optional::Optional;
