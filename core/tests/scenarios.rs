use std::cell::Cell;
use std::collections::HashMap;
use std::sync::Once;

use optional_core::{Dyn, Nil, Optional, TryOptional};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::try_from_env("TEST_LOG").unwrap_or_else(|_| EnvFilter::new("trace")))
      .with_test_writer()
      .try_init();
  });
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("lookup failed")]
struct LookupFailed;

#[test]
fn map_present_value() {
  assert_eq!(*Optional::of_nullable(5).map(|x| x * 2).value(), 10);
}

#[test]
fn empty_falls_back_to_default() {
  assert_eq!(Optional::<i32>::empty().or_else(42), 42);
}

#[test]
fn allocated_empty_sequence_is_present() {
  let optional = Optional::of_nullable(Vec::<String>::new());
  assert!(optional.is_present());
  assert_eq!(optional.to_string(), "Optional[Vec<String>]{[]}");
}

#[test]
fn nil_pointer_is_empty() {
  let optional = Optional::of_nullable(None::<Box<String>>);
  assert!(!optional.is_present());
  assert_eq!(optional.to_string(), "EmptyOptional[Option<Box<String>>]{None}");
}

#[test]
fn filter_chain() {
  let optional = Optional::of_present(10).filter(|x| *x > 5).filter(|x| *x < 3);
  assert!(optional.is_empty());
}

#[test]
fn incoming_fault_skips_mapping() {
  init_tracing();
  let calls = Cell::new(0);
  let incoming: Result<Optional<i32>, LookupFailed> = Err(LookupFailed);
  let result = incoming.map_with_err(|x| {
    calls.set(calls.get() + 1);
    Ok(x)
  });
  assert_eq!(result.map(Optional::into_value), Err(LookupFailed));
  assert_eq!(calls.get(), 0);
}

#[test]
fn every_absence_representation_is_empty() {
  assert!(Optional::of_nullable(Nil).is_empty());
  assert!(Optional::of_nullable(None::<&i32>).is_empty());
  assert!(Optional::of_nullable(Dyn::nil()).is_empty());
  assert!(Optional::of_nullable(Dyn::new(None::<HashMap<u8, u8>>)).is_empty());
  assert!(Optional::of_nullable(None::<HashMap<u8, u8>>).is_empty());
  assert!(Optional::of_nullable(None::<Vec<u8>>).is_empty());
  assert!(Optional::of_nullable(None::<std::sync::mpsc::Receiver<u8>>).is_empty());
  assert!(Optional::of_nullable(None::<fn(u8) -> u8>).is_empty());
  assert!(Optional::of_nullable(std::ptr::null::<u8>()).is_empty());
}

#[test]
fn every_zero_value_is_present() {
  assert!(Optional::of_nullable(0).is_present());
  assert!(Optional::of_nullable(String::new()).is_present());
  assert!(Optional::of_nullable(f64::NAN).is_present());
  assert!(Optional::of_nullable(f64::NEG_INFINITY).is_present());
  assert!(Optional::of_nullable(HashMap::<u8, u8>::new()).is_present());
  assert!(Optional::of_nullable(Vec::<u8>::new()).is_present());
}

#[test]
#[should_panic(expected = "value required")]
fn of_present_rejects_nil_dynamic() {
  init_tracing();
  Optional::of_present(Dyn::new(None::<Box<u8>>));
}

#[test]
fn lookup_pipeline() {
  init_tracing();
  let mut versions = HashMap::new();
  versions.insert("serde", "1.0.200");
  let lookup = |name: &str| Optional::from(versions.get(name).copied());

  let major = lookup("serde")
    .try_map(|version| version.split('.').next().ok_or(LookupFailed))
    .map_with_err(|major| major.parse::<u32>().map_err(|_| LookupFailed));
  assert_eq!(major.map(Optional::require_value), Ok(1));

  let missing = lookup("tokio")
    .try_map(|version| version.split('.').next().ok_or(LookupFailed))
    .map_with_err(|major| major.parse::<u32>().map_err(|_| LookupFailed));
  assert!(missing.map(|o| o.is_empty()).unwrap_or(false));
}
