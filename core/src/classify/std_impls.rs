use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{OsStr, OsString};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
  NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize,
  NonZeroU128, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::rc::{self, Rc};
use std::sync::{self, mpsc, Arc, Mutex, RwLock};
use std::time::{Duration, Instant, SystemTime};

use super::{Classify, Kind};

// Optional references

impl<T: Classify> Classify for Option<T> {
  #[inline]
  fn kind(&self) -> Kind { T::handle_kind() }
  #[inline]
  fn is_bound(&self) -> bool { self.is_some() }
}

impl<T: ?Sized> Classify for *const T {
  #[inline]
  fn kind(&self) -> Kind { Kind::RawPointer }
  #[inline]
  fn is_bound(&self) -> bool { !self.is_null() }
}
impl<T: ?Sized> Classify for *mut T {
  #[inline]
  fn kind(&self) -> Kind { Kind::RawPointer }
  #[inline]
  fn is_bound(&self) -> bool { !self.is_null() }
}

// Always-bound references

macro_rules! impl_bound_pointer {
  ($($ty:ty),*) => {
    $(
      impl<T: ?Sized> Classify for $ty {
        #[inline]
        fn kind(&self) -> Kind { Kind::Pointer }
      }
    )*
  };
}
impl_bound_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>, NonNull<T>);

// Weak references are unbound once nothing strongly refers to their target.

impl<T: ?Sized> Classify for rc::Weak<T> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Pointer }
  #[inline]
  fn is_bound(&self) -> bool { self.strong_count() > 0 }
}
impl<T: ?Sized> Classify for sync::Weak<T> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Pointer }
  #[inline]
  fn is_bound(&self) -> bool { self.strong_count() > 0 }
}

// Containers; these are allocated values, a nil container is an `Option` handle to one.

impl_container!(Kind::Sequence;
  Vec<T> => [T],
  VecDeque<T> => [T],
  LinkedList<T> => [T],
  BinaryHeap<T> => [T],
);
impl_container!(Kind::Map;
  HashMap<K, V, S> => [K, V, S],
  BTreeMap<K, V> => [K, V],
  HashSet<T, S> => [T, S],
  BTreeSet<T> => [T],
);
impl_container!(Kind::Channel;
  mpsc::Sender<T> => [T],
  mpsc::SyncSender<T> => [T],
  mpsc::Receiver<T> => [T],
);

impl<T, const N: usize> Classify for [T; N] {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
  #[inline]
  fn handle_kind() -> Kind { Kind::Sequence }
}

impl<T> Classify for [T] {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
}

// Compound values

macro_rules! impl_tuple {
  ($(($($elem:ident),+)),* $(,)?) => {
    $(
      impl<$($elem),+> Classify for ($($elem,)+) {
        #[inline]
        fn kind(&self) -> Kind { Kind::Value }
      }
    )*
  };
}
impl_tuple!(
  (A),
  (A, B),
  (A, B, C),
  (A, B, C, D),
  (A, B, C, D, E),
  (A, B, C, D, E, F),
  (A, B, C, D, E, F, G),
  (A, B, C, D, E, F, G, H),
  (A, B, C, D, E, F, G, H, I),
  (A, B, C, D, E, F, G, H, I, J),
  (A, B, C, D, E, F, G, H, I, J, K),
  (A, B, C, D, E, F, G, H, I, J, K, L),
);

impl<T, E> Classify for Result<T, E> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
}

impl<B: ToOwned + ?Sized> Classify for Cow<'_, B> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
}

// Callables

macro_rules! impl_callable {
  ($(($($arg:ident),*)),* $(,)?) => {
    $(
      impl<R, $($arg),*> Classify for fn($($arg),*) -> R {
        #[inline]
        fn kind(&self) -> Kind { Kind::Value }
        #[inline]
        fn handle_kind() -> Kind { Kind::Callable }
      }
    )*
  };
}
impl_callable!((), (A), (A, B), (A, B, C));

// Interior mutability wrappers are concrete values holding their contents.

impl<T> Classify for Cell<T> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
}
impl<T: ?Sized> Classify for RefCell<T> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
}
impl<T: ?Sized> Classify for Mutex<T> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
}
impl<T: ?Sized> Classify for RwLock<T> {
  #[inline]
  fn kind(&self) -> Kind { Kind::Value }
}

crate::impl_present!(
  (), bool, char,
  i8, i16, i32, i64, i128, isize,
  u8, u16, u32, u64, u128, usize,
  f32, f64,
  NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
  NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
  str, String, OsStr, OsString, Path, PathBuf,
  Ordering,
  IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6,
  Duration, Instant, SystemTime
);
