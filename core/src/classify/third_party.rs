#[cfg(feature = "hashbrown")]
mod hashbrown_impls {
  use hashbrown::{HashMap, HashSet};

  use crate::classify::{Classify, Kind};

  impl_container!(Kind::Map;
    HashMap<K, V, S> => [K, V, S],
    HashSet<T, S> => [T, S],
  );
}

#[cfg(feature = "hashlink")]
mod hashlink_impls {
  use hashlink::{LinkedHashMap, LinkedHashSet, LruCache};

  use crate::classify::{Classify, Kind};

  impl_container!(Kind::Map;
    LinkedHashMap<K, V, S> => [K, V, S],
    LinkedHashSet<T, S> => [T, S],
    LruCache<K, V, S> => [K, V, S],
  );
}

#[cfg(feature = "tokio")]
mod tokio_impls {
  use tokio::sync::{broadcast, mpsc, oneshot, watch};

  use crate::classify::{Classify, Kind};

  impl_container!(Kind::Channel;
    mpsc::Sender<T> => [T],
    mpsc::Receiver<T> => [T],
    mpsc::UnboundedSender<T> => [T],
    mpsc::UnboundedReceiver<T> => [T],
    oneshot::Sender<T> => [T],
    oneshot::Receiver<T> => [T],
    watch::Sender<T> => [T],
    watch::Receiver<T> => [T],
    broadcast::Sender<T> => [T],
    broadcast::Receiver<T> => [T],
  );
}

#[cfg(feature = "chrono")]
mod chrono_impls {
  use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

  use crate::classify::{Classify, Kind};

  impl<Tz: TimeZone> Classify for DateTime<Tz> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Value }
  }

  crate::impl_present!(NaiveDate, NaiveDateTime, NaiveTime, TimeDelta);
}
