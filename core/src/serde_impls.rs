//! Serializes an [`Optional`] as an `Option`: the value when present, and none when empty.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::classify::Classify;
use crate::optional::Optional;

impl<T: Serialize> Serialize for Optional<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    if self.is_present() {
      serializer.serialize_some(self.value())
    } else {
      serializer.serialize_none()
    }
  }
}

impl<'de, T: Deserialize<'de> + Classify + Default> Deserialize<'de> for Optional<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Into::into)
  }
}
