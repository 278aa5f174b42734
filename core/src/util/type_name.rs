/// Returns the name of `T` with module paths stripped, e.g. `Vec<String>` instead of
/// `alloc::vec::Vec<alloc::string::String>`.
pub fn short_type_name<T: ?Sized>() -> String {
  shorten(std::any::type_name::<T>())
}

/// Strips module paths from every path segment in `type_name`.
pub fn shorten(type_name: &str) -> String {
  let mut shortened = String::with_capacity(type_name.len());
  let mut segment_start = 0;
  let mut chars = type_name.char_indices().peekable();
  while let Some((index, char)) = chars.next() {
    if char == ':' && matches!(chars.peek(), Some((_, ':'))) {
      chars.next();
      segment_start = index + 2;
    } else if !(char.is_alphanumeric() || char == '_') {
      shortened.push_str(&type_name[segment_start..index]);
      shortened.push(char);
      segment_start = index + char.len_utf8();
    }
  }
  shortened.push_str(&type_name[segment_start..]);
  shortened
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_nested_paths() {
    assert_eq!(shorten("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
    assert_eq!(
      shorten("std::collections::hash::map::HashMap<alloc::string::String, core::option::Option<i32>>"),
      "HashMap<String, Option<i32>>"
    );
  }

  #[test]
  fn keeps_primitives_and_pointers() {
    assert_eq!(shorten("i32"), "i32");
    assert_eq!(shorten("*const u8"), "*const u8");
    assert_eq!(shorten("&str"), "&str");
    assert_eq!(shorten("[u8; 4]"), "[u8; 4]");
    assert_eq!(shorten("fn(i32) -> i32"), "fn(i32) -> i32");
  }

  #[test]
  fn strips_paths_of_generic_arguments_in_type_name() {
    assert_eq!(short_type_name::<Option<String>>(), "Option<String>");
    assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
  }
}
