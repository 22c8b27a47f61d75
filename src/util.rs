//! Small utility helpers used across modules.

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge code payloads on every keystroke.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    s.to_string()
  } else {
    let mut end = max;
    while !s.is_char_boundary(end) {
      end -= 1;
    }
    format!("{}… ({} bytes total)", &s[..end], s.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trunc_keeps_short_strings_intact() {
    assert_eq!(trunc_for_log("short", 10), "short");
  }

  #[test]
  fn trunc_respects_char_boundaries() {
    let s = "héllo wörld, this is long";
    let t = trunc_for_log(s, 2);
    assert!(t.starts_with('h'));
    assert!(t.contains("bytes total"));
  }
}
