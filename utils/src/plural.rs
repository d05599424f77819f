//! Count-aware wording for user-facing messages.

/// Plural suffix for `n` items: `""` for exactly one, `"s"` otherwise.
pub fn give_me_an_s(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
