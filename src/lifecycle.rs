// Page lifecycle decisions, kept free of web-sys types so host tests can
// include this file directly.

/// Whether a `pagehide` should release the loop and listeners.
///
/// A page stored in the back/forward cache (`persisted == true`) is frozen
/// and resumes with its animation frame chain intact, so only a real unload
/// tears down. An event without the flag counts as an unload.
#[inline]
pub fn teardown_on_pagehide(persisted: Option<bool>) -> bool {
    !persisted.unwrap_or(false)
}
