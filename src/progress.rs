// src/progress.rs
/// Lightweight progress reporting for batch passes over the page set.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page finished; `links` is the number of anchors inserted (0 = untouched).
    fn page_done(&mut self, _page: &str, _links: usize) {}

    /// One page failed (unreadable/unwritable); the run continues.
    fn page_failed(&mut self, _page: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
