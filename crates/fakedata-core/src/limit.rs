//! Result-count capping for list fields

/// Keep at most `limit` leading elements of `items`.
///
/// `None`, or a limit at least as large as the list, returns the list
/// unchanged. The caller owns `items`, so the backing collection it was
/// copied from is never touched.
pub fn take_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}
