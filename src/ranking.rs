use crate::types::FileRecord;
use std::sync::Arc;

/// Insert `record` into a size-descending list and keep at most `max` entries.
///
/// The sort is stable, so equal sizes keep arrival order and a newcomer never
/// displaces an equally sized incumbent.
#[must_use]
pub fn insert_sorted(
    mut list: Vec<Arc<FileRecord>>,
    record: Arc<FileRecord>,
    max: usize,
) -> Vec<Arc<FileRecord>> {
    list.push(record);
    list.sort_by(|a, b| b.size.cmp(&a.size));
    list.truncate(max);
    list
}
