use std::collections::VecDeque;

use super::entry::Entry;

/// "Watch next" playlist in insertion order. Holds snapshots, so later status
/// changes in the catalog do not show up here.
#[derive(Debug, Default)]
pub(crate) struct WatchNextQueue {
    entries: VecDeque<Entry>,
}

impl WatchNextQueue {
    pub(crate) fn enqueue(&mut self, entry: Entry) {
        self.entries.push_back(entry);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}
