use std::collections::VecDeque;

use super::entry::Entry;

pub(crate) const HISTORY_SIZE: usize = 5;

/// Recently added titles, newest first. The oldest entry falls off once the
/// capacity is exceeded.
#[derive(Debug)]
pub(crate) struct History {
    entries: VecDeque<Entry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_SIZE)
    }
}

impl History {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::Status;

    #[test]
    fn push_evicts_oldest_beyond_capacity() {
        let mut history = History::default();
        for name in ["A", "B", "C", "D", "E", "F", "G"] {
            history.push(Entry::new(name, Status::Pending));
        }
        let names: Vec<_> = history.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["G", "F", "E", "D", "C"]);
    }

    #[test]
    fn zero_capacity_history_stays_empty() {
        let mut history = History::with_capacity(0);
        history.push(Entry::new("A", Status::Pending));
        assert_eq!(history.iter().count(), 0);
    }
}
