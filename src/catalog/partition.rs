use std::collections::VecDeque;

use super::entry::Entry;

/// Entries sharing one status, most recently inserted first.
///
/// Names are not deduplicated here; callers consult the search index first.
#[derive(Debug, Default)]
pub(crate) struct Partition {
    entries: VecDeque<Entry>,
}

impl Partition {
    pub(crate) fn insert_front(&mut self, entry: Entry) {
        self.entries.push_front(entry);
    }

    pub(crate) fn push_back(&mut self, entry: Entry) {
        self.entries.push_back(entry);
    }

    pub(crate) fn remove_by_name(&mut self, name: &str) -> Option<Entry> {
        let idx = self.entries.iter().position(|entry| entry.name == name)?;
        self.entries.remove(idx)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::Status;

    fn names(partition: &Partition) -> Vec<&str> {
        partition.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn insert_front_keeps_most_recent_first() {
        let mut partition = Partition::default();
        partition.insert_front(Entry::new("Dune", Status::Pending));
        partition.insert_front(Entry::new("Arrival", Status::Pending));
        partition.push_back(Entry::new("Her", Status::Pending));
        assert_eq!(names(&partition), vec!["Arrival", "Dune", "Her"]);
    }

    #[test]
    fn remove_by_name_unlinks_from_any_position() {
        let mut partition = Partition::default();
        for name in ["C", "B", "A"] {
            partition.insert_front(Entry::new(name, Status::Watched));
        }

        let removed = partition.remove_by_name("B").expect("B should be present");
        assert_eq!(removed, Entry::new("B", Status::Watched));
        assert_eq!(names(&partition), vec!["A", "C"]);

        assert!(partition.remove_by_name("B").is_none());
        assert!(partition.remove_by_name("A").is_some());
        assert!(partition.remove_by_name("C").is_some());
        assert!(partition.is_empty());
    }
}
