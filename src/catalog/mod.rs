mod codec;
mod entry;
mod error;
mod history;
mod index;
mod partition;
mod queue;

#[cfg(test)]
mod tests;

use tracing::{debug, warn};

pub(crate) use codec::LoadReport;
pub(crate) use entry::{Entry, Status};
pub(crate) use error::CatalogError;

use self::entry::name_rejection;
use self::history::History;
use self::index::SearchIndex;
use self::partition::Partition;
use self::queue::WatchNextQueue;

/// Every title grouped by status, each group most recently inserted first.
#[derive(Debug)]
pub(crate) struct Listing<'a> {
    pub(crate) pending: Vec<&'a Entry>,
    pub(crate) watched: Vec<&'a Entry>,
    pub(crate) dropped: Vec<&'a Entry>,
}

impl<'a> Listing<'a> {
    pub(crate) fn get(&self, status: Status) -> &[&'a Entry] {
        match status {
            Status::Pending => &self.pending,
            Status::Watched => &self.watched,
            Status::Dropped => &self.dropped,
        }
    }
}

/// The watch catalog.
///
/// Each title lives in exactly one status partition, and the search index holds
/// one copy of every title with the same status. Mutations go through this type
/// so both stay in step. History and the watch-next queue only observe.
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    pending: Partition,
    watched: Partition,
    dropped: Partition,
    index: SearchIndex,
    history: History,
    queue: WatchNextQueue,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn add(&mut self, name: &str) -> Result<Entry, CatalogError> {
        if let Some(reason) = name_rejection(name) {
            return Err(CatalogError::InvalidName {
                name: name.to_string(),
                reason,
            });
        }
        if self.index.contains(name) {
            return Err(CatalogError::DuplicateName {
                name: name.to_string(),
            });
        }

        let entry = Entry::new(name, Status::Pending);
        self.pending.insert_front(entry.clone());
        self.index.insert(entry.clone());
        self.history.push(entry.clone());
        debug!(title = name, "added title");
        Ok(entry)
    }

    pub(crate) fn move_title(&mut self, name: &str, status: Status) -> Result<Entry, CatalogError> {
        if !self.index.contains(name) {
            return Err(CatalogError::NotFound {
                name: name.to_string(),
            });
        }

        let removed = Status::ALL
            .into_iter()
            .find_map(|from| self.partition_mut(from).remove_by_name(name));
        let Some(mut entry) = removed else {
            // Drop the orphaned index node so the index matches the partitions again.
            warn!(title = name, "title indexed but missing from every status list");
            self.index.delete(name);
            return Err(CatalogError::Inconsistency {
                name: name.to_string(),
            });
        };

        let previous = entry.status;
        entry.status = status;
        self.partition_mut(status).insert_front(entry.clone());
        if let Some(indexed) = self.index.get_mut(name) {
            indexed.status = status;
        }
        debug!(title = name, from = %previous, to = %status, "moved title");
        Ok(entry)
    }

    pub(crate) fn search(&self, name: &str) -> Result<Entry, CatalogError> {
        self.index
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    pub(crate) fn enqueue_watch_next(&mut self, name: &str) -> Result<(), CatalogError> {
        let entry = self.search(name)?;
        debug!(title = name, status = %entry.status, "queued title to watch next");
        self.queue.enqueue(entry);
        Ok(())
    }

    pub(crate) fn list_all(&self) -> Listing<'_> {
        Listing {
            pending: self.pending.iter().collect(),
            watched: self.watched.iter().collect(),
            dropped: self.dropped.iter().collect(),
        }
    }

    /// Every title in ascending name order, read from the search index.
    pub(crate) fn sorted(&self) -> Vec<&Entry> {
        self.index.in_order()
    }

    pub(crate) fn history(&self) -> Vec<&Entry> {
        self.history.iter().collect()
    }

    pub(crate) fn watch_next_queue(&self) -> Vec<&Entry> {
        self.queue.iter().collect()
    }

    pub(crate) fn partition(&self, status: Status) -> &Partition {
        match status {
            Status::Pending => &self.pending,
            Status::Watched => &self.watched,
            Status::Dropped => &self.dropped,
        }
    }

    fn partition_mut(&mut self, status: Status) -> &mut Partition {
        match status {
            Status::Pending => &mut self.pending,
            Status::Watched => &mut self.watched,
            Status::Dropped => &mut self.dropped,
        }
    }

    /// Appends a title read from disk. Returns `false` when the name is already
    /// indexed, in which case nothing changes.
    fn restore(&mut self, entry: Entry) -> bool {
        if !self.index.insert(entry.clone()) {
            return false;
        }
        self.partition_mut(entry.status).push_back(entry);
        true
    }

    #[cfg(test)]
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        use std::collections::BTreeMap;

        let mut listed = BTreeMap::new();
        for status in Status::ALL {
            for entry in self.partition(status).iter() {
                if entry.status != status {
                    let name = &entry.name;
                    return Err(format!("{name} sits in {status} but says {}", entry.status));
                }
                if let Some(other) = listed.insert(entry.name.as_str(), status) {
                    return Err(format!("{} is listed in {other} and {status}", entry.name));
                }
            }
        }

        let indexed: BTreeMap<&str, Status> = self
            .index
            .in_order()
            .into_iter()
            .map(|entry| (entry.name.as_str(), entry.status))
            .collect();
        if indexed != listed {
            return Err(format!("index {indexed:?} != lists {listed:?}"));
        }
        Ok(())
    }
}
