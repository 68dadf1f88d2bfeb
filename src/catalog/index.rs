use std::cmp::Ordering;

use super::entry::Entry;

#[derive(Debug)]
struct Node {
    entry: Entry,
    left: Option<usize>,
    right: Option<usize>,
}

/// Unbalanced binary search tree keyed by title name.
///
/// Nodes live in an arena and point at each other by slot index. Slots freed by
/// `delete` go on a free list and are reused by later inserts; a freed slot is
/// never reachable from `root`.
#[derive(Debug, Default)]
pub(crate) struct SearchIndex {
    nodes: Vec<Node>,
    free: Vec<usize>,
    root: Option<usize>,
    len: usize,
}

impl SearchIndex {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `false` and leaves the existing node untouched when the name is
    /// already indexed.
    pub(crate) fn insert(&mut self, entry: Entry) -> bool {
        let Some(mut current) = self.root else {
            let idx = self.alloc(entry);
            self.root = Some(idx);
            return true;
        };

        loop {
            let node = &self.nodes[current];
            match entry.name.as_str().cmp(node.entry.name.as_str()) {
                Ordering::Equal => return false,
                Ordering::Less => match node.left {
                    Some(next) => current = next,
                    None => {
                        let idx = self.alloc(entry);
                        self.nodes[current].left = Some(idx);
                        return true;
                    }
                },
                Ordering::Greater => match node.right {
                    Some(next) => current = next,
                    None => {
                        let idx = self.alloc(entry);
                        self.nodes[current].right = Some(idx);
                        return true;
                    }
                },
            }
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Entry> {
        self.search(name).map(|idx| &self.nodes[idx].entry)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.search(name).map(|idx| &mut self.nodes[idx].entry)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.search(name).is_some()
    }

    pub(crate) fn delete(&mut self, name: &str) -> bool {
        let mut removed = false;
        self.root = self.delete_from(self.root, name, &mut removed);
        removed
    }

    /// Entries in ascending name order.
    pub(crate) fn in_order(&self) -> Vec<&Entry> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(idx) = current {
                stack.push(idx);
                current = self.nodes[idx].left;
            }
            let Some(idx) = stack.pop() else {
                break;
            };
            out.push(&self.nodes[idx].entry);
            current = self.nodes[idx].right;
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|idx| (idx, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    fn search(&self, name: &str) -> Option<usize> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match name.cmp(node.entry.name.as_str()) {
                Ordering::Equal => return Some(idx),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn delete_from(
        &mut self,
        subtree: Option<usize>,
        name: &str,
        removed: &mut bool,
    ) -> Option<usize> {
        let idx = subtree?;
        match name.cmp(self.nodes[idx].entry.name.as_str()) {
            Ordering::Less => {
                let left = self.delete_from(self.nodes[idx].left, name, removed);
                self.nodes[idx].left = left;
                Some(idx)
            }
            Ordering::Greater => {
                let right = self.delete_from(self.nodes[idx].right, name, removed);
                self.nodes[idx].right = right;
                Some(idx)
            }
            Ordering::Equal => {
                *removed = true;
                match (self.nodes[idx].left, self.nodes[idx].right) {
                    (None, child) | (child, None) => {
                        self.release(idx);
                        child
                    }
                    (Some(_), Some(right)) => {
                        // Two children: take over the in-order successor's entry,
                        // then remove the successor from the right subtree.
                        let successor = self.find_min(right);
                        let entry = self.nodes[successor].entry.clone();
                        let mut successor_removed = false;
                        let right =
                            self.delete_from(Some(right), &entry.name, &mut successor_removed);
                        debug_assert!(successor_removed);
                        let node = &mut self.nodes[idx];
                        node.entry = entry;
                        node.right = right;
                        Some(idx)
                    }
                }
            }
        }
    }

    fn find_min(&self, mut idx: usize) -> usize {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        idx
    }

    fn alloc(&mut self, entry: Entry) -> usize {
        self.len += 1;
        let node = Node {
            entry,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) {
        let node = &mut self.nodes[idx];
        node.entry.name = String::new();
        node.left = None;
        node.right = None;
        self.free.push(idx);
        self.len -= 1;
    }
}
