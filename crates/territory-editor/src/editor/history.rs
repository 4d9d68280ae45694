//! Undo stack of creation actions.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::model::GeometryId;

/// One reversible creation, with what it created.
///
/// Vertex indices are positions in the state right after the entry was
/// applied, with every newer entry already undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    /// A point was created by a map click.
    AddPoint { point: GeometryId },
    /// A vertex was inserted at `index` of a committed polygon.
    AddPolygonVertex { polygon: GeometryId, index: usize },
    /// A vertex was inserted at `index` of the in-progress polygon.
    AddCurrentPolygonVertex { index: usize },
}

impl HistoryEntry {
    /// Recorded vertex index, if this entry added a vertex of `owner`
    /// (`None` meaning the in-progress polygon).
    fn vertex_index_mut(&mut self, owner: Option<&GeometryId>) -> Option<&mut usize> {
        match (self, owner) {
            (Self::AddPolygonVertex { polygon, index }, Some(owner)) if *polygon == *owner => {
                Some(index)
            }
            (Self::AddCurrentPolygonVertex { index }, None) => Some(index),
            _ => None,
        }
    }
}

/// Bounded stack of history entries. Pushing past the limit drops the oldest.
#[derive(Debug, Clone)]
pub struct ActionHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl Default for ActionHistory {
    fn default() -> Self {
        Self::new(256)
    }
}

impl ActionHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        tracing::trace!("[history] push {:?}", entry);
        self.entries.push_back(entry);
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Pops the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// A point went away outside of undo; its creation can no longer be undone.
    pub fn point_removed(&mut self, point: &GeometryId) {
        self.entries
            .retain(|e| !matches!(e, HistoryEntry::AddPoint { point: p } if p == point));
    }

    /// A polygon went away outside of undo.
    pub fn polygon_removed(&mut self, polygon: &GeometryId) {
        self.entries
            .retain(|e| !matches!(e, HistoryEntry::AddPolygonVertex { polygon: p, .. } if p == polygon));
    }

    /// Vertex `index` of a committed polygon was removed outside of undo.
    pub fn polygon_vertex_removed(&mut self, polygon: &GeometryId, index: usize) {
        self.vertex_removed(Some(polygon), index);
    }

    /// Vertex `index` of the in-progress polygon was removed outside of undo.
    pub fn draft_vertex_removed(&mut self, index: usize) {
        self.vertex_removed(None, index);
    }

    /// Rebases recorded indices so each entry still names the vertex it added.
    ///
    /// Walks from newest to oldest, carrying the removed position back into
    /// each older entry's frame. An entry whose own vertex was removed is
    /// dropped; older entries never saw that vertex, so the walk stops there.
    fn vertex_removed(&mut self, owner: Option<&GeometryId>, mut removed: usize) {
        let mut consumed = None;
        for (position, entry) in self.entries.iter_mut().enumerate().rev() {
            let Some(index) = entry.vertex_index_mut(owner) else {
                continue;
            };
            match (*index).cmp(&removed) {
                Ordering::Equal => {
                    consumed = Some(position);
                    break;
                }
                Ordering::Greater => *index -= 1,
                Ordering::Less => removed -= 1,
            }
        }
        if let Some(position) = consumed {
            tracing::trace!("[history] dropping entry whose vertex was removed");
            self.entries.remove(position);
        }
    }
}
