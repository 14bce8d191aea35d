//! Quadtree spatial index for viewport culling and hit-testing.
//!
//! Objects are stored in every leaf their bounds touch, so an object that
//! straddles a quadrant boundary appears under several paths. Queries
//! deduplicate by id before returning.
//!
//! Two rules keep large items from multiplying across the tree:
//!
//! - An entry whose bounds cover a node's whole boundary stays on that node
//!   and never descends. Such entries do not count toward capacity.
//! - A full leaf only subdivides when the split would separate its entries.
//!   When every held entry touches the same two or more quadrants, the leaf
//!   grows past capacity instead.
//!
//! The root covers a fixed square world. Objects wholly outside it are kept
//! in an overflow bucket that every query scans linearly, so they remain
//! queryable but lose the benefit of partitioning.

use std::collections::HashSet;

use mediacanvas_core::constants::{DEFAULT_MAX_DEPTH, DEFAULT_NODE_CAPACITY, DEFAULT_WORLD_EXTENT};
use mediacanvas_core::ObjectId;
use smallvec::SmallVec;

use crate::geometry::Aabb;

#[derive(Debug, Clone, Copy, PartialEq)]
struct IndexEntry {
    id: ObjectId,
    bounds: Aabb,
}

#[derive(Debug, Clone)]
struct QuadtreeNode {
    boundary: Aabb,
    depth: usize,
    /// Entries that partially overlap this node. Leaf bucket, or entries no
    /// child accepted once subdivided.
    entries: SmallVec<[IndexEntry; DEFAULT_NODE_CAPACITY]>,
    /// Entries whose bounds cover the whole boundary.
    covering: Vec<IndexEntry>,
    /// NE, NW, SE, SW once subdivided.
    children: Option<Box<[QuadtreeNode; 4]>>,
}

impl QuadtreeNode {
    fn new(boundary: Aabb, depth: usize) -> Self {
        Self {
            boundary,
            depth,
            entries: SmallVec::new(),
            covering: Vec::new(),
            children: None,
        }
    }

    fn insert(&mut self, entry: IndexEntry, capacity: usize, max_depth: usize) {
        if entry.bounds.contains_box(&self.boundary) {
            self.covering.push(entry);
            return;
        }
        if self.children.is_none() {
            if self.entries.len() < capacity
                || self.depth >= max_depth
                || !self.split_separates(&entry)
            {
                self.entries.push(entry);
                return;
            }
            self.subdivide(capacity, max_depth);
        }
        self.insert_into_children(entry, capacity, max_depth);
    }

    /// Bit `i` is set when `bounds` touches quadrant `i` of this node.
    fn quadrant_mask(quadrants: &[Aabb; 4], bounds: &Aabb) -> u8 {
        quadrants
            .iter()
            .enumerate()
            .filter(|(_, q)| q.intersects(bounds))
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Whether subdividing would leave some quadrant with a different set of
    /// entries than another. Entries that all land in one quadrant still
    /// descend; entries that all span the same several quadrants do not.
    fn split_separates(&self, incoming: &IndexEntry) -> bool {
        let quadrants = self.boundary.quadrants();
        let mask = Self::quadrant_mask(&quadrants, &incoming.bounds);
        if mask.count_ones() <= 1 {
            return true;
        }
        self.entries
            .iter()
            .any(|e| Self::quadrant_mask(&quadrants, &e.bounds) != mask)
    }

    fn insert_into_children(&mut self, entry: IndexEntry, capacity: usize, max_depth: usize) {
        let mut placed = false;
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                if child.boundary.intersects(&entry.bounds) {
                    child.insert(entry, capacity, max_depth);
                    placed = true;
                }
            }
        }
        // Float rounding at quadrant seams can leave an edge-touching entry
        // outside every child.
        if !placed {
            self.entries.push(entry);
        }
    }

    fn subdivide(&mut self, capacity: usize, max_depth: usize) {
        let depth = self.depth + 1;
        let [ne, nw, se, sw] = self.boundary.quadrants();
        self.children = Some(Box::new([
            QuadtreeNode::new(ne, depth),
            QuadtreeNode::new(nw, depth),
            QuadtreeNode::new(se, depth),
            QuadtreeNode::new(sw, depth),
        ]));

        let held = std::mem::take(&mut self.entries);
        for entry in held {
            self.insert_into_children(entry, capacity, max_depth);
        }
    }

    fn remove(&mut self, id: ObjectId, bounds: &Aabb) -> bool {
        if !self.boundary.intersects(bounds) {
            return false;
        }

        let before = self.entries.len() + self.covering.len();
        self.entries.retain(|e| e.id != id);
        self.covering.retain(|e| e.id != id);
        let mut removed = self.entries.len() + self.covering.len() != before;

        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                removed |= child.remove(id, bounds);
            }
        }
        removed
    }

    fn query(&self, area: &Aabb, seen: &mut HashSet<ObjectId>, out: &mut Vec<ObjectId>) {
        if !self.boundary.intersects(area) {
            return;
        }

        for entry in self.covering.iter().chain(&self.entries) {
            if entry.bounds.intersects(area) && seen.insert(entry.id) {
                out.push(entry.id);
            }
        }

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query(area, seen, out);
            }
        }
    }

    fn collect_stats(&self, stats: &mut SpatialIndexStats) {
        stats.total_nodes += 1;
        stats.total_items += self.entries.len() + self.covering.len();
        stats.max_depth = stats.max_depth.max(self.depth);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_stats(stats);
            }
        }
    }
}

/// Node and item counts for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpatialIndexStats {
    pub total_nodes: usize,
    /// Stored entries, counting each copy of a boundary-straddling object.
    /// Entries covering a whole node are counted once for that node.
    pub total_items: usize,
    pub max_depth: usize,
    pub overflow_items: usize,
}

/// Quadtree over a fixed world boundary.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    root: QuadtreeNode,
    boundary: Aabb,
    capacity: usize,
    max_depth: usize,
    overflow: Vec<IndexEntry>,
}

impl SpatialIndex {
    /// Creates an empty index. `capacity` and `max_depth` are clamped to at
    /// least 1.
    pub fn new(boundary: Aabb, capacity: usize, max_depth: usize) -> Self {
        Self {
            root: QuadtreeNode::new(boundary, 0),
            boundary,
            capacity: capacity.max(1),
            max_depth: max_depth.max(1),
            overflow: Vec::new(),
        }
    }

    /// Creates an index over `[-extent, extent]` on both axes.
    pub fn with_extent(extent: f32, capacity: usize, max_depth: usize) -> Self {
        Self::new(
            Aabb::new(-extent, -extent, extent * 2.0, extent * 2.0),
            capacity,
            max_depth,
        )
    }

    /// The root boundary.
    pub fn boundary(&self) -> Aabb {
        self.boundary
    }

    /// Inserts `id` with `bounds`. Returns `false` when the bounds miss the
    /// world boundary and the entry went to the overflow bucket.
    pub fn insert(&mut self, id: ObjectId, bounds: &Aabb) -> bool {
        let entry = IndexEntry {
            id,
            bounds: *bounds,
        };
        if !self.boundary.intersects(bounds) {
            tracing::warn!(
                id,
                x = bounds.x,
                y = bounds.y,
                "object lies outside the indexed world; storing in overflow bucket"
            );
            self.overflow.push(entry);
            return false;
        }
        self.root.insert(entry, self.capacity, self.max_depth);
        true
    }

    /// Removes every stored copy of `id`. `bounds` must be the bounds the
    /// entry was inserted with; only nodes they touch are visited.
    pub fn remove(&mut self, id: ObjectId, bounds: &Aabb) -> bool {
        let before = self.overflow.len();
        self.overflow.retain(|e| e.id != id);
        let removed_overflow = self.overflow.len() != before;
        self.root.remove(id, bounds) || removed_overflow
    }

    /// Ids whose bounds intersect `area`, each exactly once, in traversal
    /// order.
    pub fn query(&self, area: &Aabb) -> Vec<ObjectId> {
        let mut out = Vec::new();
        self.query_into(area, &mut out);
        out
    }

    /// Like [`query`](Self::query) but reuses `out`, which is cleared first.
    pub fn query_into(&self, area: &Aabb, out: &mut Vec<ObjectId>) {
        out.clear();
        let mut seen = HashSet::new();
        self.root.query(area, &mut seen, out);
        for entry in &self.overflow {
            if entry.bounds.intersects(area) && seen.insert(entry.id) {
                out.push(entry.id);
            }
        }
        tracing::trace!(
            x = area.x,
            y = area.y,
            width = area.width,
            height = area.height,
            hits = out.len(),
            "spatial query"
        );
    }

    /// Ids whose bounds contain the point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ObjectId> {
        self.query(&Aabb::new(x, y, 0.0, 0.0))
    }

    /// Drops all entries and collapses back to a single root.
    pub fn clear(&mut self) {
        self.root = QuadtreeNode::new(self.boundary, 0);
        self.overflow.clear();
    }

    /// Replaces the whole tree with one built from `items`.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (ObjectId, Aabb)>,
    {
        self.clear();
        for (id, bounds) in items {
            self.insert(id, &bounds);
        }
        tracing::debug!(stats = ?self.stats(), "spatial index rebuilt");
    }

    pub fn stats(&self) -> SpatialIndexStats {
        let mut stats = SpatialIndexStats {
            overflow_items: self.overflow.len(),
            ..SpatialIndexStats::default()
        };
        self.root.collect_stats(&mut stats);
        stats
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::with_extent(DEFAULT_WORLD_EXTENT, DEFAULT_NODE_CAPACITY, DEFAULT_MAX_DEPTH)
    }
}
