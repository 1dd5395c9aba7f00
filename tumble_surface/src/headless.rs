// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`View`] for tests, benches and demos.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Size};
use smallvec::SmallVec;

use crate::view::{Marker, View};

/// Handle to an element of a [`HeadlessView`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    /// The raw index.
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
struct Node {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    offset: Point,
    size: Size,
    markers: SmallVec<[Marker; 2]>,
}

/// A flat element tree with page-space geometry and no rendering.
///
/// ```
/// use kurbo::{Point, Size};
/// use tumble_surface::{HeadlessView, Marker, View};
///
/// let mut view = HeadlessView::new();
/// let area = view.create_root(Point::new(10.0, 10.0), Size::new(300.0, 200.0));
/// let brick = view.create_brick(area).unwrap();
/// assert_eq!(view.container_of(brick), Some(area));
/// assert_eq!(view.offset(brick), Some(Point::new(10.0, 10.0)));
///
/// view.add_class(brick, Marker::Highlight);
/// assert!(view.has_class(brick, Marker::Highlight));
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeadlessView {
    nodes: HashMap<ElementId, Node>,
    next: u32,
}

impl HeadlessView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, parent: Option<ElementId>, offset: Point, size: Size) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        self.nodes.insert(
            id,
            Node {
                parent,
                offset,
                size,
                ..Node::default()
            },
        );
        id
    }

    /// Adds a parentless element, typically a container.
    pub fn create_root(&mut self, offset: Point, size: Size) -> ElementId {
        self.insert(None, offset, size)
    }

    /// Adds a child of `parent` with the given geometry.
    ///
    /// Returns `None` if `parent` does not exist.
    pub fn create_child(
        &mut self,
        parent: ElementId,
        offset: Point,
        size: Size,
    ) -> Option<ElementId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let id = self.insert(Some(parent), offset, size);
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(id);
        }
        Some(id)
    }

    /// Removes an element and all of its descendants.
    ///
    /// Returns the number of elements removed.
    pub fn remove(&mut self, element: ElementId) -> usize {
        let Some(node) = self.nodes.get(&element) else {
            return 0;
        };
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != element);
        }
        let mut removed = 0;
        let mut stack = alloc::vec![element];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(&id) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        removed
    }
}

impl View for HeadlessView {
    type Element = ElementId;

    fn create_brick(&mut self, container: ElementId) -> Option<ElementId> {
        let origin = self.nodes.get(&container)?.offset;
        self.create_child(container, origin, Size::ZERO)
    }

    fn offset(&self, element: ElementId) -> Option<Point> {
        self.nodes.get(&element).map(|n| n.offset)
    }

    fn set_offset(&mut self, element: ElementId, offset: Point) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.offset = offset;
        }
    }

    fn size(&self, element: ElementId) -> Option<Size> {
        self.nodes.get(&element).map(|n| n.size)
    }

    fn set_size(&mut self, element: ElementId, size: Size) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.size = size;
        }
    }

    fn add_class(&mut self, element: ElementId, marker: Marker) {
        if let Some(node) = self.nodes.get_mut(&element) {
            if !node.markers.contains(&marker) {
                node.markers.push(marker);
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, marker: Marker) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.markers.retain(|m| *m != marker);
        }
    }

    fn has_class(&self, element: ElementId, marker: Marker) -> bool {
        self.nodes
            .get(&element)
            .is_some_and(|n| n.markers.contains(&marker))
    }

    fn container_of(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element)?.parent
    }

    fn children(&self, container: ElementId) -> Vec<ElementId> {
        self.nodes
            .get(&container)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn contains(&self, element: ElementId) -> bool {
        self.nodes.contains_key(&element)
    }
}
