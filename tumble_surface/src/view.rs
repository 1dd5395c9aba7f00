// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view collaborator.
//!
//! A [`View`] is whatever owns the rendered elements: a DOM, a retained scene
//! graph, or [`HeadlessView`](crate::HeadlessView) in tests. The surface never
//! holds layout state of its own; it reads offsets and sizes from the view and
//! writes positions back.
//!
//! All offsets are page coordinates of an element's top-left corner.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect, Size};

/// Class markers the surface toggles on elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// An activated container that accepts draw gestures.
    DrawingArea,
    /// A drawn element.
    Brick,
    /// A brick currently under a finger.
    Highlight,
}

impl Marker {
    /// The CSS class name a DOM-backed view should use.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::DrawingArea => "drawing-area",
            Self::Brick => "brick",
            Self::Highlight => "brick-highlight",
        }
    }
}

/// Element tree with mutable geometry and class markers.
pub trait View {
    /// Element handle. Cheap to copy and stable for the element's lifetime.
    type Element: Copy + Eq + Hash + Debug;

    /// Appends a new zero-size child to `container`.
    ///
    /// Returns `None` if the container is gone.
    fn create_brick(&mut self, container: Self::Element) -> Option<Self::Element>;

    /// Page-space top-left corner.
    fn offset(&self, element: Self::Element) -> Option<Point>;

    /// Moves an element so its top-left corner lands at `offset`.
    fn set_offset(&mut self, element: Self::Element, offset: Point);

    /// Rendered size.
    fn size(&self, element: Self::Element) -> Option<Size>;

    /// Resizes an element.
    fn set_size(&mut self, element: Self::Element, size: Size);

    /// Adds a class marker. Adding a present marker does nothing.
    fn add_class(&mut self, element: Self::Element, marker: Marker);

    /// Removes a class marker. Removing an absent marker does nothing.
    fn remove_class(&mut self, element: Self::Element, marker: Marker);

    /// Returns `true` if the element carries `marker`.
    fn has_class(&self, element: Self::Element, marker: Marker) -> bool;

    /// The element's immediate parent.
    fn container_of(&self, element: Self::Element) -> Option<Self::Element>;

    /// Immediate children in document order.
    fn children(&self, container: Self::Element) -> Vec<Self::Element>;

    /// Returns `true` if the element still exists.
    fn contains(&self, element: Self::Element) -> bool;

    /// Every element below `container`, depth first in document order.
    fn descendants(&self, container: Self::Element) -> Vec<Self::Element> {
        let mut out = Vec::new();
        let mut stack = self.children(container);
        stack.reverse();
        while let Some(element) = stack.pop() {
            out.push(element);
            stack.extend(self.children(element).into_iter().rev());
        }
        out
    }

    /// Page-space rectangle of an element, from its live offset and size.
    fn bounds(&self, element: Self::Element) -> Option<Rect> {
        Some(Rect::from_origin_size(
            self.offset(element)?,
            self.size(element)?,
        ))
    }
}
