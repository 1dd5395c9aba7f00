// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble routing for touch-start.
//!
//! A touch-start is offered to its target first and then to each ancestor in
//! turn. Handlers return an [`Outcome`]:
//!
//! - [`Outcome::Continue`]: offer it to the next ancestor.
//! - [`Outcome::StopAndConsume`]: stop here and report the touch as consumed.
//!
//! Touch-move and touch-end do not bubble; they go straight to the gesture
//! slot keyed by their target.

use smallvec::SmallVec;

use crate::view::View;

/// Propagation decision of one handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Continue,
    StopAndConsume,
}

/// Target followed by its ancestors, innermost first.
pub(crate) type BubblePath<E> = SmallVec<[E; 8]>;

/// Builds the bubble path for `target`.
///
/// A parent chain that loops back on itself is cut at the first repeat.
pub(crate) fn bubble_path<V: View>(view: &V, target: V::Element) -> BubblePath<V::Element> {
    let mut path = BubblePath::new();
    let mut node = Some(target);
    while let Some(n) = node {
        if path.contains(&n) {
            log::warn!("parent chain of {target:?} loops at {n:?}");
            break;
        }
        path.push(n);
        node = view.container_of(n);
    }
    path
}

/// Runs `handler` along `path` and honors its outcomes.
///
/// Returns `true` if a handler consumed the event.
pub(crate) fn run<E: Copy, S: ?Sized>(
    path: &[E],
    state: &mut S,
    mut handler: impl FnMut(E, &mut S) -> Outcome,
) -> bool {
    for &node in path {
        match handler(node, state) {
            Outcome::Continue => {}
            Outcome::StopAndConsume => return true,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeadlessView;
    use alloc::vec::Vec;
    use kurbo::{Point, Size};

    #[test]
    fn path_runs_from_target_to_root() {
        let mut view = HeadlessView::new();
        let root = view.create_root(Point::ZERO, Size::new(10.0, 10.0));
        let mid = view.create_child(root, Point::ZERO, Size::ZERO).unwrap();
        let leaf = view.create_child(mid, Point::ZERO, Size::ZERO).unwrap();
        assert_eq!(bubble_path(&view, leaf).as_slice(), &[leaf, mid, root]);
        assert_eq!(bubble_path(&view, root).as_slice(), &[root]);
    }

    #[test]
    fn continue_visits_every_node() {
        let mut seen = Vec::new();
        let consumed = run(&[3, 2, 1], &mut seen, |n, seen| {
            seen.push(n);
            Outcome::Continue
        });
        assert!(!consumed);
        assert_eq!(seen, [3, 2, 1]);
    }

    #[test]
    fn consume_stops_before_ancestors() {
        let mut seen = Vec::new();
        let consumed = run(&[3, 2, 1], &mut seen, |n, seen| {
            seen.push(n);
            if n == 2 {
                Outcome::StopAndConsume
            } else {
                Outcome::Continue
            }
        });
        assert!(consumed);
        assert_eq!(seen, [3, 2]);
    }
}
