// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture table: one draw-or-move slot per touch target.
//!
//! ## Usage
//!
//! 1) On touch-start on a drawing surface, create the brick in the view and call
//!    [`GestureTable::begin_draw`] with the surface as target.
//! 2) On touch-start on an existing brick, call [`GestureTable::begin_move`]
//!    with the brick as target.
//! 3) On touch-move, call [`GestureTable::track`]; on touch-end, call
//!    [`GestureTable::end`]. Both are keyed by the touch's target.
//! 4) Apply the returned [`GestureEvent`]s to the model and view.
//!
//! A target absent from the table is idle. Every slot remembers which finger
//! opened it; moves and ends from other fingers on the same target are ignored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tumble_gesture::{GestureEvent, GestureTable, TouchId};
//!
//! const SURFACE: u32 = 1;
//! const BRICK: u32 = 2;
//! let finger = TouchId(0);
//!
//! let mut table = GestureTable::new();
//! table.begin_draw(SURFACE, finger, Point::new(50.0, 50.0), BRICK).unwrap();
//!
//! // Drag up and to the left of the anchor.
//! let ev = table.track(&SURFACE, finger, Point::new(20.0, 30.0));
//! assert_eq!(
//!     ev,
//!     Some(GestureEvent::DrawResized { brick: BRICK, rect: Rect::new(20.0, 30.0, 50.0, 50.0) })
//! );
//!
//! let ev = table.end(&SURFACE, finger);
//! assert!(matches!(ev, Some(GestureEvent::DrawFinished { brick: BRICK, .. })));
//! assert!(table.is_idle(&SURFACE));
//! ```

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::error::GestureError;
use crate::event::{GestureEvent, TouchId};
use crate::grab::GrabOffset;

/// The non-idle states of one touch target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureSlot<E> {
    /// A new brick is being sized.
    Drawing {
        /// Finger that owns the gesture.
        touch: TouchId,
        /// The brick being drawn.
        brick: E,
        /// Where the finger first landed; fixed for the gesture.
        anchor: Point,
        /// Last computed extent.
        rect: Rect,
    },
    /// An existing brick is being repositioned.
    Moving {
        /// Finger that owns the gesture.
        touch: TouchId,
        /// The grabbed brick.
        brick: E,
        /// Finger-minus-origin offset captured at grab time.
        grab: GrabOffset,
    },
}

impl<E: Copy> GestureSlot<E> {
    /// Finger that owns the gesture.
    pub fn touch(&self) -> TouchId {
        match *self {
            Self::Drawing { touch, .. } | Self::Moving { touch, .. } => touch,
        }
    }

    /// The brick under manipulation.
    pub fn brick(&self) -> E {
        match *self {
            Self::Drawing { brick, .. } | Self::Moving { brick, .. } => brick,
        }
    }
}

/// Interaction state for every touch target with a gesture in progress.
#[derive(Clone, Debug)]
pub struct GestureTable<E> {
    slots: HashMap<E, GestureSlot<E>>,
}

impl<E> Default for GestureTable<E> {
    fn default() -> Self {
        Self {
            slots: HashMap::default(),
        }
    }
}

impl<E: Copy + Eq + Hash + Debug> GestureTable<E> {
    /// Create an empty table; every target is idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The target's slot, or `None` if it is idle.
    pub fn slot(&self, target: &E) -> Option<&GestureSlot<E>> {
        self.slots.get(target)
    }

    /// Returns `true` if the target has no gesture in progress.
    pub fn is_idle(&self, target: &E) -> bool {
        !self.slots.contains_key(target)
    }

    /// Number of targets with a gesture in progress.
    pub fn active_len(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over `(target, slot)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &GestureSlot<E>)> + '_ {
        self.slots.iter()
    }

    fn ensure_idle(&self, target: &E) -> Result<(), GestureError> {
        match self.slots.get(target) {
            Some(slot) => Err(GestureError::TargetBusy {
                owner: slot.touch(),
            }),
            None => Ok(()),
        }
    }

    /// Idle → Drawing.
    ///
    /// `brick` is the freshly created, zero-size element; `anchor` is the
    /// finger's page position.
    ///
    /// # Errors
    ///
    /// [`GestureError::TargetBusy`] if `surface` already has a gesture.
    pub fn begin_draw(
        &mut self,
        surface: E,
        touch: TouchId,
        anchor: Point,
        brick: E,
    ) -> Result<GestureEvent<E>, GestureError> {
        self.ensure_idle(&surface)?;
        let rect = Rect::from_origin_size(anchor, Size::ZERO);
        self.slots.insert(
            surface,
            GestureSlot::Drawing {
                touch,
                brick,
                anchor,
                rect,
            },
        );
        log::debug!("{surface:?}: idle -> drawing {brick:?} at {anchor:?}");
        Ok(GestureEvent::DrawStarted { brick, rect })
    }

    /// Idle(brick) → Moving.
    ///
    /// `origin` is the brick's current top-left corner.
    ///
    /// # Errors
    ///
    /// [`GestureError::TargetBusy`] if `brick` already has a gesture.
    pub fn begin_move(
        &mut self,
        brick: E,
        touch: TouchId,
        finger: Point,
        origin: Point,
    ) -> Result<GestureEvent<E>, GestureError> {
        self.ensure_idle(&brick)?;
        let grab = GrabOffset::capture(finger, origin);
        self.slots.insert(brick, GestureSlot::Moving { touch, brick, grab });
        log::debug!("{brick:?}: idle -> moving, grab {:?}", grab.delta());
        Ok(GestureEvent::MoveStarted { brick, origin })
    }

    /// Drawing → Drawing or Moving → Moving.
    ///
    /// Returns `None` if the target is idle or owned by another finger.
    pub fn track(&mut self, target: &E, touch: TouchId, finger: Point) -> Option<GestureEvent<E>> {
        let slot = self.slots.get_mut(target)?;
        if slot.touch() != touch {
            log::trace!("{target:?}: ignoring move from {touch:?}");
            return None;
        }
        match slot {
            GestureSlot::Drawing {
                brick, anchor, rect, ..
            } => {
                *rect = Rect::from_points(*anchor, finger);
                Some(GestureEvent::DrawResized {
                    brick: *brick,
                    rect: *rect,
                })
            }
            GestureSlot::Moving { brick, grab, .. } => Some(GestureEvent::Moved {
                brick: *brick,
                origin: grab.origin_for(finger),
            }),
        }
    }

    /// Drawing → Idle or Moving → Idle.
    ///
    /// Returns `None` if the target is idle or owned by another finger.
    pub fn end(&mut self, target: &E, touch: TouchId) -> Option<GestureEvent<E>> {
        if self.slots.get(target)?.touch() != touch {
            log::trace!("{target:?}: ignoring end from {touch:?}");
            return None;
        }
        let slot = self.slots.remove(target)?;
        log::debug!("{target:?}: -> idle");
        Some(match slot {
            GestureSlot::Drawing { brick, rect, .. } => GestureEvent::DrawFinished { brick, rect },
            GestureSlot::Moving { brick, .. } => GestureEvent::MoveFinished { brick },
        })
    }

    /// Drop any gesture keyed by, or manipulating, `element`.
    ///
    /// Used when the view removes an element mid-gesture. Returns the number of
    /// slots dropped.
    pub fn forget(&mut self, element: &E) -> usize {
        let before = self.slots.len();
        self.slots.retain(|target, slot| target != element && slot.brick() != *element);
        before - self.slots.len()
    }
}
