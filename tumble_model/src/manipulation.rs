// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Who currently controls a brick.
///
/// A brick is in exactly one of these states. Only [`Manipulation::Free`]
/// bricks are integrated; the other two are owned by a finger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Manipulation {
    /// Subject to physics.
    #[default]
    Free,
    /// Being sized by a draw gesture; not yet finalized.
    Drawing,
    /// Being repositioned by a move gesture.
    Moving,
}

impl Manipulation {
    /// Returns `true` if physics may integrate the brick.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}
