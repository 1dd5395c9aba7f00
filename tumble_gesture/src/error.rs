// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::event::TouchId;

/// Errors raised when starting a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    /// The target already has a gesture, owned by another finger.
    #[error("target already has a gesture owned by {owner:?}")]
    TargetBusy {
        /// The finger that owns the existing gesture.
        owner: TouchId,
    },
}
