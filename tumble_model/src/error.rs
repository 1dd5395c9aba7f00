// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::field::FieldId;

/// Errors raised when reading model data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The element has no model store at all.
    #[error("element has no model data")]
    Unknown,
    /// A field the caller requires was never initialized.
    #[error("model field `{field}` is not initialized")]
    MissingField {
        /// The missing field.
        field: FieldId,
    },
}
