// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the checked variants of precondition-driven operations.
//!
//! Most of the algebra in this crate follows a precondition contract: feeding a
//! zero-length vector to `normalize` produces NaN and the NaN propagates. Callers
//! that prefer an explicit failure use the `try_*` counterparts, which report a
//! [`MathError`] instead of substituting an arbitrary value.

use thiserror::Error;

/// Errors reported by the checked (`try_*`) operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A vector with zero (or non-finite) length cannot be normalized.
    #[error("cannot normalize a vector of length {length}")]
    ZeroLength {
        /// The offending length.
        length: f32,
    },

    /// A rotation axis must have a non-zero length.
    #[error("rotation axis has zero length")]
    ZeroAxis,

    /// A homogeneous transform produced `w == 0`, so no perspective divide is possible.
    #[error("degenerate homogeneous coordinate (w = {w})")]
    DegenerateHomogeneous {
        /// The resulting `w` component.
        w: f32,
    },
}

/// A specialized `Result` type for checked math operations.
pub type Result<T> = std::result::Result<T, MathError>;
