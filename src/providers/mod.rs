// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Production implementations of the trait seams in [`crate::traits`].
//!
//! Applications use these; tests reach for the fakes in [`crate::testing`].

mod manifest;
mod tokio_clock;

pub use self::manifest::{FileManifestSource, HttpManifestSource};
pub use self::tokio_clock::TokioClock;
