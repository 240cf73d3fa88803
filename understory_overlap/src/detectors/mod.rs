// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision detection strategies.
//!
//! - `brute_force`: compares the candidate with every other rectangle. O(n) per
//!   query and the ground truth the other strategies are measured against.
//! - `indexed`: queries a [`QuadTree`][crate::QuadTree] built once over the scene and
//!   reports a collision when the candidate's region yields more than one entry.

pub(crate) mod brute_force;
pub(crate) mod indexed;

pub use brute_force::BruteForceDetector;
pub use indexed::IndexedDetector;
