// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values exchanged with the presentation layer: paints out, commands in.

/// How a rectangle should be drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Paint {
    /// The rectangle overlaps another one (drawn red).
    Collision,
    /// The rectangle overlaps nothing (drawn mint).
    Clear,
}

impl Paint {
    /// Map a detector verdict to a paint.
    pub fn from_collision(collides: bool) -> Self {
        if collides { Self::Collision } else { Self::Clear }
    }

    /// Whether this paint marks a collision.
    pub fn is_collision(self) -> bool {
        self == Self::Collision
    }
}

/// Edits a scene accepts.
///
/// The view maps gestures onto these: swipe up adds, swipe down removes, double tap
/// resets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SceneCommand {
    /// One more rectangle, up to the configured maximum.
    AddRect,
    /// One fewer rectangle, down to the configured minimum.
    RemoveRect,
    /// Same count, fresh random placement.
    Reset,
}
