// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock timing for ad-hoc performance logs.

use std::time::{Duration, Instant};

/// Measures elapsed wall-clock time from [`start`][Self::start].
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since start; the stopwatch keeps running.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Consume the stopwatch and return the total time.
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}
