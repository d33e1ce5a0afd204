//! Hero banner rotation
//!
//! Only active slides take part. The carousel advances cyclically on a fixed
//! cadence when more than one slide is active; manual selection jumps without
//! moving the cadence.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::entities::HeroMedia;

/// Default time between automatic advances
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(6);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("slide {index} is out of range (carousel has {len} slide(s))")]
    OutOfRange { index: usize, len: usize },
}

/// Fixed-cadence tick source
///
/// Ticks fall at `start + k * period`. Late polls report every missed tick
/// and the schedule does not drift.
#[derive(Debug, Clone)]
pub struct RotationTimer {
    period: Duration,
    next_due: Instant,
}

impl RotationTimer {
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Number of ticks elapsed at `now`, consuming them
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        let mut ticks = 0;
        while now >= self.next_due {
            self.next_due += self.period;
            ticks += 1;
        }
        ticks
    }

    /// Time left until the next tick
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

/// Carousel over the active hero slides
#[derive(Debug, Clone)]
pub struct HeroCarousel {
    slides: Vec<HeroMedia>,
    index: usize,
    timer: Option<RotationTimer>,
}

impl HeroCarousel {
    /// Build from the full hero collection; inactive entries are dropped
    pub fn new(all: Vec<HeroMedia>, period: Duration, start: Instant) -> Self {
        let slides: Vec<HeroMedia> = all.into_iter().filter(|m| m.active).collect();
        let timer = (slides.len() > 1).then(|| RotationTimer::new(period, start));
        Self {
            slides,
            index: 0,
            timer,
        }
    }

    pub fn with_default_interval(all: Vec<HeroMedia>, start: Instant) -> Self {
        Self::new(all, ROTATION_INTERVAL, start)
    }

    pub fn slides(&self) -> &[HeroMedia] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// None when no slide is active; the hero then renders nothing
    pub fn current(&self) -> Option<&HeroMedia> {
        self.slides.get(self.index)
    }

    /// Whether automatic advancing runs
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer(&self) -> Option<&RotationTimer> {
        self.timer.as_ref()
    }

    /// Step to the next slide, wrapping at the end
    pub fn advance(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
    }

    /// Jump to slide `index`
    pub fn select(&mut self, index: usize) -> Result<(), RotationError> {
        if index >= self.slides.len() {
            return Err(RotationError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    /// Apply every tick due at `now`; returns how many were applied
    pub fn poll(&mut self, now: Instant) -> u32 {
        let ticks = match self.timer.as_mut() {
            Some(timer) => timer.due_ticks(now),
            None => return 0,
        };
        for _ in 0..ticks {
            self.advance();
        }
        ticks
    }
}
