use bevy::prelude::*;
use std::collections::VecDeque;

/// Fixed-capacity history of an entity's recent positions, newest first.
/// Every `shift` drops the oldest point and records one new point, so the
/// length never changes after construction.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vec2>,
}

impl Trail {
    /// A trail pre-filled with `pos`, so a freshly spawned entity renders a
    /// zero-length streak instead of a line back to some stale coordinate.
    pub fn filled(pos: Vec2, capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        let mut points = VecDeque::with_capacity(capacity);
        points.extend(std::iter::repeat(pos).take(capacity));
        Self { points }
    }

    /// Drop the oldest point and record `pos` as the newest.
    pub fn shift(&mut self, pos: Vec2) {
        self.points.pop_back();
        self.points.push_front(pos);
    }

    /// The rearmost point, i.e. the far end of the rendered streak.
    /// Never empty: capacity is at least 1 and `shift` keeps it constant.
    pub fn oldest(&self) -> Vec2 {
        *self.points.back().unwrap()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Points from newest to oldest.
    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }
}
