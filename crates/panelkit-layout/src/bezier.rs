//! Cubic Bezier paths with sampled arc length.
//!
//! Arc length is approximated by a polyline: each segment is evaluated at
//! [`SAMPLES_PER_SEGMENT`] evenly spaced parameter values and the straight
//! distances between consecutive samples are summed.

use panelkit_core::Point;
use serde::{Deserialize, Serialize};

/// Parameter samples taken per segment.
pub const SAMPLES_PER_SEGMENT: usize = 16;

/// Targets closer to zero than this resolve to the path start.
const START_EPSILON: f32 = 1e-7;

/// Evaluate a cubic Bezier at parameter `t`.
///
/// `B(t) = t³·P3 + 3t²(1−t)·P2 + 3t(1−t)²·P1 + (1−t)³·P0`
#[must_use]
pub fn cubic_point(t: f32, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    let u = 1.0 - t;
    let a = t * t * t;
    let b = 3.0 * t * t * u;
    let c = 3.0 * t * u * u;
    let d = u * u * u;
    Point::new(
        a * p3.x + b * p2.x + c * p1.x + d * p0.x,
        a * p3.y + b * p2.y + c * p1.y + d * p0.y,
    )
}

/// One cubic segment; its start is the previous segment's end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    /// First control point
    pub control1: Point,
    /// Second control point
    pub control2: Point,
    /// End point
    pub end: Point,
}

impl BezierSegment {
    /// Create a segment from its two control points and end point.
    #[must_use]
    pub const fn new(control1: Point, control2: Point, end: Point) -> Self {
        Self {
            control1,
            control2,
            end,
        }
    }

    /// A straight segment from `start` to `end` with evenly spaced controls.
    #[must_use]
    pub fn line(start: Point, end: Point) -> Self {
        Self::new(start.lerp(&end, 1.0 / 3.0), start.lerp(&end, 2.0 / 3.0), end)
    }

    /// Point at parameter `t` when the segment begins at `start`.
    #[must_use]
    pub fn point_at(&self, start: Point, t: f32) -> Point {
        cubic_point(t, start, self.control1, self.control2, self.end)
    }
}

/// A start point followed by zero or more cubic segments.
///
/// A path with no segments is valid and has length zero; every arc-length
/// query on it yields the start point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BezierPath {
    /// Where the first segment begins
    pub start: Point,
    /// Segments in drawing order
    #[serde(default)]
    pub segments: Vec<BezierSegment>,
}

impl BezierPath {
    /// Create an empty path at `start`.
    #[must_use]
    pub const fn new(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Append a segment.
    #[must_use]
    pub fn with_segment(mut self, segment: BezierSegment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Append a straight segment from the current end point to `end`.
    #[must_use]
    pub fn line_to(self, end: Point) -> Self {
        let from = self.end_point();
        self.with_segment(BezierSegment::line(from, end))
    }

    /// Last point of the path (the start when there are no segments).
    #[must_use]
    pub fn end_point(&self) -> Point {
        self.segments.last().map_or(self.start, |s| s.end)
    }

    /// Sampled arc length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.samples().last().map_or(0.0, |s| s.length)
    }

    /// First sample whose cumulative arc length reaches `target`.
    ///
    /// Targets at (or within `1e-7` of) zero give the start point; targets
    /// past the end give the end point.
    #[must_use]
    pub fn point_at_length(&self, target: f32) -> Point {
        if target.abs() < START_EPSILON {
            return self.start;
        }
        self.samples()
            .find(|s| s.length >= target)
            .map_or_else(|| self.end_point(), |s| s.point)
    }

    /// The start point followed by every sample, in path order.
    #[must_use]
    pub fn sample_points(&self) -> Vec<Point> {
        std::iter::once(self.start)
            .chain(self.samples().map(|s| s.point))
            .collect()
    }

    fn samples(&self) -> Samples<'_> {
        Samples {
            path: self,
            segment: 0,
            step: 0,
            segment_start: self.start,
            previous: self.start,
            length: 0.0,
        }
    }
}

/// A polyline vertex and the arc length accumulated up to it.
#[derive(Debug, Clone, Copy)]
struct Sample {
    point: Point,
    length: f32,
}

/// Walks every segment at [`SAMPLES_PER_SEGMENT`] resolution.
struct Samples<'a> {
    path: &'a BezierPath,
    segment: usize,
    step: usize,
    segment_start: Point,
    previous: Point,
    length: f32,
}

impl Iterator for Samples<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let path = self.path;
        let segment = path.segments.get(self.segment)?;
        self.step += 1;
        let t = self.step as f32 / SAMPLES_PER_SEGMENT as f32;
        let point = segment.point_at(self.segment_start, t);
        self.length += self.previous.distance(&point);
        self.previous = point;

        if self.step == SAMPLES_PER_SEGMENT {
            self.step = 0;
            self.segment += 1;
            self.segment_start = segment.end;
        }
        Some(Sample {
            point,
            length: self.length,
        })
    }
}
