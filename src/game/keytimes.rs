//! Piecewise-linear keyframe channels.

use bevy::math::Vec3;

/// One scalar channel of `(time, value)` samples, kept sorted by time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keytimes {
    samples: Vec<(f32, f32)>,
}

impl Keytimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight ramp from `start` at t=0 to `end` at t=1
    pub fn linear(start: f32, end: f32) -> Self {
        let mut keys = Self::new();
        keys.reseed(start, end);
        keys
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Replace every sample with a fresh 0..1 ramp
    pub fn reseed(&mut self, start: f32, end: f32) {
        self.clear();
        self.add_sample(0.0, start);
        self.add_sample(1.0, end);
    }

    /// Insert a sample; a sample at an existing time replaces it
    pub fn add_sample(&mut self, time: f32, value: f32) {
        match self
            .samples
            .binary_search_by(|(t, _)| t.total_cmp(&time))
        {
            Ok(i) => self.samples[i].1 = value,
            Err(i) => self.samples.insert(i, (time, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Value at `time`, clamped to the first/last sample outside the keyed range
    ///
    /// An empty channel evaluates to 0.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (Some(&(first_t, first_v)), Some(&(last_t, last_v))) =
            (self.samples.first(), self.samples.last())
        else {
            return 0.0;
        };

        if time <= first_t {
            return first_v;
        }
        if time >= last_t {
            return last_v;
        }

        // First sample strictly after `time`; guaranteed in 1..len by the checks above
        let upper = self.samples.partition_point(|&(t, _)| t <= time);
        let (t0, v0) = self.samples[upper - 1];
        let (t1, v1) = self.samples[upper];
        let u = (time - t0) / (t1 - t0);
        v0 + (v1 - v0) * u
    }
}

/// Three channels animating one node's position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionTrack {
    x: Keytimes,
    y: Keytimes,
    z: Keytimes,
}

impl PositionTrack {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        let mut track = Self::default();
        track.reseed(start, end);
        track
    }

    pub fn reseed(&mut self, start: Vec3, end: Vec3) {
        self.x.reseed(start.x, end.x);
        self.y.reseed(start.y, end.y);
        self.z.reseed(start.z, end.z);
    }

    pub fn evaluate(&self, time: f32) -> Vec3 {
        Vec3::new(
            self.x.evaluate(time),
            self.y.evaluate(time),
            self.z.evaluate(time),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_midpoint() {
        let keys = Keytimes::linear(2.0, 6.0);

        assert_eq!(keys.evaluate(0.0), 2.0);
        assert_eq!(keys.evaluate(1.0), 6.0);
        assert_eq!(keys.evaluate(0.5), 4.0);
        assert!((keys.evaluate(0.25) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamps_outside_range() {
        let keys = Keytimes::linear(-1.0, 1.0);

        assert_eq!(keys.evaluate(-3.0), -1.0);
        assert_eq!(keys.evaluate(7.5), 1.0);
    }

    #[test]
    fn test_reseed_supersedes_old_samples() {
        let mut keys = Keytimes::linear(0.0, 10.0);
        keys.reseed(5.0, 5.0);

        assert_eq!(keys.len(), 2);
        assert_eq!(keys.evaluate(0.3), 5.0);
    }

    #[test]
    fn test_empty_and_single_sample() {
        let mut keys = Keytimes::new();
        assert!(keys.is_empty());
        assert_eq!(keys.evaluate(0.5), 0.0);

        keys.add_sample(0.4, 9.0);
        assert_eq!(keys.evaluate(0.0), 9.0);
        assert_eq!(keys.evaluate(1.0), 9.0);
    }

    #[test]
    fn test_out_of_order_samples_are_sorted() {
        let mut keys = Keytimes::new();
        keys.add_sample(1.0, 4.0);
        keys.add_sample(0.0, 0.0);
        keys.add_sample(0.5, 1.0);

        assert_eq!(keys.evaluate(0.25), 0.5);
        assert_eq!(keys.evaluate(0.75), 2.5);

        keys.add_sample(0.5, 2.0);
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.evaluate(0.5), 2.0);
    }

    #[test]
    fn test_position_track() {
        let track = PositionTrack::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(-0.8, -0.8, 0.2));

        assert_eq!(track.evaluate(0.0), Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(track.evaluate(1.0), Vec3::new(-0.8, -0.8, 0.2));
        let mid = track.evaluate(0.5);
        assert!((mid - Vec3::new(-0.9, -0.9, 0.1)).length() < 1e-6);
    }
}
