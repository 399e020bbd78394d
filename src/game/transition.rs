use super::keytimes::{Keytimes, PositionTrack};
use crate::graph::ColorGraph;
use bevy::math::Vec3;

/// Timed morph from a solved level's layout to the next level's layout
#[derive(Debug, Clone)]
pub struct Transition {
    pub from_level: usize,
    pub to_level: usize,
    elapsed: f32,
    duration: f32,
    /// One track per node id, sized to the larger of the two levels
    tracks: Vec<PositionTrack>,
    camera: Keytimes,
}

impl Transition {
    /// Seed tracks from `from` to `to`
    ///
    /// Shared ids move between their two positions. An id present on only one side
    /// starts (or ends) at that side's centroid.
    pub fn start(
        from_level: usize,
        from: &ColorGraph,
        to_level: usize,
        to: &ColorGraph,
        duration: f32,
        camera_rail: (f32, f32),
    ) -> Self {
        let count = from.node_count().max(to.node_count());
        let from_center = from.centroid();
        let to_center = to.centroid();

        let tracks = (0..count)
            .map(|i| {
                let start = from.nodes().get(i).map_or(from_center, |n| n.position);
                let end = to.nodes().get(i).map_or(to_center, |n| n.position);
                PositionTrack::new(start, end)
            })
            .collect();

        Transition {
            from_level,
            to_level,
            elapsed: 0.0,
            duration,
            tracks,
            camera: Keytimes::linear(camera_rail.0, camera_rail.1),
        }
    }

    /// Accumulate `delta` seconds; true once the full duration has elapsed
    pub fn advance(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Normalized time in 0..=1
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn node_count(&self) -> usize {
        self.tracks.len()
    }

    /// Interpolated position of every tracked node at the current time
    pub fn positions(&self) -> Vec<Vec3> {
        let t = self.progress();
        self.tracks.iter().map(|track| track.evaluate(t)).collect()
    }

    pub fn camera_y(&self) -> f32 {
        self.camera.evaluate(self.progress())
    }
}
