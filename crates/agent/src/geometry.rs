use glam::Vec2;

/// Axis-aligned box given by its center and full extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Closed-interval overlap test: boxes sharing an edge collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let half = self.size * 0.5;
        let other_half = other.size * 0.5;
        self.center.x + half.x >= other.center.x - other_half.x
            && self.center.x - half.x <= other.center.x + other_half.x
            && self.center.y + half.y >= other.center.y - other_half.y
            && self.center.y - half.y <= other.center.y + other_half.y
    }
}

/// Linear extrapolation of a position `delay_frames` ahead, with the
/// velocity damped by `damp` to avoid over-leading a maneuvering target.
pub fn extrapolate(pos: Vec2, vel: Vec2, damp: f32, frame_time: f32, delay_frames: u32) -> Vec2 {
    pos + vel * (damp * frame_time * delay_frames as f32)
}
