use serde::{Deserialize, Serialize};

use brawl_shared::FRAME_TIME;

/// Tuning knobs for [`RuleBasedAgent`](crate::RuleBasedAgent).
///
/// Stage geometry uses a y axis that grows downward: negative y is above the
/// stage, positive y is below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Target horizontal spacing from the opponent when no other goal applies.
    pub maintain_distance: f32,
    /// Damping applied to the opponent's velocity when extrapolating their
    /// position to an attack's connect frame.
    pub prediction_damp: f32,
    /// Seconds per simulation frame.
    pub frame_time: f32,
    /// A goal closer than this is treated as reached and dropped.
    pub goal_epsilon: f32,
    /// Press pickup instead of walking when a stocked spawner is closer than this.
    pub pickup_range: f32,
    /// A scheduled dodge only fires when the opponent is closer than this.
    pub dodge_range: f32,
    /// Ticks before the predicted hit at which the dodge fires.
    pub dodge_lead_ticks: u64,
    /// |x| beyond which the fighter is off the stage.
    pub stage_edge_x: f32,
    /// |x| beyond which an opponent is considered pinned at a stage edge.
    pub edge_guard_x: f32,
    /// Half-width of the central gap between the two stage halves.
    pub gap_half_width: f32,
    /// Inner-ledge |x| past which a grounded fighter drifting inward jumps.
    pub ledge_x: f32,
    /// Vertical speed above which recovery waits (still rising).
    pub rising_speed_cutoff: f32,
    /// Height above the stage past which recovery waits (y grows downward).
    pub high_recovery_cutoff: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            maintain_distance: 2.0,
            prediction_damp: 0.5,
            frame_time: FRAME_TIME,
            goal_epsilon: 0.5,
            pickup_range: 0.8,
            dodge_range: 2.5,
            dodge_lead_ticks: 2,
            stage_edge_x: 6.0,
            edge_guard_x: 4.0,
            gap_half_width: 2.5,
            ledge_x: 2.0,
            rising_speed_cutoff: -1.8,
            high_recovery_cutoff: -3.0,
        }
    }
}
