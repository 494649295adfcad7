use glam::Vec2;

use brawl_shared::ControlVector;

use crate::config::AgentConfig;
use crate::snapshot::{FighterView, FrameSnapshot};

// Platform half-width and the fighter's body half-width (rounded), used for
// the horizontal alignment test.
const PLATFORM_HALF_WIDTH: f32 = 0.9;
const BODY_HALF_WIDTH: f32 = 0.4;

// Offset from the platform center past which the fighter counts as standing
// on one of its ends.
const PLATFORM_END_OFFSET: f32 = 0.3;

/// True when the fighter's body overlaps the platform's width on the x axis.
pub fn aligned_with_platform(x: f32, platform_x: f32) -> bool {
    x + BODY_HALF_WIDTH >= platform_x - PLATFORM_HALF_WIDTH
        && x - BODY_HALF_WIDTH <= platform_x + PLATFORM_HALF_WIDTH
}

pub fn at_right_end_of_platform(x: f32, platform_x: f32) -> bool {
    x > platform_x + PLATFORM_END_OFFSET && aligned_with_platform(x, platform_x)
}

pub fn at_left_end_of_platform(x: f32, platform_x: f32) -> bool {
    x < platform_x - PLATFORM_END_OFFSET && aligned_with_platform(x, platform_x)
}

/// y grows downward: above means a smaller y.
pub fn is_above_platform(pos: Vec2, platform_pos: Vec2) -> bool {
    pos.y < platform_pos.y
}

fn in_middle_gap(x: f32, cfg: &AgentConfig) -> bool {
    -cfg.gap_half_width <= x && x <= cfg.gap_half_width
}

/// Shared jump-recovery routine.
///
/// Waits while still rising fast or far above the stage. Otherwise cancels
/// any attack and taps jump on alternating ticks while jumps remain; out of
/// jumps mid-air, it holds up and rides the heavy recovery attack.
pub fn jump_recover(me: &FighterView, cfg: &AgentConfig, tick: u64, cv: &mut ControlVector) {
    if me.vel.y < cfg.rising_speed_cutoff || me.pos.y < cfg.high_recovery_cutoff {
        return;
    }
    cv.stop_attacking();
    if !me.airborne || me.jumps_left != 0 {
        // Tap, don't hold - a held jump key never re-triggers.
        cv.set_jump(tick % 2 == 0);
    } else {
        cv.hold_up();
        cv.press_heavy();
    }
}

/// Stage recovery and platform handling. Runs after the attack and goal
/// logic and may override their horizontal movement.
pub fn apply(
    snap: &FrameSnapshot,
    cfg: &AgentConfig,
    goal_x: Option<f32>,
    tick: u64,
    cv: &mut ControlVector,
) {
    let me = &snap.me;
    let platform = &snap.platform;

    if me.pos.x > cfg.stage_edge_x {
        cv.move_left();
        jump_recover(me, cfg, tick, cv);
    } else if me.pos.x < -cfg.stage_edge_x {
        cv.move_right();
        jump_recover(me, cfg, tick, cv);
    } else if in_middle_gap(me.pos.x, cfg) && me.airborne {
        if !is_above_platform(me.pos, platform.pos) {
            cv.stop_attacking();
            let prioritize_left = me.jumps_left == 0
                || (me.jumps_left == 1 && me.pos.y - platform.pos.y > 1.0);

            if aligned_with_platform(me.pos.x, platform.pos.x) {
                if me.pos.y - platform.pos.y > 2.0 || prioritize_left {
                    jump_recover(me, cfg, tick, cv);
                }

                // Platform parked on the right half: the gap between it and
                // the right stage is too small, go around its left side.
                let right_half_threshold = 0.6 - if platform.vel.x > 0.0 { 0.6 } else { 0.0 };
                if platform.pos.x > right_half_threshold {
                    cv.move_left();
                } else if me.pos.x < platform.pos.x {
                    cv.move_left();
                } else {
                    cv.move_right();
                }
            } else {
                jump_recover(me, cfg, tick, cv);
            }

            if prioritize_left {
                cv.move_left();
            }
        } else {
            match goal_x {
                Some(g) if me.jumps_left > 1 => {
                    // Chase the goal only when momentum already points that
                    // way; don't burn speed reversing mid-air.
                    if g > me.pos.x && me.vel.x > 0.0 {
                        cv.move_right();
                    } else if g < me.pos.x && me.vel.x < 0.0 {
                        cv.move_left();
                    }
                }
                _ => {
                    if me.pos.x < platform.pos.x {
                        cv.move_right();
                    } else {
                        cv.move_left();
                    }
                }
            }
        }
    } else if in_middle_gap(me.pos.x, cfg) && !me.airborne {
        // Momentum jump off the inner ledges or the platform ends.
        let crossing_gap = (me.pos.x < -cfg.ledge_x && me.vel.x > 0.0)
            || (me.pos.x > cfg.ledge_x && me.vel.x < 0.0)
            || (at_right_end_of_platform(me.pos.x, platform.pos.x) && me.vel.x > 0.0)
            || (at_left_end_of_platform(me.pos.x, platform.pos.x) && me.vel.x < 0.0);
        if crossing_gap {
            jump_recover(me, cfg, tick, cv);
        }
    }
}
