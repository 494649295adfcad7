use glam::Vec2;

use brawl_shared::{ControlVector, BODY_HEIGHT, BODY_WIDTH};

use crate::config::AgentConfig;
use crate::geometry::{extrapolate, Aabb};
use crate::policy::PolicyError;
use crate::snapshot::{FighterView, FrameSnapshot};
use crate::tables::{attack_moves, startup_frames, HitboxSpec};

/// An attack hitbox placed in the world for the given attacker.
pub fn attack_box(attacker: Vec2, facing_right: bool, spec: &HitboxSpec) -> Aabb {
    let mirror = if facing_right { 1.0 } else { -1.0 };
    Aabb::new(
        Vec2::new(attacker.x + spec.offset.x * mirror, attacker.y + spec.offset.y),
        spec.size,
    )
}

/// The opponent's fixed-size body box.
fn body_box(center: Vec2) -> Aabb {
    Aabb::new(center, Vec2::new(BODY_WIDTH, BODY_HEIGHT))
}

/// Scan the current (weapon, airborne) move bucket and commit to the first
/// move whose hitbox reaches the opponent.
///
/// On a match: orient for the move's direction class, then press light, or
/// press heavy on even ticks only - the throttle that keeps the agent from
/// locking into heavy spam against a moving target. When nothing lands with
/// the current facing, the same bucket is re-tested mirrored; a match there
/// only turns the agent around (repositioning, no attack this tick).
pub fn choose_attack(
    snap: &FrameSnapshot,
    cfg: &AgentConfig,
    tick: u64,
    cv: &mut ControlVector,
) -> Result<(), PolicyError> {
    let me = &snap.me;
    let opp = &snap.opponent;
    let moves = attack_moves(me.weapon, me.airborne);
    let opp_box = body_box(opp.pos);

    for (mv, hitbox) in moves {
        let delay = startup_frames(me.weapon, *mv).ok_or(PolicyError::MissingTiming {
            weapon: me.weapon,
            move_kind: *mv,
        })?;

        // Where the opponent should be when this move connects. The gate
        // below tests the current position, not the prediction.
        // TODO: retune the hitboxes against the predicted position, then
        // gate on it.
        let _predicted = extrapolate(opp.pos, opp.vel, cfg.prediction_damp, cfg.frame_time, delay);

        if !attack_box(me.pos, me.facing_right, hitbox).overlaps(&opp_box) {
            continue;
        }

        orient_for(*mv, me, opp.pos, cv);
        if mv.is_light() {
            cv.press_light();
        } else if mv.is_heavy() && tick % 2 == 0 {
            cv.press_heavy();
        }
        return Ok(());
    }

    // No chance as-is; would turning around line one up next frame?
    for (_, hitbox) in moves {
        if !attack_box(me.pos, !me.facing_right, hitbox).overlaps(&opp_box) {
            continue;
        }
        if me.facing_right {
            cv.move_left();
        } else {
            cv.move_right();
        }
        break;
    }

    Ok(())
}

fn orient_for(mv: brawl_shared::MoveKind, me: &FighterView, opp_pos: Vec2, cv: &mut ControlVector) {
    if mv.is_up() {
        cv.hold_up();
        cv.stop_horizontal();
    } else if mv.is_down() {
        cv.hold_down();
        cv.stop_horizontal();
    } else if mv.is_side() {
        if opp_pos.x > me.pos.x {
            cv.move_right();
        } else {
            cv.move_left();
        }
        cv.stop_vertical();
    }
}
