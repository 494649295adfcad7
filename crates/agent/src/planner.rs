use brawl_shared::{ControlVector, WeaponType};

use crate::config::AgentConfig;
use crate::snapshot::FrameSnapshot;

/// Pick this tick's target x coordinate and emit movement toward it.
///
/// Unarmed fighters chase the nearest stocked spawner; close enough, they
/// press pickup instead. Otherwise the agent holds a standoff distance from
/// the opponent, passing through to the opposite side rather than backing
/// off the stage when the opponent is pinned at an edge. A goal that is
/// already (nearly) reached is dropped so the agent does not oscillate.
///
/// The surviving goal is returned for the recovery controller to use as a
/// tie-break.
pub fn plan_goal(snap: &FrameSnapshot, cfg: &AgentConfig, cv: &mut ControlVector) -> Option<f32> {
    let me = &snap.me;
    let opp = &snap.opponent;
    let mut goal_x: Option<f32> = None;

    if me.weapon == WeaponType::Unarmed {
        let mut closest: Option<f32> = None;
        for spawner in &snap.spawners {
            if !spawner.stocked {
                continue;
            }
            let dist = (spawner.pos.x - me.pos.x).abs();
            if closest.map_or(true, |c| dist < c) {
                goal_x = Some(spawner.pos.x);
                closest = Some(dist);
            }
        }

        if let Some(c) = closest {
            if c < cfg.pickup_range {
                // Close enough; grab it instead of walking onto it.
                goal_x = None;
                cv.set_pickup(true);
            }
        }
    }

    if goal_x.is_none() {
        goal_x = Some(if opp.pos.x > cfg.edge_guard_x && me.pos.x > opp.pos.x {
            // Opponent pinned at the right edge with us outside: pass through
            // instead of retreating off the stage.
            opp.pos.x - cfg.maintain_distance
        } else if opp.pos.x < -cfg.edge_guard_x && me.pos.x < opp.pos.x {
            opp.pos.x + cfg.maintain_distance
        } else if me.pos.x < opp.pos.x {
            opp.pos.x - cfg.maintain_distance
        } else {
            opp.pos.x + cfg.maintain_distance
        });
    }

    // Basically made it; idle rather than oscillate around the goal.
    if let Some(g) = goal_x {
        if (g - me.pos.x).abs() < cfg.goal_epsilon {
            goal_x = None;
        }
    }

    if let Some(g) = goal_x {
        if g > me.pos.x {
            cv.move_right();
        } else {
            cv.move_left();
        }
    }

    goal_x
}
