use brawl_shared::{ControlVector, STATE_ATTACKING};

use crate::config::AgentConfig;
use crate::policy::PolicyError;
use crate::snapshot::FrameSnapshot;
use crate::tables::startup_frames;

/// Single-slot dodge scheduler.
///
/// Watches the opponent's combat-state code for the transition into the
/// attacking state and schedules a dodge a couple of ticks before the attack
/// is predicted to connect. A second onset before the pending dodge fires
/// replaces it; there is no queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct DodgeSchedule {
    /// Absolute tick at which the pending dodge fires.
    pending: Option<u64>,
    /// Opponent combat-state code seen on the previous tick.
    last_opp_state: Option<i32>,
}

impl DodgeSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run onset detection and, on the scheduled tick, the dodge itself.
    ///
    /// A fired dodge overrides everything decided earlier in the tick:
    /// horizontal movement and attacks are cleared before pressing dodge.
    pub fn update(
        &mut self,
        snap: &FrameSnapshot,
        cfg: &AgentConfig,
        tick: u64,
        cv: &mut ControlVector,
    ) -> Result<(), PolicyError> {
        let opp = &snap.opponent;

        if opp.state == STATE_ATTACKING && self.last_opp_state != Some(STATE_ATTACKING) {
            let delay = startup_frames(opp.weapon, opp.move_kind).ok_or(PolicyError::MissingTiming {
                weapon: opp.weapon,
                move_kind: opp.move_kind,
            })?;
            // Dodge slightly before the predicted connect frame.
            self.pending = Some((tick + delay as u64).saturating_sub(cfg.dodge_lead_ticks));
        }

        if let Some(fire_tick) = self.pending {
            if tick >= fire_tick {
                if tick == fire_tick && snap.me.pos.distance(opp.pos) < cfg.dodge_range {
                    cv.stop_horizontal();
                    cv.stop_attacking();
                    cv.set_dodge(true);
                }
                self.pending = None;
            }
        }

        Ok(())
    }

    /// Persist this tick's opponent state for the next tick's edge detection.
    pub fn remember(&mut self, opp_state: i32) {
        self.last_opp_state = Some(opp_state);
    }

    /// Tick the pending dodge is scheduled for, if any.
    pub fn pending(&self) -> Option<u64> {
        self.pending
    }
}
