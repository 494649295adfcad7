use std::path::{Path, PathBuf};

use brawl_shared::{ControlVector, ObservationSource, WeaponType};

use crate::config::AgentConfig;
use crate::dodge::DodgeSchedule;
use crate::policy::{Policy, PolicyError};
use crate::snapshot::FrameSnapshot;
use crate::{attack, planner, recovery};

/// Deterministic rule-based fighter.
///
/// Holds the only mutable state the rules need across ticks: the elapsed
/// tick counter and the dodge scheduler's slot and opponent-state history.
/// Everything else is re-derived from the observation every tick. Instances
/// are independent; nothing is shared between agents.
pub struct RuleBasedAgent {
    config: AgentConfig,
    model_path: Option<PathBuf>,
    tick: u64,
    dodge: DodgeSchedule,
}

impl RuleBasedAgent {
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    pub fn with_config(config: AgentConfig) -> Self {
        Self {
            config,
            model_path: None,
            tick: 0,
            dodge: DodgeSchedule::new(),
        }
    }

    /// Keep the model-file path loaders expect, without loading anything:
    /// the rule-based path shares the construction contract of the learned
    /// policies but never reads the file.
    pub fn with_model(model_path: Option<PathBuf>) -> Self {
        Self {
            model_path,
            ..Self::new()
        }
    }

    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Ticks seen so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

impl Default for RuleBasedAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RuleBasedAgent {
    fn name(&self) -> &str {
        "rule_based"
    }

    // Decisions run from low priority to high: later stages overwrite the
    // intents of earlier ones.
    fn act(&mut self, obs: &dyn ObservationSource) -> Result<ControlVector, PolicyError> {
        self.tick += 1;
        let mut cv = ControlVector::none();
        let snap = FrameSnapshot::read(obs)?;

        let goal_x = planner::plan_goal(&snap, &self.config, &mut cv);
        attack::choose_attack(&snap, &self.config, self.tick, &mut cv)?;
        recovery::apply(&snap, &self.config, goal_x, self.tick, &mut cv);
        self.dodge.update(&snap, &self.config, self.tick, &mut cv)?;

        // Never voluntarily drop a held weapon.
        if snap.me.weapon != WeaponType::Unarmed {
            cv.set_pickup(false);
        }

        self.dodge.remember(snap.opponent.state);
        Ok(cv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_shared::MapObservation;
    use std::path::PathBuf;

    fn obs(me_x: f32, me_weapon: i32) -> MapObservation {
        let mut o = MapObservation::new();
        o.set("player_pos", [me_x, 0.0]);
        o.set("player_vel", [0.0, 0.0]);
        o.set("player_aerial", [0.0]);
        o.set("player_jumps_left", [3.0]);
        o.set("player_weapon_type", [me_weapon as f32]);
        o.set("player_state", [0.0]);
        o.set("player_facing", [1.0]);
        o.set("opponent_pos", [5.0, 0.0]);
        o.set("opponent_vel", [0.0, 0.0]);
        o.set("opponent_state", [0.0]);
        o.set("opponent_move_type", [1.0]);
        o.set("opponent_weapon_type", [0.0]);
        o.set("player_moving_platform_pos", [0.0, 5.0]);
        o.set("player_moving_platform_vel", [0.0, 0.0]);
        for i in 1..=4 {
            o.set(&format!("player_spawner_{i}"), [0.0, 0.0, 0.0]);
        }
        o
    }

    #[test]
    fn test_tick_counts_up() {
        let mut agent = RuleBasedAgent::new();
        let frame = obs(0.0, 1);
        agent.act(&frame).unwrap();
        agent.act(&frame).unwrap();
        assert_eq!(agent.tick(), 2);
    }

    #[test]
    fn test_armed_never_presses_pickup() {
        // Park the agent on top of a stocked spawner while armed: the
        // retention guard must win over everything else.
        let mut agent = RuleBasedAgent::new();
        for tick in 0..32 {
            let mut frame = obs(-3.0 + 0.2 * tick as f32, 2);
            frame.set("player_spawner_1", [-3.0 + 0.2 * tick as f32, 0.0, 1.0]);
            let cv = agent.act(&frame).unwrap();
            assert!(!cv.pickup, "armed agent pressed pickup at tick {tick}");
        }
    }

    #[test]
    fn test_unarmed_picks_up() {
        let mut agent = RuleBasedAgent::new();
        let mut frame = obs(4.8, 0);
        frame.set("player_spawner_1", [4.9, 0.0, 1.0]);
        let cv = agent.act(&frame).unwrap();
        assert!(cv.pickup);
    }

    #[test]
    fn test_model_path_pass_through() {
        let agent = RuleBasedAgent::with_model(Some(PathBuf::from("models/fighter.onnx")));
        assert_eq!(
            agent.model_path(),
            Some(Path::new("models/fighter.onnx"))
        );
        assert!(RuleBasedAgent::new().model_path().is_none());
    }
}
