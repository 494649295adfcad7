use glam::Vec2;

use brawl_shared::{MoveKind, ObservationSource, WeaponType, SPAWNER_COUNT};

use crate::policy::PolicyError;

/// Own fighter state for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FighterView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub airborne: bool,
    pub jumps_left: u32,
    pub weapon: WeaponType,
    pub state: i32,
    pub facing_right: bool,
}

/// Opponent state for one frame.
#[derive(Debug, Clone, Copy)]
pub struct OpponentView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub state: i32,
    pub move_kind: MoveKind,
    pub weapon: WeaponType,
}

/// Moving platform state.
#[derive(Debug, Clone, Copy)]
pub struct PlatformView {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// One item spawner: where it is and whether a weapon is waiting on it.
#[derive(Debug, Clone, Copy)]
pub struct SpawnerView {
    pub pos: Vec2,
    pub stocked: bool,
}

/// Structured view of everything the rules read, pulled from the keyed
/// accessor once per tick.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub me: FighterView,
    pub opponent: OpponentView,
    pub platform: PlatformView,
    pub spawners: Vec<SpawnerView>,
}

impl FrameSnapshot {
    pub fn read(obs: &dyn ObservationSource) -> Result<Self, PolicyError> {
        let me = FighterView {
            pos: obs.pair("player_pos")?,
            vel: obs.pair("player_vel")?,
            airborne: obs.flag("player_aerial")?,
            jumps_left: obs.scalar("player_jumps_left")? as u32,
            weapon: WeaponType::from_code(obs.code("player_weapon_type")?)?,
            state: obs.code("player_state")?,
            facing_right: obs.flag("player_facing")?,
        };

        let opponent = OpponentView {
            pos: obs.pair("opponent_pos")?,
            vel: obs.pair("opponent_vel")?,
            state: obs.code("opponent_state")?,
            move_kind: MoveKind::from_code(obs.code("opponent_move_type")?)?,
            weapon: WeaponType::from_code(obs.code("opponent_weapon_type")?)?,
        };

        let platform = PlatformView {
            pos: obs.pair("player_moving_platform_pos")?,
            vel: obs.pair("player_moving_platform_vel")?,
        };

        let mut spawners = Vec::with_capacity(SPAWNER_COUNT);
        for i in 0..SPAWNER_COUNT {
            let key = format!("player_spawner_{}", i + 1);
            let s = obs.section(&key)?;
            if s.len() < 3 {
                return Err(brawl_shared::ObservationError::TooFewValues {
                    key,
                    expected: 3,
                    got: s.len(),
                }
                .into());
            }
            spawners.push(SpawnerView {
                pos: Vec2::new(s[0], s[1]),
                stocked: s[2] != 0.0,
            });
        }

        Ok(Self {
            me,
            opponent,
            platform,
            spawners,
        })
    }
}
