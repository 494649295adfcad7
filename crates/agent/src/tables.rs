//! Static attack data: startup timing and hitboxes per weapon and move.
//!
//! Both tables are fixed for the lifetime of the process. The hitbox buckets
//! are ordered slices because attack selection is first-match-wins: the scan
//! order below is part of the agent's observable behavior.

use glam::Vec2;

use brawl_shared::{MoveKind, WeaponType};

/// Frames between attack initiation and the hit connecting.
///
/// Total over every real (weapon, attack move) pair; `None` for anything
/// outside the tables (e.g. [`MoveKind::None`]).
pub fn startup_frames(weapon: WeaponType, mv: MoveKind) -> Option<u32> {
    use MoveKind::*;
    use WeaponType::*;
    Some(match (weapon, mv) {
        (Unarmed, NeutralLight) => 3,
        (Unarmed, DownLight) => 5,
        (Unarmed, SideLight) => 6,
        (Unarmed, NeutralAir) => 4,
        (Unarmed, DownAir) => 6,
        (Unarmed, SideAir) => 6,
        (Unarmed, NeutralHeavy) => 10,
        (Unarmed, DownHeavy) => 11,
        (Unarmed, SideHeavy) => 11,
        (Unarmed, Recovery) => 6,
        (Unarmed, GroundPound) => 10,

        (Hammer, NeutralLight) => 4,
        (Hammer, DownLight) => 5,
        (Hammer, SideLight) => 7,
        (Hammer, NeutralAir) => 9,
        (Hammer, DownAir) => 6,
        (Hammer, SideAir) => 7,
        (Hammer, NeutralHeavy) => 9,
        (Hammer, DownHeavy) => 16,
        (Hammer, SideHeavy) => 17,
        (Hammer, Recovery) => 7,
        (Hammer, GroundPound) => 13,

        (Spear, NeutralLight) => 4,
        (Spear, DownLight) => 5,
        (Spear, SideLight) => 7,
        (Spear, NeutralAir) => 8,
        (Spear, DownAir) => 6,
        (Spear, SideAir) => 7,
        (Spear, NeutralHeavy) => 11,
        (Spear, DownHeavy) => 19,
        (Spear, SideHeavy) => 16,
        (Spear, Recovery) => 8,
        (Spear, GroundPound) => 9,

        _ => return Option::None,
    })
}

/// Attack hitbox relative to the attacker's origin, before facing mirroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxSpec {
    /// Offset of the box center from the attacker; x flips with facing.
    pub offset: Vec2,
    /// Full extents of the box.
    pub size: Vec2,
}

const fn hb(x_offset: f32, y_offset: f32, width: f32, height: f32) -> HitboxSpec {
    HitboxSpec {
        offset: Vec2::new(x_offset, y_offset),
        size: Vec2::new(width, height),
    }
}

/// Moves tested for an attack opportunity, in scan order, for one
/// (weapon, airborne) bucket.
pub fn attack_moves(weapon: WeaponType, airborne: bool) -> &'static [(MoveKind, HitboxSpec)] {
    use MoveKind::*;
    const UNARMED_AIR: &[(MoveKind, HitboxSpec)] = &[
        (NeutralAir, hb(0.6, 0.0, 0.5, 0.8)),
        (DownAir, hb(1.0, 1.0, 0.5, 0.5)),
    ];
    const UNARMED_GROUND: &[(MoveKind, HitboxSpec)] = &[
        (DownHeavy, hb(0.2, 0.25, 1.7, 0.5)),
        (NeutralLight, hb(0.5, 0.0, 0.5, 0.8)),
    ];
    const SPEAR_AIR: &[(MoveKind, HitboxSpec)] = &[
        (NeutralAir, hb(0.3, 0.0, 1.7, 1.8)),
        (SideAir, hb(1.6, 0.15, 0.4, 0.8)),
    ];
    const SPEAR_GROUND: &[(MoveKind, HitboxSpec)] = &[
        (NeutralHeavy, hb(0.6, -0.8, 2.0, 0.7)),
        (SideLight, hb(1.0, 0.0, 1.3, 0.9)),
    ];
    const HAMMER_AIR: &[(MoveKind, HitboxSpec)] = &[
        (SideAir, hb(1.1, 0.0, 0.7, 0.7)),
        (NeutralAir, hb(0.4, -1.3, 0.9, 0.9)),
    ];
    const HAMMER_GROUND: &[(MoveKind, HitboxSpec)] = &[
        (NeutralHeavy, hb(0.8, -0.6, 0.4, 1.2)),
        (SideLight, hb(1.3, -0.25, 1.2, 1.25)),
    ];
    match (weapon, airborne) {
        (WeaponType::Unarmed, true) => UNARMED_AIR,
        (WeaponType::Unarmed, false) => UNARMED_GROUND,
        (WeaponType::Spear, true) => SPEAR_AIR,
        (WeaponType::Spear, false) => SPEAR_GROUND,
        (WeaponType::Hammer, true) => HAMMER_AIR,
        (WeaponType::Hammer, false) => HAMMER_GROUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_frames_known_entries() {
        assert_eq!(startup_frames(WeaponType::Unarmed, MoveKind::NeutralLight), Some(3));
        assert_eq!(startup_frames(WeaponType::Spear, MoveKind::NeutralLight), Some(4));
        assert_eq!(startup_frames(WeaponType::Spear, MoveKind::DownHeavy), Some(19));
        assert_eq!(startup_frames(WeaponType::Hammer, MoveKind::SideHeavy), Some(17));
    }

    #[test]
    fn test_no_timing_for_non_attacks() {
        assert_eq!(startup_frames(WeaponType::Unarmed, MoveKind::None), None);
        assert_eq!(startup_frames(WeaponType::Hammer, MoveKind::None), None);
    }

    #[test]
    fn test_every_attack_move_is_timed() {
        for weapon in [WeaponType::Unarmed, WeaponType::Spear, WeaponType::Hammer] {
            for code in 2..=12 {
                let mv = MoveKind::from_code(code).unwrap();
                assert!(
                    startup_frames(weapon, mv).is_some(),
                    "{weapon:?} {mv:?} missing from the timing table"
                );
            }
        }
    }

    #[test]
    fn test_bucket_order_is_fixed() {
        // First-match-wins depends on this order; pin it.
        let unarmed_air: Vec<MoveKind> = attack_moves(WeaponType::Unarmed, true)
            .iter()
            .map(|(mv, _)| *mv)
            .collect();
        assert_eq!(unarmed_air, vec![MoveKind::NeutralAir, MoveKind::DownAir]);

        let hammer_air: Vec<MoveKind> = attack_moves(WeaponType::Hammer, true)
            .iter()
            .map(|(mv, _)| *mv)
            .collect();
        assert_eq!(hammer_air, vec![MoveKind::SideAir, MoveKind::NeutralAir]);
    }

    #[test]
    fn test_buckets_are_timed() {
        // Every move a bucket can select has a timing entry.
        for weapon in [WeaponType::Unarmed, WeaponType::Spear, WeaponType::Hammer] {
            for airborne in [true, false] {
                for (mv, hitbox) in attack_moves(weapon, airborne) {
                    assert!(startup_frames(weapon, *mv).is_some());
                    assert!(hitbox.size.x > 0.0 && hitbox.size.y > 0.0);
                }
            }
        }
    }
}
