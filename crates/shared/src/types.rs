use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::CONTROL_SIZE;

/// Decode failure for a raw enum code coming out of the observation layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    #[error("unknown weapon code: {0}")]
    UnknownWeapon(i32),
    #[error("unknown move code: {0}")]
    UnknownMove(i32),
}

/// Weapon currently held. Selects which timing/hitbox tables apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponType {
    Unarmed,
    Spear,
    Hammer,
}

impl WeaponType {
    pub fn from_code(code: i32) -> Result<Self, CodeError> {
        match code {
            0 => Ok(WeaponType::Unarmed),
            1 => Ok(WeaponType::Spear),
            2 => Ok(WeaponType::Hammer),
            other => Err(CodeError::UnknownWeapon(other)),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            WeaponType::Unarmed => 0,
            WeaponType::Spear => 1,
            WeaponType::Hammer => 2,
        }
    }
}

/// Categorized attack action. Direction and weight class are fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Not attacking.
    None,
    /// Grounded light neutral.
    NeutralLight,
    /// Grounded light down.
    DownLight,
    /// Grounded light side.
    SideLight,
    /// Grounded heavy neutral.
    NeutralHeavy,
    /// Grounded heavy down.
    DownHeavy,
    /// Grounded heavy side.
    SideHeavy,
    /// Aerial light neutral.
    NeutralAir,
    /// Aerial light down.
    DownAir,
    /// Aerial light side.
    SideAir,
    /// Aerial heavy neutral/side recovery.
    Recovery,
    /// Aerial heavy down.
    GroundPound,
}

impl MoveKind {
    pub fn from_code(code: i32) -> Result<Self, CodeError> {
        match code {
            1 => Ok(MoveKind::None),
            2 => Ok(MoveKind::NeutralLight),
            3 => Ok(MoveKind::DownLight),
            4 => Ok(MoveKind::SideLight),
            5 => Ok(MoveKind::NeutralHeavy),
            6 => Ok(MoveKind::DownHeavy),
            7 => Ok(MoveKind::SideHeavy),
            8 => Ok(MoveKind::NeutralAir),
            9 => Ok(MoveKind::DownAir),
            10 => Ok(MoveKind::SideAir),
            11 => Ok(MoveKind::Recovery),
            12 => Ok(MoveKind::GroundPound),
            other => Err(CodeError::UnknownMove(other)),
        }
    }

    pub fn is_up(self) -> bool {
        matches!(
            self,
            MoveKind::NeutralLight | MoveKind::NeutralHeavy | MoveKind::NeutralAir | MoveKind::Recovery
        )
    }

    pub fn is_down(self) -> bool {
        matches!(
            self,
            MoveKind::DownLight | MoveKind::DownHeavy | MoveKind::DownAir | MoveKind::GroundPound
        )
    }

    pub fn is_side(self) -> bool {
        matches!(
            self,
            MoveKind::SideLight | MoveKind::SideHeavy | MoveKind::SideAir
        )
    }

    pub fn is_light(self) -> bool {
        matches!(
            self,
            MoveKind::NeutralLight
                | MoveKind::DownLight
                | MoveKind::SideLight
                | MoveKind::NeutralAir
                | MoveKind::DownAir
                | MoveKind::SideAir
        )
    }

    pub fn is_heavy(self) -> bool {
        matches!(
            self,
            MoveKind::NeutralHeavy
                | MoveKind::DownHeavy
                | MoveKind::SideHeavy
                | MoveKind::Recovery
                | MoveKind::GroundPound
        )
    }
}

/// One tick's worth of button intents.
///
/// Raw layout (fixed positions, one byte each, 0 or 1):
/// `[up, left, down, right, jump, pickup/drop, dodge, light, heavy, emote]`.
///
/// The setters keep the pairs that cannot be pressed together mutually
/// exclusive: left/right, up/down, light/heavy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlVector {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    pub jump: bool,
    pub pickup: bool,
    pub dodge: bool,
    pub light: bool,
    pub heavy: bool,
    pub emote: bool,
}

impl ControlVector {
    /// All intents released.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn move_left(&mut self) {
        self.left = true;
        self.right = false;
    }

    pub fn move_right(&mut self) {
        self.left = false;
        self.right = true;
    }

    pub fn stop_horizontal(&mut self) {
        self.left = false;
        self.right = false;
    }

    pub fn stop_vertical(&mut self) {
        self.up = false;
        self.down = false;
    }

    pub fn hold_up(&mut self) {
        self.up = true;
        self.down = false;
    }

    pub fn hold_down(&mut self) {
        self.up = false;
        self.down = true;
    }

    pub fn set_jump(&mut self, jump: bool) {
        self.jump = jump;
    }

    pub fn set_dodge(&mut self, dodge: bool) {
        self.dodge = dodge;
    }

    pub fn set_pickup(&mut self, pickup: bool) {
        self.pickup = pickup;
    }

    pub fn press_light(&mut self) {
        self.light = true;
        self.heavy = false;
    }

    pub fn press_heavy(&mut self) {
        self.heavy = true;
        self.light = false;
    }

    pub fn stop_attacking(&mut self) {
        self.light = false;
        self.heavy = false;
    }

    pub fn to_raw(&self) -> [u8; CONTROL_SIZE] {
        [
            self.up as u8,
            self.left as u8,
            self.down as u8,
            self.right as u8,
            self.jump as u8,
            self.pickup as u8,
            self.dodge as u8,
            self.light as u8,
            self.heavy as u8,
            self.emote as u8,
        ]
    }

    pub fn from_raw(raw: [u8; CONTROL_SIZE]) -> Self {
        Self {
            up: raw[0] != 0,
            left: raw[1] != 0,
            down: raw[2] != 0,
            right: raw[3] != 0,
            jump: raw[4] != 0,
            pickup: raw[5] != 0,
            dodge: raw[6] != 0,
            light: raw[7] != 0,
            heavy: raw[8] != 0,
            emote: raw[9] != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_exclusive() {
        let mut cv = ControlVector::none();
        cv.move_left();
        cv.move_right();
        assert!(!cv.left);
        assert!(cv.right);
        cv.move_left();
        assert!(cv.left);
        assert!(!cv.right);
    }

    #[test]
    fn test_vertical_exclusive() {
        let mut cv = ControlVector::none();
        cv.hold_up();
        cv.hold_down();
        assert!(!cv.up);
        assert!(cv.down);
    }

    #[test]
    fn test_attack_exclusive() {
        let mut cv = ControlVector::none();
        cv.press_light();
        cv.press_heavy();
        assert!(!cv.light);
        assert!(cv.heavy);
        cv.press_light();
        assert!(cv.light);
        assert!(!cv.heavy);
    }

    #[test]
    fn test_raw_layout() {
        let mut cv = ControlVector::none();
        cv.hold_up();
        cv.move_right();
        cv.set_jump(true);
        cv.press_heavy();
        assert_eq!(cv.to_raw(), [1, 0, 0, 1, 1, 0, 0, 0, 1, 0]);
        assert_eq!(ControlVector::from_raw(cv.to_raw()), cv);
    }

    #[test]
    fn test_weapon_codes() {
        assert_eq!(WeaponType::from_code(1), Ok(WeaponType::Spear));
        assert_eq!(WeaponType::from_code(7), Err(CodeError::UnknownWeapon(7)));
        for code in 0..3 {
            assert_eq!(WeaponType::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_move_codes_and_classes() {
        assert_eq!(MoveKind::from_code(2), Ok(MoveKind::NeutralLight));
        assert_eq!(MoveKind::from_code(0), Err(CodeError::UnknownMove(0)));
        assert_eq!(MoveKind::from_code(13), Err(CodeError::UnknownMove(13)));

        // Every attack move has exactly one direction class and one weight class.
        for code in 2..=12 {
            let mv = MoveKind::from_code(code).unwrap();
            let dirs = mv.is_up() as u8 + mv.is_down() as u8 + mv.is_side() as u8;
            assert_eq!(dirs, 1, "{mv:?} should have one direction class");
            assert!(mv.is_light() ^ mv.is_heavy(), "{mv:?} weight class");
        }
        assert!(MoveKind::Recovery.is_up() && MoveKind::Recovery.is_heavy());
        assert!(MoveKind::GroundPound.is_down() && MoveKind::GroundPound.is_heavy());
    }
}
