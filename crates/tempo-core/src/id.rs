//! Identifier types for time-scale requests
//!
//! Request identifiers are plain strings agreed out-of-band between
//! subsystems. The [`well_known`] registry collects the conventional ids and
//! their priority bands so independent systems do not collide.

use std::fmt;

/// Handle for an active time-scale request
///
/// Unique among currently active requests; used to remove a request from any
/// stack position later.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        RequestId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        RequestId(id.to_owned())
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        RequestId(id)
    }
}

impl PartialEq<str> for RequestId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RequestId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Req({})", self.0)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Conventional request ids and priority bands
///
/// The arbiter only requires that priorities be totally ordered integers;
/// this registry is the configuration convention callers are expected to
/// share. Bands, highest to lowest: system > UI/menu > cinematic > combat
/// reactions > abilities > cosmetic effects.
pub mod well_known {
    use crate::request::Priority;

    /// System-level freezes (pause menu, scene loading)
    pub const BAND_SYSTEM: Priority = Priority(100);
    /// Menus and full-screen UI
    pub const BAND_UI: Priority = Priority(80);
    /// Cutscenes, dialogue, tutorials
    pub const BAND_CINEMATIC: Priority = Priority(50);
    /// Combat reactions (hit-stop, parry, counter, finisher)
    pub const BAND_COMBAT: Priority = Priority(30);
    /// Player skills, boss phases, ultimates
    pub const BAND_ABILITY: Priority = Priority(20);
    /// Cosmetic slow-motion effects
    pub const BAND_EFFECT: Priority = Priority(10);

    // System
    pub const PAUSE: &str = "Pause";
    pub const LOADING: &str = "Loading";

    // UI / menus
    pub const MENU: &str = "Menu";
    pub const INVENTORY: &str = "Inventory";
    pub const SETTINGS: &str = "Settings";

    // Cinematics
    pub const CUTSCENE: &str = "Cutscene";
    pub const DIALOGUE: &str = "Dialogue";
    pub const TUTORIAL: &str = "Tutorial";

    // Combat reactions
    pub const HIT_STOP: &str = "HitStop";
    pub const PARRY: &str = "Parry";
    pub const COUNTER: &str = "Counter";
    pub const FINISHER: &str = "Finisher";

    // Abilities
    pub const PLAYER_SKILL: &str = "PlayerSkill";
    pub const BOSS_PHASE: &str = "BossPhase";
    pub const ULTIMATE: &str = "Ultimate";

    // Cosmetic effects
    pub const SLOW_MOTION: &str = "SlowMotion";
    pub const BULLET_TIME: &str = "BulletTime";
    pub const TIME_WARP: &str = "TimeWarp";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_equality() {
        let a = RequestId::from("Pause");
        let b = RequestId::new("Pause".to_owned());

        assert_eq!(a, b);
        assert_eq!(a, "Pause");
        assert_ne!(a, RequestId::from("Menu"));
    }

    #[test]
    fn test_empty_id_detected() {
        assert!(RequestId::from("").is_empty());
        assert!(!RequestId::from(well_known::PAUSE).is_empty());
    }

    #[test]
    fn test_band_ordering() {
        use well_known::*;

        // The convention only works if the bands are strictly ordered
        assert!(BAND_SYSTEM > BAND_UI);
        assert!(BAND_UI > BAND_CINEMATIC);
        assert!(BAND_CINEMATIC > BAND_COMBAT);
        assert!(BAND_COMBAT > BAND_ABILITY);
        assert!(BAND_ABILITY > BAND_EFFECT);
    }
}
