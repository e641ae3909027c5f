use serde::{Deserialize, Serialize};

use crate::entity::{EnemyKind, ItemKind};
use crate::level::JumpBoostPower;

/// What hurt or killed the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Hazard {
    /// Dropped below the visible window.
    Fall,
    /// Landed on a burning platform.
    Fire,
    Enemy { kind: EnemyKind },
}

/// Effect broadcast to every active rise section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionEffect {
    RepositionPlatforms,
    VisibleOnJump,
}

/// Semantic events produced by one simulation tick, in the order they happened.
///
/// Presentation and audio layers react to these; the simulation never calls
/// into them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    Jump { speed: f32 },
    JumpBoost { power: JumpBoostPower, speed: f32 },
    LifeLost { hazard: Hazard, lives_left: u32 },
    ItemCollected { item: ItemKind, score: u32 },
    FartDischarged { charges_left: u32 },
    SectionEffect { effect: SectionEffect },
    Died { hazard: Hazard },
    SectionComplete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let event = SimEvent::Died {
            hazard: Hazard::Enemy {
                kind: EnemyKind::Saw,
            },
        };
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["event"], "died");
        assert_eq!(json["hazard"]["type"], "enemy");
        assert_eq!(json["hazard"]["kind"], "saw");
    }

    #[test]
    fn unit_event_roundtrip() {
        let json = serde_json::to_string(&SimEvent::SectionComplete).expect("serialize");
        assert_eq!(json, r#"{"event":"section_complete"}"#);
        let back: SimEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, SimEvent::SectionComplete);
    }
}
