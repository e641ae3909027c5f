pub mod character;
pub mod config;
pub mod effects;
pub mod enemies;
pub mod engine;
pub mod features;
pub mod items;
pub mod movement;
pub mod platform;
pub mod section;
pub mod session;

pub use character::{Character, CharacterState};
pub use config::SimConfig;
pub use effects::CharacterEffects;
pub use engine::{Environment, tick};
pub use section::{ActiveSectionRegistry, ActiveWindow, RiseSection, SectionStack};
pub use session::GameSession;
