use ascent_core::assets::AssetProvider;
use ascent_core::events::SimEvent;
use ascent_core::geometry::Vec2;
use ascent_core::level::{RiseSectionData, WORLD_WIDTH};

use crate::character::{CENTER_X_OFFSET, Character, CharacterState};
use crate::config::SimConfig;
use crate::effects::CharacterEffects;
use crate::enemies::{Enemy, EnemyPlacement};
use crate::engine::{Environment, tick};
use crate::items::{Item, ItemPlacement};
use crate::section::SectionStack;

/// One run through a stack of rise sections.
///
/// Owns the runtime sections, enemies, items, the character and its
/// effects. The layout it was built from is kept so the run can restart.
pub struct GameSession<A> {
    config: SimConfig,
    assets: A,
    layout: Vec<RiseSectionData>,
    enemy_placements: Vec<EnemyPlacement>,
    item_placements: Vec<ItemPlacement>,
    env: Environment<SectionStack>,
    character: Character,
    effects: CharacterEffects,
}

impl<A: AssetProvider> GameSession<A> {
    pub fn new(config: SimConfig, layout: Vec<RiseSectionData>, assets: A) -> Self {
        let env = build_environment(&config, &layout, &[], &[], &assets);
        let effects = CharacterEffects::new(config.effects.starting_lives);
        tracing::info!(
            sections = layout.len(),
            rise_height = env.rise_height,
            "Game session created"
        );
        Self {
            config,
            assets,
            layout,
            enemy_placements: Vec::new(),
            item_placements: Vec::new(),
            env,
            character: spawn(),
            effects,
        }
    }

    /// Place enemies and items. Replaces any previous placements.
    pub fn with_entities(mut self, enemies: Vec<EnemyPlacement>, items: Vec<ItemPlacement>) -> Self {
        self.enemy_placements = enemies;
        self.item_placements = items;
        self.env.enemies = self
            .enemy_placements
            .iter()
            .map(|p| Enemy::new(*p, &self.assets))
            .collect();
        self.env.items = self
            .item_placements
            .iter()
            .map(|p| Item::new(*p, &self.assets))
            .collect();
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn effects(&self) -> &CharacterEffects {
        &self.effects
    }

    pub fn sections(&self) -> &SectionStack {
        &self.env.sections
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.env.enemies
    }

    pub fn items(&self) -> &[Item] {
        &self.env.items
    }

    pub fn rise_height(&self) -> f32 {
        self.env.rise_height
    }

    /// True once the character reached the top or started dying.
    pub fn is_over(&self) -> bool {
        self.character.state == CharacterState::End || self.character.state.is_dying()
    }

    /// Advance the run by `delta` seconds.
    pub fn update(
        &mut self,
        horizontal_speed: f32,
        visible_area_position: f32,
        delta: f32,
    ) -> Vec<SimEvent> {
        self.env.horizontal_speed = horizontal_speed;
        self.env.visible_area_position = visible_area_position;

        let before = self.character.state;
        let events = tick(
            &mut self.character,
            &mut self.effects,
            &mut self.env,
            &self.config,
            delta,
        );
        if self.character.state != before {
            tracing::debug!(
                from = ?before,
                to = ?self.character.state,
                y = self.character.position.y,
                "Character state changed"
            );
        }
        events
    }

    /// Enter farting mode. Fails when not playing, without charges or when
    /// already farting.
    pub fn request_fart(&mut self) -> bool {
        self.character.state == CharacterState::Normal && self.effects.start_farting()
    }

    /// Reset the character, effects and world to the start of the run.
    pub fn restart(&mut self) {
        self.env = build_environment(
            &self.config,
            &self.layout,
            &self.enemy_placements,
            &self.item_placements,
            &self.assets,
        );
        self.character = spawn();
        self.effects = CharacterEffects::new(self.config.effects.starting_lives);
        tracing::info!("Game session restarted");
    }
}

fn spawn() -> Character {
    Character::new(Vec2::new(WORLD_WIDTH / 2.0 - CENTER_X_OFFSET, 0.0))
}

fn build_environment(
    config: &SimConfig,
    layout: &[RiseSectionData],
    enemies: &[EnemyPlacement],
    items: &[ItemPlacement],
    assets: &dyn AssetProvider,
) -> Environment<SectionStack> {
    let sections = SectionStack::build(layout, &config.world, assets);
    let rise_height = sections.total_height();
    let mut env = Environment::new(sections, rise_height);
    env.enemies = enemies.iter().map(|p| Enemy::new(*p, assets)).collect();
    env.items = items.iter().map(|p| Item::new(*p, assets)).collect();
    env
}

#[cfg(test)]
mod tests {
    use ascent_core::assets::HeadlessAssets;
    use ascent_core::entity::{CoinKind, ItemKind};
    use ascent_core::level::PlatformRecord;

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn layout() -> Vec<RiseSectionData> {
        vec![RiseSectionData {
            name: "floor".to_string(),
            step_range: 40,
            difficulty: 0,
            platforms: vec![PlatformRecord::new(0, 9)],
        }]
    }

    #[test]
    fn first_tick_launches_from_the_ground() {
        let mut session = GameSession::new(SimConfig::default(), layout(), HeadlessAssets);
        assert_eq!(session.rise_height(), 600.0);
        let events = session.update(0.0, 0.0, DT);
        assert_eq!(
            events.first(),
            Some(&SimEvent::Jump {
                speed: SimConfig::default().physics.jump_speed
            })
        );
        assert!(session.character().speed.y > 0.0);
    }

    #[test]
    fn fart_request_needs_charges() {
        let mut session = GameSession::new(SimConfig::default(), layout(), HeadlessAssets);
        assert!(!session.request_fart());
    }

    #[test]
    fn restart_restores_items_and_effects() {
        let coin = ItemPlacement {
            kind: ItemKind::Coin {
                coin: CoinKind::Gold,
            },
            position: Vec2::new(220.0, 20.0),
        };
        let mut session = GameSession::new(SimConfig::default(), layout(), HeadlessAssets)
            .with_entities(Vec::new(), vec![coin]);
        let events = session.update(0.0, 0.0, DT);
        assert!(events.iter().any(|e| matches!(e, SimEvent::ItemCollected { score: 12000, .. })));
        assert_eq!(session.effects().score(), 12000);

        session.restart();
        assert_eq!(session.effects().score(), 0);
        assert!(session.items()[0].is_existing());
        assert_eq!(session.character().position.y, 0.0);
    }
}
