use serde::{Deserialize, Serialize};

use ascent_core::assets::{AssetHandle, AssetKey, AssetProvider};
use ascent_core::entity::ItemKind;
use ascent_core::geometry::{Circle, Rect, Vec2};

use crate::config::EffectsConfig;
use crate::effects::CharacterEffects;

/// Side of an item's square footprint.
pub const ITEM_SIZE: f32 = 30.0;

/// Placement of an item in the world, as authored or generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub kind: ItemKind,
    /// Bottom-left corner.
    pub position: Vec2,
}

/// A collectible in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    kind: ItemKind,
    position: Vec2,
    existing: bool,
    handle: AssetHandle,
}

impl Item {
    pub fn new(placement: ItemPlacement, assets: &dyn AssetProvider) -> Self {
        Self {
            kind: placement.kind,
            position: placement.position,
            existing: true,
            handle: assets.resolve(AssetKey::Item(placement.kind)),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn handle(&self) -> AssetHandle {
        self.handle
    }

    /// False once picked up.
    pub fn is_existing(&self) -> bool {
        self.existing
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, ITEM_SIZE, ITEM_SIZE)
    }

    /// Round items (coins, shields) test their inscribed circle.
    pub fn collides(&self, character: &Rect) -> bool {
        match self.kind {
            ItemKind::Coin { .. } | ItemKind::Shield => {
                let radius = ITEM_SIZE / 2.0;
                let center = Vec2::new(self.position.x + radius, self.position.y + radius);
                Circle::new(center, radius).overlaps_rect(character)
            },
            ItemKind::ExtraLife | ItemKind::HighJump | ItemKind::FartRefill | ItemKind::Signet => {
                self.bounds().overlaps(character)
            },
        }
    }

    /// Apply the item to `effects`, remove it from the world and return the
    /// score it awarded.
    pub fn collect(&mut self, effects: &mut CharacterEffects, config: &EffectsConfig) -> u32 {
        self.existing = false;
        match self.kind {
            ItemKind::Coin { coin } => {
                let score = coin.score();
                effects.add_score(score);
                score
            },
            ItemKind::Shield => {
                effects.set_shield(config.shield_item_duration);
                0
            },
            ItemKind::ExtraLife => {
                effects.add_life();
                0
            },
            ItemKind::HighJump => {
                effects.set_high_jump(config.high_jump_item_duration);
                0
            },
            ItemKind::FartRefill => {
                effects.set_farts(config.fart_refill_charges);
                0
            },
            ItemKind::Signet => {
                let signets = effects.add_signet();
                let score = config.signet_score_increment * signets;
                effects.add_score(score);
                score
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use ascent_core::assets::HeadlessAssets;
    use ascent_core::entity::CoinKind;

    use super::*;

    fn item(kind: ItemKind) -> Item {
        Item::new(
            ItemPlacement {
                kind,
                position: Vec2::new(100.0, 100.0),
            },
            &HeadlessAssets,
        )
    }

    #[test]
    fn coin_corner_miss_uses_circle() {
        let coin = item(ItemKind::Coin {
            coin: CoinKind::Gold,
        });
        // touches the square's corner but not the inscribed circle
        let corner = Rect::new(127.0, 127.0, 10.0, 10.0);
        assert!(!coin.collides(&corner));
        assert!(item(ItemKind::ExtraLife).collides(&corner));
        assert!(coin.collides(&Rect::new(110.0, 110.0, 10.0, 10.0)));
    }

    #[test]
    fn coins_award_their_value() {
        let mut fx = CharacterEffects::new(3);
        let mut coin = item(ItemKind::Coin {
            coin: CoinKind::Silver,
        });
        assert_eq!(coin.collect(&mut fx, &EffectsConfig::default()), 5000);
        assert_eq!(fx.score(), 5000);
        assert!(!coin.is_existing());
    }

    #[test]
    fn signets_score_grows_with_count() {
        let cfg = EffectsConfig::default();
        let mut fx = CharacterEffects::new(3);
        let first = item(ItemKind::Signet).collect(&mut fx, &cfg);
        let second = item(ItemKind::Signet).collect(&mut fx, &cfg);
        assert_eq!(first, 100);
        assert_eq!(second, 200);
        assert_eq!(fx.score(), 300);
    }

    #[test]
    fn power_ups_set_effects() {
        let cfg = EffectsConfig::default();
        let mut fx = CharacterEffects::new(1);
        item(ItemKind::Shield).collect(&mut fx, &cfg);
        item(ItemKind::HighJump).collect(&mut fx, &cfg);
        item(ItemKind::FartRefill).collect(&mut fx, &cfg);
        item(ItemKind::ExtraLife).collect(&mut fx, &cfg);
        assert_eq!(fx.shield_remaining(), cfg.shield_item_duration);
        assert_eq!(fx.high_jump_remaining(), cfg.high_jump_item_duration);
        assert_eq!(fx.farts(), cfg.fart_refill_charges);
        assert_eq!(fx.lives(), 2);
        assert_eq!(fx.score(), 0);
    }
}
