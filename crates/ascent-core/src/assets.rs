use serde::{Deserialize, Serialize};

use crate::entity::{EnemyKind, ItemKind};
use crate::level::{JumpBoostPower, PlatformKind};

/// Opaque reference to a loaded sprite or sound. Never inspected by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AssetHandle(pub u32);

/// Everything the simulation may ask a presentation layer to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKey {
    Platform(PlatformKind),
    JumpBoost(JumpBoostPower),
    Flame,
    RepositionSwitch,
    VisibleOnJump,
    Item(ItemKind),
    Enemy(EnemyKind),
}

/// Resolves kind tags to presentation handles.
///
/// Runtime objects keep the handle and hand it back to the renderer; the
/// core never looks inside.
pub trait AssetProvider {
    fn resolve(&self, key: AssetKey) -> AssetHandle;
}

/// Provider that hands out the default handle for every key. Used by headless
/// runs and tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessAssets;

impl AssetProvider for HeadlessAssets {
    fn resolve(&self, _key: AssetKey) -> AssetHandle {
        AssetHandle::default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn keys_can_index_an_asset_table() {
        let mut table = HashMap::new();
        table.insert(AssetKey::Platform(PlatformKind::Flame), AssetHandle(7));
        table.insert(AssetKey::JumpBoost(JumpBoostPower::Low), AssetHandle(8));
        assert_eq!(
            table.get(&AssetKey::Platform(PlatformKind::Flame)),
            Some(&AssetHandle(7))
        );
        assert_eq!(table.get(&AssetKey::Platform(PlatformKind::Normal)), None);
    }
}
