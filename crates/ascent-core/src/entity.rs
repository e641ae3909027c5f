use serde::{Deserialize, Serialize};

/// Coin metal; decides the score awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinKind {
    Copper,
    Silver,
    Gold,
}

impl CoinKind {
    pub fn score(self) -> u32 {
        match self {
            CoinKind::Copper => 2000,
            CoinKind::Silver => 5000,
            CoinKind::Gold => 12000,
        }
    }
}

/// Collectible item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Coin { coin: CoinKind },
    Shield,
    ExtraLife,
    HighJump,
    FartRefill,
    Signet,
}

/// Hostile entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Saw,
    Bat,
    Knight,
}

impl EnemyKind {
    pub fn is_saw(self) -> bool {
        matches!(self, EnemyKind::Saw)
    }
}
