use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ascent_core::level::RiseSectionData;
use ascent_core::metadata::StepMetadata;
use ascent_core::random::RandomSource;

use crate::error::{CatalogError, GenerationError};
use crate::rise_section::generate_section;

/// Environment variable overriding the catalog location.
pub const CATALOG_PATH_ENV: &str = "ASCENT_SECTIONS";
pub const DEFAULT_CATALOG_PATH: &str = "config/sections.toml";

/// Named section metadata, loaded from TOML `[[sections]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionCatalog {
    #[serde(default)]
    pub sections: Vec<StepMetadata>,
}

impl SectionCatalog {
    /// Load the catalog from `$ASCENT_SECTIONS` or `config/sections.toml`.
    ///
    /// Unlike the simulation config there is no silent fallback: a broken
    /// catalog would generate unplayable sections.
    pub fn load() -> Result<Self, CatalogError> {
        let path = std::env::var(CATALOG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content, path)?;
        tracing::info!(
            path = %path.display(),
            sections = catalog.sections.len(),
            "loaded section catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate catalog text. `origin` only labels errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, CatalogError> {
        let catalog: SectionCatalog =
            toml::from_str(content).map_err(|source| CatalogError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;

        for section in &catalog.sections {
            section
                .section_type()
                .and_then(|_| section.validate_bounds())
                .map_err(|source| CatalogError::Invalid {
                    path: origin.to_path_buf(),
                    source,
                })?;
        }
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Result<&StepMetadata, CatalogError> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CatalogError::UnknownSection(name.to_string()))
    }

    /// Sections whose difficulty lies in `[min, max]`, in catalog order.
    pub fn by_difficulty(&self, min: i32, max: i32) -> impl Iterator<Item = &StepMetadata> {
        self.sections
            .iter()
            .filter(move |s| (min..=max).contains(&s.difficulty))
    }

    /// Generate one section per catalog entry, bottom to top.
    pub fn generate_all<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<RiseSectionData>, GenerationError> {
        self.sections
            .iter()
            .map(|metadata| generate_section(metadata, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ascent_core::test_helpers::seeded_rng;

    use super::*;

    const CATALOG: &str = r#"
        [[sections]]
        name = "intro"
        type = "basic"
        difficulty = 0
        min_step_range = 60
        max_step_range = 80
        min_step_distance = 3
        max_step_distance = 6

        [sections.properties]
        normal_platform_weight = "1"
        moving_platform_weight = "0"
        reposition_platform_weight = "0"
        jump_boost_fraction = "0.1"
        jump_boost_low_weight = "1"
        jump_boost_medium_weight = "0"
        jump_boost_high_weight = "0"
        min_moving_speed = "0"
        max_moving_speed = "0"
        min_moving_range = "0"
        max_moving_range = "0"
        min_reposition_range = "0"
        max_reposition_range = "0"

        [[sections]]
        name = "springs"
        type = "jumpboost"
        difficulty = 2
        min_step_range = 90
        max_step_range = 120
        min_step_distance = 6
        max_step_distance = 10

        [sections.properties]
        jump_boost_low_weight = "2"
        jump_boost_medium_weight = "1"
        jump_boost_high_weight = "1"
    "#;

    #[test]
    fn parses_and_generates_every_section() {
        let catalog = SectionCatalog::parse(CATALOG, Path::new("inline")).expect("valid catalog");
        assert_eq!(catalog.sections.len(), 2);
        assert_eq!(catalog.get("springs").expect("present").difficulty, 2);
        assert_eq!(catalog.by_difficulty(1, 5).count(), 1);

        let sections = catalog
            .generate_all(&mut seeded_rng(17))
            .expect("all sections generate");
        assert_eq!(sections[0].name, "intro");
        assert_eq!(sections[1].name, "springs");
    }

    #[test]
    fn unknown_section_lookup() {
        let catalog = SectionCatalog::default();
        assert!(matches!(
            catalog.get("nope"),
            Err(CatalogError::UnknownSection(name)) if name == "nope"
        ));
    }

    #[test]
    fn invalid_type_fails_at_load() {
        let broken = CATALOG.replace("\"jumpboost\"", "\"bouncy\"");
        let err = SectionCatalog::parse(&broken, Path::new("inline")).expect_err("must fail");
        assert!(err.to_string().contains("bouncy"), "error: {err}");
    }

    #[test]
    fn malformed_toml_fails_at_load() {
        let err = SectionCatalog::parse("[[sections]\nname = 1", Path::new("bad.toml"))
            .expect_err("must fail");
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SectionCatalog::load_from(Path::new("/definitely/not/here.toml"))
            .expect_err("must fail");
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
