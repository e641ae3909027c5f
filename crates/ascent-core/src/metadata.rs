use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MetadataError;
use crate::level::MAX_PLATFORM_DISTANCE_STEPS;

pub const NORMAL_PLATFORM_WEIGHT: &str = "normal_platform_weight";
pub const MOVING_PLATFORM_WEIGHT: &str = "moving_platform_weight";
pub const REPOSITION_PLATFORM_WEIGHT: &str = "reposition_platform_weight";
pub const JUMP_BOOST_FRACTION: &str = "jump_boost_fraction";
pub const JUMP_BOOST_LOW_WEIGHT: &str = "jump_boost_low_weight";
pub const JUMP_BOOST_MEDIUM_WEIGHT: &str = "jump_boost_medium_weight";
pub const JUMP_BOOST_HIGH_WEIGHT: &str = "jump_boost_high_weight";
pub const MIN_MOVING_SPEED: &str = "min_moving_speed";
pub const MAX_MOVING_SPEED: &str = "max_moving_speed";
pub const MIN_MOVING_RANGE: &str = "min_moving_range";
pub const MAX_MOVING_RANGE: &str = "max_moving_range";
pub const MIN_REPOSITION_RANGE: &str = "min_reposition_range";
pub const MAX_REPOSITION_RANGE: &str = "max_reposition_range";

/// Generation algorithm selected by a metadata type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Basic,
    JumpBoost,
}

impl SectionType {
    pub const BASIC_TAG: &'static str = "basic";
    pub const JUMP_BOOST_TAG: &'static str = "jumpboost";

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            Self::BASIC_TAG => Some(SectionType::Basic),
            Self::JUMP_BOOST_TAG => Some(SectionType::JumpBoost),
            _ => None,
        }
    }
}

/// Declarative parameters for one rise section.
///
/// Numeric tuning values live in `properties` as string-encoded floats, so
/// new generators can add keys without changing this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub section_type: String,
    pub min_step_range: i32,
    pub max_step_range: i32,
    pub min_step_distance: i32,
    pub max_step_distance: i32,
    #[serde(default)]
    pub difficulty: i32,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl StepMetadata {
    /// Resolve the type tag.
    pub fn section_type(&self) -> Result<SectionType, MetadataError> {
        SectionType::from_tag(&self.section_type).ok_or_else(|| MetadataError::UnknownSectionType {
            section: self.name.clone(),
            section_type: self.section_type.clone(),
        })
    }

    /// Parse a required numeric property.
    pub fn property(&self, key: &str) -> Result<f32, MetadataError> {
        let raw = self
            .properties
            .get(key)
            .ok_or_else(|| MetadataError::MissingProperty {
                section: self.name.clone(),
                key: key.to_string(),
            })?;
        let value: f32 = raw
            .trim()
            .parse()
            .map_err(|_| MetadataError::MalformedProperty {
                section: self.name.clone(),
                key: key.to_string(),
                value: raw.clone(),
            })?;
        if !value.is_finite() {
            return Err(MetadataError::NonFiniteProperty {
                section: self.name.clone(),
                key: key.to_string(),
                value: raw.clone(),
            });
        }
        if value < 0.0 {
            return Err(MetadataError::NegativeProperty {
                section: self.name.clone(),
                key: key.to_string(),
                value,
            });
        }
        Ok(value)
    }

    /// Parse a `[min, max]` pair of properties.
    pub fn property_range(
        &self,
        min_key: &str,
        max_key: &str,
        field: &'static str,
    ) -> Result<(f32, f32), MetadataError> {
        let min = self.property(min_key)?;
        let max = self.property(max_key)?;
        if min > max {
            return Err(MetadataError::InvertedRange {
                section: self.name.clone(),
                field,
                min,
                max,
            });
        }
        Ok((min, max))
    }

    /// Check the step range and step distance bounds shared by every section type.
    pub fn validate_bounds(&self) -> Result<(), MetadataError> {
        if self.min_step_range > self.max_step_range {
            return Err(self.inverted("step range", self.min_step_range, self.max_step_range));
        }
        if self.min_step_range < 1 {
            return Err(MetadataError::StepRangeTooShort {
                section: self.name.clone(),
                min: self.min_step_range,
                required: 0,
            });
        }
        if self.min_step_distance > self.max_step_distance {
            return Err(self.inverted(
                "step distance",
                self.min_step_distance,
                self.max_step_distance,
            ));
        }
        if self.min_step_distance < 1 {
            return Err(MetadataError::ZeroStepDistance {
                section: self.name.clone(),
                min: self.min_step_distance,
            });
        }
        if self.max_step_distance > MAX_PLATFORM_DISTANCE_STEPS {
            return Err(MetadataError::UnreachableStepDistance {
                section: self.name.clone(),
                max: self.max_step_distance,
                limit: MAX_PLATFORM_DISTANCE_STEPS,
            });
        }
        Ok(())
    }

    fn inverted(&self, field: &'static str, min: i32, max: i32) -> MetadataError {
        MetadataError::InvertedRange {
            section: self.name.clone(),
            field,
            min: min as f32,
            max: max as f32,
        }
    }
}
