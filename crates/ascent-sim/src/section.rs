use ascent_core::assets::AssetProvider;
use ascent_core::events::SectionEffect;
use ascent_core::level::{RiseSectionData, VISIBLE_AREA_HEIGHT};

use crate::config::WorldConfig;
use crate::platform::Platform;

/// Vertical span, in world units, in which sections and platforms take part
/// in a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveWindow {
    pub visible_area_position: f32,
    pub padding: f32,
}

impl ActiveWindow {
    pub fn new(visible_area_position: f32, padding: f32) -> Self {
        Self {
            visible_area_position,
            padding,
        }
    }

    pub fn lower(&self) -> f32 {
        self.visible_area_position - self.padding
    }

    pub fn upper(&self) -> f32 {
        self.visible_area_position + VISIBLE_AREA_HEIGHT + self.padding
    }

    pub fn overlaps(&self, bottom: f32, top: f32) -> bool {
        bottom <= self.upper() && top >= self.lower()
    }
}

/// Runtime rise section: platforms placed at the section's world height.
#[derive(Debug, Clone)]
pub struct RiseSection {
    name: String,
    base_y: f32,
    height: f32,
    platforms: Vec<Platform>,
}

impl RiseSection {
    pub fn from_data(
        data: &RiseSectionData,
        base_y: f32,
        world: &WorldConfig,
        assets: &dyn AssetProvider,
    ) -> Self {
        let platforms = data
            .platforms
            .iter()
            .map(|record| Platform::from_record(record, base_y, world, assets))
            .collect();
        Self {
            name: data.name.clone(),
            base_y,
            height: data.height(),
            platforms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn top(&self) -> f32 {
        self.base_y + self.height
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platforms_mut(&mut self) -> &mut [Platform] {
        &mut self.platforms
    }

    pub fn is_in(&self, window: ActiveWindow) -> bool {
        window.overlaps(self.base_y, self.top())
    }

    pub fn apply_effect(&mut self, effect: SectionEffect) {
        for platform in &mut self.platforms {
            platform.apply_effect(effect);
        }
    }
}

/// Source of the sections taking part in a tick.
///
/// The engine reads platforms through it and sends section effects
/// (reposition, visible-on-jump) back through [`broadcast`](Self::broadcast).
/// Iteration order must be stable between calls within a tick.
pub trait ActiveSectionRegistry {
    fn active_sections(&self, window: ActiveWindow) -> impl Iterator<Item = &RiseSection>;

    fn active_sections_mut(
        &mut self,
        window: ActiveWindow,
    ) -> impl Iterator<Item = &mut RiseSection>;

    /// Apply `effect` to every active section.
    fn broadcast(&mut self, window: ActiveWindow, effect: SectionEffect) {
        for section in self.active_sections_mut(window) {
            section.apply_effect(effect);
        }
    }
}

impl ActiveSectionRegistry for Vec<RiseSection> {
    fn active_sections(&self, window: ActiveWindow) -> impl Iterator<Item = &RiseSection> {
        self.iter().filter(move |s| s.is_in(window))
    }

    fn active_sections_mut(
        &mut self,
        window: ActiveWindow,
    ) -> impl Iterator<Item = &mut RiseSection> {
        self.iter_mut().filter(move |s| s.is_in(window))
    }
}

/// Sections stacked bottom to top without gaps.
///
/// Lookups skip straight to the first section reaching the window.
#[derive(Debug, Clone, Default)]
pub struct SectionStack {
    sections: Vec<RiseSection>,
}

impl SectionStack {
    /// Stack `data` in order, each section starting where the previous ended.
    pub fn build(data: &[RiseSectionData], world: &WorldConfig, assets: &dyn AssetProvider) -> Self {
        let mut base_y = 0.0;
        let mut sections = Vec::with_capacity(data.len());
        for section in data {
            let built = RiseSection::from_data(section, base_y, world, assets);
            base_y = built.top();
            sections.push(built);
        }
        Self { sections }
    }

    pub fn sections(&self) -> &[RiseSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Height of the whole stack.
    pub fn total_height(&self) -> f32 {
        self.sections.last().map_or(0.0, RiseSection::top)
    }

    fn first_reaching(&self, window: ActiveWindow) -> usize {
        self.sections.partition_point(|s| s.top() < window.lower())
    }
}

impl ActiveSectionRegistry for SectionStack {
    fn active_sections(&self, window: ActiveWindow) -> impl Iterator<Item = &RiseSection> {
        let start = self.first_reaching(window);
        self.sections[start..]
            .iter()
            .take_while(move |s| s.base_y() <= window.upper())
    }

    fn active_sections_mut(
        &mut self,
        window: ActiveWindow,
    ) -> impl Iterator<Item = &mut RiseSection> {
        let start = self.first_reaching(window);
        self.sections[start..]
            .iter_mut()
            .take_while(move |s| s.base_y() <= window.upper())
    }
}

#[cfg(test)]
mod tests {
    use ascent_core::assets::HeadlessAssets;
    use ascent_core::level::{FeatureRecord, PlatformRecord};

    use super::*;

    fn data(name: &str, step_range: i32) -> RiseSectionData {
        RiseSectionData {
            name: name.to_string(),
            step_range,
            difficulty: 0,
            platforms: vec![PlatformRecord::new(0, 0), PlatformRecord::new(step_range / 2, 4)],
        }
    }

    fn stack() -> SectionStack {
        // 100 steps of 15 units: bases at 0, 1500, 3000
        SectionStack::build(
            &[data("a", 100), data("b", 100), data("c", 100)],
            &WorldConfig::default(),
            &HeadlessAssets,
        )
    }

    fn names<'a>(it: impl Iterator<Item = &'a RiseSection>) -> Vec<&'a str> {
        it.map(RiseSection::name).collect()
    }

    #[test]
    fn sections_stack_at_cumulative_heights() {
        let s = stack();
        let bases: Vec<f32> = s.sections().iter().map(RiseSection::base_y).collect();
        assert_eq!(bases, vec![0.0, 1500.0, 3000.0]);
        assert_eq!(s.total_height(), 4500.0);
        assert_eq!(s.sections()[1].platforms()[0].position().y, 1500.0);
    }

    #[test]
    fn window_selects_overlapping_sections() {
        let s = stack();
        assert_eq!(names(s.active_sections(ActiveWindow::new(0.0, 100.0))), vec!["a"]);
        assert_eq!(
            names(s.active_sections(ActiveWindow::new(1000.0, 100.0))),
            vec!["a", "b"]
        );
        assert_eq!(
            names(s.active_sections(ActiveWindow::new(3800.0, 100.0))),
            vec!["c"]
        );
    }

    #[test]
    fn vec_registry_agrees_with_stack() {
        let s = stack();
        let v: Vec<RiseSection> = s.sections().to_vec();
        for visible in [0.0, 700.0, 1450.0, 2900.0, 4400.0] {
            let window = ActiveWindow::new(visible, 100.0);
            assert_eq!(
                names(v.active_sections(window)),
                names(s.active_sections(window)),
                "visible={visible}"
            );
        }
    }

    #[test]
    fn broadcast_reaches_only_active_sections() {
        let hidden = RiseSectionData {
            name: "hidden".to_string(),
            step_range: 100,
            difficulty: 0,
            platforms: vec![PlatformRecord {
                features: vec![FeatureRecord::VisibleOnJump],
                ..PlatformRecord::new(10, 0)
            }],
        };
        let mut s = SectionStack::build(
            &[hidden.clone(), hidden],
            &WorldConfig::default(),
            &HeadlessAssets,
        );
        let window = ActiveWindow::new(0.0, 100.0);
        s.broadcast(window, SectionEffect::VisibleOnJump);
        assert!(!s.sections()[0].platforms()[0].is_hidden());
        assert!(s.sections()[1].platforms()[0].is_hidden(), "outside the window");
    }
}
