use ascent_core::events::{Hazard, SectionEffect, SimEvent};
use ascent_core::geometry::{Vec2, positive_modulus};
use ascent_core::level::{VISIBLE_AREA_HEIGHT, WORLD_WIDTH};

use crate::character::{CENTER_X_OFFSET, Character, CharacterState, FALL_RECOVERY_EPSILON};
use crate::config::{PhysicsConfig, SimConfig};
use crate::effects::CharacterEffects;
use crate::enemies::Enemy;
use crate::features::ContactEffect;
use crate::items::Item;
use crate::section::{ActiveSectionRegistry, ActiveWindow};

/// Everything around the character that a tick reads or changes.
#[derive(Debug, Clone)]
pub struct Environment<R> {
    pub sections: R,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    /// Bottom of the visible window.
    pub visible_area_position: f32,
    /// Height at which the run is complete.
    pub rise_height: f32,
    /// Player input for this tick.
    pub horizontal_speed: f32,
}

impl<R: ActiveSectionRegistry> Environment<R> {
    pub fn new(sections: R, rise_height: f32) -> Self {
        Self {
            sections,
            enemies: Vec::new(),
            items: Vec::new(),
            visible_area_position: 0.0,
            rise_height,
            horizontal_speed: 0.0,
        }
    }
}

/// Platform the character landed on, addressed by its position in the
/// active-section iteration of this tick.
#[derive(Debug, Clone, Copy)]
struct Landing {
    section: usize,
    platform: usize,
    at: Vec2,
}

/// Run one simulation step and return what happened, in order.
///
/// `End` is inert and dying states only fall. In `Normal` the order is:
/// platform advance, fall check, platform collision and contact (or the fart
/// discharge), enemies, items, completion, then effect timers.
pub fn tick<R: ActiveSectionRegistry>(
    character: &mut Character,
    effects: &mut CharacterEffects,
    env: &mut Environment<R>,
    config: &SimConfig,
    delta: f32,
) -> Vec<SimEvent> {
    match character.state {
        CharacterState::End => return Vec::new(),
        CharacterState::DyingFall | CharacterState::DyingFire | CharacterState::DyingEnemy { .. } => {
            character.speed.x = 0.0;
            integrate(character, &config.physics, delta);
            effects.update(delta);
            return Vec::new();
        },
        CharacterState::Normal => {},
    }

    let mut ctx = TickContext {
        character,
        effects,
        env,
        config,
        delta,
        events: Vec::new(),
    };
    ctx.run();
    ctx.events
}

/// Move by the current speed, then apply gravity capped at the terminal speed.
fn integrate(character: &mut Character, physics: &PhysicsConfig, dt: f32) {
    character.position = character.position.add(character.speed.scale(dt));
    character.speed.y = (character.speed.y - physics.gravity * dt).max(-physics.max_fall_speed);
}

struct TickContext<'a, R> {
    character: &'a mut Character,
    effects: &'a mut CharacterEffects,
    env: &'a mut Environment<R>,
    config: &'a SimConfig,
    delta: f32,
    events: Vec<SimEvent>,
}

impl<R: ActiveSectionRegistry> TickContext<'_, R> {
    fn run(&mut self) {
        let caught = self.advance_world();

        self.handle_fall();

        if self.is_dying() {
            integrate(self.character, &self.config.physics, self.delta);
        } else if !self.effects.is_farting() {
            self.collide_with_platforms(caught);
            self.character.speed.x = self.env.horizontal_speed;
            self.wrap_x();
        } else {
            self.discharge_fart();
        }

        if !self.is_dying() {
            self.collide_with_enemies();
        }
        if !self.is_dying() {
            self.collide_with_items();
        }
        if !self.is_dying() && self.character.position.y > self.env.rise_height {
            self.character.state = CharacterState::End;
            self.events.push(SimEvent::SectionComplete);
            tracing::info!(
                height = self.character.position.y,
                score = self.effects.score(),
                "Rise complete"
            );
        }

        self.effects.update(self.delta);
    }

    fn is_dying(&self) -> bool {
        self.character.state.is_dying()
    }

    fn window(&self) -> ActiveWindow {
        ActiveWindow::new(
            self.env.visible_area_position,
            self.config.world.active_padding,
        )
    }

    fn launch_speed(&self) -> f32 {
        if self.effects.is_high_jump() {
            self.config.physics.high_jump_speed()
        } else {
            self.config.physics.jump_speed
        }
    }

    fn jump(&mut self) {
        let speed = self.launch_speed();
        self.character.speed.y = speed;
        self.events.push(SimEvent::Jump { speed });
    }

    fn lose_life(&mut self, hazard: Hazard) {
        self.effects.subtract_life();
        self.effects
            .set_shield(self.config.effects.death_shield_duration);
        let lives_left = self.effects.lives();
        self.events.push(SimEvent::LifeLost { hazard, lives_left });
        tracing::debug!(?hazard, lives_left, "Life lost");
    }

    fn die(&mut self, state: CharacterState, hazard: Hazard) {
        self.character.state = state;
        self.events.push(SimEvent::Died { hazard });
        tracing::info!(?hazard, score = self.effects.score(), "Character died");
    }

    fn broadcast(&mut self, effect: SectionEffect) {
        let window = self.window();
        self.env.sections.broadcast(window, effect);
        self.events.push(SimEvent::SectionEffect { effect });
    }

    // Platforms and enemies move first. A platform rising into the path of a
    // descending character catches it.
    fn advance_world(&mut self) -> Option<Landing> {
        let window = self.window();
        let dt = self.delta;
        let c1 = self.character.position;
        let c2 = c1.add(self.character.speed.scale(dt));
        let path = (!self.effects.is_farting() && self.character.speed.y < 0.0).then_some((c1, c2));

        let mut caught = None;
        for (si, section) in self.env.sections.active_sections_mut(window).enumerate() {
            for (pi, platform) in section.platforms_mut().iter_mut().enumerate() {
                let probe = if caught.is_none()
                    && platform.is_active(window.visible_area_position, window.padding)
                {
                    path
                } else {
                    None
                };
                if let Some(at) = platform.advance(dt, probe) {
                    caught = Some(Landing {
                        section: si,
                        platform: pi,
                        at,
                    });
                }
            }
        }

        for enemy in &mut self.env.enemies {
            enemy.update(dt);
        }
        caught
    }

    fn handle_fall(&mut self) {
        let visible = self.env.visible_area_position;
        if self.character.position.y <= 0.0 {
            self.character.position.y = 0.0;
            self.jump();
        } else if self.character.position.y < visible {
            if self.effects.lives() == 0 {
                self.die(CharacterState::DyingFall, Hazard::Fall);
            } else {
                self.character.position.y = visible + FALL_RECOVERY_EPSILON;
                // hover at the window edge; the recovery fart is the way back up
                self.character.speed.y = 0.0;
                self.effects
                    .set_farts(self.config.effects.fall_recovery_farts);
                self.lose_life(Hazard::Fall);
            }
        }
    }

    fn collide_with_platforms(&mut self, caught: Option<Landing>) {
        let landing = match caught {
            Some(landing) => {
                self.character.position.y = landing.at.y;
                landing
            },
            None => {
                let c1 = self.character.position;
                let c2 = c1.add(self.character.speed.scale(self.delta));
                match self.sweep(c1, c2) {
                    Some(landing) => {
                        self.character.position = landing.at;
                        landing
                    },
                    None => {
                        self.character.position = c2;
                        self.handle_fall();
                        let physics = &self.config.physics;
                        self.character.speed.y = (self.character.speed.y
                            - physics.gravity * self.delta)
                            .max(-physics.max_fall_speed);
                        return;
                    },
                }
            },
        };

        self.handle_fall();
        if !self.is_dying() {
            let effect = self.land(landing);
            self.resolve_contact(effect);
        }
    }

    /// First active platform crossed by the descending path `c1 -> c2`.
    fn sweep(&self, c1: Vec2, c2: Vec2) -> Option<Landing> {
        if c2.y >= c1.y {
            return None;
        }
        let window = self.window();
        for (si, section) in self.env.sections.active_sections(window).enumerate() {
            for (pi, platform) in section.platforms().iter().enumerate() {
                if !platform.is_active(window.visible_area_position, window.padding) {
                    continue;
                }
                if let Some(at) = platform.collide(c1, c2) {
                    return Some(Landing {
                        section: si,
                        platform: pi,
                        at,
                    });
                }
            }
        }
        None
    }

    fn land(&mut self, landing: Landing) -> ContactEffect {
        let window = self.window();
        let Some(section) = self
            .env
            .sections
            .active_sections_mut(window)
            .nth(landing.section)
        else {
            return ContactEffect::None;
        };
        let Some(platform) = section.platforms_mut().get_mut(landing.platform) else {
            return ContactEffect::None;
        };
        platform.on_landed();
        platform.contact_effect(landing.at.x)
    }

    fn resolve_contact(&mut self, effect: ContactEffect) {
        if effect == ContactEffect::Burn && !self.effects.is_shielded() {
            if self.effects.lives() == 0 {
                self.die(CharacterState::DyingFire, Hazard::Fire);
                return;
            }
            self.lose_life(Hazard::Fire);
        }

        match effect {
            ContactEffect::JumpBoost(power) => {
                let speed = self.config.physics.jump_boost_speed(power);
                self.character.speed.y = speed;
                self.events.push(SimEvent::JumpBoost { power, speed });
            },
            ContactEffect::None | ContactEffect::Burn | ContactEffect::RepositionPlatforms => {
                self.jump()
            },
        }

        if effect == ContactEffect::RepositionPlatforms {
            self.broadcast(SectionEffect::RepositionPlatforms);
        }
        self.reveal_hidden();
    }

    // Every launch off a platform reveals the hidden ones. The Jump event
    // already reports it, so no SectionEffect event is pushed.
    fn reveal_hidden(&mut self) {
        let window = self.window();
        self.env
            .sections
            .broadcast(window, SectionEffect::VisibleOnJump);
    }

    // Farting ignores platforms; the charge fires once the character stops rising.
    fn discharge_fart(&mut self) {
        if self.character.speed.y <= 0.0 {
            self.character.speed.y = self.config.physics.fart_speed();
            self.effects.subtract_fart();
            self.events.push(SimEvent::FartDischarged {
                charges_left: self.effects.farts(),
            });
            self.broadcast(SectionEffect::VisibleOnJump);
        }
        self.character.speed.x = self.env.horizontal_speed;
        integrate(self.character, &self.config.physics, self.delta);
        self.wrap_x();
    }

    fn wrap_x(&mut self) {
        let x = self.character.position.x + CENTER_X_OFFSET;
        self.character.position.x = positive_modulus(x, WORLD_WIDTH) - CENTER_X_OFFSET;
    }

    fn collide_with_enemies(&mut self) {
        if self.effects.is_shielded() {
            return;
        }
        let bounds = self.character.bounds();
        let visible = self.env.visible_area_position;
        let hit = self
            .env
            .enemies
            .iter()
            .find(|e| e.is_visible(visible, VISIBLE_AREA_HEIGHT) && e.collides(&bounds))
            .map(Enemy::kind);

        if let Some(kind) = hit {
            let hazard = Hazard::Enemy { kind };
            if self.effects.lives() == 0 {
                self.die(CharacterState::DyingEnemy { enemy: kind }, hazard);
            } else {
                self.lose_life(hazard);
            }
        }
    }

    fn collide_with_items(&mut self) {
        let bounds = self.character.bounds();
        let Some(item) = self
            .env
            .items
            .iter_mut()
            .find(|i| i.is_existing() && i.collides(&bounds))
        else {
            return;
        };
        let score = item.collect(self.effects, &self.config.effects);
        self.events.push(SimEvent::ItemCollected {
            item: item.kind(),
            score,
        });
    }
}

#[cfg(test)]
mod tests {
    use ascent_core::assets::HeadlessAssets;
    use ascent_core::entity::{CoinKind, EnemyKind, ItemKind};
    use ascent_core::level::{
        FeatureRecord, JumpBoostPower, MovementProfile, PlatformKind, PlatformRecord,
        RiseSectionData,
    };

    use super::*;
    use crate::enemies::EnemyPlacement;
    use crate::items::ItemPlacement;
    use crate::section::RiseSection;

    const DT: f32 = 1.0 / 60.0;

    fn section(platforms: Vec<PlatformRecord>) -> Vec<RiseSection> {
        let data = RiseSectionData {
            name: "test".to_string(),
            step_range: 200,
            difficulty: 0,
            platforms,
        };
        vec![RiseSection::from_data(
            &data,
            0.0,
            &SimConfig::default().world,
            &HeadlessAssets,
        )]
    }

    fn env(platforms: Vec<PlatformRecord>) -> Environment<Vec<RiseSection>> {
        Environment::new(section(platforms), 10_000.0)
    }

    fn falling_at(x: f32, y: f32) -> Character {
        let mut c = Character::new(Vec2::new(x, y));
        c.speed.y = -300.0;
        c
    }

    #[test]
    fn end_state_is_inert() {
        let mut c = falling_at(50.0, 500.0);
        c.state = CharacterState::End;
        let mut fx = CharacterEffects::new(3);
        let mut e = env(vec![]);
        let events = tick(&mut c, &mut fx, &mut e, &SimConfig::default(), DT);
        assert!(events.is_empty());
        assert_eq!(c.position, Vec2::new(50.0, 500.0));
    }

    #[test]
    fn dying_character_keeps_falling() {
        let mut c = falling_at(50.0, 500.0);
        c.state = CharacterState::DyingFire;
        let mut fx = CharacterEffects::new(0);
        let mut e = env(vec![]);
        tick(&mut c, &mut fx, &mut e, &SimConfig::default(), 0.1);
        assert!((c.position.y - 470.0).abs() < 1e-3);
        assert!(c.speed.y < -300.0);
        assert_eq!(c.state, CharacterState::DyingFire);
    }

    #[test]
    fn free_fall_applies_gravity_and_wraps() {
        let cfg = SimConfig::default();
        let mut c = falling_at(470.0, 500.0);
        let mut fx = CharacterEffects::new(3);
        let mut e = env(vec![]);
        e.horizontal_speed = 120.0;
        let events = tick(&mut c, &mut fx, &mut e, &cfg, 0.1);
        assert!(events.is_empty());
        assert!((c.position.y - 470.0).abs() < 1e-3);
        assert!((c.speed.y - (-390.0)).abs() < 1e-3);
        assert_eq!(c.speed.x, 120.0);
        // center at 500 wraps to 20
        assert!((c.position.x - (-10.0)).abs() < 1e-3);
    }

    #[test]
    fn terminal_speed_is_capped() {
        let cfg = SimConfig::default();
        let mut c = falling_at(50.0, 5000.0);
        c.speed.y = -cfg.physics.max_fall_speed;
        let mut fx = CharacterEffects::new(3);
        let mut e = env(vec![]);
        tick(&mut c, &mut fx, &mut e, &cfg, DT);
        assert_eq!(c.speed.y, -cfg.physics.max_fall_speed);
    }

    #[test]
    fn landing_on_spring_uses_tier_speed() {
        let cfg = SimConfig::default();
        let mut record = PlatformRecord::new(20, 0); // top at 315
        record.features.push(FeatureRecord::JumpBoost {
            position: 0.0,
            power: JumpBoostPower::High,
        });
        let mut c = falling_at(10.0, 320.0);
        let mut fx = CharacterEffects::new(3);
        let mut e = env(vec![record]);
        let events = tick(&mut c, &mut fx, &mut e, &cfg, 0.1);
        let speed = cfg.physics.jump_boost_speed(JumpBoostPower::High);
        assert_eq!(
            events,
            vec![SimEvent::JumpBoost {
                power: JumpBoostPower::High,
                speed
            }]
        );
        assert_eq!(c.speed.y, speed);
        assert_eq!(c.position.y, 315.0);
    }

    #[test]
    fn high_jump_effect_raises_launch() {
        let cfg = SimConfig::default();
        let mut c = falling_at(10.0, 320.0);
        let mut fx = CharacterEffects::new(3);
        fx.set_high_jump(5.0);
        let mut e = env(vec![PlatformRecord::new(20, 0)]);
        tick(&mut c, &mut fx, &mut e, &cfg, 0.1);
        assert_eq!(c.speed.y, cfg.physics.high_jump_speed());
    }

    #[test]
    fn reposition_switch_broadcasts() {
        let mut record = PlatformRecord::new(20, 0);
        record.movement = MovementProfile::Reposition {
            range: 200.0,
            initial_right: false,
        };
        let mut c = falling_at(10.0, 320.0);
        let mut fx = CharacterEffects::new(3);
        let mut e = env(vec![record]);
        let events = tick(&mut c, &mut fx, &mut e, &SimConfig::default(), 0.1);
        assert!(events.contains(&SimEvent::SectionEffect {
            effect: SectionEffect::RepositionPlatforms
        }));
        assert!(e.sections[0].platforms()[0].movement().is_on_right());
    }

    #[test]
    fn burn_on_last_life_is_fatal_and_skips_jump() {
        let mut record = PlatformRecord::new(20, 0);
        record.kind = PlatformKind::Flame;
        let mut c = falling_at(10.0, 320.0);
        let mut fx = CharacterEffects::new(0);
        let mut e = env(vec![record]);
        let events = tick(&mut c, &mut fx, &mut e, &SimConfig::default(), 0.1);
        assert_eq!(c.state, CharacterState::DyingFire);
        assert_eq!(
            events,
            vec![SimEvent::Died {
                hazard: Hazard::Fire
            }]
        );
        assert!(c.speed.y < 0.0, "no launch after a fatal burn");
    }

    #[test]
    fn shield_blocks_burn() {
        let mut record = PlatformRecord::new(20, 0);
        record.kind = PlatformKind::Flame;
        let mut c = falling_at(10.0, 320.0);
        let mut fx = CharacterEffects::new(2);
        fx.set_shield(5.0);
        let mut e = env(vec![record]);
        let events = tick(&mut c, &mut fx, &mut e, &SimConfig::default(), 0.1);
        assert_eq!(fx.lives(), 2);
        assert!(matches!(events.as_slice(), [SimEvent::Jump { .. }]));
    }

    #[test]
    fn fall_recovery_costs_a_life() {
        let cfg = SimConfig::default();
        let mut c = falling_at(10.0, 390.0);
        let mut fx = CharacterEffects::new(2);
        let mut e = env(vec![]);
        e.visible_area_position = 400.0;
        let events = tick(&mut c, &mut fx, &mut e, &cfg, DT);
        assert_eq!(fx.lives(), 1);
        assert_eq!(fx.farts(), cfg.effects.fall_recovery_farts);
        assert!(fx.is_shielded());
        assert_eq!(c.state, CharacterState::Normal);
        assert!(c.position.y > 400.0);
        assert_eq!(
            events,
            vec![SimEvent::LifeLost {
                hazard: Hazard::Fall,
                lives_left: 1
            }],
            "one life per recovery"
        );
    }

    #[test]
    fn fart_fires_once_rising_stops() {
        let cfg = SimConfig::default();
        let mut hidden = PlatformRecord::new(30, 10);
        hidden.features.push(FeatureRecord::VisibleOnJump);
        let mut c = Character::new(Vec2::new(10.0, 300.0));
        c.speed.y = 50.0;
        let mut fx = CharacterEffects::new(3);
        fx.set_farts(2);
        assert!(fx.start_farting());
        let mut e = env(vec![hidden]);

        let events = tick(&mut c, &mut fx, &mut e, &cfg, DT);
        assert!(events.is_empty(), "still rising");
        assert!(fx.is_farting());

        c.speed.y = 0.0;
        let events = tick(&mut c, &mut fx, &mut e, &cfg, DT);
        assert_eq!(
            events,
            vec![
                SimEvent::FartDischarged { charges_left: 1 },
                SimEvent::SectionEffect {
                    effect: SectionEffect::VisibleOnJump
                },
            ]
        );
        assert!(!fx.is_farting());
        assert!(c.speed.y > cfg.physics.jump_speed);
        assert!(!e.sections[0].platforms()[0].is_hidden());
    }

    #[test]
    fn launch_off_platform_reveals_hidden_platforms() {
        let cfg = SimConfig::default();
        let mut hidden = PlatformRecord::new(40, 10);
        hidden.features.push(FeatureRecord::VisibleOnJump);
        let mut c = falling_at(10.0, 320.0);
        let mut fx = CharacterEffects::new(3);
        let mut e = env(vec![PlatformRecord::new(20, 0), hidden]);
        assert!(e.sections[0].platforms()[1].is_hidden());

        let events = tick(&mut c, &mut fx, &mut e, &cfg, 0.1);
        assert_eq!(
            events,
            vec![SimEvent::Jump {
                speed: cfg.physics.jump_speed
            }]
        );
        let platform = &e.sections[0].platforms()[1];
        assert!(!platform.is_hidden(), "jumping off a platform reveals hidden ones");
        assert!(platform.is_active(0.0, cfg.world.active_padding));
    }

    #[test]
    fn revealed_platform_can_be_landed_on() {
        let cfg = SimConfig::default();
        let mut hidden = PlatformRecord::new(20, 0); // top at 315
        hidden.features.push(FeatureRecord::VisibleOnJump);
        let mut fx = CharacterEffects::new(3);
        let mut e = env(vec![hidden]);

        let mut c = falling_at(10.0, 320.0);
        tick(&mut c, &mut fx, &mut e, &cfg, 0.1);
        assert!(c.position.y < 315.0, "hidden platform is not solid");

        let window = ActiveWindow::new(0.0, cfg.world.active_padding);
        e.sections.broadcast(window, SectionEffect::VisibleOnJump);
        let mut c = falling_at(10.0, 320.0);
        let events = tick(&mut c, &mut fx, &mut e, &cfg, 0.1);
        assert_eq!(c.position.y, 315.0);
        assert!(matches!(events.as_slice(), [SimEvent::Jump { .. }]));
    }

    #[test]
    fn farting_passes_through_platforms() {
        let mut c = falling_at(10.0, 320.0);
        c.speed.y = -300.0;
        let mut fx = CharacterEffects::new(3);
        fx.set_farts(1);
        assert!(fx.start_farting());
        let mut e = env(vec![PlatformRecord::new(20, 0)]);
        let events = tick(&mut c, &mut fx, &mut e, &SimConfig::default(), 0.1);
        assert!(matches!(events[0], SimEvent::FartDischarged { .. }));
        assert!(c.position.y > 320.0, "launched instead of landing");
    }

    #[test]
    fn enemy_hit_on_last_life_kills() {
        let mut c = Character::new(Vec2::new(100.0, 500.0));
        let mut fx = CharacterEffects::new(0);
        let mut e = env(vec![]);
        e.enemies.push(Enemy::new(
            EnemyPlacement {
                kind: EnemyKind::Saw,
                position: Vec2::new(120.0, 510.0),
                patrol: MovementProfile::None,
            },
            &HeadlessAssets,
        ));
        let events = tick(&mut c, &mut fx, &mut e, &SimConfig::default(), DT);
        assert_eq!(
            c.state,
            CharacterState::DyingEnemy {
                enemy: EnemyKind::Saw
            }
        );
        assert_eq!(
            events.last(),
            Some(&SimEvent::Died {
                hazard: Hazard::Enemy {
                    kind: EnemyKind::Saw
                }
            })
        );
    }

    #[test]
    fn shielded_character_ignores_enemies() {
        let mut c = Character::new(Vec2::new(100.0, 500.0));
        let mut fx = CharacterEffects::new(1);
        fx.set_shield(1.0);
        let mut e = env(vec![]);
        e.enemies.push(Enemy::new(
            EnemyPlacement {
                kind: EnemyKind::Bat,
                position: Vec2::new(120.0, 510.0),
                patrol: MovementProfile::None,
            },
            &HeadlessAssets,
        ));
        tick(&mut c, &mut fx, &mut e, &SimConfig::default(), DT);
        assert_eq!(fx.lives(), 1);
        assert_eq!(c.state, CharacterState::Normal);
    }

    #[test]
    fn only_first_overlapping_item_is_collected() {
        let mut c = Character::new(Vec2::new(100.0, 500.0));
        let mut fx = CharacterEffects::new(3);
        let mut e = env(vec![]);
        for _ in 0..2 {
            e.items.push(Item::new(
                ItemPlacement {
                    kind: ItemKind::Coin {
                        coin: CoinKind::Copper,
                    },
                    position: Vec2::new(110.0, 510.0),
                },
                &HeadlessAssets,
            ));
        }
        let events = tick(&mut c, &mut fx, &mut e, &SimConfig::default(), DT);
        assert_eq!(
            events,
            vec![SimEvent::ItemCollected {
                item: ItemKind::Coin {
                    coin: CoinKind::Copper
                },
                score: 2000
            }]
        );
        assert!(!e.items[0].is_existing());
        assert!(e.items[1].is_existing());

        tick(&mut c, &mut fx, &mut e, &SimConfig::default(), DT);
        assert_eq!(fx.score(), 4000);
    }

    #[test]
    fn passing_rise_height_ends_run() {
        let mut c = Character::new(Vec2::new(100.0, 990.0));
        c.speed.y = 300.0;
        let mut fx = CharacterEffects::new(3);
        let mut e = Environment::new(section(vec![]), 1000.0);
        let events = tick(&mut c, &mut fx, &mut e, &SimConfig::default(), 0.1);
        assert_eq!(events, vec![SimEvent::SectionComplete]);
        assert_eq!(c.state, CharacterState::End);
    }
}
