//! Actors and consumables: the player character, monsters and healing potions.
//!
//! Combat is plain arithmetic. An attack always lands for the attacker's full
//! attack power; there is no dice roll and no miss chance. Health saturates at
//! zero on the way down and is not capped on the way up.
//!
//! Every mutating operation returns the line it would show the player and also
//! logs it at `info`, so callers can print it or drop it.

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Character,
    Monster,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub health: u32,
    pub attack_power: u32,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(kind: EntityKind, name: impl Into<String>, health: u32, attack_power: u32) -> Self {
        Entity {
            name: name.into(),
            health,
            attack_power,
            kind,
        }
    }

    pub fn character(name: impl Into<String>, health: u32, attack_power: u32) -> Self {
        Self::new(EntityKind::Character, name, health, attack_power)
    }

    pub fn monster(name: impl Into<String>, health: u32, attack_power: u32) -> Self {
        Self::new(EntityKind::Monster, name, health, attack_power)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Lose `amount` health, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) -> String {
        self.health = self.health.saturating_sub(amount);
        let line = format!(
            "{} takes {} damage. Remaining health: {}",
            self.name, amount, self.health
        );
        info!("{}", line);
        line
    }

    /// Strike `target` for this entity's attack power. Returns the attack line
    /// followed by the target's damage line.
    pub fn attack(&self, target: &mut Entity) -> Vec<String> {
        let line = format!(
            "{} attacks {} for {} damage!",
            self.name, target.name, self.attack_power
        );
        info!("{}", line);
        let hit = target.take_damage(self.attack_power);
        vec![line, hit]
    }

    /// `"<name> Health: <health>"`
    pub fn health_bar(&self) -> String {
        format!("{} Health: {}", self.name, self.health)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Potion {
    name: String,
    heal_amount: u32,
}

impl Potion {
    pub fn new(name: impl Into<String>, heal_amount: u32) -> Self {
        Potion {
            name: name.into(),
            heal_amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heal_amount(&self) -> u32 {
        self.heal_amount
    }

    /// Heal `target` by the full amount. No max-health ceiling applies.
    pub fn use_on(&self, target: &mut Entity) -> String {
        target.health = target.health.saturating_add(self.heal_amount);
        let line = format!(
            "{} uses {} and heals for {} HP!",
            target.name, self.name, self.heal_amount
        );
        info!("{} (health now {})", line, target.health);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_damage_clamps_at_zero() {
        for amount in [100u32, 101, 250, u32::MAX] {
            let mut hero = Entity::character("Player", 100, 15);
            let line = hero.take_damage(amount);
            assert_eq!(hero.health, 0, "amount {} should floor at zero", amount);
            assert!(!hero.is_alive());
            assert!(line.ends_with("Remaining health: 0"));
        }
    }

    #[test]
    fn take_damage_partial() {
        let mut hero = Entity::character("Player", 100, 15);
        let line = hero.take_damage(30);
        assert_eq!(hero.health, 70);
        assert_eq!(line, "Player takes 30 damage. Remaining health: 70");
    }

    #[test]
    fn attack_uses_fixed_attack_power() {
        let hero = Entity::character("Player", 100, 15);
        let mut rat = Entity::monster("Rat", 40, 3);
        let lines = hero.attack(&mut rat);
        assert_eq!(rat.health, 25);
        assert_eq!(lines[0], "Player attacks Rat for 15 damage!");
        assert_eq!(lines[1], "Rat takes 15 damage. Remaining health: 25");
        // Same result every time
        hero.attack(&mut rat);
        assert_eq!(rat.health, 10);
    }

    #[test]
    fn monster_behaves_like_character() {
        let mut hero = Entity::character("Player", 20, 15);
        let ogre = Entity::monster("Ogre", 20, 15);
        assert_eq!(ogre.kind, EntityKind::Monster);
        ogre.attack(&mut hero);
        let mut ogre = ogre;
        hero.attack(&mut ogre);
        assert_eq!(hero.health, ogre.health);
    }

    #[test]
    fn potion_heals_without_ceiling() {
        let mut hero = Entity::character("Player", 100, 15);
        let potion = Potion::new("Elixir", 50);
        let line = potion.use_on(&mut hero);
        assert_eq!(hero.health, 150);
        assert_eq!(line, "Player uses Elixir and heals for 50 HP!");
        // Potions are not consumed
        potion.use_on(&mut hero);
        assert_eq!(hero.health, 200);
    }

    #[test]
    fn potion_saturates_instead_of_overflowing() {
        let mut hero = Entity::character("Player", u32::MAX - 1, 1);
        Potion::new("Elixir", 10).use_on(&mut hero);
        assert_eq!(hero.health, u32::MAX);
    }

    #[test]
    fn health_bar_format() {
        let hero = Entity::character("Player", 100, 15);
        assert_eq!(hero.health_bar(), "Player Health: 100");
    }
}
