use std::collections::HashMap;

use crate::world::{Container, Item, Room, UseError, UseOutcome};

pub struct Player {
    /// Id of the room the player stands in. The room itself belongs to the world.
    pub current_room: String,
    health: u32,
    max_health: u32,
    inventory: Container,
}

impl Player {
    pub fn new(start_room: impl Into<String>, max_health: u32) -> Self {
        Player {
            current_room: start_room.into(),
            health: max_health,
            max_health,
            inventory: Container::new(),
        }
    }

    pub fn move_to(&mut self, room_id: impl Into<String>) {
        self.current_room = room_id.into();
    }

    /// Move `item_name` from the floor of `room` into the inventory.
    /// Fails if `room` is not the one the player stands in.
    pub fn take_from_chest(&mut self, room: &mut Room, item_name: &str) -> bool {
        if room.id != self.current_room {
            return false;
        }
        match room.chest.take_by_name(item_name) {
            Some(item) => {
                self.inventory.put(item_name, item);
                true
            }
            None => false,
        }
    }

    /// Move `item_name` from the inventory onto the floor of `room`.
    pub fn drop_to_chest(&mut self, room: &mut Room, item_name: &str) -> bool {
        if room.id != self.current_room {
            return false;
        }
        match self.inventory.take_by_name(item_name) {
            Some(item) => {
                room.chest.put(item_name, item);
                true
            }
            None => false,
        }
    }

    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Use a carried item in `room`. Consumed items leave the inventory.
    pub fn use_item(&mut self, item_name: &str, room: &Room) -> Result<UseOutcome, UseError> {
        let item = self.inventory.get(item_name).ok_or(UseError::NotCarried)?;
        let outcome = item.kind.apply(&item.name, room)?;

        if outcome.consumed {
            self.inventory.take_by_name(item_name);
        }
        if outcome.healed > 0 {
            self.heal(outcome.healed);
        }
        Ok(outcome)
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn items(&self) -> &HashMap<String, Item> {
        self.inventory.list_items()
    }

    pub fn inventory(&self) -> &Container {
        &self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{ItemKind, WIN_LOCATION};

    fn hall_with_medkit() -> Room {
        let mut hall = Room::new("hall", "Hall", "in the grand hall");
        hall.chest.put(
            "medkit",
            Item::new("medkit", "Medkit", 20, ItemKind::Heal { amount: 20 }),
        );
        hall
    }

    #[test]
    fn take_then_drop_restores_both_containers() {
        let mut hall = hall_with_medkit();
        let mut player = Player::new("hall", 100);
        let floor_before = hall.chest.clone();
        let pack_before = player.inventory().clone();

        assert!(player.take_from_chest(&mut hall, "medkit"));
        assert!(hall.chest.is_empty());
        assert!(player.inventory().contains("medkit"));

        assert!(player.drop_to_chest(&mut hall, "medkit"));
        assert_eq!(hall.chest, floor_before);
        assert_eq!(player.inventory(), &pack_before);
    }

    #[test]
    fn take_missing_item_fails() {
        let mut hall = hall_with_medkit();
        let mut player = Player::new("hall", 100);

        assert!(!player.take_from_chest(&mut hall, "key"));
        assert!(!player.drop_to_chest(&mut hall, "key"));
        assert_eq!(hall.chest.len(), 1);
        assert!(player.items().is_empty());
    }

    #[test]
    fn transfers_only_touch_the_current_room() {
        let mut hall = hall_with_medkit();
        let mut player = Player::new("courtyard", 100);

        assert!(!player.take_from_chest(&mut hall, "medkit"));
        assert!(hall.chest.contains("medkit"));
        assert!(player.items().is_empty());

        player.move_to("hall");
        assert!(player.take_from_chest(&mut hall, "medkit"));
        player.move_to("courtyard");
        assert!(!player.drop_to_chest(&mut hall, "medkit"));
        assert!(player.inventory().contains("medkit"));
        assert!(hall.chest.is_empty());
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut player = Player::new("hall", 100);
        player.damage(60);
        assert!(player.is_alive());
        player.damage(40);
        assert_eq!(player.health(), 0);
        assert!(!player.is_alive());
        player.damage(u32::MAX);
        assert_eq!(player.health(), 0);
    }

    #[test]
    fn alive_until_exactly_zero() {
        let mut player = Player::new("hall", 100);
        player.damage(99);
        assert!(player.is_alive());
        player.damage(1);
        assert!(!player.is_alive());
    }

    #[test]
    fn medkit_heals_and_is_consumed() {
        let mut hall = hall_with_medkit();
        let mut player = Player::new("hall", 100);
        player.take_from_chest(&mut hall, "medkit");
        player.damage(45);

        let outcome = player.use_item("medkit", &hall).expect("medkit usable");
        assert!(outcome.consumed);
        assert_eq!(player.health(), 75);
        assert!(!player.inventory().contains("medkit"));
    }

    #[test]
    fn heal_is_capped_at_max() {
        let mut hall = hall_with_medkit();
        let mut player = Player::new("hall", 100);
        player.take_from_chest(&mut hall, "medkit");
        player.damage(5);

        player.use_item("medkit", &hall).expect("medkit usable");
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn key_reports_escape_only_in_win_location() {
        let mut yard = Room::new("courtyard", "Courtyard", "in the castle courtyard");
        yard.tags.insert(WIN_LOCATION.to_string());
        yard.chest.put(
            "key",
            Item::new(
                "key",
                "Key",
                15,
                ItemKind::Key {
                    unlocks: WIN_LOCATION.to_string(),
                },
            ),
        );
        let hall = Room::new("hall", "Hall", "in the grand hall");
        let mut player = Player::new("courtyard", 100);

        assert_eq!(player.use_item("key", &yard), Err(UseError::NotCarried));

        player.take_from_chest(&mut yard, "key");
        assert!(matches!(
            player.use_item("key", &hall),
            Err(UseError::WrongPlace { .. })
        ));

        let outcome = player.use_item("key", &yard).expect("key works");
        assert!(outcome.triggers_escape);
        assert!(player.inventory().contains("key"));
    }

    #[test]
    fn unknown_item_is_not_used() {
        let hall = Room::new("hall", "Hall", "in the grand hall");
        let mut player = Player::new("hall", 100);
        assert_eq!(player.use_item("banana", &hall), Err(UseError::NotCarried));
    }
}
