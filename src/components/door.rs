//! Exit door.
//!
//! The door starts closed every session and opens once all coins are gone.
//! Only an open door can end the session.

use bevy_ecs::prelude::Component;

pub const DOOR_SIZE: f32 = 64.0;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Door {
    pub open: bool,
}

impl Door {
    /// Open the door. Returns true only on the closed → open edge.
    pub fn unlock(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn image(&self) -> &'static str {
        if self.open { "door_open" } else { "door_closed" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_fires_once() {
        let mut door = Door::default();
        assert_eq!(door.image(), "door_closed");
        assert!(door.unlock());
        assert!(!door.unlock());
        assert!(door.open);
        assert_eq!(door.image(), "door_open");
        door.close();
        assert!(!door.open);
    }
}
