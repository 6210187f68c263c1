use bevy_ecs::prelude::Component;

/// Static level geometry. The collision box is the entity's [`Hitbox`](super::hitbox::Hitbox).
///
/// `order` is the platform's index in the level layout; collision resolution
/// visits platforms sorted by it so corrections apply in a stable order.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Platform {
    pub order: usize,
}

impl Platform {
    /// The ground is always the first platform of a layout.
    pub fn is_ground(&self) -> bool {
        self.order == 0
    }
}
