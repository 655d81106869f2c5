use rapier3d::prelude::{Group, InteractionGroups};

/// Collision layers used to classify world geometry.
///
/// Obstacle queries only consider colliders whose membership intersects
/// the configured obstacle mask, so floor tiles and decorations never block a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionLayer {
    /// Default layer - interacts with everything
    Default = 0b0000_0001,

    /// The rolling cube itself
    Actor = 0b0000_0010,

    /// Floor tiles the cube rolls on
    Floor = 0b0000_0100,

    /// Solid blocks that stop a roll
    Obstacle = 0b0000_1000,

    /// Hazards (holes, spikes)
    Hazard = 0b0001_0000,

    /// Trigger zones - detection only
    Sensor = 0b0010_0000,
}

impl CollisionLayer {
    pub fn bits(self) -> u32 {
        self as u32
    }

    pub fn group(self) -> Group {
        Group::from_bits_truncate(self.bits())
    }

    /// Convert to rapier's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let filter = match self {
            CollisionLayer::Actor => Group::from_bits_truncate(
                CollisionLayer::Floor.bits()
                    | CollisionLayer::Obstacle.bits()
                    | CollisionLayer::Hazard.bits()
                    | CollisionLayer::Sensor.bits(),
            ),
            CollisionLayer::Floor | CollisionLayer::Obstacle | CollisionLayer::Hazard => {
                Group::from_bits_truncate(CollisionLayer::Actor.bits())
            }
            CollisionLayer::Sensor | CollisionLayer::Default => Group::ALL,
        };

        InteractionGroups::new(self.group(), filter)
    }

    /// Combine several layers into a query mask
    pub fn mask(layers: &[CollisionLayer]) -> u32 {
        layers.iter().fold(0, |acc, layer| acc | layer.bits())
    }
}
