// Key binding configuration and remapping

use super::action::{default_bindings, Direction};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical keys to roll directions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Key -> direction
    bindings: HashMap<KeyCode, Direction>,

    /// Reverse mapping for quick lookups (direction -> all keys)
    direction_to_keys: HashMap<Direction, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
            direction_to_keys: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Direction)>) -> Self {
        let mut config = Self::empty();
        for (key, direction) in bindings {
            config.bind(key, direction);
        }
        config
    }

    /// Bind a key to a direction, replacing whatever it was bound to
    pub fn bind(&mut self, key: KeyCode, direction: Direction) {
        self.unbind_key(key);
        self.bindings.insert(key, direction);
        self.direction_to_keys
            .entry(direction)
            .or_default()
            .push(key);
    }

    /// Remove a key binding
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(direction) = self.bindings.remove(&key) {
            if let Some(keys) = self.direction_to_keys.get_mut(&direction) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.direction_to_keys.remove(&direction);
                }
            }
        }
    }

    /// Remove every key bound to a direction
    pub fn unbind_direction(&mut self, direction: Direction) {
        if let Some(keys) = self.direction_to_keys.remove(&direction) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    /// Direction bound to a key, if any
    pub fn direction_for(&self, key: KeyCode) -> Option<Direction> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to a direction
    pub fn keys_for(&self, direction: Direction) -> Vec<KeyCode> {
        self.direction_to_keys
            .get(&direction)
            .cloned()
            .unwrap_or_default()
    }

    pub fn has_binding(&self, direction: Direction) -> bool {
        self.direction_to_keys.contains_key(&direction)
    }

    /// Reset to arrow keys + WASD
    pub fn reset_to_defaults(&mut self) {
        *self = Self::from_bindings(default_bindings());
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_maps_arrows() {
        let config = InputConfig::default();
        assert_eq!(config.direction_for(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(config.direction_for(KeyCode::KeyD), Some(Direction::Right));
        assert_eq!(config.direction_for(KeyCode::Space), None);
    }

    #[test]
    fn test_rebind_key() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::ArrowUp, Direction::Down);

        assert_eq!(config.direction_for(KeyCode::ArrowUp), Some(Direction::Down));
        assert_eq!(config.keys_for(Direction::Up), vec![KeyCode::KeyW]);
        assert_eq!(config.keys_for(Direction::Down).len(), 3);
    }

    #[test]
    fn test_unbind_direction() {
        let mut config = InputConfig::default();
        config.unbind_direction(Direction::Left);

        assert!(!config.has_binding(Direction::Left));
        assert_eq!(config.direction_for(KeyCode::ArrowLeft), None);
        assert_eq!(config.direction_for(KeyCode::KeyA), None);
    }

    #[test]
    fn test_unbind_last_key_removes_direction() {
        let mut config = InputConfig::from_bindings(vec![(KeyCode::KeyJ, Direction::Left)]);
        config.unbind_key(KeyCode::KeyJ);
        assert!(!config.has_binding(Direction::Left));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::empty();
        config.bind(KeyCode::KeyZ, Direction::Up);
        config.reset_to_defaults();

        assert_eq!(config.direction_for(KeyCode::KeyZ), None);
        assert!(config.has_binding(Direction::Up));
        assert!(config.has_binding(Direction::Down));
    }
}
