// Directional input definitions and default key mappings

use winit::keyboard::KeyCode;

/// The four roll directions the player can engage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Away from the camera (+Z)
    Up,
    /// Towards the camera (-Z)
    Down,
    /// -X
    Left,
    /// +X
    Right,
}

impl Direction {
    /// Resolution order when several directions engage on the same tick
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Default keyboard bindings: arrow keys plus WASD
pub fn default_bindings() -> Vec<(KeyCode, Direction)> {
    vec![
        (KeyCode::ArrowUp, Direction::Up),
        (KeyCode::ArrowDown, Direction::Down),
        (KeyCode::ArrowLeft, Direction::Left),
        (KeyCode::ArrowRight, Direction::Right),
        (KeyCode::KeyW, Direction::Up),
        (KeyCode::KeyS, Direction::Down),
        (KeyCode::KeyA, Direction::Left),
        (KeyCode::KeyD, Direction::Right),
    ]
}
