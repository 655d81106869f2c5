// Sound cues for roll start and landing
//
// Playback belongs to the audio collaborator; this only decides which clip
// to trigger and how loud.

use serde::{Deserialize, Serialize};

use super::events::RollEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    Roll,
    Land,
}

impl CueKind {
    pub fn clip_name(&self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Land => "land",
        }
    }
}

/// A request to play a clip at a volume in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub kind: CueKind,
    pub volume: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueConfig {
    pub enabled: bool,
    pub roll_volume: f32,
    pub land_volume: f32,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            roll_volume: 0.5,
            land_volume: 0.7,
        }
    }
}

impl CueConfig {
    /// Cue to play for an event, if any
    pub fn cue_for(&self, event: &RollEvent) -> Option<SoundCue> {
        if !self.enabled {
            return None;
        }

        let (kind, volume) = match event {
            RollEvent::Started { .. } => (CueKind::Roll, self.roll_volume),
            RollEvent::Landed { .. } => (CueKind::Land, self.land_volume),
        };

        Some(SoundCue {
            kind,
            volume: volume.clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Direction;
    use crate::game::cube::moves::RollMove;
    use glam::Vec3;

    fn landed() -> RollEvent {
        RollEvent::Landed {
            roll: RollMove::from_direction(Direction::Left),
            position: Vec3::NEG_X,
            total_angle: 90.0,
        }
    }

    #[test]
    fn test_start_plays_roll_sound() {
        let config = CueConfig::default();
        let event = RollEvent::Started {
            roll: RollMove::from_direction(Direction::Left),
            from: Vec3::ZERO,
            to: Vec3::NEG_X,
        };

        let cue = config.cue_for(&event).expect("cue expected");
        assert_eq!(cue.kind, CueKind::Roll);
        assert_eq!(cue.volume, 0.5);
        assert_eq!(cue.kind.clip_name(), "roll");
    }

    #[test]
    fn test_landing_plays_land_sound() {
        let cue = CueConfig::default().cue_for(&landed()).expect("cue expected");
        assert_eq!(cue.kind, CueKind::Land);
        assert_eq!(cue.volume, 0.7);
    }

    #[test]
    fn test_disabled_cues_are_silent() {
        let config = CueConfig {
            enabled: false,
            ..CueConfig::default()
        };
        assert_eq!(config.cue_for(&landed()), None);
    }

    #[test]
    fn test_volume_is_clamped() {
        let config = CueConfig {
            land_volume: 3.0,
            ..CueConfig::default()
        };
        assert_eq!(config.cue_for(&landed()).map(|c| c.volume), Some(1.0));
    }
}
