use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    pub walk_speed: f32,
    pub sprint_multiplier: f32,
    pub air_control: f32,

    pub crouch_speed: f32,
    pub crouch_height: f32,
    pub crouch_transition_rate: f32,

    pub jump_height: f32,
    pub max_jumps: u32,
    pub gravity: f32,
    pub coyote_time: f32,

    pub look_sensitivity: f32,
    pub eye_height_ratio: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_multiplier: 1.8,
            air_control: 0.5,

            crouch_speed: 2.5,
            crouch_height: 1.0,
            crouch_transition_rate: 10.0,

            jump_height: 1.2,
            max_jumps: 2,
            gravity: -20.0,
            coyote_time: 0.2,

            look_sensitivity: 0.1,
            eye_height_ratio: 0.9,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("gravity must be negative, got {0}")]
    Gravity(f32),
    #[error("max_jumps must be at least 1")]
    MaxJumps,
    #[error("air_control must lie in [0, 1], got {0}")]
    AirControl(f32),
    #[error("eye_height_ratio must lie in (0, 1], got {0}")]
    EyeHeightRatio(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("crouch_height {crouch} must stay below standing height {standing}")]
    CrouchHeight { crouch: f32, standing: f32 },
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity >= 0.0 {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if self.max_jumps == 0 {
            return Err(ConfigError::MaxJumps);
        }
        if !(0.0..=1.0).contains(&self.air_control) {
            return Err(ConfigError::AirControl(self.air_control));
        }
        if self.eye_height_ratio <= 0.0 || self.eye_height_ratio > 1.0 {
            return Err(ConfigError::EyeHeightRatio(self.eye_height_ratio));
        }

        for (name, value) in [
            ("walk_speed", self.walk_speed),
            ("crouch_speed", self.crouch_speed),
            ("crouch_height", self.crouch_height),
            ("crouch_transition_rate", self.crouch_transition_rate),
            ("sprint_multiplier", self.sprint_multiplier),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("jump_height", self.jump_height),
            ("coyote_time", self.coyote_time),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        Ok(())
    }
}
