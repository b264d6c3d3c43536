use glam::Vec2;
use strider::{Buttons, InputSample};

/// Timed input script walking the actor through every movement feature:
/// walk, sprint, jump, double jump, a pitch sweep, a crouch passage through
/// the arena tunnel (with the crouch released under the roof), and auto-run
/// out the far side.
pub struct DemoScript;

impl DemoScript {
    pub const DURATION: f32 = 21.0;

    pub fn new() -> Self {
        Self
    }

    pub fn phase_name(&self, t: f32) -> &'static str {
        match t {
            t if t < 1.0 => "settle",
            t if t < 3.0 => "walk",
            t if t < 5.0 => "sprint",
            t if t < 6.5 => "jump",
            t if t < 8.0 => "double jump",
            t if t < 9.0 => "look sweep",
            t if t < 15.0 => "crouch walk",
            t if t < 16.0 => "forced crouch",
            t if t < 20.0 => "auto run",
            _ => "rest",
        }
    }

    pub fn sample(&self, t: f32) -> InputSample {
        let mut sample = InputSample::default();

        match t {
            t if t < 1.0 => {}
            t if t < 3.0 => {
                sample.move_axes = Vec2::new(0.0, 1.0);
            }
            t if t < 5.0 => {
                sample.move_axes = Vec2::new(0.0, 1.0);
                sample.buttons |= Buttons::SPRINT;
            }
            t if t < 6.5 => {
                // Vertical hop in place.
                if t < 5.2 {
                    sample.buttons |= Buttons::JUMP;
                }
            }
            t if t < 8.0 => {
                if t < 6.7 || (6.9..7.1).contains(&t) {
                    sample.buttons |= Buttons::JUMP;
                }
            }
            t if t < 9.0 => {
                // Pitch down then back up; yaw stays on the tunnel line.
                let dir = if t < 8.5 { 20.0 } else { -20.0 };
                sample.look_delta = Vec2::new(0.0, dir);
            }
            t if t < 15.0 => {
                sample.move_axes = Vec2::new(0.0, 1.0);
                sample.buttons |= Buttons::CROUCH;
            }
            t if t < 16.0 => {
                // Crouch released under the roof: the ceiling keeps the
                // capsule low until the far side.
                sample.move_axes = Vec2::new(0.0, 1.0);
            }
            t if t < 20.0 => {
                if t < 16.2 {
                    sample.buttons |= Buttons::AUTO_RUN;
                }
            }
            t => {
                if t < 20.2 {
                    sample.buttons |= Buttons::AUTO_RUN;
                }
            }
        }

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cover_full_duration() {
        let script = DemoScript::new();
        assert_eq!(script.phase_name(0.0), "settle");
        assert_eq!(script.phase_name(4.0), "sprint");
        assert_eq!(script.phase_name(DemoScript::DURATION), "rest");
    }

    #[test]
    fn crouch_phase_holds_crouch_button() {
        let script = DemoScript::new();
        assert!(script.sample(10.0).buttons.contains(Buttons::CROUCH));
        assert!(!script.sample(15.5).buttons.contains(Buttons::CROUCH));
    }

    #[test]
    fn auto_run_pulse_is_short() {
        let script = DemoScript::new();
        assert!(script.sample(16.1).buttons.contains(Buttons::AUTO_RUN));
        assert!(!script.sample(17.0).buttons.contains(Buttons::AUTO_RUN));
    }
}
