//! Scripted aimer: picks the lowest-id target and fires at where it
//! believes the target is, with configurable jitter and reaction lag.

use glam::DVec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use aimscope_core::commands::FireInput;
use aimscope_core::state::TargetView;
use aimscope_core::types::CameraBasis;

/// Eye position of the bot's camera.
pub const EYE: DVec3 = DVec3::new(0.0, 1.6, 0.0);

#[derive(Debug, Clone, Copy)]
pub struct BotProfile {
    /// Max horizontal/vertical aim error in scene units.
    pub jitter: f64,
    /// Reaction lag in seconds. Negative values lead the target.
    pub lag: f64,
    /// Constant horizontal pull added to every shot.
    pub pull_x: f64,
}

pub struct Bot {
    profile: BotProfile,
    rng: ChaCha8Rng,
}

impl Bot {
    pub fn new(profile: BotProfile, rng: ChaCha8Rng) -> Self {
        Self { profile, rng }
    }

    /// Point the bot aims at for `target`.
    pub fn aim_point(&mut self, target: &TargetView) -> DVec3 {
        let seen = target.position.as_dvec3() - target.velocity.as_dvec3() * self.profile.lag;
        let j = self.profile.jitter.abs();
        let (jx, jy) = if j > 0.0 {
            (self.rng.gen_range(-j..=j), self.rng.gen_range(-j..=j))
        } else {
            (0.0, 0.0)
        };
        seen + DVec3::new(jx + self.profile.pull_x, jy, 0.0)
    }

    /// Fire input for a shot at the first live target, if any.
    pub fn shoot(&mut self, targets: &[TargetView]) -> Option<FireInput> {
        let target = targets.first()?;
        let aim = self.aim_point(target);
        Some(FireInput::from_camera(&CameraBasis::looking_at(EYE, aim)))
    }
}
