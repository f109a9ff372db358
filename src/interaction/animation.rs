use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

use super::{TransitionDecision, TransitionRequest};

const CRITICAL_DAMPING_EPSILON: f64 = 1e-6;

/// Easing applied to fixed-duration transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Eased progress for `t` in `[0, 1]` (clamped).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    fn derivative(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => 1.0,
            Self::EaseOutCubic => 3.0 * (1.0 - t).powi(2),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    12.0 * t * t
                } else {
                    3.0 * (-2.0 * t + 2.0).powi(2)
                }
            }
        }
    }
}

/// Damped spring tuning. Time is measured in seconds, distances in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Settled once every axis is closer than this to the target...
    pub rest_displacement_px: f64,
    /// ...and slower than this.
    pub rest_velocity_px_per_sec: f64,
    /// Hard stop for very soft springs.
    pub max_duration_ms: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
            mass: 1.0,
            rest_displacement_px: 0.01,
            rest_velocity_px_per_sec: 0.01,
            max_duration_ms: 10_000.0,
        }
    }
}

impl SpringParams {
    /// Displacement from target and velocity after `t` seconds, starting from
    /// displacement `x0` and velocity `v0`.
    fn state_at(self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());

        if zeta < 1.0 - CRITICAL_DAMPING_EPSILON {
            let decay_rate = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + decay_rate * x0) / omega_d;
            let decay = (-decay_rate * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * (x0 * cos + b * sin);
            let v = decay
                * ((b * omega_d - decay_rate * x0) * cos - (decay_rate * b + omega_d * x0) * sin);
            (x, v)
        } else if zeta > 1.0 + CRITICAL_DAMPING_EPSILON {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        } else {
            let b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = decay * (x0 + b * t);
            (x, decay * (b - omega * (x0 + b * t)))
        }
    }
}

/// Curve used for `ANIMATE` transitions. `JUMP` ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransitionConfig {
    Timing { duration_ms: f64, easing: Easing },
    Spring(SpringParams),
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::Spring(SpringParams::default())
    }
}

/// One sampled animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSample {
    pub position: ScreenPoint,
    /// Pixels per second on each axis.
    pub velocity: (f64, f64),
    pub finished: bool,
}

/// In-flight interpolation from `from` to `to`, started at `start_ms`.
///
/// Sampling is pure: the same `now_ms` always yields the same sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeaconAnimation {
    from: ScreenPoint,
    to: ScreenPoint,
    start_ms: f64,
    curve: TransitionConfig,
    initial_velocity: (f64, f64),
}

impl BeaconAnimation {
    #[must_use]
    pub fn new(from: ScreenPoint, to: ScreenPoint, start_ms: f64, curve: TransitionConfig) -> Self {
        Self {
            from,
            to,
            start_ms,
            curve,
            initial_velocity: (0.0, 0.0),
        }
    }

    /// Carries momentum into a spring. Timing curves always start at rest.
    #[must_use]
    pub fn with_initial_velocity(mut self, velocity: (f64, f64)) -> Self {
        self.initial_velocity = velocity;
        self
    }

    #[must_use]
    pub fn from(&self) -> ScreenPoint {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> ScreenPoint {
        self.to
    }

    #[must_use]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    #[must_use]
    pub fn curve(&self) -> TransitionConfig {
        self.curve
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> AnimationSample {
        let elapsed_ms = (now_ms - self.start_ms).max(0.0);
        let settled = AnimationSample {
            position: self.to,
            velocity: (0.0, 0.0),
            finished: true,
        };

        match self.curve {
            TransitionConfig::Timing {
                duration_ms,
                easing,
            } => {
                if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
                    return settled;
                }
                let t = elapsed_ms / duration_ms;
                let rate = easing.derivative(t) / (duration_ms / 1_000.0);
                AnimationSample {
                    position: self.from.lerp(self.to, easing.apply(t)),
                    velocity: (
                        (self.to.x - self.from.x) * rate,
                        (self.to.y - self.from.y) * rate,
                    ),
                    finished: false,
                }
            }
            TransitionConfig::Spring(params) => {
                if elapsed_ms >= params.max_duration_ms {
                    return settled;
                }
                let t = elapsed_ms / 1_000.0;
                let (dx, vx) =
                    params.state_at(self.from.x - self.to.x, self.initial_velocity.0, t);
                let (dy, vy) =
                    params.state_at(self.from.y - self.to.y, self.initial_velocity.1, t);
                let at_rest = dx.abs() <= params.rest_displacement_px
                    && dy.abs() <= params.rest_displacement_px
                    && vx.abs() <= params.rest_velocity_px_per_sec
                    && vy.abs() <= params.rest_velocity_px_per_sec;
                if at_rest {
                    return settled;
                }
                AnimationSample {
                    position: ScreenPoint::new(self.to.x + dx, self.to.y + dy),
                    velocity: (vx, vy),
                    finished: false,
                }
            }
        }
    }
}

/// Owns the beacon's animatable position.
///
/// Every applied request supersedes whatever was in flight; a new animation
/// starts from the interpolated position at the time of the request, never
/// from a stale origin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionDriver {
    config: TransitionConfig,
    position: Option<ScreenPoint>,
    animation: Option<BeaconAnimation>,
    last_decision: Option<TransitionDecision>,
}

impl TransitionDriver {
    #[must_use]
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Applies to animations started after the call.
    pub fn set_config(&mut self, config: TransitionConfig) {
        self.config = config;
    }

    /// Position as of the last apply/sample.
    #[must_use]
    pub fn position(&self) -> Option<ScreenPoint> {
        self.position
    }

    #[must_use]
    pub fn animation(&self) -> Option<&BeaconAnimation> {
        self.animation.as_ref()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn last_decision(&self) -> Option<TransitionDecision> {
        self.last_decision
    }

    /// Applies the policy decision for `request` and returns the decision that
    /// took effect. `ANIMATE` without a current position degrades to `JUMP`.
    pub fn apply(&mut self, request: &TransitionRequest, now_ms: f64) -> TransitionDecision {
        let origin = match &self.animation {
            Some(animation) => {
                let sample = animation.sample(now_ms);
                Some((sample.position, sample.velocity))
            }
            None => self.position.map(|position| (position, (0.0, 0.0))),
        };

        let decision = match (request.decision(), origin) {
            (TransitionDecision::Animate, Some((position, velocity))) => {
                self.animation = Some(
                    BeaconAnimation::new(position, request.to, now_ms, self.config)
                        .with_initial_velocity(velocity),
                );
                self.position = Some(position);
                TransitionDecision::Animate
            }
            _ => {
                self.animation = None;
                self.position = Some(request.to);
                TransitionDecision::Jump
            }
        };

        self.last_decision = Some(decision);
        decision
    }

    /// Samples the in-flight animation, retiring it once settled.
    pub fn sample(&mut self, now_ms: f64) -> Option<ScreenPoint> {
        if let Some(animation) = self.animation {
            let sample = animation.sample(now_ms);
            self.position = Some(sample.position);
            if sample.finished {
                self.animation = None;
            }
        }
        self.position
    }

    /// Drops the position entirely; the next `ANIMATE` degrades to `JUMP`.
    pub fn hide(&mut self) {
        self.position = None;
        self.animation = None;
    }

    pub fn reset(&mut self) {
        self.hide();
        self.last_decision = None;
    }
}
