//! Smooth viewport scrolling
//!
//! The viewport position animates toward its target with an ease-out curve
//! instead of jumping, and rapid key presses within one frame are batched
//! into a single retargeted animation. The caller passes the clock in, so
//! animations are deterministic under test.

use std::time::{Duration, Instant};

use folio_core::config::UiConfig;

/// Acceleration curve mapping progress [0, 1] to eased progress [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Cubic,
    EaseOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Cubic => {
                // f(t) = 1 - (1-t)^3
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseOut => {
                // f(t) = 1 - 2^(-10t)
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

#[inline]
fn lerp_u32(from: u32, to: u32, t: f64) -> u32 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u32
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u32,
    to: u32,
}

/// Animates the viewport scroll offset in page units
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    current: u32,
    pending_delta: i64,
    smooth: bool,
    duration: Duration,
    easing: Easing,
}

impl ScrollAnimator {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            animation: None,
            current: 0,
            pending_delta: 0,
            smooth: config.smooth_scroll && config.animation_duration_ms > 0,
            duration: Duration::from_millis(config.animation_duration_ms),
            easing: Easing::default(),
        }
    }

    /// Current interpolated scroll offset
    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Final offset once any active animation lands
    pub fn target(&self) -> u32 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Jump immediately, dropping any animation
    pub fn set(&mut self, offset: u32, max_scroll: u32) {
        self.animation = None;
        self.pending_delta = 0;
        self.current = offset.min(max_scroll);
    }

    /// Animate toward an absolute target (or jump if smooth is off)
    pub fn scroll_to(&mut self, target: u32, max_scroll: u32, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.smooth || target == self.current {
            self.set(target, max_scroll);
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
        });
    }

    /// Accumulate a relative scroll; applied on the next update so rapid
    /// presses within one frame retarget a single animation
    pub fn scroll_by(&mut self, delta: i64) {
        self.pending_delta += delta;
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self, max_scroll: u32, now: Instant) -> u32 {
        if self.pending_delta != 0 {
            let target =
                (self.target() as i64 + self.pending_delta).clamp(0, max_scroll as i64) as u32;
            self.pending_delta = 0;

            if !self.smooth {
                self.current = target;
                self.animation = None;
            } else if target != self.current {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: target,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            let elapsed = now.duration_since(anim.start);
            if elapsed >= self.duration {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                self.current = lerp_u32(anim.from, anim.to, self.easing.apply(t)).min(max_scroll);
            }
        }

        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_config() -> UiConfig {
        UiConfig {
            smooth_scroll: true,
            animation_duration_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_when_smooth_disabled() {
        let config = UiConfig {
            smooth_scroll: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(&config);
        animator.scroll_to(80, 200, Instant::now());
        assert_eq!(animator.current(), 80);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = ScrollAnimator::new(&smooth_config());
        let now = Instant::now();
        animator.scroll_to(100, 200, now);
        assert!(animator.is_animating());

        let mid = animator.update(200, now + Duration::from_millis(50));
        assert!(mid > 0 && mid < 100, "midpoint {mid} out of range");

        let end = animator.update(200, now + Duration::from_millis(100));
        assert_eq!(end, 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_deltas_batch_into_one_target() {
        let mut animator = ScrollAnimator::new(&smooth_config());
        animator.scroll_by(10);
        animator.scroll_by(10);
        animator.scroll_by(-5);

        let now = Instant::now();
        animator.update(200, now);
        assert_eq!(animator.target(), 15);
    }

    #[test]
    fn test_target_clamped_to_bounds() {
        let mut animator = ScrollAnimator::new(&smooth_config());
        let now = Instant::now();

        animator.scroll_by(-50);
        animator.update(200, now);
        assert_eq!(animator.target(), 0);

        animator.scroll_by(10_000);
        animator.update(200, now);
        assert_eq!(animator.target(), 200);
    }

    #[test]
    fn test_easing_monotonic_and_bounded() {
        for easing in [Easing::Linear, Easing::Cubic, Easing::EaseOut] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{easing:?} not monotonic at t={t}");
                assert!((0.0..=1.0).contains(&v));
                prev = v;
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9);
        }
    }
}
