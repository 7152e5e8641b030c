// Ripple model: a small set of expanding circles with periodic radius reset.
// Visual outcomes:
// - Each ripple is a ring growing outward from the center; at the rim it
//   restarts from radius 0 instead of disappearing.
// - With fade on, a ring turns transparent as it approaches the rim.
// - The spawning variant starts with one ring and trickles in new ones once
//   the newest has expanded past `density`, up to a fixed count.
//
// The model is pure state + arithmetic: it is driven by the host calling
// `tick()` on a fixed cadence and read back through `ripples()`/`draw_params()`.

use crate::config::require_positive;
use crate::error::Error;

/// One ripple. Visual: a single ring at `radius`, widening by `speed` per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub radius: f32,
    pub speed: f32,
    pub alpha: u8,
}

impl Ripple {
    fn new(radius: f32, speed: f32) -> Self {
        Self { radius, speed, alpha: 255 }
    }
}

/// Per-ripple values the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawParams {
    pub radius: f32,
    pub stroke_width: f32,
    pub alpha: u8,
}

// Spawn policy for the growing variant: keep at most `target_count` ripples,
// and only add one once the newest has cleared `density` pixels.
struct Spawn {
    density: f32,
    target_count: usize,
}

impl Spawn {
    fn new(max_radius: f32, density: f32) -> Self {
        // Truncating division: a 200px half-width at density 20 gives 10 rings.
        Self { density, target_count: (max_radius / density) as usize }
    }
}

/// Owns the ripple list and advances it deterministically per tick.
/// One writer (the tick driver), one reader (the renderer), same thread.
pub struct RippleAnimator {
    ripples: Vec<Ripple>,
    max_radius: f32,
    stroke_width: f32,
    speed: f32,
    fade: bool,
    spawn: Option<Spawn>,
}

impl RippleAnimator {
    /// Fixed variant: three ripples seeded a third of the radius apart, so the
    /// rings stay evenly staggered forever. No spawning, `max_radius` never
    /// changes.
    pub fn staggered(
        max_radius: f32,
        stroke_width: f32,
        speed: f32,
        fade: bool,
    ) -> Result<Self, Error> {
        require_positive("max radius", max_radius)?;
        require_positive("stroke width", stroke_width)?;
        require_positive("speed", speed)?;

        let ripples = vec![
            Ripple::new(0.0, speed),
            Ripple::new(max_radius / 3.0, speed),
            Ripple::new(max_radius * 2.0 / 3.0, speed),
        ];
        Ok(Self { ripples, max_radius, stroke_width, speed, fade, spawn: None })
    }

    /// Growing variant: one seed ripple; the set fills in over time as rings
    /// clear `density`, capped at `max_radius / density` rings.
    pub fn spawning(
        max_radius: f32,
        stroke_width: f32,
        speed: f32,
        density: f32,
        fade: bool,
    ) -> Result<Self, Error> {
        require_positive("max radius", max_radius)?;
        require_positive("stroke width", stroke_width)?;
        require_positive("speed", speed)?;
        require_positive("density", density)?;

        Ok(Self {
            ripples: vec![Ripple::new(0.0, speed)],
            max_radius,
            stroke_width,
            speed,
            fade,
            spawn: Some(Spawn::new(max_radius, density)),
        })
    }

    /// Advance every ripple by one step, then maybe spawn.
    /// Visual: all rings widen a little; a ring at the rim snaps back to the
    /// center; in the growing variant a new ring may appear at the center.
    pub fn tick(&mut self) {
        for ripple in &mut self.ripples {
            ripple.radius += ripple.speed;
            // Reset at >= so a full cycle of ceil(max_radius/speed) ticks
            // lands back on exactly 0.
            if ripple.radius >= self.max_radius {
                ripple.radius = 0.0;
            }
            if self.fade {
                let alpha = 255.0 - ripple.radius * (255.0 / self.max_radius);
                ripple.alpha = alpha.clamp(0.0, 255.0) as u8;
            }
        }

        if let Some(spawn) = &self.spawn {
            let room = self.ripples.len() < spawn.target_count;
            let cleared = self.ripples.last().is_some_and(|r| r.radius >= spawn.density);
            if room && cleared {
                self.ripples.push(Ripple::new(0.0, self.speed));
            }
        }
    }

    /// What to draw for one ripple this frame. Pure; no state is touched.
    /// Visual: the stroke thins linearly to nothing as the ring nears the rim,
    /// which reads as "fading out" even with alpha off.
    pub fn draw_params(&self, ripple: &Ripple) -> DrawParams {
        let taper = (1.0 - ripple.radius / self.max_radius).max(0.0);
        DrawParams {
            radius: ripple.radius,
            stroke_width: self.stroke_width * taper,
            alpha: if self.fade { ripple.alpha } else { 255 },
        }
    }

    /// Follow a window size change: new rim at `max_radius`, new spawn spacing,
    /// and the ripple list restarts from a single seed ring. Growing variant
    /// only; the staggered variant's radius is a fixed constant.
    pub fn resize(&mut self, max_radius: f32, density: f32) -> Result<(), Error> {
        if self.spawn.is_none() {
            return Err(Error::Config(
                "resize only applies to the spawning variant".into(),
            ));
        }
        require_positive("max radius", max_radius)?;
        require_positive("density", density)?;

        self.max_radius = max_radius;
        self.spawn = Some(Spawn::new(max_radius, density));
        self.ripples.clear();
        self.ripples.push(Ripple::new(0.0, self.speed));
        Ok(())
    }

    /// Ripples in spawn order, which is also draw order.
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Upper bound on the ripple count; None for the staggered variant.
    pub fn target_count(&self) -> Option<usize> {
        self.spawn.as_ref().map(|s| s.target_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // One-ripple harness: density == max_radius gives target_count 1, so the
    // seed ring cycles alone and nothing ever spawns.
    fn solo(max_radius: f32, speed: f32, fade: bool) -> RippleAnimator {
        RippleAnimator::spawning(max_radius, 8.0, speed, max_radius, fade).unwrap()
    }

    #[test]
    fn staggered_seeds_three_rings_a_third_apart() {
        let anim = RippleAnimator::staggered(300.0, 40.0, 3.0, false).unwrap();
        let radii: Vec<f32> = anim.ripples().iter().map(|r| r.radius).collect();
        assert_eq!(radii, vec![0.0, 100.0, 200.0]);
        assert_eq!(anim.target_count(), None);
    }

    #[test]
    fn radius_stays_within_bounds_forever() {
        let mut anim = RippleAnimator::staggered(300.0, 40.0, 3.0, true).unwrap();
        for _ in 0..10_000 {
            anim.tick();
            for r in anim.ripples() {
                assert!(r.radius >= 0.0 && r.radius <= anim.max_radius());
            }
        }
    }

    #[rstest]
    #[case(300.0, 3.0, 100)] // exact division
    #[case(10.0, 3.0, 4)]    // ceil(10/3)
    fn full_cycle_returns_to_exactly_zero(
        #[case] max_radius: f32,
        #[case] speed: f32,
        #[case] cycle_ticks: usize,
    ) {
        let mut anim = solo(max_radius, speed, false);
        for i in 1..cycle_ticks {
            anim.tick();
            assert_ne!(anim.ripples()[0].radius, 0.0, "reset fired early at tick {i}");
        }
        anim.tick();
        assert_eq!(anim.ripples()[0].radius, 0.0);
    }

    #[test]
    fn stroke_width_tapers_monotonically_to_zero() {
        let anim = solo(300.0, 3.0, false);
        let mut last = f32::INFINITY;
        for step in 0..=300 {
            let ripple = Ripple { radius: step as f32, speed: 3.0, alpha: 255 };
            let params = anim.draw_params(&ripple);
            assert!(params.stroke_width <= last);
            last = params.stroke_width;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn spawns_second_ring_once_seed_clears_density() {
        // max 200, density 20, speed 2: cap is 10 rings, second one appears on
        // the tick where the seed reaches radius 20.
        let mut anim = RippleAnimator::spawning(200.0, 8.0, 2.0, 20.0, false).unwrap();
        assert_eq!(anim.target_count(), Some(10));

        for _ in 0..9 {
            anim.tick();
            assert_eq!(anim.ripples().len(), 1);
        }
        anim.tick();
        assert_eq!(anim.ripples().len(), 2);

        let newest = anim.ripples().last().unwrap();
        assert_eq!(newest.radius, 0.0);
        assert_eq!(newest.alpha, 255);
    }

    #[test]
    fn ring_count_never_exceeds_target() {
        let mut anim = RippleAnimator::spawning(200.0, 8.0, 2.0, 20.0, true).unwrap();
        for _ in 0..10_000 {
            anim.tick();
            assert!(anim.ripples().len() <= 10);
        }
        // And the set does actually fill up.
        assert_eq!(anim.ripples().len(), 10);
    }

    #[test]
    fn fade_alpha_strictly_decreases_over_one_cycle() {
        let mut anim = solo(300.0, 3.0, true);
        let mut last_alpha = 255u16;
        // Stop one tick short of the reset so radius only ever increases here.
        for _ in 0..99 {
            anim.tick();
            let alpha = anim.ripples()[0].alpha as u16;
            assert!(alpha < last_alpha);
            last_alpha = alpha;
        }
    }

    #[test]
    fn fade_off_passes_full_alpha_through() {
        let mut anim = solo(300.0, 3.0, false);
        for _ in 0..50 {
            anim.tick();
        }
        let params = anim.draw_params(&anim.ripples()[0]);
        assert_eq!(params.alpha, 255);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f32::NAN)]
    fn resize_rejects_degenerate_density(#[case] density: f32) {
        let mut anim = RippleAnimator::spawning(200.0, 8.0, 2.0, 20.0, false).unwrap();
        assert!(matches!(anim.resize(150.0, density), Err(Error::Config(_))));
    }

    #[test]
    fn resize_restarts_from_a_single_seed_ring() {
        let mut anim = RippleAnimator::spawning(200.0, 8.0, 2.0, 20.0, false).unwrap();
        for _ in 0..500 {
            anim.tick();
        }
        assert!(anim.ripples().len() > 1);

        anim.resize(160.0, 16.0).unwrap();
        assert_eq!(anim.ripples().len(), 1);
        assert_eq!(anim.ripples()[0].radius, 0.0);
        assert_eq!(anim.max_radius(), 160.0);
        assert_eq!(anim.target_count(), Some(10));
    }

    #[test]
    fn resize_is_rejected_on_the_staggered_variant() {
        let mut anim = RippleAnimator::staggered(300.0, 40.0, 3.0, false).unwrap();
        assert!(matches!(anim.resize(150.0, 20.0), Err(Error::Config(_))));
    }

    #[rstest]
    #[case(0.0, 3.0)]   // zero max radius
    #[case(300.0, 0.0)] // zero speed
    #[case(-1.0, 3.0)]
    fn constructors_reject_non_positive_inputs(#[case] max_radius: f32, #[case] speed: f32) {
        assert!(RippleAnimator::staggered(max_radius, 40.0, speed, false).is_err());
        assert!(RippleAnimator::spawning(max_radius, 8.0, speed, 10.0, false).is_err());
    }
}
