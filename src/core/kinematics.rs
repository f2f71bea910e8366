//! Vertical body physics for the side-scrollers.
//!
//! One call to [`VerticalBody::step`] is one physics tick: the position moves
//! by the current velocity, then gravity is added to the velocity. A jump
//! replaces the velocity with the impulse before the step, overriding any
//! gravity accumulated so far.

/// Per-game physics tuning, in world units per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyParams {
    /// Velocity change per tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a jump/flap (negative = upward).
    pub impulse: f64,
    /// Largest `y` the body may reach; it is clamped here and stops falling.
    pub floor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalBody {
    /// Top edge of the actor's box.
    pub y: f64,
    /// Rows per tick, positive = downward.
    pub velocity: f64,
}

impl VerticalBody {
    pub fn at_rest(y: f64) -> Self {
        Self { y, velocity: 0.0 }
    }

    pub fn jump(&mut self, params: &BodyParams) {
        self.velocity = params.impulse;
    }

    /// Advance one tick. Returns true if the body ended the tick on the floor.
    pub fn step(&mut self, params: &BodyParams) -> bool {
        self.y += self.velocity;
        self.velocity += params.gravity;
        if self.y >= params.floor {
            self.y = params.floor;
            self.velocity = 0.0;
            return true;
        }
        false
    }

    pub fn is_grounded(&self, params: &BodyParams) -> bool {
        self.y >= params.floor
    }
}

/// Closed-form position after `ticks` steps of free fall from rest at `y0`.
pub fn free_fall_y(y0: f64, params: &BodyParams, ticks: u64) -> f64 {
    let n = ticks as f64;
    (y0 + params.gravity * n * (n - 1.0) / 2.0).min(params.floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: BodyParams = BodyParams {
        gravity: 0.6,
        impulse: -12.0,
        floor: 570.0,
    };

    #[test]
    fn test_free_fall_matches_closed_form() {
        let mut body = VerticalBody::at_rest(100.0);
        for n in 1..=60 {
            body.step(&PARAMS);
            let expected = free_fall_y(100.0, &PARAMS, n);
            assert!(
                (body.y - expected).abs() < 1e-6,
                "tick {n}: {} vs {expected}",
                body.y
            );
        }
    }

    #[test]
    fn test_free_fall_clamps_at_floor() {
        let mut body = VerticalBody::at_rest(500.0);
        let mut landed = false;
        for _ in 0..200 {
            landed = body.step(&PARAMS);
        }
        assert!(landed);
        assert_eq!(body.y, PARAMS.floor);
        assert_eq!(body.velocity, 0.0);
        assert_eq!(free_fall_y(500.0, &PARAMS, 200), PARAMS.floor);
    }

    #[test]
    fn test_jump_climbs_for_twenty_ticks() {
        let start = 300.0;
        let mut body = VerticalBody::at_rest(start);
        body.jump(&PARAMS);

        let mut prev = body.y;
        for tick in 1..=20 {
            body.step(&PARAMS);
            assert!(body.y < prev, "tick {tick} should still climb");
            prev = body.y;
        }

        // Apex: velocity is spent, no movement on tick 21
        body.step(&PARAMS);
        assert!((body.y - prev).abs() < 1e-9);

        // Back at launch height around tick 41, below it from tick 42
        for _ in 22..=41 {
            body.step(&PARAMS);
        }
        assert!((body.y - start).abs() < 1e-6);
        body.step(&PARAMS);
        assert!(body.y > start);
    }

    #[test]
    fn test_jump_overrides_accumulated_gravity() {
        let mut body = VerticalBody::at_rest(200.0);
        for _ in 0..10 {
            body.step(&PARAMS);
        }
        assert!(body.velocity > 0.0);

        body.jump(&PARAMS);
        let before = body.y;
        body.step(&PARAMS);
        assert!((body.y - (before - 12.0)).abs() < 1e-9);
    }

    #[test]
    fn test_grounded() {
        let body = VerticalBody::at_rest(PARAMS.floor);
        assert!(body.is_grounded(&PARAMS));
        assert!(!VerticalBody::at_rest(10.0).is_grounded(&PARAMS));
    }
}
