// CSS-style cubic-bezier timing curves.
// Visual: controls how a tile speeds up and slows down along its orbit and
// how quickly entrance/scatter fades settle.

/// Curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// cubic-bezier(0.42, 0, 0.58, 1)
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
/// cubic-bezier(0, 0, 0.58, 1)
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    // B(t) for one axis with endpoints fixed at 0 and 1.
    #[inline]
    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        ((a * t + b) * t + c) * t
    }

    #[inline]
    fn slope(p1: f64, p2: f64, t: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Parameter t whose x equals `x`: Newton first, bisection if it stalls.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while hi - lo > 1e-7 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x { lo = t; } else { hi = t; }
            t = 0.5 * (lo + hi);
        }
        t
    }

    /// Eased progress for linear progress `x`, clamped to [0,1].
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// One-shot tween: holds `from` until `delay`, then eases to `to` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub delay: f64,
    pub duration: f64,
    pub curve: CubicBezier,
}

impl Tween {
    pub fn value_at(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || local >= self.duration {
            return self.to;
        }
        let k = self.curve.ease(local / self.duration);
        self.from + (self.to - self.from) * k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_symmetry() {
        assert_eq!(EASE_IN_OUT.ease(0.0), 0.0);
        assert_eq!(EASE_IN_OUT.ease(1.0), 1.0);
        assert!((EASE_IN_OUT.ease(0.5) - 0.5).abs() < 1e-6);
        let a = EASE_IN_OUT.ease(0.2);
        let b = EASE_IN_OUT.ease(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
        assert!(a < 0.2);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(EASE_OUT.ease(0.25) > 0.25);
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = EASE_OUT.ease(i as f64 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn tween_holds_then_settles() {
        let t = Tween { from: 0.0, to: 1.0, delay: 0.35, duration: 1.0, curve: EASE_OUT };
        assert_eq!(t.value_at(0.0), 0.0);
        assert_eq!(t.value_at(0.35), 0.0);
        assert!(t.value_at(0.85) > 0.5);
        assert_eq!(t.value_at(1.35), 1.0);
        assert_eq!(t.value_at(10.0), 1.0);
    }
}
