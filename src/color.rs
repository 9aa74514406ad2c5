use std::f64::consts::TAU;

use num_traits::{clamp, one, zero};

/// A single RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Sample {
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Sample { red, green, blue }
    }

    pub fn iter_rgb(&self) -> impl Iterator<Item = f64> {
        [self.red, self.green, self.blue].into_iter()
    }

    pub fn map<S>(self, mut f: impl FnMut(f64) -> S) -> [S; 3] {
        [f(self.red), f(self.green), f(self.blue)]
    }
}

fn unit(x: f64) -> f64 {
    clamp(x, zero(), one())
}

/// Evaluate the cubehelix scheme at `position` (clamped to `[0, 1]`).
///
/// `start` is the hue direction at the black end (1 = red, 2 = green,
/// 3 = blue), `rotations` the number of R -> G -> B turns over the map,
/// `hue` the saturation of the deviation from gray and `gamma` the
/// exponent applied to the intensity before the deviation is computed.
pub fn evaluate(position: f64, start: f64, rotations: f64, hue: f64, gamma: f64) -> Sample {
    let x = unit(position);
    let angle = TAU * (start / 3.0 + 1.0 + rotations * x);
    let x = x.powf(gamma);
    let amplitude = hue * x * (1.0 - x) / 2.0;
    let (sin, cos) = angle.sin_cos();

    Sample {
        red: unit(x + amplitude * (-0.14861 * cos + 1.78277 * sin)),
        green: unit(x + amplitude * (-0.29227 * cos - 0.90649 * sin)),
        blue: unit(x + amplitude * (1.97294 * cos)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: Sample, b: Sample) -> bool {
        a.iter_rgb().zip(b.iter_rgb()).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn endpoints_are_black_and_white() {
        for &hue in &[0.0, 1.0, 2.5] {
            for &rot in &[-1.5, 0.0, 1.5] {
                assert!(close(evaluate(0.0, 0.5, rot, hue, 1.0), Sample::rgb(0., 0., 0.)));
                assert!(close(evaluate(1.0, 0.5, rot, hue, 1.0), Sample::rgb(1., 1., 1.)));
            }
        }
    }

    #[test]
    fn midpoint_matches_formula() {
        let s = evaluate(0.5, 0.5, -1.5, 1.0, 1.0);
        assert!((s.red - 0.6275106294070506).abs() < EPS);
        assert!((s.green - 0.4749835305955098).abs() < EPS);
        assert!((s.blue - 0.28642297998219113).abs() < EPS);
    }

    #[test]
    fn position_is_clamped() {
        assert_eq!(evaluate(-3.0, 1.0, 0.7, 1.2, 0.8), evaluate(0.0, 1.0, 0.7, 1.2, 0.8));
        assert_eq!(evaluate(7.5, 1.0, 0.7, 1.2, 0.8), evaluate(1.0, 1.0, 0.7, 1.2, 0.8));
    }

    #[test]
    fn channels_stay_in_unit_range() {
        for i in 0 ..= 50 {
            let x = i as f64 / 50.0;
            for &start in &[0.0, 1.0, 2.0, 3.0] {
                for &rot in &[-7.0, -1.5, 0.0, 0.5, 1.5, 12.0] {
                    for &hue in &[0.0, 1.0, 3.0] {
                        for &gamma in &[0.5, 1.0, 2.2] {
                            let s = evaluate(x, start, rot, hue, gamma);
                            assert!(s.iter_rgb().all(|c| (0.0 ..= 1.0).contains(&c)), "{:?}", s);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn high_hue_clips() {
        let s = evaluate(0.5, 0.5, -1.5, 3.0, 1.0);
        assert_eq!(s.blue, 0.0);
        assert!(s.red < 1.0 && s.green > 0.0);
    }

    #[test]
    fn zero_hue_is_gray() {
        let s = evaluate(0.3, 2.0, 1.0, 0.0, 1.0);
        assert_eq!(s.red, s.green);
        assert_eq!(s.green, s.blue);
        assert!((s.red - 0.3).abs() < EPS);
    }
}
