/// Placement and timing of one floating background particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleSpec {
    /// Draws a particle from `random`, which yields values in `[0, 1)`.
    pub fn sample(random: &mut impl FnMut() -> f64) -> Self {
        let mut between = |low: f64, high: f64| low + random().clamp(0.0, 1.0) * (high - low);
        Self {
            left_pct: between(0.0, 100.0),
            top_pct: between(0.0, 100.0),
            size_px: between(2.0, 6.0),
            delay_s: between(0.0, 15.0),
            duration_s: between(10.0, 25.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.delay_s, self.duration_s
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range() {
        let mut seed = 0.0_f64;
        let mut random = || {
            seed = (seed + 0.37) % 1.0;
            seed
        };
        for _ in 0..50 {
            let p = ParticleSpec::sample(&mut random);
            assert!((0.0..=100.0).contains(&p.left_pct));
            assert!((0.0..=100.0).contains(&p.top_pct));
            assert!((2.0..=6.0).contains(&p.size_px));
            assert!((0.0..=15.0).contains(&p.delay_s));
            assert!((10.0..=25.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn style_uses_sampled_values() {
        let p = ParticleSpec::sample(&mut || 0.5);
        assert_eq!(
            p.style(),
            "left: 50.00%; top: 50.00%; width: 4.0px; height: 4.0px; animation-delay: 7.50s; animation-duration: 17.50s;"
        );
    }
}
