pub const PARTICLE_COUNT: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_percent: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub size_px: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; animation-duration: {}s; animation-delay: {}s; width: {}px; height: {}px;",
            self.left_percent, self.duration_s, self.delay_s, self.size_px, self.size_px
        )
    }
}

/// `random` yields values in `[0, 1)`.
pub fn scatter<R: FnMut() -> f64>(count: usize, mut random: R) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left_percent: random() * 100.0,
            duration_s: random() * 15.0 + 10.0,
            delay_s: random() * 5.0,
            size_px: random() * 3.0 + 1.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_in_their_ranges() {
        let mut seed = 0.0_f64;
        let particles = scatter(PARTICLE_COUNT, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((10.0..25.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
            assert!((1.0..4.0).contains(&p.size_px));
        }
    }

    #[test]
    fn style_sets_square_size() {
        let p = Particle { left_percent: 10.0, duration_s: 12.0, delay_s: 1.0, size_px: 2.0 };
        assert_eq!(
            p.style(),
            "left: 10%; animation-duration: 12s; animation-delay: 1s; width: 2px; height: 2px;"
        );
    }
}
