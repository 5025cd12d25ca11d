//! Hero Starfield

/// One twinkling dot in the hero background
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Percent of the container width
    pub left: f64,
    /// Percent of the container height
    pub top: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay_s, self.duration_s
        )
    }
}

/// Scatter `count` stars; `random` must return values in [0, 1)
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left: random() * 100.0,
            top: random() * 100.0,
            delay_s: random() * 2.0,
            duration_s: random() * 3.0 + 2.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_stays_in_bounds() {
        // Deterministic sequence sweeping [0, 1)
        let mut n = 0u32;
        let stars = scatter(50, || {
            n = (n + 37) % 100;
            n as f64 / 100.0
        });

        assert_eq!(stars.len(), 50);
        for star in &stars {
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.0..100.0).contains(&star.top));
            assert!((0.0..2.0).contains(&star.delay_s));
            assert!((2.0..5.0).contains(&star.duration_s));
        }
    }

    #[test]
    fn test_style() {
        let star = Star { left: 12.5, top: 50.0, delay_s: 1.0, duration_s: 3.25 };
        assert_eq!(
            star.style(),
            "left: 12.50%; top: 50.00%; animation-delay: 1.00s; animation-duration: 3.25s;"
        );
    }
}
