//! Maps page scroll to the halftone reveal radius.

/// A scroll range over which the dots grow to full size and shrink back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTrigger {
    /// Scroll offset where the transition begins.
    pub start: f64,
    pub distance: f64,
}

impl TransitionTrigger {
    /// Starts when the bottom of a section at `section_bottom` (page
    /// coordinates) meets the bottom of the viewport.
    pub fn at_section_bottom(section_bottom: f64, viewport_height: f64, span: f64) -> Self {
        Self {
            start: section_bottom - viewport_height,
            distance: viewport_height * span,
        }
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.distance <= 0.0 {
            return 0.0;
        }
        ((scroll_y - self.start) / self.distance).clamp(0.0, 1.0)
    }

    /// Eased size factor: 0 at both ends, 1 in the middle.
    pub fn intensity(&self, scroll_y: f64) -> f64 {
        ease_in_out_cubic(yoyo(self.progress(scroll_y)))
    }
}

/// Goes 0 -> 1 over the first half and back to 0 over the second.
pub fn yoyo(t: f64) -> f64 {
    if t <= 0.5 {
        t * 2.0
    } else {
        2.0 - t * 2.0
    }
}

pub fn ease_in_out_cubic(p: f64) -> f64 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        let q = 2.0 * (1.0 - p);
        1.0 - q * q * q / 2.0
    }
}

/// Overlapping transitions take the largest radius.
pub fn reveal_radius(triggers: &[TransitionTrigger], scroll_y: f64, max_radius: f64) -> f64 {
    triggers
        .iter()
        .map(|trigger| trigger.intensity(scroll_y))
        .fold(0.0, f64::max)
        * max_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn trigger_starts_at_section_bottom() {
        let trigger = TransitionTrigger::at_section_bottom(1800.0, 800.0, 0.5);
        assert_eq!(trigger.start, 1000.0);
        assert_eq!(trigger.distance, 400.0);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1000.0, 0.0)]
    #[case(1100.0, 0.5)]
    #[case(1200.0, 1.0)]
    #[case(1300.0, 0.5)]
    #[case(1400.0, 0.0)]
    #[case(5000.0, 0.0)]
    fn intensity_rises_and_falls(#[case] scroll: f64, #[case] expected: f64) {
        let trigger = TransitionTrigger { start: 1000.0, distance: 400.0 };
        assert!(close(trigger.intensity(scroll), expected), "{scroll}: {}", trigger.intensity(scroll));
    }

    #[test]
    fn easing_is_symmetric() {
        for i in 0..=10 {
            let p = f64::from(i) / 10.0;
            assert!(close(ease_in_out_cubic(p) + ease_in_out_cubic(1.0 - p), 1.0));
        }
    }

    #[test]
    fn zero_distance_never_reveals() {
        let trigger = TransitionTrigger { start: 0.0, distance: 0.0 };
        assert_eq!(trigger.intensity(0.0), 0.0);
    }

    #[test]
    fn strongest_trigger_wins() {
        let triggers = [
            TransitionTrigger { start: 0.0, distance: 400.0 },
            TransitionTrigger { start: 100.0, distance: 400.0 },
        ];
        assert!(close(reveal_radius(&triggers, 300.0, 48.0), 48.0));
        assert!(close(reveal_radius(&triggers, 200.0, 48.0), 48.0));
        assert_eq!(reveal_radius(&[], 200.0, 48.0), 0.0);
        assert!(reveal_radius(&triggers, 450.0, 48.0) <= 48.0);
    }
}
