//! The composite cost model.
//!
//! A candidate's score blends three terms: hop count, mean affluence over
//! the whole path, and a flat penalty for a line change on the step being
//! scored. The blend is controlled by the comfort dial.
//!
//! The score is recomputed from the full extended path on every extension
//! (current length, current mean affluence, single-step penalty). It is NOT
//! the parent's score plus a delta, and the penalty never accumulates across
//! earlier changes. Replacing this with an incremental accumulator changes
//! the ranking and is a behavioural regression.

/// Weighting coefficients derived from the comfort dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Per-stop length weight.
    pub alpha: f64,

    /// Crowding weight.
    pub beta: f64,

    /// Flat line-change penalty.
    pub gamma: f64,
}

impl Weights {
    /// Derive the coefficients from the dial.
    ///
    /// Exactly 1 and exactly 10 select hard-coded endpoint sets that the
    /// interpolation curves do not pass through; the discontinuity is
    /// calibrated behaviour, not an artifact. Any other value, in range or
    /// not, goes through the curves.
    pub fn from_dial(dial: f64) -> Self {
        if dial == 1.0 {
            Self {
                alpha: 3.5,
                beta: 0.01,
                gamma: 3.0,
            }
        } else if dial == 10.0 {
            Self {
                alpha: 0.01,
                beta: 6.0,
                gamma: 0.05,
            }
        } else {
            Self {
                alpha: (1.5 - 0.16 * dial).max(0.01),
                beta: 0.05 + 1.7 * ((dial - 1.0) / 9.0).powf(2.1),
                gamma: (1.0 - 0.11 * dial).max(0.01),
            }
        }
    }

    /// Score for extending a path onto one more stop.
    ///
    /// `affluences` holds the affluence sampled at every stop already in the
    /// path (its length is the pre-extension stop count), `succ_affluence`
    /// is the sample at the proposed stop, and `line_changed` says whether
    /// the step leaves the raw line currently ridden.
    pub fn extension_score(
        &self,
        affluences: &[f64],
        succ_affluence: f64,
        line_changed: bool,
    ) -> f64 {
        let penalty = if line_changed { self.gamma } else { 0.0 };
        let stop_count = affluences.len() as f64;
        let mean_affluence =
            (affluences.iter().sum::<f64>() + succ_affluence) / (stop_count + 1.0);
        self.alpha * (stop_count + 1.0) + self.beta * mean_affluence + penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn endpoint_dial_one() {
        let w = Weights::from_dial(1.0);
        assert_eq!(w.alpha, 3.5);
        assert_eq!(w.beta, 0.01);
        assert_eq!(w.gamma, 3.0);
    }

    #[test]
    fn endpoint_dial_ten() {
        let w = Weights::from_dial(10.0);
        assert_eq!(w.alpha, 0.01);
        assert_eq!(w.beta, 6.0);
        assert_eq!(w.gamma, 0.05);
    }

    #[test]
    fn endpoints_differ_from_curves() {
        // The curves evaluated at the endpoints give different values than
        // the hard-coded sets; the jump is intentional.
        let near_one = Weights::from_dial(1.0 + 1e-9);
        assert!(!close(near_one.alpha, 3.5));
        assert!(!close(near_one.gamma, 3.0));

        let near_ten = Weights::from_dial(10.0 - 1e-9);
        assert!(!close(near_ten.beta, 6.0));
    }

    #[test]
    fn curve_at_dial_five() {
        let w = Weights::from_dial(5.0);
        assert!(close(w.alpha, 1.5 - 0.16 * 5.0));
        assert!(close(w.beta, 0.05 + 1.7 * (4.0_f64 / 9.0).powf(2.1)));
        assert!(close(w.gamma, 1.0 - 0.11 * 5.0));
    }

    #[test]
    fn alpha_and_gamma_floor_at_high_dial() {
        // Beyond the nominal range the linear terms would go negative; the
        // floor keeps them at 0.01.
        let w = Weights::from_dial(12.0);
        assert_eq!(w.alpha, 0.01);
        assert_eq!(w.gamma, 0.01);
    }

    #[test]
    fn score_without_change() {
        let w = Weights::from_dial(1.0);
        // One-stop path at affluence 0.2, extending to a 0.2 stop on the
        // same line: 3.5 * 2 + 0.01 * 0.2 + 0.
        let score = w.extension_score(&[0.2], 0.2, false);
        assert!(close(score, 3.5 * 2.0 + 0.01 * 0.2));
    }

    #[test]
    fn score_with_change_adds_flat_gamma() {
        let w = Weights::from_dial(1.0);
        let without = w.extension_score(&[0.2, 0.4], 0.3, false);
        let with = w.extension_score(&[0.2, 0.4], 0.3, true);
        assert!(close(with - without, 3.0));
    }

    #[test]
    fn mean_affluence_covers_whole_path() {
        let w = Weights {
            alpha: 0.0,
            beta: 1.0,
            gamma: 0.0,
        };
        // With only the crowding term, the score is the mean over the
        // extended path.
        let score = w.extension_score(&[0.1, 0.5], 0.9, false);
        assert!(close(score, (0.1 + 0.5 + 0.9) / 3.0));
    }
}
