// =============================================================================
// On-Balance Volume (OBV)
// =============================================================================
//
// Cumulative running sum of volume, signed by the close-to-close direction:
// volume is added on an up-close, subtracted on a down-close, and the total
// is unchanged when the close is flat. Starts at 0.

/// Compute the OBV series for aligned `closes` and `volumes`.
///
/// Length-preserving; defined from index 0 (no warm-up).
pub fn obv(closes: &[f64], volumes: &[f64]) -> Vec<f64> {
    let n = closes.len();
    let mut out = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }

    let mut total = 0.0;
    out.push(total);

    for i in 1..n {
        if closes[i] > closes[i - 1] {
            total += volumes[i];
        } else if closes[i] < closes[i - 1] {
            total -= volumes[i];
        }
        out.push(total);
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obv_starts_at_zero() {
        let out = obv(&[10.0], &[500.0]);
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn obv_accumulates_signed_volume() {
        let closes = vec![10.0, 11.0, 11.0, 10.0, 12.0];
        let volumes = vec![100.0, 200.0, 300.0, 400.0, 500.0];
        let out = obv(&closes, &volumes);
        // up +200, flat, down -400, up +500
        assert_eq!(out, vec![0.0, 200.0, 200.0, -200.0, 300.0]);
    }

    #[test]
    fn obv_flat_market_stays_zero() {
        let out = obv(&vec![50.0; 10], &vec![100.0; 10]);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn obv_length_matches_input() {
        let closes: Vec<f64> = (0..30).map(|x| (x as f64 * 0.9).sin()).collect();
        let volumes = vec![10.0; 30];
        assert_eq!(obv(&closes, &volumes).len(), 30);
    }

    #[test]
    fn obv_empty_input() {
        assert!(obv(&[], &[]).is_empty());
    }
}
