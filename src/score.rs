// ---------------------------------------------------------------------------
// Design scoring (cost-efficiency ranking of successful designs)
// ---------------------------------------------------------------------------

/// Relative weight of each scoring axis. Defaults to an even 25% split.
#[derive(Debug, Clone)]
pub struct Weights {
    pub absolute_payload: f64,
    pub absolute_dv: f64,
    pub cost_per_kilo: f64,
    pub cost_per_unit_dv: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            absolute_payload: 0.25,
            absolute_dv: 0.25,
            cost_per_kilo: 0.25,
            cost_per_unit_dv: 0.25,
        }
    }
}

/// Normalized point values and the weighted final score for one design.
#[derive(Debug, Clone)]
pub struct ScoreCard {
    pub cost_per_kilo: f64,    // $ per kg of payload
    pub cost_per_unit_dv: f64, // $ per m/s of remaining delta-v
    pub points_absolute_payload: f64,
    pub points_absolute_dv: f64,
    pub points_cost_per_kilo: f64,
    pub points_cost_per_unit_dv: f64,
    pub final_score: f64,
}

/// Score a design that reached SOI exit. `delta_v` is the simulator's
/// remaining delta-v, `payload_mass` is in kg, `cost` in currency units.
/// Each axis is normalized to [0, 1]: payload against 25 t, delta-v
/// against 5000 m/s, cost-per-kg against $20, cost-per-dv against $50
/// (cost axes inverted so cheaper is better).
pub fn score(delta_v: f64, payload_mass: f64, cost: f64, weights: &Weights) -> ScoreCard {
    let cost_per_kilo = cost / payload_mass;
    let cost_per_unit_dv = cost / delta_v;

    let points_absolute_payload = (payload_mass / 25_000.0).min(1.0);
    let points_absolute_dv = (delta_v / 5_000.0).min(1.0);
    let points_cost_per_kilo = 1.0 - (cost_per_kilo / 20.0).min(1.0);
    let points_cost_per_unit_dv = 1.0 - (cost_per_unit_dv / 50.0).min(1.0);

    let final_score = points_absolute_payload * weights.absolute_payload
        + points_absolute_dv * weights.absolute_dv
        + points_cost_per_kilo * weights.cost_per_kilo
        + points_cost_per_unit_dv * weights.cost_per_unit_dv;

    ScoreCard {
        cost_per_kilo,
        cost_per_unit_dv,
        points_absolute_payload,
        points_absolute_dv,
        points_cost_per_kilo,
        points_cost_per_unit_dv,
        final_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_design_scores_as_expected() {
        // 1 t payload, $33k rocket, 3000 m/s left at SOI exit
        let card = score(3_000.0, 1_000.0, 33_000.0, &Weights::default());
        assert!((card.cost_per_kilo - 33.0).abs() < 1e-12);
        assert!((card.cost_per_unit_dv - 11.0).abs() < 1e-12);
        assert!((card.points_absolute_payload - 0.04).abs() < 1e-12);
        assert!((card.points_absolute_dv - 0.6).abs() < 1e-12);
        // $33/kg blows the $20 ceiling entirely
        assert_eq!(card.points_cost_per_kilo, 0.0);
        assert!((card.points_cost_per_unit_dv - 0.78).abs() < 1e-12);
        assert!((card.final_score - 0.355).abs() < 1e-12);
    }

    #[test]
    fn points_are_capped_at_one() {
        let card = score(50_000.0, 100_000.0, 1.0, &Weights::default());
        assert_eq!(card.points_absolute_payload, 1.0);
        assert_eq!(card.points_absolute_dv, 1.0);
        assert!(card.points_cost_per_kilo <= 1.0);
        assert!(card.points_cost_per_unit_dv <= 1.0);
        assert!(card.final_score <= 1.0);
    }

    #[test]
    fn weights_shift_the_final_score() {
        let dv_only = Weights {
            absolute_payload: 0.0,
            absolute_dv: 1.0,
            cost_per_kilo: 0.0,
            cost_per_unit_dv: 0.0,
        };
        let card = score(2_500.0, 1_000.0, 33_000.0, &dv_only);
        assert!((card.final_score - 0.5).abs() < 1e-12);
    }
}
