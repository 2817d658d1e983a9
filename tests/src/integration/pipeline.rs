//! # Pipeline Integration Tests
//!
//! Drives the validator → calculator pipeline directly, without the
//! HTTP layer, confirming the physics properties the service promises:
//! formula identity, monotonicity in distance, linearity in current,
//! and order preservation.

#[cfg(test)]
mod tests {
    use field_gateway::{physics, validation, CalculationRequest, FieldSample};
    use serde_json::json;

    fn run(payload: serde_json::Value) -> Vec<FieldSample> {
        let request = validation::parse_request(&payload).expect("valid payload");
        physics::evaluate(&request).expect("validated inputs compute")
    }

    #[test]
    fn validated_request_always_computes() {
        // The validator guarantees the calculator's domain, so the
        // defensive re-check inside magnetic_field can never fire on
        // this path.
        let samples = run(json!({"I": 3, "distances": [0.5, "1.5", 2]}));
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn formula_identity_over_a_grid() {
        // B = (2×10⁻⁷ · I) / d for every combination.
        for current in [0.5, 1.0, 10.0, 250.0] {
            for distance in [0.01, 0.1, 1.0, 42.0] {
                let samples = run(json!({"I": current, "distances": [distance]}));
                let expected = 2.0e-7 * current / distance;
                assert!((samples[0].field - expected).abs() <= expected * 1e-12);
            }
        }
    }

    #[test]
    fn field_is_monotonic_in_distance() {
        let samples = run(json!({"I": 12, "distances": [0.1, 0.5, 1.0, 5.0, 50.0]}));
        for pair in samples.windows(2) {
            assert!(pair[1].field < pair[0].field);
        }
    }

    #[test]
    fn field_is_linear_in_current() {
        let base = run(json!({"I": 1, "distances": [0.3]}))[0].field;
        let doubled = run(json!({"I": 2, "distances": [0.3]}))[0].field;
        let tenfold = run(json!({"I": 10, "distances": [0.3]}))[0].field;
        assert!((doubled - 2.0 * base).abs() < doubled * 1e-12);
        assert!((tenfold - 10.0 * base).abs() < tenfold * 1e-12);
    }

    #[test]
    fn output_order_matches_input_order() {
        let distances = vec![3.0, 1.0, 2.0, 1.0];
        let request = CalculationRequest {
            current: 5.0,
            distances: distances.clone(),
        };
        let samples = physics::evaluate(&request).unwrap();
        let echoed: Vec<f64> = samples.iter().map(|s| s.distance).collect();
        assert_eq!(echoed, distances);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let payload = json!({"I": 9.81, "distances": [0.25, 0.75]});
        assert_eq!(run(payload.clone()), run(payload));
    }
}
