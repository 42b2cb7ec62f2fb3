use springs::{SimulationConfig, SimulationError};

#[test]
fn defaults_are_valid() {
    assert_eq!(SimulationConfig::default().validate(), Ok(()));
}

#[test]
fn builder_values_are_validated() {
    let cases = [
        (SimulationConfig::default().radius(0.0), "radius"),
        (SimulationConfig::default().friction(1.5), "friction_coefficient"),
        (SimulationConfig::default().bounce_loss(-0.1), "bounce_restitution_loss"),
        (SimulationConfig::default().air_drag(-1.0), "air_drag"),
        (SimulationConfig::default().stiffness_divisor(0.0), "stiffness_divisor"),
        (SimulationConfig::default().mouse_threshold(f64::NAN), "mouse_threshold"),
        (SimulationConfig::default().target_frame_rate(0.0), "target_frame_rate"),
        (SimulationConfig::default().max_adjust(-2.0), "max_adjust"),
    ];
    for (config, expected) in cases {
        match config.validate() {
            Err(SimulationError::InvalidConfig { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected {} to be rejected, got {:?}", expected, other),
        }
    }
}

#[test]
fn errors_describe_themselves() {
    let err = SimulationError::InvalidConfig { field: "air_drag", value: 0.0 };
    assert_eq!(err.to_string(), "invalid value 0 for `air_drag`");
    assert_eq!(
        SimulationError::PointOutOfBounds { index: 4, count: 2 }.to_string(),
        "point index 4 out of bounds (count: 2)"
    );
}
