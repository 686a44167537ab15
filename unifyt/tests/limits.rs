//! Process-wide limits installed from configuration.
//!
//! Lives in its own test binary because installing limits affects every later operation in the process.

use unifyt::{Limits, Operation, UnifytConfig, UnitError};

#[test]
fn configured_limits_apply_to_every_operation() {
    let config = UnifytConfig::from_toml_str("[limits]\nmax_magnitude = 1e6").unwrap();
    assert!(config.install_limits().unwrap());
    assert_eq!(Limits::current().max_magnitude(), 1e6);

    // Second installation is refused and the first one stays.
    let looser = UnifytConfig::from_toml_str("[limits]\nmax_magnitude = 1e9").unwrap();
    assert!(!looser.install_limits().unwrap());
    assert_eq!(Limits::current().max_magnitude(), 1e6);

    assert!(matches!(
        unifyt::quantity(2e6, "meter"),
        Err(UnitError::Overflow {
            operation: Operation::Construction,
            ..
        })
    ));

    let km = unifyt::quantity(2_000.0, "kilometer").unwrap();
    assert!(matches!(
        km.to(&unifyt::unit("meter").unwrap()),
        Err(UnitError::Overflow {
            operation: Operation::Conversion,
            ..
        })
    ));

    let side = unifyt::quantity(2_000.0, "meter").unwrap();
    assert!(matches!(
        &side * &side,
        Err(UnitError::Overflow {
            operation: Operation::Multiplication,
            ..
        })
    ));

    let big = unifyt::quantity([600_000.0, 600_000.0], "meter").unwrap();
    assert!(matches!(
        unifyt::utils::sum(&big, None),
        Err(UnitError::Overflow {
            operation: Operation::Aggregation,
            ..
        })
    ));

    // Explicit limits can still be checked independently of the installed ones.
    let strict = Limits::new(10.0).unwrap();
    assert!(unifyt::quantity(11.0, "meter").unwrap().validate_with(&strict).is_err());
}
