//! Integration-level tests for the `unifyt` facade crate.

use unifyt::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

fn q(magnitude: impl Into<Magnitude>, spec: &str) -> Quantity {
    unifyt::quantity(magnitude, spec).unwrap()
}

#[test]
fn kilometer_to_meter() {
    let m = q(1.0, "kilometer").to(&unifyt::unit("meter").unwrap()).unwrap();
    assert_eq!(m.value(), Some(1000.0));
}

#[test]
fn adding_length_and_time_fails() {
    let err = (&q(1.0, "meter") + &q(1.0, "second")).unwrap_err();
    match err {
        UnitError::Dimensionality {
            operation,
            left,
            right,
            ..
        } => {
            assert_eq!(operation, Operation::Addition);
            assert_eq!(left, "meter");
            assert_eq!(right, "second");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn division_builds_velocity() {
    let v = (q(10.0, "meter") / q(2.0, "second")).unwrap();
    assert_eq!(v.value(), Some(5.0));
    assert!(v.unit().is_compatible_with(&unifyt::unit("meter/second").unwrap()));
    assert!(v.unit().is_compatible_with(&unifyt::unit("mph").unwrap()));
}

#[test]
fn squaring_a_length() {
    let area = q(3.0, "meter").pow(2.0).unwrap();
    assert_eq!(area.value(), Some(9.0));
    assert_eq!(area.dimension().exponent(BaseQuantity::Length), 2.0);
    assert!(area.unit().is_compatible_with(&unifyt::unit("hectare").unwrap()));
}

#[test]
fn addition_keeps_left_unit() {
    let total = (q(1.0, "kilometer") + q(500.0, "meter")).unwrap();
    assert_eq!(total.unit().to_string(), "kilometer");
    assert_relative_eq!(total.value().unwrap(), 1.5);
}

#[test]
fn speed_in_kilometers_per_hour() {
    let v = (q(100.0, "meter") / q(10.0, "second")).unwrap();
    assert_eq!(v.value(), Some(10.0));
    let kmh = v.to_spec("kilometer/hour", UnitRegistry::global()).unwrap();
    assert_relative_eq!(kmh.value().unwrap(), 36.0, max_relative = 1e-12);
}

#[test]
fn derived_units_agree() {
    let registry = UnitRegistry::global();
    let newton = registry.unit("newton").unwrap();
    let composed = registry.unit("kilogram * meter / second^2").unwrap();
    assert_eq!(newton, composed);

    let joule = registry.unit("J").unwrap();
    assert_eq!(joule, registry.unit("N m").unwrap());
    assert_eq!(registry.unit("W").unwrap(), registry.unit("J / s").unwrap());
    assert_eq!(registry.unit("Pa").unwrap(), registry.unit("N / m^2").unwrap());
    assert_eq!(registry.unit("V").unwrap(), registry.unit("W / A").unwrap());
    assert_eq!(registry.unit("ohm").unwrap(), registry.unit("V / A").unwrap());
}

#[test]
fn everyday_conversions() {
    let registry = UnitRegistry::global();
    let cases: &[(f64, &str, &str, f64)] = &[
        (1.0, "mile", "kilometer", 1.609_344),
        (1.0, "inch", "centimeter", 2.54),
        (1.0, "pound", "gram", 453.592_37),
        (1.0, "gallon", "liter", 3.785_411_784),
        (1.0, "day", "hour", 24.0),
        (180.0, "degree", "radian", std::f64::consts::PI),
        (1.0, "atm", "Pa", 101_325.0),
        (1.0, "kWh", "J", 3.6e6),
        (60.0, "mph", "kph", 96.560_64),
        (1.0, "au", "km", 1.495_978_707e8),
    ];
    for &(value, from, to, expected) in cases {
        let converted = registry.quantity(value, from).unwrap().to_spec(to, registry).unwrap();
        assert_relative_eq!(converted.value().unwrap(), expected, max_relative = 1e-9);
    }
}

#[test]
fn array_quantities_broadcast() {
    let d = q([100.0, 200.0, 300.0], "meter");
    let t = q(10.0, "second");
    let v = (&d / &t).unwrap();
    assert_eq!(v.magnitude().iter().collect::<Vec<_>>(), vec![10.0, 20.0, 30.0]);

    let mismatched = q([1.0, 2.0], "meter");
    assert!(matches!(&d + &mismatched, Err(UnitError::Shape { .. })));
}

#[test]
fn ordering_requires_compatible_units() {
    assert!(q(1.0, "kilometer").try_gt(&q(999.0, "meter")).unwrap());
    assert!(q(1.0, "foot").try_lt(&q(1.0, "yard")).unwrap());
    assert!(matches!(
        q(1.0, "meter").try_lt(&q(1.0, "second")),
        Err(UnitError::Dimensionality {
            operation: Operation::Comparison,
            ..
        })
    ));
    assert_ne!(q(1.0, "meter"), q(1.0, "second"));
    assert_eq!(q(1.0, "kilometer"), q(1000.0, "meter"));
}

#[test]
fn unknown_unit_suggests_alternatives() {
    let err = unifyt::unit("kilometr").unwrap_err();
    assert!(err.to_string().contains("kilometer"), "{err}");
}

#[test]
fn parse_errors_report_position() {
    match unifyt::unit("meter / / second") {
        Err(UnitError::Parse { position, .. }) => assert_eq!(position, 8),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn custom_registry_workflow() {
    let mut registry = UnitRegistry::with_builtin();
    registry.define("stadion", "600 foot").unwrap();
    registry.define("sennight", "7 day").unwrap();
    registry.alias("sta", "stadion").unwrap();

    let speed = registry.quantity(1.0, "sta / sennight").unwrap();
    let si = speed.to_spec("meter / second", &registry).unwrap();
    assert_relative_eq!(si.value().unwrap(), 3.023_809_524e-4, max_relative = 1e-9);

    assert!(unifyt::unit("stadion").is_err());
}

#[test]
fn constants_compose() {
    let c = get_constant("c").unwrap();
    let one_year = q(1.0, "julian_year");
    let ly = (&c * &one_year).unwrap();
    let expected = q(1.0, "light_year");
    assert_eq!(ly, expected);
}

#[test]
fn utilities_keep_units() {
    let heights = q([1.5, 1.8, 2.1], "meter");
    let avg = utils::mean(&heights, None).unwrap();
    assert_abs_diff_eq!(avg.value().unwrap(), 1.8, epsilon = 1e-12);
    assert_eq!(avg.unit().to_string(), "meter");
    assert!(utils::isclose(&avg, &q(180.0, "centimeter"), utils::DEFAULT_RTOL, utils::DEFAULT_ATOL));
}

#[test]
fn json_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("g.json");
    let g = get_constant("g_n").unwrap();
    serialization::save_quantity(&g, &path).unwrap();
    let back = serialization::load_quantity(&path, UnitRegistry::global()).unwrap();
    assert_eq!(back, g);
    assert_eq!(back.unit().to_string(), "meter / second^2");
}

#[test]
fn config_driven_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unifyt.toml");
    std::fs::write(
        &path,
        r#"
[registry]
[[registry.units]]
name = "beard_second"
definition = "5 nanometer"

[registry.aliases]
bs = "beard_second"
"#,
    )
    .unwrap();
    let registry = UnifytConfig::from_file(&path).unwrap().build_registry().unwrap();
    let growth = registry.quantity(1.0, "bs").unwrap();
    assert_relative_eq!(
        growth.to_spec("nm", &registry).unwrap().value().unwrap(),
        5.0,
        max_relative = 1e-12
    );
}

#[test]
fn quantities_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Quantity>();
    assert_send_sync::<Unit>();
    assert_send_sync::<UnitRegistry>();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let v = unifyt::quantity(f64::from(i), "km").unwrap();
                v.to(&unifyt::unit("m").unwrap()).unwrap().value()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i as f64 * 1000.0));
    }
}

const LENGTHS: &[&str] = &["meter", "kilometer", "inch", "foot", "mile", "nautical_mile", "angstrom", "au"];

proptest! {
    #[test]
    fn conversion_factors_are_reciprocal(a in 0..LENGTHS.len(), b in 0..LENGTHS.len()) {
        let ua = unifyt::unit(LENGTHS[a]).unwrap();
        let ub = unifyt::unit(LENGTHS[b]).unwrap();
        let forward = ua.conversion_factor_to(&ub).unwrap();
        let backward = ub.conversion_factor_to(&ua).unwrap();
        prop_assert!((forward * backward - 1.0).abs() < 1e-12);
    }

    #[test]
    fn converting_there_and_back(value in -1e6f64..1e6, a in 0..LENGTHS.len(), b in 0..LENGTHS.len()) {
        let registry = UnitRegistry::global();
        let original = registry.quantity(value, LENGTHS[a]).unwrap();
        let back = original
            .to_spec(LENGTHS[b], registry)
            .unwrap()
            .to_spec(LENGTHS[a], registry)
            .unwrap();
        prop_assert!((back.value().unwrap() - value).abs() <= 1e-9 * value.abs().max(1.0));
    }
}
