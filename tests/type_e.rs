use approx::assert_relative_eq;
use proptest::prelude::*;

use thermo::configuration::Configuration;
use thermo::temperature::unit::{
    Celsius,
    Kelvin,
    ZERO_CELSIUS_IN_KELVIN
};
use thermo::thermocouple::thermocouple::Thermocouple;
use thermo::thermocouple::typee::TYPE_E;

// NIST ITS-90 type E reference values, reference junction at 0 °C (mV).
const NIST_TYPE_E: [(f64, f64); 7] = [
    (-200.0, -8.825),
    (-100.0, -5.237),
    (100.0, 6.319),
    (250.0, 17.181),
    (400.0, 28.946),
    (500.0, 37.005),
    (1000.0, 76.373),
];

// NIST ITS-90 type E reference function E(t) in mV, t in °C. Coefficients c1..cn.
const NIST_E_BELOW_ZERO: [f64; 13] = [
    5.8665508708E-02, 4.5410977124E-05, -7.7998048686E-07, -2.5800160843E-08,
    -5.9452583057E-10, -9.3214058667E-12, -1.0287605534E-13, -8.0370123621E-16,
    -4.3979497391E-18, -1.6414776355E-20, -3.9673619516E-23, -5.5827328721E-26,
    -3.4657842013E-29,
];
const NIST_E_ABOVE_ZERO: [f64; 10] = [
    5.8665508710E-02, 4.5032275582E-05, 2.8908407212E-08, -3.3056896652E-10,
    6.5024403270E-13, -1.9197495504E-16, -1.2536600497E-18, 2.1489217569E-21,
    -1.4388041782E-24, 3.5960899481E-28,
];

fn nist_voltage(temp: f64) -> f64 {
    let coefficients: &[f64] = if temp < 0.0 { &NIST_E_BELOW_ZERO } else { &NIST_E_ABOVE_ZERO };
    temp * coefficients.iter().rev().fold(0.0, |acc, c| acc * temp + c)
}

fn type_e() -> Thermocouple<'static, Celsius> {
    Thermocouple::new(&TYPE_E)
}

#[test]
fn matches_nist_reference_table() {
    let tc = type_e();
    for (temp, voltage) in NIST_TYPE_E {
        assert_relative_eq!(tc.temperature(voltage, 0.0), temp, epsilon = 0.05);
        assert_relative_eq!(tc.try_temperature(voltage, 0.0).unwrap(), temp, epsilon = 0.05);
    }
}

#[test]
fn reference_function_reproduces_table_values() {
    for (temp, voltage) in NIST_TYPE_E {
        assert_relative_eq!(nist_voltage(temp), voltage, epsilon = 0.001);
    }
}

#[test]
fn compensates_warm_cold_junction() {
    let tc = type_e();
    // E(T) - E(Tcj) is what the instrument sees.
    assert_relative_eq!(tc.temperature(6.319 - 1.495, 25.0), 100.0, epsilon = 0.05);
    assert_relative_eq!(tc.temperature(37.005 - 1.495, 25.0), 500.0, epsilon = 0.05);
    assert_relative_eq!(tc.temperature(-5.237 - 1.192, 20.0), -100.0, epsilon = 0.05);
    assert_relative_eq!(tc.temperature_at_default_cold_junction(6.319 - 1.192), 100.0, epsilon = 0.05);
}

#[test]
fn reference_points_are_exact() {
    let tc = type_e();
    assert_eq!(tc.cold_temp_to_volt(TYPE_E.cold().t0), TYPE_E.cold().v0);
    for segment in TYPE_E.hot().iter().filter(|segment| segment.is_set()) {
        assert_eq!(segment.temperature_at(segment.v0), segment.t0);
        assert_eq!(tc.hot_volt_to_temp(segment.v0), segment.t0);
    }
}

#[test]
fn kelvin_engine_agrees_with_celsius_engine() {
    let celsius = type_e();
    let kelvin: Thermocouple<Kelvin> = Thermocouple::new(&TYPE_E);
    for voltage in [-6.0, 0.5, 12.0, 40.0, 70.0] {
        let expected = Celsius::new(celsius.temperature(voltage, 20.0)).to_kelvin().value();
        assert_relative_eq!(
            kelvin.temperature(voltage, 20.0 + ZERO_CELSIUS_IN_KELVIN),
            expected,
            epsilon = 1e-9
        );
        assert_relative_eq!(kelvin.temperature_at_default_cold_junction(voltage), expected, epsilon = 1e-9);
    }
}

#[test]
fn beyond_top_segment_extrapolates() {
    let tc = type_e();
    assert_eq!(tc.segment_from_volt(90.0), TYPE_E.hot()[3]);
    assert_eq!(tc.segment_from_temp(1200.0), TYPE_E.hot()[3]);
    let temp = tc.try_temperature(90.0, 20.0).unwrap();
    assert!(temp > 1000.0);
}

#[test]
fn engine_works_on_configured_tables() {
    let config = Configuration::new();
    let table = config.table("E").unwrap();
    let tc: Thermocouple = Thermocouple::new(&table);
    assert_eq!(tc.table(), &TYPE_E);
    assert_eq!(tc.temperature(6.319, 0.0), type_e().temperature(6.319, 0.0));
}

#[test]
fn engine_is_usable_from_many_threads() {
    let tc = type_e();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || tc.temperature(10.0 * i as f64, 20.0)))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), tc.temperature(10.0 * i as f64, 20.0));
    }
}

proptest! {
    #[test]
    fn forward_then_inverse_round_trips(temp in -20.0f64..70.0) {
        let tc = type_e();
        let voltage = tc.cold_temp_to_volt(temp);
        prop_assert!((tc.hot_volt_to_temp(voltage) - temp).abs() < 0.02);
    }

    #[test]
    fn every_segment_inverts_the_reference_function(index in 0usize..4, fraction in 0.0f64..=1.0) {
        let tc = type_e();
        let segment = TYPE_E.hot()[index];
        prop_assume!(segment.is_set());
        let temp = segment.min_temp + fraction * (segment.max_temp - segment.min_temp);
        let recovered = tc.hot_volt_to_temp(nist_voltage(temp));
        prop_assert!((recovered - temp).abs() < 0.02, "{} °C came back as {}", temp, recovered);
    }

    #[test]
    fn temperature_selection_is_monotonic(a in -200.0f64..1000.0, b in -200.0f64..1000.0) {
        let tc = type_e();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let index_low = tc.segment_index_where(low, Thermocouple::<Celsius>::within_max_temp);
        let index_high = tc.segment_index_where(high, Thermocouple::<Celsius>::within_max_temp);
        prop_assert!(index_low <= index_high);
        prop_assert_eq!(tc.segment_from_temp(low), TYPE_E.hot()[index_low.unwrap()]);
    }

    #[test]
    fn selection_is_monotonic(a in -8.8f64..76.3, b in -8.8f64..76.3) {
        let tc = type_e();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let index_low = tc.segment_index_where(low, Thermocouple::<Celsius>::within_max_volt);
        let index_high = tc.segment_index_where(high, Thermocouple::<Celsius>::within_max_volt);
        prop_assert!(index_low <= index_high);
    }

    #[test]
    fn selected_segment_is_always_calibrated(voltage in -50.0f64..150.0, temp in -300.0f64..1500.0) {
        let tc = type_e();
        prop_assert!(tc.segment_from_volt(voltage).is_set());
        prop_assert!(tc.segment_from_temp(temp).is_set());
    }

    #[test]
    fn checked_and_plain_agree_in_range(voltage in -8.0f64..75.0, cold in -20.0f64..70.0) {
        let tc = type_e();
        prop_assert_eq!(tc.try_temperature(voltage, cold), Ok(tc.temperature(voltage, cold)));
    }
}
