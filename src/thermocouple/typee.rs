//! Type E (chromel / constantan) rational approximations of the NIST ITS-90
//! reference functions. Voltages in millivolts, temperatures in °C.
//!
//! Inverse fits cover -200 °C to 1000 °C in four segments, the fifth slot is
//! empty. The cold-junction fit covers -20 °C to 70 °C.

use super::coefficient::{
    CoefficientTable,
    ColdSegment,
    HotSegment
};

pub static TYPE_E: CoefficientTable = CoefficientTable::new(
    ColdSegment {
        min_temp: -20.0,
        max_temp: 70.0,
        t0: 25.0,
        v0: 1.4951118,
        p1: 6.0963161603e-02,
        p2: 2.7176609388e-04,
        p3: -6.0038732051e-06,
        p4: -4.3345856037e-09,
        q1: 3.7100280008e-03,
        q2: -1.0100651809e-04,
    },
    [
        HotSegment {
            min_volt: -8.825,
            max_volt: 0.0,
            min_temp: -200.0,
            max_temp: 0.0,
            t0: -100.0003,
            v0: -5.2372,
            p1: 2.2136139041e+01,
            p2: 2.0710396061e+00,
            p3: -4.5190211399e-01,
            p4: -2.3692151175e-02,
            q1: 1.3343805961e-01,
            q2: -1.9361518651e-02,
            q3: -1.8640303304e-03,
        },
        HotSegment {
            min_volt: 0.0,
            max_volt: 17.181,
            min_temp: 0.0,
            max_temp: 250.0,
            t0: 124.9999,
            v0: 8.0312,
            p1: 1.4403266854e+01,
            p2: 2.0636967340e+00,
            p3: 9.2001186726e-02,
            p4: 1.5010015261e-03,
            q1: 1.5080629668e-01,
            q2: 7.2605371460e-03,
            q3: 1.2607768183e-04,
        },
        HotSegment {
            min_volt: 17.181,
            max_volt: 45.093,
            min_temp: 250.0,
            max_temp: 600.0,
            t0: 425.0003,
            v0: 30.9517,
            p1: 1.2439617414e+01,
            p2: 5.0367735540e-03,
            p3: 9.2790068980e-04,
            p4: 1.5273662455e-04,
            q1: 1.3154684221e-03,
            q2: 3.4922120473e-05,
            q3: 1.2486005399e-05,
        },
        HotSegment {
            min_volt: 45.093,
            max_volt: 76.373,
            min_temp: 600.0,
            max_temp: 1000.0,
            t0: 800.0004,
            v0: 61.0174,
            p1: 1.2750314924e+01,
            p2: -1.4622000299e+00,
            p3: 6.1847740010e-02,
            p4: -3.0876267800e-04,
            q1: -1.1574976855e-01,
            q2: 4.9621967761e-03,
            q3: -2.8657794800e-05,
        },
        HotSegment::UNSET,
    ],
);
