//! Concurrent evaluation of shared curves.

use std::sync::Arc;
use std::thread;

use control_curves::{curves, ControlCurve, Curve, CurveBuilder};

const THREADS: usize = 8;
const SAMPLES: usize = 2000;

fn inputs() -> Vec<f64> {
    (0..=SAMPLES)
        .map(|i| -1.0 + 2.0 * (i as f64) / (SAMPLES as f64))
        .collect()
}

#[test]
fn test_scoped_threads_share_one_curve() {
    let curve = curves::power(5)
        .with_dead_zone(0.05)
        .with_minimum_power(0.12)
        .with_power_multiplier(0.76)
        .build()
        .unwrap();
    let inputs = inputs();
    let expected: Vec<f64> = inputs.iter().map(|&v| curve.get(v)).collect();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                let results: Vec<f64> = inputs.iter().map(|&v| curve.get(v)).collect();
                assert_eq!(results, expected);
            });
        }
    });
}

#[test]
fn test_arc_shared_curve_across_threads() {
    let curve: Arc<Curve> = Arc::new(
        curves::linear()
            .with_dead_zone(0.1)
            .with_minimum_power(0.2)
            .with_power_multiplier(0.8)
            .build()
            .unwrap()
            .into(),
    );
    let expected: Vec<f64> = inputs().iter().map(|&v| curve.get(v)).collect();

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let curve = Arc::clone(&curve);
            thread::spawn(move || inputs().iter().map(|&v| curve.get(v)).collect::<Vec<f64>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
