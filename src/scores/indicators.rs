use crate::input::SensorSample;
use crate::math::stats::{max_abs, mean, population_std_dev, rms, round_to};
use crate::scores::bands::{self, BandTable};
use crate::scores::steps::count_steps;
use crate::scores::{IndicatorResult, IndicatorSet, TestType};

pub const TIME: &str = "Time";
pub const POWER: &str = "Power";
pub const FATIGUE: &str = "Fatigue";
pub const SYMMETRY: &str = "Symmetry";
pub const GAIT_SPEED: &str = "Gait speed";
pub const CADENCE: &str = "Cadence";
pub const BALANCE: &str = "Balance";
pub const TRANSITION: &str = "Transition";

/// Walking distance of the Timed Up and Go course.
pub const TUG_DISTANCE_M: f64 = 3.0;

#[derive(Debug, Clone, Copy)]
struct TimedSample {
    t_ms: i64,
    norm: f64,
    accel_x: f64,
    accel_z: f64,
    gyro_z: f64,
}

/// Compute the indicator set for one evaluation.
///
/// Returns None when there is not enough usable data: fewer than two samples,
/// an unparsable timestamp, a non-positive elapsed time, or any derived value
/// that is not finite. Samples may arrive in any order.
pub fn compute_indicators(
    samples: &[SensorSample],
    test_type: TestType,
    elapsed_seconds: Option<f64>,
) -> Option<IndicatorSet> {
    if samples.len() < 2 {
        return None;
    }

    let mut timed = Vec::with_capacity(samples.len());
    for s in samples {
        let readings = [s.accel_x, s.accel_y, s.accel_z, s.gyro_x, s.gyro_y, s.gyro_z];
        if readings.iter().any(|v| !v.is_finite()) {
            return None;
        }
        timed.push(TimedSample {
            t_ms: s.timestamp.to_millis()?,
            norm: s.accel_magnitude(),
            accel_x: s.accel_x,
            accel_z: s.accel_z,
            gyro_z: s.gyro_z,
        });
    }
    timed.sort_by_key(|s| s.t_ms);

    let elapsed = match elapsed_seconds {
        Some(e) => e,
        None => timed[timed.len() - 1].t_ms.checked_sub(timed[0].t_ms)? as f64 / 1000.0,
    };
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return None;
    }

    let norm: Vec<f64> = timed.iter().map(|s| s.norm).collect();
    let norm_mean = mean(&norm);
    let power = rms(&norm);
    let fatigue = population_std_dev(&norm);

    let indicators = match test_type {
        TestType::SitToStand => {
            let positive = timed.iter().filter(|s| s.accel_x >= 0.0).count();
            let negative = timed.len() - positive;
            let symmetry = positive.abs_diff(negative) as f64 / timed.len() as f64;
            vec![
                indicator(TIME, elapsed, 2, 60.0, &bands::STS_TIME),
                indicator(POWER, power, 2, 20.0, &bands::POWER),
                indicator(FATIGUE, fatigue, 2, 10.0, &bands::FATIGUE),
                indicator(SYMMETRY, symmetry * 10.0, 2, 10.0, &bands::SYMMETRY),
            ]
        }
        TestType::TimedUpAndGo => {
            let times: Vec<i64> = timed.iter().map(|s| s.t_ms).collect();
            let steps = count_steps(&norm, &times, norm_mean);
            let gait_speed = TUG_DISTANCE_M / elapsed;
            let cadence = steps as f64 / elapsed * 60.0;
            let gyro_z_abs: Vec<f64> = timed.iter().map(|s| s.gyro_z.abs()).collect();
            let balance = 10.0 - (mean(&gyro_z_abs) * 10.0).min(10.0);
            let transition = max_abs(timed.iter().map(|s| s.accel_z));
            vec![
                indicator(GAIT_SPEED, gait_speed, 2, 2.0, &bands::GAIT_SPEED),
                indicator(CADENCE, cadence, 2, 150.0, &bands::CADENCE),
                indicator(BALANCE, balance, 1, 10.0, &bands::BALANCE),
                indicator(TRANSITION, transition, 2, 20.0, &bands::TRANSITION),
            ]
        }
    };

    if indicators.iter().any(|i| !i.value.is_finite()) {
        return None;
    }

    Some(IndicatorSet {
        test_type,
        elapsed_seconds: elapsed,
        sample_count: timed.len(),
        indicators,
    })
}

fn indicator(
    name: &'static str,
    raw: f64,
    decimals: u32,
    max_value: f64,
    table: &BandTable,
) -> IndicatorResult {
    let value = round_to(raw, decimals);
    IndicatorResult {
        name,
        value,
        max_value,
        classification: table.classify(value),
    }
}
