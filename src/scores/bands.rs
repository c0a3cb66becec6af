//! Fixed clinical bands for individual indicators.
//!
//! Each table lists the Excellent/Good/Regular/Poor cutoffs in order; anything
//! past the Poor cutoff is Critical. Values outside the table's valid range, or
//! not finite, are Unknown.

use crate::scores::Classification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    pub direction: Direction,
    pub cutoffs: [f64; 4],
    pub min: f64,
    pub max: f64,
}

const GRADES: [Classification; 4] = [
    Classification::Excellent,
    Classification::Good,
    Classification::Regular,
    Classification::Poor,
];

impl BandTable {
    pub fn classify(&self, value: f64) -> Classification {
        if !value.is_finite() || value < self.min || value > self.max {
            return Classification::Unknown;
        }
        for (cutoff, grade) in self.cutoffs.iter().zip(GRADES) {
            let within = match self.direction {
                Direction::HigherIsBetter => value >= *cutoff,
                Direction::LowerIsBetter => value <= *cutoff,
            };
            if within {
                return grade;
            }
        }
        Classification::Critical
    }
}

pub const STS_TIME: BandTable = BandTable {
    direction: Direction::LowerIsBetter,
    cutoffs: [10.0, 12.0, 15.0, 20.0],
    min: 0.0,
    max: f64::INFINITY,
};

pub const POWER: BandTable = BandTable {
    direction: Direction::HigherIsBetter,
    cutoffs: [13.0, 12.0, 11.0, 10.0],
    min: 0.0,
    max: f64::INFINITY,
};

pub const FATIGUE: BandTable = BandTable {
    direction: Direction::LowerIsBetter,
    cutoffs: [1.0, 2.0, 3.5, 5.0],
    min: 0.0,
    max: f64::INFINITY,
};

pub const SYMMETRY: BandTable = BandTable {
    direction: Direction::LowerIsBetter,
    cutoffs: [1.0, 2.5, 4.0, 6.0],
    min: 0.0,
    max: 10.0,
};

pub const GAIT_SPEED: BandTable = BandTable {
    direction: Direction::HigherIsBetter,
    cutoffs: [1.2, 1.0, 0.8, 0.6],
    min: 0.0,
    max: f64::INFINITY,
};

pub const CADENCE: BandTable = BandTable {
    direction: Direction::HigherIsBetter,
    cutoffs: [110.0, 100.0, 85.0, 70.0],
    min: 0.0,
    max: f64::INFINITY,
};

pub const BALANCE: BandTable = BandTable {
    direction: Direction::HigherIsBetter,
    cutoffs: [8.0, 6.0, 4.0, 2.0],
    min: 0.0,
    max: 10.0,
};

pub const TRANSITION: BandTable = BandTable {
    direction: Direction::HigherIsBetter,
    cutoffs: [15.0, 12.0, 10.0, 8.0],
    min: 0.0,
    max: f64::INFINITY,
};
