use std::ops::RangeInclusive;

use plantwatch_api::models::{Reading, SensorThresholds, ThresholdError, round_tenth};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::mode::SimulationMode;

const DRY_SOIL_START: i64 = 2400;
const DRY_SOIL_FLOOR: i64 = 1200;
const DRY_SOIL_STEP: i64 = 50;
const DRY_SOIL_JITTER: i32 = 100;

/// Soil baseline of a draining profile after `count` readings.
pub fn dry_soil_base(count: u64) -> i32 {
    let drained = i64::try_from(count.saturating_mul(DRY_SOIL_STEP as u64)).unwrap_or(i64::MAX);

    (DRY_SOIL_START - drained).max(DRY_SOIL_FLOOR) as i32
}

/// Ranges of the channels other than soil.
#[derive(Debug, Clone, PartialEq)]
struct Climate {
    light: RangeInclusive<i32>,
    temperature: RangeInclusive<f64>,
    humidity: RangeInclusive<f64>,
}

impl Climate {
    fn sample<R: Rng>(&self, rng: &mut R, soil: i32) -> Reading {
        Reading {
            soil,
            light: rng.random_range(self.light.clone()),
            temperature: sample_tenth(rng, &self.temperature),
            humidity: sample_tenth(rng, &self.humidity),
        }
    }
}

/// Samples `range` and rounds to one decimal place.
///
/// The rounded value is clamped back into `range`, so a bound that is not a
/// multiple of 0.1 (say 24.06) can itself be returned off the 0.1 grid.
/// Staying inside the envelope wins over the grid.
fn sample_tenth<R: Rng>(rng: &mut R, range: &RangeInclusive<f64>) -> f64 {
    round_tenth(rng.random_range(range.clone())).clamp(*range.start(), *range.end())
}

#[derive(Debug, Clone, PartialEq)]
enum Profile {
    /// Ranges fixed for the lifetime of the generator
    Steady {
        soil: RangeInclusive<i32>,
        climate: Climate,
    },
    /// Soil baseline drains by a fixed step per reading
    Draining { climate: Climate },
}

impl Profile {
    fn for_mode(mode: SimulationMode, thresholds: &SensorThresholds) -> Self {
        match mode {
            SimulationMode::Normal => Profile::Steady {
                soil: 2000..=2400,
                climate: Climate {
                    light: 1000..=1500,
                    temperature: 26.0..=30.0,
                    humidity: 50.0..=70.0,
                },
            },
            SimulationMode::DrySoil => Profile::Draining {
                climate: Climate {
                    light: 1200..=1600,
                    temperature: 30.0..=34.0,
                    humidity: 35.0..=50.0,
                },
            },
            SimulationMode::HotWeather => Profile::Steady {
                soil: 1600..=2000,
                climate: Climate {
                    light: 1500..=1800,
                    temperature: 34.0..=40.0,
                    humidity: 30.0..=45.0,
                },
            },
            SimulationMode::NightTime => Profile::Steady {
                soil: 2000..=2400,
                climate: Climate {
                    light: 0..=200,
                    temperature: 20.0..=25.0,
                    humidity: 60.0..=80.0,
                },
            },
            SimulationMode::Random => Profile::Steady {
                soil: thresholds.soil_min..=thresholds.soil_max,
                climate: Climate {
                    light: thresholds.light_min..=thresholds.light_max,
                    temperature: thresholds.temp_min..=thresholds.temp_max,
                    humidity: thresholds.humidity_min..=thresholds.humidity_max,
                },
            },
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R, count: u64) -> Reading {
        match self {
            Profile::Steady { soil, climate } => {
                let soil = rng.random_range(soil.clone());
                climate.sample(rng, soil)
            }
            Profile::Draining { climate } => {
                let base = dry_soil_base(count);
                let soil = rng.random_range(base - DRY_SOIL_JITTER..=base + DRY_SOIL_JITTER);
                climate.sample(rng, soil)
            }
        }
    }
}

/// Produces readings for one simulated device.
///
/// The mode is fixed at construction. Every call to [`generate`](Self::generate)
/// bumps the reading counter first, so the first reading is generated with a
/// count of 1.
#[derive(Debug)]
pub struct ReadingGenerator<R = StdRng> {
    mode: SimulationMode,
    profile: Profile,
    count: u64,
    rng: R,
}

impl ReadingGenerator<StdRng> {
    pub fn new(mode: SimulationMode) -> Self {
        Self::with_rng(mode, StdRng::from_os_rng())
    }

    pub fn seeded(mode: SimulationMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReadingGenerator<R> {
    pub fn with_rng(mode: SimulationMode, rng: R) -> Self {
        Self {
            mode,
            profile: Profile::for_mode(mode, &SensorThresholds::default()),
            count: 0,
            rng,
        }
    }

    /// Uses a custom hardware envelope for [`SimulationMode::Random`].
    pub fn with_thresholds(mode: SimulationMode, thresholds: SensorThresholds, rng: R) -> Result<Self, ThresholdError> {
        thresholds.validate()?;

        Ok(Self {
            mode,
            profile: Profile::for_mode(mode, &thresholds),
            count: 0,
            rng,
        })
    }

    pub fn generate(&mut self) -> Reading {
        self.count += 1;
        self.profile.sample(&mut self.rng, self.count)
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// Number of readings generated so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}
