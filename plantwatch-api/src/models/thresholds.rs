use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    #[error("{field} minimum {min} exceeds maximum {max}")]
    InvertedRange { field: &'static str, min: f64, max: f64 },

    #[error("{field} bound is not a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} range {min}..={max} is too wide to sample")]
    SpanTooWide { field: &'static str, min: f64, max: f64 },
}

/// Full hardware-valid envelope of every sensor channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorThresholds {
    pub soil_min: i32,
    pub soil_max: i32,
    pub light_min: i32,
    pub light_max: i32,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity_min: f64,
    pub humidity_max: f64,
}

impl Default for SensorThresholds {
    fn default() -> Self {
        Self {
            soil_min: 1800,
            soil_max: 2600,
            light_min: 800,
            light_max: 1800,
            temp_min: 24.0,
            temp_max: 35.0,
            humidity_min: 40.0,
            humidity_max: 80.0,
        }
    }
}

impl SensorThresholds {
    /// Checks that every channel describes a non-empty closed interval.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        Self::check("soil", self.soil_min as f64, self.soil_max as f64)?;
        Self::check("light", self.light_min as f64, self.light_max as f64)?;
        Self::check("temp", self.temp_min, self.temp_max)?;
        Self::check("humidity", self.humidity_min, self.humidity_max)
    }

    fn check(field: &'static str, min: f64, max: f64) -> Result<(), ThresholdError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ThresholdError::NonFinite { field });
        }
        if min > max {
            return Err(ThresholdError::InvertedRange { field, min, max });
        }
        if !(max - min).is_finite() {
            return Err(ThresholdError::SpanTooWide { field, min, max });
        }
        Ok(())
    }
}
