use std::fmt;

use plantwatch_api::models::Reading;

const SOIL_DRY: i32 = 1800;
const SOIL_WET: i32 = 2600;
const TEMP_HOT: f64 = 35.0;
const TEMP_COLD: f64 = 20.0;
const LIGHT_LOW: i32 = 500;
const HUMIDITY_LOW: f64 = 40.0;
const HUMIDITY_HIGH: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthIssue {
    SoilTooDry,
    SoilTooWet,
    TooHot,
    TooCold,
    LowLight,
    LowHumidity,
    HighHumidity,
}

impl fmt::Display for HealthIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            HealthIssue::SoilTooDry => "Soil too dry!",
            HealthIssue::SoilTooWet => "Soil too wet!",
            HealthIssue::TooHot => "Too hot!",
            HealthIssue::TooCold => "Too cold!",
            HealthIssue::LowLight => "Low light!",
            HealthIssue::LowHumidity => "Low humidity!",
            HealthIssue::HighHumidity => "High humidity!",
        };

        f.write_str(message)
    }
}

/// Flags every channel of `reading` that is outside the healthy band.
pub fn assess(reading: &Reading) -> Vec<HealthIssue> {
    let mut issues = Vec::new();

    if reading.soil < SOIL_DRY {
        issues.push(HealthIssue::SoilTooDry);
    } else if reading.soil > SOIL_WET {
        issues.push(HealthIssue::SoilTooWet);
    }

    if reading.temperature > TEMP_HOT {
        issues.push(HealthIssue::TooHot);
    } else if reading.temperature < TEMP_COLD {
        issues.push(HealthIssue::TooCold);
    }

    if reading.light < LIGHT_LOW {
        issues.push(HealthIssue::LowLight);
    }

    if reading.humidity < HUMIDITY_LOW {
        issues.push(HealthIssue::LowHumidity);
    } else if reading.humidity > HUMIDITY_HIGH {
        issues.push(HealthIssue::HighHumidity);
    }

    issues
}

/// Human readable summary of [`assess`].
pub fn describe(issues: &[HealthIssue]) -> String {
    if issues.is_empty() {
        "Plant healthy".to_string()
    } else {
        issues.iter().map(ToString::to_string).collect::<Vec<_>>().join(" | ")
    }
}
