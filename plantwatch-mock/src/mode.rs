use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown simulation mode '{0}'")]
pub struct ParseModeError(pub String);

/// Behavioural profile that shapes every reading of a generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SimulationMode {
    /// Typical healthy plant conditions
    #[default]
    Normal,
    /// Drought, soil moisture drains with every reading
    DrySoil,
    /// Heat wave
    HotWeather,
    /// Low light
    NightTime,
    /// Anything inside the hardware envelope
    Random,
}

impl SimulationMode {
    pub const ALL: [SimulationMode; 5] = [
        SimulationMode::Normal,
        SimulationMode::DrySoil,
        SimulationMode::HotWeather,
        SimulationMode::NightTime,
        SimulationMode::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationMode::Normal => "normal",
            SimulationMode::DrySoil => "dry_soil",
            SimulationMode::HotWeather => "hot_weather",
            SimulationMode::NightTime => "night_time",
            SimulationMode::Random => "random",
        }
    }

    /// Comma separated list of every accepted name.
    pub fn available() -> String {
        Self::ALL.iter().map(SimulationMode::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .ok_or(ParseModeError(name))
    }
}

/// Resolves the optional mode argument, falling back to the default mode on
/// anything unrecognised.
pub fn select_mode(arg: Option<&str>) -> SimulationMode {
    match arg.map(str::parse::<SimulationMode>) {
        None => SimulationMode::default(),
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            let fallback = SimulationMode::default();
            tracing::warn!("{e}, using '{fallback}'. Available modes: {}", SimulationMode::available());
            fallback
        }
    }
}
