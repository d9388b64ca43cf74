use serde::{Deserialize, Serialize};

/// One synthetic sample as submitted to the readings resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Raw soil moisture value
    pub soil: i32,
    /// Light intensity
    pub light: i32,
    /// Air temperature in Celsius, one decimal place
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Relative humidity percentage, one decimal place
    pub humidity: f64,
}

/// Rounds to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_shape() {
        let reading = Reading {
            soil: 2150,
            light: 1320,
            temperature: 27.4,
            humidity: 61.9,
        };

        let value = serde_json::to_value(reading).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(value, json!({ "soil": 2150, "light": 1320, "temp": 27.4, "humidity": 61.9 }));
        assert_eq!(serde_json::to_string(&reading).unwrap(), r#"{"soil":2150,"light":1320,"temp":27.4,"humidity":61.9}"#);
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(27.449), 27.4);
        assert_eq!(round_tenth(27.45001), 27.5);
        assert_eq!(round_tenth(29.96), 30.0);
        assert_eq!(round_tenth(-0.04), -0.0);
    }
}
