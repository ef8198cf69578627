use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::compass::{normalize_bearing, CompassSector};

/// One observed current: speed plus the bearing it flows towards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct CurrentReading {
    #[validate(range(min = 0.0))]
    pub speed: f64,

    #[validate(range(min = 0.0, exclusive_max = 360.0))]
    pub bearing_deg: f64,
}

impl CurrentReading {
    /// Build a reading, reducing the bearing modulo 360.
    pub fn new(speed: f64, bearing_deg: f64) -> Result<Self> {
        if !speed.is_finite() || !bearing_deg.is_finite() {
            return Err(ProcessingError::InvalidFormat(format!(
                "Non-finite current reading: speed={}, bearing={}",
                speed, bearing_deg
            )));
        }

        let reading = Self {
            speed,
            bearing_deg: normalize_bearing(bearing_deg),
        };
        reading.validate()?;

        Ok(reading)
    }
}

/// A current reading placed on the time axis and binned into a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampedReading {
    pub timestamp: NaiveDateTime,
    pub year: i32,
    pub speed: f64,
    pub bearing_deg: f64,
    pub sector: CompassSector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_is_normalized() {
        let reading = CurrentReading::new(1.5, -45.0).unwrap();
        assert_eq!(reading.bearing_deg, 315.0);

        let reading = CurrentReading::new(1.5, 720.0).unwrap();
        assert_eq!(reading.bearing_deg, 0.0);
    }

    #[test]
    fn test_negative_speed_rejected() {
        assert!(matches!(
            CurrentReading::new(-0.1, 10.0),
            Err(ProcessingError::Validation(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(CurrentReading::new(f64::NAN, 10.0).is_err());
        assert!(CurrentReading::new(1.0, f64::INFINITY).is_err());
    }
}
