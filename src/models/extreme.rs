use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::compass::CompassSector;

/// Directional design (extreme) current for one compass sector.
///
/// `bearing_deg` always comes from the compass table, never from input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExtremeReading {
    pub sector: CompassSector,

    pub bearing_deg: f64,

    #[validate(range(min = 0.0))]
    pub speed: f64,
}

impl ExtremeReading {
    pub fn new(sector: CompassSector, speed: f64) -> Result<Self> {
        if !speed.is_finite() {
            return Err(ProcessingError::InvalidFormat(format!(
                "Non-finite design current for {}: {}",
                sector, speed
            )));
        }

        let reading = Self {
            sector,
            bearing_deg: sector.degrees(),
            speed,
        };
        reading.validate()?;

        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_from_table() {
        let reading = ExtremeReading::new(CompassSector::West, 7.52).unwrap();
        assert_eq!(reading.bearing_deg, 270.0);
        assert_eq!(reading.speed, 7.52);
    }

    #[test]
    fn test_negative_speed_rejected() {
        assert!(ExtremeReading::new(CompassSector::North, -1.0).is_err());
    }
}
