use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Geographic position in degrees.
///
/// The service wants `longitude,latitude` on the wire, inverted from the
/// field order here; [`encode_coordinates`] takes care of the swap.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f32,
    pub longitude: f32,
}

impl Coordinate {
    pub fn new(latitude: f32, longitude: f32) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for geo_types::Point<f32> {
    fn from(coordinate: Coordinate) -> Self {
        geo_types::Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<geo_types::Point<f32>> for Coordinate {
    fn from(point: geo_types::Point<f32>) -> Self {
        Coordinate {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

/// Heading constraint attached positionally to a coordinate: a direction in
/// degrees plus the allowed deviation around it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bearing {
    value: u16,
    range: u16,
}

impl Bearing {
    pub fn new(value: u16, range: u16) -> Result<Self, ValidationError> {
        if value > 360 {
            return Err(ValidationError::BearingValue(value));
        }
        if range > 180 {
            return Err(ValidationError::BearingRange(range));
        }

        Ok(Bearing { value, range })
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn range(&self) -> u16 {
        self.range
    }
}

/// Render coordinates as `lon,lat` pairs joined by `;`, in sequence order.
/// Positional options (bearings, hints) rely on this order staying intact.
pub fn encode_coordinates(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(|coordinate| format!("{},{}", coordinate.longitude, coordinate.latitude))
        .collect::<Vec<_>>()
        .join(";")
}

/// Render bearings as `value,range` pairs joined by `;`.
pub fn encode_bearings(bearings: &[Bearing]) -> String {
    bearings
        .iter()
        .map(|bearing| format!("{},{}", bearing.value, bearing.range))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_encode_single_coordinate() {
        let encoded = encode_coordinates(&[Coordinate::new(52.517037, 13.388860)]);

        assert_eq!(encoded, format!("{},{}", 13.388860f32, 52.517037f32));
        assert!(!encoded.contains(';'));
    }

    #[test]
    fn test_encode_preserves_order_and_separator_count() {
        let coordinates = vec![
            Coordinate::new(48.8566, 2.3522),
            Coordinate::new(51.5074, -0.1278),
            Coordinate::new(40.4168, -3.7038),
        ];

        let encoded = encode_coordinates(&coordinates);
        let pairs: Vec<&str> = encoded.split(';').collect();

        assert_eq!(encoded.matches(';').count(), coordinates.len() - 1);
        assert_eq!(pairs.len(), coordinates.len());

        for (pair, coordinate) in pairs.iter().zip(&coordinates) {
            let (lon, lat) = pair.split_once(',').unwrap();
            assert_eq!(lon.parse::<f32>().unwrap(), coordinate.longitude);
            assert_eq!(lat.parse::<f32>().unwrap(), coordinate.latitude);
        }
    }

    #[test]
    fn test_encode_bearings() {
        let bearings = vec![Bearing::new(0, 180).unwrap(), Bearing::new(270, 45).unwrap()];

        assert_eq!(encode_bearings(&bearings), "0,180;270,45");
    }

    #[test]
    fn test_bearing_bounds() {
        assert!(Bearing::new(360, 180).is_ok());
        assert_eq!(
            Bearing::new(361, 0),
            Err(ValidationError::BearingValue(361))
        );
        assert_eq!(
            Bearing::new(90, 181),
            Err(ValidationError::BearingRange(181))
        );
    }

    #[test]
    fn test_point_conversion_swaps_axes() {
        let coordinate = Coordinate::new(52.517037, 13.388860);
        let point: geo_types::Point<f32> = coordinate.into();

        assert_eq!(point.x(), coordinate.longitude);
        assert_eq!(point.y(), coordinate.latitude);
        assert_eq!(Coordinate::from(point), coordinate);
    }
}
