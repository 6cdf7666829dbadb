use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Routing profile exposed by the public OSRM instance. Serializes to the
/// lowercase name used as the URL path segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Car,
    Bike,
    Foot,
    Driving,
}

impl Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Profile::Car => "car",
                Profile::Bike => "bike",
                Profile::Foot => "foot",
                Profile::Driving => "driving",
            }
        )
    }
}

impl Profile {
    /// Look up a profile from a user-facing name, accepting English and
    /// Spanish spellings. One normalized table, no per-language branching.
    pub fn from_localized_name(name: &str) -> Option<Profile> {
        match name.trim().to_lowercase().as_str() {
            "car" | "coche" | "auto" | "carro" => Some(Profile::Car),
            "bike" | "bici" | "bicicleta" => Some(Profile::Bike),
            "foot" | "walk" | "pie" | "caminar" => Some(Profile::Foot),
            "driving" | "drive" | "conducir" | "manejar" => Some(Profile::Driving),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_display_matches_path_segment() {
        assert_eq!(Profile::Car.to_string(), "car");
        assert_eq!(Profile::Bike.to_string(), "bike");
        assert_eq!(Profile::Foot.to_string(), "foot");
        assert_eq!(Profile::Driving.to_string(), "driving");
    }

    #[test]
    fn test_localized_lookup() {
        assert_eq!(Profile::from_localized_name("car"), Some(Profile::Car));
        assert_eq!(Profile::from_localized_name("Coche"), Some(Profile::Car));
        assert_eq!(Profile::from_localized_name("bicicleta"), Some(Profile::Bike));
        assert_eq!(Profile::from_localized_name(" pie "), Some(Profile::Foot));
        assert_eq!(
            Profile::from_localized_name("CONDUCIR"),
            Some(Profile::Driving)
        );
        assert_eq!(Profile::from_localized_name("rocket"), None);
        assert_eq!(Profile::from_localized_name(""), None);
    }
}
