use iris_osrm::{Coordinate, Geometries};

pub fn parse_coordinate(input: &str) -> Result<Coordinate, String> {
    let (lat, lon) = input
        .split_once(',')
        .ok_or_else(|| format!("expected `lat,lon`, got `{input}`"))?;

    let latitude = lat
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid latitude `{lat}`"))?;
    let longitude = lon
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid longitude `{lon}`"))?;

    Ok(Coordinate::new(latitude, longitude))
}

pub fn parse_geometries(input: &str) -> Result<Geometries, String> {
    match input.trim().to_lowercase().as_str() {
        "polyline" => Ok(Geometries::Polyline),
        "polyline6" => Ok(Geometries::Polyline6),
        "geojson" => Ok(Geometries::Geojson),
        other => Err(format!(
            "geometry must be polyline, polyline6 or geojson, got `{other}`"
        )),
    }
}

/// Hints arrive as one comma-joined positional argument; empty segments are
/// dropped so a trailing comma is harmless.
pub fn parse_hints(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|hint| !hint.is_empty())
        .map(String::from)
        .collect()
}
