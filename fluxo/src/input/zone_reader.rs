use std::path::Path;

use wkt::ToWkt;

use fluxo_core::model::{ZoneGeometry, ZoneId};

use super::{InputError, ZoneInputConfig};

/// reads zone polygons and their ids from a GeoJSON FeatureCollection.
/// feature properties other than the id column pass through untouched onto
/// the output layers. non-polygonal features are skipped with a warning;
/// their zones stay unresolved downstream.
pub fn read_zone_geometries(config: &ZoneInputConfig) -> Result<Vec<ZoneGeometry>, InputError> {
    let path = Path::new(&config.file);
    let geojson_str = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let geojson_value = geojson_str
        .parse::<geojson::GeoJson>()
        .map_err(|e| InputError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let collection = match geojson_value {
        geojson::GeoJson::FeatureCollection(collection) => collection,
        _ => {
            return Err(InputError::Parse {
                path: path.to_path_buf(),
                message: "geojson in file must be a FeatureCollection".to_string(),
            })
        }
    };

    let mut zones = Vec::with_capacity(collection.features.len());
    for (n, feature) in collection.features.into_iter().enumerate() {
        let zone = zone_id_of(&feature, &config.zone_id_column, path, n)?;
        let geom_json = feature.geometry.ok_or_else(|| InputError::Deserialize {
            col: "geometry".to_string(),
            path: path.to_path_buf(),
            message: format!("no geometry in feature {n}"),
        })?;
        let geometry: geo::Geometry<f64> =
            geom_json.try_into().map_err(|e| InputError::Deserialize {
                col: "geometry".to_string(),
                path: path.to_path_buf(),
                message: format!("failure decoding GeoJson geometry for zone {zone}: {e}"),
            })?;
        let polygons = match geometry {
            geo::Geometry::Polygon(polygon) => geo::MultiPolygon(vec![polygon]),
            geo::Geometry::MultiPolygon(multi) => multi,
            other => {
                log::warn!(
                    "zone '{zone}' has non-polygonal geometry {}, skipping feature",
                    other.wkt_string()
                );
                continue;
            }
        };
        let mut zone_geometry = ZoneGeometry::new(zone, polygons);
        if let Some(properties) = feature.properties {
            zone_geometry.properties = properties
                .into_iter()
                .filter(|(key, _)| key != &config.zone_id_column)
                .collect();
        }
        zones.push(zone_geometry);
    }
    log::info!("read {} zone geometries from '{}'", zones.len(), path.display());
    Ok(zones)
}

fn zone_id_of(
    feature: &geojson::Feature,
    zone_id_column: &str,
    path: &Path,
    n: usize,
) -> Result<ZoneId, InputError> {
    let value = feature
        .property(zone_id_column)
        .ok_or_else(|| InputError::Deserialize {
            col: zone_id_column.to_string(),
            path: path.to_path_buf(),
            message: format!("column missing in feature {n}"),
        })?;
    match value {
        serde_json::Value::String(id) => Ok(ZoneId(id.clone())),
        serde_json::Value::Number(code) => Ok(ZoneId(code.to_string())),
        _ => Err(InputError::Deserialize {
            col: zone_id_column.to_string(),
            path: path.to_path_buf(),
            message: format!("cannot read zone id in feature {n} as a string or number"),
        }),
    }
}
