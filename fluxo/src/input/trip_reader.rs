use std::path::Path;

use csv::StringRecord;
use kdam::tqdm;

use fluxo_core::model::{TripMode, TripRecord, ZoneId};

use super::{InputError, SurveyDatasetConfig};

/// reads one survey dataset into trip records. rows missing an origin or
/// destination and unparseable volumes are fatal; unknown mode labels warn
/// and leave the record unlabeled.
pub fn read_trip_records(config: &SurveyDatasetConfig) -> Result<Vec<TripRecord>, InputError> {
    let path = Path::new(&config.file);
    let file = std::fs::File::open(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| InputError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();
    let origin_col = column_index(&headers, &config.origin_column, path)?;
    let destination_col = column_index(&headers, &config.destination_column, path)?;
    let volume_col = config
        .volume_column
        .as_ref()
        .map(|col| column_index(&headers, col, path))
        .transpose()?;
    let mode_col = match (&config.mode, &config.mode_column) {
        (None, Some(col)) => Some(column_index(&headers, col, path)?),
        _ => None,
    };

    let mut records = Vec::new();
    for row in tqdm!(reader.records(), desc = "reading trip records") {
        let row = row.map_err(|e| InputError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let origin = zone_cell(&row, origin_col, &config.origin_column, path)?;
        let destination = zone_cell(&row, destination_col, &config.destination_column, path)?;
        let volume = match (volume_col, &config.volume_column) {
            (Some(col), Some(name)) => volume_cell(&row, col, name, path)?,
            _ => 1.0,
        };
        let mode = match (config.mode, mode_col) {
            (Some(mode), _) => Some(mode),
            (None, Some(col)) => {
                let label = row.get(col).unwrap_or_default();
                let parsed = TripMode::parse_label(label);
                if parsed.is_none() && !label.trim().is_empty() {
                    log::warn!("unrecognized mode label '{label}', leaving record unlabeled");
                }
                parsed
            }
            (None, None) => None,
        };
        records.push(TripRecord::new(origin, destination, mode, volume));
    }
    eprintln!();
    log::info!("read {} trip records from '{}'", records.len(), path.display());
    Ok(records)
}

fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize, InputError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| InputError::Deserialize {
            col: column.to_string(),
            path: path.to_path_buf(),
            message: "column missing".to_string(),
        })
}

fn zone_cell(
    row: &StringRecord,
    index: usize,
    column: &str,
    path: &Path,
) -> Result<ZoneId, InputError> {
    let cell = row.get(index).unwrap_or_default().trim();
    if cell.is_empty() {
        return Err(InputError::Deserialize {
            col: column.to_string(),
            path: path.to_path_buf(),
            message: "empty zone identifier".to_string(),
        });
    }
    Ok(ZoneId(cell.to_string()))
}

fn volume_cell(
    row: &StringRecord,
    index: usize,
    column: &str,
    path: &Path,
) -> Result<f64, InputError> {
    let cell = row.get(index).unwrap_or_default().trim();
    let volume = cell.parse::<f64>().map_err(|e| InputError::Deserialize {
        col: column.to_string(),
        path: path.to_path_buf(),
        message: format!("cannot read '{cell}' as a trip count: {e}"),
    })?;
    if volume < 0.0 {
        return Err(InputError::Deserialize {
            col: column.to_string(),
            path: path.to_path_buf(),
            message: format!("negative trip count {volume}"),
        });
    }
    Ok(volume)
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;

    fn fixture_dataset(file: &str) -> SurveyDatasetConfig {
        SurveyDatasetConfig {
            file: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("test")
                .join(file)
                .to_string_lossy()
                .into_owned(),
            origin_column: "Qual o município de ORIGEM".to_string(),
            destination_column: "Qual o município de DESTINO".to_string(),
            volume_column: Some("Viagens".to_string()),
            mode: Some(TripMode::Collective),
            mode_column: None,
        }
    }

    #[test]
    fn test_reads_pre_aggregated_survey_rows() {
        let records = read_trip_records(&fixture_dataset("viagens_coletivo.csv"))
            .expect("test invariant failed: fixture csv must read");
        assert_eq!(records.len(), 4);
        let total: f64 = records.iter().map(|r| r.volume).sum();
        assert_eq!(total, 250.0);
        assert!(records.iter().all(|r| r.mode == Some(TripMode::Collective)));
        assert_eq!(records[0].origin, ZoneId("São Luís".to_string()));
    }

    #[test]
    fn test_missing_volume_column_counts_one_per_row() {
        let mut config = fixture_dataset("viagens_coletivo.csv");
        config.volume_column = None;
        let records = read_trip_records(&config)
            .expect("test invariant failed: fixture csv must read");
        assert!(records.iter().all(|r| r.volume == 1.0));
    }

    #[test]
    fn test_unknown_column_is_fatal() {
        let mut config = fixture_dataset("viagens_coletivo.csv");
        config.volume_column = Some("Contagem".to_string());
        let result = read_trip_records(&config);
        assert!(matches!(
            result,
            Err(InputError::Deserialize { ref col, .. }) if col == "Contagem"
        ));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let mut config = fixture_dataset("nao_existe.csv");
        config.volume_column = None;
        assert!(matches!(
            read_trip_records(&config),
            Err(InputError::Read { .. })
        ));
    }
}
