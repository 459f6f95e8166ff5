use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data_models::BrokerRecord;

const CSV_HEADER: [&str; 7] = [
    "id",
    "firstName",
    "lastName",
    "firmName",
    "firmCity",
    "firmState",
    "firmZip",
];

/// Write the full record array as pretty-printed JSON, employments and all.
pub fn save_to_json(brokers: &[BrokerRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(brokers).context("failed to serialize brokers")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("saved {} brokers to {}", brokers.len(), path.display());
    Ok(())
}

/// Write one row per broker with the firm columns flattened from the first
/// employment. Quoting is handled by the csv writer.
pub fn save_to_csv(brokers: &[BrokerRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for broker in brokers {
        writer.write_record(csv_row(broker))?;
    }
    writer.flush()?;

    log::info!("saved {} brokers to {}", brokers.len(), path.display());
    Ok(())
}

/// Only the first employment contributes the firm columns; a broker with
/// none gets empty strings. Further employments are dropped from the CSV.
fn csv_row(broker: &BrokerRecord) -> [&str; 7] {
    let firm = broker.primary_employment();
    [
        broker.id.as_str(),
        broker.first_name.as_str(),
        broker.last_name.as_str(),
        firm.map_or("", |f| f.firm_name.as_str()),
        firm.map_or("", |f| f.city.as_str()),
        firm.map_or("", |f| f.state.as_str()),
        firm.map_or("", |f| f.zip.as_str()),
    ]
}

#[test]
fn test_csv_row() {
    use crate::data_models::EmploymentRecord;

    let broker = BrokerRecord {
        id: "12345".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        employments: vec![
            EmploymentRecord {
                firm_name: "First Firm".to_string(),
                city: "Washington".to_string(),
                state: "DC".to_string(),
                zip: "20001".to_string(),
            },
            EmploymentRecord {
                firm_name: "Second Firm".to_string(),
                city: "Arlington".to_string(),
                state: "VA".to_string(),
                zip: "22201".to_string(),
            },
        ],
    };
    assert_eq!(
        csv_row(&broker),
        ["12345", "Jane", "Doe", "First Firm", "Washington", "DC", "20001"]
    );

    let broker = BrokerRecord {
        id: "9".to_string(),
        first_name: "No".to_string(),
        last_name: "Firm".to_string(),
        employments: vec![],
    };
    assert_eq!(csv_row(&broker), ["9", "No", "Firm", "", "", "", ""]);
}
