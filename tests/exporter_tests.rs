use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use dragnet::data_models::{BrokerRecord, EmploymentRecord};
use dragnet::exporter;

mod test_helpers {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static TEST_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub fn unique_output_path(extension: &str) -> PathBuf {
        let count = TEST_FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis();
        std::env::temp_dir().join(format!("dragnet_exporter_test_{timestamp}_{count}.{extension}"))
    }

    pub fn employment(firm_name: &str, city: &str, state: &str, zip: &str) -> EmploymentRecord {
        EmploymentRecord {
            firm_name: firm_name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
        }
    }

    pub fn broker(
        id: &str,
        first_name: &str,
        last_name: &str,
        employments: Vec<EmploymentRecord>,
    ) -> BrokerRecord {
        BrokerRecord {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            employments,
        }
    }

    pub fn sample_brokers() -> Vec<BrokerRecord> {
        vec![
            broker(
                "1001",
                "Jane",
                "Doe",
                vec![
                    employment("First Firm", "Washington", "DC", "20001"),
                    employment("Second Firm", "Arlington", "VA", "22201"),
                ],
            ),
            broker("1002", "John", "Roe", vec![]),
            broker(
                "1003",
                "Ada",
                "Poe",
                vec![employment("Only Firm", "Bethesda", "MD", "20810")],
            ),
        ]
    }
}

use test_helpers::*;

#[test]
fn test_json_keeps_every_employment() -> Result<()> {
    let path = unique_output_path("json");
    exporter::save_to_json(&sample_brokers(), &path)?;

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let records = parsed.as_array().expect("output should be an array");
    assert_eq!(records.len(), 3);

    assert_eq!(records[0]["ind_source_id"], "1001");
    assert_eq!(records[0]["ind_firstname"], "Jane");
    assert_eq!(records[0]["ind_current_employments"].as_array().unwrap().len(), 2);
    assert_eq!(
        records[0]["ind_current_employments"][1]["firm_name"],
        "Second Firm"
    );
    assert_eq!(records[1]["ind_current_employments"].as_array().unwrap().len(), 0);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_json_is_pretty_printed() -> Result<()> {
    let path = unique_output_path("json");
    exporter::save_to_json(&sample_brokers(), &path)?;

    let content = fs::read_to_string(&path)?;
    assert!(content.starts_with("[\n  {"));
    assert!(content.contains("\n    \"ind_source_id\": \"1001\""));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_json_empty_input_writes_empty_array() -> Result<()> {
    let path = unique_output_path("json");
    exporter::save_to_json(&[], &path)?;

    assert_eq!(fs::read_to_string(&path)?, "[]");

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_csv_flattens_to_first_employment() -> Result<()> {
    let path = unique_output_path("csv");
    exporter::save_to_csv(&sample_brokers(), &path)?;

    let mut reader = csv::Reader::from_path(&path)?;
    assert_eq!(
        reader.headers()?,
        &csv::StringRecord::from(vec![
            "id",
            "firstName",
            "lastName",
            "firmName",
            "firmCity",
            "firmState",
            "firmZip"
        ])
    );

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 3);

    // Second employment dropped from the row
    assert_eq!(&rows[0][3], "First Firm");
    assert_eq!(&rows[0][4], "Washington");

    // No employments means empty firm columns
    assert_eq!(&rows[1][0], "1002");
    for column in 3..7 {
        assert_eq!(&rows[1][column], "");
    }

    assert_eq!(&rows[2][3], "Only Firm");

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_csv_row_count_matches_json_array_length() -> Result<()> {
    let brokers = sample_brokers();

    let json_path = unique_output_path("json");
    let csv_path = unique_output_path("csv");
    exporter::save_to_json(&brokers, &json_path)?;
    exporter::save_to_csv(&brokers, &csv_path)?;

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    let mut reader = csv::Reader::from_path(&csv_path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;

    assert_eq!(rows.len(), parsed.as_array().unwrap().len());

    fs::remove_file(&json_path)?;
    fs::remove_file(&csv_path)?;
    Ok(())
}

#[test]
fn test_csv_quotes_awkward_fields() -> Result<()> {
    let awkward = "Acme, \"Broker\"\nServices LLC";
    let brokers = vec![broker(
        "2001",
        "Quote",
        "Heavy",
        vec![employment(awkward, "New York", "NY", "10001")],
    )];

    let path = unique_output_path("csv");
    exporter::save_to_csv(&brokers, &path)?;

    let mut reader = csv::Reader::from_path(&path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][3], awkward);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_csv_empty_input_writes_header_only() -> Result<()> {
    let path = unique_output_path("csv");
    exporter::save_to_csv(&[], &path)?;

    assert_eq!(
        fs::read_to_string(&path)?,
        "id,firstName,lastName,firmName,firmCity,firmState,firmZip\n"
    );

    fs::remove_file(&path)?;
    Ok(())
}
