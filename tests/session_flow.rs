use std::io::Cursor;

use loan_records::report::format_header;
use loan_records::{
    run_session, CollectError, Config, LineInput, LoanType, ReportFormat, SessionOutcome,
};

fn run(script: &str, format: ReportFormat) -> (SessionOutcome, String) {
    let config = Config {
        format,
        ..Config::default()
    };
    let mut output = Vec::new();
    let outcome = run_session(LineInput::new(Cursor::new(script.to_string())), &mut output, &config).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_two_records_table() {
    let script = "2\n123456\nABC123\nAuto\n5.5\n1000\n3\n654321\nXYZ789\npersonal\n7.25\n15000.5\n10\n";

    let (outcome, out) = run(script, ReportFormat::Table);

    let SessionOutcome::Completed(records) = outcome else {
        panic!("expected completed session");
    };
    assert_eq!(records.len(), 2);
    assert_eq!(records.get(0).unwrap().record_id().as_str(), "123456");
    assert_eq!(records.get(1).unwrap().loan_type(), LoanType::Personal);

    assert!(out.starts_with("Enter the maximum number of records: "));
    assert!(out.contains("Enter details for Record 1\n"));
    assert!(out.contains("Enter details for Record 2\n"));

    let report = &out[out.find("\nRecords: \n").unwrap()..];
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[2], format_header());
    assert_eq!(
        lines[3].split_whitespace().collect::<Vec<_>>(),
        vec!["123456", "ABC123", "Auto", "5.50", "1000.00", "3"]
    );
    assert_eq!(
        lines[4].split_whitespace().collect::<Vec<_>>(),
        vec!["654321", "XYZ789", "Personal", "7.25", "15000.50", "10"]
    );
}

#[test]
fn test_invalid_count_reports_and_stops() {
    let (outcome, out) = run("abc\n123456\n", ReportFormat::Table);

    assert!(matches!(outcome, SessionOutcome::InvalidCount));
    assert_eq!(
        out,
        "Enter the maximum number of records: Invalid input. Please enter a valid number.\n"
    );
    assert!(!out.contains("Records:"));
}

#[test]
fn test_zero_records_prints_empty_table() {
    let (outcome, out) = run("0\n", ReportFormat::Table);

    match outcome {
        SessionOutcome::Completed(records) => assert!(records.is_empty()),
        SessionOutcome::InvalidCount => panic!("0 is a valid count"),
    }
    assert!(out.ends_with(&format!("\nRecords: \n{}\n", format_header())));
}

#[test]
fn test_numeric_failure_restarts_whole_record() {
    let script = "1\n111111\nAAA111\nAuto\nlots\n222222\nBBB222\nBuilder\n4.5\n300\n6\n";

    let (outcome, out) = run(script, ReportFormat::Table);

    let SessionOutcome::Completed(records) = outcome else {
        panic!("expected completed session");
    };
    assert_eq!(records.len(), 1);
    let record = records.get(0).unwrap();
    assert_eq!(record.record_id().as_str(), "222222");
    assert_eq!(record.customer_id().as_str(), "BBB222");
    assert!(out.contains("Invalid input format. Please enter valid data.\n"));
    assert_eq!(out.matches("Enter Record ID (XXXXXX): ").count(), 2);
}

#[test]
fn test_json_format() {
    let (_, out) = run("1\n123456\nABC123\nOTHER\n1\n2\n3\n", ReportFormat::Json);

    let json_start = out.find('[').unwrap();
    let json: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
    assert_eq!(json[0]["Loan_Type"], "OTHER");
    assert_eq!(json[0]["Amount_Left"], 2.0);
}

#[test]
fn test_huge_count_waits_for_input_instead_of_allocating() {
    let config = Config::default();
    let mut output = Vec::new();

    let result = run_session(
        LineInput::new(Cursor::new("1000000000000000000\n")),
        &mut output,
        &config,
    );

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CollectError>(),
        Some(CollectError::InputClosed { field: "record_id" })
    ));
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Enter details for Record 1\n"));
}

#[test]
fn test_loan_type_reported_as_typed() {
    let (_, out) = run("1\n123456\nABC123\nAUTO\n1\n1\n1\n", ReportFormat::Table);

    let row = out.lines().last().unwrap();
    assert_eq!(
        row.split_whitespace().collect::<Vec<_>>(),
        vec!["123456", "ABC123", "AUTO", "1.00", "1.00", "1"]
    );
}

#[test]
fn test_input_ends_early_is_an_error() {
    let config = Config::default();
    let mut output = Vec::new();

    let result = run_session(LineInput::new(Cursor::new("2\n123456\n")), &mut output, &config);
    assert!(result.is_err());
}
