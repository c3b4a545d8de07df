//! Validates asynchronous line reading, cancellation behavior and
//! delimited position/vector parsing

use std::io::Write;

use gridkit::input::{LineReader, parse_position, parse_vector2, parse_vector3};
use gridkit::{GridError, Position};
use tokio_util::sync::CancellationToken;

const FIXTURE: &str = "abc\n\ndef\n    \n        \nghi\n \n";

fn write_fixture(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|error| panic!("{error}"));
    file.write_all(content.as_bytes())
        .unwrap_or_else(|error| panic!("{error}"));
    file
}

async fn drain(reader: &mut LineReader) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(Some(line)) = reader.next_line().await {
        lines.push(line);
    }
    lines
}

#[tokio::test]
async fn test_reader_skips_empty_and_whitespace_lines() {
    let file = write_fixture(FIXTURE);
    let mut reader = LineReader::open(file.path(), true)
        .await
        .unwrap_or_else(|error| panic!("{error}"));
    let lines = drain(&mut reader).await;
    assert_eq!(lines, vec!["abc", "def", "ghi"]);
}

#[tokio::test]
async fn test_reader_preserves_blank_lines_when_not_skipping() {
    let file = write_fixture(FIXTURE);
    let mut reader = LineReader::open(file.path(), false)
        .await
        .unwrap_or_else(|error| panic!("{error}"));
    let lines = drain(&mut reader).await;
    assert_eq!(lines, vec!["abc", "", "def", "    ", "        ", "ghi", " "]);
}

#[tokio::test]
async fn test_reader_returns_none_after_drain() {
    let file = write_fixture("only\n");
    let mut reader = LineReader::open(file.path(), true)
        .await
        .unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(
        reader
            .next_line()
            .await
            .unwrap_or_else(|error| panic!("{error}")),
        Some("only".to_string())
    );
    let end = reader
        .next_line()
        .await
        .unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(end, None);
    let still_end = reader
        .next_line()
        .await
        .unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(still_end, None, "a drained reader stays drained");
}

#[tokio::test]
async fn test_reader_open_fails_for_missing_file() {
    match LineReader::open("does-not-exist.txt", true).await {
        Err(GridError::FileSystem { operation, .. }) => assert_eq!(operation, "open"),
        Err(error) => panic!("expected FileSystem error, got {error}"),
        Ok(_) => panic!("opening a missing file should fail"),
    }
}

#[tokio::test]
async fn test_reader_cancellation_stops_mid_read() {
    let file = write_fixture(FIXTURE);
    let token = CancellationToken::new();
    let mut reader = LineReader::open_with_token(file.path(), true, token.clone())
        .await
        .unwrap_or_else(|error| panic!("{error}"));

    let first = reader
        .next_line()
        .await
        .unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(first, Some("abc".to_string()));

    token.cancel();
    match reader.next_line().await {
        Err(GridError::Cancelled { .. }) => {}
        Err(error) => panic!("expected Cancelled error, got {error}"),
        Ok(line) => panic!("read should not succeed after cancellation, got {line:?}"),
    }
}

// Parsing

#[test]
fn test_parse_position_splits_trims_and_ignores_extras() {
    let cases: [(&str, &str, i64, i64); 4] = [
        ("123,456", ",", 123, 456),
        ("-123::456", "::", -123, 456),
        ("   -123 ::::    456  ::::", "::", -123, 456),
        ("   -123 ::    456  ::789", "::", -123, 456),
    ];

    for (input, delimiter, x, y) in cases {
        let position = parse_position::<i64>(input, delimiter)
            .unwrap_or_else(|error| panic!("'{input}': {error}"));
        assert_eq!(position, Position::new(x, y));
    }
}

#[test]
fn test_parse_position_works_for_any_scalar_width() {
    let narrow = parse_position::<i32>("4, -2", ",").unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(narrow, Position::new(4, -2));
    let wide = parse_position::<i64>("4, -2", ",").unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(wide, Position::new(4, -2));
}

#[test]
fn test_parse_position_rejects_too_few_segments() {
    match parse_position::<i32>("4", ",") {
        Err(GridError::MissingComponent {
            expected, found, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        Err(error) => panic!("expected MissingComponent, got {error}"),
        Ok(position) => panic!("single segment should not parse, got {position}"),
    }

    assert!(parse_position::<i32>("", ",").is_err());
    assert!(
        parse_position::<i32>(" , ", ",").is_err(),
        "whitespace-only segments are discarded before counting"
    );
}

#[test]
fn test_parse_position_rejects_malformed_numbers() {
    match parse_position::<i32>("4, x", ",") {
        Err(GridError::InvalidNumber { segment, .. }) => assert_eq!(segment, "x"),
        Err(error) => panic!("expected InvalidNumber, got {error}"),
        Ok(position) => panic!("'x' should not parse, got {position}"),
    }
}

#[test]
fn test_parse_vector2_reads_two_floats() {
    let vector = parse_vector2("1.5, -2.25", ",").unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(vector, [1.5, -2.25]);

    let with_extras =
        parse_vector2("1.5, -2.25, 9.0", ",").unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(with_extras, [1.5, -2.25], "trailing segments are ignored");
}

#[test]
fn test_parse_vector3_reads_three_floats() {
    let vector = parse_vector3("1.5 | 2.0 | 3.5", "|").unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(vector, [1.5, 2.0, 3.5]);

    match parse_vector3("1.5 | 2.0", "|") {
        Err(GridError::MissingComponent {
            expected, found, ..
        }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        Err(error) => panic!("expected MissingComponent, got {error}"),
        Ok(vector) => panic!("two segments should not parse, got {vector:?}"),
    }
}
