use thiserror::Error;

use crate::estimator::Point;

const RECORD_SEPARATORS: [char; 2] = [';', '\n'];
const VALUE_SEPARATORS: [char; 3] = [',', ' ', '\t'];

#[derive(Debug, Error, PartialEq, Clone)]
pub enum FormatError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid format, expected: x,y or x y")]
    InvalidRecord,

    #[error("values must be valid numbers")]
    InvalidNumber,
}

/// Parses free-form text into points, one point per record.
///
/// Records are separated by `;` or line breaks (`\n`, `\r\n`) and blank records are skipped.
/// Each record holds exactly two numbers separated by commas, spaces or tabs.
pub fn parse(text: &str) -> Result<Vec<Point>, FormatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormatError::EmptyInput);
    }

    // `\r\n` breaks leave a trailing `\r` that the record trim removes
    text.split(RECORD_SEPARATORS)
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .map(parse_record)
        .collect()
}

fn parse_record(record: &str) -> Result<Point, FormatError> {
    let values: Vec<&str> = record
        .split(VALUE_SEPARATORS)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect();

    match values.as_slice() {
        [x, y] => Ok(Point::new(parse_number(x)?, parse_number(y)?)),
        _ => Err(FormatError::InvalidRecord),
    }
}

fn parse_number(value: &str) -> Result<f64, FormatError> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(FormatError::InvalidNumber),
    }
}

#[cfg(test)]
mod tests {
    use crate::estimator::Point;
    use crate::parser::{parse, FormatError};

    #[test]
    fn test_should_accept_every_separator() {
        assert_eq!(parse("1,2"), Ok(vec![Point::new(1.0, 2.0)]));
        assert_eq!(parse("1 2"), Ok(vec![Point::new(1.0, 2.0)]));
        assert_eq!(parse("1\t2"), Ok(vec![Point::new(1.0, 2.0)]));
    }

    #[test]
    fn test_should_accept_mixed_separators_across_records() {
        let points = parse("1,2;3 4\n5\t6\r\n-7.5, +8.25").unwrap();

        assert_eq!(
            points,
            vec![
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Point::new(5.0, 6.0),
                Point::new(-7.5, 8.25),
            ]
        );
    }

    #[test]
    fn test_should_preserve_order_and_duplicates() {
        let points = parse("1,2\n2,4\n3,6\n4,8\n5,10\n1,2").unwrap();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point::new(1.0, 2.0));
        assert_eq!(points[4], Point::new(5.0, 10.0));
        assert_eq!(points[5], Point::new(1.0, 2.0));
    }

    #[test]
    fn test_should_skip_blank_records() {
        let points = parse("\n\n1,2;;  ;\r\n\r\n3,4\n  \n").unwrap();

        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(parse(";;"), Ok(vec![]));
    }

    #[test]
    fn test_should_reject_empty_input() {
        assert_eq!(parse(""), Err(FormatError::EmptyInput));
        assert_eq!(parse("  \n\t "), Err(FormatError::EmptyInput));
    }

    #[test]
    fn test_should_reject_records_without_two_values() {
        assert_eq!(parse("1,2,3"), Err(FormatError::InvalidRecord));
        assert_eq!(parse("1"), Err(FormatError::InvalidRecord));
        assert_eq!(parse("1,2\n3"), Err(FormatError::InvalidRecord));
    }

    #[test]
    fn test_should_reject_non_numeric_values() {
        assert_eq!(parse("a,b"), Err(FormatError::InvalidNumber));
        assert_eq!(parse("1,2\n3,x"), Err(FormatError::InvalidNumber));
        assert_eq!(parse("1,NaN"), Err(FormatError::InvalidNumber));
        assert_eq!(parse("inf,1"), Err(FormatError::InvalidNumber));
    }
}
