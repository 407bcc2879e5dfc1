use crate::types::dataset::{CellValue, Dataset};
use crate::types::scoring::{Score, MAX_SCORE};
use crate::types::timestamp::parse_timestamp;

const YEAR_HINTS: [&str; 2] = ["año", "year"];
const DATE_HINTS: [&str; 2] = ["fecha", "date"];

fn is_valid_date(value: &CellValue) -> bool {
    match value {
        CellValue::Number(n) => n.is_finite(),
        CellValue::Text(text) => parse_timestamp(text).is_some(),
        CellValue::Bool(_) | CellValue::Null => false,
    }
}

pub fn conformity_score(dataset: &Dataset) -> Score {
    if dataset.is_empty() {
        return MAX_SCORE;
    }

    let mut errors = 0usize;
    let mut cells = 0usize;
    for column in dataset.columns() {
        let name = column.to_lowercase();
        let year_column = YEAR_HINTS.iter().any(|hint| name.contains(hint));
        let date_column = DATE_HINTS.iter().any(|hint| name.contains(hint));

        for value in dataset.column_values(column) {
            cells += 1;
            if !value.is_truthy() {
                continue;
            }
            if year_column && value.to_number().is_none() {
                errors += 1;
            }
            if date_column && !is_valid_date(value) {
                errors += 1;
            }
        }
    }

    let error_share = errors as f64 / cells as f64;
    ((-5.0 * error_share).exp() * 10.0).clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dataset::Record;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn clean_year_and_date_columns_score_ten() {
        let dataset = Dataset::new(vec![
            Record::new()
                .with("año", CellValue::Number(2024.0))
                .with("fecha_corte", text("2024-05-01T00:00:00.000")),
            Record::new()
                .with("año", text("2023"))
                .with("fecha_corte", text("2023-05-01")),
        ]);
        assert_eq!(conformity_score(&dataset), 10.0);
    }

    #[test]
    fn malformed_values_decay_exponentially() {
        let dataset = Dataset::new(vec![
            Record::new().with("year", text("twenty")),
            Record::new().with("year", text("2020")),
        ]);
        let expected = (-5.0f64 * 0.5).exp() * 10.0;
        assert!((conformity_score(&dataset) - expected).abs() < 1e-9);
    }

    #[test]
    fn blank_and_null_cells_are_not_errors() {
        let dataset = Dataset::new(vec![
            Record::new().with("update_date", CellValue::Null),
            Record::new().with("update_date", text("")),
        ]);
        assert_eq!(conformity_score(&dataset), 10.0);
    }

    #[test]
    fn column_matching_both_hints_is_checked_twice() {
        // "date_year" is checked as a year and as a date column
        let dataset = Dataset::new(vec![Record::new().with("date_year", text("soon"))]);
        let expected = (-5.0f64 * 2.0).exp() * 10.0;
        assert!((conformity_score(&dataset) - expected).abs() < 1e-9);
    }

    #[test]
    fn unrelated_columns_are_ignored() {
        let dataset = Dataset::new(vec![Record::new().with("name", text("!!"))]);
        assert_eq!(conformity_score(&dataset), 10.0);
        assert_eq!(conformity_score(&Dataset::default()), 10.0);
    }

    #[test]
    fn year_month_dates_conform() {
        let dataset = Dataset::new(vec![
            Record::new().with("fecha", text("2024-03")),
            Record::new().with("fecha", text("2023/11")),
        ]);
        assert_eq!(conformity_score(&dataset), 10.0);
    }
}
