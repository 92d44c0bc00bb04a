use crate::model::SignalResult;

/// Formats the result the way it is shown to the user: one row per
/// confidence band, widest band first, bounds and the current difference
/// at two decimals.
pub fn format_rows(result: &SignalResult) -> Vec<[String; 6]> {
    let as_of = result.as_of_date.format("%d-%m-%Y").to_string();
    result
        .bands
        .iter()
        .zip(result.indications.iter())
        .map(|(band, indication)| {
            [
                as_of.clone(),
                format!("{:.0}%", band.confidence_level * 100.0),
                format!("{:.2}", band.lower_bound),
                format!("{:.2}", band.upper_bound),
                format!("{:.2}", result.current_difference),
                indication.to_string(),
            ]
        })
        .collect()
}

pub fn print_table(result: &SignalResult) {
    println!(
        "{:<12} {:>19} {:>14} {:>15} {:>22} {:>11}",
        "Date",
        "Confidence Interval",
        "Low Threshold",
        "High Threshold",
        "Current MA Difference",
        "Indication"
    );
    for row in format_rows(result) {
        println!(
            "{:<12} {:>19} {:>14} {:>15} {:>22} {:>11}",
            row[0], row[1], row[2], row[3], row[4], row[5]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfidenceBand, Indication};
    use chrono::NaiveDate;

    fn sample_result() -> SignalResult {
        SignalResult {
            as_of_date: NaiveDate::from_ymd_opt(2024, 4, 26).unwrap(),
            current_difference: -1.2345,
            bands: vec![
                ConfidenceBand {
                    confidence_level: 0.95,
                    lower_bound: -4.4242,
                    upper_bound: 4.426,
                },
                ConfidenceBand {
                    confidence_level: 0.90,
                    lower_bound: -3.7,
                    upper_bound: 3.7,
                },
                ConfidenceBand {
                    confidence_level: 0.80,
                    lower_bound: -2.9,
                    upper_bound: 2.9,
                },
            ],
            indications: vec![Indication::Hold, Indication::Hold, Indication::Buy],
        }
    }

    #[test]
    fn test_three_rows_in_band_order() {
        let rows = format_rows(&sample_result());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][1], "95%");
        assert_eq!(rows[1][1], "90%");
        assert_eq!(rows[2][1], "80%");
    }

    #[test]
    fn test_date_format() {
        let rows = format_rows(&sample_result());
        assert_eq!(rows[0][0], "26-04-2024");
    }

    #[test]
    fn test_two_decimal_convention() {
        let rows = format_rows(&sample_result());
        assert_eq!(rows[0][2], "-4.42");
        assert_eq!(rows[0][3], "4.43");
        assert_eq!(rows[0][4], "-1.23");
    }

    #[test]
    fn test_indication_column() {
        let rows = format_rows(&sample_result());
        assert_eq!(rows[0][5], "Hold");
        assert_eq!(rows[2][5], "Buy");
    }
}
