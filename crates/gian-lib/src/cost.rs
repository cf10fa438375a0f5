// ABOUTME: Cost field cleaning and thousands regrouping
// ABOUTME: Strips commas and a trailing 원 suffix, then re-renders with separators

use crate::error::ValidationError;

/// Cleans a raw cost entry and re-renders it with thousands separators.
///
/// Commas and a trailing `원` suffix are stripped before parsing, so
/// `"500,000원"`, `"500000"`, and `" 500,000 "` all come out as `"500,000"`.
/// A blank entry stays blank; the document shows its literal `￦.-` line in
/// that case. Anything else that does not parse as a non-negative number is
/// rejected with the form's cost message.
pub fn normalize(raw: &str) -> Result<String, ValidationError> {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return Ok(String::new());
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| ValidationError::BadCost(cleaned.clone()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::BadCost(cleaned));
    }

    Ok(group_thousands(value.round() as u64))
}

/// Removes every comma, then a single trailing `원`, trimming around both.
fn clean(raw: &str) -> String {
    let without_commas: String = raw.chars().filter(|&c| c != ',').collect();
    let trimmed = without_commas.trim();
    match trimmed.strip_suffix('원') {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Renders a whole amount with a comma every three digits.
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number_gets_grouped() {
        assert_eq!(normalize("500000").unwrap(), "500,000");
        assert_eq!(normalize("1234567").unwrap(), "1,234,567");
    }

    #[test]
    fn test_existing_commas_are_regrouped() {
        assert_eq!(normalize("500,000").unwrap(), "500,000");
        // Misplaced commas are stripped, not trusted.
        assert_eq!(normalize("50,00,00").unwrap(), "500,000");
    }

    #[test]
    fn test_trailing_won_suffix_is_stripped() {
        assert_eq!(normalize("500,000원").unwrap(), "500,000");
        assert_eq!(normalize("500000 원").unwrap(), "500,000");
    }

    #[test]
    fn test_won_only_trails() {
        // A leading 원 is not a suffix; the remainder fails to parse.
        assert_eq!(
            normalize("원500").unwrap_err(),
            ValidationError::BadCost("원500".to_string())
        );
    }

    #[test]
    fn test_blank_cost_stays_blank() {
        assert_eq!(normalize("").unwrap(), "");
        assert_eq!(normalize("   ").unwrap(), "");
        assert_eq!(normalize(" 원 ").unwrap(), "");
    }

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(normalize("0").unwrap(), "0");
        assert_eq!(normalize("999").unwrap(), "999");
        assert_eq!(normalize("1000").unwrap(), "1,000");
    }

    #[test]
    fn test_fractions_round_to_whole_won() {
        assert_eq!(normalize("1234.4").unwrap(), "1,234");
        assert_eq!(normalize("1234.5").unwrap(), "1,235");
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        for raw in ["오십만", "500k", "12 34", "12.34.56"] {
            let err = normalize(raw).unwrap_err();
            assert!(
                matches!(err, ValidationError::BadCost(_)),
                "raw {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_negative_and_non_finite_are_rejected() {
        assert_eq!(
            normalize("-500").unwrap_err(),
            ValidationError::BadCost("-500".to_string())
        );
        assert!(normalize("inf").is_err());
        assert!(normalize("NaN").is_err());
    }

    #[test]
    fn test_rejection_carries_cleaned_token() {
        // The message echoes the cleaned form, matching what the parser saw.
        assert_eq!(
            normalize("5백만원").unwrap_err(),
            ValidationError::BadCost("5백만".to_string())
        );
    }
}
