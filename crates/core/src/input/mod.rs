use crate::{step::Value, Result, VisualiserError};

/// Parses a comma and/or whitespace separated list of integers.
///
/// Rejects empty input, any token that is not an integer, and lists longer
/// than `max_len`.
pub fn parse_array(text: &str, max_len: usize) -> Result<Vec<Value>> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<Value>().map_err(|_| {
                VisualiserError::invalid(format!("`{token}` is not an integer"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        return Err(VisualiserError::invalid(
            "enter the array as comma separated integers, e.g. 1, 2, 3, 4, 5",
        ));
    }
    if values.len() > max_len {
        return Err(VisualiserError::invalid(format!(
            "the array may hold at most {max_len} elements, got {}",
            values.len()
        )));
    }

    Ok(values)
}

pub fn parse_target(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    trimmed
        .parse::<Value>()
        .map_err(|_| VisualiserError::invalid(format!("target `{trimmed}` is not an integer")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_commas_and_spaces() {
        assert_eq!(parse_array("1, 2,3  4\t-5", 15).unwrap(), vec![1, 2, 3, 4, -5]);
    }

    #[test]
    fn rejects_blank_input() {
        assert!(parse_array("  , ,", 15).is_err());
        assert!(parse_array("", 15).is_err());
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let err = parse_array("1, two, 3", 15).unwrap_err();
        assert!(err.to_string().contains("two"));
    }

    #[test]
    fn enforces_length_limit() {
        assert!(parse_array("1 2 3", 2).is_err());
        assert!(parse_array("1 2", 2).is_ok());
    }

    #[test]
    fn parses_targets() {
        assert_eq!(parse_target(" 42 ").unwrap(), 42);
        assert!(parse_target("4x").is_err());
        assert!(parse_target("").is_err());
    }
}
