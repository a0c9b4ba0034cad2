use crate::orbit::OrbitError;

/// Split a raw element set into (optional name, line 1, line 2), accepting
/// both the bare 2-line and the named 3-line form.
pub fn parse_tle_lines(tle: &str) -> Result<(Option<String>, String, String), OrbitError> {
    let lines: Vec<String> = tle
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    match lines.len() {
        2 => Ok((None, lines[0].clone(), lines[1].clone())),
        3 => Ok((Some(lines[0].trim().to_string()), lines[1].clone(), lines[2].clone())),
        _ => Err(OrbitError::InvalidTleFormat),
    }
}

/// Extract a fixed-column field, byte-indexed the way the TLE format defines
/// its columns.
pub fn fixed_field<'a>(
    line: &'a str,
    start: usize,
    end: usize,
    field: &'static str,
) -> Result<&'a str, OrbitError> {
    line.get(start..end).ok_or_else(|| OrbitError::MalformedField {
        field,
        value: line.to_string(),
    })
}

pub fn fixed_f64(line: &str, start: usize, end: usize, field: &'static str) -> Result<f64, OrbitError> {
    let raw = fixed_field(line, start, end, field)?;
    raw.trim()
        .parse()
        .map_err(|_| OrbitError::MalformedField {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE1: &str = "1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992";
    const LINE2: &str = "2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008";

    #[test]
    fn accepts_two_line_form() {
        let tle = format!("{}\n{}\n", LINE1, LINE2);
        let (name, l1, l2) = parse_tle_lines(&tle).unwrap();
        assert!(name.is_none());
        assert_eq!(l1, LINE1);
        assert_eq!(l2, LINE2);
    }

    #[test]
    fn accepts_named_three_line_form() {
        let tle = format!("ISS (ZARYA)\n{}\n{}\n", LINE1, LINE2);
        let (name, _, _) = parse_tle_lines(&tle).unwrap();
        assert_eq!(name.as_deref(), Some("ISS (ZARYA)"));
    }

    #[test]
    fn skips_blank_lines() {
        let tle = format!("\n{}\n\n{}\n\n", LINE1, LINE2);
        assert!(parse_tle_lines(&tle).is_ok());
    }

    #[test]
    fn rejects_wrong_line_count() {
        assert!(matches!(
            parse_tle_lines("only one line"),
            Err(OrbitError::InvalidTleFormat)
        ));
    }

    #[test]
    fn fixed_field_out_of_range_is_malformed() {
        assert!(fixed_f64("2 25544", 52, 63, "mean motion").is_err());
    }
}
