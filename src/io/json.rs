use std::io::{self, Write};
use std::path::Path;

use crate::love::relative_error;

/// Result of one Love number computation, optionally checked against a
/// known value.
#[derive(Debug, Clone)]
pub struct LoveSummary {
    pub name: String,
    pub points: usize,
    pub k2: f64,
    pub expected: Option<f64>,
}

impl LoveSummary {
    pub fn relative_error(&self) -> Option<f64> {
        self.expected.map(|e| relative_error(self.k2, e))
    }
}

/// Write a list of summaries as a JSON array.
pub fn write_summary<W: Write>(writer: &mut W, summaries: &[LoveSummary]) -> io::Result<()> {
    writeln!(writer, "[")?;
    for (i, s) in summaries.iter().enumerate() {
        writeln!(writer, "  {{")?;
        writeln!(writer, "    \"name\": \"{}\",", escape(&s.name))?;
        writeln!(writer, "    \"points\": {},", s.points)?;
        match (s.expected, s.relative_error()) {
            (Some(expected), Some(err)) => {
                writeln!(writer, "    \"k2\": {},", fixed(s.k2))?;
                writeln!(writer, "    \"expected\": {},", fixed(expected))?;
                writeln!(writer, "    \"relative_error\": {}", scientific(err))?;
            }
            _ => writeln!(writer, "    \"k2\": {}", fixed(s.k2))?,
        }
        let sep = if i + 1 < summaries.len() { "," } else { "" };
        writeln!(writer, "  }}{}", sep)?;
    }
    writeln!(writer, "]")?;
    Ok(())
}

/// Write summaries as JSON to a file.
pub fn write_summary_file(path: impl AsRef<Path>, summaries: &[LoveSummary]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summaries)
}

// JSON has no inf/NaN
fn fixed(v: f64) -> String {
    if v.is_finite() { format!("{:.12}", v) } else { "null".into() }
}

fn scientific(v: f64) -> String {
    if v.is_finite() { format!("{:.6e}", v) } else { "null".into() }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_with_expected_reports_error() {
        let s = LoveSummary {
            name: "Uniform density".into(),
            points: 2048,
            k2: 1.5,
            expected: Some(1.5),
        };
        assert_eq!(s.relative_error(), Some(0.0));

        let mut buf = Vec::new();
        write_summary(&mut buf, &[s]).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"name\": \"Uniform density\""));
        assert!(json.contains("\"relative_error\""));
        assert!(json.trim_end().ends_with(']'));
    }

    #[test]
    fn summary_without_expected_omits_error() {
        let s = LoveSummary {
            name: "table \"A\"".into(),
            points: 10,
            k2: 0.52,
            expected: None,
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &[s.clone(), s]).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(!json.contains("relative_error"));
        assert!(json.contains("table \\\"A\\\""));
        assert_eq!(json.matches("},").count(), 1);
    }

    #[test]
    fn non_finite_values_become_null() {
        let s = LoveSummary {
            name: "degenerate".into(),
            points: 2,
            k2: f64::NAN,
            expected: Some(-f64::EPSILON),
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &[s]).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"k2\": null,"));
        assert!(json.contains("\"relative_error\": null"));
        assert!(!json.contains("inf") && !json.contains("NaN"), "{}", json);
    }
}
