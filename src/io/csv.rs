use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{LoveError, Result};
use crate::love::Shell;
use crate::profile::Profile;

/// Read a tabulated profile: one `radius,density` pair per record.
///
/// Lines starting with `#` are comments and fields are trimmed. A first
/// record whose fields are both non-numeric is taken as a header.
pub fn read_profile<R: Read>(reader: R) -> Result<Profile> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let mut radius = Vec::new();
    let mut density = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(parse_error)?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        if record.len() != 2 {
            return Err(LoveError::Parse {
                line,
                message: format!("expected 2 columns, found {}", record.len()),
            });
        }

        match (record[0].parse::<f64>(), record[1].parse::<f64>()) {
            (Ok(r), Ok(d)) => {
                radius.push(r);
                density.push(d);
            }
            // Header row
            (Err(_), Err(_)) if radius.is_empty() => {}
            (Err(e), _) | (_, Err(e)) => {
                return Err(LoveError::Parse {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::debug!(samples = radius.len(), "read tabulated profile");
    Profile::from_slices(&radius, &density)
}

/// Read a tabulated profile from a file.
pub fn read_profile_file(path: impl AsRef<Path>) -> Result<Profile> {
    let file = std::fs::File::open(path)?;
    read_profile(file)
}

fn parse_error(err: csv::Error) -> LoveError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => LoveError::Io(e),
        _ => LoveError::Parse { line, message },
    }
}

/// Write the integration trajectory in CSV format.
///
/// Columns: radius, density, mass, mean_density, eta
pub fn write_trajectory<W: Write>(writer: &mut W, shells: &[Shell]) -> io::Result<()> {
    writeln!(writer, "radius,density,mass,mean_density,eta")?;

    for s in shells {
        writeln!(
            writer,
            "{:.10e},{:.10e},{:.10e},{:.10e},{:.10e}",
            s.radius, s.density, s.mass, s.mean_density, s.eta,
        )?;
    }

    Ok(())
}

/// Write the trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, shells: &[Shell]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, shells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_profile_with_header_and_comments() {
        let text = "\
# Jupiter-ish
radius,density
0.25, 3.0
# mid
0.50 , 2.0
1.00,0.0
";
        let p = read_profile(text.as_bytes()).unwrap();
        assert_eq!(p.radius(), &[0.25, 0.5, 1.0]);
        assert_eq!(p.density(), &[3.0, 2.0, 0.0]);
    }

    #[test]
    fn reads_headerless_profile() {
        let p = read_profile("0.5,1\n1.0,1\n".as_bytes()).unwrap();
        assert_eq!(p.len(), 2);
        assert!((p.lovek2().unwrap() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read_profile("0.5,1\n1.0,1,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoveError::Parse { .. }), "got {}", err);
    }

    #[test]
    fn rejects_bad_number_after_data() {
        let err = read_profile("0.5,1\n1.0,abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoveError::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = read_profile("0.5,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoveError::Parse { line: 1, .. }));
    }

    #[test]
    fn parsed_profile_is_validated() {
        let err = read_profile("0.5,1\n0.4,1\n".as_bytes()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let p = Profile::from_slices(&[0.5, 1.0], &[1.0, 1.0]).unwrap();
        let shells = p.integrate().unwrap();

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &shells).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "radius,density,mass,mean_density,eta");
        assert_eq!(lines.len(), 3); // header + 2 shells
        assert!(lines[1].starts_with("5.0000000000e-1,"));
    }
}
