use std::io::{self, BufRead};

use crate::read::open_file;

#[derive(Debug, Default)]
/// Reader of style settings written as `key: value` lines.
///
/// Everything after a `#` that is not quoted is a comment.  Lines that are
/// blank or have no key are skipped.
pub struct RcReader;

impl RcReader {
    pub fn read(&self, path: &str) -> io::Result<Vec<(String, String)>> {
        let mut settings = Vec::new();
        for (number, line) in open_file(path)?.lines().enumerate() {
            match line {
                Ok(as_string) => {
                    if let Some(setting) = self.parse_line(&as_string) {
                        settings.push(setting);
                    } else if !strip_comment(&as_string).trim().is_empty() {
                        debug!("Cannot parse rc line {}: '{}'", number + 1, as_string);
                    }
                }
                Err(error) => error!("{}", error),
            }
        }
        Ok(settings)
    }

    pub fn parse_line(&self, line: &str) -> Option<(String, String)> {
        let (key, value) = strip_comment(line).split_once(':')?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }
        Some((key.to_string(), value.trim().to_string()))
    }
}

fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match (c, quote) {
            ('"', None) | ('\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('#', None) => return &line[..i],
            _ => (),
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn basic_reader_test() {
        let reader = RcReader::default();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "## grid settings").unwrap();
        writeln!(file, "grid.color : k   # colour of the grid lines").unwrap();
        writeln!(file, "grid.linestyle: --").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "this is not a setting").unwrap();
        writeln!(file, "font.family: \"Times # New Roman\"").unwrap();
        let settings = reader.read(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            settings,
            vec![
                ("grid.color".to_string(), "k".to_string()),
                ("grid.linestyle".to_string(), "--".to_string()),
                (
                    "font.family".to_string(),
                    "\"Times # New Roman\"".to_string()
                ),
            ]
        );
    }

    #[test]
    fn empty_file() {
        let reader = RcReader::default();
        let file = NamedTempFile::new().unwrap();
        assert!(reader.read(file.path().to_str().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn missing_file() {
        let reader = RcReader::default();
        assert!(reader.read("/nonexistent/matplotlibrc").is_err());
    }

    #[test]
    fn lines() {
        let reader = RcReader::default();
        assert_eq!(
            reader.parse_line("  axes.linewidth:2"),
            Some(("axes.linewidth".to_string(), "2".to_string()))
        );
        assert_eq!(reader.parse_line("# axes.linewidth: 2"), None);
        assert_eq!(reader.parse_line(": 2"), None);
        assert_eq!(reader.parse_line("axes linewidth: 2"), None);
        assert_eq!(
            reader.parse_line("grid.color: 'b0b0b0'"),
            Some(("grid.color".to_string(), "'b0b0b0'".to_string()))
        );
    }
}
