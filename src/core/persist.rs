use crate::core::models::Student;
use crate::core::roster::Roster;
use crate::errors::Result;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Fields per row: `name prn mark1 mark2 mark3`. Import and export share
/// the layout, so exported files round-trip back in unchanged.
pub const RECORD_FIELDS: usize = 5;

/// Parses whitespace-delimited record rows from any buffered source.
///
/// Blank lines are skipped. The first malformed row (wrong field count or
/// a mark that is not a number) silently ends the read: nothing from that
/// row or any later row is consumed, and no partial record is produced.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Student>> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let Some(student) = parse_record(&fields) else {
            break;
        };
        records.push(student);
    }

    Ok(records)
}

fn parse_record(fields: &[&str]) -> Option<Student> {
    if fields.len() != RECORD_FIELDS {
        return None;
    }
    let mut marks = [0.0; 3];
    for (slot, raw) in marks.iter_mut().zip(&fields[2..]) {
        *slot = raw.parse::<f64>().ok()?;
    }
    Some(Student::new(fields[0], fields[1], marks))
}

/// Writes one row per record, in current roster order.
pub fn write_records<W: Write>(roster: &Roster, out: &mut W) -> Result<()> {
    for s in roster.iter() {
        let [m1, m2, m3] = s.marks();
        writeln!(out, "{} {} {} {} {}", s.name(), s.prn(), m1, m2, m3)?;
    }
    Ok(())
}

/// Opens `path` and reads every well-formed record from it. The handle is
/// closed before returning, on success and failure alike.
pub fn import_file(path: &Path) -> Result<Vec<Student>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

/// Writes the whole roster to `path`, creating parent directories first.
pub fn export_file(roster: &Roster, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_records(roster, &mut writer)?;
    writer.flush()?;
    Ok(path.to_path_buf())
}

/// Relative filenames resolve against the configured data directory;
/// absolute paths pass through untouched.
pub fn resolve_data_path(data_dir: &Path, raw: &str) -> PathBuf {
    let candidate = PathBuf::from(raw);
    if candidate.is_absolute() {
        candidate
    } else {
        data_dir.join(candidate)
    }
}
