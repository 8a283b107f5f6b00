use crate::core::models::Student;
use std::io::{self, Write};

/// Divider printed between records on the class report card.
pub const RECORD_DIVIDER: &str = "--------------------------";

/// Renders a single record in the fixed attribute order: name, PRN, the
/// three subject marks, then the derived CGPA. Numbers use the default
/// `f64` formatting so exported and displayed values agree.
#[derive(Debug, Default, Clone)]
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render into any writer (used by tests to capture output).
    pub fn render_record<W: Write + ?Sized>(
        &self,
        student: &Student,
        out: &mut W,
    ) -> io::Result<()> {
        let [m1, m2, m3] = student.marks();
        writeln!(out, "Name: {}", student.name())?;
        writeln!(out, "PRN: {}", student.prn())?;
        writeln!(out, "Subject 1 Marks: {m1}")?;
        writeln!(out, "Subject 2 Marks: {m2}")?;
        writeln!(out, "Subject 3 Marks: {m3}")?;
        writeln!(out, "CGPA: {}", student.cgpa())
    }

    /// Record preceded by a header line ("Highest Scorer:", etc).
    pub fn render_labeled<W: Write + ?Sized>(
        &self,
        header: &str,
        student: &Student,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "{header}")?;
        self.render_record(student, out)
    }

    /// Every record in sequence order, divider-separated.
    pub fn render_report_card<W: Write + ?Sized>(
        &self,
        students: &[Student],
        out: &mut W,
    ) -> io::Result<()> {
        for student in students {
            self.render_record(student, out)?;
            writeln!(out, "{RECORD_DIVIDER}")?;
        }
        Ok(())
    }

    pub fn display_record(&self, student: &Student) {
        let mut stdout = io::stdout();
        let _ = self.render_record(student, &mut stdout);
    }

    pub fn display_labeled(&self, header: &str, student: &Student) {
        let mut stdout = io::stdout();
        let _ = self.render_labeled(header, student, &mut stdout);
    }

    pub fn display_report_card(&self, students: &[Student]) {
        let mut stdout = io::stdout();
        let _ = self.render_report_card(students, &mut stdout);
    }
}
