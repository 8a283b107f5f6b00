use std::fmt;

/// Marks that make up a full CGPA of 10.0 (three subjects, 10 marks each).
const FULL_MARKS: f64 = 30.0;
const CGPA_SCALE: f64 = 10.0;

/// One student's identity and marks, plus the derived CGPA.
///
/// The CGPA is computed once at construction and the record is immutable
/// afterward; fields are private and only readable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    prn: String,
    marks: [f64; 3],
    cgpa: f64,
}

impl Student {
    /// Builds a record and derives its CGPA out of 10. Marks are taken as
    /// given; out-of-range values simply yield a CGPA outside the nominal
    /// 0-10 band.
    pub fn new(name: impl Into<String>, prn: impl Into<String>, marks: [f64; 3]) -> Self {
        let cgpa = marks.iter().sum::<f64>() / FULL_MARKS * CGPA_SCALE;
        Self {
            name: name.into(),
            prn: prn.into(),
            marks,
            cgpa,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prn(&self) -> &str {
        &self.prn
    }

    pub fn marks(&self) -> [f64; 3] {
        self.marks
    }

    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student(name='{}', prn='{}', marks=[{}, {}, {}], cgpa={})",
            self.name, self.prn, self.marks[0], self.marks[1], self.marks[2], self.cgpa
        )
    }
}
