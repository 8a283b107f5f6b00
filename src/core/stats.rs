use crate::core::models::Student;

/// Arithmetic mean of every record's CGPA.
///
/// An empty collection averages to 0.0 by definition; it is not an error.
pub fn average_cgpa(students: &[Student]) -> f64 {
    if students.is_empty() {
        return 0.0;
    }
    let total: f64 = students.iter().map(Student::cgpa).sum();
    total / students.len() as f64
}
