//! Aggregate statistics over the roster

use crate::record::Student;
use rustc_hash::FxHashMap;

/// Summary of the records currently held
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    /// `None` when the roster is empty
    pub average_gpa: Option<f64>,
    pub course_counts: FxHashMap<String, usize>,
}

impl Statistics {
    pub fn from_students(students: &[Student]) -> Self {
        let count = students.len();
        let average_gpa = if count == 0 {
            None
        } else {
            let total: f64 = students.iter().map(Student::gpa).sum();
            Some(total / count as f64)
        };

        let mut course_counts = FxHashMap::default();
        for student in students {
            *course_counts.entry(student.course().to_string()).or_insert(0) += 1;
        }

        Statistics {
            count,
            average_gpa,
            course_counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Course counts, largest first, ties broken by course name
    pub fn course_distribution(&self) -> Vec<(&str, usize)> {
        let mut distribution: Vec<(&str, usize)> = self
            .course_counts
            .iter()
            .map(|(course, count)| (course.as_str(), *count))
            .collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        distribution
    }
}
