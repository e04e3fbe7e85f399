use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade band for an unrounded percentage.
    ///
    /// | Percentage | Grade |
    /// |------------|-------|
    /// | >= 90      | A+    |
    /// | >= 80      | A     |
    /// | >= 70      | B     |
    /// | >= 60      | C     |
    /// | >= 40      | D     |
    /// | < 40       | F     |
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage {
            p if p >= 90.0 => Grade::APlus,
            p if p >= 80.0 => Grade::A,
            p if p >= 70.0 => Grade::B,
            p if p >= 60.0 => Grade::C,
            p if p >= 40.0 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub name: String,
    pub total_marks: f64,
    /// Rounded to two decimal places.
    pub percentage: f64,
    pub grade: Grade,
    pub highest_subject: String,
    pub lowest_subject: String,
    pub passed_subjects: Vec<String>,
    pub failed_subjects: Vec<String>,
    pub subject_count: usize,
}
