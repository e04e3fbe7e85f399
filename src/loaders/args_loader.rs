use super::loader::{Loader, insert_mark};
use eyre::{Result, eyre};
use indexmap::IndexMap;
use rcard::{Mark, StudentRecord};
use tracing::trace;

/// Student given on the command line as a name and `SUBJECT=SCORE` pairs.
pub struct ArgsLoader {
    name: String,
    marks: Vec<String>,
}

impl ArgsLoader {
    pub fn new(name: Option<String>, marks: Vec<String>) -> Self {
        Self {
            name: name.unwrap_or_default(),
            marks,
        }
    }
}

impl Loader for ArgsLoader {
    fn load(&mut self) -> Result<StudentRecord> {
        let mut marks = IndexMap::new();
        for arg in &self.marks {
            let (subject, score) = arg
                .split_once('=')
                .ok_or_else(|| eyre!("mark {arg:?} is not of the form SUBJECT=SCORE"))?;
            let mark = Mark::parse(score);
            trace!(subject, %mark, "mark from command line");
            insert_mark(&mut marks, subject.trim().to_owned(), mark)?;
        }
        Ok(StudentRecord {
            name: self.name.clone(),
            marks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(marks: &[&str]) -> Result<StudentRecord> {
        ArgsLoader::new(
            Some("Rahul".into()),
            marks.iter().map(|&m| m.to_owned()).collect(),
        )
        .load()
    }

    #[test]
    fn test_marks_in_order() {
        let student = load(&["maths=85", "science = 92", "english=78.5"]).unwrap();
        assert_eq!(
            student,
            StudentRecord::new(
                "Rahul",
                [("maths", 85.0), ("science", 92.0), ("english", 78.5)]
            )
        );
    }

    #[test]
    fn test_non_numeric_is_kept() {
        let student = load(&["maths=absent"]).unwrap();
        assert_eq!(student.marks["maths"].score(), None);
    }

    #[test]
    fn test_malformed_and_duplicate() {
        assert!(load(&["maths"]).is_err());
        assert!(load(&["maths=1", "maths=2"]).is_err());
    }

    #[test]
    fn test_missing_name_is_empty() {
        let student = ArgsLoader::new(None, vec!["m=1".into()]).load().unwrap();
        assert!(student.name.is_empty());
    }
}
