use super::loader::Loader;
use eyre::{Result, WrapErr};
use rcard::StudentRecord;
use std::fs;
use std::path::PathBuf;

/// Student record stored as TOML:
///
/// ```toml
/// name = "Rahul"
///
/// [marks]
/// maths = 85
/// science = 92
/// ```
pub struct TomlLoader {
    path: PathBuf,
    name: Option<String>,
}

impl TomlLoader {
    /// `name`, when given, replaces the name found in the file.
    pub fn new(path: PathBuf, name: Option<String>) -> Self {
        Self { path, name }
    }

    pub fn parse(content: &str) -> Result<StudentRecord> {
        toml::from_str(content).wrap_err("cannot parse student record")
    }
}

impl Loader for TomlLoader {
    fn load(&mut self) -> Result<StudentRecord> {
        let content = fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("cannot read {}", self.path.display()))?;
        let mut student = Self::parse(&content)
            .wrap_err_with(|| format!("cannot load student from {}", self.path.display()))?;
        if let Some(name) = &self.name {
            student.name.clone_from(name);
        }
        Ok(student)
    }
}
