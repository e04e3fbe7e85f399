use eyre::{Result, bail};
use indexmap::IndexMap;
use indexmap::map::Entry;
use rcard::{Mark, StudentRecord};

pub trait Loader {
    fn load(&mut self) -> Result<StudentRecord>;
}

/// Add a mark, refusing to silently replace an earlier one for the same
/// subject.
pub fn insert_mark(marks: &mut IndexMap<String, Mark>, subject: String, mark: Mark) -> Result<()> {
    match marks.entry(subject) {
        Entry::Occupied(e) => bail!("duplicate mark for subject {}", e.key()),
        Entry::Vacant(e) => {
            e.insert(mark);
            Ok(())
        }
    }
}
