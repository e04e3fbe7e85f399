pub mod card;
pub mod checks;
pub mod model;
pub mod stats;

pub use card::{build, compute, compute_with};
pub use checks::{InvalidStudent, ValidStudent, validate};
pub use model::{Grade, GradingPolicy, InvalidPolicy, Mark, ReportCard, StudentRecord};
