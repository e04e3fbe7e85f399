pub use self::policy::{GradingPolicy, InvalidPolicy};
pub use self::report::{Grade, ReportCard};
pub use self::student::{Mark, StudentRecord};

mod policy;
mod report;
mod student;
