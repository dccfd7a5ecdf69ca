//! Data models for `StudyHub`

pub mod assignment;
pub mod note;
pub mod profile;
pub mod session;
pub mod subject;

pub use assignment::{Assignment, Priority, Status};
pub use note::{Note, NoteKind};
pub use profile::Profile;
pub use session::{parse_weekday, weekday_name, ClassSession};
pub use subject::{GradedAssignment, Subject};
