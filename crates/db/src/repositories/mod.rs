//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Methods that must run
//! inside the assignment engine's transaction accept `&mut PgConnection`
//! instead.

pub mod assignment_repo;
pub mod cohort_repo;
pub mod instructor_repo;
pub mod slot_repo;
pub mod subject_repo;
pub mod user_repo;
pub mod week_repo;

pub use assignment_repo::AssignmentRepo;
pub use cohort_repo::CohortRepo;
pub use instructor_repo::InstructorRepo;
pub use slot_repo::SlotRepo;
pub use subject_repo::SubjectRepo;
pub use user_repo::UserRepo;
pub use week_repo::WeekRepo;
