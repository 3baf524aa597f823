pub mod job;
pub mod resume;
pub mod worker;

pub use job::{Job, JobType};
pub use resume::{EducationEntry, ExperienceEntry, ParsedResume, ProjectEntry};
pub use worker::WorkerProfile;
