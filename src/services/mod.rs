pub mod uploads;

pub use uploads::{FileStatus, StudyFile, UploadManager};
