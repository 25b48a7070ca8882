pub mod catalog;
pub mod note;
pub mod paper;
pub mod question;
pub mod session;
pub mod syllabus;
