pub mod courses;
pub mod enrollments;
pub mod instructors;
pub mod lectures;
pub mod reviews;
pub mod students;
