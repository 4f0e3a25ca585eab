pub mod black_lists;
pub mod courses;
pub mod enrolls;
pub mod identity_users;
pub mod instructors;
pub mod sections;
pub mod student_progress;
pub mod students;
pub mod web_admins;
