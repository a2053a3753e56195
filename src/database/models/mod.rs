pub mod folders;
pub mod notes;
