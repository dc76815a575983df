pub mod course;
pub mod event;
pub mod person;
pub mod qualification_record;
