mod attendance;
mod course;
mod grade;
mod message;
mod observation;
mod student;
mod user;
