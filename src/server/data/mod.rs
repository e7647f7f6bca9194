//! Database repository layer for all domain entities.
//!
//! Repositories handle the database operations for each domain. They use SeaORM entity
//! models internally and return domain models so the service layer never sees entities.
//! Every repository is generic over `ConnectionTrait`, which lets services run several
//! repository calls inside one transaction.

pub mod attendance;
pub mod course;
pub mod grade;
pub mod message;
pub mod observation;
pub mod student;
pub mod user;

#[cfg(test)]
mod test;
