pub mod aggregate;

pub use aggregate::{MenuAttributes, MenuId, MenuRecord};
