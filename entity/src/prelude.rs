pub use super::address::Entity as Address;
pub use super::student::Entity as Student;
