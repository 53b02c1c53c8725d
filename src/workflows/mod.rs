pub(crate) mod dates;
pub mod employees;
pub mod people;
