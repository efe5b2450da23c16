pub mod delete;
pub mod edit;
pub mod fields;
pub mod model;
pub mod register;
pub mod review;
pub mod table;
