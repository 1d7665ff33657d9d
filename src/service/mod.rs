//! CrudService: generic CRUD over the SQL builder, plus request validation.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;
