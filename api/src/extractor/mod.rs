mod form;
mod json;

pub use form::Form;
pub use json::Json;
