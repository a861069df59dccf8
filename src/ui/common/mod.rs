pub mod form;
pub mod modal;
pub mod section;

pub use form::{FormField, SelectField, TextAreaField};
pub use modal::BaseModal;
pub use section::Section;
