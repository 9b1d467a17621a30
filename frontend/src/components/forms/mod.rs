pub mod client_form;

pub use client_form::ClientEditForm;
