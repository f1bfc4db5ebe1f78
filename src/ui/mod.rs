pub mod client;
pub mod form;
pub mod html;
pub mod layout;
pub mod list;
pub mod pages;

pub use client::{ApiClient, Catalog, ClientError};
pub use form::{MovieForm, MovieFormData};
pub use list::MovieList;
