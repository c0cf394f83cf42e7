mod catalog;
mod token;

pub use catalog::MetadataCatalog;
pub use token::TokenStore;
