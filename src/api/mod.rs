pub mod rest;
pub mod traits;

pub use rest::RestListingApi;
pub use traits::ListingApi;
