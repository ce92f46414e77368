/// Error mapping between the domain and HTTP
pub mod error_handling;
