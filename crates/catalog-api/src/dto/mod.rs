//! Data Transfer Objects for API requests and responses.
//!
//! Wire names are PascalCase (`CategoryID`, `Name`, …); request DTOs also
//! accept the camelCase spellings.

pub mod request;
pub mod response;
