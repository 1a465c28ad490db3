//! Application layer containing use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Use case implementations.
pub mod use_cases;

pub use dto::SendRequest;
pub use use_cases::SendMessageUseCase;
