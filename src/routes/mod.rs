// Export all route modules
pub mod causes;
pub mod contact;
pub mod donations;

// Re-export all route handlers for easy importing
pub use causes::*;
pub use contact::*;
pub use donations::*;
