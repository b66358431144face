pub mod cause;
pub mod contact;
pub mod donation;

pub use cause::Entity as Cause;
pub use contact::Entity as Contact;
pub use donation::Entity as Donation;
