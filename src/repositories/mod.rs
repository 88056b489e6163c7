mod directory;
mod traits;

pub use directory::Directory;
pub use traits::{AddOutcome, ContactRepository};
