mod content;
mod device;
mod schedule;
mod user;

pub use content::*;
pub use device::*;
pub use schedule::*;
pub use user::*;
