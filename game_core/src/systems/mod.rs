pub mod bounce;
pub mod collision;
pub mod forces;
pub mod integrate;
pub mod spawn;

pub use bounce::*;
pub use collision::*;
pub use forces::*;
pub use integrate::*;
pub use spawn::*;
