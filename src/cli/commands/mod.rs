pub mod add;
pub mod check;
mod command_result;
pub mod complete;
pub mod init;
pub mod normalize;
pub mod verify;

pub use command_result::*;
