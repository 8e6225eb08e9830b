pub mod catalog;
pub mod constants;
pub mod decode;
pub mod dimensions;
pub mod error;
pub mod layers;
pub mod matting;
pub mod orientation;
pub mod preview;
pub mod session;

pub use catalog::*;
pub use constants::*;
pub use decode::*;
pub use dimensions::*;
pub use error::*;
pub use layers::*;
pub use matting::*;
pub use orientation::*;
pub use preview::*;
pub use session::*;
