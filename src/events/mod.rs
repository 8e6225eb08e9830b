pub mod controls;
pub mod pointer;
pub mod upload;

pub use controls::wire_controls;
pub use pointer::wire_pointer_handlers;
pub use upload::wire_upload_inputs;
