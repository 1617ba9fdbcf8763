/// Host pipeline interface - traits and types the host implements or supplies

pub mod texture;
pub mod drawing;
pub mod frame;
pub mod frame_context;
pub mod render_pass;

pub use texture::*;
pub use drawing::*;
pub use frame::*;
pub use frame_context::*;
pub use render_pass::*;

// Mock frame context for tests (no host required)
#[cfg(test)]
pub mod mock_frame_context;
