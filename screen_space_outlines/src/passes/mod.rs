/// The three outline passes

mod texture_pass;
mod outline_pass;

pub use texture_pass::{TextureDraw, TexturePass, VERTEX_COLORS_PASS_NAME, VIEW_SPACE_NORMALS_PASS_NAME};
pub use outline_pass::{bind_outline_parameters, OutlinePass, OUTLINE_PASS_NAME};
