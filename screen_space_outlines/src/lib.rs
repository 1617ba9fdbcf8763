/*!
# Screen Space Outlines

Screen-space outline post-processing, delivered as a plugin over a
host-controlled frame pipeline.

The feature injects three passes into every frame:

- **View space normals**: opaque geometry from the outline layers (and the
  occluder layers on top) rendered into `_SceneViewSpaceNormals`
- **Vertex colors**: the same geometry rendered into `_SceneVertexColors`
- **Outline**: a full-screen composite reading both textures and the
  camera depth, written back into the camera color target

## Architecture

- **FrameContext**: Host command trait (targets, draws, blits, samples)
- **RenderPass**: Per-frame setup/execute/cleanup lifecycle
- **RenderPassQueue**: Host list the feature enqueues its passes into
- **MaterialLibrary**: Named override materials resolved at creation
- **ScreenSpaceOutlines**: The feature itself

Hosts implement `FrameContext` and `RenderPassQueue`; everything else is
provided here.
*/

// Internal modules
mod error;
mod feature;
pub mod log;
pub mod pipeline;
pub mod material;
pub mod settings;
pub mod passes;

// Error types at the crate root (used by the exported macros)
pub use error::{Error, Result};
pub use feature::{ScreenSpaceOutlines, MIN_RENDER_PASS_EVENT};

// Main outlines namespace module
pub mod outlines {
    // Error types
    pub use crate::error::{Error, Result};

    // Feature
    pub use crate::feature::{ScreenSpaceOutlines, MIN_RENDER_PASS_EVENT};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Host pipeline sub-module
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // Material sub-module
    pub mod material {
        pub use crate::material::*;
    }

    // Settings sub-module
    pub mod settings {
        pub use crate::settings::*;
    }

    // Pass sub-module
    pub mod passes {
        pub use crate::passes::*;
    }
}

// Re-export math library at crate root
pub use glam;
