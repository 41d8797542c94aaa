use bevy_math::UVec2;

/// Per-eye width of the frame buffer, in pixels.
pub const FRAME_BUFFER_WIDTH: u32 = 1280;

/// Per-eye height of the frame buffer, in pixels.
pub const FRAME_BUFFER_HEIGHT: u32 = 720;

pub const FRAME_BUFFER_SIZE: UVec2 = UVec2::new(FRAME_BUFFER_WIDTH, FRAME_BUFFER_HEIGHT);

/// Front and back buffer.
pub const SWAP_CHAIN_BUFFER_COUNT: u32 = 2;

/// The swap chain buffer the render-target view is created over.
pub const BACK_BUFFER_INDEX: u32 = 0;

/// Wait for one vertical blank before flipping.
pub const PRESENT_SYNC_INTERVAL: u32 = 1;

pub const PRESENT_FLAGS: u32 = 0;
