//! Device resources for a Direct3D 11 sample renderer.
//!
//! [`DeviceResources`] acquires the device, the immediate context, a window-bound
//! flip-model swap chain, a render-target view over its back buffer and one (mono)
//! or two (side-by-side stereo) viewports, and hands borrowed references to a renderer.
//!
//! The vendor API sits behind [`GraphicsPlatform`]. On Windows the [`Direct3D11`]
//! platform talks to the driver; the [`mock`] platform records calls instead.

pub mod config;
pub mod device_resources;
pub mod error;
pub mod platform;
pub mod swap_chain_description;
pub mod viewport;

#[cfg(windows)]
pub mod direct3d11;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::FRAME_BUFFER_HEIGHT;
pub use config::FRAME_BUFFER_WIDTH;
pub use device_resources::DeviceResources;
pub use device_resources::OutputSize;
pub use error::DeviceResourcesError;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use error::Result;
pub use platform::GraphicsPlatform;
pub use swap_chain_description::SwapChainDescription;
pub use viewport::Viewport;
pub use viewport::Viewports;

#[cfg(windows)]
pub use direct3d11::Direct3D11;
