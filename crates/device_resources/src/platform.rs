use crate::error::ErrorCode;
use crate::swap_chain_description::SwapChainDescription;
use crate::viewport::Viewport;

/// The slice of a hardware rasterization API that device resources need.
///
/// Every handle is an owned value and releasing it means dropping it. Handles
/// obtained only to reach another one (the DXGI device and adapter inside
/// [`GraphicsPlatform::locate_factory`]) never leave the call that acquired them.
///
/// Errors are raw platform codes; [`crate::DeviceResources`] decides which stage
/// of acquisition they belong to.
pub trait GraphicsPlatform {
    type BaseDevice;
    type BaseContext;
    /// The extended device kept for the lifetime of the resources.
    type Device;
    /// The extended immediate context.
    type Context;
    type Factory;
    /// A factory able to bind flip-model swap chains to a native window.
    type SwapChainFactory;
    type SwapChain;
    type Texture;
    type RenderTargetView;
    /// Opaque native window handle.
    type Window: Copy;

    /// Hardware driver, default adapter, no creation flags, default feature levels.
    fn create_device(&self) -> Result<(Self::BaseDevice, Self::BaseContext), ErrorCode>;

    fn upgrade_device(&self, device: &Self::BaseDevice) -> Result<Self::Device, ErrorCode>;

    fn upgrade_context(&self, context: &Self::BaseContext) -> Result<Self::Context, ErrorCode>;

    /// Walks device -> adapter -> parent factory.
    fn locate_factory(&self, device: &Self::Device) -> Result<Self::Factory, ErrorCode>;

    fn upgrade_factory(&self, factory: &Self::Factory) -> Result<Self::SwapChainFactory, ErrorCode>;

    /// Default fullscreen and output-restriction parameters.
    fn create_swap_chain(
        &self,
        factory: &Self::SwapChainFactory,
        device: &Self::Device,
        window: Self::Window,
        description: &SwapChainDescription,
    ) -> Result<Self::SwapChain, ErrorCode>;

    fn back_buffer(&self, swap_chain: &Self::SwapChain, index: u32) -> Result<Self::Texture, ErrorCode>;

    /// Default view parameters.
    fn create_render_target_view(
        &self,
        device: &Self::Device,
        texture: &Self::Texture,
    ) -> Result<Self::RenderTargetView, ErrorCode>;

    /// Replaces the viewports bound on the immediate context.
    fn set_viewports(&self, context: &Self::Context, viewports: &[Viewport]);

    /// May block until the next vertical blank when `sync_interval` is non-zero.
    fn present(&self, swap_chain: &Self::SwapChain, sync_interval: u32, flags: u32) -> Result<(), ErrorCode>;
}
