mod create_device_resources;
mod create_window_size_dependent_resources;
mod present;
mod release_resources;

#[cfg(test)]
mod tests;

use bevy_math::UVec2;

use crate::platform::GraphicsPlatform;
use crate::viewport::Viewports;

/// Width and height of the per-eye frame, never the doubled stereo width.
pub type OutputSize = UVec2;

/// Owns the device, immediate context, swap chain, back buffer view and viewports
/// a renderer draws with.
///
/// The device and context are created on construction; everything that depends on
/// the window is created by [`DeviceResources::attach`]. Any field may be missing
/// after a failed step and dropping still releases whatever was acquired, in the
/// order viewports, context, render-target view, swap chain, device.
///
/// Single-threaded: the immediate context is not synchronized.
pub struct DeviceResources<P: GraphicsPlatform> {
    platform: P,
    stereo: bool,
    device: Option<P::Device>,
    context: Option<P::Context>,
    swap_chain: Option<P::SwapChain>,
    render_target_view: Option<P::RenderTargetView>,
    viewports: Option<Viewports>,
    output_size: OutputSize,
}

impl<P: GraphicsPlatform> DeviceResources<P> {
    pub fn is_stereo(&self) -> bool {
        self.stereo
    }

    /// `None` if device creation failed.
    pub fn device(&self) -> Option<&P::Device> {
        self.device.as_ref()
    }

    /// `None` if device creation failed or the context upgrade was refused.
    pub fn context(&self) -> Option<&P::Context> {
        self.context.as_ref()
    }

    pub fn swap_chain(&self) -> Option<&P::SwapChain> {
        self.swap_chain.as_ref()
    }

    /// View over buffer 0 of the swap chain.
    pub fn back_buffer_rtv(&self) -> Option<&P::RenderTargetView> {
        self.render_target_view.as_ref()
    }

    /// One viewport in mono mode, left and right eye in stereo mode.
    ///
    /// Only the mono viewport is bound on the context by [`DeviceResources::attach`];
    /// a stereo renderer selects the eye's viewport itself before each pass.
    pub fn viewports(&self) -> Option<&Viewports> {
        self.viewports.as_ref()
    }

    /// Zero until a window has been attached.
    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}
