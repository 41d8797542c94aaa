use tracing::debug;

use super::DeviceResources;
use crate::config::BACK_BUFFER_INDEX;
use crate::config::FRAME_BUFFER_SIZE;
use crate::error::DeviceResourcesError;
use crate::error::ErrorCode;
use crate::error::ErrorKind;
use crate::error::ErrorKindExt;
use crate::error::Result;
use crate::platform::GraphicsPlatform;
use crate::swap_chain_description::SwapChainDescription;
use crate::viewport::Viewports;

impl<P: GraphicsPlatform> DeviceResources<P> {
    /// Creates the swap chain for `window`, the render-target view over its back
    /// buffer and the viewports.
    ///
    /// Stops at the first failing step. Whatever was stored before that step stays
    /// owned until drop. Attaching again releases the previous swap chain, view and
    /// viewports first; the caller must have dropped its own references to them and
    /// drained GPU work.
    pub fn attach(&mut self, window: P::Window) -> Result<()> {
        self.release_window_size_dependent_resources();

        let Some(device) = self.device.as_ref() else {
            return Err(DeviceResourcesError::new(
                ErrorKind::DeviceUnavailable,
                ErrorCode::E_POINTER,
            ));
        };

        let description = SwapChainDescription::for_frame(self.stereo, FRAME_BUFFER_SIZE);
        let swap_chain = {
            let factory = self
                .platform
                .locate_factory(device)
                .kind(ErrorKind::SwapChainCreation)?;
            let factory = self
                .platform
                .upgrade_factory(&factory)
                .kind(ErrorKind::SwapChainCreation)?;
            self.platform
                .create_swap_chain(&factory, device, window, &description)
                .kind(ErrorKind::SwapChainCreation)?
        };
        debug!(
            width = description.width,
            height = description.height,
            stereo = self.stereo,
            "Created swap chain"
        );
        let swap_chain = self.swap_chain.insert(swap_chain);

        let render_target_view = {
            let frame_buffer = self
                .platform
                .back_buffer(swap_chain, BACK_BUFFER_INDEX)
                .kind(ErrorKind::BufferAcquisition)?;
            self.platform
                .create_render_target_view(device, &frame_buffer)
                .kind(ErrorKind::BufferAcquisition)?
        };
        self.render_target_view = Some(render_target_view);

        let viewports = self
            .viewports
            .insert(Viewports::for_frame(self.stereo, FRAME_BUFFER_SIZE));
        if !self.stereo {
            match &self.context {
                Some(context) => self.platform.set_viewports(context, viewports),
                None => debug!("No immediate context, mono viewport left unbound"),
            }
        }

        self.output_size = FRAME_BUFFER_SIZE;
        Ok(())
    }
}
