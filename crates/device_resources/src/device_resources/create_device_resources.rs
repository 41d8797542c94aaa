use bevy_math::UVec2;
use tracing::debug;

use super::DeviceResources;
use crate::error::ErrorKind;
use crate::error::ErrorKindExt;
use crate::error::Result;
use crate::platform::GraphicsPlatform;

impl<P: GraphicsPlatform> DeviceResources<P> {
    /// Creates the device and immediate context, failing if either device step fails.
    pub fn new(platform: P, stereo: bool) -> Result<Self> {
        let (resources, status) = Self::new_partial(platform, stereo);
        status.map(|()| resources)
    }

    /// Creates the device and immediate context, keeping the object even when that
    /// fails. Accessors of a failed object return `None` and dropping it is safe.
    pub fn new_partial(platform: P, stereo: bool) -> (Self, Result<()>) {
        let mut resources = Self {
            platform,
            stereo,
            device: None,
            context: None,
            swap_chain: None,
            render_target_view: None,
            viewports: None,
            output_size: UVec2::ZERO,
        };
        let status = resources.create_device_resources();
        (resources, status)
    }

    fn create_device_resources(&mut self) -> Result<()> {
        let (device, context) = self
            .platform
            .create_device()
            .kind(ErrorKind::DeviceUnavailable)?;

        let device = self
            .platform
            .upgrade_device(&device)
            .kind(ErrorKind::DeviceUnavailable)?;

        // Best effort: a refused context upgrade leaves the context empty.
        self.context = self.platform.upgrade_context(&context).ok();
        self.device = Some(device);

        debug!(
            stereo = self.stereo,
            has_context = self.context.is_some(),
            "Created graphics device"
        );
        Ok(())
    }
}
