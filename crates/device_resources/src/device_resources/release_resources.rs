use bevy_math::UVec2;
use tracing::debug;

use super::DeviceResources;
use crate::platform::GraphicsPlatform;

impl<P: GraphicsPlatform> DeviceResources<P> {
    pub(super) fn release_window_size_dependent_resources(&mut self) {
        self.viewports = None;
        self.render_target_view = None;
        self.swap_chain = None;
        self.output_size = UVec2::ZERO;
    }
}

impl<P: GraphicsPlatform> Drop for DeviceResources<P> {
    fn drop(&mut self) {
        self.viewports = None;
        self.context = None;
        self.render_target_view = None;
        self.swap_chain = None;
        self.device = None;
        debug!("Released device resources");
    }
}
