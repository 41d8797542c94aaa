use tracing::debug;
use tracing::trace;

use super::DeviceResources;
use crate::config::PRESENT_FLAGS;
use crate::config::PRESENT_SYNC_INTERVAL;
use crate::platform::GraphicsPlatform;

impl<P: GraphicsPlatform> DeviceResources<P> {
    /// Shows the back buffer, waiting for vertical blank.
    ///
    /// Fire and forget: the result is dropped, and nothing happens before a window
    /// has been attached.
    pub fn present(&self) {
        let Some(swap_chain) = &self.swap_chain else {
            trace!("Present skipped, no swap chain");
            return;
        };
        if let Err(code) = self
            .platform
            .present(swap_chain, PRESENT_SYNC_INTERVAL, PRESENT_FLAGS)
        {
            debug!(%code, "Present failed");
        }
    }
}
