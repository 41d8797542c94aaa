use crate::window_class::WindowClass;
use tracing::info;
use windows::Win32::Foundation::WPARAM;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::PCWSTR;
use windows::core::w;

#[derive(Debug, Default)]
pub struct DemoBehaviour {
    pub paused: bool,
}

impl WindowClass for DemoBehaviour {
    const ID: PCWSTR = w!("DeviceResourcesDemoWindowClass");

    fn handle(&mut self, message: u32, wparam: WPARAM) -> bool {
        match message {
            WM_KEYDOWN => {
                info!("WM_KEYDOWN: {}", wparam.0 as u8);
                true
            }
            WM_KEYUP => {
                let key = wparam.0 as u8;
                info!("WM_KEYUP: {}", key);
                if key == b' ' {
                    self.paused = !self.paused;
                    info!(paused = self.paused, "Toggled animation");
                }
                true
            }
            // Rendering happens in the idle loop; DefWindowProc validates the region.
            WM_PAINT => false,
            _ => false,
        }
    }
}
