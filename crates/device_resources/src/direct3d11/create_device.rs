use windows::Win32::Foundation::HMODULE;
use windows::Win32::Graphics::Direct3D::D3D_DRIVER_TYPE_HARDWARE;
use windows::Win32::Graphics::Direct3D11::*;

use crate::error::ErrorCode;

/// Hardware device on the default adapter, no creation flags, and the driver's
/// default feature level chain.
pub fn create_device() -> Result<(ID3D11Device, ID3D11DeviceContext), ErrorCode> {
    let mut device: Option<ID3D11Device> = None;
    let mut context: Option<ID3D11DeviceContext> = None;
    unsafe {
        D3D11CreateDevice(
            None,
            D3D_DRIVER_TYPE_HARDWARE,
            HMODULE::default(),
            D3D11_CREATE_DEVICE_FLAG(0),
            None,
            D3D11_SDK_VERSION,
            Some(&mut device),
            None,
            Some(&mut context),
        )?
    };
    match (device, context) {
        (Some(device), Some(context)) => Ok((device, context)),
        _ => Err(ErrorCode::E_POINTER),
    }
}
