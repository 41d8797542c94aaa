use windows::Win32::Graphics::Direct3D11::ID3D11Device1;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::Interface;

use crate::error::ErrorCode;

/// Finds the factory that owns the adapter `device` was created on.
///
/// The DXGI device and adapter are only stepping stones and are released on return.
pub fn get_parent_factory(device: &ID3D11Device1) -> Result<IDXGIFactory1, ErrorCode> {
    let adapter = get_adapter(device)?;
    let factory: IDXGIFactory1 = unsafe { adapter.GetParent()? };
    Ok(factory)
}

/// Human-readable name of the adapter backing `device`.
pub fn adapter_name(device: &ID3D11Device1) -> Result<String, ErrorCode> {
    let adapter = get_adapter(device)?;
    let desc = unsafe { adapter.GetDesc()? };
    let name = String::from_utf16_lossy(&desc.Description);
    Ok(name.trim_end_matches('\0').to_owned())
}

fn get_adapter(device: &ID3D11Device1) -> Result<IDXGIAdapter, ErrorCode> {
    let dxgi_device: IDXGIDevice = device.cast()?;
    let adapter = unsafe { dxgi_device.GetAdapter()? };
    Ok(adapter)
}
