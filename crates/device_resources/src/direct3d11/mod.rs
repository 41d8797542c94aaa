//! The Direct3D 11 platform.

mod adapter_utils;
mod create_device;

pub use adapter_utils::adapter_name;

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::core::Interface;

use crate::error::ErrorCode;
use crate::platform::GraphicsPlatform;
use crate::swap_chain_description::SwapChainDescription;
use crate::viewport::Viewport;

/// Hardware Direct3D 11 on the default adapter, presenting through DXGI.
#[derive(Clone, Copy, Debug, Default)]
pub struct Direct3D11;

impl GraphicsPlatform for Direct3D11 {
    type BaseDevice = ID3D11Device;
    type BaseContext = ID3D11DeviceContext;
    type Device = ID3D11Device1;
    type Context = ID3D11DeviceContext1;
    type Factory = IDXGIFactory1;
    type SwapChainFactory = IDXGIFactory2;
    type SwapChain = IDXGISwapChain1;
    type Texture = ID3D11Texture2D;
    type RenderTargetView = ID3D11RenderTargetView;
    type Window = HWND;

    fn create_device(&self) -> Result<(ID3D11Device, ID3D11DeviceContext), ErrorCode> {
        create_device::create_device()
    }

    fn upgrade_device(&self, device: &ID3D11Device) -> Result<ID3D11Device1, ErrorCode> {
        Ok(device.cast()?)
    }

    fn upgrade_context(
        &self,
        context: &ID3D11DeviceContext,
    ) -> Result<ID3D11DeviceContext1, ErrorCode> {
        Ok(context.cast()?)
    }

    fn locate_factory(&self, device: &ID3D11Device1) -> Result<IDXGIFactory1, ErrorCode> {
        adapter_utils::get_parent_factory(device)
    }

    fn upgrade_factory(&self, factory: &IDXGIFactory1) -> Result<IDXGIFactory2, ErrorCode> {
        Ok(factory.cast()?)
    }

    fn create_swap_chain(
        &self,
        factory: &IDXGIFactory2,
        device: &ID3D11Device1,
        window: HWND,
        description: &SwapChainDescription,
    ) -> Result<IDXGISwapChain1, ErrorCode> {
        let swap_chain_desc = DXGI_SWAP_CHAIN_DESC1::from(description);
        let swap_chain =
            unsafe { factory.CreateSwapChainForHwnd(device, window, &swap_chain_desc, None, None)? };
        Ok(swap_chain)
    }

    fn back_buffer(
        &self,
        swap_chain: &IDXGISwapChain1,
        index: u32,
    ) -> Result<ID3D11Texture2D, ErrorCode> {
        Ok(unsafe { swap_chain.GetBuffer(index)? })
    }

    fn create_render_target_view(
        &self,
        device: &ID3D11Device1,
        texture: &ID3D11Texture2D,
    ) -> Result<ID3D11RenderTargetView, ErrorCode> {
        let mut view = None;
        unsafe { device.CreateRenderTargetView(texture, None, Some(&mut view))? };
        view.ok_or(ErrorCode::E_POINTER)
    }

    fn set_viewports(&self, context: &ID3D11DeviceContext1, viewports: &[Viewport]) {
        let viewports: Vec<D3D11_VIEWPORT> = viewports.iter().map(D3D11_VIEWPORT::from).collect();
        unsafe { context.RSSetViewports(Some(viewports.as_slice())) };
    }

    fn present(
        &self,
        swap_chain: &IDXGISwapChain1,
        sync_interval: u32,
        flags: u32,
    ) -> Result<(), ErrorCode> {
        unsafe { swap_chain.Present(sync_interval, DXGI_PRESENT(flags)) }.ok()?;
        Ok(())
    }
}
