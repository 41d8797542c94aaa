use bevy_math::UVec2;

use crate::config::SWAP_CHAIN_BUFFER_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferFormat {
    /// 8 bits per channel RGBA, unsigned normalized.
    Rgba8Unorm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapEffect {
    FlipSequential,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferUsage {
    RenderTargetOutput,
}

/// The fixed swap chain layout; only the width depends on stereo mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapChainDescription {
    pub width: u32,
    pub height: u32,
    pub format: BufferFormat,
    pub buffer_count: u32,
    pub sample_count: u32,
    pub swap_effect: SwapEffect,
    pub usage: BufferUsage,
}

impl SwapChainDescription {
    /// Stereo places both eyes side by side, so the buffer is twice as wide.
    pub fn for_frame(stereo: bool, frame_size: UVec2) -> Self {
        let width = if stereo { frame_size.x << 1 } else { frame_size.x };
        Self {
            width,
            height: frame_size.y,
            format: BufferFormat::Rgba8Unorm,
            buffer_count: SWAP_CHAIN_BUFFER_COUNT,
            sample_count: 1,
            swap_effect: SwapEffect::FlipSequential,
            usage: BufferUsage::RenderTargetOutput,
        }
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }
}

#[cfg(windows)]
impl From<&SwapChainDescription> for windows::Win32::Graphics::Dxgi::DXGI_SWAP_CHAIN_DESC1 {
    fn from(description: &SwapChainDescription) -> Self {
        use windows::Win32::Graphics::Dxgi::Common::*;
        use windows::Win32::Graphics::Dxgi::*;

        let format = match description.format {
            BufferFormat::Rgba8Unorm => DXGI_FORMAT_R8G8B8A8_UNORM,
        };
        let swap_effect = match description.swap_effect {
            SwapEffect::FlipSequential => DXGI_SWAP_EFFECT_FLIP_SEQUENTIAL,
        };
        let usage = match description.usage {
            BufferUsage::RenderTargetOutput => DXGI_USAGE_RENDER_TARGET_OUTPUT,
        };
        DXGI_SWAP_CHAIN_DESC1 {
            Width: description.width,
            Height: description.height,
            Format: format,
            BufferCount: description.buffer_count,
            BufferUsage: usage,
            SwapEffect: swap_effect,
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: description.sample_count,
                Quality: 0,
            },
            ..Default::default()
        }
    }
}
