use bevy_math::UVec2;
use bevy_math::Vec2;

/// A rectangle in back-buffer pixels plus its depth range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub top_left: Vec2,
    pub size: Vec2,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full depth range, like `CD3D11_VIEWPORT`.
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self {
            top_left,
            size,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// One viewport for mono output, or a left and right eye splitting the back buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Viewports {
    Mono([Viewport; 1]),
    /// Left eye first.
    Stereo([Viewport; 2]),
}

impl Viewports {
    pub fn for_frame(stereo: bool, frame_size: UVec2) -> Self {
        let size = frame_size.as_vec2();
        if stereo {
            Viewports::Stereo([
                Viewport::new(Vec2::ZERO, size),
                Viewport::new(Vec2::new(size.x, 0.0), size),
            ])
        } else {
            Viewports::Mono([Viewport::new(Vec2::ZERO, size)])
        }
    }

    pub fn as_slice(&self) -> &[Viewport] {
        match self {
            Viewports::Mono(viewports) => &viewports[..],
            Viewports::Stereo(viewports) => &viewports[..],
        }
    }

    pub fn is_stereo(&self) -> bool {
        matches!(self, Viewports::Stereo(_))
    }

    pub fn left(&self) -> &Viewport {
        &self.as_slice()[0]
    }

    /// `None` in mono mode.
    pub fn right(&self) -> Option<&Viewport> {
        match self {
            Viewports::Mono(_) => None,
            Viewports::Stereo([_, right]) => Some(right),
        }
    }
}

impl std::ops::Deref for Viewports {
    type Target = [Viewport];

    fn deref(&self) -> &[Viewport] {
        self.as_slice()
    }
}

#[cfg(windows)]
impl From<&Viewport> for windows::Win32::Graphics::Direct3D11::D3D11_VIEWPORT {
    fn from(viewport: &Viewport) -> Self {
        Self {
            TopLeftX: viewport.top_left.x,
            TopLeftY: viewport.top_left.y,
            Width: viewport.size.x,
            Height: viewport.size.y,
            MinDepth: viewport.min_depth,
            MaxDepth: viewport.max_depth,
        }
    }
}
