pub type Result<T, E = DeviceResourcesError> = core::result::Result<T, E>;

/// A raw platform error code, kept bit-for-bit as the driver returned it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    pub const E_FAIL: Self = Self(0x8000_4005_u32 as i32);
    pub const E_POINTER: Self = Self(0x8000_4003_u32 as i32);
    pub const E_NOINTERFACE: Self = Self(0x8000_4002_u32 as i32);
    pub const DXGI_ERROR_INVALID_CALL: Self = Self(0x887A_0001_u32 as i32);
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0 as u32)
    }
}

impl std::fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ErrorCode({})", self)
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for ErrorCode {
    fn from(error: windows::core::Error) -> Self {
        Self(error.code().0)
    }
}

#[cfg(windows)]
impl From<windows::core::HRESULT> for ErrorCode {
    fn from(hresult: windows::core::HRESULT) -> Self {
        Self(hresult.0)
    }
}

/// Which stage of resource acquisition failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Device creation or the device capability upgrade failed.
    DeviceUnavailable,
    /// Adapter or factory discovery, or swap chain creation failed.
    SwapChainCreation,
    /// Fetching the back buffer or creating its render-target view failed.
    BufferAcquisition,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::DeviceUnavailable => "graphics device unavailable",
            ErrorKind::SwapChainCreation => "swap chain creation failed",
            ErrorKind::BufferAcquisition => "back buffer acquisition failed",
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DeviceResourcesError {
    kind: ErrorKind,
    code: ErrorCode,
}

impl DeviceResourcesError {
    pub fn new(kind: ErrorKind, code: ErrorCode) -> Self {
        Self { kind, code }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The platform code, unchanged.
    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl std::error::Error for DeviceResourcesError {}

impl std::fmt::Display for DeviceResourcesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.code)
    }
}

impl std::fmt::Debug for DeviceResourcesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Tags a raw platform result with the stage it came from.
pub(crate) trait ErrorKindExt<T> {
    fn kind(self, kind: ErrorKind) -> Result<T>;
}

impl<T> ErrorKindExt<T> for core::result::Result<T, ErrorCode> {
    fn kind(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|code| DeviceResourcesError::new(kind, code))
    }
}
