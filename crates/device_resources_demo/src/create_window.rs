use eyre::Result;
use crate::window_class::WindowClass;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::*;

/// `behaviour` receives the window's messages and must outlive the window.
pub fn create_window<W: WindowClass>(
    our_module: HMODULE,
    client_size: (u32, u32),
    title: PCWSTR,
    behaviour: &mut W,
) -> Result<HWND> {
    let mut window_rect = RECT {
        left: 0,
        top: 0,
        right: client_size.0 as i32,
        bottom: client_size.1 as i32,
    };
    // Calculates the required size of the window rectangle, based on the desired size of the client rectangle.
    unsafe { AdjustWindowRect(&mut window_rect, WS_OVERLAPPEDWINDOW, false)? };

    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            W::ID,
            title,
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            window_rect.right - window_rect.left,
            window_rect.bottom - window_rect.top,
            None, // no parent window
            None, // no menus
            Some(our_module.into()),
            Some(behaviour as *mut W as _),
        )
    }?;
    Ok(hwnd)
}

pub fn get_handle_to_file_used_to_create_the_calling_process() -> Result<HMODULE> {
    let mut out = Default::default();
    unsafe { windows::Win32::System::LibraryLoader::GetModuleHandleExW(Default::default(), None, &mut out)? };
    Ok(out)
}

pub fn register_window_class(class: &WNDCLASSEXW) -> Result<u16> {
    let atom = unsafe { RegisterClassExW(class) };
    if atom == 0 {
        return Err(Error::from_win32().into());
    }
    Ok(atom)
}
