use eyre::Result;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::*;

pub trait WindowClass {
    /// The name of the window class.
    const ID: PCWSTR;

    /// Returns true when the message was handled.
    fn handle(&mut self, message: u32, wparam: WPARAM) -> bool;
}

pub fn create_window_class_struct<W: WindowClass>(instance: HMODULE) -> Result<WNDCLASSEXW> {
    // WNDCLASSEXW - https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-wndclassexw
    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc::<W>),
        hInstance: instance.into(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
        lpszClassName: W::ID,
        ..Default::default()
    };
    Ok(wc)
}

// Panics must not unwind across the system callback.
fn safe_handle<W: WindowClass>(behaviour: &mut W, message: u32, wparam: WPARAM) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        behaviour.handle(message, wparam)
    }))
    .unwrap_or(false)
}

extern "system" fn wndproc<W: WindowClass>(
    window: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if message == WM_CREATE {
        unsafe {
            let create_struct: &CREATESTRUCTW = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(window, GWLP_USERDATA, create_struct.lpCreateParams as _);
        }
        return LRESULT(0);
    }

    let user_data = unsafe { GetWindowLongPtrW(window, GWLP_USERDATA) };
    let Some(mut behaviour) = std::ptr::NonNull::<W>::new(user_data as *mut W) else {
        // We can get messages before WM_CREATE or after WM_DESTROY.
        return unsafe { DefWindowProcW(window, message, wparam, lparam) };
    };

    let handled = match message {
        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            true
        }
        _ => safe_handle(unsafe { behaviour.as_mut() }, message, wparam),
    };

    if handled {
        LRESULT(0)
    } else {
        unsafe { DefWindowProcW(window, message, wparam, lparam) }
    }
}
