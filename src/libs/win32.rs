//! Small helpers shared by the Win32 GUI surfaces.

use winapi::shared::minwindef::HINSTANCE;
use winapi::shared::windef::{HBRUSH, HWND};
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::winuser::{
    DispatchMessageW, GetMessageW, GetSystemMetrics, GetWindowTextW, MessageBoxW, RegisterClassW, TranslateMessage, CS_HREDRAW,
    CS_VREDRAW, MB_ICONINFORMATION, MB_ICONWARNING, MB_OK, MSG, SM_CXSCREEN, SM_CYSCREEN, WNDCLASSW, WNDPROC,
};

const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;

/// Encodes a string as a NUL-terminated UTF-16 buffer.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Registers a window class, tolerating repeat registrations of the same
/// class name within the process.
///
/// # Safety
/// `wnd_proc` must be a valid window procedure for the lifetime of any
/// window created with this class.
pub unsafe fn register_class(name: &str, hinstance: HINSTANCE, wnd_proc: WNDPROC, background: HBRUSH) -> bool {
    let class_name = to_wide(name);
    let wnd_class = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: wnd_proc,
        cbClsExtra: 0,
        cbWndExtra: 0,
        hInstance: hinstance,
        hIcon: std::ptr::null_mut(),
        hCursor: std::ptr::null_mut(),
        hbrBackground: background,
        lpszMenuName: std::ptr::null(),
        lpszClassName: class_name.as_ptr(),
    };

    if RegisterClassW(&wnd_class) != 0 {
        return true;
    }
    GetLastError() == ERROR_CLASS_ALREADY_EXISTS
}

/// Pumps the thread's message queue until `WM_QUIT`.
///
/// # Safety
/// Must run on the thread that owns the windows being pumped.
pub unsafe fn run_message_loop() {
    let mut msg: MSG = std::mem::zeroed();
    while GetMessageW(&mut msg, std::ptr::null_mut(), 0, 0) > 0 {
        TranslateMessage(&msg);
        DispatchMessageW(&msg);
    }
}

/// Primary monitor size in pixels.
pub fn screen_size() -> (i32, i32) {
    unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) }
}

/// Shows a modal warning box owned by `parent`.
pub fn warning_box(parent: HWND, title: &str, text: &str) {
    let title = to_wide(title);
    let text = to_wide(text);
    unsafe {
        MessageBoxW(parent, text.as_ptr(), title.as_ptr(), MB_OK | MB_ICONWARNING);
    }
}

/// Shows a modal information box owned by `parent`.
pub fn info_box(parent: HWND, title: &str, text: &str) {
    let title = to_wide(title);
    let text = to_wide(text);
    unsafe {
        MessageBoxW(parent, text.as_ptr(), title.as_ptr(), MB_OK | MB_ICONINFORMATION);
    }
}

/// Reads the text of a window or control.
///
/// # Safety
/// `hwnd` must be a valid window handle on this thread.
pub unsafe fn window_text(hwnd: HWND) -> String {
    let mut buf = [0u16; 128];
    let len = GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32);
    String::from_utf16_lossy(&buf[..len.max(0) as usize])
}
