//! Ephemeral Win32 dialog surfaces spawned from the tray menu.
//!
//! Each dialog runs on the thread that called it, with its own window and
//! message loop (the GUI toolkit rule: a window is only ever touched from
//! the thread that created it). The tray spawns a short-lived thread per
//! dialog, so the tray loop and the monitor keep running while a dialog is
//! open.

use crate::libs::config::parse_work_duration;
use crate::libs::health::{HealthEntry, HealthLog};
use crate::libs::messages::Message;
use crate::libs::win32::{info_box, register_class, run_message_loop, screen_size, to_wide, warning_box, window_text};
use crate::{msg_error, msg_info};
use std::cell::RefCell;
use std::path::PathBuf;
use std::ptr;
use winapi::shared::minwindef::{HINSTANCE, LPARAM, LRESULT, UINT, WPARAM};
use winapi::shared::windef::HWND;
use winapi::um::libloaderapi::GetModuleHandleW;
use winapi::um::wingdi::{GetStockObject, WHITE_BRUSH};
use winapi::um::winuser::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, PostQuitMessage, SetFocus, BS_DEFPUSHBUTTON, BS_PUSHBUTTON, ES_AUTOHSCROLL,
    ES_CENTER, SS_CENTER, SS_LEFT, VK_ESCAPE, WM_COMMAND, WM_DESTROY, WM_KEYDOWN, WS_BORDER, WS_CAPTION, WS_CHILD, WS_EX_TOPMOST,
    WS_SYSMENU, WS_VISIBLE,
};

const ID_OK: u16 = 2001;

/// Creates a small centered top-most dialog window.
unsafe fn create_dialog_window(class_name: &str, title: &str, width: i32, height: i32, hinstance: HINSTANCE) -> HWND {
    let (cx, cy) = screen_size();
    let class = to_wide(class_name);
    let title = to_wide(title);
    CreateWindowExW(
        WS_EX_TOPMOST,
        class.as_ptr(),
        title.as_ptr(),
        WS_CAPTION | WS_SYSMENU | WS_VISIBLE,
        (cx - width) / 2,
        (cy - height) / 2,
        width,
        height,
        ptr::null_mut(),
        ptr::null_mut(),
        hinstance,
        ptr::null_mut(),
    )
}

unsafe fn create_control(parent: HWND, hinstance: HINSTANCE, class: &str, text: &str, style: u32, x: i32, y: i32, w: i32, h: i32, id: usize) -> HWND {
    let class = to_wide(class);
    let text = to_wide(text);
    CreateWindowExW(
        0,
        class.as_ptr(),
        text.as_ptr(),
        WS_CHILD | WS_VISIBLE | style,
        x,
        y,
        w,
        h,
        parent,
        id as winapi::shared::windef::HMENU,
        hinstance,
        ptr::null_mut(),
    )
}

// === Work duration dialog ===

struct DurationState {
    edit: HWND,
    result: Option<u64>,
}

thread_local! {
    static DURATION: RefCell<Option<DurationState>> = const { RefCell::new(None) };
}

/// Asks for a new work duration. Returns `None` when the user cancels.
/// Invalid input shows a modal warning and keeps the dialog open.
pub fn prompt_work_duration(current: u64) -> Option<u64> {
    unsafe {
        let hinstance = GetModuleHandleW(ptr::null());
        let background = GetStockObject(WHITE_BRUSH as i32) as winapi::shared::windef::HBRUSH;
        if !register_class("DeskbreakDuration", hinstance, Some(duration_proc), background) {
            msg_error!(Message::DialogOpenFailed("class registration failed".to_string()));
            return None;
        }

        let hwnd = create_dialog_window("DeskbreakDuration", "设定计时时长", 320, 190, hinstance);
        if hwnd.is_null() {
            msg_error!(Message::DialogOpenFailed("window creation failed".to_string()));
            return None;
        }

        create_control(hwnd, hinstance, "STATIC", "请输入工作时长 (1-120 分钟):", SS_CENTER, 10, 15, 285, 22, 0);
        let edit = create_control(
            hwnd,
            hinstance,
            "EDIT",
            &current.to_string(),
            WS_BORDER | ES_CENTER | ES_AUTOHSCROLL,
            90,
            50,
            125,
            26,
            0,
        );
        create_control(hwnd, hinstance, "BUTTON", "确定", BS_DEFPUSHBUTTON, 105, 95, 95, 34, ID_OK as usize);

        DURATION.with(|cell| *cell.borrow_mut() = Some(DurationState { edit, result: None }));
        SetFocus(edit);

        run_message_loop();

        DURATION.with(|cell| cell.borrow_mut().take()).and_then(|state| state.result)
    }
}

unsafe extern "system" fn duration_proc(hwnd: HWND, msg: UINT, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_COMMAND if (wparam & 0xFFFF) as u16 == ID_OK => {
            let edit = DURATION.with(|cell| cell.borrow().as_ref().map(|state| state.edit));
            let Some(edit) = edit else { return 0 };
            let input = window_text(edit);
            match parse_work_duration(&input) {
                Ok(minutes) => {
                    DURATION.with(|cell| {
                        if let Some(state) = cell.borrow_mut().as_mut() {
                            state.result = Some(minutes);
                        }
                    });
                    DestroyWindow(hwnd);
                }
                Err(e) => {
                    // Keep the dialog open with the prior value untouched.
                    let text = e.to_string();
                    warning_box(hwnd, "范围错误", text.trim_start_matches("❌ "));
                }
            }
            0
        }
        WM_KEYDOWN if wparam == VK_ESCAPE as WPARAM => {
            DestroyWindow(hwnd);
            0
        }
        WM_DESTROY => {
            PostQuitMessage(0);
            0
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

// === Health entry dialog ===

struct HealthState {
    edit_weight: HWND,
    edit_bp_high: HWND,
    edit_bp_low: HWND,
}

thread_local! {
    static HEALTH: RefCell<Option<HealthState>> = const { RefCell::new(None) };
}

/// Shows the daily metrics form pre-filled from today's record, if any.
pub fn record_health_dialog() {
    unsafe {
        let hinstance = GetModuleHandleW(ptr::null());
        let background = GetStockObject(WHITE_BRUSH as i32) as winapi::shared::windef::HBRUSH;
        if !register_class("DeskbreakHealth", hinstance, Some(health_proc), background) {
            msg_error!(Message::DialogOpenFailed("class registration failed".to_string()));
            return;
        }

        let today = HealthLog::today_key();
        let hwnd = create_dialog_window("DeskbreakHealth", "每日健康指标录入", 360, 270, hinstance);
        if hwnd.is_null() {
            msg_error!(Message::DialogOpenFailed("window creation failed".to_string()));
            return;
        }

        let existing = HealthLog::load().ok().and_then(|log| log.get(&today).cloned());
        let weight = existing.as_ref().map(|e| e.weight.clone()).unwrap_or_default();
        let bp_high = existing.as_ref().map(|e| e.bp_high.clone()).unwrap_or_else(|| "120".to_string());
        let bp_low = existing.as_ref().map(|e| e.bp_low.clone()).unwrap_or_else(|| "80".to_string());

        create_control(hwnd, hinstance, "STATIC", &format!("日期: {}", today), SS_CENTER, 10, 12, 325, 22, 0);
        create_control(hwnd, hinstance, "STATIC", "体重 (kg):", SS_LEFT, 30, 52, 90, 22, 0);
        let edit_weight = create_control(hwnd, hinstance, "EDIT", &weight, WS_BORDER | ES_AUTOHSCROLL, 130, 50, 180, 26, 0);
        create_control(hwnd, hinstance, "STATIC", "血压 (H/L):", SS_LEFT, 30, 92, 90, 22, 0);
        let edit_bp_high = create_control(hwnd, hinstance, "EDIT", &bp_high, WS_BORDER | ES_CENTER, 130, 90, 80, 26, 0);
        create_control(hwnd, hinstance, "STATIC", "/", SS_CENTER, 212, 92, 16, 22, 0);
        let edit_bp_low = create_control(hwnd, hinstance, "EDIT", &bp_low, WS_BORDER | ES_CENTER, 230, 90, 80, 26, 0);
        create_control(hwnd, hinstance, "BUTTON", "提交记录", BS_PUSHBUTTON, 110, 150, 130, 38, ID_OK as usize);

        HEALTH.with(|cell| {
            *cell.borrow_mut() = Some(HealthState {
                edit_weight,
                edit_bp_high,
                edit_bp_low,
            })
        });
        SetFocus(edit_weight);

        run_message_loop();

        HEALTH.with(|cell| cell.borrow_mut().take());
    }
}

unsafe extern "system" fn health_proc(hwnd: HWND, msg: UINT, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_COMMAND if (wparam & 0xFFFF) as u16 == ID_OK => {
            let fields = HEALTH.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map(|state| (window_text(state.edit_weight), window_text(state.edit_bp_high), window_text(state.edit_bp_low)))
            });
            let Some((weight, bp_high, bp_low)) = fields else { return 0 };

            if weight.trim().is_empty() {
                warning_box(hwnd, "提醒", "请输入体重");
                return 0;
            }

            let today = HealthLog::today_key();
            let entry = HealthEntry::now(weight.trim().to_string(), bp_high.trim().to_string(), bp_low.trim().to_string());
            let saved = HealthLog::load().and_then(|mut log| {
                log.record(today.clone(), entry);
                log.save()
            });
            match saved {
                Ok(()) => {
                    msg_info!(Message::HealthRecorded(today));
                    info_box(hwnd, "成功", "今日健康数据已记录！");
                    DestroyWindow(hwnd);
                }
                Err(e) => {
                    msg_error!(Message::ConfigSaveFailed(e.to_string()));
                    warning_box(hwnd, "错误", "保存失败，请查看日志");
                }
            }
            0
        }
        WM_KEYDOWN if wparam == VK_ESCAPE as WPARAM => {
            DestroyWindow(hwnd);
            0
        }
        WM_DESTROY => {
            PostQuitMessage(0);
            0
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

// === Music file picker ===

/// Opens the system file picker filtered to audio files.
pub fn pick_music_file() -> Option<PathBuf> {
    use winapi::um::commdlg::{GetOpenFileNameW, OFN_FILEMUSTEXIST, OFN_PATHMUSTEXIST, OPENFILENAMEW};

    unsafe {
        let mut file = [0u16; 260];
        // Filter pairs are separated by embedded NULs and terminated by two.
        let filter: Vec<u16> = "音乐文件 (*.mp3;*.wav)\0*.mp3;*.wav\0所有文件 (*.*)\0*.*\0"
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();
        let title = to_wide("选择提醒音乐");

        let mut ofn: OPENFILENAMEW = std::mem::zeroed();
        ofn.lStructSize = std::mem::size_of::<OPENFILENAMEW>() as u32;
        ofn.lpstrFile = file.as_mut_ptr();
        ofn.nMaxFile = file.len() as u32;
        ofn.lpstrFilter = filter.as_ptr();
        ofn.lpstrTitle = title.as_ptr();
        ofn.Flags = OFN_FILEMUSTEXIST | OFN_PATHMUSTEXIST;

        if GetOpenFileNameW(&mut ofn) == 0 {
            return None;
        }

        let len = file.iter().position(|&c| c == 0).unwrap_or(0);
        if len == 0 {
            return None;
        }
        Some(PathBuf::from(String::from_utf16_lossy(&file[..len])))
    }
}
