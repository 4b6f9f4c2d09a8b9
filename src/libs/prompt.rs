//! Full-screen break reminder window.
//!
//! The prompt is a blocking, topmost, full-screen window created and pumped
//! on the calling thread (the monitor loop blocks here by design, so only
//! one reminder can ever be open). It offers three actions:
//!
//! - **开始休息**: fires the start-rest callback once and switches the window
//!   into a one-second countdown; when the countdown runs out the window
//!   closes on its own.
//! - **推迟 5 分钟**: fires the snooze callback once and closes immediately.
//! - **暂时隐藏** (button or Esc): hides the window for 15 seconds and then
//!   restores it; fires neither callback and may be repeated.
//!
//! At most one of the two callbacks fires per prompt instance. If the window
//! goes away through any other path the caller sees
//! [`PromptOutcome::Dismissed`] and recovers as if the break had completed.
//!
//! The once-only and countdown bookkeeping lives in [`PromptFlow`], which has
//! no platform dependencies; the Win32 layer is a thin shell around it.

use thiserror::Error;

/// Seconds the window stays hidden after the temporary-hide action.
pub const TEMPORARY_HIDE_SECS: u32 = 15;

pub type PromptCallback = Box<dyn FnOnce() + Send>;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("window class registration failed")]
    ClassRegistration,
    #[error("window creation failed")]
    WindowCreation,
}

/// How the prompt was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The countdown after "start rest" ran to zero.
    RestCompleted,
    /// The user snoozed.
    Snoozed,
    /// Closed without either choice (forced close, platform stub).
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    StartRest,
    Snooze,
}

/// Result of one countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Countdown has not been started.
    Inactive,
    /// Show this many remaining seconds.
    Display(u64),
    /// Countdown ran out; the window should close.
    Finished,
}

/// Choice and countdown state machine behind the reminder window.
#[derive(Debug)]
pub struct PromptFlow {
    choice: Option<PromptChoice>,
    counting: bool,
    remaining: i64,
}

impl PromptFlow {
    pub fn new(break_secs: u32) -> Self {
        PromptFlow {
            choice: None,
            counting: false,
            remaining: break_secs as i64,
        }
    }

    /// Records the start-rest choice. Returns `true` exactly once, and only
    /// if no other choice has been made; the callback must fire iff this
    /// returns `true`.
    pub fn choose_start_rest(&mut self) -> bool {
        if self.choice.is_some() {
            return false;
        }
        self.choice = Some(PromptChoice::StartRest);
        self.counting = true;
        true
    }

    /// Records the snooze choice; same once-only contract as
    /// [`Self::choose_start_rest`].
    pub fn choose_snooze(&mut self) -> bool {
        if self.choice.is_some() {
            return false;
        }
        self.choice = Some(PromptChoice::Snooze);
        true
    }

    pub fn choice(&self) -> Option<PromptChoice> {
        self.choice
    }

    /// Advances the countdown by one second. The final `Display(0)` is shown
    /// for a full second before `Finished` is reported.
    pub fn tick(&mut self) -> CountdownTick {
        if !self.counting {
            return CountdownTick::Inactive;
        }
        if self.remaining < 0 {
            self.counting = false;
            return CountdownTick::Finished;
        }
        let shown = self.remaining as u64;
        self.remaining -= 1;
        CountdownTick::Display(shown)
    }
}

/// One ephemeral reminder window; consumed by [`ReminderPrompt::show`].
#[cfg_attr(not(windows), allow(dead_code))]
pub struct ReminderPrompt {
    message: String,
    break_secs: u32,
    on_start_rest: PromptCallback,
    on_snooze: PromptCallback,
}

impl ReminderPrompt {
    pub fn new(message: impl Into<String>, break_secs: u32, on_start_rest: PromptCallback, on_snooze: PromptCallback) -> Self {
        ReminderPrompt {
            message: message.into(),
            break_secs,
            on_start_rest,
            on_snooze,
        }
    }

    /// Shows the window and blocks the calling thread until it closes.
    #[cfg(windows)]
    pub fn show(self) -> Result<PromptOutcome, PromptError> {
        window::show(self)
    }

    #[cfg(not(windows))]
    pub fn show(self) -> Result<PromptOutcome, PromptError> {
        crate::msg_debug!("reminder window is unavailable on this platform; dismissing");
        Ok(PromptOutcome::Dismissed)
    }
}

#[cfg(windows)]
mod window {
    use super::*;
    use crate::libs::formatter::format_mm_ss;
    use crate::libs::win32::{register_class, run_message_loop, screen_size, to_wide};
    use std::cell::{Cell, RefCell};
    use std::ptr;
    use winapi::shared::minwindef::{LPARAM, LRESULT, UINT, WPARAM};
    use winapi::shared::windef::HWND;
    use winapi::um::libloaderapi::GetModuleHandleW;
    use winapi::um::wingdi::{
        CreateFontW, CreateSolidBrush, SetBkMode, SetTextColor, CLEARTYPE_QUALITY, CLIP_DEFAULT_PRECIS, DEFAULT_CHARSET, DEFAULT_PITCH,
        FF_DONTCARE, FW_BOLD, FW_NORMAL, OUT_DEFAULT_PRECIS, RGB, TRANSPARENT,
    };
    use winapi::um::winuser::{
        CreateWindowExW, DefWindowProcW, DestroyWindow, KillTimer, PostQuitMessage, SendMessageW, SetForegroundWindow, SetTimer,
        SetWindowTextW, ShowWindow, UpdateWindow, BS_PUSHBUTTON, SS_CENTER, SW_HIDE, SW_SHOW, VK_ESCAPE, WM_CLOSE, WM_COMMAND,
        WM_CTLCOLORSTATIC, WM_DESTROY, WM_KEYDOWN, WM_SETFONT, WM_TIMER, WS_CHILD, WS_EX_TOPMOST, WS_POPUP, WS_VISIBLE,
    };

    const CLASS_NAME: &str = "DeskbreakReminder";
    const ID_BTN_REST: u16 = 1001;
    const ID_BTN_SNOOZE: u16 = 1002;
    const ID_BTN_HIDE: u16 = 1003;
    const TIMER_COUNTDOWN: usize = 1;
    const TIMER_RESTORE: usize = 2;

    struct WindowState {
        flow: PromptFlow,
        outcome: PromptOutcome,
        on_start_rest: Option<PromptCallback>,
        on_snooze: Option<PromptCallback>,
        lbl_message: HWND,
        lbl_timer: HWND,
        btn_rest: HWND,
        btn_snooze: HWND,
    }

    thread_local! {
        static STATE: RefCell<Option<WindowState>> = const { RefCell::new(None) };
        static BACKGROUND: Cell<usize> = const { Cell::new(0) };
    }

    /// Runs `f` against the window state if one is active. Callers must not
    /// touch other windows' state (or fire callbacks) while the borrow is
    /// held; collect what you need and drop out first.
    fn with_state<R>(f: impl FnOnce(&mut WindowState) -> R) -> Option<R> {
        STATE.with(|cell| cell.borrow_mut().as_mut().map(f))
    }

    pub(super) fn show(prompt: ReminderPrompt) -> Result<PromptOutcome, PromptError> {
        let ReminderPrompt {
            message,
            break_secs,
            on_start_rest,
            on_snooze,
        } = prompt;

        unsafe {
            let hinstance = GetModuleHandleW(ptr::null());
            let brush = CreateSolidBrush(RGB(0x2c, 0x3e, 0x50));
            BACKGROUND.with(|cell| cell.set(brush as usize));

            if !register_class(CLASS_NAME, hinstance, Some(wnd_proc), brush) {
                return Err(PromptError::ClassRegistration);
            }

            STATE.with(|cell| {
                *cell.borrow_mut() = Some(WindowState {
                    flow: PromptFlow::new(break_secs),
                    outcome: PromptOutcome::Dismissed,
                    on_start_rest: Some(on_start_rest),
                    on_snooze: Some(on_snooze),
                    lbl_message: ptr::null_mut(),
                    lbl_timer: ptr::null_mut(),
                    btn_rest: ptr::null_mut(),
                    btn_snooze: ptr::null_mut(),
                });
            });

            let (cx, cy) = screen_size();
            let class = to_wide(CLASS_NAME);
            let title = to_wide("久坐提醒");
            let hwnd = CreateWindowExW(
                WS_EX_TOPMOST,
                class.as_ptr(),
                title.as_ptr(),
                WS_POPUP,
                0,
                0,
                cx,
                cy,
                ptr::null_mut(),
                ptr::null_mut(),
                hinstance,
                ptr::null_mut(),
            );
            if hwnd.is_null() {
                STATE.with(|cell| cell.borrow_mut().take());
                return Err(PromptError::WindowCreation);
            }

            build_controls(hwnd, hinstance, &message, cx, cy);
            ShowWindow(hwnd, SW_SHOW);
            SetForegroundWindow(hwnd);
            UpdateWindow(hwnd);

            run_message_loop();
        }

        let outcome = STATE
            .with(|cell| cell.borrow_mut().take())
            .map(|state| state.outcome)
            .unwrap_or(PromptOutcome::Dismissed);
        Ok(outcome)
    }

    unsafe fn build_controls(hwnd: HWND, hinstance: winapi::shared::minwindef::HINSTANCE, message: &str, cx: i32, cy: i32) {
        let make = |class: &str, text: &str, style: u32, x: i32, y: i32, w: i32, h: i32, id: usize| -> HWND {
            let class = to_wide(class);
            let text = to_wide(text);
            CreateWindowExW(
                0,
                class.as_ptr(),
                text.as_ptr(),
                style,
                x,
                y,
                w,
                h,
                hwnd,
                id as winapi::shared::windef::HMENU,
                hinstance,
                ptr::null_mut(),
            )
        };

        let lbl_message = make(
            "STATIC",
            message,
            WS_CHILD | WS_VISIBLE | SS_CENTER,
            (cx - 1000) / 2,
            cy / 2 - 280,
            1000,
            140,
            0,
        );
        let btn_rest = make(
            "BUTTON",
            "开始休息 (Start Break)",
            WS_CHILD | WS_VISIBLE | BS_PUSHBUTTON,
            cx / 2 - 340,
            cy / 2 - 60,
            310,
            90,
            ID_BTN_REST as usize,
        );
        let btn_snooze = make(
            "BUTTON",
            "推迟 5 分钟",
            WS_CHILD | WS_VISIBLE | BS_PUSHBUTTON,
            cx / 2 + 30,
            cy / 2 - 60,
            310,
            90,
            ID_BTN_SNOOZE as usize,
        );
        let btn_hide = make(
            "BUTTON",
            "处理其他事务 (暂时隐藏 15 秒) [Esc]",
            WS_CHILD | WS_VISIBLE | BS_PUSHBUTTON,
            (cx - 460) / 2,
            cy / 2 + 70,
            460,
            56,
            ID_BTN_HIDE as usize,
        );
        let lbl_timer = make(
            "STATIC",
            "",
            WS_CHILD | SS_CENTER,
            (cx - 420) / 2,
            cy / 2 + 170,
            420,
            130,
            0,
        );

        let face = to_wide("Microsoft YaHei UI");
        let font = |height: i32, weight: i32| {
            CreateFontW(
                height,
                0,
                0,
                0,
                weight,
                0,
                0,
                0,
                DEFAULT_CHARSET as u32,
                OUT_DEFAULT_PRECIS as u32,
                CLIP_DEFAULT_PRECIS as u32,
                CLEARTYPE_QUALITY as u32,
                (DEFAULT_PITCH | FF_DONTCARE) as u32,
                face.as_ptr(),
            )
        };
        let font_message = font(52, FW_BOLD as i32);
        let font_button = font(28, FW_BOLD as i32);
        let font_hide = font(20, FW_NORMAL as i32);
        let font_timer = font(110, FW_BOLD as i32);
        SendMessageW(lbl_message, WM_SETFONT, font_message as WPARAM, 1);
        SendMessageW(btn_rest, WM_SETFONT, font_button as WPARAM, 1);
        SendMessageW(btn_snooze, WM_SETFONT, font_button as WPARAM, 1);
        SendMessageW(btn_hide, WM_SETFONT, font_hide as WPARAM, 1);
        SendMessageW(lbl_timer, WM_SETFONT, font_timer as WPARAM, 1);

        with_state(|state| {
            state.lbl_message = lbl_message;
            state.lbl_timer = lbl_timer;
            state.btn_rest = btn_rest;
            state.btn_snooze = btn_snooze;
        });
    }

    unsafe extern "system" fn wnd_proc(hwnd: HWND, msg: UINT, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
        match msg {
            WM_COMMAND => {
                handle_command(hwnd, (wparam & 0xFFFF) as u16);
                0
            }
            WM_TIMER => {
                handle_timer(hwnd, wparam);
                0
            }
            WM_KEYDOWN if wparam == VK_ESCAPE as WPARAM => {
                hide_temporarily(hwnd);
                0
            }
            WM_CTLCOLORSTATIC => {
                let hdc = wparam as winapi::shared::windef::HDC;
                let is_timer = with_state(|state| lparam as HWND == state.lbl_timer).unwrap_or(false);
                let color = if is_timer { RGB(0xe7, 0x4c, 0x3c) } else { RGB(0xff, 0xff, 0xff) };
                SetTextColor(hdc, color);
                SetBkMode(hdc, TRANSPARENT as i32);
                BACKGROUND.with(|cell| cell.get()) as LRESULT
            }
            WM_CLOSE => {
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

    unsafe fn handle_command(hwnd: HWND, id: u16) {
        match id {
            ID_BTN_REST => {
                let callback = with_state(|state| {
                    if state.flow.choose_start_rest() {
                        state.on_start_rest.take()
                    } else {
                        None
                    }
                })
                .flatten();
                let Some(callback) = callback else { return };
                callback();

                if let Some((lbl_message, lbl_timer, btn_rest, btn_snooze)) =
                    with_state(|state| (state.lbl_message, state.lbl_timer, state.btn_rest, state.btn_snooze))
                {
                    ShowWindow(btn_rest, SW_HIDE);
                    ShowWindow(btn_snooze, SW_HIDE);
                    let text = to_wide("请起立活动！");
                    SetWindowTextW(lbl_message, text.as_ptr());
                    ShowWindow(lbl_timer, SW_SHOW);
                }
                SetTimer(hwnd, TIMER_COUNTDOWN, 1000, None);
                tick_countdown(hwnd);
            }
            ID_BTN_SNOOZE => {
                let callback = with_state(|state| {
                    if state.flow.choose_snooze() {
                        state.outcome = PromptOutcome::Snoozed;
                        state.on_snooze.take()
                    } else {
                        None
                    }
                })
                .flatten();
                if let Some(callback) = callback {
                    callback();
                    DestroyWindow(hwnd);
                }
            }
            ID_BTN_HIDE => hide_temporarily(hwnd),
            _ => {}
        }
    }

    unsafe fn handle_timer(hwnd: HWND, timer_id: usize) {
        match timer_id {
            TIMER_COUNTDOWN => tick_countdown(hwnd),
            TIMER_RESTORE => {
                KillTimer(hwnd, TIMER_RESTORE);
                ShowWindow(hwnd, SW_SHOW);
                SetForegroundWindow(hwnd);
            }
            _ => {}
        }
    }

    unsafe fn tick_countdown(hwnd: HWND) {
        match with_state(|state| state.flow.tick()) {
            Some(CountdownTick::Display(secs)) => {
                if let Some(lbl_timer) = with_state(|state| state.lbl_timer) {
                    let text = to_wide(&format_mm_ss(secs));
                    SetWindowTextW(lbl_timer, text.as_ptr());
                }
            }
            Some(CountdownTick::Finished) => {
                with_state(|state| state.outcome = PromptOutcome::RestCompleted);
                KillTimer(hwnd, TIMER_COUNTDOWN);
                DestroyWindow(hwnd);
            }
            _ => {}
        }
    }

    unsafe fn hide_temporarily(hwnd: HWND) {
        ShowWindow(hwnd, SW_HIDE);
        SetTimer(hwnd, TIMER_RESTORE, TEMPORARY_HIDE_SECS * 1000, None);
    }
}
