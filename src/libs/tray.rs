//! System tray surface: icon, status line and command menu.
//!
//! Runs on its own dedicated thread because the tray icon needs a Win32
//! message pump on the thread that created it. The loop alternates between
//! pumping messages, draining menu events and refreshing the status text
//! about once a second. It only ever *reads* monitor state through
//! snapshots and issues commands through the monitor's public operations,
//! never holding any lock while a dialog is open (dialogs get their own
//! threads).

use crate::libs::audio::AudioPlayer;
use crate::libs::autostart;
use crate::libs::config::Config;
use crate::libs::dialogs;
use crate::libs::health::HealthLog;
use crate::libs::messages::Message;
use crate::libs::monitor::Monitor;
use crate::{msg_debug, msg_error, msg_info};
use std::time::{Duration, Instant};
use tray_icon::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIconBuilder};

const MENU_ID_HEALTH: &str = "health";
const MENU_ID_RESET: &str = "reset";
const MENU_ID_DURATION: &str = "duration";
const MENU_ID_MUSIC: &str = "music";
const MENU_ID_AUTOSTART: &str = "autostart";
const MENU_ID_QUIT: &str = "quit";

const HEALTH_ITEM_LABEL: &str = "记录今日健康数据";

/// 32x32 tray icon drawn in code: a green disc on transparency.
fn icon_rgba() -> (Vec<u8>, u32, u32) {
    const SIZE: i32 = 32;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    let center = (SIZE as f32 - 1.0) / 2.0;
    let radius = SIZE as f32 / 2.0 - 1.0;
    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if (dx * dx + dy * dy).sqrt() <= radius {
                rgba.extend_from_slice(&[0x27, 0xae, 0x60, 0xff]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    (rgba, SIZE as u32, SIZE as u32)
}

fn health_item_label() -> String {
    let marker = HealthLog::load().map(|log| log.today_marker()).unwrap_or("");
    format!("{}{}", HEALTH_ITEM_LABEL, marker)
}

/// Builds the tray icon and services it until the process exits.
pub fn run(monitor: Monitor, audio: AudioPlayer) {
    let (rgba, width, height) = icon_rgba();
    let icon = match Icon::from_rgba(rgba, width, height) {
        Ok(icon) => icon,
        Err(e) => {
            msg_error!(Message::TrayInitFailed(e.to_string()));
            return;
        }
    };

    let status_item = MenuItem::with_id("status", monitor.snapshot().status_line(), false, None);
    let health_item = MenuItem::with_id(MENU_ID_HEALTH, health_item_label(), true, None);
    let reset_item = MenuItem::with_id(MENU_ID_RESET, "重置并开始工作", true, None);
    let duration_item = MenuItem::with_id(MENU_ID_DURATION, "设定计时时长", true, None);
    let music_item = MenuItem::with_id(MENU_ID_MUSIC, "选择提醒音乐", true, None);
    let autostart_item = MenuItem::with_id(MENU_ID_AUTOSTART, "启用/禁用开机自启", true, None);
    let quit_item = MenuItem::with_id(MENU_ID_QUIT, "退出", true, None);

    let menu = Menu::new();
    let appended = menu.append_items(&[
        &status_item,
        &PredefinedMenuItem::separator(),
        &health_item,
        &reset_item,
        &duration_item,
        &music_item,
        &autostart_item,
        &PredefinedMenuItem::separator(),
        &quit_item,
    ]);
    if let Err(e) = appended {
        msg_error!(Message::TrayInitFailed(e.to_string()));
        return;
    }

    let tray = match TrayIconBuilder::new()
        .with_tooltip("久坐助手")
        .with_icon(icon)
        .with_menu(Box::new(menu))
        .build()
    {
        Ok(tray) => tray,
        Err(e) => {
            msg_error!(Message::TrayInitFailed(e.to_string()));
            return;
        }
    };

    msg_debug!("system tray initialized");

    let mut last_refresh = Instant::now();
    loop {
        pump_messages();

        while let Ok(event) = MenuEvent::receiver().try_recv() {
            handle_menu_event(event.id.0.as_str(), &monitor, &audio);
        }

        if last_refresh.elapsed() >= Duration::from_secs(1) {
            last_refresh = Instant::now();
            let status = monitor.snapshot().status_line();
            let _ = tray.set_tooltip(Some(status.as_str()));
            status_item.set_text(status);
            health_item.set_text(health_item_label());
        }

        std::thread::sleep(Duration::from_millis(100));
    }
}

fn handle_menu_event(id: &str, monitor: &Monitor, audio: &AudioPlayer) {
    match id {
        MENU_ID_RESET => monitor.reset_work(),
        MENU_ID_DURATION => {
            let monitor = monitor.clone();
            std::thread::spawn(move || {
                let current = monitor.snapshot().work_duration_minutes;
                if let Some(minutes) = dialogs::prompt_work_duration(current) {
                    if monitor.update_work_duration(minutes).is_ok() {
                        persist_config(|config| config.work_duration = minutes);
                    }
                }
            });
        }
        MENU_ID_MUSIC => {
            let audio = audio.clone();
            std::thread::spawn(move || {
                if let Some(path) = dialogs::pick_music_file() {
                    if audio.set_track(&path) {
                        msg_info!(Message::MusicUpdated(path.display().to_string()));
                        persist_config(move |config| config.music_path = Some(path));
                    }
                }
            });
        }
        MENU_ID_HEALTH => {
            std::thread::spawn(dialogs::record_health_dialog);
        }
        MENU_ID_AUTOSTART => {
            std::thread::spawn(|| {
                if let Err(e) = autostart::toggle() {
                    msg_error!(Message::AutostartEnableFailed(e.to_string()));
                }
            });
        }
        MENU_ID_QUIT => {
            // Immediate exit by contract; audio stop is the only cleanup.
            monitor.stop();
            audio.stop();
            std::process::exit(0);
        }
        _ => {}
    }
}

/// Read-modify-write of the persisted settings; errors are logged only.
fn persist_config(update: impl FnOnce(&mut Config)) {
    match Config::read() {
        Ok(mut config) => {
            update(&mut config);
            if let Err(e) = config.save() {
                msg_error!(Message::ConfigSaveFailed(e.to_string()));
            }
        }
        Err(e) => msg_error!(Message::ConfigSaveFailed(e.to_string())),
    }
}

fn pump_messages() {
    use winapi::um::winuser::{DispatchMessageW, PeekMessageW, TranslateMessage, MSG, PM_REMOVE};

    unsafe {
        let mut msg: MSG = std::mem::zeroed();
        while PeekMessageW(&mut msg, std::ptr::null_mut(), 0, 0, PM_REMOVE) != 0 {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
