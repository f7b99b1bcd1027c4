//! L&D Dashboard desktop entry point
//!
//! Loads configuration, registers the dashboard state and IPC commands, and
//! kicks off the first load of every widget once the window is up.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lnd_dashboard::commands::{analytics, export, pending};
use lnd_dashboard::{logging, DashboardConfig, DashboardState};
use tauri::Manager;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("[lnd-dashboard] Warning: logging disabled: {}", e);
    }

    // Configuration is required; the dashboard cannot locate its documents without it
    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[lnd-dashboard] FATAL ERROR: Invalid configuration");
            eprintln!("[lnd-dashboard] Error details: {:#}", e);
            eprintln!("[lnd-dashboard] Please check:");
            eprintln!("[lnd-dashboard]   - LND_API_BASE_URL is an http(s) URL");
            eprintln!("[lnd-dashboard]   - No LND_*_PATH override is empty");
            std::process::exit(1);
        }
    };

    if let Err(e) = tauri::Builder::default()
        .manage(DashboardState::new(&config))
        .setup(|app| {
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                handle.state::<DashboardState>().refresh_all().await;
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Analytics Commands (8)
            analytics::refresh_dashboard,
            analytics::get_nomination_chart,
            analytics::get_cost_table,
            analytics::get_cost_breakdown,
            analytics::get_cost_trend,
            analytics::get_cards,
            analytics::get_nomination_table,
            analytics::get_recipients,
            // Pending Action Commands (5)
            pending::get_pending_actions,
            pending::approve_action,
            pending::request_reject,
            pending::cancel_reject,
            pending::confirm_reject,
            // Export Commands (2)
            export::export_cost_table,
            export::export_nominations,
        ])
        .run(tauri::generate_context!())
    {
        eprintln!("[lnd-dashboard] FATAL ERROR: Application failed to start");
        eprintln!("[lnd-dashboard] Error details: {}", e);
        std::process::exit(1);
    }
}
