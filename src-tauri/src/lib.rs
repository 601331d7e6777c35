mod clock;
mod events;
mod interaction;
mod settings;
mod window;

use std::sync::Arc;

use clock::ClockController;
use interaction::{InteractionController, InteractionTimings};
use log::{error, info, warn};
use settings::SettingsStore;
use tauri::{Listener, Manager, WindowEvent};

pub(crate) struct AppState {
    pub(crate) clock: ClockController,
    pub(crate) interaction: InteractionController,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("floatclock starting up...");

    tauri::Builder::default()
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let settings = Arc::new(SettingsStore::new(app_data_dir.join("settings.json"))?);

                let handle = app.handle().clone();
                let sink: Arc<dyn events::EventSink> = Arc::new(handle.clone());

                let clock = ClockController::new(sink.clone());
                let interaction = InteractionController::new(
                    sink,
                    settings.gesture(),
                    InteractionTimings::from_env(),
                );

                let widget = window::shell::create_widget_window(&handle, &settings)?;

                // Window lifecycle feeds the interaction state machine and
                // the frame autosave.
                {
                    let handle = handle.clone();
                    let settings = settings.clone();
                    widget.on_window_event(move |event| match event {
                        WindowEvent::Focused(focused) => {
                            let focused = *focused;
                            let handle = handle.clone();
                            tauri::async_runtime::spawn(async move {
                                let Some(state) = handle.try_state::<AppState>() else {
                                    return;
                                };
                                if focused {
                                    state.interaction.app_activated().await;
                                } else {
                                    state.interaction.app_resigned().await;
                                }
                            });
                        }
                        WindowEvent::Moved(_) | WindowEvent::Resized(_) => {
                            if let Some(widget) =
                                handle.get_webview_window(window::shell::WINDOW_LABEL)
                            {
                                if let Err(err) = window::shell::persist_frame(&widget, &settings) {
                                    warn!("failed to save the window frame: {err}");
                                }
                            }
                        }
                        _ => {}
                    });
                }

                // Mirror requests arrive over the event channel; the window
                // owner is the only component that touches the frame.
                {
                    let handle_for_mirror = handle.clone();
                    handle.listen(events::MIRROR_REQUESTED, move |_event| {
                        let Some(widget) =
                            handle_for_mirror.get_webview_window(window::shell::WINDOW_LABEL)
                        else {
                            return;
                        };
                        if let Err(err) = window::shell::mirror_window(&widget) {
                            error!("mirror failed: {err}");
                        }
                    });
                }

                tauri::async_runtime::block_on(clock.start());

                app.manage(AppState { clock, interaction });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            clock::commands::get_clock_state,
            interaction::commands::get_interaction_state,
            interaction::commands::pointer_entered,
            interaction::commands::pointer_exited,
            interaction::commands::register_tap,
            interaction::commands::close_widget,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
