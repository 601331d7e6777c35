use tauri::{AppHandle, State};

use crate::AppState;

use super::InteractionState;

#[tauri::command]
pub async fn get_interaction_state(
    state: State<'_, AppState>,
) -> Result<InteractionState, String> {
    Ok(state.interaction.get_state().await)
}

#[tauri::command]
pub async fn pointer_entered(state: State<'_, AppState>) -> Result<(), String> {
    state.interaction.pointer_entered().await;
    Ok(())
}

#[tauri::command]
pub async fn pointer_exited(state: State<'_, AppState>) -> Result<(), String> {
    state.interaction.pointer_exited().await;
    Ok(())
}

#[tauri::command]
pub async fn register_tap(state: State<'_, AppState>) -> Result<(), String> {
    state.interaction.register_tap().await;
    Ok(())
}

/// The close affordance terminates the app outright, no confirmation.
#[tauri::command]
pub fn close_widget(app_handle: AppHandle) {
    log::info!("close affordance activated; exiting");
    app_handle.exit(0);
}
