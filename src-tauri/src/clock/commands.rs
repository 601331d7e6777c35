use tauri::State;

use crate::AppState;

use super::ClockState;

#[tauri::command]
pub async fn get_clock_state(state: State<'_, AppState>) -> Result<ClockState, String> {
    Ok(state.clock.get_state().await)
}
