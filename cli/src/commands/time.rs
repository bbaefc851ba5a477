use anyhow::Result;
use simulation::SimError;

use crate::state::AppState;

/// Hours to advance from user input. Blank or unparseable input means one
/// hour; anything else is clamped to `[1, max_hours]`.
pub fn parse_hours(input: &str, max_hours: u32) -> u32 {
    let input = input.trim();
    if input.is_empty() {
        return 1;
    }
    match input.parse::<i64>() {
        Ok(hours) => hours.clamp(1, i64::from(max_hours.max(1))) as u32,
        Err(_) => {
            tracing::warn!(input, "unparseable hour count, advancing one hour");
            1
        }
    }
}

pub fn advance_time(state: &mut AppState, hours: u32) -> Result<Vec<String>> {
    let name = state
        .world
        .active_status()
        .ok_or(SimError::NoActivePet)?
        .name;

    let mut lines = vec![format!("Advancing time by {hours} hour(s)...")];
    let result = state.world.tick_active(hours, &mut state.rng)?;
    lines.extend(result.events.iter().map(|event| event.describe(&name)));
    lines.push("Time advanced.".to_string());

    Ok(lines)
}
