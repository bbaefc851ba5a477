use anyhow::Result;
use simulation::{ActionOutcome, CareAction, SimError};

use crate::state::AppState;

fn confirmation(action: CareAction, name: &str) -> String {
    match action {
        CareAction::Feed => format!("{name} has been fed."),
        CareAction::Play => format!("You played with {name}."),
        CareAction::GiveToy => format!("{name} enjoyed a new toy."),
        CareAction::GiveMedicine => format!("{name} took some medicine."),
    }
}

/// Care for the active pet, then let one hour pass.
pub fn care(state: &mut AppState, action: CareAction) -> Result<Vec<String>> {
    let status = state.world.active_status().ok_or(SimError::NoActivePet)?;
    if !status.alive {
        return Ok(vec![format!(
            "{} cannot perform actions (game over). Try another pet or quit.",
            status.name
        )]);
    }

    let mut lines = Vec::new();
    if state.world.care_active(action)? == ActionOutcome::Applied {
        lines.push(confirmation(action, &status.name));
    }

    let result = state.world.tick_active(1, &mut state.rng)?;
    lines.extend(result.events.iter().map(|event| event.describe(&status.name)));

    Ok(lines)
}
