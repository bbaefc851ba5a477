use simulation::{PetId, PetStatus, SimError};

use crate::state::AppState;

const BAR_WIDTH: usize = 20;

/// Text progress bar for a 0-100 level, e.g. `[#####---------------]`.
pub fn bar(value: i32) -> String {
    let value = value.clamp(0, 100) as usize;
    let filled = value * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn create_pet(state: &mut AppState, name: &str) -> Vec<String> {
    match state.world.create_pet(name) {
        Ok(_) => vec![format!("Created pet '{}' and set as active.", name.trim())],
        Err(SimError::InvalidName) => vec!["Invalid name.".to_string()],
        Err(e) => vec![e.to_string()],
    }
}

pub fn list_pets(state: &AppState) -> Vec<String> {
    let pets = state.world.pets();
    if pets.is_empty() {
        return vec!["No pets created yet.".to_string()];
    }

    pets.iter()
        .map(|summary| {
            let status = &summary.status;
            let marker = if summary.active { " (active)" } else { "" };
            let life = if status.alive { "alive" } else { "game over" };
            format!(
                "{}. {} - hunger {}, happiness {}, {}{}",
                summary.id.0, status.name, status.hunger, status.happiness, life, marker
            )
        })
        .collect()
}

/// Switch the active pet from a typed pet number.
pub fn switch_pet(state: &mut AppState, input: &str) -> Vec<String> {
    let Ok(number) = input.trim().parse::<u64>() else {
        return vec!["Please enter a number.".to_string()];
    };

    let id = PetId(number);
    match state.world.switch_active(id) {
        Ok(()) => match state.world.status(id) {
            Ok(status) => vec![format!("Active pet set to '{}'.", status.name)],
            Err(e) => vec![e.to_string()],
        },
        Err(_) => vec!["Invalid selection.".to_string()],
    }
}

pub fn status_lines(status: &PetStatus) -> Vec<String> {
    vec![
        format!("Name: {}", status.name),
        format!("Hunger:    {:3} {} (0=full, 100=starving)", status.hunger, bar(status.hunger)),
        format!(
            "Happiness: {:3} {} (0=sad, 100=very happy)",
            status.happiness,
            bar(status.happiness)
        ),
        format!("Age (hours): {}", status.age_hours),
        format!("State: {}", if status.alive { "OK" } else { "Game Over" }),
    ]
}

pub fn show_status(state: &AppState) -> Vec<String> {
    match state.world.active_status() {
        Some(status) => status_lines(&status),
        None => vec!["No active pet. Create one first.".to_string()],
    }
}
