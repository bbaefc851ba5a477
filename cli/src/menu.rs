//! Interactive menu loop

use std::io::{BufRead, Write};

use anyhow::Result;
use simulation::CareAction;

use crate::commands::{care, pets, time};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Care(CareAction),
    Status,
    AdvanceTime,
    CreatePet,
    SwitchPet,
    ListPets,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::Care(CareAction::Feed),
            "2" => MenuChoice::Care(CareAction::Play),
            "3" => MenuChoice::Care(CareAction::GiveToy),
            "4" => MenuChoice::Care(CareAction::GiveMedicine),
            "5" => MenuChoice::Status,
            "6" => MenuChoice::AdvanceTime,
            "7" => MenuChoice::CreatePet,
            "8" => MenuChoice::SwitchPet,
            "9" => MenuChoice::ListPets,
            "0" => MenuChoice::Quit,
            _ => return None,
        };
        Some(choice)
    }

    fn needs_active_pet(self) -> bool {
        matches!(
            self,
            MenuChoice::Care(_) | MenuChoice::Status | MenuChoice::AdvanceTime
        )
    }
}

const MENU: &str = "
------ Virtual Pet Simulator ------
1. Feed active pet
2. Play with active pet
3. Give toy to active pet
4. Give medicine to active pet
5. Check active pet status
6. Advance time (default 1 hour)
7. Create a new pet
8. Switch active pet
9. List all pets
0. Quit";

/// Print `text` and read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn emit<W: Write>(output: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

/// Ask for a name and create a pet. Returns false at end of input.
fn create_from_prompt<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let Some(name) = prompt(input, output, "Enter pet name: ")? else {
        return Ok(false);
    };
    emit(output, &pets::create_pet(state, &name))?;
    Ok(true)
}

/// Run the menu until the player quits or input ends.
pub fn run<R: BufRead, W: Write>(state: &mut AppState, input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output, "Welcome to the Virtual Pet Simulator.")?;
    if !create_from_prompt(state, input, output)? {
        return Ok(());
    }

    loop {
        writeln!(output, "{MENU}")?;
        let Some(line) = prompt(input, output, "Choose an option: ")? else {
            writeln!(output, "Exiting. Thanks for playing.")?;
            break;
        };
        if line.is_empty() {
            continue;
        }

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "Invalid option. Please choose a valid menu item.")?;
            continue;
        };

        if choice.needs_active_pet() && state.world.active_id().is_none() {
            writeln!(output, "No active pet. Create one first.")?;
            if !create_from_prompt(state, input, output)? {
                break;
            }
            if state.world.active_id().is_none() {
                continue;
            }
        }

        let lines = match choice {
            MenuChoice::Quit => {
                writeln!(output, "Exiting. Thanks for playing.")?;
                break;
            }
            MenuChoice::Care(action) => care::care(state, action)?,
            MenuChoice::Status => {
                writeln!(output)?;
                pets::show_status(state)
            }
            MenuChoice::AdvanceTime => {
                let text = format!("Advance how many hours? (default 1, max {}): ", state.max_advance_hours);
                let Some(raw) = prompt(input, output, &text)? else {
                    break;
                };
                let hours = time::parse_hours(&raw, state.max_advance_hours);
                time::advance_time(state, hours)?
            }
            MenuChoice::CreatePet => {
                if !create_from_prompt(state, input, output)? {
                    break;
                }
                continue;
            }
            MenuChoice::SwitchPet => {
                if state.world.pet_count() == 0 {
                    vec!["No pets to switch.".to_string()]
                } else {
                    emit(output, &pets::list_pets(state))?;
                    let Some(raw) = prompt(input, output, "Select active pet number: ")? else {
                        break;
                    };
                    pets::switch_pet(state, &raw)
                }
            }
            MenuChoice::ListPets => pets::list_pets(state),
        };
        emit(output, &lines)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::SimConfig;

    fn run_script(script: &str) -> (AppState, String) {
        let config = SimConfig {
            event_probability: 0.0,
            ..SimConfig::default()
        };
        let mut state = AppState::new(config, 5, 24);
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        run(&mut state, &mut input, &mut output).unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Care(CareAction::Feed)));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Care(CareAction::GiveMedicine)));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("10"), None);
        assert_eq!(MenuChoice::parse("feed"), None);
    }

    #[test]
    fn test_session_flow() {
        let (state, out) = run_script("Rex\n1\n\n6\n3\n7\nTom\n9\n8\n1\nx\n0\n");

        assert!(out.contains("Created pet 'Rex' and set as active."));
        assert!(out.contains("Rex has been fed."));
        assert!(out.contains("Advancing time by 3 hour(s)..."));
        assert!(out.contains("Created pet 'Tom' and set as active."));
        assert!(out.contains("2. Tom - hunger 50, happiness 50, alive (active)"));
        assert!(out.contains("Active pet set to 'Rex'."));
        assert!(out.contains("Invalid option. Please choose a valid menu item."));
        assert!(out.ends_with("Exiting. Thanks for playing.\n"));

        let rex = state.world.active_status().unwrap();
        assert_eq!(rex.name, "Rex");
        assert_eq!(rex.age_hours, 4);
    }

    #[test]
    fn test_blank_first_name_prompts_again_on_action() {
        let (state, out) = run_script("\n5\nRex\n");

        assert!(out.contains("Invalid name."));
        assert!(out.contains("No active pet. Create one first."));
        assert!(out.contains("Name: Rex"));
        assert!(out.ends_with("Exiting. Thanks for playing.\n"));
        assert_eq!(state.world.pet_count(), 1);
    }

    #[test]
    fn test_menu_shows_advance_default() {
        let (_, out) = run_script("Rex\n0\n");
        assert!(out.contains("6. Advance time (default 1 hour)"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (state, out) = run_script("");
        assert_eq!(out, "Welcome to the Virtual Pet Simulator.\nEnter pet name: ");
        assert_eq!(state.world.pet_count(), 0);
    }
}
