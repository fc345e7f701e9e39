use crate::modes::{self, ModeOutcome, Session};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateStructure,
    CreateBlankTemplate,
    GenerateFromFiles,
    RenameFromRecord,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::CreateStructure),
            "2" => Some(MenuChoice::CreateBlankTemplate),
            "3" => Some(MenuChoice::GenerateFromFiles),
            "4" => Some(MenuChoice::RenameFromRecord),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn print_menu(record_file: &str) {
    println!("\nAlbum Setup Tool");
    println!("\nChoose mode:");
    println!("1. Create complete album structure (start fresh)");
    println!("2. Create blank {} template", record_file);
    println!("3. Generate {} from files", record_file);
    println!("4. Rename files based on {}", record_file);
    println!("5. Exit");
}

/// Shows the menu until a valid choice is made, then runs that single mode.
/// Returns `None` when the user exits without picking a mode.
pub fn run(session: &mut Session<'_>) -> Result<Option<ModeOutcome>> {
    loop {
        print_menu(&session.config.album.record_file);
        let answer = session.prompter.ask_text("\nEnter choice (1-5): ")?;
        let outcome = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Exit) => {
                println!("Goodbye!");
                return Ok(None);
            }
            Some(MenuChoice::CreateStructure) => modes::create_structure(session)?,
            Some(MenuChoice::CreateBlankTemplate) => modes::create_blank_template(session)?,
            Some(MenuChoice::GenerateFromFiles) => modes::generate_from_files(session)?,
            Some(MenuChoice::RenameFromRecord) => modes::rename_from_record(session)?,
            None => {
                println!("Invalid choice. Please enter a number between 1-5.");
                continue;
            }
        };
        return Ok(Some(outcome));
    }
}
