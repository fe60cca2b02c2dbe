use std::path::Path;

use colored::Colorize;

use dw_wellness::{CompanionSession, DietGoal, Mood, ProfileForm};

/// Profile values given on the command line.
pub struct ProfileFlags {
    pub name: Option<String>,
    pub age: Option<String>,
    pub mood: Option<String>,
    pub stress: Option<String>,
    pub diet: Option<String>,
}

pub fn run(profile: Option<&Path>, flags: ProfileFlags, json: bool) -> Result<(), String> {
    let mut form = match profile {
        Some(path) => load_profile(path)?,
        None => ProfileForm::default(),
    };
    apply_flags(&mut form, flags)?;

    let mut session = CompanionSession::with_form(form);
    let text = session.submit().map_err(|e| e.to_string())?.text.clone();

    if json {
        let out = serde_json::json!({
            "title": session.title(),
            "recommendation": text,
        });
        let out = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {}\n", session.title().bold());
    for line in text.lines() {
        println!("  {line}");
    }

    Ok(())
}

/// Read a profile form from a TOML file.
fn load_profile(path: &Path) -> Result<ProfileForm, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read profile {}: {e}", path.display()))?;
    toml::from_str(&text).map_err(|e| format!("invalid profile {}: {e}", path.display()))
}

/// Overlay command-line values onto the form. Empty strings clear a choice.
fn apply_flags(form: &mut ProfileForm, flags: ProfileFlags) -> Result<(), String> {
    if let Some(name) = flags.name {
        form.name = name;
    }
    if let Some(age) = flags.age {
        form.age = age;
    }
    if let Some(stress) = flags.stress {
        form.stress_level = stress;
    }
    if let Some(mood) = flags.mood {
        form.mood = parse_choice::<Mood>(&mood)?;
    }
    if let Some(diet) = flags.diet {
        form.diet_goal = parse_choice::<DietGoal>(&diet)?;
    }
    Ok(())
}

fn parse_choice<T>(value: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if value.trim().is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|e: T::Err| e.to_string())
}
