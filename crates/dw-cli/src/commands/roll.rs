use colored::Colorize;

use dw_dice::{DiceRoller, DiceSelection, DieFace};

pub fn run(count: DiceSelection, seed: Option<u64>, json: bool) -> Result<(), String> {
    let roll = DiceRoller::new(seed).roll(count);

    if json {
        let out = serde_json::to_string_pretty(&roll).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let glyphs: Vec<&str> = roll.faces.iter().map(|f| glyph(*f)).collect();
    println!(
        "  {} {}  {}",
        "Rolled".bold(),
        glyphs.join(" "),
        roll.to_string().green().bold()
    );

    Ok(())
}

/// Unicode die face for a value.
fn glyph(face: DieFace) -> &'static str {
    match face.value() {
        1 => "\u{2680}",
        2 => "\u{2681}",
        3 => "\u{2682}",
        4 => "\u{2683}",
        5 => "\u{2684}",
        _ => "\u{2685}",
    }
}
