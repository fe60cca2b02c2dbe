use comfy_table::{ContentArrangement, Table};

use dw_wellness::tables::{diet_advice, mood_advice};
use dw_wellness::{DietGoal, Mood};

pub fn run() -> Result<(), String> {
    let mut moods = Table::new();
    moods.set_content_arrangement(ContentArrangement::Dynamic);
    moods.set_header(vec!["Mood", "Label", "Advice"]);
    for mood in Mood::ALL {
        moods.add_row(vec![mood.key(), mood.label(), mood_advice(mood)]);
    }

    let mut goals = Table::new();
    goals.set_content_arrangement(ContentArrangement::Dynamic);
    goals.set_header(vec!["Diet goal", "Label", "Advice"]);
    for goal in DietGoal::ALL {
        goals.add_row(vec![goal.key(), goal.label(), diet_advice(goal)]);
    }

    println!("{moods}");
    println!();
    println!("{goals}");

    Ok(())
}
