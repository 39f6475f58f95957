use colored::Colorize;
use mood_core::catalog::{activities, emotions};

pub fn run() {
    print!("{}", render());
}

fn render() -> String {
    let mut out = format!("{}\n", "=== Emotions ===".bright_magenta().bold());
    for emotion in emotions() {
        out.push_str(&format!(
            "{} {:<10} {:<9} {}\n",
            emotion.emoji, emotion.id, emotion.label, emotion.color
        ));
    }

    out.push_str(&format!("{}\n", "=== Activities ===".bright_magenta().bold()));
    for activity in activities() {
        out.push_str(&format!(
            "{} {:<10} {:<10} {}\n",
            activity.icon, activity.id, activity.name, activity.color
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_both_catalogs_in_order() {
        colored::control::set_override(false);
        let text = render();
        let joy = text.find("joy").unwrap();
        let fear = text.find("fear").unwrap();
        let exercise = text.find("exercise").unwrap();
        assert!(joy < fear);
        assert!(fear < exercise);
        assert_eq!(text.lines().count(), 2 + 9 + 9);
    }
}
