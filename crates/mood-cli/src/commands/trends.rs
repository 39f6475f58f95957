use anyhow::Result;
use colored::Colorize;
use mood_core::AppConfig;
use mood_core::analytics::{
    ActivityCorrelation, DailyMood, TimeOfDay, TimeOfDayMood, activity_correlations,
    best_time_of_day, daily_trends, time_of_day_breakdown,
};
use serde::Serialize;
use std::path::Path;

use super::utils::{format_mood, load_journal};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Insights {
    daily: Vec<DailyMood>,
    activity_correlations: Vec<ActivityCorrelation>,
    time_of_day: Vec<TimeOfDayMood>,
    best_time_of_day: Option<TimeOfDay>,
}

pub async fn run(file: &Path, json: bool, config: AppConfig) -> Result<()> {
    let journal = load_journal(file, config).await?;
    let state = journal.snapshot().await;
    let entries = state.entries();

    let insights = Insights {
        daily: daily_trends(entries),
        activity_correlations: activity_correlations(entries),
        time_of_day: time_of_day_breakdown(entries),
        best_time_of_day: best_time_of_day(entries),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else {
        print!("{}", render(&insights));
    }
    Ok(())
}

fn render(insights: &Insights) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=== Daily mood ===".bright_magenta().bold()));
    if insights.daily.is_empty() {
        out.push_str(&format!("{}\n", "No entries yet.".yellow()));
    }
    for day in &insights.daily {
        out.push_str(&format!(
            "{}  {:>4}  {} {}  ({} entries)\n",
            day.date,
            format_mood(day.average_mood),
            day.dominant_emotion.emoji,
            day.dominant_emotion.label,
            day.entry_count
        ));
    }

    if !insights.activity_correlations.is_empty() {
        out.push_str(&format!("{}\n", "=== Activities ===".bright_magenta().bold()));
        for item in &insights.activity_correlations {
            let delta = format!("{:+.1}", item.correlation);
            let delta = if item.correlation > 0.0 {
                delta.green()
            } else if item.correlation < 0.0 {
                delta.red()
            } else {
                delta.normal()
            };
            out.push_str(&format!(
                "{} {:<12} {}  ({} entries)\n",
                item.activity.icon, item.activity.name, delta, item.entry_count
            ));
        }
    }

    if !insights.time_of_day.is_empty() {
        out.push_str(&format!("{}\n", "=== Time of day ===".bright_magenta().bold()));
        for bucket in &insights.time_of_day {
            out.push_str(&format!(
                "{:<10} {}  ({} entries)\n",
                bucket.time_of_day.to_string(),
                format_mood(bucket.average_intensity),
                bucket.entry_count
            ));
        }
    }

    if let Some(best) = insights.best_time_of_day {
        out.push_str(&format!(
            "{}\n",
            format!("You tend to feel more positive in the {}.", best).cyan()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use mood_core::{EntryDraft, MoodEntry};

    fn entry(at: &str, intensity: i64, activity: &str) -> MoodEntry {
        let timestamp = DateTime::parse_from_rfc3339(at)
            .unwrap()
            .with_timezone(&Utc);
        EntryDraft::new()
            .with_emotion_id("peace")
            .unwrap()
            .with_intensity(intensity)
            .with_activity_id(activity)
            .unwrap()
            .validate()
            .unwrap()
            .into_entry(MoodEntry::id_for(timestamp), timestamp)
    }

    #[test]
    fn test_render_morning_insight() {
        colored::control::set_override(false);
        let entries = vec![
            entry("2024-04-01T07:00:00Z", 9, "meditation"),
            entry("2024-04-01T23:00:00Z", 3, "work"),
        ];
        let insights = Insights {
            daily: daily_trends(&entries),
            activity_correlations: activity_correlations(&entries),
            time_of_day: time_of_day_breakdown(&entries),
            best_time_of_day: best_time_of_day(&entries),
        };

        let text = render(&insights);
        assert!(text.contains("2024-04-01   6.0"));
        assert!(text.contains("+3.0"));
        assert!(text.contains("-3.0"));
        assert!(text.contains("You tend to feel more positive in the morning."));
    }

    #[test]
    fn test_render_without_entries() {
        colored::control::set_override(false);
        let insights = Insights {
            daily: vec![],
            activity_correlations: vec![],
            time_of_day: vec![],
            best_time_of_day: None,
        };

        let text = render(&insights);
        assert!(text.contains("No entries yet."));
        assert!(!text.contains("You tend to feel"));
    }
}
