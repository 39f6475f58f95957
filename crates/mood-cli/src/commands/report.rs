use anyhow::Result;
use colored::Colorize;
use mood_core::{AnalyticsSummary, AppConfig, TimeRange, Trend};
use mood_infrastructure::StorageStats;
use std::path::Path;

use super::utils::{format_mood, load_journal};

pub async fn run(file: &Path, range: Option<TimeRange>, json: bool, config: AppConfig) -> Result<()> {
    let journal = load_journal(file, config).await?;
    let summary = match range {
        Some(range) => journal.summary(range).await,
        None => journal.summary_default().await,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let stats = StorageStats::from_entries(journal.snapshot().await.entries());
    print!("{}", render(&summary, &stats));
    Ok(())
}

fn render(summary: &AnalyticsSummary, stats: &StorageStats) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("=== Mood report ({}) ===", summary.range).bright_magenta().bold()
    ));

    if summary.is_empty() {
        out.push_str(&format!(
            "{}\n",
            "No entries in this range yet. Start tracking your mood!".yellow()
        ));
    }

    out.push_str(&format!("{} {}\n", "Entries:".bold(), summary.entry_count));
    out.push_str(&format!(
        "{} {}/10\n",
        "Average mood:".bold(),
        format_mood(summary.average_intensity)
    ));

    let emotion = match &summary.most_frequent_emotion {
        Some(emotion) => format!("{} {}", emotion.emoji, emotion.label),
        None => "-".to_string(),
    };
    out.push_str(&format!("{} {}\n", "Most frequent:".bold(), emotion));

    let trend = match summary.trend {
        Trend::Improving => summary.trend.to_string().green(),
        Trend::Declining => summary.trend.to_string().red(),
        Trend::Stable => summary.trend.to_string().normal(),
    };
    out.push_str(&format!("{} {}\n", "Trend:".bold(), trend));
    out.push_str(&format!(
        "{} {:.0}%\n",
        "Completion:".bold(),
        summary.completion_rate
    ));
    out.push_str(&format!("{} {}\n", "Days tracked:".bold(), summary.days_tracked));

    if !summary.top_activities.is_empty() {
        out.push_str(&format!("{}\n", "Top activities:".bold()));
        for (rank, item) in summary.top_activities.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} {} ({})\n",
                rank + 1,
                item.activity.icon,
                item.activity.name,
                item.count
            ));
        }
    }

    out.push_str(&format!(
        "{} {} entries, ~{:.1} KB\n",
        "Storage:".dimmed(),
        stats.total_entries,
        stats.approx_size_kb
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use mood_core::{EntryDraft, MoodEntry};

    #[test]
    fn test_render_empty_report() {
        colored::control::set_override(false);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let summary =
            AnalyticsSummary::compute(&[], TimeRange::Month, now, &AppConfig::default().analytics);

        let text = render(&summary, &StorageStats::from_entries(&[]));
        assert!(text.contains("=== Mood report (month) ==="));
        assert!(text.contains("No entries in this range yet"));
        assert!(text.contains("Most frequent: -"));
        assert!(text.contains("Trend: stable"));
        assert!(!text.contains("Top activities"));
    }

    #[test]
    fn test_render_lists_activities() {
        colored::control::set_override(false);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let entries: Vec<MoodEntry> = (0..2)
            .map(|i| {
                let timestamp = now - Duration::hours(i);
                EntryDraft::new()
                    .with_emotion_id("joy")
                    .unwrap()
                    .with_intensity(8)
                    .with_activity_id("music")
                    .unwrap()
                    .validate()
                    .unwrap()
                    .into_entry(MoodEntry::id_for(timestamp), timestamp)
            })
            .collect();
        let summary =
            AnalyticsSummary::compute(&entries, TimeRange::Week, now, &AppConfig::default().analytics);

        let text = render(&summary, &StorageStats::from_entries(&entries));
        assert!(text.contains("Average mood: 8.0/10"));
        assert!(text.contains("Joy"));
        assert!(text.contains("1. "));
        assert!(text.contains("Music (2)"));
        assert!(text.contains("2 entries, ~1.0 KB"));
    }
}
