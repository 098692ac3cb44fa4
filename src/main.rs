//! Command-line front end for moodlens.
//!
//! Runs the classifiers and the heuristic suggestion path over local files
//! and prints JSON.

use anyhow::{bail, Context, Result};
use chrono::Local;
use moodlens_lib::{
    build_search_plan, compute_mood_summary, compute_streak_now, compute_weekly_summary,
    daily_discovery_tasks, extract_journal_keywords, extract_library_profile,
    generate_fallback_insight, init_logging, rank_fallback_suggestions, recommended_activities,
    Activity, AnalyzerSettings, CandidateBatches, DiscoveryTask, EmotionEngine, JournalEntry,
    MediaInput, MoodEntry, SuggestionRequest,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, process};

/// Input of the `suggest` command: the request plus the raw material the
/// host app would normally gather.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SuggestInput {
    #[serde(flatten)]
    request: SuggestionRequest,
    /// Newest first.
    mood_entries: Vec<MoodEntry>,
    journal_texts: Vec<String>,
    candidates: CandidateBatches,
    seed: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestOutput {
    insight: moodlens_lib::AiInsight,
    search_plan: moodlens_lib::SearchPlan,
    suggestions: Vec<moodlens_lib::ContentSuggestion>,
}

/// Input of the `weekly` command.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WeeklyInput {
    mood_entries: Vec<MoodEntry>,
    journal: Vec<JournalEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DiscoverOutput {
    recommended: Vec<&'static Activity>,
    tasks: Vec<DiscoveryTask>,
}

fn main() {
    init_logging();

    if let Err(e) = run(env::args().collect()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<()> {
    let program = args.first().map(String::as_str).unwrap_or("moodlens");

    let mut settings_path = None;
    let mut positional = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--settings" => {
                i += 1;
                match args.get(i) {
                    Some(path) => settings_path = Some(path.clone()),
                    None => bail!("--settings needs a path"),
                }
            }
            "--help" | "-h" => {
                print_help(program);
                return Ok(());
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    let settings = match &settings_path {
        Some(path) => AnalyzerSettings::from_file(Path::new(path))?,
        None => AnalyzerSettings::default(),
    };

    let Some((command, rest)) = positional.split_first() else {
        print_help(program);
        bail!("no command given");
    };

    match command.as_str() {
        "image" => {
            let [path] = rest else {
                bail!("usage: {program} image <path>");
            };
            let engine = EmotionEngine::from_settings(&settings)?;
            let bytes = fs::read(path).with_context(|| format!("Failed to read image {path}"))?;
            match engine.analyze_image(&MediaInput::Encoded(&bytes)) {
                Ok(prediction) => print_json(&prediction),
                Err(e) => bail!("{} ({path}: {e})", e.user_message()),
            }
        }
        "text" => {
            if rest.is_empty() {
                bail!("usage: {program} text <words...>");
            }
            let engine = EmotionEngine::from_settings(&settings)?;
            print_json(&engine.classify_text(&rest.join(" ")))
        }
        "streak" => {
            let [path] = rest else {
                bail!("usage: {program} streak <entries.json>");
            };
            let entries: Vec<MoodEntry> = read_json(path)?;
            print_json(&compute_streak_now(&entries))
        }
        "weekly" => {
            let [path] = rest else {
                bail!("usage: {program} weekly <history.json>");
            };
            let input: WeeklyInput = read_json(path)?;
            print_json(&compute_weekly_summary(
                &input.mood_entries,
                &input.journal,
                &Local::now(),
            ))
        }
        "discover" => {
            let Some((path, completed)) = rest.split_first() else {
                bail!("usage: {program} discover <entries.json> [completed-id...]");
            };
            let entries: Vec<MoodEntry> = read_json(path)?;
            let latest = entries.iter().max_by_key(|entry| entry.timestamp);
            let mut rng = StdRng::from_entropy();
            print_json(&DiscoverOutput {
                recommended: recommended_activities(latest, &mut rng),
                tasks: daily_discovery_tasks(latest, completed, Local::now().date_naive()),
            })
        }
        "suggest" => {
            let [path] = rest else {
                bail!("usage: {program} suggest <request.json>");
            };
            let mut input: SuggestInput = read_json(path)?;
            print_json(&suggest(&mut input))
        }
        other => {
            print_help(program);
            bail!("unknown command: {other}");
        }
    }
}

fn suggest(input: &mut SuggestInput) -> SuggestOutput {
    let mut rng = match input.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = compute_mood_summary(&input.mood_entries);
    if input.request.mood.is_none() {
        input.request.mood = summary.as_ref().map(|s| s.latest_mood.clone());
    }
    if input.request.journal_keywords.is_empty() {
        input.request.journal_keywords = extract_journal_keywords(&input.journal_texts);
    }
    let profile = extract_library_profile(&input.request.library_items);
    let profile = (!profile.is_empty()).then_some(profile);

    let insight = generate_fallback_insight(
        summary.as_ref(),
        &input.request.journal_keywords,
        &input.request.interests,
        profile.as_ref(),
    );
    let search_plan = build_search_plan(&input.request, profile.as_ref(), &mut rng);
    let candidates = std::mem::take(&mut input.candidates);
    let suggestions = rank_fallback_suggestions(&input.request, candidates, &mut rng);

    SuggestOutput {
        insight,
        search_plan,
        suggestions,
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
    let contents = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {path}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

fn print_help(program: &str) {
    println!("moodlens - on-device emotion inference");
    println!();
    println!("USAGE:");
    println!("    {program} [--settings <path>] <command> [args]");
    println!();
    println!("COMMANDS:");
    println!("    image <path>             Classify the dominant emotion of an image");
    println!("    text <words...>          Rank emotions in a journal entry");
    println!("    streak <entries.json>    Count consecutive check-in days");
    println!("    weekly <history.json>    Summarise the last seven days of moods and journal");
    println!("    discover <entries.json> [done...]");
    println!("                             Today's activities for the latest check-in");
    println!("    suggest <request.json>   Build an insight, search plan and suggestions");
    println!();
    println!("OPTIONS:");
    println!("    --settings <path>        Analyzer settings JSON");
    println!("    -h, --help               Print help information");
    println!();
    println!("Set RUST_LOG=debug for detailed analysis logs.");
}
