//! End-to-end tests through the public API: image and text classification
//! via the engine, streaks over a mood log, the weekly summary, discovery
//! tasks and the heuristic suggestion path.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use moodlens_lib::discovery::TaskCategory;
use moodlens_lib::{
    build_search_plan, compute_mood_summary, compute_streak, compute_weekly_summary,
    daily_discovery_tasks, extract_journal_keywords, extract_library_profile,
    generate_fallback_insight, mood_by_name, rank_fallback_suggestions, recommended_activities,
    CandidateBatches, CandidateResult, ContentType, EmotionEngine, EmotionLabel, JournalEntry,
    MediaInput, MoodEntry, MoodTrend, NeedState, SuggestionRequest,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;

fn uniform(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

// ============================================================================
// Image classification
// ============================================================================

#[test]
fn test_bright_warm_saturated_frame_reads_surprised() {
    let engine = EmotionEngine::new().unwrap();
    let frame = uniform(64, 64, [200, 190, 60]);
    let prediction = engine
        .classify_image(&MediaInput::Rgba {
            width: 64,
            height: 64,
            pixels: frame.as_raw(),
        })
        .expect("uniform frame should be analyzable");

    assert!(matches!(prediction.emotion, EmotionLabel::Surprised | EmotionLabel::Happy));
    // happy 0.35, surprised 0.40, neutral 0.08
    assert_eq!(prediction.emotion, EmotionLabel::Surprised);
    assert!((prediction.confidence - 0.40 / 0.83).abs() < 1e-6);
    assert!(prediction.confidence <= 0.92);
}

#[test]
fn test_encoded_png_matches_raw_frame() {
    let engine = EmotionEngine::new().unwrap();
    let frame = uniform(120, 80, [200, 190, 60]);

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(frame.clone())
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    let from_png = engine.classify_image(&MediaInput::Encoded(&png)).unwrap();
    let from_raw = engine
        .classify_image(&MediaInput::Image(&DynamicImage::ImageRgba8(frame)))
        .unwrap();
    assert_eq!(from_png, from_raw);
}

#[test]
fn test_confidence_stays_within_bounds() {
    let engine = EmotionEngine::new().unwrap();
    let colours = [
        [0, 0, 0],
        [255, 255, 255],
        [30, 30, 80],
        [200, 140, 120],
        [128, 128, 128],
        [220, 60, 40],
        [40, 200, 90],
        [60, 50, 45],
        [180, 170, 160],
    ];

    for rgb in colours {
        let frame = DynamicImage::ImageRgba8(uniform(32, 48, rgb));
        let prediction = engine.classify_image(&MediaInput::Image(&frame)).unwrap();
        let zero_signal =
            prediction.emotion == EmotionLabel::Neutral && prediction.confidence == 0.6;
        assert!(
            zero_signal || (0.45..=0.92).contains(&prediction.confidence),
            "{:?} -> {:?}",
            rgb,
            prediction
        );
    }

    // High-contrast stripes exercise the contrast rule too.
    let stripes = RgbaImage::from_fn(64, 64, |x, _| {
        if x % 2 == 0 {
            Rgba([250, 120, 40, 255])
        } else {
            Rgba([20, 10, 5, 255])
        }
    });
    let prediction = engine
        .classify_image(&MediaInput::Image(&DynamicImage::ImageRgba8(stripes)))
        .unwrap();
    assert!((0.45..=0.92).contains(&prediction.confidence));
}

#[test]
fn test_unusable_frames_yield_none() {
    let engine = EmotionEngine::new().unwrap();
    assert!(engine.classify_image(&MediaInput::Encoded(&[])).is_none());
    assert!(engine
        .classify_image(&MediaInput::Rgba {
            width: 0,
            height: 10,
            pixels: &[],
        })
        .is_none());
    assert!(engine
        .classify_image(&MediaInput::Rgba {
            width: 2,
            height: 2,
            pixels: &[0; 15],
        })
        .is_none());
}

// ============================================================================
// Text classification
// ============================================================================

#[test]
fn test_empty_text_returns_nothing() {
    let engine = EmotionEngine::new().unwrap();
    assert!(engine.classify_text("").is_empty());
    assert!(engine.classify_text("   ").is_empty());
    assert!(engine.predict_top_text_emotion("").is_none());
}

#[test]
fn test_zero_signal_text_is_neutral() {
    let engine = EmotionEngine::new().unwrap();
    let results = engine.classify_text("the a an is");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].emotion, EmotionLabel::Neutral);
    assert_eq!(results[0].confidence, 1.0);
}

#[test]
fn test_happy_sentence_ranks_happy_first() {
    let engine = EmotionEngine::new().unwrap();
    let results = engine.classify_text("I am so happy and grateful today, everything is wonderful");
    assert_eq!(results[0].emotion, EmotionLabel::Happy);
    assert!(results[0].confidence > 0.10);
    let total: f64 = results.iter().map(|r| r.confidence).sum();
    assert!(total <= 1.0 + 1e-9);
}

#[test]
fn test_everyday_negative_words_move_text_off_neutral() {
    let engine = EmotionEngine::new().unwrap();
    let results = engine.classify_text("I ruined everything and I am so sorry");
    assert_eq!(results[0].emotion, EmotionLabel::Sad);
    assert!(results.iter().all(|r| r.emotion != EmotionLabel::Neutral));

    let upbeat = engine.classify_text("safe, alive and successful");
    assert_eq!(upbeat[0].emotion, EmotionLabel::Happy);
}

#[test]
fn test_more_keyword_hits_never_lower_the_category() {
    // Neither word carries a sentiment rating, so polarity stays neutral.
    let engine = EmotionEngine::new().unwrap();
    let share = |text: &str, label: EmotionLabel| {
        engine
            .classify_text(text)
            .into_iter()
            .find(|r| r.emotion == label)
            .map(|r| r.confidence)
            .unwrap_or(0.0)
    };

    let once = share("resentment paranoid", EmotionLabel::Angry);
    let twice = share("resentment resentment paranoid", EmotionLabel::Angry);
    assert!(twice >= once);
    assert!(twice >= share("resentment resentment paranoid", EmotionLabel::Fearful));
}

// ============================================================================
// Streaks
// ============================================================================

fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 7, 20, 21, 30, 0)
        .unwrap()
}

fn checked_in(days_ago: i64, mood: &str) -> MoodEntry {
    MoodEntry {
        mood: mood_by_name(mood).unwrap(),
        emotion: None,
        timestamp: (now() - Duration::days(days_ago)).with_timezone(&Utc),
    }
}

#[test]
fn test_streak_laws() {
    let gap = vec![checked_in(0, "Happy"), checked_in(1, "Calm"), checked_in(3, "Sad")];
    assert_eq!(compute_streak(&gap, &now()).streak, 2);

    let same_day = vec![checked_in(0, "Happy"), checked_in(0, "Sad"), checked_in(0, "Calm")];
    assert_eq!(compute_streak(&same_day, &now()).streak, 1);

    let stale = compute_streak(&[checked_in(3, "Tired")], &now());
    assert_eq!(stale.streak, 0);
    assert_eq!(stale.last_check_in_label, "Last check-in: 7/17/2026");

    // Pure: same input, same answer.
    assert_eq!(compute_streak(&gap, &now()), compute_streak(&gap, &now()));
}

#[test]
fn test_streak_reads_entries_from_json() {
    let json = r#"[
        {"mood": {"name": "Calm", "icon": "self_improvement", "description": "", "score": 7},
         "timestamp": "2026-07-20T03:00:00Z"},
        {"mood": {"name": "Sad", "icon": "sentiment_sad", "description": "", "score": 2},
         "emotion": {"label": "sad", "confidence": 0.8},
         "timestamp": "2026-07-19T03:00:00Z"}
    ]"#;
    let entries: Vec<MoodEntry> = serde_json::from_str(json).unwrap();
    let result = compute_streak(&entries, &now());
    assert_eq!(result.streak, 2);
    assert_eq!(result.last_check_in_label, "Today");
}

// ============================================================================
// Suggestions and insights
// ============================================================================

fn candidate(content_type: ContentType, title: &str, genres: &[&str]) -> CandidateResult {
    CandidateResult {
        content_type,
        title: title.into(),
        author: None,
        description: Some(format!("About {title}")),
        url: None,
        image_url: None,
        source: "catalogue".into(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        year: Some("2020".into()),
        external_id: Some(format!("ext-{}", title.len())),
    }
}

#[test]
fn test_fallback_pipeline_for_a_sad_week() {
    let entries = vec![checked_in(0, "Sad"), checked_in(1, "Sad"), checked_in(2, "Tired")];
    let summary = compute_mood_summary(&entries).unwrap();
    assert_eq!(summary.latest_mood, "sad");

    let keywords = extract_journal_keywords(&[
        "Missed my grandmother again, rain all week",
        "Rain again. Long walk helped with the grandmother memories",
    ]);
    assert_eq!(&keywords[..3], &["grandmother", "again", "rain"]);

    let library = extract_library_profile(&[]);
    let insight = generate_fallback_insight(
        Some(&summary),
        &keywords,
        &["Poetry".to_string()],
        Some(&library),
    );
    assert_eq!(insight.mood_trend, MoodTrend::Downward);
    assert_eq!(insight.need_state, NeedState::Comfort);

    let request = SuggestionRequest {
        mood: Some(summary.latest_mood.clone()),
        journal_keywords: keywords,
        interests: vec!["Poetry".into()],
        library_items: Vec::new(),
    };
    let mut rng = StdRng::seed_from_u64(2026);
    let plan = build_search_plan(&request, None, &mut rng);
    assert_eq!(plan.queries.len(), 3);
    assert_eq!(plan.movies, "grandmother again");
    assert!(plan.podcasts.ends_with(" Poetry"));

    let batches = CandidateBatches {
        books: vec![candidate(ContentType::Book, "Poetry of Comfort", &["Poetry"])],
        podcasts: vec![candidate(ContentType::Podcast, "poetry of comfort", &[])],
        movies: vec![candidate(ContentType::Movie, "Paddington 2", &["Family"])],
        music: vec![candidate(ContentType::Music, "Soft Piano", &[])],
    };
    let suggestions = rank_fallback_suggestions(&request, batches, &mut rng);

    assert_eq!(suggestions.len(), 3);
    assert!(suggestions
        .iter()
        .all(|s| s.dominant_mood == "sad" && !s.is_saved && !s.is_dismissed));
    assert!(suggestions[0]
        .rationale_text
        .ends_with("This connects with your interest in \"Poetry\"."));
    assert_eq!(suggestions[2].reason, "Music for your \"sad\" state");
    assert_eq!(suggestions[1].metadata.year.as_deref(), Some("2020"));

    let mut ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_suggestions_serialize_with_camel_case_fields() {
    let request = SuggestionRequest {
        mood: Some("Focused".into()),
        ..Default::default()
    };
    let batches = CandidateBatches {
        books: vec![candidate(ContentType::Book, "Deep Work", &["Productivity"])],
        ..Default::default()
    };
    let suggestions = rank_fallback_suggestions(&request, batches, &mut StdRng::seed_from_u64(1));
    let json = serde_json::to_value(&suggestions[0]).unwrap();

    assert_eq!(json["type"], "book");
    assert_eq!(json["dominantMood"], "focused");
    assert_eq!(
        json["benefitText"],
        "Deep reading strengthens neural connections and improves focus."
    );
    assert_eq!(json["metadata"]["genres"][0], "Productivity");
}

// ============================================================================
// Weekly summary and discovery
// ============================================================================

#[test]
fn test_weekly_summary_from_host_json() {
    let moods = vec![
        checked_in(0, "Happy"),
        checked_in(2, "Happy"),
        checked_in(5, "Calm"),
        checked_in(8, "Sad"),
    ];
    let journal: Vec<JournalEntry> = serde_json::from_str(
        r#"[
            {"date": "2026-07-20", "content": "Long walk by the river", "wordCount": 5},
            {"date": "2026-07-19", "content": "River again, then reading", "wordCount": 4},
            {"date": "2026-07-17", "content": "Tired", "wordCount": 1}
        ]"#,
    )
    .unwrap();

    let summary = compute_weekly_summary(&moods, &journal, &now());
    assert_eq!(summary.dominant_mood, "Happy");
    assert!((summary.weekly_score - 23.0 / 3.0).abs() < 1e-9);
    // Sad scores 2 the week before
    assert!(summary.trend_pct > 200.0);
    assert_eq!(summary.journaling_streak, 2);
    assert_eq!(summary.words_written, 10);
    assert_eq!(summary.top_topics[0], "river");

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["spectrum"][0]["name"], "Happy");
    assert_eq!(json["spectrum"][0]["value"], 67);
    assert_eq!(json["journalingStreak"], 2);
}

#[test]
fn test_discovery_follows_the_detected_emotion() {
    let json = r#"{"mood": {"name": "Calm", "icon": "self_improvement", "description": "",
        "score": 7}, "emotion": {"label": "fearful", "confidence": 0.7},
        "timestamp": "2026-07-20T03:00:00Z"}"#;
    let entry: MoodEntry = serde_json::from_str(json).unwrap();
    let day = now().date_naive();

    let tasks = daily_discovery_tasks(Some(&entry), &["worry-time".to_string()], day);
    assert_eq!(tasks.len(), 8);
    assert!(tasks.iter().all(|t| t.category == TaskCategory::MoodBased));
    assert!(tasks.iter().all(|t| t.mood_context == "Recommended for Anxious"));
    assert_eq!(tasks.iter().filter(|t| t.is_completed).count(), 1);
    assert_eq!(tasks, daily_discovery_tasks(Some(&entry), &["worry-time".to_string()], day));

    let picks = recommended_activities(Some(&entry), &mut StdRng::seed_from_u64(12));
    assert_eq!(picks.len(), 2);
    assert!(picks.iter().all(|a| a.targets("Anxious")));
    assert_ne!(picks[0].id, picks[1].id);
}
