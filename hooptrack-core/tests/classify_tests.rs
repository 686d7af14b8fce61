use hooptrack_core::config::{classifier_profile, PipelineConfig, PipelineConfigBuilder};
use hooptrack_core::events::{DetectionEvent, EventLabel};
use hooptrack_core::processing::classify;

fn event(timestamp: f64, action: &str, confidence: f64) -> DetectionEvent {
    DetectionEvent {
        frame: (timestamp * 30.0) as u64,
        timestamp,
        detected_action: action.to_string(),
        confidence,
        shot_type: None,
        frame_image: None,
    }
}

fn labels(events: &[DetectionEvent], config: &PipelineConfig) -> Vec<EventLabel> {
    let profile = classifier_profile("videomae").unwrap();
    classify(events, profile, config)
        .into_iter()
        .map(|e| e.classified_as)
        .collect()
}

#[test]
fn output_preserves_order_and_length() {
    let config = PipelineConfig::default();
    let events = vec![
        event(1.0, "shooting a basketball", 0.9),
        event(2.0, "dribbling", 0.9),
        event(3.0, "blocking the shot", 0.8),
    ];

    let classified = classify(&events, classifier_profile("videomae").unwrap(), &config);

    assert_eq!(classified.len(), events.len());
    for (classified, original) in classified.iter().zip(&events) {
        assert_eq!(classified.event, *original);
    }
}

#[test]
fn maps_vocabulary_keywords_to_labels() {
    let config = PipelineConfig::default();
    let events = vec![
        event(1.0, "shooting a basketball", 0.9),
        event(3.0, "blocking the layup", 0.6),
        event(5.0, "steals the ball", 0.6),
        event(7.0, "catches the rebound", 0.6),
    ];

    assert_eq!(
        labels(&events, &config),
        vec![
            EventLabel::Shot,
            EventLabel::Block,
            EventLabel::Steal,
            EventLabel::Rebound
        ]
    );
}

#[test]
fn ignores_below_per_label_threshold() {
    let config = PipelineConfig::default();
    // Shot threshold is 0.5; 0.45 fails it.
    let events = vec![event(1.0, "shooting a basketball", 0.45)];

    assert_eq!(labels(&events, &config), vec![EventLabel::Ignored]);
}

#[test]
fn ignores_below_global_floor() {
    let config = PipelineConfig::default();
    // 0.2 is under the 0.3 floor even though the block threshold alone
    // would also reject it.
    let events = vec![event(1.0, "blocking", 0.2), event(2.0, "dunk", 0.29)];

    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Ignored, EventLabel::Ignored]
    );
}

#[test]
fn ignores_unknown_vocabulary() {
    let config = PipelineConfig::default();
    let events = vec![event(1.0, "riding a bike", 0.99), event(2.0, "dribbling", 0.99)];

    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Ignored, EventLabel::Ignored]
    );
}

#[test]
fn coarse_throw_resolves_to_shot_by_precedence() {
    let config = PipelineConfig::default();
    // "throw" is in both the shot and pass vocabularies; above both
    // thresholds the shot candidate wins.
    let events = vec![event(1.0, "throwing the ball", 0.9)];

    assert_eq!(labels(&events, &config), vec![EventLabel::Shot]);
}

#[test]
fn coarse_throw_below_shot_threshold_falls_back_to_pass() {
    let config = PipelineConfig::default();
    // 0.45 fails the 0.5 shot threshold but clears the 0.4 assist
    // threshold, so the detection is a pass candidate; with a made shot
    // right after, it becomes the assist.
    let events = vec![
        event(1.0, "throwing the ball", 0.45),
        event(1.5, "shooting a basketball", 0.9),
    ];

    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Assist, EventLabel::Shot]
    );
}

#[test]
fn pass_followed_by_shot_within_window_is_assist() {
    let config = PipelineConfig::default();
    let events = vec![
        event(1.0, "passing the ball", 0.6),
        event(1.8, "shooting a basketball", 0.9),
    ];

    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Assist, EventLabel::Shot]
    );
}

#[test]
fn pass_with_no_following_shot_is_ignored() {
    let config = PipelineConfig::default();
    let events = vec![
        event(1.0, "passing the ball", 0.6),
        event(5.0, "shooting a basketball", 0.9),
    ];

    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Ignored, EventLabel::Shot]
    );
}

#[test]
fn shot_credits_nearest_prior_pass() {
    let config = PipelineConfig::default();
    let events = vec![
        event(1.2, "passing the ball", 0.6),
        event(1.6, "passing the ball", 0.6),
        event(2.0, "shooting a basketball", 0.9),
    ];

    // Only the nearest pass gets the assist; the other sets up nothing.
    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Ignored, EventLabel::Assist, EventLabel::Shot]
    );
}

#[test]
fn equal_distance_passes_favor_the_earlier() {
    let config = PipelineConfig::default();
    // Two passes in the same frame batch share a timestamp.
    let events = vec![
        event(1.5, "passing the ball", 0.6),
        event(1.5, "hands off the ball", 0.6),
        event(2.0, "shooting a basketball", 0.9),
    ];

    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Assist, EventLabel::Ignored, EventLabel::Shot]
    );
}

#[test]
fn one_pass_cannot_assist_two_shots() {
    let config = PipelineConfig::default();
    let events = vec![
        event(1.0, "passing the ball", 0.6),
        event(1.5, "shooting a basketball", 0.9),
        event(1.9, "shooting a basketball", 0.9),
    ];

    // The first shot consumes the pass; the second has no assist left.
    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Assist, EventLabel::Shot, EventLabel::Shot]
    );
}

#[test]
fn assist_window_is_configurable() {
    let config = PipelineConfigBuilder::new().temporal_window_secs(3.0).build();
    let events = vec![
        event(1.0, "passing the ball", 0.6),
        event(3.5, "shooting a basketball", 0.9),
    ];

    assert_eq!(
        labels(&events, &config),
        vec![EventLabel::Assist, EventLabel::Shot]
    );
}

#[test]
fn classification_is_deterministic() {
    let config = PipelineConfig::default();
    let profile = classifier_profile("videomae").unwrap();
    let events: Vec<DetectionEvent> = (0..40)
        .map(|i| {
            let action = match i % 4 {
                0 => "passing the ball",
                1 => "shooting a basketball",
                2 => "dribbling",
                _ => "blocking the shot",
            };
            event(i as f64 * 0.4, action, 0.3 + 0.017 * i as f64)
        })
        .collect();

    let first = classify(&events, profile, &config);
    let second = classify(&events, profile, &config);

    assert_eq!(first, second);
}

#[test]
fn yolo_profile_uses_its_own_vocabulary() {
    let config = PipelineConfig::default();
    let profile = classifier_profile("yolo").unwrap();
    let events = vec![event(1.0, "shooting basketball", 0.9)];

    let classified = classify(&events, profile, &config);

    assert_eq!(classified[0].classified_as, EventLabel::Shot);
}
