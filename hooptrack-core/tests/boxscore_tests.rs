use hooptrack_core::config::{ScoringTable, STAT_ASSISTS, STAT_BLOCKS, STAT_POINTS, STAT_REBOUNDS, STAT_STEALS};
use hooptrack_core::events::{ClassifiedEvent, DetectionEvent, EventLabel, ShotType};
use hooptrack_core::processing::{aggregate, BoxScore};

fn classified(timestamp: f64, label: EventLabel, shot_type: Option<ShotType>) -> ClassifiedEvent {
    ClassifiedEvent {
        event: DetectionEvent {
            frame: (timestamp * 30.0) as u64,
            timestamp,
            detected_action: "test action".to_string(),
            confidence: 0.9,
            shot_type,
            frame_image: None,
        },
        classified_as: label,
    }
}

#[test]
fn zeroed_score_has_every_configured_stat() {
    let score = BoxScore::zeroed(&ScoringTable::default());

    for stat in [STAT_POINTS, STAT_ASSISTS, STAT_STEALS, STAT_BLOCKS, STAT_REBOUNDS] {
        assert_eq!(score.get(stat), 0, "{stat} missing from zeroed score");
    }
}

#[test]
fn counts_each_label_into_its_stat() {
    let table = ScoringTable::default();
    let events = vec![
        classified(1.0, EventLabel::Shot, None),
        classified(2.0, EventLabel::Assist, None),
        classified(3.0, EventLabel::Steal, None),
        classified(4.0, EventLabel::Block, None),
        classified(5.0, EventLabel::Rebound, None),
        classified(6.0, EventLabel::Rebound, None),
    ];

    let score = aggregate(&events, &table);

    assert_eq!(score.get(STAT_POINTS), 2);
    assert_eq!(score.get(STAT_ASSISTS), 1);
    assert_eq!(score.get(STAT_STEALS), 1);
    assert_eq!(score.get(STAT_BLOCKS), 1);
    assert_eq!(score.get(STAT_REBOUNDS), 2);
}

#[test]
fn shot_value_follows_shot_type() {
    let table = ScoringTable::default();
    let events = vec![
        classified(1.0, EventLabel::Shot, None),
        classified(2.0, EventLabel::Shot, Some(ShotType::TwoPoint)),
        classified(3.0, EventLabel::Shot, Some(ShotType::ThreePoint)),
    ];

    let score = aggregate(&events, &table);

    assert_eq!(score.get(STAT_POINTS), 2 + 2 + 3);
}

#[test]
fn ignored_events_contribute_nothing() {
    let table = ScoringTable::default();
    let events = vec![
        classified(1.0, EventLabel::Ignored, None),
        classified(2.0, EventLabel::Shot, None),
        classified(3.0, EventLabel::Ignored, Some(ShotType::ThreePoint)),
    ];

    let score = aggregate(&events, &table);

    assert_eq!(score.get(STAT_POINTS), 2);
    assert_eq!(score.get(STAT_ASSISTS), 0);
}

#[test]
fn every_counted_event_lands_in_exactly_one_stat() {
    let table = ScoringTable::default();
    let events = vec![
        classified(1.0, EventLabel::Shot, None),
        classified(2.0, EventLabel::Assist, None),
        classified(3.0, EventLabel::Block, None),
        classified(4.0, EventLabel::Steal, None),
        classified(5.0, EventLabel::Ignored, None),
        classified(6.0, EventLabel::Rebound, None),
        classified(7.0, EventLabel::Assist, None),
    ];

    let score = aggregate(&events, &table);
    let counted = events.iter().filter(|e| e.is_counted()).count() as u64;

    // Points can exceed the event count (a shot is worth 2 or 3), so count
    // shots rather than points when checking additivity.
    let shots = events
        .iter()
        .filter(|e| e.classified_as == EventLabel::Shot)
        .count() as u64;
    let non_point_total: u64 = score
        .iter()
        .filter(|(stat, _)| *stat != STAT_POINTS)
        .map(|(_, count)| count)
        .sum();

    assert_eq!(non_point_total + shots, counted);
}

#[test]
fn aggregation_is_recomputable() {
    let table = ScoringTable::default();
    let events = vec![
        classified(1.0, EventLabel::Shot, Some(ShotType::ThreePoint)),
        classified(2.0, EventLabel::Rebound, None),
    ];

    assert_eq!(aggregate(&events, &table), aggregate(&events, &table));
}
