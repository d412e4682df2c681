use super::*;
use crate::foundation::core::Point;

fn pose(tokens: &[(&str, f64, f64)]) -> Pose {
    Pose::new(
        tokens
            .iter()
            .map(|(id, x, y)| Token::home(*id, *x, *y, "1"))
            .collect(),
    )
}

fn pos(frame: &Frame, id: &str) -> Point {
    frame
        .tokens
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.position)
        .unwrap()
}

#[test]
fn segment_frame_count_is_rounded_plus_one() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    let b = pose(&[("h1", 100.0, 50.0)]);
    let rate = SampleRate::default();
    assert_eq!(interpolate_segment(&a, &b, 1000, rate).unwrap().len(), 21);
    assert_eq!(interpolate_segment(&a, &b, 800, rate).unwrap().len(), 17);
    assert_eq!(interpolate_segment(&a, &b, 74, rate).unwrap().len(), 2);
    let r7 = SampleRate::new(7.0).unwrap();
    // 1000/1000*7 = 7
    assert_eq!(interpolate_segment(&a, &b, 1000, r7).unwrap().len(), 8);
}

#[test]
fn segment_endpoints_match_poses() {
    let a = pose(&[("h1", 10.0, 20.0), ("h2", 300.0, 100.0)]);
    let b = pose(&[("h1", 110.0, 220.0), ("h2", 100.0, 300.0)]);
    let frames = interpolate_segment(&a, &b, 1000, SampleRate::default()).unwrap();
    assert_eq!(frames[0].tokens, a.tokens());
    assert_eq!(frames.last().unwrap().tokens, b.tokens());
    assert_eq!(pos(&frames[10], "h1"), Point::new(60.0, 120.0));
}

#[test]
fn segment_timestamps_follow_rate() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    let b = pose(&[("h1", 1.0, 1.0)]);
    let frames = interpolate_segment(&a, &b, 1000, SampleRate::default()).unwrap();
    let ts: Vec<u64> = frames.iter().map(|f| f.timestamp).collect();
    assert_eq!(ts[0], 0);
    assert_eq!(ts[1], 50);
    assert_eq!(*ts.last().unwrap(), 1000);
}

#[test]
fn self_interpolation_is_constant() {
    let a = pose(&[("h1", 42.0, 17.0), ("h2", 5.0, 6.0)]);
    for duration in [50, 333, 1000, 2500] {
        let frames = interpolate_segment(&a, &a, duration, SampleRate::default()).unwrap();
        assert!(frames.iter().all(|f| f.tokens == a.tokens()));
    }
}

#[test]
fn start_only_token_stays_put() {
    let a = pose(&[("h1", 0.0, 0.0), ("h9", 77.0, 88.0)]);
    let b = pose(&[("h1", 100.0, 0.0)]);
    let frames = interpolate_segment(&a, &b, 500, SampleRate::default()).unwrap();
    for f in &frames {
        assert_eq!(pos(f, "h9"), Point::new(77.0, 88.0));
    }
    assert_eq!(pos(frames.last().unwrap(), "h1"), Point::new(100.0, 0.0));
}

#[test]
fn end_only_token_is_left_out_of_the_segment() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    let b = pose(&[("h1", 100.0, 0.0), ("h2", 50.0, 50.0)]);
    let frames = interpolate_segment(&a, &b, 500, SampleRate::default()).unwrap();
    assert_eq!(frames[0].tokens, a.tokens());
    for f in &frames {
        assert_eq!(f.tokens.len(), 1);
        assert_eq!(f.tokens[0].id, "h1");
    }
}

#[test]
fn chained_token_appears_from_the_pose_that_introduces_it() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    let b = pose(&[("h1", 100.0, 0.0), ("h2", 50.0, 50.0)]);
    let c = pose(&[("h1", 200.0, 0.0), ("h2", 150.0, 50.0)]);
    let frames = chain_animation(&[a.clone(), b, c], 1000).unwrap();
    assert_eq!(frames.len(), 41);
    assert_eq!(frames[0].tokens, a.tokens());
    assert!(frames[..20].iter().all(|f| f.tokens.len() == 1));
    assert!(frames[21..].iter().all(|f| f.tokens.len() == 2));
    assert_eq!(pos(&frames[40], "h2"), Point::new(150.0, 50.0));
}

#[test]
fn label_and_kind_come_from_start() {
    let a = Pose::new(vec![Token::ball("ball", 0.0, 0.0)]);
    let b = Pose::new(vec![Token::home("ball", 10.0, 0.0, "X")]);
    let frames = interpolate_segment(&a, &b, 100, SampleRate::default()).unwrap();
    assert!(frames.iter().all(|f| f.tokens[0].label.is_none()));
    assert!(
        frames
            .iter()
            .all(|f| f.tokens[0].kind == crate::model::token::TokenKind::Ball)
    );
}

#[test]
fn segment_rejects_bad_input() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    let rate = SampleRate::default();
    assert!(interpolate_segment(&a, &a, 0, rate).is_err());
    assert!(interpolate_segment(&Pose::default(), &a, 1000, rate).is_err());
    assert!(interpolate_segment(&a, &Pose::default(), 1000, rate).is_err());
    // 20 ms at 20 Hz rounds to zero intervals.
    assert!(interpolate_segment(&a, &a, 20, rate).is_err());
}

#[test]
fn chain_drops_duplicate_boundary_frames() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    let b = pose(&[("h1", 100.0, 0.0)]);
    let c = pose(&[("h1", 100.0, 100.0)]);
    let frames = chain_animation(&[a, b, c], 1000).unwrap();
    assert_eq!(frames.len(), 41);
    assert_eq!(frames[0].timestamp, 0);
    assert_eq!(frames[20].timestamp, 1000);
    assert_eq!(frames[21].timestamp, 1050);
    assert_eq!(frames[40].timestamp, 2000);
    assert!(frames.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert_eq!(pos(&frames[20], "h1"), Point::new(100.0, 0.0));
    assert_eq!(pos(&frames[21], "h1"), Point::new(100.0, 5.0));
}

#[test]
fn chain_requires_two_poses() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    assert!(chain_animation(&[], 1000).is_err());
    let err = chain_animation(std::slice::from_ref(&a), 1000).unwrap_err();
    assert!(matches!(err, BoardError::InvalidInput(_)));
}

#[test]
fn chain_reports_failing_pose_index() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    let err = chain_animation(&[a.clone(), a, Pose::default()], 1000).unwrap_err();
    assert!(err.to_string().contains("pose 1"));
}

#[test]
fn chain_uneven_step_stays_strictly_increasing() {
    let a = pose(&[("h1", 0.0, 0.0)]);
    let b = pose(&[("h1", 10.0, 0.0)]);
    for step in [990, 1010, 333, 75] {
        let frames = chain_animation(&[a.clone(), b.clone(), a.clone(), b.clone()], step).unwrap();
        assert!(frames.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }
}
