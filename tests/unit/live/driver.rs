use super::*;
use crate::live::scene::Scene;
use crate::model::token::Token;

fn driver() -> BoardDriver {
    BoardDriver::new(LiveBoard::new(Scene::default()), Duration::from_millis(5)).unwrap()
}

#[test]
fn zero_interval_is_rejected() {
    assert!(BoardDriver::new(LiveBoard::new(Scene::default()), Duration::ZERO).is_err());
}

#[test]
fn recording_samples_until_stopped() {
    let mut d = driver();
    d.start_recording().unwrap();
    for i in 0..5 {
        d.move_token("b1", Point::new(260.0 + 10.0 * f64::from(i), 150.0))
            .unwrap();
        std::thread::sleep(Duration::from_millis(8));
    }
    d.stop().unwrap();
    d.stop().unwrap();

    let frames = d.frames().unwrap();
    assert!(frames.len() >= 2);
    assert_eq!(frames[0].timestamp, 0);
    assert!(frames.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    // Ticks read the scene as dragged, not as it was when recording started.
    let moved = frames.iter().any(|f| {
        f.tokens
            .iter()
            .any(|t| t.id == "b1" && t.position.x > 250.0)
    });
    assert!(moved);

    let len = frames.len();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(d.frames().unwrap().len(), len);
    assert_eq!(d.state().unwrap(), BoardState::Idle);
}

#[test]
fn double_start_is_rejected() {
    let mut d = driver();
    d.start_recording().unwrap();
    let err = d.start_recording().unwrap_err();
    assert!(matches!(err, BoardError::StateConflict(_)));
    assert!(matches!(d.play().unwrap_err(), BoardError::StateConflict(_)));
    d.stop().unwrap();
}

#[test]
fn playback_runs_to_the_end_and_stops() {
    let mut d = driver();
    let frames: Vec<Frame> = (0..6)
        .map(|i| Frame::new(i * 5, vec![Token::ball("b1", 10.0 * i as f64, 0.0)]))
        .collect();
    d.load_frames(frames.clone()).unwrap();
    d.play().unwrap();
    assert!(d.wait_idle(Duration::from_secs(5)).unwrap());

    assert_eq!(d.progress().unwrap(), Progress { index: 5, total: 6 });
    let scene = d.with_board(|b| b.scene().tokens().to_vec()).unwrap();
    assert_eq!(scene, frames[5].tokens);
}

#[test]
fn play_with_nothing_loaded_is_invalid() {
    let mut d = driver();
    assert!(matches!(d.play().unwrap_err(), BoardError::InvalidInput(_)));
}

#[test]
fn reset_cancels_running_take() {
    let mut d = driver();
    d.start_recording().unwrap();
    std::thread::sleep(Duration::from_millis(12));
    d.reset().unwrap();
    assert_eq!(d.state().unwrap(), BoardState::Idle);
    std::thread::sleep(Duration::from_millis(12));
    assert!(d.frames().unwrap().is_empty());
}

#[test]
fn with_board_gives_mutable_access() {
    let d = driver();
    let moved = d
        .with_board(|b| b.move_token("b1", Point::new(280.0, 140.0)))
        .unwrap()
        .unwrap();
    assert_eq!(moved, Point::new(280.0, 140.0));
    let frames = vec![Frame::new(0, vec![Token::ball("b1", 1.0, 2.0)])];
    d.with_board(|b| b.load_frames(frames.clone())).unwrap().unwrap();
    assert_eq!(d.frames().unwrap(), frames);
}
