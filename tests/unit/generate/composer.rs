use super::*;
use crate::model::token::Token;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Fixed(Vec<Frame>);

impl TacticGenerator for Fixed {
    fn generate(&self, _prompt: &str) -> BoardResult<Vec<Frame>> {
        Ok(self.0.clone())
    }
}

struct Failing(AtomicUsize);

impl TacticGenerator for Failing {
    fn generate(&self, _prompt: &str) -> BoardResult<Vec<Frame>> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(BoardError::generator("rate limited"))
    }
}

struct Slow;

impl TacticGenerator for Slow {
    fn generate(&self, _prompt: &str) -> BoardResult<Vec<Frame>> {
        std::thread::sleep(Duration::from_millis(500));
        Ok(vec![Frame::new(0, vec![Token::ball("ball", 0.0, 0.0)])])
    }
}

#[test]
fn scripted_only_composer_uses_fallback() {
    let composer = TacticComposer::default();
    assert!(!composer.has_primary());
    let out = composer.compose("shoot");
    assert_eq!(out.source, GenerationSource::Scripted);
    assert_eq!(out.frames.len(), 15);
}

#[test]
fn primary_result_is_used_when_it_succeeds() {
    let frames = vec![Frame::new(0, vec![Token::ball("ball", 1.0, 2.0)])];
    let composer = TacticComposer::default().with_primary(Arc::new(Fixed(frames.clone())));
    let out = composer.compose("anything");
    assert_eq!(out.source, GenerationSource::Model);
    assert_eq!(out.frames, frames);
}

#[test]
fn primary_failure_falls_back() {
    let failing = Arc::new(Failing(AtomicUsize::new(0)));
    let composer = TacticComposer::default().with_primary(failing.clone());
    let out = composer.compose("right");
    assert_eq!(out.source, GenerationSource::Scripted);
    assert_eq!(out.frames, crate::animation::scenario::generate_scripted_scenario("right"));
    assert_eq!(failing.0.load(Ordering::SeqCst), 1);
}

#[test]
fn slow_primary_times_out_to_fallback() {
    let composer = TacticComposer::default()
        .with_primary(Arc::new(Slow))
        .with_timeout(Duration::from_millis(20));
    let out = composer.compose("");
    assert_eq!(out.source, GenerationSource::Scripted);
}

#[test]
fn text_model_generator_parses_reply_and_sees_request() {
    let model = TextModelGenerator::new(|prompt: &str| {
        assert!(prompt.contains("Board: 600x400"));
        assert!(prompt.ends_with("User Request: overlap on the left"));
        Ok(r#"```json
[{"timestamp": 0, "tokens": [{"id": "ball", "type": "ball", "x": 300, "y": 200}]}]
```"#
            .to_owned())
    });
    let frames = model.generate("overlap on the left").unwrap();
    assert_eq!(frames.len(), 1);
}

#[test]
fn text_model_errors_become_generator_errors() {
    let model = TextModelGenerator::new(|_: &str| Err(anyhow::anyhow!("connection refused")));
    let err = model.generate("x").unwrap_err();
    assert!(matches!(err, BoardError::Generator(_)));
    assert!(err.to_string().contains("connection refused"));

    let composer = TacticComposer::default().with_primary(Arc::new(model));
    assert_eq!(composer.compose("x").source, GenerationSource::Scripted);
}
