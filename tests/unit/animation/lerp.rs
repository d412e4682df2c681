use super::*;
use crate::model::token::TokenKind;

#[test]
fn scalar_and_vector_lerp() {
    assert_eq!(<f64 as Lerp>::lerp(&0.0, &10.0, 0.25), 2.5);
    assert_eq!(
        <Vec2 as Lerp>::lerp(&Vec2::new(0.0, 10.0), &Vec2::new(10.0, 0.0), 0.5),
        Vec2::new(5.0, 5.0)
    );
}

#[test]
fn point_lerp_hits_endpoints_exactly() {
    let a = Point::new(0.1, 0.3);
    let b = Point::new(0.7, 0.9);
    assert_eq!(<Point as Lerp>::lerp(&a, &b, 0.0), a);
    assert_eq!(<Point as Lerp>::lerp(&a, &b, 1.0), b);
}

#[test]
fn token_lerp_keeps_identity_from_start() {
    let a = Token::home("h10", 250.0, 300.0, "FW");
    let b = Token::away("h10", 450.0, 200.0, "other");
    let mid = Token::lerp(&a, &b, 0.5);
    assert_eq!(mid.id, "h10");
    assert_eq!(mid.kind, TokenKind::Home);
    assert_eq!(mid.label.as_deref(), Some("FW"));
    assert_eq!(mid.position, Point::new(350.0, 250.0));
}
