use tracing::info;

use crate::animation::keyframes::chain_animation;
use crate::foundation::error::BoardResult;
use crate::model::frame::Frame;
use crate::model::token::{Pose, Token};
use crate::store::tactic::{NewTactic, TacticKind, TacticStore};

/// Built-in drills and formations shipped with every board.
pub fn preset_tactics() -> BoardResult<Vec<NewTactic>> {
    Ok(vec![
        preset(
            "5v2 Rondo",
            TacticKind::Drill,
            "Keep-ball in the middle: five around the outside, two hunting.",
            chain_animation(&rondo_poses(), 1000)?,
        ),
        preset(
            "1v1 Dribble & Shot",
            TacticKind::Drill,
            "Carry out to the wing, cut inside and test the keeper.",
            chain_animation(&one_v_one_poses(), 1000)?,
        ),
        preset(
            "7v7 Formation (2-3-1)",
            TacticKind::Formation,
            "Modern seven-a-side youth academy shape.",
            vec![Frame::new(0, seven_a_side().into_tokens())],
        ),
        preset(
            "Passing Triangle",
            TacticKind::Drill,
            "Tempo passing around a triangle.",
            chain_animation(&triangle_poses(), 800)?,
        ),
    ])
}

/// Replace every preset in `store` with [`preset_tactics`]. Returns how many were inserted.
pub fn seed_presets(store: &mut dyn TacticStore) -> BoardResult<usize> {
    let presets = preset_tactics()?;
    let removed = store.delete_presets()?;
    let count = presets.len();
    for p in presets {
        store.create(p)?;
    }
    info!(removed, inserted = count, "presets seeded");
    Ok(count)
}

fn preset(name: &str, kind: TacticKind, description: &str, frames: Vec<Frame>) -> NewTactic {
    NewTactic {
        is_preset: true,
        ..NewTactic::new(name, kind, None, frames).with_description(description)
    }
}

fn rondo_poses() -> Vec<Pose> {
    let ring = || {
        vec![
            Token::home("h1", 250.0, 150.0, "1"),
            Token::home("h2", 350.0, 150.0, "2"),
            Token::home("h3", 380.0, 200.0, "3"),
            Token::home("h4", 300.0, 250.0, "4"),
            Token::home("h5", 220.0, 200.0, "5"),
        ]
    };
    let pose = |d1: (f64, f64), d2: (f64, f64), ball: (f64, f64)| {
        let mut tokens = ring();
        tokens.push(Token::away("a1", d1.0, d1.1, "D1"));
        tokens.push(Token::away("a2", d2.0, d2.1, "D2"));
        tokens.push(Token::ball("ball", ball.0, ball.1));
        Pose::new(tokens)
    };
    vec![
        pose((280.0, 180.0), (320.0, 220.0), (260.0, 160.0)),
        pose((320.0, 160.0), (300.0, 190.0), (340.0, 160.0)),
        pose((350.0, 180.0), (330.0, 220.0), (370.0, 200.0)),
    ]
}

// Attacking the right-hand goal at x = 600.
fn one_v_one_poses() -> Vec<Pose> {
    let pose = |fw: (f64, f64), df: (f64, f64), gk: (f64, f64), ball: (f64, f64)| {
        Pose::new(vec![
            Token::home("h1", fw.0, fw.1, "FW"),
            Token::away("a1", df.0, df.1, "DF"),
            Token::away("a2", gk.0, gk.1, "GK"),
            Token::ball("ball", ball.0, ball.1),
        ])
    };
    vec![
        // build up
        pose((200.0, 200.0), (400.0, 200.0), (550.0, 200.0), (210.0, 200.0)),
        // to the wing
        pose((350.0, 100.0), (420.0, 150.0), (550.0, 200.0), (360.0, 100.0)),
        // cut inside
        pose((480.0, 180.0), (460.0, 220.0), (550.0, 200.0), (490.0, 180.0)),
        // shot
        pose((490.0, 180.0), (460.0, 220.0), (530.0, 170.0), (580.0, 230.0)),
    ]
}

fn seven_a_side() -> Pose {
    Pose::new(vec![
        Token::home("h1", 50.0, 200.0, "GK"),
        Token::home("h2", 150.0, 120.0, "DF"),
        Token::home("h3", 150.0, 280.0, "DF"),
        Token::home("h4", 300.0, 200.0, "MF"),
        Token::home("h5", 300.0, 80.0, "MF"),
        Token::home("h6", 300.0, 320.0, "MF"),
        Token::home("h7", 500.0, 200.0, "FW"),
        Token::ball("ball", 300.0, 200.0),
    ])
}

fn triangle_poses() -> Vec<Pose> {
    let pose = |ball: (f64, f64)| {
        Pose::new(vec![
            Token::home("h1", 200.0, 120.0, "A"),
            Token::home("h2", 400.0, 200.0, "B"),
            Token::home("h3", 200.0, 280.0, "C"),
            Token::ball("ball", ball.0, ball.1),
        ])
    };
    vec![
        pose((210.0, 130.0)),
        pose((390.0, 200.0)),
        pose((210.0, 270.0)),
        pose((190.0, 130.0)),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/store/presets.rs"]
mod tests;
