use tracing::info;

use crate::foundation::core::TimestampMs;
use crate::foundation::error::{BoardError, BoardResult};
use crate::model::frame::Frame;
use crate::model::token::Token;

/// Side of the pitch an attack develops on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    /// Top of the board (small `y`).
    Left,
    /// Through the middle.
    Center,
    /// Bottom of the board (large `y`).
    Right,
}

/// Keyword lists recognised in free-text prompts. Matching is case-insensitive substring search.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScenarioKeywords {
    /// Words selecting the left lane.
    pub left: Vec<String>,
    /// Words selecting the right lane.
    pub right: Vec<String>,
    /// Words asking for a finish on goal.
    pub shot: Vec<String>,
}

impl Default for ScenarioKeywords {
    fn default() -> Self {
        fn words(ws: &[&str]) -> Vec<String> {
            ws.iter().map(|w| (*w).to_owned()).collect()
        }
        Self {
            left: words(&["left", "sol"]),
            right: words(&["right", "sağ"]),
            shot: words(&["shoot", "şut", "vursun"]),
        }
    }
}

/// Tags extracted from a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioTags {
    /// Attacking lane. Left wins when both sides are mentioned.
    pub lane: Lane,
    /// Finish the move with a shot.
    pub shot: bool,
}

impl ScenarioTags {
    /// Parse tags from free text. Unrecognised text yields a centred run without a shot.
    pub fn parse(prompt: &str, keywords: &ScenarioKeywords) -> Self {
        let p = prompt.to_lowercase();
        let any = |ws: &[String]| ws.iter().any(|w| !w.is_empty() && p.contains(&w.to_lowercase()));
        let lane = if any(&keywords.left) {
            Lane::Left
        } else if any(&keywords.right) {
            Lane::Right
        } else {
            Lane::Center
        };
        Self {
            lane,
            shot: any(&keywords.shot),
        }
    }
}

/// Tuning constants of the scripted fallback scenario.
///
/// Coordinates are on a 600x400 board attacking the goal at `x = 600`. None of these values are
/// contractual; they only shape the fallback drill.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    /// Frames generated (at least 2).
    pub frame_count: u32,
    /// Milliseconds between frames.
    pub step_ms: TimestampMs,
    /// `y` of both goals; the attack converges on it.
    pub goal_y: f64,
    /// Lateral distance of a wing lane from `goal_y`.
    pub lane_offset: f64,
    /// Home keeper `x`.
    pub home_keeper_x: f64,
    /// Away keeper `x`.
    pub away_keeper_x: f64,
    /// Away defender `x`.
    pub defender_x: f64,
    /// Attacker start `x`.
    pub attacker_start_x: f64,
    /// Ball start offset from the attacker, `(dx, dy)`.
    pub ball_offset: (f64, f64),
    /// Attacker run target `x` without a shot.
    pub run_target_x: f64,
    /// Attacker run target `x` once the shot phase starts.
    pub shot_run_target_x: f64,
    /// Ball target `x` without a shot.
    pub ball_target_x: f64,
    /// Ball target `x` once the shot phase starts.
    pub shot_ball_target_x: f64,
    /// Shot phase covers frames strictly after this index.
    pub shot_after_frame: u32,
    /// Ball snaps onto the goal line for frames strictly after this index.
    pub ball_on_goal_after_frame: u32,
    /// Away keeper dive distance at the end of the move.
    pub keeper_dive_px: f64,
    /// Prompt keywords.
    pub keywords: ScenarioKeywords,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            frame_count: 15,
            step_ms: 300,
            goal_y: 200.0,
            lane_offset: 100.0,
            home_keeper_x: 50.0,
            away_keeper_x: 550.0,
            defender_x: 480.0,
            attacker_start_x: 250.0,
            ball_offset: (10.0, 5.0),
            run_target_x: 450.0,
            shot_run_target_x: 520.0,
            ball_target_x: 460.0,
            shot_ball_target_x: 560.0,
            shot_after_frame: 10,
            ball_on_goal_after_frame: 12,
            keeper_dive_px: 40.0,
            keywords: ScenarioKeywords::default(),
        }
    }
}

impl ScenarioParams {
    /// Reject parameter sets that cannot describe a move.
    pub fn validate(&self) -> BoardResult<()> {
        if self.frame_count < 2 {
            return Err(BoardError::invalid_input(
                "scenario frame_count must be >= 2",
            ));
        }
        let coords = [
            self.goal_y,
            self.lane_offset,
            self.home_keeper_x,
            self.away_keeper_x,
            self.defender_x,
            self.attacker_start_x,
            self.ball_offset.0,
            self.ball_offset.1,
            self.run_target_x,
            self.shot_run_target_x,
            self.ball_target_x,
            self.shot_ball_target_x,
            self.keeper_dive_px,
        ];
        if coords.iter().any(|v| !v.is_finite()) {
            return Err(BoardError::invalid_input(
                "scenario coordinates must be finite",
            ));
        }
        Ok(())
    }
}

/// Deterministic, tag-driven drill generator used when no text-to-tactic model is available.
#[derive(Clone, Debug, Default)]
pub struct ScriptedScenario {
    params: ScenarioParams,
}

impl ScriptedScenario {
    /// Generator with custom tuning.
    pub fn with_params(params: ScenarioParams) -> Self {
        Self { params }
    }

    /// Tuning in use.
    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    /// Build the drill for `prompt`. Never fails.
    pub fn generate(&self, prompt: &str) -> Vec<Frame> {
        let tags = ScenarioTags::parse(prompt, &self.params.keywords);
        info!(lane = ?tags.lane, shot = tags.shot, "building scripted scenario");
        self.generate_tagged(tags)
    }

    /// Build the drill for already-parsed tags.
    pub fn generate_tagged(&self, tags: ScenarioTags) -> Vec<Frame> {
        let p = &self.params;
        let n = p.frame_count.max(2);
        let last = f64::from(n - 1);

        let lane_y = match tags.lane {
            Lane::Left => p.goal_y - p.lane_offset,
            Lane::Center => p.goal_y,
            Lane::Right => p.goal_y + p.lane_offset,
        };
        let dive = match tags.lane {
            Lane::Left => -p.keeper_dive_px,
            Lane::Center | Lane::Right => p.keeper_dive_px,
        };

        let home_keeper = Token::home("h1", p.home_keeper_x, p.goal_y, "GK");
        let attacker = Token::home("h10", p.attacker_start_x, lane_y, "FW");
        let ball = Token::ball(
            "ball",
            p.attacker_start_x + p.ball_offset.0,
            lane_y + p.ball_offset.1,
        );
        let away_keeper = Token::away("a1", p.away_keeper_x, p.goal_y, "GK");
        let defender = Token::away("a3", p.defender_x, p.goal_y, "DF");

        (0..n)
            .map(|i| {
                let t = f64::from(i) / last;
                let shooting = tags.shot && i > p.shot_after_frame;
                let on_goal = tags.shot && i > p.ball_on_goal_after_frame;

                let run_x = if shooting {
                    p.shot_run_target_x
                } else {
                    p.run_target_x
                };
                let mut fw = attacker.clone();
                fw.position.x += (run_x - fw.position.x) * t;
                fw.position.y += (p.goal_y - fw.position.y) * t;

                let ball_x = if shooting {
                    p.shot_ball_target_x
                } else {
                    p.ball_target_x
                };
                let mut b = ball.clone();
                b.position.x += (ball_x - b.position.x) * t;
                b.position.y = if on_goal {
                    p.goal_y
                } else {
                    b.position.y + (p.goal_y - b.position.y) * t
                };

                let mut gk = away_keeper.clone();
                if shooting {
                    gk.position.y += dive * t;
                }

                let tokens = vec![home_keeper.clone(), fw, b, gk, defender.clone()];
                Frame::new(u64::from(i).saturating_mul(p.step_ms), tokens)
            })
            .collect()
    }
}

/// Scripted drill with default tuning. Never fails, for any prompt.
pub fn generate_scripted_scenario(prompt: &str) -> Vec<Frame> {
    ScriptedScenario::default().generate(prompt)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scenario.rs"]
mod tests;
