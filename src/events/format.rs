//! Compact text format for game event serialization
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = timestamp in milliseconds (5 digits, wraps at 99999)
//! - CODE = short event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|MS|single|hard|5|12345678
//! T:00850|SR|P1|13.5|-72.0|0.31
//! T:01020|SV|P2|0
//! T:01900|G|P1|1|0
//! T:09500|ME|3|0|5
//! ```

use super::types::GameEvent;

/// Format a float with fixed precision (1 decimal)
fn fmt_f1(v: f32) -> String {
    format!("{:.1}", v)
}

/// Serialize a GameEvent to compact text format
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", time_ms % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SessionStart {
            session_id,
            timestamp,
        } => {
            format!("{}|{}", session_id, timestamp)
        }
        GameEvent::Config(config) => {
            // Serialize config as compact JSON for easy parsing
            serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
        }
        GameEvent::MatchStart {
            mode,
            difficulty,
            max_shots,
            seed,
        } => {
            format!("{}|{}|{}|{}", mode, difficulty, max_shots, seed)
        }
        GameEvent::MatchEnd {
            score_one,
            score_two,
            shots,
        } => {
            format!("{}|{}|{}", score_one, score_two, shots)
        }
        GameEvent::ShotRelease {
            role,
            power,
            angle,
            spin,
        } => {
            format!("{}|{}|{}|{:.2}", role, fmt_f1(*power), fmt_f1(*angle), spin)
        }
        GameEvent::Save { keeper, hand } => {
            format!("{}|{}", keeper, u8::from(*hand))
        }
        GameEvent::Goal {
            role,
            score_one,
            score_two,
        } => {
            format!("{}|{}|{}", role, score_one, score_two)
        }
        GameEvent::Miss { role } => role.to_string(),
        GameEvent::Dive { keeper, direction } => {
            format!("{}|{}", keeper, direction)
        }
        GameEvent::RoleSwap { kicker } => kicker.to_string(),
    };

    if data.is_empty() {
        format!("{}|{}", ts, code)
    } else {
        format!("{}|{}|{}", ts, code, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::Role;

    #[test]
    fn test_goal_line() {
        let line = serialize_event(
            1900,
            &GameEvent::Goal {
                role: Role::One,
                score_one: 1,
                score_two: 0,
            },
        );
        assert_eq!(line, "T:01900|G|P1|1|0");
    }

    #[test]
    fn test_shot_release_line() {
        let line = serialize_event(
            850,
            &GameEvent::ShotRelease {
                role: Role::Two,
                power: 13.52,
                angle: -72.04,
                spin: 0.314,
            },
        );
        assert_eq!(line, "T:00850|SR|P2|13.5|-72.0|0.31");
    }

    #[test]
    fn test_timestamp_wraps() {
        let line = serialize_event(123_456, &GameEvent::Miss { role: Role::One });
        assert!(line.starts_with("T:23456|M|"));
    }
}
