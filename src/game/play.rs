//! Move tokens and play-log parsing.
//!
//! A log is a sequence of seven-character plays separated by single spaces,
//! oldest first:
//!
//! ```text
//! GST.... SAO.... HZU.... MBB.... DC?.V..
//! ```
//!
//! Character 0 is the player tag, 1-2 the location code, and 3-6 the
//! encounters (hunters) or actions (Dracula). `.` fills unused positions.
//!
//! The parser is lenient about separators: any run of whitespace, including
//! tabs and newlines, splits plays, and leading or trailing whitespace is
//! ignored. A log wrapped over several lines therefore parses the same as
//! its single-line form. Group numbers in errors count plays, not characters.

use serde::Serialize;

use crate::error::ParseError;
use crate::game::Player;
use crate::map::{Map, PlaceId};

/// Width of one play in characters.
pub const PLAY_WIDTH: usize = 7;

/// Largest double-back offset.
pub const MAX_DOUBLE_BACK: u8 = 5;

const DOUBLE_BACK_CODES: [&str; MAX_DOUBLE_BACK as usize] = ["D1", "D2", "D3", "D4", "D5"];

/// A move token as it appears in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    /// A real place.
    Place(PlaceId),
    /// Dracula moved to an undisclosed city (`C?`).
    CityUnknown,
    /// Dracula moved to an undisclosed sea (`S?`).
    SeaUnknown,
    /// Dracula stays where he was last turn (`HI`).
    Hide,
    /// Dracula returns to where he was `k` moves ago (`D1`..`D5`).
    DoubleBack(u8),
    /// Dracula teleports to his castle (`TP`).
    Teleport,
}

impl Move {
    /// Log code of this move.
    #[must_use]
    pub fn code(self, map: &Map) -> &str {
        match self {
            Move::Place(id) => map.abbrev(id),
            Move::CityUnknown => "C?",
            Move::SeaUnknown => "S?",
            Move::Hide => "HI",
            Move::Teleport => "TP",
            Move::DoubleBack(k) => usize::from(k)
                .checked_sub(1)
                .and_then(|i| DOUBLE_BACK_CODES.get(i))
                .copied()
                .unwrap_or("D?"),
        }
    }

    /// Parse a location code. Hunters may only name real places.
    #[must_use]
    pub fn parse(code: &str, player: Player, map: &Map) -> Option<Self> {
        if let Some(id) = map.find(code) {
            return Some(Move::Place(id));
        }
        if player.is_hunter() {
            return None;
        }
        match code {
            "C?" => Some(Move::CityUnknown),
            "S?" => Some(Move::SeaUnknown),
            "HI" => Some(Move::Hide),
            "TP" => Some(Move::Teleport),
            _ => {
                #[allow(clippy::cast_possible_truncation)]
                DOUBLE_BACK_CODES
                    .iter()
                    .position(|&c| c == code)
                    .map(|i| Move::DoubleBack(i as u8 + 1))
            }
        }
    }

    /// Check if this move is a hide.
    #[must_use]
    pub const fn is_hide(self) -> bool {
        matches!(self, Move::Hide)
    }

    /// Check if this move is a double-back.
    #[must_use]
    pub const fn is_double_back(self) -> bool {
        matches!(self, Move::DoubleBack(_))
    }
}

/// Something a hunter ran into on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HunterEncounter {
    /// Triggered a trap (`T`).
    Trap,
    /// Found and destroyed the immature vampire (`V`).
    ImmatureVampire,
    /// Confronted Dracula (`D`).
    Dracula,
}

/// Something that expired at the end of Dracula's trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Expiry {
    /// The trap whose location left the trail is removed (`M`).
    TrapMalfunction,
    /// The immature vampire matured (`V`).
    VampireMatured,
}

/// What Dracula did on his turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DraculaAction {
    /// Placed a trap at his new location.
    pub placed_trap: bool,
    /// Placed an immature vampire at his new location.
    pub placed_vampire: bool,
    /// Whatever left the end of his trail.
    pub expiry: Option<Expiry>,
}

/// Action half of a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Encounters of a hunter, in the order they happened.
    Hunter(Vec<HunterEncounter>),
    /// Dracula's placements and expiry.
    Dracula(DraculaAction),
}

/// One player's turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Play {
    /// Who moved.
    pub player: Player,
    /// Where to, as written in the log.
    pub mv: Move,
    /// What happened there.
    pub action: Action,
}

impl Play {
    /// Render this play back into its seven-character log form.
    #[must_use]
    pub fn to_log(&self, map: &Map) -> String {
        let mut out = String::with_capacity(PLAY_WIDTH);
        out.push(self.player.tag());
        out.push_str(self.mv.code(map));
        match &self.action {
            Action::Hunter(encounters) => {
                for encounter in encounters {
                    out.push(match encounter {
                        HunterEncounter::Trap => 'T',
                        HunterEncounter::ImmatureVampire => 'V',
                        HunterEncounter::Dracula => 'D',
                    });
                }
            }
            Action::Dracula(action) => {
                out.push(if action.placed_trap { 'T' } else { '.' });
                out.push(if action.placed_vampire { 'V' } else { '.' });
                out.push(match action.expiry {
                    Some(Expiry::TrapMalfunction) => 'M',
                    Some(Expiry::VampireMatured) => 'V',
                    None => '.',
                });
            }
        }
        while out.chars().count() < PLAY_WIDTH {
            out.push('.');
        }
        out
    }
}

/// Parse a whole log into plays.
///
/// Plays may be separated by any whitespace; see the module docs.
///
/// # Errors
///
/// Returns the first malformed play found.
pub fn parse_plays(log: &str, map: &Map) -> Result<Vec<Play>, ParseError> {
    log.split_whitespace()
        .enumerate()
        .map(|(group, text)| parse_play(group, text, map))
        .collect()
}

fn parse_play(group: usize, text: &str, map: &Map) -> Result<Play, ParseError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != PLAY_WIDTH {
        return Err(ParseError::BadWidth {
            group,
            width: chars.len(),
        });
    }

    let player = Player::from_tag(chars[0]).ok_or(ParseError::UnknownPlayer {
        group,
        tag: chars[0],
    })?;

    let code: String = chars[1..3].iter().collect();
    let Some(mv) = Move::parse(&code, player, map) else {
        return Err(ParseError::UnknownLocation { group, code });
    };

    let bad = |position: usize| ParseError::BadEncounter {
        group,
        position,
        found: chars[position],
    };

    let action = if player.is_dracula() {
        let placed_trap = match chars[3] {
            'T' => true,
            '.' => false,
            _ => return Err(bad(3)),
        };
        let placed_vampire = match chars[4] {
            'V' => true,
            '.' => false,
            _ => return Err(bad(4)),
        };
        let expiry = match chars[5] {
            'M' => Some(Expiry::TrapMalfunction),
            'V' => Some(Expiry::VampireMatured),
            '.' => None,
            _ => return Err(bad(5)),
        };
        if chars[6] != '.' {
            return Err(bad(6));
        }
        Action::Dracula(DraculaAction {
            placed_trap,
            placed_vampire,
            expiry,
        })
    } else {
        let mut encounters = Vec::new();
        for (position, &c) in chars.iter().enumerate().skip(3) {
            match c {
                'T' => encounters.push(HunterEncounter::Trap),
                'V' => encounters.push(HunterEncounter::ImmatureVampire),
                'D' => encounters.push(HunterEncounter::Dracula),
                '.' => {}
                _ => return Err(bad(position)),
            }
        }
        Action::Hunter(encounters)
    };

    Ok(Play { player, mv, action })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let map = Map::europe();
        assert!(parse_plays("", &map).unwrap().is_empty());
        assert!(parse_plays("   ", &map).unwrap().is_empty());
    }

    #[test]
    fn test_parse_hunter_play() {
        let map = Map::europe();
        let plays = parse_plays("GSTTV.D", &map).unwrap();
        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0].player, Player::Godalming);
        assert_eq!(plays[0].mv, Move::Place(map.find("ST").unwrap()));
        assert_eq!(
            plays[0].action,
            Action::Hunter(vec![
                HunterEncounter::Trap,
                HunterEncounter::ImmatureVampire,
                HunterEncounter::Dracula
            ])
        );
    }

    #[test]
    fn test_parse_dracula_plays() {
        let map = Map::europe();
        let plays = parse_plays("DC?T... DD3.VM. DHI..V. DTP....", &map).unwrap();
        assert_eq!(plays[0].mv, Move::CityUnknown);
        assert_eq!(
            plays[0].action,
            Action::Dracula(DraculaAction {
                placed_trap: true,
                ..DraculaAction::default()
            })
        );
        assert_eq!(plays[1].mv, Move::DoubleBack(3));
        assert_eq!(
            plays[1].action,
            Action::Dracula(DraculaAction {
                placed_trap: false,
                placed_vampire: true,
                expiry: Some(Expiry::TrapMalfunction),
            })
        );
        assert_eq!(plays[2].mv, Move::Hide);
        assert_eq!(plays[3].mv, Move::Teleport);
    }

    #[test]
    fn test_trailing_space_ignored() {
        let map = Map::europe();
        assert_eq!(parse_plays("GST.... SAO.... ", &map).unwrap().len(), 2);
    }

    #[test]
    fn test_any_whitespace_separates_plays() {
        let map = Map::europe();
        let canonical = parse_plays("GST.... SAO.... HZU....", &map).unwrap();
        let wrapped = parse_plays("GST....\tSAO....  \n HZU....\n", &map).unwrap();
        assert_eq!(wrapped, canonical);

        let err = parse_plays("GST....\n\nSAO\tHZU....", &map).unwrap_err();
        assert_eq!(err, ParseError::BadWidth { group: 1, width: 3 });
    }

    #[test]
    fn test_bad_width() {
        let map = Map::europe();
        assert_eq!(
            parse_plays("GST.... SAO...", &map),
            Err(ParseError::BadWidth { group: 1, width: 6 })
        );
    }

    #[test]
    fn test_unknown_player() {
        let map = Map::europe();
        assert_eq!(
            parse_plays("XST....", &map),
            Err(ParseError::UnknownPlayer { group: 0, tag: 'X' })
        );
    }

    #[test]
    fn test_hunters_cannot_use_dracula_codes() {
        let map = Map::europe();
        assert_eq!(
            parse_plays("GC?....", &map),
            Err(ParseError::UnknownLocation {
                group: 0,
                code: "C?".to_string()
            })
        );
        assert!(parse_plays("DD6....", &map).is_err());
        assert!(parse_plays("DXX....", &map).is_err());
    }

    #[test]
    fn test_bad_encounter_positions() {
        let map = Map::europe();
        assert_eq!(
            parse_plays("GST.M..", &map),
            Err(ParseError::BadEncounter {
                group: 0,
                position: 4,
                found: 'M'
            })
        );
        assert!(parse_plays("DSTV...", &map).is_err());
        assert!(parse_plays("DST...V", &map).is_err());
        assert!(parse_plays("DST..T.", &map).is_err());
    }

    #[test]
    fn test_to_log_matches_input() {
        let map = Map::europe();
        let log = "GSTT... SAO.... DD2TVM. DS?..V.";
        let plays = parse_plays(log, &map).unwrap();
        let rendered: Vec<String> = plays.iter().map(|p| p.to_log(&map)).collect();
        assert_eq!(rendered.join(" "), log);
    }

    #[test]
    fn test_move_codes() {
        let map = Map::europe();
        assert_eq!(Move::DoubleBack(1).code(&map), "D1");
        assert_eq!(Move::DoubleBack(5).code(&map), "D5");
        assert_eq!(Move::Hide.code(&map), "HI");
        assert_eq!(Move::parse("D4", Player::Dracula, &map), Some(Move::DoubleBack(4)));
        assert_eq!(Move::parse("D4", Player::Mina, &map), None);
    }
}
