//! Data structures shared between the quiz client and the game server.
//!
//! Wire format: every frame is a JSON envelope `{"event": ..., "data": ...}`
//! (events without a payload omit `"data"`). Field and event names are
//! kebab-case on the wire.

use serde::{Deserialize, Serialize};

use crate::id::PlayerId;

/// Outcome marker carried by every acknowledgement.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Success,
    Error,
}

/// A server acknowledgement for a client request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub status: AckStatus,
    pub reason: String,
}

impl Ack {
    pub fn is_success(&self) -> bool {
        self.status == AckStatus::Success
    }
}

/// One of the four answer slots, or `Skip` (wire `"X"`) when the timer ran
/// out before the player picked one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerChoice {
    A,
    B,
    C,
    D,
    #[serde(rename = "X")]
    Skip,
}

impl AnswerChoice {
    /// All choices, in tally-slot order.
    pub const ALL: [AnswerChoice; 5] = [
        AnswerChoice::A,
        AnswerChoice::B,
        AnswerChoice::C,
        AnswerChoice::D,
        AnswerChoice::Skip,
    ];

    /// Slot of this choice in an [`AnswerTally`] array.
    pub fn index(self) -> usize {
        match self {
            AnswerChoice::A => 0,
            AnswerChoice::B => 1,
            AnswerChoice::C => 2,
            AnswerChoice::D => 3,
            AnswerChoice::Skip => 4,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            AnswerChoice::A => "A",
            AnswerChoice::B => "B",
            AnswerChoice::C => "C",
            AnswerChoice::D => "D",
            AnswerChoice::Skip => "X",
        }
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "A" => Some(AnswerChoice::A),
            "B" => Some(AnswerChoice::B),
            "C" => Some(AnswerChoice::C),
            "D" => Some(AnswerChoice::D),
            "X" => Some(AnswerChoice::Skip),
            _ => None,
        }
    }
}

/// A player as the server reports it to every screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub points: i32,
    pub past_points: i32,
    pub answer: Option<AnswerChoice>,
    pub hearts: u32,
}

/// Room-wide game settings. Fields the admin has not set yet are `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSettings {
    pub lives: Option<u32>,
    pub timer: Option<u32>,
}

/// Snapshot sent to a player entering the waiting room.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    pub players: Vec<Player>,
    pub settings: GameSettings,
    pub question: u32,
}

/// Per-player snapshot: total hearts, hearts left, round timer, question.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInfo {
    pub hearts: u32,
    pub left: u32,
    pub timer: Option<u32>,
    pub question: u32,
}

/// Per-choice answer counts for the current question, split by whether the
/// answering player still has hearts. Slots follow [`AnswerChoice::index`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerTally {
    pub players: u32,
    pub alive: [u32; 5],
    pub dead: [u32; 5],
}

impl AnswerTally {
    pub fn alive_for(&self, choice: AnswerChoice) -> u32 {
        self.alive[choice.index()]
    }

    pub fn dead_for(&self, choice: AnswerChoice) -> u32 {
        self.dead[choice.index()]
    }

    /// How many players have answered the current question so far.
    pub fn answered(&self) -> u32 {
        self.alive.iter().chain(self.dead.iter()).sum()
    }
}

/// What a player learns right after answering.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub answer: Option<AnswerChoice>,
    pub hearts: u32,
    pub left: u32,
}

/// Events the client emits to the game server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    CreateRoom { lives: u32 },
    JoinRoom { username: String },
    GetGameInfo,
    LockRoom,
    GetPlayerInfo,
    SetQuestionSettings { timer: u32, answer: AnswerChoice },
    UserAnswer { answer: AnswerChoice },
    NextQuestion,
    Invalidate,
    EndGame,
    GetPlayers,
    ShowLeaderboard,
    GetAnswers,
}

/// Events the game server pushes to the client. Acks reuse the name of the
/// request they answer, matching the server's event vocabulary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    #[serde(rename = "create-room")]
    CreateRoomAck(Ack),
    #[serde(rename = "join-room")]
    JoinRoomAck(Ack),
    UserJoined {
        players: Vec<Player>,
    },
    #[serde(rename = "get-game-info")]
    GameInfo(GameInfo),
    #[serde(rename = "lock-room-response")]
    LockRoomAck,
    BeReady {
        question: u32,
    },
    #[serde(rename = "get-player-info")]
    PlayerInfo(PlayerInfo),
    #[serde(rename = "set-question-settings-response")]
    QuestionSettingsAck(Ack),
    QuestionStart {
        timer: u32,
    },
    UpdateAnswers(AnswerTally),
    Answers(AnswerTally),
    #[serde(rename = "user-answer")]
    UserAnswer(AnswerOutcome),
    NextQuestion,
    Invalidate,
    #[serde(rename = "end-game-response")]
    EndGame,
    #[serde(rename = "get-players-response")]
    PlayersList {
        players: Vec<Player>,
    },
    ShowLeaderboard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(name: &str) -> Player {
        Player {
            id: PlayerId::from_string("sid-1".to_string()),
            name: name.to_string(),
            points: 3,
            past_points: 1,
            answer: Some(AnswerChoice::B),
            hearts: 2,
        }
    }

    #[test]
    fn client_event_wire_shape() {
        let joined = serde_json::to_value(ClientEvent::JoinRoom {
            username: "ada".to_string(),
        })
        .unwrap();
        assert_eq!(
            joined,
            json!({"event": "join-room", "data": {"username": "ada"}})
        );

        let settings = serde_json::to_value(ClientEvent::SetQuestionSettings {
            timer: 30,
            answer: AnswerChoice::C,
        })
        .unwrap();
        assert_eq!(
            settings,
            json!({"event": "set-question-settings", "data": {"timer": 30, "answer": "C"}})
        );
    }

    #[test]
    fn payloadless_events_omit_data() {
        let locked = serde_json::to_value(ClientEvent::LockRoom).unwrap();
        assert_eq!(locked, json!({"event": "lock-room"}));

        let parsed: ServerEvent = serde_json::from_str(r#"{"event": "next-question"}"#).unwrap();
        assert_eq!(parsed, ServerEvent::NextQuestion);
    }

    #[test]
    fn acks_reuse_request_event_names() {
        let ack = ServerEvent::CreateRoomAck(Ack {
            status: AckStatus::Error,
            reason: "Room is already taken".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({
                "event": "create-room",
                "data": {"status": "error", "reason": "Room is already taken"}
            })
        );

        let parsed: ServerEvent = serde_json::from_str(
            r#"{"event": "lock-room-response"}"#,
        )
        .unwrap();
        assert_eq!(parsed, ServerEvent::LockRoomAck);
    }

    #[test]
    fn player_fields_are_kebab_case() {
        let value = serde_json::to_value(player("ada")).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "sid-1",
                "name": "ada",
                "points": 3,
                "past-points": 1,
                "answer": "B",
                "hearts": 2
            })
        );
    }

    #[test]
    fn skip_serializes_as_x() {
        let value = serde_json::to_value(ClientEvent::UserAnswer {
            answer: AnswerChoice::Skip,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"event": "user-answer", "data": {"answer": "X"}})
        );
    }

    #[test]
    fn answer_choice_letters_round_trip() {
        for choice in AnswerChoice::ALL {
            assert_eq!(AnswerChoice::from_letter(choice.letter()), Some(choice));
        }
        assert_eq!(AnswerChoice::from_letter("E"), None);
    }

    #[test]
    fn tally_slots_follow_choice_index() {
        let tally = AnswerTally {
            players: 6,
            alive: [3, 1, 0, 0, 1],
            dead: [0, 0, 1, 0, 0],
        };

        assert_eq!(tally.alive_for(AnswerChoice::A), 3);
        assert_eq!(tally.dead_for(AnswerChoice::C), 1);
        assert_eq!(tally.alive_for(AnswerChoice::Skip), 1);
        assert_eq!(tally.answered(), 6);
    }

    #[test]
    fn server_events_round_trip() {
        let events = vec![
            ServerEvent::UserJoined {
                players: vec![player("ada"), player("lin")],
            },
            ServerEvent::GameInfo(GameInfo {
                players: vec![player("ada")],
                settings: GameSettings {
                    lives: Some(3),
                    timer: Some(20),
                },
                question: 2,
            }),
            ServerEvent::PlayerInfo(PlayerInfo {
                hearts: 3,
                left: 1,
                timer: Some(20),
                question: 2,
            }),
            ServerEvent::QuestionStart { timer: 20 },
            ServerEvent::UpdateAnswers(AnswerTally {
                players: 4,
                alive: [1, 2, 0, 0, 0],
                dead: [0, 0, 0, 1, 0],
            }),
            ServerEvent::UserAnswer(AnswerOutcome {
                correct: true,
                answer: Some(AnswerChoice::B),
                hearts: 3,
                left: 3,
            }),
            ServerEvent::ShowLeaderboard,
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let parsed: ServerEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, event, "{json}");
        }
    }
}
