use highlow::{
    Card, CardGameDelegate, CardGameTracker, HighLow, Rank, RoundOutcome, RoundResult, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmHighLow {
    game: HighLow<'static>,
}

#[wasm_bindgen]
impl WasmHighLow {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: HighLow::new(seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = HighLow::new(seed as u64);
    }

    pub fn cards_remaining(&self) -> u32 {
        self.game.cards_remaining() as u32
    }

    pub fn play(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.play().map_err(js_err)?;
        to_js_value(&JsRound::from(result))
    }
}

#[derive(Serialize)]
struct JsRound {
    player1: JsCard,
    player2: JsCard,
    outcome: &'static str,
    winning_card: JsCard,
    messages: Vec<String>,
}

impl From<RoundResult> for JsRound {
    fn from(result: RoundResult) -> Self {
        let mut tracker = CardGameTracker::new(String::new());
        tracker.game_did_draw(result.player1, result.player2);

        Self {
            player1: card_to_js(result.player1),
            player2: card_to_js(result.player2),
            outcome: outcome_to_str(result.outcome),
            winning_card: card_to_js(result.winning_card()),
            messages: tracker.into_inner().lines().map(String::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    face: bool,
    text: String,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.weight(),
        face: is_face(card.rank),
        text: card.to_string(),
    }
}

fn is_face(rank: Rank) -> bool {
    matches!(rank, Rank::Jack | Rank::Queen | Rank::King)
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Spades => "Spades",
        Suit::Clubs => "Clubs",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Tie => "Tie",
        RoundOutcome::Player1Wins => "Player1Wins",
        RoundOutcome::Player2Wins => "Player2Wins",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
