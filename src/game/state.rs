//! The game state machine: player list, turn rotation, score commitment,
//! completion detection, and winner computation.
//!
//! The core is turn-serialized: exactly one `TurnState` is live at any
//! instant, owned by this struct for the active player. Serializing client
//! actions into "the single rightful actor" is a collaborator concern; the
//! core performs no authorization.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DiceRng, DiceRngState, Player, PlayerId, PlayerMap};
use crate::dice::DiceSet;
use crate::game::error::{GameError, GameResult};
use crate::game::turn::TurnState;
use crate::scoring::{potential_scores, score_category, Category, PotentialScores};

/// Overall game status.
///
/// `Waiting` is the pre-start lobby status a hosting collaborator may hold
/// in a stored snapshot; `Game::start` always produces `Playing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Waiting,
    Playing,
    Finished,
}

/// Final (or current) standings: totals in descending order plus the set
/// of players sharing the maximum total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    totals: Vec<(PlayerId, u32)>,
    winners: SmallVec<[PlayerId; 4]>,
}

impl Standings {
    fn compute(players: &PlayerMap<Player>) -> Self {
        let mut totals: Vec<(PlayerId, u32)> = players
            .iter()
            .map(|(id, player)| (id, player.card().total()))
            .collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let top = totals.first().map_or(0, |&(_, t)| t);
        let winners = totals
            .iter()
            .filter(|&&(_, t)| t == top)
            .map(|&(id, _)| id)
            .collect();

        Self { totals, winners }
    }

    /// Player totals in descending order, ties in turn order.
    #[must_use]
    pub fn totals(&self) -> &[(PlayerId, u32)] {
        &self.totals
    }

    /// Every player achieving the maximum total. Ties produce multiple
    /// winners, not an error.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    /// Whether a player is in the winner set.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }
}

/// Serializable snapshot of a whole game, including the entropy stream
/// position, so a persistence collaborator can store and resume a game
/// mid-turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: PlayerMap<Player>,
    pub active: PlayerId,
    pub status: GameStatus,
    pub turn: TurnState,
    pub rng: DiceRngState,
}

/// A running Maxi Yatzy game.
///
/// Owns the player list, the active player's turn state, and the injected
/// random source. All state lives in this instance; any number of games
/// can run independently in one process.
#[derive(Clone, Debug)]
pub struct Game {
    players: PlayerMap<Player>,
    active: PlayerId,
    status: GameStatus,
    turn: TurnState,
    rng: DiceRng,
}

impl Game {
    /// Minimum seated players.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum seated players (the board's capacity).
    pub const MAX_PLAYERS: usize = 4;

    /// Start a game with the given players in turn order.
    ///
    /// Requires 2-4 names. Every score card starts empty, the first name
    /// becomes the active player, and the game transitions straight to
    /// `Playing`.
    pub fn start(names: &[&str], rng: DiceRng) -> GameResult<Self> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::InvalidPlayerCount { got: names.len() });
        }

        let players = PlayerMap::new(names.len(), |id| Player::new(id, names[id.index()]));

        Ok(Self {
            players,
            active: PlayerId::new(0),
            status: GameStatus::Playing,
            turn: TurnState::new(),
            rng,
        })
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// All seated players in turn order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// A player by identity.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// The active player's turn state.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Roll the active player's dice (first roll or reroll).
    pub fn roll(&mut self) -> GameResult<DiceSet> {
        self.ensure_playing()?;
        self.turn.roll(&mut self.rng)
    }

    /// Flip whether a die position is held for the next reroll.
    pub fn toggle_hold(&mut self, index: usize) -> GameResult<()> {
        self.ensure_playing()?;
        self.turn.toggle_hold(index);
        Ok(())
    }

    /// The full potential-score table for the current dice, `None` before
    /// the first roll of the turn.
    #[must_use]
    pub fn potentials(&self) -> Option<PotentialScores> {
        self.turn.dice().map(|dice| potential_scores(dice))
    }

    /// Commit the current dice into a category for the active player,
    /// ending the turn.
    ///
    /// Legal only with at least one roll taken and the category unset on
    /// the active player's card. Returns the committed score. On success
    /// the next player's turn begins with a fresh turn state, and the game
    /// finishes once every card is complete.
    pub fn select_category(&mut self, category: Category) -> GameResult<u32> {
        self.ensure_playing()?;

        let dice = *self.turn.dice().ok_or(GameError::NoDiceRolled)?;
        if self.active_player().card().is_set(category) {
            return Err(GameError::CategoryAlreadyFilled(category));
        }

        let score = score_category(&dice, category);
        self.commit(category, score)?;
        Ok(score)
    }

    /// Auto-pick policy for turn-timer collaborators: commit the open
    /// category with the highest potential for the current dice, rolling
    /// once first if the turn has no dice yet.
    ///
    /// This is a convenience layered on the legal operations above; it
    /// adds no new transitions.
    pub fn forfeit_turn(&mut self) -> GameResult<(Category, u32)> {
        self.ensure_playing()?;

        let dice = match self.turn.dice() {
            Some(dice) => *dice,
            None => self.turn.roll(&mut self.rng)?,
        };

        let table = potential_scores(&dice);
        let mut best: Option<(Category, u32)> = None;
        for category in self.active_player().card().remaining_categories() {
            let score = table[category];
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((category, score));
            }
        }

        // A seated player always has an open category while Playing.
        let (category, score) = best.ok_or(GameError::GameFinished)?;
        self.commit(category, score)?;
        Ok((category, score))
    }

    /// Totals and winner set for the current cards.
    ///
    /// Meaningful at `Finished`; callable earlier for live scoreboards.
    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings::compute(&self.players)
    }

    /// Capture the whole game, including the entropy stream position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            active: self.active,
            status: self.status,
            turn: self.turn.clone(),
            rng: self.rng.state(),
        }
    }

    /// Resume a game from a snapshot.
    #[must_use]
    pub fn restore(snapshot: GameSnapshot) -> Self {
        Self {
            players: snapshot.players,
            active: snapshot.active,
            status: snapshot.status,
            turn: snapshot.turn,
            rng: DiceRng::from_state(&snapshot.rng),
        }
    }

    /// Write the score, rotate the turn, and re-evaluate completion.
    fn commit(&mut self, category: Category, score: u32) -> GameResult<()> {
        self.players[self.active].card_mut().set(category, score)?;

        let next = (self.active.index() + 1) % self.players.player_count();
        self.active = PlayerId::new(next as u8);
        self.turn = TurnState::new();

        if self.players.iter().all(|(_, p)| p.card().is_complete()) {
            self.status = GameStatus::Finished;
        }
        Ok(())
    }

    fn ensure_playing(&self) -> GameResult<()> {
        match self.status {
            GameStatus::Playing => Ok(()),
            GameStatus::Waiting => Err(GameError::GameNotStarted),
            GameStatus::Finished => Err(GameError::GameFinished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn two_player_game(seed: u64) -> Game {
        Game::start(&["Astrid", "Bjorn"], DiceRng::new(seed)).unwrap()
    }

    #[test]
    fn test_start_player_counts() {
        assert!(Game::start(&["A", "B"], DiceRng::new(1)).is_ok());
        assert!(Game::start(&["A", "B", "C", "D"], DiceRng::new(1)).is_ok());

        assert_eq!(
            Game::start(&["A"], DiceRng::new(1)).unwrap_err(),
            GameError::InvalidPlayerCount { got: 1 }
        );
        assert_eq!(
            Game::start(&["A", "B", "C", "D", "E"], DiceRng::new(1)).unwrap_err(),
            GameError::InvalidPlayerCount { got: 5 }
        );
        assert_eq!(
            Game::start(&[], DiceRng::new(1)).unwrap_err(),
            GameError::InvalidPlayerCount { got: 0 }
        );
    }

    #[test]
    fn test_start_initial_state() {
        let game = two_player_game(42);

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.active_player().id(), PlayerId::new(0));
        assert_eq!(game.active_player().name(), "Astrid");
        assert!(game.turn().dice().is_none());
        assert!(game.potentials().is_none());
        for (_, player) in game.players().iter() {
            assert!(!player.card().is_complete());
        }
    }

    #[test]
    fn test_select_requires_a_roll() {
        let mut game = two_player_game(42);

        assert_eq!(
            game.select_category(Category::Chance),
            Err(GameError::NoDiceRolled)
        );
    }

    #[test]
    fn test_select_rotates_turn() {
        let mut game = two_player_game(42);

        game.roll().unwrap();
        let score = game.select_category(Category::Chance).unwrap();

        assert_eq!(
            game.player(PlayerId::new(0)).card().get(Category::Chance),
            Some(score)
        );
        assert_eq!(game.active_player().id(), PlayerId::new(1));
        assert!(game.turn().dice().is_none());
        assert_eq!(game.turn().rolls_taken(), 0);
    }

    #[test]
    fn test_scenario_e_double_select_rejected() {
        let mut game = two_player_game(42);

        game.roll().unwrap();
        let first = game.select_category(Category::Chance).unwrap();

        // Opponent plays a different category.
        game.roll().unwrap();
        game.select_category(Category::OnePair).unwrap();

        // Back to the first player: Chance is spent.
        game.roll().unwrap();
        assert_eq!(
            game.select_category(Category::Chance),
            Err(GameError::CategoryAlreadyFilled(Category::Chance))
        );
        assert_eq!(
            game.player(PlayerId::new(0)).card().get(Category::Chance),
            Some(first)
        );
    }

    #[test]
    fn test_roll_limit_enforced_per_turn() {
        let mut game = two_player_game(42);

        for _ in 0..3 {
            game.roll().unwrap();
        }
        assert_eq!(game.roll(), Err(GameError::NoRollsRemaining));

        // Selection is still legal, and the next turn rolls afresh.
        game.select_category(Category::Chance).unwrap();
        assert!(game.roll().is_ok());
    }

    #[test]
    fn test_game_runs_to_completion() {
        let mut game = two_player_game(7);
        let mut turns = 0;

        while game.status() == GameStatus::Playing {
            game.roll().unwrap();
            game.forfeit_turn().unwrap();
            turns += 1;
            assert!(turns <= 40, "2-player game must end after 40 turns");
        }

        assert_eq!(turns, 40);
        assert_eq!(game.status(), GameStatus::Finished);
        for (_, player) in game.players().iter() {
            assert!(player.card().is_complete());
        }

        // Every further operation is rejected.
        assert_eq!(game.roll(), Err(GameError::GameFinished));
        assert_eq!(
            game.select_category(Category::Chance),
            Err(GameError::GameFinished)
        );
        assert_eq!(game.toggle_hold(0), Err(GameError::GameFinished));
    }

    #[test]
    fn test_four_player_completion() {
        let mut game = Game::start(&["A", "B", "C", "D"], DiceRng::new(99)).unwrap();
        let mut turns = 0;

        while game.status() == GameStatus::Playing {
            game.forfeit_turn().unwrap();
            turns += 1;
            assert!(turns <= 80);
        }

        assert_eq!(turns, 80);
        let standings = game.standings();
        assert_eq!(standings.totals().len(), 4);
        assert!(!standings.winners().is_empty());
    }

    #[test]
    fn test_forfeit_picks_best_open_category() {
        let mut game = two_player_game(42);

        game.roll().unwrap();
        let table = game.potentials().unwrap();
        let (category, score) = game.forfeit_turn().unwrap();

        assert_eq!(table[category], score);
        for other in Category::iter() {
            assert!(table[other] <= score);
        }
    }

    #[test]
    fn test_standings_tie_produces_two_winners() {
        let mut players = PlayerMap::new(2, |id| Player::new(id, format!("P{}", id.index())));

        // Hand both players identical 180-point cards.
        for id in [PlayerId::new(0), PlayerId::new(1)] {
            let card = players[id].card_mut();
            card.set(Category::Sixes, 36).unwrap();
            card.set(Category::Chance, 36).unwrap();
            card.set(Category::MaxiYatzy, 100).unwrap();
            card.set(Category::OnePair, 8).unwrap();
        }

        let standings = Standings::compute(&players);
        assert_eq!(standings.totals()[0].1, 180);
        assert_eq!(standings.totals()[1].1, 180);
        assert_eq!(standings.winners().len(), 2);
        assert!(standings.is_winner(PlayerId::new(0)));
        assert!(standings.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_standings_orders_descending() {
        let mut players = PlayerMap::new(3, |id| Player::new(id, format!("P{}", id.index())));

        players[PlayerId::new(0)]
            .card_mut()
            .set(Category::Chance, 10)
            .unwrap();
        players[PlayerId::new(1)]
            .card_mut()
            .set(Category::Chance, 30)
            .unwrap();
        players[PlayerId::new(2)]
            .card_mut()
            .set(Category::Chance, 20)
            .unwrap();

        let standings = Standings::compute(&players);
        let order: Vec<_> = standings.totals().iter().map(|&(id, _)| id).collect();
        assert_eq!(
            order,
            vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(0)]
        );
        assert_eq!(standings.winners(), &[PlayerId::new(1)]);
    }

    #[test]
    fn test_winner_total_includes_bonus() {
        let mut players = PlayerMap::new(2, |id| Player::new(id, format!("P{}", id.index())));

        // Player 0: 84 upper points, bonus kicks in.
        let card = players[PlayerId::new(0)].card_mut();
        card.set(Category::Ones, 4).unwrap();
        card.set(Category::Twos, 8).unwrap();
        card.set(Category::Threes, 12).unwrap();
        card.set(Category::Fours, 16).unwrap();
        card.set(Category::Fives, 20).unwrap();
        card.set(Category::Sixes, 24).unwrap();

        // Player 1: more raw points but no bonus.
        let card = players[PlayerId::new(1)].card_mut();
        card.set(Category::Chance, 36).unwrap();
        card.set(Category::MaxiYatzy, 100).unwrap();

        let standings = Standings::compute(&players);
        assert_eq!(standings.totals()[0], (PlayerId::new(0), 184));
        assert_eq!(standings.totals()[1], (PlayerId::new(1), 136));
    }

    #[test]
    fn test_snapshot_restore_resumes_identically() {
        let mut game = two_player_game(42);
        game.roll().unwrap();
        game.toggle_hold(2).unwrap();

        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: GameSnapshot = serde_json::from_str(&json).unwrap();
        let mut resumed = Game::restore(restored);

        // Both games draw the same dice from here on.
        assert_eq!(game.roll().unwrap(), resumed.roll().unwrap());
        assert_eq!(
            game.select_category(Category::Chance).unwrap(),
            resumed.select_category(Category::Chance).unwrap()
        );
        assert_eq!(game.active_player().id(), resumed.active_player().id());
    }

    #[test]
    fn test_committed_scores_never_overwritten() {
        let mut game = two_player_game(5);

        // Drive a full game and record first-committed values.
        let mut committed: Vec<Vec<(Category, u32)>> = vec![Vec::new(); 2];
        while game.status() == GameStatus::Playing {
            let who = game.active_player().id().index();
            let (category, score) = game.forfeit_turn().unwrap();
            committed[who].push((category, score));
        }

        for (who, picks) in committed.iter().enumerate() {
            let card = game.player(PlayerId::new(who as u8)).card();
            for &(category, score) in picks {
                assert_eq!(card.get(category), Some(score));
            }
        }
    }
}
