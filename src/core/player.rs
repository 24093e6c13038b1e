//! Players, their tokens, and their pieces.
//!
//! ## PlayerId
//!
//! Position of a player in the fixed turn order.
//!
//! ## Player
//!
//! A named participant owning an ordered set of pieces. Single-piece games
//! (snakes and ladders) and four-piece games (Ludo) share this structure:
//! [`Player::move_to`] drives the first on-board piece, [`Player::move_piece`]
//! targets an explicit one.

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, Result};
use super::piece::{PieceId, PlayerPiece};

/// Player identifier: index into the game's turn order.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_boardgame::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Player token color. Unique per player within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Token {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Orange,
}

impl Token {
    /// Every token, in seat order.
    pub const ALL: [Token; 6] = [
        Token::Red,
        Token::Green,
        Token::Yellow,
        Token::Blue,
        Token::Purple,
        Token::Orange,
    ];

    /// Seat on a four-color Ludo board, if this color has one.
    #[must_use]
    pub const fn ludo_seat(self) -> Option<u8> {
        match self {
            Token::Red => Some(0),
            Token::Green => Some(1),
            Token::Yellow => Some(2),
            Token::Blue => Some(3),
            Token::Purple | Token::Orange => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// A participant and their pieces.
///
/// Two players are equal when name and birthdate match. The token is not part
/// of identity: the same cast may pick different colors in a new session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player<T> {
    name: String,
    token: Token,
    birthdate: NaiveDate,
    pieces: SmallVec<[PlayerPiece<T>; 4]>,
}

impl<T: Copy + PartialEq> Player<T> {
    /// Create a player with `piece_count` pieces, all at home.
    pub fn new(
        name: impl Into<String>,
        token: Token,
        birthdate: NaiveDate,
        piece_count: usize,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::BlankName);
        }
        if piece_count == 0 || piece_count > u8::MAX as usize {
            return Err(GameError::NoPieces { name });
        }

        let pieces = (0..piece_count as u8)
            .map(|i| PlayerPiece::new(PieceId::new(i)))
            .collect();

        Ok(Self {
            name,
            token,
            birthdate,
            pieces,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn token(&self) -> Token {
        self.token
    }

    #[must_use]
    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    /// All pieces, in index order.
    #[must_use]
    pub fn pieces(&self) -> &[PlayerPiece<T>] {
        &self.pieces
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Get a piece by index.
    pub fn piece(&self, piece: PieceId) -> Result<&PlayerPiece<T>> {
        self.pieces.get(piece.index()).ok_or(GameError::PieceOutOfRange {
            piece: piece.index(),
            count: self.pieces.len(),
        })
    }

    /// Tile of the first on-board piece, or `None` if all pieces are home.
    #[must_use]
    pub fn current_tile(&self) -> Option<T> {
        self.pieces.iter().find_map(PlayerPiece::tile)
    }

    /// True when no piece stands on the board.
    #[must_use]
    pub fn all_home(&self) -> bool {
        self.pieces.iter().all(PlayerPiece::is_home)
    }

    /// Pieces standing on `tile`.
    pub fn pieces_at(&self, tile: T) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces
            .iter()
            .filter(move |p| p.tile() == Some(tile))
            .map(PlayerPiece::id)
    }

    /// Move the first on-board piece, or piece 0 if every piece is home.
    ///
    /// Returns the piece that moved.
    pub fn move_to(&mut self, tile: Option<T>) -> PieceId {
        let idx = self
            .pieces
            .iter()
            .position(PlayerPiece::is_on_board)
            .unwrap_or(0);
        self.pieces[idx].move_to(tile);
        self.pieces[idx].id()
    }

    /// Move an explicit piece.
    pub fn move_piece(&mut self, piece: PieceId, tile: Option<T>) -> Result<()> {
        let count = self.pieces.len();
        let target = self
            .pieces
            .get_mut(piece.index())
            .ok_or(GameError::PieceOutOfRange {
                piece: piece.index(),
                count,
            })?;
        target.move_to(tile);
        Ok(())
    }

    /// Place every piece on `tile` (or home for `None`).
    pub fn place_all(&mut self, tile: Option<T>) {
        for piece in &mut self.pieces {
            piece.move_to(tile);
        }
    }

    /// Send every piece home.
    pub fn send_home(&mut self) {
        self.place_all(None);
    }
}

impl<T> PartialEq for Player<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.birthdate == other.birthdate
    }
}

impl<T> Eq for Player<T> {}

impl<T> Hash for Player<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.birthdate.hash(state);
    }
}

impl<T> std::fmt::Display for Player<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}

/// Roster entry as supplied by the storage layer.
///
/// Fields are optional because the source record may be incomplete;
/// [`PlayerSpec::into_player`] rejects missing values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    #[serde(default)]
    pub token: Option<Token>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
}

impl PlayerSpec {
    /// Create a complete roster entry.
    pub fn new(name: impl Into<String>, token: Token, birthdate: NaiveDate) -> Self {
        Self {
            name: name.into(),
            token: Some(token),
            birthdate: Some(birthdate),
        }
    }

    /// Validate and build a player owning `piece_count` pieces.
    pub fn into_player<T: Copy + PartialEq>(self, piece_count: usize) -> Result<Player<T>> {
        if self.name.trim().is_empty() {
            return Err(GameError::BlankName);
        }
        let token = self
            .token
            .ok_or_else(|| GameError::MissingToken { name: self.name.clone() })?;
        let birthdate = self
            .birthdate
            .ok_or_else(|| GameError::MissingBirthdate { name: self.name.clone() })?;
        Player::new(self.name, token, birthdate, piece_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alice(pieces: usize) -> Player<u32> {
        Player::new("Alice", Token::Red, date(1990, 4, 12), pieces).unwrap()
    }

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
        assert_eq!(PlayerId::all(3).count(), 3);
    }

    #[test]
    fn test_new_player_all_home() {
        let player = alice(4);
        assert_eq!(player.piece_count(), 4);
        assert!(player.all_home());
        assert_eq!(player.current_tile(), None);
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Player::<u32>::new("   ", Token::Red, date(2000, 1, 1), 1).unwrap_err();
        assert_eq!(err, GameError::BlankName);
    }

    #[test]
    fn test_zero_pieces_rejected() {
        let err = Player::<u32>::new("Bob", Token::Red, date(2000, 1, 1), 0).unwrap_err();
        assert!(matches!(err, GameError::NoPieces { .. }));
    }

    #[test]
    fn test_move_to_targets_first_on_board_piece() {
        let mut player = alice(4);

        // All home: piece 0 moves
        assert_eq!(player.move_to(Some(5)), PieceId::new(0));
        assert_eq!(player.current_tile(), Some(5));

        // Piece 2 on board, piece 0 sent home: piece 2 is now first on board
        player.move_piece(PieceId::new(2), Some(9)).unwrap();
        player.move_piece(PieceId::new(0), None).unwrap();
        assert_eq!(player.move_to(Some(11)), PieceId::new(2));
        assert_eq!(player.piece(PieceId::new(2)).unwrap().tile(), Some(11));
        assert_eq!(player.current_tile(), Some(11));
    }

    #[test]
    fn test_move_piece_out_of_range() {
        let mut player = alice(4);
        let err = player.move_piece(PieceId::new(4), Some(1)).unwrap_err();
        assert_eq!(err, GameError::PieceOutOfRange { piece: 4, count: 4 });
        assert!(player.piece(PieceId::new(7)).is_err());
    }

    #[test]
    fn test_pieces_at() {
        let mut player = alice(4);
        player.move_piece(PieceId::new(1), Some(3)).unwrap();
        player.move_piece(PieceId::new(3), Some(3)).unwrap();

        let at: Vec<_> = player.pieces_at(3).collect();
        assert_eq!(at, vec![PieceId::new(1), PieceId::new(3)]);
    }

    #[test]
    fn test_equality_ignores_token() {
        let a = alice(1);
        let mut b: Player<u32> = Player::new("Alice", Token::Blue, date(1990, 4, 12), 1).unwrap();
        b.move_to(Some(40));
        assert_eq!(a, b);

        let c: Player<u32> = Player::new("Alice", Token::Red, date(1991, 4, 12), 1).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_spec_validation() {
        let missing_token = PlayerSpec {
            name: "Carol".into(),
            token: None,
            birthdate: Some(date(1985, 2, 3)),
        };
        assert!(matches!(
            missing_token.into_player::<u32>(1),
            Err(GameError::MissingToken { .. })
        ));

        let missing_date = PlayerSpec {
            name: "Carol".into(),
            token: Some(Token::Green),
            birthdate: None,
        };
        assert!(matches!(
            missing_date.into_player::<u32>(1),
            Err(GameError::MissingBirthdate { .. })
        ));

        let ok = PlayerSpec::new("Carol", Token::Green, date(1985, 2, 3));
        let player = ok.into_player::<u32>(4).unwrap();
        assert_eq!(player.token(), Token::Green);
        assert_eq!(player.piece_count(), 4);
    }

    #[test]
    fn test_ludo_seats() {
        let seats: Vec<_> = Token::ALL.iter().filter_map(|t| t.ludo_seat()).collect();
        assert_eq!(seats, vec![0, 1, 2, 3]);
        assert_eq!(Token::Purple.ludo_seat(), None);
    }

    #[test]
    fn test_spec_serde() {
        let json = r#"{"name":"Dan","token":"Yellow","birthdate":"2001-09-30"}"#;
        let spec: PlayerSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, PlayerSpec::new("Dan", Token::Yellow, date(2001, 9, 30)));

        let partial: PlayerSpec = serde_json::from_str(r#"{"name":"Eve"}"#).unwrap();
        assert_eq!(partial.token, None);
        assert_eq!(partial.birthdate, None);
    }
}
