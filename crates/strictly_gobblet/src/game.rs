//! Turn and selection controller.
//!
//! [`Game`] owns the board and both reserves and is the only thing that
//! mutates them. Input arrives as discrete activations, each resolved to
//! a [`Target`]; every activation runs to completion before the next.

use super::action::{Activation, MoveError, SelectionRefusal, Target};
use super::contracts::{Contract, PlaceContract, SelectContract, assert_invariants};
use super::geometry::{InputMapper, Point};
use super::phases::{GameStatus, Outcome, Phase, Selection};
use super::view::GameView;
use super::{Board, Cell, Location, Piece, PieceId, Player, Reserve};
use tracing::{debug, info, instrument};

/// Stacking tic-tac-toe game engine.
#[derive(Debug)]
pub struct Game {
    board: Board,
    reserves: [Reserve; 2],
    turn: Player,
    phase: Phase,
}

impl Game {
    /// Creates a new game: all twelve pieces in reserve, Player A to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            reserves: [Reserve::new(Player::A), Reserve::new(Player::B)],
            turn: Player::A,
            phase: Phase::Idle,
        }
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the interaction phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current selection, if any.
    pub fn selection(&self) -> Option<Selection> {
        match self.phase {
            Phase::Selected(selection) => Some(selection),
            Phase::Idle | Phase::Finished(_) => None,
        }
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::Idle | Phase::Selected(_) => None,
        }
    }

    /// Returns the overall game status.
    pub fn status(&self) -> GameStatus {
        self.phase.into()
    }

    /// Returns true once the game has a winner or is drawn.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns `player`'s reserve.
    pub fn reserve(&self, player: Player) -> &Reserve {
        &self.reserves[player.index()]
    }

    /// Finds where piece `id` currently lives.
    #[instrument(skip(self))]
    pub fn locate(&self, id: PieceId) -> Option<Location> {
        if let Some(slot) = self.reserve(id.owner()).slot_of(id) {
            return Some(Location::Reserve { slot });
        }
        self.board
            .pieces()
            .find(|(_, piece)| piece.id() == id)
            .map(|(cell, _)| Location::Board(cell))
    }

    /// Returns piece `id`, wherever it is.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        match self.locate(id)? {
            Location::Reserve { slot } => self.reserve(id.owner()).get(slot),
            Location::Board(cell) => self.board.stack(cell).iter().find(|p| p.id() == id),
        }
    }

    /// Checks whether the player to move may pick up piece `id`.
    ///
    /// Returns the piece's location if so.
    pub fn selectable(&self, id: PieceId) -> Result<Location, SelectionRefusal> {
        if id.owner() != self.turn {
            return Err(SelectionRefusal::NotOwned(id.owner()));
        }
        match self.locate(id) {
            Some(location @ Location::Reserve { .. }) => Ok(location),
            Some(location @ Location::Board(cell))
                if self.board.top(cell).is_some_and(|top| top.id() == id) =>
            {
                Ok(location)
            }
            _ => Err(SelectionRefusal::Covered),
        }
    }

    /// Applies one resolved input.
    ///
    /// - A piece target selects it (or switches the selection to it).
    /// - A cell target completes the pending move.
    /// - Anything while finished, or with nothing resolved, is ignored.
    ///
    /// Errors leave the game untouched, except a refused placement, which
    /// also drops the selection; the same player still moves.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn activate(&mut self, target: Target) -> Result<Activation, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        match target {
            Target::None => Err(MoveError::NoTarget),
            Target::Piece(id) => self.select(id),
            Target::Cell(cell) => self.complete(cell),
        }
    }

    /// Resolves a screen point through `mapper`, then activates it.
    #[instrument(skip(self, mapper))]
    pub fn click(&mut self, mapper: &InputMapper, point: Point) -> Result<Activation, MoveError> {
        let target = mapper.resolve(point, self);
        debug!(?target, "Resolved click");
        self.activate(target)
    }

    /// Renderable snapshot of the current state.
    pub fn view(&self) -> GameView {
        GameView::from_game(self)
    }

    fn select(&mut self, id: PieceId) -> Result<Activation, MoveError> {
        let from = SelectContract::pre(self, &id)?;
        self.phase = Phase::Selected(Selection {
            piece: id,
            origin: from,
        });
        debug!(piece = %id, ?from, "Piece selected");
        SelectContract::post(self)?;
        Ok(Activation::Selected { piece: id, from })
    }

    /// Lifts the selected piece, tries the destination, and puts it back
    /// where it came from if the board refuses.
    fn complete(&mut self, to: Cell) -> Result<Activation, MoveError> {
        let selection = PlaceContract::pre(self, &to)?;
        let mover = self.turn;
        self.phase = Phase::Idle;

        let lifted = match selection.origin {
            Location::Reserve { slot } => self.reserves[mover.index()].take(slot),
            Location::Board(from) => self.board.remove(from),
        };
        let piece = match lifted {
            Some(piece) if piece.id() == selection.piece => piece,
            other => {
                if let Some(piece) = other {
                    self.rehome(piece, selection.origin);
                }
                return Err(MoveError::InvariantViolation(format!(
                    "selected piece {} is not at {:?}",
                    selection.piece, selection.origin
                )));
            }
        };

        if let Err(rejected) = self.board.place(piece, to) {
            let blocker = rejected.blocker();
            self.rehome(rejected.into_piece(), selection.origin);
            debug!(piece = %selection.piece, %to, "Placement refused, piece returned");
            assert_invariants(self);
            return Err(match blocker {
                Some(blocker) => MoveError::IllegalPlacement {
                    piece: selection.piece,
                    to,
                    blocker,
                },
                None => MoveError::InvariantViolation(format!("placement at {to} refused without a blocker")),
            });
        }
        PlaceContract::post(self)?;

        if self.board.check_win(mover) {
            info!(player = %mover, %to, "Line completed");
            self.phase = Phase::Finished(Outcome::Winner(mover));
            return Ok(Activation::Won { player: mover, to });
        }
        if self.board.is_full() {
            info!(%to, "Board full without a line");
            self.phase = Phase::Finished(Outcome::Draw);
            return Ok(Activation::Drawn { to });
        }
        self.turn = mover.opponent();
        debug!(piece = %selection.piece, %to, next = %self.turn, "Move complete");
        Ok(Activation::Placed {
            piece: selection.piece,
            from: selection.origin,
            to,
        })
    }

    fn rehome(&mut self, piece: Piece, origin: Location) {
        match origin {
            Location::Reserve { slot } => self.reserves[piece.owner().index()].restore(slot, piece),
            Location::Board(cell) => self.board.restore(piece, cell),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
