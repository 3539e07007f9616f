//! Hand settlement under Kwong-tung scoring.
//!
//! Payments are counted in portions of [`base_amount`] for the winning faan
//! (capped at the faan ceiling), with full responsibility for discards:
//!
//! - **Discard win**: the discarder pays `k` portions, a double portion for
//!   themselves plus a single portion on behalf of each bystander.
//! - **Self-drawn win**: every other seat pays a double portion.
//! - **Liable self-drawn win**: the liable seat pays all `2(k - 1)` portions.
//! - **False win**: the false winner pays a double portion at the faan ceiling
//!   to every other seat.
//!
//! where `k` is the number of seats. Every settlement is zero-sum.

use crate::error::RecordError;
use crate::record::{Outcome, Roster};

/// Faan ceiling used when none is configured.
pub const DEFAULT_MAX_FAAN: u32 = 8;

/// Highest supported faan ceiling; beyond it scores would overflow `i64`.
pub const FAAN_CEILING_LIMIT: u32 = 64;

/// Base amount for a number of faan under one-n-two bucks and half-spicy
/// increase.
///
/// ```text
/// faan    0  1  2  3  4   5   6   7   8   9  10
/// amount  1  2  4  8 16  24  32  48  64  96 128
/// ```
///
/// Doubling up to 4 faan, then midpoint insertions for odd faan.
pub fn base_amount(faan: u32) -> i64 {
    if faan <= 4 {
        1 << faan
    } else if faan % 2 == 1 {
        24 << ((faan - 5) / 2)
    } else {
        32 << ((faan - 6) / 2)
    }
}

/// Shape of a settled hand, with the seats involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    /// Nobody won.
    Draw,

    /// Won off another seat's discard.
    DiscardWin { winner: usize, discarder: usize, faan: u32 },

    /// Won by self-draw, paid by everyone else.
    SelfDraw { winner: usize, faan: u32 },

    /// Won by self-draw, paid in full by the liable seat.
    LiableSelfDraw { winner: usize, liable: usize, faan: u32 },

    /// A seat declared a win wrongly.
    FalseWin { seat: usize },
}

impl HandKind {
    /// Seat that won the hand, if any.
    pub fn winner(&self) -> Option<usize> {
        match *self {
            HandKind::DiscardWin { winner, .. }
            | HandKind::SelfDraw { winner, .. }
            | HandKind::LiableSelfDraw { winner, .. } => Some(winner),
            HandKind::Draw | HandKind::FalseWin { .. } => None,
        }
    }
}

/// Signed score change for every seat of one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    kind: HandKind,
    deltas: Vec<i64>,
}

impl Settlement {
    pub fn kind(&self) -> HandKind {
        self.kind
    }

    /// Per-seat deltas in seat order; positive means the seat gains.
    pub fn deltas(&self) -> &[i64] {
        &self.deltas
    }

    pub fn delta(&self, seat: usize) -> i64 {
        self.deltas.get(seat).copied().unwrap_or(0)
    }

    /// Sum of all deltas; always zero for a settlement built by [`settle`].
    pub fn total(&self) -> i64 {
        self.deltas.iter().sum()
    }
}

/// Seats holding each role in a hand.
#[derive(Default)]
struct Roles {
    wins: Vec<(usize, u32)>,
    discards: Vec<usize>,
    liables: Vec<usize>,
    false_wins: Vec<usize>,
}

impl Roles {
    fn collect(outcomes: &[Outcome]) -> Self {
        let mut roles = Roles::default();
        for (seat, outcome) in outcomes.iter().enumerate() {
            match *outcome {
                Outcome::Win(faan) => roles.wins.push((seat, faan)),
                Outcome::Discard => roles.discards.push(seat),
                Outcome::Liable => roles.liables.push(seat),
                Outcome::FalseWin => roles.false_wins.push(seat),
                Outcome::Bystander => {}
            }
        }
        roles
    }
}

fn invalid(message: &str) -> RecordError {
    RecordError::InvalidHand(message.to_string())
}

/// Works out which kind of hand a set of outcome codes describes.
pub fn classify(outcomes: &[Outcome]) -> std::result::Result<HandKind, RecordError> {
    let roles = Roles::collect(outcomes);

    if roles.wins.len() > 1 {
        return Err(invalid("more than one winner"));
    }
    if roles.discards.len() > 1 {
        return Err(invalid("more than one discarder"));
    }
    if roles.liables.len() > 1 {
        return Err(invalid("more than one liable player"));
    }
    if roles.false_wins.len() > 1 {
        return Err(invalid("more than one false win"));
    }

    let win = roles.wins.first().copied();
    let discard = roles.discards.first().copied();
    let liable = roles.liables.first().copied();
    let false_win = roles.false_wins.first().copied();

    match (win, discard, liable, false_win) {
        (None, None, None, None) => Ok(HandKind::Draw),
        (Some((winner, faan)), Some(discarder), None, None) => Ok(HandKind::DiscardWin {
            winner,
            discarder,
            faan,
        }),
        (Some((winner, faan)), None, None, None) => Ok(HandKind::SelfDraw { winner, faan }),
        (Some((winner, faan)), None, Some(liable), None) => Ok(HandKind::LiableSelfDraw {
            winner,
            liable,
            faan,
        }),
        (None, None, None, Some(seat)) => Ok(HandKind::FalseWin { seat }),
        (Some(_), _, _, Some(_)) => Err(invalid("a win and a false win in the same hand")),
        (_, Some(_), Some(_), _) => Err(invalid("a discarder and a liable player in the same hand")),
        (None, Some(_), _, _) => Err(invalid("a discarder without a winner")),
        (None, _, Some(_), _) => Err(invalid("a liable player without a self-drawn winner")),
    }
}

/// Settles one hand into per-seat deltas.
///
/// Fails if `outcomes` does not have one code per seat, if the codes do not
/// describe a legal hand, or if `max_faan` is outside `1..=64`.
pub fn settle(
    roster: &Roster,
    outcomes: &[Outcome],
    max_faan: u32,
) -> std::result::Result<Settlement, RecordError> {
    if max_faan == 0 || max_faan > FAAN_CEILING_LIMIT {
        return Err(RecordError::InvalidMaxFaan {
            value: max_faan,
            max: FAAN_CEILING_LIMIT,
        });
    }

    let seats = roster.seats();
    if outcomes.len() != seats {
        return Err(RecordError::InvalidHand(format!(
            "{} outcomes given for {} players",
            outcomes.len(),
            seats
        )));
    }

    let kind = classify(outcomes)?;
    let k = seats as i64;
    let portion = |faan: u32| base_amount(faan.min(max_faan));
    let mut deltas = vec![0; seats];

    match kind {
        HandKind::Draw => {}
        HandKind::DiscardWin {
            winner,
            discarder,
            faan,
        } => {
            deltas[winner] = k * portion(faan);
            deltas[discarder] = -k * portion(faan);
        }
        HandKind::SelfDraw { winner, faan } => {
            for (seat, delta) in deltas.iter_mut().enumerate() {
                *delta = if seat == winner {
                    2 * (k - 1) * portion(faan)
                } else {
                    -2 * portion(faan)
                };
            }
        }
        HandKind::LiableSelfDraw {
            winner,
            liable,
            faan,
        } => {
            deltas[winner] = 2 * (k - 1) * portion(faan);
            deltas[liable] = -2 * (k - 1) * portion(faan);
        }
        HandKind::FalseWin { seat: false_seat } => {
            for (seat, delta) in deltas.iter_mut().enumerate() {
                *delta = if seat == false_seat {
                    -2 * (k - 1) * portion(max_faan)
                } else {
                    2 * portion(max_faan)
                };
            }
        }
    }

    debug_assert_eq!(deltas.iter().sum::<i64>(), 0);

    Ok(Settlement { kind, deltas })
}
