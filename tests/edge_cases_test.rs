//! Edge case tests for settlement and aggregation.
//!
//! Exercises every legal hand shape at both table sizes, plus the ways a
//! ledger can be rejected.

use mahjong_ledger::{
    base_amount, settle, Aggregator, DateStamp, DateWindow, Hand, LedgerError, Outcome,
    RecordError, Roster, Scorebook,
};
use std::io::Cursor;

fn roster(seats: usize) -> Roster {
    Roster::new(["w", "x", "y", "z"].into_iter().take(seats)).unwrap()
}

/// Every legal outcome line for a table of `seats`, with the given faan.
fn legal_hands(seats: usize, faan: u32) -> Vec<Vec<Outcome>> {
    let mut hands = vec![vec![Outcome::Bystander; seats]];

    for a in 0..seats {
        let mut false_win = vec![Outcome::Bystander; seats];
        false_win[a] = Outcome::FalseWin;
        hands.push(false_win);

        let mut self_draw = vec![Outcome::Bystander; seats];
        self_draw[a] = Outcome::Win(faan);
        hands.push(self_draw);

        for b in (0..seats).filter(|&b| b != a) {
            let mut discard = vec![Outcome::Bystander; seats];
            discard[a] = Outcome::Win(faan);
            discard[b] = Outcome::Discard;
            hands.push(discard);

            let mut liable = vec![Outcome::Bystander; seats];
            liable[a] = Outcome::Win(faan);
            liable[b] = Outcome::Liable;
            hands.push(liable);
        }
    }

    hands
}

fn run_ledger(text: &str) -> Result<Scorebook, LedgerError> {
    let mut book = Scorebook::new(8, DateWindow::default())?;
    book.process_ledger(Cursor::new(text))?;
    Ok(book)
}

// ==================== SETTLEMENT PROPERTIES ====================

#[test]
fn test_every_legal_hand_is_zero_sum() {
    for seats in [3, 4] {
        for max_faan in [1, 3, 8, 13, 64] {
            for faan in [0, 1, 5, 8, 9, 20, u32::MAX] {
                for outcomes in legal_hands(seats, faan) {
                    let s = settle(&roster(seats), &outcomes, max_faan).unwrap();
                    assert_eq!(s.total(), 0, "{:?} at max {}", outcomes, max_faan);
                    assert_eq!(s.deltas().len(), seats);
                }
            }
        }
    }
}

#[test]
fn test_winner_never_loses() {
    for seats in [3, 4] {
        for outcomes in legal_hands(seats, 6) {
            let s = settle(&roster(seats), &outcomes, 8).unwrap();
            if let Some(winner) = s.kind().winner() {
                assert!(s.delta(winner) > 0);
                assert!(outcomes[winner].is_win());
            }
        }
    }
}

#[test]
fn test_faan_is_monotone_and_saturates() {
    let max_faan = 8;
    let mut previous = 0;
    for faan in 0..=20 {
        let outcomes = [
            Outcome::Win(faan),
            Outcome::Bystander,
            Outcome::Bystander,
            Outcome::Bystander,
        ];
        let gain = settle(&roster(4), &outcomes, max_faan).unwrap().delta(0);
        assert!(gain >= previous, "faan {} paid less than the faan before it", faan);
        if faan >= max_faan {
            assert_eq!(gain, 6 * base_amount(max_faan));
        }
        previous = gain;
    }
}

#[test]
fn test_base_amount_strictly_increases() {
    for faan in 0..64 {
        assert!(base_amount(faan + 1) > base_amount(faan));
    }
}

#[test]
fn test_liable_seat_absorbs_every_share() {
    let plain = settle(
        &roster(4),
        &[Outcome::Win(5), Outcome::Bystander, Outcome::Bystander, Outcome::Bystander],
        8,
    )
    .unwrap();
    let liable = settle(
        &roster(4),
        &[Outcome::Win(5), Outcome::Liable, Outcome::Bystander, Outcome::Bystander],
        8,
    )
    .unwrap();

    assert_eq!(plain.delta(0), liable.delta(0));
    assert_eq!(liable.delta(1), plain.delta(1) * 3);
    assert_eq!(liable.delta(2), 0);
    assert_eq!(liable.delta(3), 0);
}

#[test]
fn test_false_win_charged_at_ceiling() {
    let low = settle(&roster(3), &[Outcome::FalseWin, Outcome::Bystander, Outcome::Bystander], 3)
        .unwrap();
    let high = settle(&roster(3), &[Outcome::FalseWin, Outcome::Bystander, Outcome::Bystander], 9)
        .unwrap();

    assert_eq!(low.deltas(), &[-32, 16, 16]);
    assert_eq!(high.deltas(), &[-384, 192, 192]);
}

// ==================== AGGREGATION ====================

#[test]
fn test_draw_neutrality() {
    let hand = Hand::new(
        Some(DateStamp::new(20200101)),
        roster(4),
        vec![Outcome::Bystander; 4],
    )
    .unwrap();
    let settlement = hand.settle(8).unwrap();

    let mut aggregator = Aggregator::default();
    aggregator.ingest(&hand, &settlement);

    for name in ["w", "x", "y", "z"] {
        let record = aggregator.player(name).unwrap();
        assert_eq!(record.games_played, 1);
        assert_eq!(record.games_won, 0);
        assert_eq!(record.net_score, 0);
    }
}

#[test]
fn test_window_exclusion_leaves_ledger_untouched() {
    let mut aggregator = Aggregator::new(DateStamp::new(20200101), DateStamp::new(20201231));
    let inside = Hand::new(
        Some(DateStamp::new(20200615)),
        roster(3),
        vec![Outcome::Win(2), Outcome::Discard, Outcome::Bystander],
    )
    .unwrap();
    aggregator.ingest(&inside, &inside.settle(8).unwrap());
    let before = aggregator.snapshot();

    for date in [20191231, 20210101, 0, 99_999_999] {
        let outside = Hand::new(
            Some(DateStamp::new(date)),
            roster(3),
            vec![Outcome::Bystander, Outcome::Win(8), Outcome::Bystander],
        )
        .unwrap();
        assert!(!aggregator.ingest(&outside, &outside.settle(8).unwrap()));
    }

    assert_eq!(aggregator.snapshot(), before);
}

#[test]
fn test_snapshot_is_idempotent() {
    let book = run_ledger("A B C\nd 3 -\n- - 7\n").unwrap();
    assert_eq!(book.snapshot(), book.snapshot());
}

#[test]
fn test_empty_ledger_reports_nobody() {
    let book = run_ledger("# nothing yet\n\n20200101\nA B C\n").unwrap();
    assert!(book.snapshot().is_empty());

    let mut output = Vec::new();
    book.write_output(&mut output).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "player,games_played,games_won,net_score,games_won_pc,net_score_avg\n"
    );
}

#[test]
fn test_date_with_extra_digits() {
    let mut book = Scorebook::new(
        8,
        DateWindow::new(DateStamp::new(20191214), DateStamp::new(20191214)),
    )
    .unwrap();
    book.process_ledger(Cursor::new("2019121499\nA B C\n3 d -\n"))
        .unwrap();
    assert_eq!(book.player("A").unwrap().net_score, 24);
}

// ==================== REJECTED LEDGERS ====================

fn line_error(text: &str) -> (usize, RecordError) {
    match run_ledger(text) {
        Err(LedgerError::InvalidLine { line, source }) => (line, source),
        Err(other) => panic!("Expected InvalidLine, got {:?}", other),
        Ok(_) => panic!("Expected ledger to be rejected"),
    }
}

#[test]
fn test_rejects_hand_before_roster() {
    assert_eq!(line_error("3 d -\n"), (1, RecordError::MissingRoster));
}

#[test]
fn test_rejects_seat_count_mismatch() {
    let (line, source) = line_error("A B C\n- - - -\n");
    assert_eq!(line, 2);
    assert_eq!(
        source,
        RecordError::InvalidHand("4 outcomes given for 3 players".to_string())
    );
}

#[test]
fn test_rejects_duplicate_player() {
    let (line, source) = line_error("\n\nA B A\n");
    assert_eq!(line, 3);
    assert!(matches!(source, RecordError::InvalidRoster(_)));
}

#[test]
fn test_rejects_unpaired_discard() {
    let (line, source) = line_error("A B C\nd - -\n");
    assert_eq!(line, 2);
    assert_eq!(
        source,
        RecordError::InvalidHand("a discarder without a winner".to_string())
    );
}

#[test]
fn test_rejects_liable_with_discard() {
    let (_, source) = line_error("w x y z\n3 d t -\n");
    assert!(matches!(source, RecordError::InvalidHand(_)));
}

#[test]
fn test_rejects_stray_text() {
    let (line, source) = line_error("A B C\n3 d -\nhello\n");
    assert_eq!(line, 3);
    assert_eq!(source, RecordError::UnrecognizedLine);
}

#[test]
fn test_rejects_invalid_lines_outside_window() {
    let mut book = Scorebook::new(
        8,
        DateWindow::new(DateStamp::new(20200101), DateStamp::new(20201231)),
    )
    .unwrap();
    let err = book
        .process_ledger(Cursor::new("20190101\nA B C\n3 3 -\n"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidLine { line: 3, .. }));
}
