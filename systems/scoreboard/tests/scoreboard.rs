use gridclaim_core::{BotId, BotSnapshot, BotView, CellCoord, DomainError, ScoreTable};
use gridclaim_system_scoreboard::{build_rows, ScoreRow};
use proptest::prelude::*;

fn roster(ids: &[u32]) -> BotView {
    BotView::from_snapshots(
        ids.iter()
            .enumerate()
            .map(|(index, id)| BotSnapshot {
                id: BotId::new(*id),
                cell: CellCoord::new(index as u32, 0),
                name: format!("bot-{id}"),
            })
            .collect(),
    )
}

#[test]
fn rows_are_sorted_by_descending_percentage() {
    let bots = roster(&[1, 2, 3]);
    let scores: ScoreTable = [(BotId::new(1), 2), (BotId::new(2), 8), (BotId::new(3), 5)]
        .into_iter()
        .collect();

    let rows = build_rows(&bots, &scores, 20).expect("valid inputs");

    assert_eq!(
        rows,
        vec![
            ScoreRow {
                name: "bot-2".to_owned(),
                percentage: 40,
                id: BotId::new(2),
            },
            ScoreRow {
                name: "bot-3".to_owned(),
                percentage: 25,
                id: BotId::new(3),
            },
            ScoreRow {
                name: "bot-1".to_owned(),
                percentage: 10,
                id: BotId::new(1),
            },
        ]
    );
}

#[test]
fn ties_keep_roster_order() {
    let bots = roster(&[1, 2]);
    let scores: ScoreTable = [(BotId::new(1), 4), (BotId::new(2), 4)]
        .into_iter()
        .collect();

    let rows = build_rows(&bots, &scores, 16).expect("valid inputs");

    let ranked: Vec<(BotId, u32)> = rows.iter().map(|row| (row.id, row.percentage)).collect();
    assert_eq!(ranked, vec![(BotId::new(1), 25), (BotId::new(2), 25)]);
}

#[test]
fn zero_maximum_score_is_rejected() {
    let bots = roster(&[1]);
    let scores: ScoreTable = std::iter::once((BotId::new(1), 0)).collect();

    assert_eq!(
        build_rows(&bots, &scores, 0),
        Err(DomainError::ZeroMaximumScore)
    );
}

#[test]
fn bot_without_score_entry_is_rejected() {
    let bots = roster(&[1, 9]);
    let scores: ScoreTable = std::iter::once((BotId::new(1), 3)).collect();

    assert_eq!(
        build_rows(&bots, &scores, 16),
        Err(DomainError::MissingScore { bot: BotId::new(9) })
    );
}

#[test]
fn empty_roster_produces_empty_board() {
    let rows = build_rows(&BotView::default(), &ScoreTable::new(), 16).expect("valid inputs");
    assert!(rows.is_empty());
}

proptest! {
    #[test]
    fn every_bot_gets_one_bounded_row_in_rank_order(
        raw_scores in proptest::collection::vec(0u32..=64, 0..12),
    ) {
        let max_score = 64 * raw_scores.len().max(1) as u64;
        let ids: Vec<u32> = (1..=raw_scores.len() as u32).collect();
        let bots = roster(&ids);
        let scores: ScoreTable = ids
            .iter()
            .zip(raw_scores.iter())
            .map(|(id, score)| (BotId::new(*id), *score))
            .collect();

        let rows = build_rows(&bots, &scores, max_score).expect("valid inputs");

        prop_assert_eq!(rows.len(), bots.len());
        prop_assert!(rows.iter().all(|row| row.percentage <= 100));
        prop_assert!(rows.windows(2).all(|pair| pair[0].percentage >= pair[1].percentage));

        let mut seen: Vec<BotId> = rows.iter().map(|row| row.id).collect();
        seen.sort();
        let mut expected: Vec<BotId> = ids.iter().map(|id| BotId::new(*id)).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }
}
