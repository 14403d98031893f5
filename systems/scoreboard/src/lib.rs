#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure scoreboard system that ranks bots by their share of the board.

use gridclaim_core::{BotId, BotView, DomainError, ScoreTable};

/// Single leaderboard entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRow {
    /// Display name of the bot.
    pub name: String,
    /// Score as a whole percentage of the maximum possible score.
    pub percentage: u32,
    /// Identifier of the bot the row describes.
    pub id: BotId,
}

/// Builds the ranked leaderboard for the provided roster.
///
/// Every bot in `bots` yields exactly one row. Percentages are rounded half
/// to even and rows are ordered by descending percentage; bots with equal
/// percentages keep their roster order.
pub fn build_rows(
    bots: &BotView,
    scores: &ScoreTable,
    max_possible_score: u64,
) -> Result<Vec<ScoreRow>, DomainError> {
    if max_possible_score == 0 {
        return Err(DomainError::ZeroMaximumScore);
    }

    let mut rows = bots
        .iter()
        .map(|bot| {
            let score = scores
                .get(bot.id)
                .ok_or(DomainError::MissingScore { bot: bot.id })?;
            Ok(ScoreRow {
                name: bot.name.clone(),
                percentage: percentage(score, max_possible_score),
                id: bot.id,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    rows.sort_by(|left, right| right.percentage.cmp(&left.percentage));
    Ok(rows)
}

fn percentage(score: u32, max_possible_score: u64) -> u32 {
    let scaled = u64::from(score) * 100;
    let quotient = scaled / max_possible_score;
    let remainder = scaled % max_possible_score;
    let doubled = remainder * 2;

    let rounded = if doubled > max_possible_score
        || (doubled == max_possible_score && quotient % 2 == 1)
    {
        quotient + 1
    } else {
        quotient
    };
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
