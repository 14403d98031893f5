//! Converts simulation state into a backend-agnostic [`Scene`].

use gridclaim_core::{DomainError, Simulation};
use gridclaim_rendering::{
    BotPresentation, ButtonBar, CellPresentation, Color, RoundPresentation, Scene,
    ScoreRowPresentation,
};
use gridclaim_system_palette::color_of;
use gridclaim_system_scoreboard::build_rows;

/// Captures the current simulation state as a scene.
///
/// Every color is resolved through the palette and the leaderboard is ranked
/// against the grid area, so contract violations by the simulation surface
/// here as [`DomainError`]s.
pub(crate) fn build_scene<S>(
    simulation: &S,
    buttons: &ButtonBar,
    show_labels: bool,
) -> Result<Scene, DomainError>
where
    S: Simulation + ?Sized,
{
    let grid = simulation.grid();
    let color_map = simulation.color_map();

    let cells = grid
        .iter()
        .map(|(cell, owner)| {
            Ok(CellPresentation {
                cell,
                owner,
                color: Color::from_rgb(color_of(owner, color_map)?),
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let roster = simulation.bots();
    let bots = roster
        .iter()
        .map(|bot| {
            Ok(BotPresentation {
                cell: bot.cell,
                color: Color::from_rgb(color_of(bot.id, color_map)?),
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let scoreboard = build_rows(&roster, &simulation.score(), grid.cell_count())?
        .into_iter()
        .map(|row| {
            Ok(ScoreRowPresentation {
                color: Color::from_rgb(color_of(row.id, color_map)?),
                id: row.id,
                name: row.name,
                percentage: row.percentage,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(Scene {
        cells,
        bots,
        scoreboard,
        buttons: buttons.buttons().to_vec(),
        round: RoundPresentation {
            current: simulation.current_round(),
            total: simulation.round_budget(),
        },
        show_labels,
    })
}
