use gridclaim_core::{BotId, RoundBudget, Simulation};
use gridclaim_world::{ArenaWorld, Spiral, Sweep};
use proptest::prelude::*;

fn play_out(world: &mut ArenaWorld, rounds: u32) -> Vec<BotId> {
    world
        .setup(RoundBudget::new(rounds).expect("positive budget"))
        .expect("setup succeeds");
    while !world.step().expect("step succeeds") {}
    world.grid().iter().map(|(_, owner)| owner).collect()
}

#[test]
fn same_seed_replays_the_same_game() {
    let mut first = ArenaWorld::with_default_roster(12, 7).expect("valid arena");
    let mut second = ArenaWorld::with_default_roster(12, 7).expect("valid arena");

    assert_eq!(play_out(&mut first, 50), play_out(&mut second, 50));
    assert_eq!(first.score(), second.score());
}

#[test]
fn setup_restores_the_initial_state() {
    let mut world = ArenaWorld::with_default_roster(12, 99).expect("valid arena");
    let budget = RoundBudget::new(20).expect("positive budget");

    world.setup(budget).expect("setup succeeds");
    let initial_bots = world.bots();
    let initial_grid: Vec<BotId> = world.grid().iter().map(|(_, owner)| owner).collect();

    for _ in 0..10 {
        let _ = world.step().expect("step succeeds");
    }
    world.setup(budget).expect("setup succeeds");

    assert_eq!(world.bots(), initial_bots);
    let grid: Vec<BotId> = world.grid().iter().map(|(_, owner)| owner).collect();
    assert_eq!(grid, initial_grid);
    assert_eq!(world.current_round(), 0);
}

#[test]
fn game_concludes_exactly_at_the_round_budget() {
    let mut world = ArenaWorld::with_default_roster(8, 3).expect("valid arena");
    world
        .setup(RoundBudget::new(3).expect("positive budget"))
        .expect("setup succeeds");

    assert!(!world.step().expect("round 1"));
    assert!(!world.step().expect("round 2"));
    assert!(world.step().expect("round 3"));
    assert_eq!(world.current_round(), 3);
    assert_eq!(world.round_budget(), 3);
}

#[test]
fn lone_sweeper_claims_a_row_before_climbing() {
    let mut world = ArenaWorld::new(4, 0).expect("valid arena");
    let id = world.add_bot("sweeper", Sweep::new());
    world
        .setup(RoundBudget::new(40).expect("positive budget"))
        .expect("setup succeeds");

    for _ in 0..16 {
        let _ = world.step().expect("step succeeds");
    }

    // Sixteen single-cell moves can revisit cells, but a sweeper never stands still.
    let owned = world.score().get(id).expect("bot is scored");
    assert!(owned >= 4, "sweeper only owns {owned} cells");
}

#[test]
fn later_bots_overwrite_earlier_claims() {
    let mut world = ArenaWorld::new(1, 0).expect("valid arena");
    let first = world.add_bot("first", Spiral::new());
    let second = world.add_bot("second", Spiral::new());
    world
        .setup(RoundBudget::new(1).expect("positive budget"))
        .expect("setup succeeds");
    let _ = world.step().expect("step succeeds");

    assert_eq!(world.score().get(first), Some(0));
    assert_eq!(world.score().get(second), Some(1));
}

proptest! {
    #[test]
    fn bots_stay_on_the_board_and_scores_fit_the_area(
        length in 1u32..16,
        seed in any::<u64>(),
        rounds in 1u32..60,
    ) {
        let mut world = ArenaWorld::with_default_roster(length, seed).expect("valid arena");
        world
            .setup(RoundBudget::new(rounds).expect("positive budget"))
            .expect("setup succeeds");

        for _ in 0..rounds {
            let _ = world.step().expect("step succeeds");
            for bot in world.bots().iter() {
                prop_assert!(bot.cell.column() < length);
                prop_assert!(bot.cell.row() < length);
            }
        }

        let total: u64 = world.score().iter().map(|(_, score)| u64::from(score)).sum();
        prop_assert!(total <= world.grid().cell_count());
        prop_assert!(total >= 1);
    }
}
