use super::*;

#[test]
fn scenario_run_of_three_peels_into_cells_then_collapses() {
    // 0: three 3s, 1: the last 3, 2: open cell, 3: locked cell
    let root = position("SU333/SU3/FU/FL/");
    let cell = &root.piles()[2];
    assert!(!cell.is_move_to_legal(&root.piles()[0].which_cards_moving()));
    assert!(cell.is_move_to_legal(&[3]));

    let moves = root.enumerate_moves();
    assert!(moves.contains(&Move::new(0, 2)));
    assert!(moves.contains(&Move::new(1, 0)));

    let mut peeled = root.clone();
    let outcome = peeled.apply_move_detailed(Move::new(0, 2)).unwrap();
    assert_eq!(1, outcome.cards.len());
    assert_eq!("SU33/SU3/FU3/FL/", peeled.to_hash_string());

    let mut collapsed = root.clone();
    assert_eq!(Ok(true), collapsed.apply_move(Move::new(1, 0)));
    assert!(collapsed.piles()[0].is_complete());
    assert!(!collapsed.piles()[3].locked);
    assert_eq!("SLX[3]/SU/FU/FU/", collapsed.to_hash_string());
}

#[test]
fn scenario_cell_collects_full_group_without_unlock() {
    let mut position = position("SU13333/FU/FL/");
    let outcome = position.apply_move_detailed(Move::new(0, 1)).unwrap();
    assert_eq!(4, outcome.cards.len());
    assert!(outcome.collapsed);
    assert_eq!(None, outcome.unlocked);
    assert_eq!("SU1/FLX[3]/FL/", position.to_hash_string());
}

#[test]
fn scenario_fully_collapsed_is_complete() {
    let position = position_with("SLX[0]/SLX[1]/SLX[2]/FLX[3]/FU/", 4);
    assert!(position.is_complete());
    assert_eq!(Err(SolveError::AlreadyComplete), position.solve_children().map(|_| ()));
    assert_eq!(Ok(()), position.validate_card_counts());
}

#[test]
fn scenario_dead_root_has_no_children() {
    let position = position_with("SU0101/SU1010/FL/", 2);
    assert!(!position.is_complete());
    assert!(position.is_dead());
    assert!(position.solve_children().unwrap().is_none());
}

#[test]
fn scenario_known_solution_replays_to_completion() {
    let root = position_with("SU0101/SU1010/SU/FL/", 2);
    let solution: Vec<Move> = [(0, 2), (1, 0), (1, 2), (1, 0), (1, 2), (0, 1), (0, 2), (0, 1)]
        .into_iter()
        .map(Move::from)
        .collect();

    let records = replay(&root, &solution).unwrap();
    assert_eq!(8, records.len());
    assert_eq!(
        vec![6, 7],
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.collapsed)
            .map(|(i, _)| i)
            .collect::<Vec<_>>()
    );
    assert!(records[6].unlocked);

    let mut position = root.clone();
    position.advance_multiple(solution.iter().map(|m| (m.source, m.dest)));
    assert!(position.is_complete());
    assert_eq!(Ok(()), position.validate_card_counts());
    assert_eq!(solution, position.moves());
}
