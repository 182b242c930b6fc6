use super::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn reachable_positions_conserve_cards(position in arb_reachable_position()) {
        if let Err(e) = position.validate_card_counts() {
            dbg!(&position);
            panic!("{e}");
        }
    }

    #[test]
    fn enumerated_moves_always_apply(position in arb_reachable_position()) {
        for mv in position.enumerate_moves() {
            let mut position1 = position.clone();
            if let Err(e) = position1.advance(mv) {
                dbg!(&position);
                dbg!(&mv);
                panic!("Move is not performable: {e}");
            }
            assert_eq!(Ok(()), position1.validate_card_counts());
        }
    }

    #[test]
    fn collapses_lock_and_only_stacks_unlock(position in arb_reachable_position()) {
        for mv in position.enumerate_moves() {
            let mut position1 = position.clone();
            let locked_before = position.piles().iter().filter(|p| p.locked).count();
            let outcome = position1.apply_move_detailed(mv).unwrap();
            let dest = &position1.piles()[mv.dest as usize];
            assert_eq!(outcome.collapsed, dest.is_complete());
            if outcome.collapsed {
                assert!(dest.locked);
            }
            if let Some(cell) = outcome.unlocked {
                assert!(outcome.collapsed);
                assert_eq!(PileKind::Stack, dest.kind);
                assert!(position.piles()[cell as usize].locked);
                assert!(!position1.piles()[cell as usize].locked);
            }
            let locked_after = position1.piles().iter().filter(|p| p.locked).count();
            let expected = locked_before + outcome.collapsed as usize - outcome.unlocked.is_some() as usize;
            assert_eq!(expected, locked_after);
        }
    }

    #[test]
    fn enumerated_moves_respect_cell_rules(position in arb_reachable_position()) {
        let first_free_cell = position.first_free_cell();
        for mv in position.enumerate_moves() {
            assert_ne!(mv.source, mv.dest);
            assert_ne!(position.last_move(), Some(mv.reversed()));
            let dest = &position.piles()[mv.dest as usize];
            assert!(!dest.locked);
            if dest.is_free_cell() {
                assert!(position.config.allow_free_cells);
                assert_eq!(first_free_cell, Some(mv.dest));
            }
        }
    }

    #[test]
    fn score_is_idempotent(position in arb_reachable_position()) {
        let mut position = position;
        let first = position.score(false);
        assert_eq!(first, position.score(false));
        assert_eq!(position.compute_score(), first);
        assert_eq!(first, position.score(true));
    }

    #[test]
    fn solve_children_is_never_empty(position in arb_reachable_position()) {
        prop_assume!(!position.is_complete(), "must not be complete");
        match position.solve_children() {
            Ok(Some(children)) => {
                assert!(!children.is_empty());
                for child in children {
                    assert_eq!(position.depth + 1, child.depth);
                    assert_eq!(Some(child.compute_score()), child.cached_score());
                }
            }
            Ok(None) => assert!(position.is_dead() || position.depth > position.config.max_depth),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn complete_positions_have_every_rank_collapsed(position in arb_reachable_default_position()) {
        let collapsed: Vec<Rank> = position.piles().iter().filter_map(|p| p.collapsed_rank()).collect();
        let mut distinct = collapsed.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(collapsed.len(), distinct.len());
        assert_eq!(position.is_complete(), collapsed.len() == position.config.card_types as usize);
    }
}
