use super::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn canonical_hash_survives_decode(position in arb_reachable_position()) {
        let hash = position.canonical_hash();
        let decoded = Position::from_canonical_hash(hash.as_str(), position.config).unwrap();
        assert_eq!(hash, decoded.canonical_hash());
    }

    #[test]
    fn wire_hash_round_trips_in_pile_order(position in arb_reachable_position()) {
        let wire = position.to_hash_string();
        let decoded = Position::from_canonical_hash(&wire, position.config).unwrap();
        assert_eq!(wire, decoded.to_hash_string());
        assert_eq!(position.config.stacks, decoded.config.stacks);
        assert_eq!(position.config.free_cells, decoded.config.free_cells);
    }

    #[test]
    fn canonical_hash_ignores_stack_order(position in arb_reachable_position(), seed in any::<u64>()) {
        use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
        let mut piles: Vec<Pile> = position.piles().to_vec();
        let stacks = position.config.stacks as usize;
        piles[..stacks].shuffle(&mut SmallRng::seed_from_u64(seed));
        let shuffled = Position::from_piles(position.config, piles).unwrap();
        assert_eq!(position.canonical_hash(), shuffled.canonical_hash());
    }
}
