use super::*;

fn _initial_position() -> Position {
    let mut position = Position::deal_seeded(PositionConfig::default(), 100).unwrap();
    let moves = position.enumerate_moves();
    position.advance(moves[0]).unwrap();
    position.score(false);
    position
}

#[test]
fn test_position_serialize_json() {
    let position = _initial_position();
    let ser = serde_json::to_string_pretty(&position).unwrap();
    println!("{ser}");
    let position1: Position = serde_json::from_str(&ser).unwrap();
    assert_eq!(position.to_hash_string(), position1.to_hash_string());
    assert_eq!(position.moves(), position1.moves());
    assert_eq!(position.cached_score(), position1.cached_score());
    assert_eq!(position.config, position1.config);
}

#[test]
fn test_position_serialize_bincode() {
    let position = _initial_position();
    let ser = bincode::serialize(&position).unwrap();
    let position1: Position = bincode::deserialize(&ser).unwrap();
    assert_eq!(position.canonical_hash(), position1.canonical_hash());
    assert_eq!(position.depth, position1.depth);
    assert_eq!(position.moves(), position1.moves());
}

#[test]
fn test_move_records_serialize_json() {
    let root = position_with("SU333/SU3/FU/FL/", 4);
    let records = replay(&root, &[Move::new(1, 0)]).unwrap();
    let ser = serde_json::to_string(&records).unwrap();
    let records1: Vec<MoveRecord> = serde_json::from_str(&ser).unwrap();
    assert_eq!(records, records1);
}
