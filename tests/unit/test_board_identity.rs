//! Unit tests for the board identity registry

use boardlink::{BoardId, BoardRegistry};

#[test]
fn test_every_registered_pair_matches() {
    let registry = BoardRegistry::pyboard();
    let ids: Vec<BoardId> = registry.iter().copied().collect();
    assert!(!ids.is_empty());
    for id in ids {
        assert!(registry.matches(id.vendor_id, id.product_id));
    }
}

#[test]
fn test_spec_example_pairs() {
    let registry = BoardRegistry::new(vec![
        BoardId::new(0xF055, 0x9801),
        BoardId::new(0xF055, 0x9800),
    ]);
    assert!(registry.matches(0xF055, 0x9801));
    assert!(!registry.matches(0x0000, 0x0000));
}

#[test]
fn test_lookup_is_exact_match() {
    let registry = BoardRegistry::pyboard();
    // Swapping vendor and product must not match
    assert!(!registry.matches(0x9801, 0xF055));
}

#[test]
fn test_order_carries_no_priority() {
    let forward = BoardRegistry::new(vec![
        BoardId::new(0xF055, 0x9801),
        BoardId::new(0xF055, 0x9800),
    ]);
    let reversed = BoardRegistry::new(vec![
        BoardId::new(0xF055, 0x9800),
        BoardId::new(0xF055, 0x9801),
    ]);
    for (vid, pid) in [(0xF055, 0x9801), (0xF055, 0x9800), (0x1234, 0x5678)] {
        assert_eq!(forward.matches(vid, pid), reversed.matches(vid, pid));
    }
}

#[test]
fn test_config_extras_extend_the_catalog() {
    let extras = [BoardId::new(0x2E8A, 0x0005)];
    let registry = BoardRegistry::pyboard_with_extras(&extras);
    assert!(registry.matches(0x2E8A, 0x0005));
    // Built-ins are still present
    assert!(registry.matches(0xF055, 0x9800));
}
