//! Playfield tests - locking, row clears, and the occupancy contract

use gridfall::{Piece, PieceKind, Playfield};

fn fill_row(field: &mut Playfield, y: i16) {
    for x in 0..field.columns() {
        field.set(x, y, PieceKind::I);
    }
}

#[test]
fn test_new_field_is_empty() {
    let field = Playfield::new(10, 20);
    assert_eq!(field.columns(), 10);
    assert_eq!(field.rows(), 20);
    assert_eq!(field.occupied_count(), 0);
    for y in 0..20 {
        for x in 0..10 {
            assert!(field.allows(x, y));
            assert_eq!(field.get(x, y), None);
        }
    }
}

#[test]
fn test_lock_piece_settles_four_cells_of_its_kind() {
    let mut field = Playfield::new(10, 20);
    let piece = Piece {
        kind: PieceKind::T,
        x: 3,
        y: 17,
        rotation: 0,
    };
    field.lock_piece(&piece);

    assert_eq!(field.occupied_count(), 4);
    for (x, y) in piece.cells() {
        assert_eq!(field.get(x, y), Some(PieceKind::T));
        assert!(!field.allows(x, y));
    }
}

#[test]
fn test_row_clear_count_invariant() {
    // cells_after = cells_before - cleared * columns, and no cell moves
    // horizontally.
    let mut field = Playfield::new(10, 20);
    fill_row(&mut field, 19);
    fill_row(&mut field, 17);
    field.set(2, 18, PieceKind::S);
    field.set(8, 16, PieceKind::Z);
    field.set(5, 10, PieceKind::L);

    let before = field.occupied_count();
    let cleared = field.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(field.occupied_count(), before - 2 * 10);

    // Shift equals the number of cleared rows strictly below each cell.
    assert_eq!(field.get(2, 19), Some(PieceKind::S)); // one below (19)
    assert_eq!(field.get(8, 18), Some(PieceKind::Z)); // two below (17, 19)
    assert_eq!(field.get(5, 12), Some(PieceKind::L)); // two below (17, 19)
}

#[test]
fn test_adjacent_quad_clear() {
    let mut field = Playfield::new(10, 20);
    for y in 16..20 {
        fill_row(&mut field, y);
    }
    field.set(0, 15, PieceKind::T);

    let cleared = field.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18, 17, 16]);
    assert_eq!(field.occupied_count(), 1);
    assert_eq!(field.get(0, 19), Some(PieceKind::T));
}

#[test]
fn test_partial_row_does_not_clear() {
    let mut field = Playfield::new(10, 20);
    fill_row(&mut field, 19);
    // Poke a hole.
    let mut partial = Playfield::new(10, 20);
    for x in 1..10 {
        partial.set(x, 19, PieceKind::J);
    }

    assert!(field.is_row_full(19));
    assert!(!partial.is_row_full(19));
    assert!(partial.clear_full_rows().is_empty());
    assert_eq!(partial.occupied_count(), 9);
}

#[test]
fn test_external_ghost_probe_via_allows() {
    // Rendering collaborators compute the ghost row by probing validity
    // while incrementing y, using the same placement contract.
    let mut field = Playfield::new(10, 20);
    fill_row(&mut field, 19);
    field.set(4, 18, PieceKind::T);

    let piece = Piece {
        kind: PieceKind::O,
        x: 4,
        y: 0,
        rotation: 0,
    };
    let mut ghost = piece;
    while ghost.translated(0, 1).is_valid(&field) {
        ghost = ghost.translated(0, 1);
    }
    // Column 4 is blocked at row 18, so the O piece rests on rows 16-17.
    assert_eq!(ghost.y, 16);
}
