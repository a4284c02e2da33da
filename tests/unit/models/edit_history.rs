use super::*;
use crate::models::edit_op::EditOp;

fn single(op: EditOp) -> Transaction {
    let mut tx = Transaction::new();
    tx.push(op);
    tx
}

#[test]
fn test_undo_redo() {
    let mut rope = Rope::from_str("hello");
    let mut history = EditHistory::new();

    let op = EditOp::insert(5, " world".to_string(), (0, 5), (0, 11));
    op.apply(&mut rope);
    history.push(single(op));

    assert!(history.can_undo());
    assert!(!history.can_redo());

    assert_eq!(history.undo(&mut rope), Some((0, 5)));
    assert_eq!(rope.to_string(), "hello");
    assert!(!history.can_undo());
    assert!(history.can_redo());

    assert_eq!(history.redo(&mut rope), Some((0, 11)));
    assert_eq!(rope.to_string(), "hello world");
}

#[test]
fn test_new_edit_clears_redo() {
    let mut rope = Rope::from_str("");
    let mut history = EditHistory::new();

    let op = EditOp::insert(0, "ab ".to_string(), (0, 0), (0, 3));
    op.apply(&mut rope);
    history.push(single(op));
    history.undo(&mut rope);
    assert!(history.can_redo());

    let op = EditOp::insert(0, "z".to_string(), (0, 0), (0, 1));
    op.apply(&mut rope);
    history.push(single(op));
    assert!(!history.can_redo());
    assert_eq!(rope.to_string(), "z");
}

#[test]
fn test_contiguous_typing_is_one_undo_unit() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new();

    for (i, ch) in "abc".chars().enumerate() {
        let op = EditOp::insert(i, ch.to_string(), (0, i), (0, i + 1));
        op.apply(&mut rope);
        history.push(single(op));
    }
    assert_eq!(rope.to_string(), "abc");

    assert_eq!(history.undo(&mut rope), Some((0, 0)));
    assert_eq!(rope.to_string(), "");
    assert!(!history.can_undo());
}

#[test]
fn test_whitespace_breaks_typing_unit() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new();

    for (i, ch) in "a b".chars().enumerate() {
        let op = EditOp::insert(i, ch.to_string(), (0, i), (0, i + 1));
        op.apply(&mut rope);
        history.push(single(op));
    }

    history.undo(&mut rope);
    assert_eq!(rope.to_string(), "a ");
    history.undo(&mut rope);
    assert_eq!(rope.to_string(), "a");
    history.undo(&mut rope);
    assert_eq!(rope.to_string(), "");
}

#[test]
fn test_multi_op_transaction_reverts_in_reverse_order() {
    let mut rope = Rope::from_str("hello");
    let mut history = EditHistory::new();

    let mut tx = Transaction::new();
    let delete = EditOp::delete(0, 5, "hello".to_string(), (0, 5), (0, 0));
    delete.apply(&mut rope);
    tx.push(delete);
    let insert = EditOp::insert(0, "bye".to_string(), (0, 0), (0, 3));
    insert.apply(&mut rope);
    tx.push(insert);
    history.push(tx);
    assert_eq!(rope.to_string(), "bye");

    assert_eq!(history.undo(&mut rope), Some((0, 5)));
    assert_eq!(rope.to_string(), "hello");
    assert_eq!(history.redo(&mut rope), Some((0, 3)));
    assert_eq!(rope.to_string(), "bye");
}

#[test]
fn test_limit_drops_oldest() {
    let mut rope = Rope::new();
    let mut history = EditHistory::with_limit(2);

    for i in 0..3 {
        let op = EditOp::insert(i, "\n".to_string(), (i, 0), (i + 1, 0));
        op.apply(&mut rope);
        history.push(single(op));
    }

    assert!(history.undo(&mut rope).is_some());
    assert!(history.undo(&mut rope).is_some());
    assert!(history.undo(&mut rope).is_none());
    assert_eq!(rope.to_string(), "\n");
}

#[test]
fn test_clear() {
    let mut rope = Rope::new();
    let mut history = EditHistory::new();
    let op = EditOp::insert(0, "x".to_string(), (0, 0), (0, 1));
    op.apply(&mut rope);
    history.push(single(op));

    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
