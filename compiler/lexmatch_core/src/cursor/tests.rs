use super::Cursor;
use crate::{Backtrack, Scan, SourceBuffer};

// === Basic Navigation ===

#[test]
fn byte_is_first_source_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.byte(), b'a');
}

#[test]
fn bump_byte_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.bump_byte();
    assert_eq!(cursor.byte(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn bump_byte_stops_at_eof() {
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    cursor.bump_byte();
    cursor.bump_byte();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 1);
}

// === Characters ===

#[test]
fn peek_char_ascii() {
    let buf = SourceBuffer::new("xy");
    assert_eq!(buf.cursor().peek_char(), Some('x'));
}

#[test]
fn peek_char_multibyte() {
    let buf = SourceBuffer::new("λx");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.peek_char(), Some('λ'));
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.peek_char(), Some('x'));
}

#[test]
fn peek_char_at_eof_is_none() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.cursor().peek_char(), None);
}

#[test]
fn peek_char_interior_null() {
    let buf = SourceBuffer::new("\0");
    assert_eq!(buf.cursor().peek_char(), Some('\0'));
}

#[test]
fn scalar_widths() {
    assert_eq!(Cursor::scalar_width(b'a'), 1);
    assert_eq!(Cursor::scalar_width(0xC3), 2);
    assert_eq!(Cursor::scalar_width(0xE2), 3);
    assert_eq!(Cursor::scalar_width(0xF0), 4);
    assert_eq!(Cursor::scalar_width(0x80), 1);
}

// === Slicing ===

#[test]
fn slice_between_marks() {
    let buf = SourceBuffer::new("hello world");
    let mut cursor = buf.cursor();
    let start = cursor.mark();
    for _ in 0..5 {
        cursor.advance_char();
    }
    assert_eq!(cursor.since(start), "hello");
    assert_eq!(cursor.rest(), " world");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_off_boundary_is_empty() {
    let buf = SourceBuffer::new("é");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 1), "");
    assert_eq!(cursor.slice(0, 2), "é");
}

#[test]
fn reversed_or_overlong_slice_is_empty() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    cursor.advance_char();
    let late = cursor.mark();
    assert_eq!(cursor.slice(2, 1), "");
    assert_eq!(cursor.slice(0, 4), "");

    cursor.reset_to(buf.cursor().mark());
    assert_eq!(cursor.since(late), "", "cursor rewound before the mark");
    assert_eq!(cursor.slice_from(2), "");
}

// === EOF ===

#[test]
fn match_eof_inside_multibyte_scalar() {
    let buf = SourceBuffer::new("éx");
    let mut cursor = buf.cursor();
    cursor.bump_byte();
    assert_eq!(cursor.pos(), 1);
    assert!(!cursor.is_eof());
    assert!(!cursor.match_eof(), "EOF follows position, not decodability");
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn match_eof_at_end() {
    let buf = SourceBuffer::new("é");
    let mut cursor = buf.cursor();
    assert!(!cursor.match_eof());
    cursor.advance_char();
    assert!(cursor.match_eof());
}

// === Backtracking ===

#[test]
fn mark_and_reset_round_trip() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    let mark = cursor.mark();
    cursor.advance_char();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 3);
    cursor.reset_to(mark);
    assert_eq!(cursor.pos(), 1);
    assert_eq!(mark.pos(), 1);
}

#[test]
fn reset_is_idempotent() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    let mark = cursor.mark();
    cursor.advance_char();
    cursor.reset_to(mark);
    cursor.reset_to(mark);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn reset_can_move_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    cursor.advance_char();
    let ahead = cursor.mark();
    let mut fresh = buf.cursor();
    fresh.reset_to(ahead);
    assert_eq!(fresh.peek_char(), Some('c'));
}

#[test]
fn mark_does_not_move() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    let a = cursor.mark();
    let b = cursor.mark();
    assert_eq!(a, b);
}
