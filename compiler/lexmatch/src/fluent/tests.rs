use super::*;
use lexmatch_core::{ByteSet, Cursor, Predicate, RuneSet, SourceBuffer};
use pretty_assertions::assert_eq;

const DIGITS: ByteSet = ByteSet::from_range(b'0', b'9');
const ONE_NINE: ByteSet = ByteSet::from_range(b'1', b'9');
const HEX: ByteSet = DIGITS
    .union(ByteSet::from_range(b'a', b'f'))
    .union(ByteSet::from_range(b'A', b'F'));

/// A whole JSON number: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)? EOF`.
fn json_number(m: &mut Matcher<Cursor<'_>>) -> bool {
    m.expr()
        .match_zero_or_one(&'-')
        .and_begin()
        .match_one(&'0')
        .or_begin()
        .match_one(&ONE_NINE)
        .and()
        .match_zero_or_more(&DIGITS)
        .end_match_one()
        .end_match_one()
        .and_begin()
        .match_one(&'.')
        .and()
        .match_one_or_more(&DIGITS)
        .end_match_zero_or_one()
        .and_begin()
        .match_one(&['e', 'E'])
        .and()
        .match_zero_or_one(&['+', '-'])
        .and()
        .match_one_or_more(&DIGITS)
        .end_match_zero_or_one()
        .and()
        .match_eof()
        .result()
}

fn run(source: &str, expr: impl FnOnce(&mut Matcher<Cursor<'_>>) -> bool) -> (bool, u32) {
    let buf = SourceBuffer::new(source);
    let mut m = Matcher::new(buf.cursor());
    let matched = expr(&mut m);
    (matched, m.cursor().pos())
}

// === Grammars ===

#[test]
fn json_numbers() {
    let cases: &[(&str, bool)] = &[
        ("0", true),
        ("-0", true),
        ("7", true),
        ("-12.5e+3", true),
        ("1E-07", true),
        ("3.14159", true),
        ("10e9", true),
        ("", false),
        ("-", false),
        ("01", false),
        ("1.", false),
        ("1e", false),
        (".5", false),
        ("+1", false),
        ("12a", false),
    ];
    for &(source, expected) in cases {
        let (matched, pos) = run(source, json_number);
        assert_eq!(matched, expected, "matching {source:?}");
        let consumed = if expected { source.len() } else { 0 };
        assert_eq!(pos as usize, consumed, "cursor after {source:?}");
    }
}

#[test]
fn unicode_escape_by_repetition_and_by_sequence() {
    fn bounded(m: &mut Matcher<Cursor<'_>>) -> bool {
        m.expr()
            .match_one(&'\\')
            .and()
            .match_one(&'u')
            .and()
            .match_min_max(&HEX, 4, 4)
            .result()
    }
    fn sequence(m: &mut Matcher<Cursor<'_>>) -> bool {
        m.expr()
            .match_one(&'\\')
            .and()
            .match_one(&'u')
            .and()
            .match_one(&HEX)
            .and()
            .match_one(&HEX)
            .and()
            .match_one(&HEX)
            .and()
            .match_one(&HEX)
            .result()
    }

    for (source, expected) in [
        ("\\u00e9", (true, 6)),
        ("\\uBEEFcafe", (true, 6)),
        ("\\u00g9", (false, 0)),
        ("\\u12", (false, 0)),
        ("\\x0041", (false, 0)),
    ] {
        assert_eq!(run(source, bounded), expected, "min/max on {source:?}");
        assert_eq!(run(source, sequence), expected, "sequence on {source:?}");
    }
}

#[test]
fn keyword_alternatives() {
    fn literal<C: Scan>(cursor: &mut C, text: &str) -> bool {
        let start = cursor.mark();
        for ch in text.chars() {
            if !cursor.match_one(&ch) {
                cursor.reset_to(start);
                return false;
            }
        }
        true
    }
    fn keyword(m: &mut Matcher<Cursor<'_>>) -> bool {
        m.expr()
            .attempt(|c| literal(c, "true"))
            .or()
            .attempt(|c| literal(c, "false"))
            .or()
            .attempt(|c| literal(c, "null"))
            .result()
    }

    assert_eq!(run("false,", keyword), (true, 5));
    assert_eq!(run("null", keyword), (true, 4));
    assert_eq!(run("nul", keyword), (false, 0));
}

#[test]
fn rune_set_identifier() {
    let extra: RuneSet = "_$".chars().collect();
    let (matched, pos) = run("_ident$2 rest", |m| {
        m.expr()
            .begin()
            .attempt(|c| c.match_one(&Predicate(char::is_alphabetic)))
            .or()
            .match_one(&extra)
            .end_match_one()
            .and()
            .attempt(|c| {
                c.match_zero_or_more(&Predicate(|ch: char| {
                    ch.is_alphanumeric() || extra.contains(ch)
                }))
            })
            .result()
    });
    assert!(matched);
    assert_eq!(pos, 8);
}

// === Short-circuiting ===

#[test]
fn skipped_branch_never_runs() {
    let mut calls = 0;
    let (matched, pos) = run("a", |m| {
        m.expr()
            .match_one(&'a')
            .or_begin()
            .attempt(|_| {
                calls += 1;
                true
            })
            .end_match_one()
            .result()
    });
    assert_eq!(calls, 0);
    assert_eq!((matched, pos), (true, 1));
}

// === Empty groups ===

#[test]
fn empty_group() {
    assert_eq!(
        run("a", |m| m.expr().begin().end().match_one().result()),
        (false, 0)
    );
    assert_eq!(
        run("a", |m| m.expr().begin().end().match_zero_or_one().result()),
        (true, 0)
    );
}

#[test]
fn empty_group_after_operator() {
    assert_eq!(
        run("a", |m| {
            m.expr()
                .match_one(&'a')
                .and_begin()
                .end()
                .match_one()
                .result()
        }),
        (false, 0)
    );
    assert_eq!(
        run("a", |m| {
            m.expr()
                .match_one(&'a')
                .or_begin()
                .end()
                .match_zero_or_one()
                .result()
        }),
        (true, 1)
    );
}

// === Chain lifecycle ===

#[test]
fn reset_from_operator_phase_keeps_position() {
    let buf = SourceBuffer::new("ab");
    let mut m = Matcher::new(buf.cursor());
    let matched = m.expr().match_one(&'a').reset().match_one(&'z').result();
    assert!(!matched);
    // The abandoned expression's consumption stands; the new one anchored after it.
    assert_eq!(m.cursor().pos(), 1);
    assert!(m.expr().match_one(&'b').result());
    assert_eq!(m.cursor().pos(), 2);
}

#[test]
fn expr_abandons_runtime_expression() {
    let buf = SourceBuffer::new("a");
    let mut m = Matcher::new(buf.cursor());
    m.begin().begin();
    assert_eq!(m.depth(), 2);
    assert!(m.expr().match_one(&'a').result());
    assert_eq!(m.depth(), 0);
    assert!(!m.has_attempted());
}

#[test]
fn dropped_chain_leaves_expression_open() {
    let buf = SourceBuffer::new("a");
    let mut m = Matcher::new(buf.cursor());
    let _ = m.expr().begin().match_one(&'a');
    assert_eq!(m.depth(), 1);
    assert_eq!(m.result(), Err(crate::MatchError::UnclosedGroup { depth: 1 }));
    m.reset();
    assert_eq!(m.depth(), 0);
}

#[test]
fn explicit_end_phase() {
    let (matched, pos) = run("xy", |m| {
        m.expr()
            .match_one(&'x')
            .and_begin()
            .match_one(&'y')
            .end()
            .match_one()
            .result()
    });
    assert_eq!((matched, pos), (true, 2));
}

#[test]
fn negated_primitives_in_chain() {
    let (matched, pos) = run("\"abc\"", |m| {
        m.expr()
            .match_one(&'"')
            .and()
            .non_match_zero_or_more(&'"')
            .and()
            .match_one(&'"')
            .result()
    });
    assert_eq!((matched, pos), (true, 5));

    let (matched, pos) = run("ab", |m| {
        m.expr()
            .non_match_one(&'x')
            .and()
            .non_match_zero_or_one(&'b')
            .and()
            .non_match_one_or_more(&'b')
            .result()
    });
    assert_eq!((matched, pos), (false, 0));

    let (matched, pos) = run("abcd", |m| {
        m.expr()
            .non_match_min_max(&'d', 2, 3)
            .and()
            .match_one(&'d')
            .result()
    });
    assert_eq!((matched, pos), (true, 4));
}
