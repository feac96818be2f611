//! Letter counting tests.

use mordnilap::counting::{count_differences, count_letters, count_with, CountMode, LetterCounts};

/// A hand-made self-describing palindrome; in raw mode its counts are known.
const KNOWN_TEXT: &str = "*
Write
down ten ❛a❜s,
eight ❛c❜s, ten ❛d❜s,
fifty-two ❛e❜s, thirty-eight ❛f❜s,
sixteen ❛g❜s, thirty ❛h❜s, forty-eight ❛i❜s,
six ❛l❜s, four ❛m❜s, thirty-two ❛n❜s, forty-four ❛o❜s,
four ❛p❜s, four ❛q❜s, forty-two ❛r❜s, eighty-four ❛s❜s,
seventy-six ❛t❜s, twenty-eight ❛u❜s, four ❛v❜s, four ❛W❜s,
eighteen ❛w❜s, fourteen ❛x❜s, thirty-two ❛y❜s, four ❛:❜s,
four ❛*❜s, twenty-six ❛-❜s, fifty-eight ❛,❜s,
sixty ❛❛❜s and sixty ❛❜❜s, in a
palindromic sequence
whose second
half runs
thus:
:suht
snur flah
dnoces esohw
ecneuqes cimordnilap
a ni ,s❜❜❛ ytxis dna s❜❛❛ ytxis
,s❜,❛ thgie-ytfif ,s❜-❛ xis-ytnewt ,s❜*❛ ruof
,s❜:❛ ruof ,s❜y❛ owt-ytriht ,s❜x❛ neetruof ,s❜w❛ neethgie
,s❜W❛ ruof ,s❜v❛ ruof ,s❜u❛ thgie-ytnewt ,s❜t❛ xis-ytneves
,s❜s❛ ruof-ythgie ,s❜r❛ owt-ytrof ,s❜q❛ ruof ,s❜p❛ ruof
,s❜o❛ ruof-ytrof ,s❜n❛ owt-ytriht ,s❜m❛ ruof ,s❜l❛ xis
,s❜i❛ thgie-ytrof ,s❜h❛ ytriht ,s❜g❛ neetxis
,s❜f❛ thgie-ytriht ,s❜e❛ owt-ytfif
,s❜d❛ net ,s❜c❛ thgie
,s❜a❛ net nwod
etirW
*";

#[test]
fn case_is_folded_and_punctuation_dropped() {
    let counts = count_letters("AaBb!! ");
    let expected: LetterCounts = [('a', 2), ('b', 2)].into_iter().collect();
    assert_eq!(counts, expected);
}

#[test]
fn empty_text_yields_empty_counts() {
    let counts = count_letters("");
    assert!(counts.is_empty());
    assert_eq!(counts.len(), 0);
    assert_eq!(counts.total(), 0);
}

#[test]
fn total_matches_number_of_retained_characters() {
    let cases = [
        ("Hello, World_42!", 13),
        ("❛a❜s and ❛b❜s", 7),
        ("   \n\t", 0),
        ("Dear Gridfuse, I enjoyed our time together.", 35),
    ];
    for (text, retained) in cases {
        assert_eq!(count_letters(text).total(), retained, "total for {text:?}");
    }
}

#[test]
fn digits_and_underscore_are_counted() {
    let counts = count_letters("a_1_1");
    assert_eq!(counts.get('_'), 2);
    assert_eq!(counts.get('1'), 2);
    assert_eq!(counts.get('a'), 1);
}

#[test]
fn non_ascii_letters_are_dropped() {
    let counts = count_letters("Ñandú ❛x❜");
    assert_eq!(counts.get('n'), 1);
    assert_eq!(counts.get('ñ'), 0);
    assert_eq!(counts.get('x'), 1);
    assert_eq!(counts.total(), 4);
}

#[test]
fn iteration_is_sorted() {
    let counts = count_letters("zebra");
    let letters: Vec<char> = counts.iter().map(|(c, _)| c).collect();
    assert_eq!(letters, vec!['a', 'b', 'e', 'r', 'z']);
}

#[test]
fn raw_mode_keeps_case_and_punctuation() {
    let counts = count_with("Aa ❛a❜,", CountMode::RawNonWhitespace);
    assert_eq!(counts.get('A'), 1);
    assert_eq!(counts.get('a'), 2);
    assert_eq!(counts.get('❛'), 1);
    assert_eq!(counts.get('❜'), 1);
    assert_eq!(counts.get(','), 1);
    assert_eq!(counts.len(), 5);
}

#[test]
fn raw_mode_reproduces_known_palindrome_counts() {
    let expected: LetterCounts = [
        ('a', 10),
        ('c', 8),
        ('d', 10),
        ('e', 52),
        ('f', 38),
        ('g', 16),
        ('h', 30),
        ('i', 48),
        ('l', 6),
        ('m', 4),
        ('n', 32),
        ('o', 44),
        ('p', 4),
        ('q', 4),
        ('r', 42),
        ('s', 84),
        ('t', 76),
        ('u', 28),
        ('v', 4),
        ('W', 4),
        ('w', 18),
        ('x', 14),
        ('y', 32),
        (':', 4),
        ('*', 4),
        ('-', 26),
        (',', 58),
        ('❛', 60),
        ('❜', 60),
    ]
    .into_iter()
    .collect();

    let counts = count_with(KNOWN_TEXT, CountMode::RawNonWhitespace);
    assert!(
        count_differences(&expected, &counts).is_empty(),
        "differences: {:?}",
        count_differences(&expected, &counts)
    );
    assert_eq!(counts, expected);
}

#[test]
fn differences_are_signed_and_skip_equal_counts() {
    let expected: LetterCounts = [('a', 3), ('b', 1), ('c', 2)].into_iter().collect();
    let actual: LetterCounts = [('a', 1), ('c', 2), ('d', 4)].into_iter().collect();

    let diff = count_differences(&expected, &actual);
    assert_eq!(diff.get(&'a'), Some(&2));
    assert_eq!(diff.get(&'b'), Some(&1));
    assert_eq!(diff.get(&'c'), None);
    assert_eq!(diff.get(&'d'), Some(&-4));
    assert_eq!(diff.len(), 3);
}
