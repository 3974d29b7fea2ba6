//! Growth tests: reallocation must not disturb cells already written

use tally::{build_tape, Symbol, Tape};

#[test]
fn test_large_tape_layout_intact() {
    let count = 10_000;
    let tape = build_tape(count).expect("tape builds");

    assert_eq!(tape.len(), count + 3);
    assert!(tape.capacity() >= tape.len());
    assert_eq!(tape.get(0), Some(Symbol::Blank));
    assert_eq!(tape.tally_len(), count);
    assert!(tape.as_slice()[1..=count].iter().all(|&s| s == Symbol::Zero));
    assert_eq!(tape.get(count + 1), Some(Symbol::Blank));
    assert_eq!(tape.get(count + 2), Some(Symbol::Blank));
    assert_eq!(tape.get(count + 3), None);
}

#[test]
fn test_appends_survive_every_reallocation() {
    let mut tape = Tape::new();
    let mut reallocations = 0;
    for i in 0..5_000usize {
        let before = tape.capacity();
        let symbol = if i % 3 == 0 { Symbol::One } else { Symbol::Zero };
        tape.append(symbol).expect("append succeeds");
        if tape.capacity() != before {
            reallocations += 1;
            for (j, cell) in tape.as_slice()[1..].iter().enumerate() {
                let expected = if j % 3 == 0 { Symbol::One } else { Symbol::Zero };
                assert_eq!(*cell, expected, "cell {} after growth", j + 1);
            }
        }
    }
    assert!(reallocations > 0);
    assert_eq!(tape.get(0), Some(Symbol::Blank));
}

#[test]
fn test_capacity_grows_geometrically() {
    // Doubling keeps the number of reallocations logarithmic in the length
    let mut tape = Tape::new();
    let mut reallocations = 0;
    for _ in 0..65_536 {
        let before = tape.capacity();
        tape.append(Symbol::Zero).expect("append succeeds");
        if tape.capacity() != before {
            reallocations += 1;
        }
    }
    assert!(reallocations <= 20, "{reallocations} reallocations");
}

#[test]
fn test_terminator_slack_topped_up() {
    let mut tape = Tape::new();
    tape.reserve_slack(2).expect("slack reserved");
    assert!(tape.capacity() >= tape.len() + 2);
    let capacity = tape.capacity();
    tape.append(Symbol::Blank).expect("append succeeds");
    tape.append(Symbol::Blank).expect("append succeeds");
    assert_eq!(tape.capacity(), capacity);
}
