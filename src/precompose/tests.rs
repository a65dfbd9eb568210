use super::*;

#[test]
fn precompose_latin() {
    assert_eq!(precompose(0x0041, 0x0300), Some(0x00C0));
    assert_eq!(precompose(0x0045, 0x0301), Some(0x00C9));
    assert_eq!(precompose(0x0061, 0x0300), Some(0x00E0));
    assert_eq!(precompose(0x00C5, 0x0301), Some(0x01FA));
}

#[test]
fn precompose_kana() {
    assert_eq!(precompose(0x304B, 0x3099), Some(0x304C));
    assert_eq!(precompose(0x30DB, 0x309A), Some(0x30DD));
}

#[test]
fn precompose_table_ends() {
    assert_eq!(precompose(0x0041, 0x0300), Some(0x00C0));
    assert_eq!(precompose(0xFB49, 0x05C2), Some(0xFB2D));
}

#[test]
fn precompose_not_found() {
    assert_eq!(precompose(0x0041, 0x0041), None);
    assert_eq!(precompose(0x0041, 0x0305), None);
    assert_eq!(precompose(0x0300, 0x0041), None);
    assert_eq!(precompose(0xFFFF, 0xFFFF), None);
}

#[test]
fn precompose_zero_pair() {
    assert_eq!(precompose(0x0000, 0x0000), None);
    assert_eq!(precompose(0x0000, 0x0300), None);
}

#[test]
fn table_is_strictly_sorted() {
    assert!(is_strictly_sorted(&COMPOSITIONS));
    assert!(!is_strictly_sorted(&[(2, 0), (1, 0)]));
    assert!(!is_strictly_sorted(&[(1, 0), (1, 0)]));
}

#[test]
fn every_entry_finds_itself() {
    assert_eq!(compositions().len(), 997);
    for (first, second, composed) in compositions() {
        assert_eq!(
            precompose(first, second),
            Some(composed),
            "U+{:04X} U+{:04X}",
            first,
            second
        );
    }
}

#[test]
fn neighbours_of_entries_miss_or_match_exactly() {
    for (first, second, _) in compositions() {
        for probe in [second.wrapping_sub(1), second.wrapping_add(1)] {
            let expected = COMPOSITIONS
                .iter()
                .find(|&&(p, _)| p == pattern(first, probe))
                .map(|&(_, c)| c);
            assert_eq!(precompose(first, probe), expected);
        }
    }
}
