use std::collections::BTreeSet;

use thiserror::Error;

/// The restaurant floor has 20 physical tables, numbered 1..=20.
pub const MAX_TABLE: i32 = 20;

/// All valid assignment bits set, i.e. every table assigned.
pub const FULL_MASK: i32 = (1 << MAX_TABLE) - 1;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum TableAssignmentError {
    #[error("table number {0} is outside the valid range 1..={MAX_TABLE}")]
    OutOfRange(i32),
}

/// Decodes a stored assignment mask into the set of table numbers.
/// Bit (n - 1) set means table n is assigned; bits past `MAX_TABLE` carry no
/// meaning and are ignored.
pub fn decode_tables(mask: i32) -> BTreeSet<i32> {
    (1..=MAX_TABLE).filter(|n| mask & (1 << (n - 1)) != 0).collect()
}

/// Encodes a set of table numbers into an assignment mask. Any number
/// outside 1..=`MAX_TABLE` is rejected rather than silently overflowing
/// into unrelated bits.
pub fn encode_tables(tables: &BTreeSet<i32>) -> Result<i32, TableAssignmentError> {
    let mut mask = 0;
    for &n in tables {
        if !(1..=MAX_TABLE).contains(&n) {
            return Err(TableAssignmentError::OutOfRange(n));
        }
        mask |= 1 << (n - 1);
    }
    Ok(mask)
}

/// Returns `mask` with every table in `tables` assigned.
pub fn add_tables(mask: i32, tables: &BTreeSet<i32>) -> Result<i32, TableAssignmentError> {
    Ok(mask | encode_tables(tables)?)
}

/// Returns `mask` with every table in `tables` unassigned.
pub fn remove_tables(mask: i32, tables: &BTreeSet<i32>) -> Result<i32, TableAssignmentError> {
    Ok(mask & !encode_tables(tables)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tables: &[i32]) -> BTreeSet<i32> {
        tables.iter().copied().collect()
    }

    #[test]
    fn empty_set_is_zero_mask() {
        assert_eq!(encode_tables(&BTreeSet::new()), Ok(0));
        assert_eq!(decode_tables(0), BTreeSet::new());
    }

    #[test]
    fn single_tables_map_to_single_bits() {
        assert_eq!(encode_tables(&set(&[1])), Ok(0b1));
        assert_eq!(encode_tables(&set(&[5])), Ok(0b1_0000));
        assert_eq!(encode_tables(&set(&[20])), Ok(1 << 19));
    }

    #[test]
    fn decode_inverts_encode() {
        let assigned = set(&[1, 2, 7, 13, 20]);
        let mask = encode_tables(&assigned).unwrap();
        assert_eq!(decode_tables(mask), assigned);
    }

    #[test]
    fn encode_inverts_decode_for_every_valid_mask() {
        for mask in 0..=FULL_MASK {
            assert_eq!(encode_tables(&decode_tables(mask)), Ok(mask));
        }
    }

    #[test]
    fn out_of_range_tables_are_rejected() {
        assert_eq!(
            encode_tables(&set(&[0])),
            Err(TableAssignmentError::OutOfRange(0))
        );
        assert_eq!(
            encode_tables(&set(&[21])),
            Err(TableAssignmentError::OutOfRange(21))
        );
        assert_eq!(
            encode_tables(&set(&[4, -3])),
            Err(TableAssignmentError::OutOfRange(-3))
        );
    }

    #[test]
    fn bits_past_table_twenty_are_ignored_on_decode() {
        assert_eq!(decode_tables(1 << 20), BTreeSet::new());
        assert_eq!(decode_tables(FULL_MASK | (1 << 25)), decode_tables(FULL_MASK));
    }

    #[test]
    fn add_then_remove_restores_the_original_assignment() {
        let original = encode_tables(&set(&[2, 9])).unwrap();
        let grown = add_tables(original, &set(&[5])).unwrap();
        assert_eq!(decode_tables(grown), set(&[2, 5, 9]));
        assert_eq!(remove_tables(grown, &set(&[5])), Ok(original));
    }

    #[test]
    fn adding_an_already_assigned_table_is_idempotent() {
        let mask = encode_tables(&set(&[3])).unwrap();
        assert_eq!(add_tables(mask, &set(&[3])), Ok(mask));
    }

    #[test]
    fn removing_an_unassigned_table_is_a_no_op() {
        let mask = encode_tables(&set(&[3])).unwrap();
        assert_eq!(remove_tables(mask, &set(&[11])), Ok(mask));
    }
}
