use crate::{Hash, HashableChar};
use std::collections::HashMap;

/// maps an element to the last (1-based) row of the first sequence it occurred in
///
/// Elements that were never stored map to 0. Hash values in the extended ascii
/// range are kept in a lookup table, everything else goes into a hashmap.
/// The hashmaps only allocate on first insert, so ascii input never allocates.
pub(crate) struct LastOccurrence {
    map_unsigned: HashMap<u64, usize>,
    map_signed: HashMap<i64, usize>,
    extended_ascii: [usize; 256],
}

impl Default for LastOccurrence {
    fn default() -> Self {
        LastOccurrence {
            map_unsigned: HashMap::new(),
            map_signed: HashMap::new(),
            extended_ascii: [0; 256],
        }
    }
}

impl LastOccurrence {
    pub fn get<CharT>(&self, key: CharT) -> usize
    where
        CharT: HashableChar,
    {
        match key.hash_char() {
            Hash::SIGNED(value) if value < 0 => self.map_signed.get(&value).copied().unwrap_or(0),
            Hash::SIGNED(value) => self.get_unsigned(value as u64),
            Hash::UNSIGNED(value) => self.get_unsigned(value),
        }
    }

    pub fn set<CharT>(&mut self, key: CharT, row: usize)
    where
        CharT: HashableChar,
    {
        match key.hash_char() {
            Hash::SIGNED(value) if value < 0 => {
                self.map_signed.insert(value, row);
            }
            Hash::SIGNED(value) => self.set_unsigned(value as u64, row),
            Hash::UNSIGNED(value) => self.set_unsigned(value, row),
        }
    }

    fn get_unsigned(&self, value: u64) -> usize {
        if value <= 255 {
            self.extended_ascii[value as usize]
        } else {
            self.map_unsigned.get(&value).copied().unwrap_or(0)
        }
    }

    fn set_unsigned(&mut self, value: u64, row: usize) {
        if value <= 255 {
            self.extended_ascii[value as usize] = row;
        } else {
            self.map_unsigned.insert(value, row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_defaults_to_zero() {
        let map = LastOccurrence::default();
        assert_eq!(0, map.get('a'));
        assert_eq!(0, map.get('€'));
        assert_eq!(0, map.get(-3_i32));
    }

    #[test]
    fn overwrite_keeps_latest_row() {
        let mut map = LastOccurrence::default();
        map.set('a', 1);
        map.set('a', 4);
        map.set('€', 2);
        map.set(-3_i32, 3);

        assert_eq!(4, map.get('a'));
        assert_eq!(4, map.get(b'a'));
        assert_eq!(2, map.get('€'));
        assert_eq!(3, map.get(-3_i64));
        assert_eq!(0, map.get('b'));
    }
}
