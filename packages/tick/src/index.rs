// Initialized Tick Index
//
// Sorted list of initialized tick indices. Stands in for a tick bitmap:
// lookups are a binary search instead of a word scan.

use soroban_sdk::Vec;

/// Insert `tick` keeping the list sorted. Returns false if already present.
pub fn insert_tick(ticks: &mut Vec<i32>, tick: i32) -> bool {
    match ticks.binary_search(tick) {
        Ok(_) => false,
        Err(pos) => {
            ticks.insert(pos, tick);
            true
        }
    }
}

/// Find the next initialized tick in the given direction.
///
/// Moving down returns the greatest tick `<= current_tick` (the current
/// tick's own boundary is crossed when leaving it downwards). Moving up
/// returns the least tick `> current_tick`.
pub fn find_next_initialized_tick(
    ticks: &Vec<i32>,
    current_tick: i32,
    zero_for_one: bool,
) -> Option<i32> {
    let search = ticks.binary_search(current_tick);

    if zero_for_one {
        match search {
            Ok(pos) => ticks.get(pos),
            Err(0) => None,
            Err(pos) => ticks.get(pos - 1),
        }
    } else {
        match search {
            Ok(pos) => ticks.get(pos + 1),
            Err(pos) => ticks.get(pos),
        }
    }
}
