//! Navigation selection logic
//!
//! Pure functions for moving a list cursor and cycling through closed choices.

/// Move a selection by `delta` rows, clamped to the list bounds
///
/// With no current selection the cursor lands on the first row when moving
/// down and on the last row when moving up.
///
/// # Examples
/// ```
/// use sellertui::logic::navigation::move_selection;
///
/// assert_eq!(move_selection(None, 0, 1), None);
/// assert_eq!(move_selection(None, 5, 1), Some(0));
/// assert_eq!(move_selection(None, 5, -1), Some(4));
/// assert_eq!(move_selection(Some(3), 5, 10), Some(4));
/// assert_eq!(move_selection(Some(1), 5, -10), Some(0));
/// ```
pub fn move_selection(current: Option<usize>, list_len: usize, delta: isize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    let last = list_len - 1;
    match current {
        None if delta < 0 => Some(last),
        None => Some(0),
        Some(i) => {
            let target = i.min(last) as isize + delta;
            Some(target.clamp(0, last as isize) as usize)
        }
    }
}

/// Keep a selection inside a list that may have shrunk
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    match (current, list_len) {
        (_, 0) => None,
        (None, _) => Some(0),
        (Some(i), len) => Some(i.min(len - 1)),
    }
}

/// Step to the neighbouring value in `choices`, wrapping at either end
///
/// A value not present in `choices` steps to the first (forward) or last entry.
pub fn cycle<T: Copy + PartialEq>(choices: &[T], current: T, forward: bool) -> T {
    let Some(pos) = choices.iter().position(|c| *c == current) else {
        return if forward {
            choices[0]
        } else {
            choices[choices.len() - 1]
        };
    };

    let len = choices.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    choices[next]
}
