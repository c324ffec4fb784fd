//! Selection movement shared by the list and table components

/// Index after moving down, wrapping to the top
pub fn next(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + 1) % len
    }
}

/// Index after moving up, wrapping to the bottom
pub fn previous(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if selected == 0 {
        len - 1
    } else {
        selected - 1
    }
}

/// Keep a selection inside a list that may have shrunk
pub fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
