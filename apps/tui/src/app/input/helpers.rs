pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves `index` down by `step` rows, stopping at the last row.
pub fn clamp_forward(index: usize, step: usize, len: usize) -> usize {
    (index + step).min(len.saturating_sub(1))
}
