//! Selection from caller-supplied item lists

use crate::error::{GenError, GenResult};
use crate::source::{UniformSource, partial_shuffle};

/// Pick `count` items, in draw order.
///
/// With `unique` the draw is without replacement and `count` may not exceed
/// the list length. Without it every pick is independent.
pub fn select_from_list<S, T>(
    source: &mut S,
    items: &[T],
    count: usize,
    unique: bool,
) -> GenResult<Vec<T>>
where
    S: UniformSource + ?Sized,
    T: Clone,
{
    if count == 0 {
        return Ok(Vec::new());
    }
    if (unique && count > items.len()) || items.is_empty() {
        return Err(GenError::InsufficientItems {
            requested: count,
            available: items.len(),
        });
    }

    log::debug!(
        "Selecting {} of {} items ({})",
        count,
        items.len(),
        if unique { "unique" } else { "with repeats" }
    );

    if unique {
        let mut pool: Vec<usize> = (0..items.len()).collect();
        partial_shuffle(source, &mut pool, count);
        Ok(pool[..count].iter().map(|&i| items[i].clone()).collect())
    } else {
        Ok((0..count)
            .map(|_| items[source.index(items.len())].clone())
            .collect())
    }
}
