/// The inputs that determine how tall a list viewport should be.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConstraint {
    pub max_height: u32,
    pub row_height: u32,
    pub item_count: usize,
}

impl ViewportConstraint {
    pub fn new(max_height: u32, row_height: u32, item_count: usize) -> Self {
        Self {
            max_height,
            row_height,
            item_count,
        }
    }

    /// Builds a constraint from loosely typed host values.
    ///
    /// Missing, negative, and NaN inputs become `0`; fractional heights are truncated and values
    /// beyond the target range saturate.
    pub fn from_raw(
        max_height: Option<f64>,
        row_height: Option<f64>,
        item_count: Option<i64>,
    ) -> Self {
        Self {
            max_height: lossy_u32(max_height),
            row_height: lossy_u32(row_height),
            item_count: match item_count {
                Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
                _ => 0,
            },
        }
    }

    /// The natural height of the content: `row_height * item_count`, saturating.
    pub fn content_height(&self) -> u64 {
        (self.row_height as u64).saturating_mul(self.item_count as u64)
    }

    pub fn height(&self) -> u32 {
        compute_height(self.max_height, self.item_count, self.row_height)
    }
}

fn lossy_u32(v: Option<f64>) -> u32 {
    // `as` saturates and maps NaN to 0.
    v.map_or(0, |v| v as u32)
}

/// Returns the viewport height to render: the content height, capped at `max_height`.
///
/// An empty list is always `0` tall.
pub fn compute_height(max_height: u32, item_count: usize, row_height: u32) -> u32 {
    if item_count == 0 {
        return 0;
    }
    let content = (row_height as u64).saturating_mul(item_count as u64);
    let height = content.min(max_height as u64) as u32;
    vtrace!(max_height, item_count, row_height, height, "compute_height");
    height
}
