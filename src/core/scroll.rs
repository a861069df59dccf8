//! Scroll progress and the scroll-synchronized stage cursor
//!
//! Browser code measures an element's bounding rectangle and hands the
//! numbers to [`ScrollRange::progress`]. The rest of this module maps that
//! progress onto item indices and animated values.

use super::motion::lerp;

/// Opacity and scale applied to one item of a pinned sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemVisual {
    pub opacity: f64,
    pub scale: f64,
}

impl ItemVisual {
    pub const ACTIVE: ItemVisual = ItemVisual {
        opacity: 1.0,
        scale: 1.0,
    };

    pub const INACTIVE: ItemVisual = ItemVisual {
        opacity: 0.0,
        scale: 0.85,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Inline CSS for the item
    pub fn to_style(&self) -> String {
        format!(
            "opacity: {}; transform: scale({}); visibility: {};",
            self.opacity,
            self.scale,
            if self.is_visible() { "visible" } else { "hidden" }
        )
    }
}

/// Clamp progress into `[0, 1]`, mapping NaN to 0
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Index of the item selected by `progress` out of `len` items.
///
/// `floor(progress * len)` clamped to `[0, len - 1]`; an empty list yields 0.
pub fn active_index(progress: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let p = clamp_progress(progress);
    let raw = (p * len as f64).floor() as usize;
    raw.min(len - 1)
}

pub fn item_visual(index: usize, active: usize) -> ItemVisual {
    if index == active {
        ItemVisual::ACTIVE
    } else {
        ItemVisual::INACTIVE
    }
}

/// How an element's position in the viewport maps to progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollRange {
    /// From the element's top entering at the viewport bottom until its
    /// bottom leaves at the viewport top
    Traverse,
    /// From the element's top reaching the viewport top, for `distance_vh`
    /// percent of the viewport height
    Pinned { distance_vh: f64 },
}

impl ScrollRange {
    pub fn progress(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
        match *self {
            ScrollRange::Traverse => {
                let total = viewport_height + rect_height;
                if total <= 0.0 {
                    return 0.0;
                }
                clamp_progress((viewport_height - rect_top) / total)
            }
            ScrollRange::Pinned { distance_vh } => {
                let distance = viewport_height * distance_vh / 100.0;
                if distance <= 0.0 {
                    return 0.0;
                }
                clamp_progress(-rect_top / distance)
            }
        }
    }

    /// Total height the pinned wrapper needs, in viewport heights
    pub fn wrapper_height_vh(&self) -> f64 {
        match *self {
            ScrollRange::Traverse => 100.0,
            ScrollRange::Pinned { distance_vh } => 100.0 + distance_vh.max(0.0),
        }
    }
}

/// Pin distance for a list of `len` items: half a viewport per item
pub fn pinned_distance_vh(len: usize) -> f64 {
    len as f64 * 50.0
}

/// Whether an element spanning `[rect_top, rect_bottom]` overlaps the
/// viewport shrunk by `margin` px at both edges
pub fn in_view(rect_top: f64, rect_bottom: f64, viewport_height: f64, margin: f64) -> bool {
    rect_top < viewport_height - margin && rect_bottom > margin
}

/// Piecewise-linear mapping of `progress` through `inputs` onto `outputs`.
///
/// Values outside the first/last input are clamped. `inputs` must be sorted
/// ascending and the slices must be the same non-zero length; otherwise the
/// first output (or 0) is returned.
pub fn interpolate(progress: f64, inputs: &[f64], outputs: &[f64]) -> f64 {
    if inputs.is_empty() || inputs.len() != outputs.len() {
        return outputs.first().copied().unwrap_or(0.0);
    }
    let last = inputs.len() - 1;
    if progress <= inputs[0] {
        return outputs[0];
    }
    if progress >= inputs[last] {
        return outputs[last];
    }
    for i in 0..last {
        let (a, b) = (inputs[i], inputs[i + 1]);
        if progress >= a && progress <= b {
            let span = b - a;
            if span <= 0.0 {
                return outputs[i + 1];
            }
            let t = (progress - a) / span;
            return lerp(outputs[i], outputs[i + 1], t);
        }
    }
    outputs[last]
}

/// Vertical scale of the progress fill marker beside a list of `len` items.
/// Starts at one item's share and grows to the full height.
pub fn fill_scale(progress: f64, len: usize) -> f64 {
    if len == 0 {
        return 1.0;
    }
    lerp(1.0 / len as f64, 1.0, clamp_progress(progress))
}
