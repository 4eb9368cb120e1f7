// src/marquee/tiling.rs
//! Seamless-loop tiling of marquee content
//!
//! When the content is wider than its container, three copies are laid out
//! side by side at `-width`, `0` and `+width`, and the whole group is
//! translated by `offset - width / 2`. The group itself is centred in the
//! container. As the offset wraps across `[0, width)` the viewport always
//! sees a copy, so the loop never shows a seam or a blank gap.
//!
//! When the content fits, a single untranslated copy is centred instead.

use heapless::Vec;

/// Number of content copies rendered while scrolling
pub const COPY_COUNT: usize = 3;

/// Whether content of `content_width` overflows a container of `container_width`
pub fn is_scroll_needed(content_width: u32, container_width: u32) -> bool {
    content_width > container_width
}

/// Horizontal placement of the content copies for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Tiling {
    /// Left edge of the (untranslated) tiling group, relative to the container
    pub group_left: i32,
    /// Shared translation applied to the whole group
    pub translation: f32,
    /// Left edge of every copy relative to the group
    pub copies: Vec<i32, COPY_COUNT>,
}

impl Tiling {
    /// Compute the tiling for the current offset and measurements.
    pub fn compute(
        offset: f32,
        content_width: u32,
        container_width: u32,
        scroll_needed: bool,
    ) -> Self {
        let group_left = center_in(container_width, content_width);

        if !scroll_needed {
            let mut copies = Vec::new();
            copies.push(0).ok();
            return Self {
                group_left,
                translation: 0.0,
                copies,
            };
        }

        let width = content_width as i32;
        let mut copies = Vec::new();
        for index in 0..COPY_COUNT as i32 {
            copies.push((index - 1) * width).ok();
        }

        Self {
            group_left,
            // Integer half width: the centre bias stays on a whole pixel
            translation: offset - (content_width / 2) as f32,
            copies,
        }
    }

    pub fn copy_count(&self) -> usize {
        self.copies.len()
    }

    /// Absolute left edge of every copy for a container whose left edge is
    /// at `container_left`.
    pub fn copy_origins(&self, container_left: i32) -> impl Iterator<Item = i32> + '_ {
        let base = container_left + self.group_left + round_half_up(self.translation);
        self.copies.iter().map(move |x| base + x)
    }
}

/// Left edge that centres `inner` inside `outer` (negative when it overflows)
fn center_in(outer: u32, inner: u32) -> i32 {
    round_half_up((outer as f32 - inner as f32) / 2.0)
}

/// `floor(v + 0.5)` without relying on std float intrinsics
fn round_half_up(v: f32) -> i32 {
    let shifted = v + 0.5;
    let truncated = shifted as i32;
    if (truncated as f32) > shifted {
        truncated - 1
    } else {
        truncated
    }
}
