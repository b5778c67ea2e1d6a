// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed color cycles.
//!
//! Colors are assigned by position (branch index, book index), never by
//! content, so the same layout input always yields the same colors.

use alloc::vec::Vec;

use peniko::color::Rgba8;

const fn rgb(hex: u32) -> Rgba8 {
    let [_, r, g, b] = hex.to_be_bytes();
    Rgba8 { r, g, b, a: 0xff }
}

const BRANCH_COLORS: [Rgba8; 8] = [
    rgb(0x4a_7c_59),
    rgb(0x8b_5a_2b),
    rgb(0x5b_7d_b1),
    rgb(0xb3_6b_8f),
    rgb(0xc9_a2_27),
    rgb(0x6a_5a_cd),
    rgb(0x2e_8b_8b),
    rgb(0xcd_5c_5c),
];

const BOOK_COLORS: [Rgba8; 6] = [
    rgb(0x7b_2d_26),
    rgb(0x2d_4a_3e),
    rgb(0x1e_3a_5f),
    rgb(0x5c_3d_2e),
    rgb(0x4a_3b_5c),
    rgb(0x6b_5b_2e),
];

/// An ordered color cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba8>,
}

impl Palette {
    /// Creates a palette; an empty list falls back to [`Palette::branches`].
    #[must_use]
    pub fn new(colors: Vec<Rgba8>) -> Self {
        if colors.is_empty() {
            return Self::branches();
        }
        Self { colors }
    }

    /// Foliage colors used for tree branches.
    #[must_use]
    pub fn branches() -> Self {
        Self {
            colors: BRANCH_COLORS.to_vec(),
        }
    }

    /// Leather-binding colors used for shelf books.
    #[must_use]
    pub fn books() -> Self {
        Self {
            colors: BOOK_COLORS.to_vec(),
        }
    }

    /// Color for the `index`-th item, cycling.
    #[must_use]
    pub fn color(&self, index: usize) -> Rgba8 {
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; palettes hold at least one color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::branches()
    }
}
