/// Module placement: function patterns, data bits and the fixed mask
use crate::encoder::format::{self, FORMAT_BITS};
use crate::encoder::function_mask::alignment_pattern_positions;
use crate::encoder::mask::apply_mask;
use crate::models::{BitMatrix, Version};

/// Construction state of a single module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// Data module not yet written
    Empty,
    /// Function module whose value is written after data placement
    Reserved,
    /// Function pattern module
    Function(bool),
    /// Data module carrying a bitstream bit
    Data(bool),
}

impl Module {
    pub fn is_function(&self) -> bool {
        matches!(self, Module::Reserved | Module::Function(_))
    }

    /// Dark or light; unwritten modules are light
    pub fn is_dark(&self) -> bool {
        matches!(self, Module::Function(true) | Module::Data(true))
    }
}

/// Finder pattern bitmap, row-major
pub const FINDER_PATTERN: [[bool; 7]; 7] = {
    let mut grid = [[false; 7]; 7];
    let mut y = 0;
    while y < 7 {
        let mut x = 0;
        while x < 7 {
            let dx = if x > 3 { x - 3 } else { 3 - x };
            let dy = if y > 3 { y - 3 } else { 3 - y };
            let dist = if dx > dy { dx } else { dy };
            grid[y][x] = dist != 2;
            x += 1;
        }
        y += 1;
    }
    grid
};

/// Builds the module grid for one version
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    version: Version,
    size: usize,
    modules: Vec<Module>,
}

impl MatrixBuilder {
    /// Lay out every function pattern and reserve the format areas
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut builder = Self {
            version,
            size,
            modules: vec![Module::Empty; size * size],
        };

        builder.draw_finder(3, 3);
        builder.draw_finder(size - 4, 3);
        builder.draw_finder(3, size - 4);
        builder.draw_alignment_patterns();
        builder.draw_timing_patterns();
        // Dark module
        builder.place_function(8, size - 8, true);
        builder.draw_version_info();
        builder.reserve_format_areas();

        builder
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn module(&self, x: usize, y: usize) -> Module {
        self.modules[y * self.size + x]
    }

    /// Modules left for the bitstream
    pub fn data_module_count(&self) -> usize {
        self.modules
            .iter()
            .filter(|m| matches!(m, Module::Empty | Module::Data(_)))
            .count()
    }

    /// Write `bits` into the free modules in placement order.
    ///
    /// Returns the number of bits consumed; modules past the end of the
    /// bitstream stay light.
    pub fn place_data(&mut self, bits: &[bool]) -> usize {
        let mut next = bits.iter();
        let mut consumed = 0;
        for (x, y) in data_traversal(self.size) {
            let index = y * self.size + x;
            if self.modules[index] != Module::Empty {
                continue;
            }
            match next.next() {
                Some(&bit) => {
                    self.modules[index] = Module::Data(bit);
                    consumed += 1;
                }
                None => break,
            }
        }
        debug_assert_eq!(consumed, bits.len(), "bitstream longer than data area");
        consumed
    }

    /// Resolve every module, writing the format bits, without masking
    pub fn build_unmasked(mut self) -> BitMatrix {
        self.draw_format_bits();

        let mut matrix = BitMatrix::new(self.size, self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                matrix.set(x, y, self.module(x, y).is_dark());
            }
        }
        matrix
    }

    /// Resolve every module and apply the fixed mask
    pub fn build(self) -> BitMatrix {
        let mut matrix = self.build_unmasked();
        apply_mask(&mut matrix);
        matrix
    }

    fn place_function(&mut self, x: usize, y: usize, dark: bool) {
        let index = y * self.size + x;
        debug_assert!(
            matches!(self.modules[index], Module::Empty | Module::Reserved),
            "module ({}, {}) written twice",
            x,
            y
        );
        self.modules[index] = Module::Function(dark);
    }

    /// Finder pattern plus its light separator ring, centred on (cx, cy)
    fn draw_finder(&mut self, cx: usize, cy: usize) {
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if x < 0 || y < 0 || x >= self.size as isize || y >= self.size as isize {
                    continue;
                }
                let dist = dx.abs().max(dy.abs());
                self.place_function(x as usize, y as usize, dist != 2 && dist != 4);
            }
        }
    }

    fn draw_alignment_patterns(&mut self) {
        let positions = alignment_pattern_positions(self.version.number());
        let size = self.size;
        for &cx in &positions {
            for &cy in &positions {
                // Skip the three finder corners
                let in_tl = cx <= 8 && cy <= 8;
                let in_tr = cx >= size - 9 && cy <= 8;
                let in_bl = cx <= 8 && cy >= size - 9;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                for dy in -2isize..=2 {
                    for dx in -2isize..=2 {
                        let dist = dx.abs().max(dy.abs());
                        let x = (cx as isize + dx) as usize;
                        let y = (cy as isize + dy) as usize;
                        self.place_function(x, y, dist != 1);
                    }
                }
            }
        }
    }

    /// Row 6 and column 6 between the separators, dark at even offsets
    fn draw_timing_patterns(&mut self) {
        for i in 8..self.size - 8 {
            let dark = i % 2 == 0;
            // Alignment patterns on the timing lines already carry the same values
            if self.module(i, 6) == Module::Empty {
                self.place_function(i, 6, dark);
            }
            if self.module(6, i) == Module::Empty {
                self.place_function(6, i, dark);
            }
        }
    }

    fn draw_version_info(&mut self) {
        let Some(info) = format::version_info(self.version.number()) else {
            return;
        };
        for block in format::version_positions(self.size) {
            for (i, &(x, y)) in block.iter().enumerate() {
                self.place_function(x, y, format::bit(info, i));
            }
        }
    }

    fn reserve_format_areas(&mut self) {
        for copy in format::format_positions(self.size) {
            for (x, y) in copy {
                let index = y * self.size + x;
                debug_assert_eq!(self.modules[index], Module::Empty);
                self.modules[index] = Module::Reserved;
            }
        }
    }

    fn draw_format_bits(&mut self) {
        for copy in format::format_positions(self.size) {
            for (i, &(x, y)) in copy.iter().enumerate() {
                self.place_function(x, y, format::bit(FORMAT_BITS as u32, i));
            }
        }
    }
}

/// Module visiting order for data placement, as `(x, y)`.
///
/// Two-column strips from the right edge, skipping the timing column; the first
/// strip runs bottom to top and directions alternate. Within a row the right
/// column comes first. Function modules are included; callers skip them.
pub fn data_traversal(size: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(size * size);
    let mut upward = true;
    let mut col = size as isize - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        let right = col as usize;
        let left = right - 1;
        for step in 0..size {
            let row = if upward { size - 1 - step } else { step };
            order.push((right, row));
            order.push((left, row));
        }

        upward = !upward;
        col -= 2;
    }

    order
}

/// Lay out `bits` for `version` and return the masked matrix
pub fn build_matrix(version: Version, bits: &[bool]) -> BitMatrix {
    let mut builder = MatrixBuilder::new(version);
    builder.place_data(bits);
    builder.build()
}
