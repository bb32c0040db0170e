// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};

/// Rows of `T` rendered through a list of columns, padded to the widest cell.
pub struct Table<'a, T, C: Column<T>> {
    columns: &'a [C],
    separator: &'a str,
    data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub const fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            separator: "  ",
            data,
        }
    }

    fn column_widths(&self, cells: &[Vec<String>]) -> Vec<usize> {
        let mut widths = vec![0; self.columns.len()];
        for row in cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl<T, C: Column<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = self.column_widths(&cells);

        let last = self.columns.len().saturating_sub(1);
        for (row, data) in cells.into_iter().zip(self.data) {
            for (j, ((col, cell), width)) in self.columns.iter().zip(row).zip(&widths).enumerate() {
                let cell = match col.padding_direction() {
                    // Last column does not need padding if it's left-aligned
                    PaddingDirection::Left if j == last => cell,
                    PaddingDirection::Left => format!("{cell:<width$}"),
                    PaddingDirection::Right => format!("{cell:>width$}"),
                };
                match col.get_color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }

                if j < last {
                    write!(f, "{}", self.separator)?;
                } else {
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn get_color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}
