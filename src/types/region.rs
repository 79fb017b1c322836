use serde::{Deserialize, Serialize};

/// Shape of a selection region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionCardinality {
    /// Bounded cell range (both rows and columns given)
    #[default]
    Cells,
    /// Entire row(s) selected
    FullRows,
    /// Entire column(s) selected
    FullColumns,
    /// All cells selected (corner click)
    FullTable,
}

/// A selection descriptor.
///
/// Missing `rows` means "every row"; missing `cols` means "every column".
/// Ranges are inclusive and may be given in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<(u32, u32)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<(u32, u32)>,
}

impl Region {
    /// Create a cell range region
    pub fn cell_range(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self {
            rows: Some((start_row, end_row)),
            cols: Some((start_col, end_col)),
        }
    }

    /// Create a full-row region
    pub fn row_range(start_row: u32, end_row: u32) -> Self {
        Self {
            rows: Some((start_row, end_row)),
            cols: None,
        }
    }

    /// Create a full-column region
    pub fn column_range(start_col: u32, end_col: u32) -> Self {
        Self {
            rows: None,
            cols: Some((start_col, end_col)),
        }
    }

    /// Create a select-all region
    pub fn all() -> Self {
        Self {
            rows: None,
            cols: None,
        }
    }

    pub fn cardinality(&self) -> RegionCardinality {
        match (self.rows, self.cols) {
            (Some(_), Some(_)) => RegionCardinality::Cells,
            (Some(_), None) => RegionCardinality::FullRows,
            (None, Some(_)) => RegionCardinality::FullColumns,
            (None, None) => RegionCardinality::FullTable,
        }
    }

    /// Normalized (min, max) row bounds, if the region is row-bounded.
    pub fn row_bounds(&self) -> Option<(u32, u32)> {
        self.rows.map(|(a, b)| (a.min(b), a.max(b)))
    }

    /// True when `row` lies inside the row bounds (always true if unbounded).
    pub fn contains_row(&self, row: u32) -> bool {
        self.row_bounds()
            .map_or(true, |(min, max)| (min..=max).contains(&row))
    }
}

/// Region algebra over a selection set. The set itself is never mutated.
pub struct Regions;

impl Regions {
    /// Full-row region covering exactly `row`.
    pub fn row(row: u32) -> Region {
        Region::row_range(row, row)
    }

    /// True iff some region covers the entire row at `row`.
    ///
    /// Cell ranges never count, even when they span every populated column.
    pub fn has_full_row(regions: &[Region], row: u32) -> bool {
        regions.iter().any(|region| match region.cardinality() {
            RegionCardinality::FullTable => true,
            RegionCardinality::FullRows => region.contains_row(row),
            RegionCardinality::Cells | RegionCardinality::FullColumns => false,
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Region::cell_range(0, 0, 1, 1), RegionCardinality::Cells ; "cells")]
    #[test_case(Region::row_range(2, 4), RegionCardinality::FullRows ; "rows")]
    #[test_case(Region::column_range(0, 3), RegionCardinality::FullColumns ; "columns")]
    #[test_case(Region::all(), RegionCardinality::FullTable ; "table")]
    fn cardinality(region: Region, expected: RegionCardinality) {
        assert_eq!(region.cardinality(), expected);
    }

    #[test]
    fn full_row_coverage_accepts_reversed_ranges() {
        let regions = [Region::row_range(7, 3)];
        assert!(Regions::has_full_row(&regions, 3));
        assert!(Regions::has_full_row(&regions, 5));
        assert!(Regions::has_full_row(&regions, 7));
        assert!(!Regions::has_full_row(&regions, 8));
        assert!(!Regions::has_full_row(&regions, 2));
    }

    #[test]
    fn partial_regions_do_not_select_row() {
        let regions = [Region::cell_range(4, 0, 4, 99), Region::column_range(0, 5)];
        assert!(!Regions::has_full_row(&regions, 4));
    }

    #[test]
    fn full_table_selects_every_row() {
        let regions = [Region::all()];
        assert!(Regions::has_full_row(&regions, 0));
        assert!(Regions::has_full_row(&regions, u32::MAX));
    }

    #[test]
    fn empty_selection_selects_nothing() {
        assert!(!Regions::has_full_row(&[], 0));
    }

    #[test]
    fn region_deserializes_from_js_shape() {
        let region: Region = serde_json::from_str(r#"{"rows":[1,2]}"#).unwrap();
        assert_eq!(region, Region::row_range(1, 2));
        assert_eq!(Regions::row(3), Region::row_range(3, 3));
    }
}
