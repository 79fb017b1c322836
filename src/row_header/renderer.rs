use std::rc::Rc;

use crate::render::HeaderCell;

/// Renders the label cell for a row index.
pub type RowHeaderCellRenderer = Rc<dyn Fn(u32) -> HeaderCell>;

/// Default row label: the 1-based decimal row number.
pub fn render_default_row_header(row_index: u32) -> HeaderCell {
    let label = (u64::from(row_index) + 1).to_string();
    HeaderCell::row(row_index, Some(label))
}

/// The renderer used when none is supplied.
pub fn default_renderer() -> RowHeaderCellRenderer {
    Rc::new(render_default_row_header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "1")]
    #[test_case(41, "42")]
    #[test_case(u32::MAX, "4294967296" ; "no overflow at max index")]
    fn labels_are_one_based(index: u32, expected: &str) {
        let cell = render_default_row_header(index);
        assert_eq!(cell.name.as_deref(), Some(expected));
        assert_eq!(cell.index, index);
    }
}
