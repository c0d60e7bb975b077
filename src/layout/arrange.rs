//! Row, column and equal-size arrangements over ordered lists of views

use super::constraint::Constraint;
use super::library;
use super::rule::Rules;
use super::view::View;

/// Chains rules between consecutive views.
///
/// Every method returns one group per consecutive pair, so a list of `n`
/// views yields `n - 1` groups and a single view yields none. In each pair the
/// later view is the primary and the earlier one the secondary.
pub trait Arrange {
    /// Lay views out left to right, `spacing` apart. `cross_axis` rules
    /// (e.g. `center_y`) align each pair vertically and `main_axis` rules
    /// (e.g. `width`) relate their horizontal sizes.
    fn row(&self, cross_axis: &Rules, spacing: f64, main_axis: &Rules) -> Vec<Vec<Constraint>>;

    /// Lay views out top to bottom, `spacing` apart
    fn column(&self, cross_axis: &Rules, spacing: f64, main_axis: &Rules)
        -> Vec<Vec<Constraint>>;

    /// Apply `dimension_rules` to each consecutive pair, with no adjacency
    fn equal_in(&self, dimension_rules: &Rules) -> Vec<Vec<Constraint>>;
}

impl Arrange for [View] {
    fn row(&self, cross_axis: &Rules, spacing: f64, main_axis: &Rules) -> Vec<Vec<Constraint>> {
        let rules = library::to_right(spacing) + cross_axis.clone() + main_axis.clone();
        chain(self, &rules)
    }

    fn column(
        &self,
        cross_axis: &Rules,
        spacing: f64,
        main_axis: &Rules,
    ) -> Vec<Vec<Constraint>> {
        let rules = library::below(spacing) + cross_axis.clone() + main_axis.clone();
        chain(self, &rules)
    }

    fn equal_in(&self, dimension_rules: &Rules) -> Vec<Vec<Constraint>> {
        chain(self, dimension_rules)
    }
}

fn chain(views: &[View], rules: &Rules) -> Vec<Vec<Constraint>> {
    views
        .windows(2)
        .map(|pair| pair[1].position_relative_to(&pair[0], rules))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn views(n: usize) -> Vec<View> {
        (0..n).map(|i| View::new(format!("v{}", i))).collect()
    }

    #[test]
    fn test_single_view_yields_nothing() {
        let one = views(1);
        assert!(one.row(&Rules::new(), 8.0, &Rules::new()).is_empty());
        assert!(one.column(&library::center_x(0.0), 8.0, &Rules::new()).is_empty());
        assert!(one.equal_in(&library::equally_sized()).is_empty());
    }

    #[test]
    fn test_row_group_per_pair() {
        let list = views(4);
        let groups = list.row(&library::center_y(0.0), 8.0, &library::width(0.0, 1.0));
        assert_eq!(groups.len(), 3);
        let second: Vec<String> = groups[1].iter().map(|c| c.to_string()).collect();
        assert_eq!(
            second,
            vec![
                "v2.left == v1.right + 8",
                "v2.center_y == v1.center_y",
                "v2.width == v1.width",
            ]
        );
    }

    #[test]
    fn test_column_stacks_below() {
        let list = views(3);
        let groups = list.column(&Rules::new(), 4.0, &Rules::new());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0].to_string(), "v1.top == v0.bottom + 4");
    }

    #[test]
    fn test_equal_in_has_no_adjacency() {
        let list = views(3);
        let groups = list.equal_in(&library::equally_sized());
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 2));
        assert_eq!(groups[1][0].to_string(), "v2.width == v1.width");
    }
}
