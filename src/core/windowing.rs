use crate::core::{Point, StackedPoint, XDomain};

/// Returns points whose `x` falls inside an optional inclusive domain.
///
/// `None` keeps every point.
pub fn points_in_x_domain<'a>(
    points: &'a [Point],
    domain: Option<XDomain>,
) -> impl Iterator<Item = &'a Point> + 'a {
    points
        .iter()
        .filter(move |point| domain.is_none_or(|domain| domain.contains(point.x)))
}

/// Same filter over stacked points.
pub fn stacked_in_x_domain(
    points: impl IntoIterator<Item = StackedPoint>,
    domain: Option<XDomain>,
) -> impl Iterator<Item = StackedPoint> {
    points
        .into_iter()
        .filter(move |point| domain.is_none_or(|domain| domain.contains(point.x)))
}
