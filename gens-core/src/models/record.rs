use serde::Serialize;

///
/// One pre-binned measurement: the bin start position and its value.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataRecord {
    pub position: u32,
    pub value: f64,
}

impl DataRecord {
    pub fn new(position: u32, value: f64) -> Self {
        DataRecord { position, value }
    }
}

///
/// A record in screen (pixel) coordinates.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScreenPoint {
    pub x: i64,
    pub y: i64,
}

///
/// Flatten points into the `[x0, y0, x1, y1, ...]` layout the renderer reads.
///
pub fn flatten_points(points: &[ScreenPoint]) -> Vec<i64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_flatten_points() {
        let points = vec![ScreenPoint { x: 1, y: 2 }, ScreenPoint { x: 3, y: -4 }];
        assert_eq!(flatten_points(&points), vec![1, 2, 3, -4]);
        assert!(flatten_points(&[]).is_empty());
    }
}
