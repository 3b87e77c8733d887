use itertools::*;

use std::ops::{Range};

///
/// The triangles that make up a range of a triangle strip, as indices into the vertex list
///
/// Triangles with two identical vertices are the joins between separate parts of the strip, so they're skipped.
/// The winding of successive triangles alternates: the rasteriser accepts either winding. Any part of the range
/// beyond the end of the vertex list is ignored.
///
pub fn strip_triangles<'a, TVertex>(vertices: &'a [TVertex], range: Range<usize>) -> impl 'a + Iterator<Item=[usize; 3]>
where
    TVertex: PartialEq,
{
    let end     = range.end.min(vertices.len());
    let start   = range.start.min(end);

    (start..end)
        .tuple_windows()
        .filter(move |(a, b, c)| vertices[*a] != vertices[*b] && vertices[*b] != vertices[*c] && vertices[*a] != vertices[*c])
        .map(|(a, b, c)| [a, b, c])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn joined_quads_produce_two_triangles_each() {
        // Two quads expanded to [a, a, b, c, d, d]
        let strip       = vec![0, 0, 1, 2, 3, 3, 4, 4, 5, 6, 7, 7];
        let triangles   = strip_triangles(&strip, 0..strip.len()).collect::<Vec<_>>();

        assert!(triangles == vec![[1, 2, 3], [2, 3, 4], [7, 8, 9], [8, 9, 10]], "{:?}", triangles);
    }

    #[test]
    fn range_selects_part_of_strip() {
        let strip       = vec![0, 0, 1, 2, 3, 3, 4, 4, 5, 6, 7, 7];
        let triangles   = strip_triangles(&strip, 6..12).collect::<Vec<_>>();

        assert!(triangles == vec![[7, 8, 9], [8, 9, 10]], "{:?}", triangles);
    }

    #[test]
    fn range_past_end_is_clamped() {
        let strip       = vec![0, 0, 1, 2, 3, 3];
        let triangles   = strip_triangles(&strip, 0..100).collect::<Vec<_>>();

        assert!(triangles.len() == 2);
    }
}
