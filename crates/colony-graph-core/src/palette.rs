//! Categorical palette for commodity colors.
//!
//! Every commodity in the planetary economy carries a fixed ordinal in
//! `[MIN_COMMODITY_UID, MAX_COMMODITY_UID]`. The ordinal is normalized onto
//! `[0, 1]` and bucketed into a fixed 20-color categorical palette, so the
//! color of a commodity depends only on its ordinal and never on which other
//! commodities a colony happens to move.
//!
//! With 83 ordinals spread over 20 buckets, several commodities share a
//! color. Colors are a visual aid, not a key.

use crate::color::Color;

/// Smallest commodity ordinal handed out by the catalog.
pub const MIN_COMMODITY_UID: u32 = 1;

/// Largest commodity ordinal handed out by the catalog.
pub const MAX_COMMODITY_UID: u32 = 83;

/// The 20-color categorical palette, in bucket order.
const CATEGORY20: [(u8, u8, u8); 20] = [
    (0x1f, 0x77, 0xb4),
    (0xae, 0xc7, 0xe8),
    (0xff, 0x7f, 0x0e),
    (0xff, 0xbb, 0x78),
    (0x2c, 0xa0, 0x2c),
    (0x98, 0xdf, 0x8a),
    (0xd6, 0x27, 0x28),
    (0xff, 0x98, 0x96),
    (0x94, 0x67, 0xbd),
    (0xc5, 0xb0, 0xd5),
    (0x8c, 0x56, 0x4b),
    (0xc4, 0x9c, 0x94),
    (0xe3, 0x77, 0xc2),
    (0xf7, 0xb6, 0xd2),
    (0x7f, 0x7f, 0x7f),
    (0xc7, 0xc7, 0xc7),
    (0xbc, 0xbd, 0x22),
    (0xdb, 0xdb, 0x8d),
    (0x17, 0xbe, 0xcf),
    (0x9e, 0xda, 0xe5),
];

/// Number of colors in the categorical palette.
pub const PALETTE_LEN: usize = CATEGORY20.len();

/// Returns `true` if `uid` lies within the commodity ordinal range.
pub fn is_valid_uid(uid: u32) -> bool {
    (MIN_COMMODITY_UID..=MAX_COMMODITY_UID).contains(&uid)
}

/// Normalizes a commodity ordinal onto `[0, 1]`.
///
/// Ordinals outside the valid range are clamped.
pub fn normalize_uid(uid: u32) -> f64 {
    let clamped = uid.clamp(MIN_COMMODITY_UID, MAX_COMMODITY_UID);
    f64::from(clamped - MIN_COMMODITY_UID) / f64::from(MAX_COMMODITY_UID - MIN_COMMODITY_UID)
}

/// Maps a normalized value onto a palette bucket.
///
/// Buckets split `[0, 1]` into equal slices; `1.0` falls into the last one.
pub fn bucket(t: f64) -> usize {
    let scaled = (t.clamp(0.0, 1.0) * PALETTE_LEN as f64).floor() as usize;
    scaled.min(PALETTE_LEN - 1)
}

/// Returns the palette color at `index`, wrapping around past the end.
pub fn palette_color(index: usize) -> Color {
    let (r, g, b) = CATEGORY20[index % PALETTE_LEN];
    Color::from_rgb8(r, g, b)
}

/// Returns the display color of the commodity with ordinal `uid`.
///
/// # Examples
///
/// ```
/// use colony_graph_core::palette::commodity_color;
///
/// assert_eq!(commodity_color(1).to_hex(), "#1f77b4");
/// assert_eq!(commodity_color(83).to_hex(), "#9edae5");
/// ```
pub fn commodity_color(uid: u32) -> Color {
    palette_color(bucket(normalize_uid(uid)))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_normalize_bounds() {
        assert_approx_eq!(f64, normalize_uid(MIN_COMMODITY_UID), 0.0);
        assert_approx_eq!(f64, normalize_uid(MAX_COMMODITY_UID), 1.0);
        assert_approx_eq!(f64, normalize_uid(42), 41.0 / 82.0);
    }

    #[test]
    fn test_bucket_edges() {
        assert_eq!(bucket(0.0), 0);
        assert_eq!(bucket(0.049), 0);
        assert_eq!(bucket(0.05), 1);
        assert_eq!(bucket(0.999), 19);
        assert_eq!(bucket(1.0), 19);
    }

    #[test]
    fn test_neighbouring_uids_can_share_a_color() {
        // 1 and 5 both normalize below 1/20.
        assert_eq!(commodity_color(1), commodity_color(5));
        assert_ne!(commodity_color(1), commodity_color(6));
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(PALETTE_LEN), palette_color(0));
        assert_eq!(palette_color(PALETTE_LEN + 3), palette_color(3));
    }

    #[test]
    fn test_valid_uid_range() {
        assert!(!is_valid_uid(0));
        assert!(is_valid_uid(1));
        assert!(is_valid_uid(83));
        assert!(!is_valid_uid(84));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn commodity_color_is_pure(uid in MIN_COMMODITY_UID..=MAX_COMMODITY_UID) {
            prop_assert_eq!(commodity_color(uid), commodity_color(uid));
        }

        #[test]
        fn commodity_color_is_a_palette_member(uid in MIN_COMMODITY_UID..=MAX_COMMODITY_UID) {
            let color = commodity_color(uid);
            prop_assert!((0..PALETTE_LEN).any(|idx| palette_color(idx) == color));
        }

        #[test]
        fn buckets_are_monotonic(a in MIN_COMMODITY_UID..=MAX_COMMODITY_UID, b in MIN_COMMODITY_UID..=MAX_COMMODITY_UID) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(bucket(normalize_uid(lo)) <= bucket(normalize_uid(hi)));
        }
    }
}
