//! Unit conversion constants for Office Open XML measurements.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_TWIP: i64 = 635;
pub const TWIPS_PER_INCH: i64 = 1440;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_agree() {
        assert_eq!(EMUS_PER_INCH / EMUS_PER_TWIP, TWIPS_PER_INCH);
        assert_eq!(EMUS_PER_PT / EMUS_PER_TWIP, 20);
        assert_eq!(EMUS_PER_INCH / EMUS_PER_PT, 72);
    }
}
