/// Formats numeric byte counts into human-readable strings with
/// appropriate units.
///
/// Uses binary prefixes (1024 bytes = 1 KB) and scales automatically
/// from bytes up to terabytes. Values of 1 KB and above are printed
/// with two decimal places; plain byte counts are printed whole.
///
/// # Examples
///
/// ```
/// use toplist::traits::ByteSize;
///
/// assert_eq!(50_u64.format_size(), "50 bytes");
/// assert_eq!(1024_u64.format_size(), "1.00 KB");
/// assert_eq!((1536_u64).format_size(), "1.50 KB");
/// assert_eq!((1024 * 1024 * 1024_u64).format_size(), "1.00 GB");
/// ```
pub trait ByteSize {
    /// Returns the value formatted with the largest unit it reaches.
    fn format_size(&self) -> String;
}

impl ByteSize for u64 {
    fn format_size(&self) -> String {
        const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
        const STEP: u64 = 1024;

        if *self < STEP {
            return format!("{} bytes", self);
        }

        let mut unit = 0;
        let mut divisor = STEP;
        while unit + 1 < UNITS.len() && *self >= divisor * STEP {
            divisor *= STEP;
            unit += 1;
        }

        format!("{:.2} {}", *self as f64 / divisor as f64, UNITS[unit])
    }
}
