/// ATX heading markers, levels 1 to 3.
pub struct Heading;

impl Heading {
    /// Checked in this order so `### ` is never read as `# `.
    pub const MARKERS: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns the level and the text after the marker.
    ///
    /// The marker must start the raw line; indented markers are not headings.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|(marker, level)| line.strip_prefix(*marker).map(|rest| (*level, rest)))
    }
}
