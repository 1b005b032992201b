/// Fixed tables describing every file this tool reads or writes
///
/// The output tables are ordered: iteration order determines the order in
/// which files are produced, which in turn is the order of the confirmation
/// lines and the final summary listing.

/// A named fixed-size PNG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngTarget {
    /// Output file name, written to the working directory
    pub name: &'static str,
    /// Exact pixel width of the output canvas
    pub width: u32,
    /// Exact pixel height of the output canvas
    pub height: u32,
}

/// Source image file name, resolved against the current working directory
pub const SOURCE_FILE: &str = "logo.jpg";

/// The three padded PNG outputs, in generation order
pub const PNG_TARGETS: &[PngTarget] = &[
    PngTarget {
        name: "favicon-16x16.png",
        width: 16,
        height: 16,
    },
    PngTarget {
        name: "favicon-32x32.png",
        width: 32,
        height: 32,
    },
    PngTarget {
        name: "apple-touch-icon-180x180.png",
        width: 180,
        height: 180,
    },
];

/// Output file name of the multi-resolution icon container
pub const ICO_FILE: &str = "favicon.ico";

/// Square frame bounds bundled into the icon container, in frame order
pub const ICO_FRAME_SIZES: &[u32] = &[16, 32, 48];
