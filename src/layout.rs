//! Screen regions the widget draws into and hit-tests against.
//!
//! The widget never looks regions up on its own. The host hands over a
//! [`Layout`] once, either computed with [`Layout::for_size`] or assembled with
//! [`LayoutBuilder`], and validation rejects incomplete or inconsistent
//! arrangements before the widget exists.
//!
//! ```rust
//! use bubbletea_listfilter::layout::{Layout, Rect, Region};
//!
//! let layout = Layout::for_size(80, 24).unwrap();
//! assert_eq!(layout.get(Region::Header), Rect::new(0, 0, 80, 1));
//! assert!(layout.get(Region::Overlay).contains(10, 5));
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// A rectangle in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the rectangle covers no cells.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the rightmost column.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom row.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Returns true if the cell at (`x`, `y`) lies inside the rectangle.
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if `other` lies entirely inside this rectangle.
    pub const fn encloses(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// The named regions of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Page header. Drags starting here are swallowed.
    Header,
    /// The field that mirrors the chosen title.
    MirrorInput,
    /// The modal dialog.
    Overlay,
    /// The filter text field inside the dialog.
    FilterField,
    /// The scrollable dialog body.
    Body,
    /// The list container inside the body.
    List,
}

impl Region {
    /// Every region, in drawing order.
    pub const ALL: [Region; 6] = [
        Region::Header,
        Region::MirrorInput,
        Region::Overlay,
        Region::FilterField,
        Region::Body,
        Region::List,
    ];

    /// The region this one must fit inside, if any.
    pub const fn container(self) -> Option<Region> {
        match self {
            Region::FilterField | Region::Body => Some(Region::Overlay),
            Region::List => Some(Region::Body),
            _ => None,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Region::Header => 0,
            Region::MirrorInput => 1,
            Region::Overlay => 2,
            Region::FilterField => 3,
            Region::Body => 4,
            Region::List => 5,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Header => "header",
            Region::MirrorInput => "mirror input",
            Region::Overlay => "overlay",
            Region::FilterField => "filter field",
            Region::Body => "body",
            Region::List => "list",
        };
        f.write_str(name)
    }
}

/// A validated set of regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rects: [Rect; 6],
}

impl Layout {
    /// Starts an empty builder.
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder::default()
    }

    /// Computes the default arrangement for a screen:
    ///
    /// ```text
    /// row 0       header
    /// row 1       mirror input
    /// row 2       filter field  ┐
    /// rows 3..    body / list   ┘ overlay
    /// ```
    pub fn for_size(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height < 4 {
            return Err(Error::ScreenTooSmall { width, height });
        }
        Ok(Self::arrange(width, height))
    }

    // Callers guarantee width > 0 and height >= 4.
    const fn arrange(width: u16, height: u16) -> Self {
        let body = Rect::new(0, 3, width, height - 3);
        Self {
            rects: [
                Rect::new(0, 0, width, 1),
                Rect::new(0, 1, width, 1),
                Rect::new(0, 2, width, height - 2),
                Rect::new(0, 2, width, 1),
                body,
                body,
            ],
        }
    }

    /// Number of rows from the top of the screen to the lowest region edge.
    pub fn height(&self) -> u16 {
        self.rects.iter().map(Rect::bottom).max().unwrap_or(0)
    }

    /// Returns the rectangle of a region.
    pub fn get(&self, region: Region) -> Rect {
        self.rects[region.slot()]
    }

    /// Returns the innermost region containing the cell, if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<Region> {
        [
            Region::List,
            Region::Body,
            Region::FilterField,
            Region::Overlay,
            Region::MirrorInput,
            Region::Header,
        ]
        .into_iter()
        .find(|r| self.get(*r).contains(x, y))
    }
}

impl Default for Layout {
    /// The arrangement of an 80x24 screen.
    fn default() -> Self {
        Self::arrange(80, 24)
    }
}

/// Collects regions and validates them into a [`Layout`].
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    rects: [Option<Rect>; 6],
}

impl LayoutBuilder {
    /// Sets the rectangle for a region, replacing any earlier one.
    pub fn region(mut self, region: Region, rect: Rect) -> Self {
        self.rects[region.slot()] = Some(rect);
        self
    }

    /// Validates the regions.
    ///
    /// Fails if any region is missing or empty, or if a nested region leaks
    /// out of its container.
    pub fn build(self) -> Result<Layout> {
        let mut rects = [Rect::default(); 6];
        for region in Region::ALL {
            let rect = self.rects[region.slot()].ok_or(Error::MissingRegion { region })?;
            if rect.is_empty() {
                return Err(Error::EmptyRegion { region });
            }
            rects[region.slot()] = rect;
        }
        for region in Region::ALL {
            if let Some(container) = region.container() {
                if !rects[container.slot()].encloses(&rects[region.slot()]) {
                    return Err(Error::RegionOutside { region, container });
                }
            }
        }
        Ok(Layout { rects })
    }
}
