//! PDF rendering of a result set.
//!
//! Layout is computed first as plain data ([`layout`]) and only then drawn
//! with `printpdf`, so page breaking can be checked without decoding a PDF.
//! Text uses the built-in Helvetica faces; no font files are needed.

use anyhow::Context;
use placescout_core::{CategoryResultSet, EnrichedPlace};
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use super::{wrap, NO_DESCRIPTION, REPORT_TITLE, UNAVAILABLE, UNRATED};

/// A4 portrait.
pub(super) const PAGE_WIDTH_MM: f32 = 210.0;
pub(super) const PAGE_HEIGHT_MM: f32 = 297.0;
pub(super) const MARGIN_MM: f32 = 20.0;

const FOOTER_Y_MM: f32 = 10.0;

const PT_TO_MM: f32 = 0.3528;

/// Rough Helvetica advance width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;

/// Characters per body line that fit between the margins.
const BODY_WRAP_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Style {
    Title,
    Heading,
    Name,
    Body,
}

impl Style {
    fn size_pt(self) -> f32 {
        match self {
            Self::Title => 18.0,
            Self::Heading => 16.0,
            Self::Name => 14.0,
            Self::Body => 12.0,
        }
    }

    fn bold(self) -> bool {
        matches!(self, Self::Title | Self::Heading | Self::Name)
    }

    fn line_height_mm(self) -> f32 {
        self.size_pt() * PT_TO_MM * 1.4
    }
}

/// One line of text placed on a page. `top_mm` is the baseline distance from
/// the top edge.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PlacedLine {
    pub text: String,
    pub style: Style,
    pub x_mm: f32,
    pub top_mm: f32,
    pub underline: bool,
}

impl PlacedLine {
    fn width_mm(&self) -> f32 {
        estimated_width_mm(&self.text, self.style)
    }
}

#[derive(Debug, Default)]
pub(super) struct PdfPage {
    pub lines: Vec<PlacedLine>,
}

/// A run of lines that is kept on one page, followed by `gap_after` lines of
/// vertical space in the block's last style.
struct Block {
    lines: Vec<(String, Style, bool)>,
    centered: bool,
    gap_after: f32,
}

impl Block {
    fn gap_mm(&self) -> f32 {
        self.lines
            .last()
            .map_or(0.0, |(_, s, _)| s.line_height_mm() * self.gap_after)
    }

    fn height_mm(&self) -> f32 {
        let text: f32 = self.lines.iter().map(|(_, s, _)| s.line_height_mm()).sum();
        text + self.gap_mm()
    }
}

fn estimated_width_mm(text: &str, style: Style) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let chars = text.chars().count() as f32;
    chars * style.size_pt() * AVG_GLYPH_EM * PT_TO_MM
}

fn place_block(place: &EnrichedPlace) -> Block {
    let summary = &place.summary;
    let detail = &place.detail;

    let rating = summary
        .rating
        .map_or_else(|| UNRATED.to_owned(), |r| format!("{r:.1}"));
    let description = detail.description.as_deref().unwrap_or(NO_DESCRIPTION);

    let mut lines = vec![
        (summary.name.clone(), Style::Name, false),
        (
            format!(
                "Address: {}",
                summary.address.as_deref().unwrap_or(UNAVAILABLE)
            ),
            Style::Body,
            false,
        ),
        (format!("Rating: {rating}"), Style::Body, false),
        (
            format!("Phone: {}", detail.phone.as_deref().unwrap_or(UNAVAILABLE)),
            Style::Body,
            false,
        ),
        (
            format!(
                "Website: {}",
                detail.website.as_deref().unwrap_or(UNAVAILABLE)
            ),
            Style::Body,
            false,
        ),
    ];
    lines.extend(
        wrap(&format!("Description: {description}"), BODY_WRAP_CHARS)
            .into_iter()
            .map(|l| (l, Style::Body, false)),
    );

    Block {
        lines,
        centered: false,
        gap_after: 1.5,
    }
}

fn blocks(results: &CategoryResultSet) -> Vec<Block> {
    let mut blocks = vec![Block {
        lines: vec![(REPORT_TITLE.to_owned(), Style::Title, false)],
        centered: true,
        gap_after: 1.0,
    }];

    if results.is_empty() {
        blocks.push(Block {
            lines: vec![("No places collected.".to_owned(), Style::Body, false)],
            centered: false,
            gap_after: 0.0,
        });
    }

    for category in results.iter() {
        let heading = (category.label.to_uppercase(), Style::Heading, true);
        let mut places = category.places.iter();

        // The heading travels with the first place so it never ends a page.
        let mut first = match places.next() {
            Some(place) => place_block(place),
            None => Block {
                lines: vec![("(no places found)".to_owned(), Style::Body, false)],
                centered: false,
                gap_after: 1.5,
            },
        };
        first.lines.insert(0, heading);
        blocks.push(first);
        blocks.extend(places.map(place_block));
    }

    blocks
}

/// Breaks the result set into pages. A block moves to a fresh page when it
/// does not fit below the current one; a block taller than a whole page is
/// split line by line.
pub(super) fn layout(results: &CategoryResultSet) -> Vec<PdfPage> {
    let bottom = PAGE_HEIGHT_MM - MARGIN_MM;
    let mut pages = vec![PdfPage::default()];
    let mut cursor = MARGIN_MM;

    for block in blocks(results) {
        let on_fresh_page = pages.last().map_or(true, |p| p.lines.is_empty());
        if !on_fresh_page && cursor + block.height_mm() > bottom {
            pages.push(PdfPage::default());
            cursor = MARGIN_MM;
        }

        for (text, style, underline) in &block.lines {
            let height = style.line_height_mm();
            let page_has_lines = pages.last().is_some_and(|p| !p.lines.is_empty());
            if page_has_lines && cursor + height > bottom {
                pages.push(PdfPage::default());
                cursor = MARGIN_MM;
            }
            cursor += height;

            let x_mm = if block.centered {
                ((PAGE_WIDTH_MM - estimated_width_mm(text, *style)) / 2.0).max(MARGIN_MM)
            } else {
                MARGIN_MM
            };
            if let Some(page) = pages.last_mut() {
                page.lines.push(PlacedLine {
                    text: text.clone(),
                    style: *style,
                    x_mm,
                    top_mm: cursor,
                    underline: *underline,
                });
            }
        }

        cursor += block.gap_mm();
    }

    pages
}

/// Renders `results` as a complete PDF document.
///
/// # Errors
///
/// Returns an error if a built-in font cannot be registered or the document
/// cannot be serialized.
pub(super) fn render_pdf(results: &CategoryResultSet) -> anyhow::Result<Vec<u8>> {
    let pages = layout(results);

    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("failed to register Helvetica")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("failed to register Helvetica-Bold")?;

    for (i, page) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            doc.get_page(page_idx).get_layer(layer_idx)
        };

        for line in &page.lines {
            let font = if line.style.bold() { &bold } else { &regular };
            draw_line(&layer, line, font);
        }

        let footer = format!("page {}", i + 1);
        let footer_x = (PAGE_WIDTH_MM - estimated_width_mm(&footer, Style::Body)) / 2.0;
        layer.use_text(
            footer,
            Style::Body.size_pt() - 2.0,
            Mm(footer_x),
            Mm(FOOTER_Y_MM),
            &regular,
        );
    }

    doc.save_to_bytes().context("failed to encode PDF")
}

fn draw_line(layer: &PdfLayerReference, line: &PlacedLine, font: &IndirectFontRef) {
    let y = PAGE_HEIGHT_MM - line.top_mm;
    layer.use_text(
        line.text.clone(),
        line.style.size_pt(),
        Mm(line.x_mm),
        Mm(y),
        font,
    );

    if line.underline {
        let underline_y = y - 1.0;
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(line.x_mm), Mm(underline_y)), false),
                (
                    Point::new(Mm(line.x_mm + line.width_mm()), Mm(underline_y)),
                    false,
                ),
            ],
            is_closed: false,
        });
    }
}

#[cfg(test)]
#[path = "pdf_test.rs"]
mod tests;
