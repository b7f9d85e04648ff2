use anyhow::{Context, Result};
use clap::Parser;
use pinboard::{
    AspectFitHeights, EdgeInsets, ElementKind, Rect, Size, Viewport, WaterfallConfig,
    WaterfallLayout,
};
use tracing::info;

const MOCK_CAPTIONS: [&str; 6] = [
    "This is a nice house, but it must be expensive",
    "Wow, very nice design. It must have been hard to build this.",
    "I want to live in this, but I can't afford a flat.",
    "This looks stupid",
    "This one is also very modern looking.",
    "What a great design",
];

const MOCK_PHOTOS: [(f32, f32); 10] = [
    (1200.0, 800.0),
    (800.0, 1200.0),
    (1024.0, 768.0),
    (900.0, 900.0),
    (1280.0, 720.0),
    (720.0, 1280.0),
    (1000.0, 1500.0),
    (1600.0, 900.0),
    (1100.0, 1100.0),
    (960.0, 1280.0),
];

// Rough stand-in for real text measurement.
const GLYPH_WIDTH: f32 = 7.5;
const LINE_HEIGHT: f32 = 18.0;
const CAPTION_SPACING: f32 = 6.0;

#[derive(Parser)]
#[command(name = "pinboard-demo")]
#[command(version, about = "Lay out a mock photo feed and scroll through it", long_about = None)]
struct Cli {
    /// Number of photos in the feed
    #[arg(long, default_value_t = 100)]
    items: usize,
    /// Number of columns
    #[arg(long, default_value_t = 2)]
    columns: usize,
    /// Gutter around every cell
    #[arg(long, default_value_t = 6.0)]
    padding: f32,
    /// Photos between two banners (0 disables banners)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    cadence: i64,
    /// Content height of each banner
    #[arg(long, default_value_t = 300.0)]
    banner_height: f32,
    /// Viewport width
    #[arg(long, default_value_t = 375.0)]
    width: f32,
    /// Viewport height
    #[arg(long, default_value_t = 812.0)]
    height: f32,
    /// Content inset above the feed
    #[arg(long, default_value_t = 115.0)]
    inset_top: f32,
    /// Content inset on the left and right
    #[arg(long, default_value_t = 6.0)]
    inset_side: f32,
    /// Distance scrolled between two visibility queries
    #[arg(long, default_value_t = 400.0)]
    scroll_step: f32,
    /// Print the final layout as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let viewport = Viewport::new(Size::new(cli.width, cli.height)).insets(EdgeInsets::new(
        cli.inset_top,
        cli.inset_side,
        0.0,
        cli.inset_side,
    ));
    let config = WaterfallConfig::default()
        .column_count(cli.columns)
        .padding(cli.padding)
        .banner_cadence(cli.cadence);
    let mut layout = WaterfallLayout::new(config, viewport);

    let provider = mock_feed(cli.items, layout.cell_width(), cli.banner_height);
    layout
        .prepare(cli.items, &provider)
        .context("failed to lay out the mock feed")?;

    let content = layout.content_size();
    info!(
        width = content.width,
        height = content.height,
        cell_width = layout.cell_width(),
        "Feed laid out"
    );

    let visible_height = viewport.content_rect().height;
    let step = cli.scroll_step.max(1.0);
    let mut offset = 0.0;
    while offset < content.height {
        let visible = layout.elements_in(Rect::new(0.0, offset, content.width, visible_height));
        let banners = visible
            .iter()
            .filter(|attribute| attribute.kind == ElementKind::Banner)
            .count();
        let first = visible
            .iter()
            .filter(|attribute| attribute.kind == ElementKind::Item)
            .map(|attribute| attribute.index)
            .min();
        info!(
            offset,
            items = visible.len() - banners,
            banners,
            first_item = ?first,
            "Visible elements"
        );
        offset += step;
    }

    if cli.json {
        let snapshot = layout.snapshot();
        let json = serde_json::to_string_pretty(&*snapshot).context("failed to encode layout")?;
        println!("{json}");
    }
    Ok(())
}

fn mock_feed(count: usize, cell_width: f32, banner_height: f32) -> AspectFitHeights {
    let media = (0..count)
        .map(|index| {
            let (width, height) = MOCK_PHOTOS[index % MOCK_PHOTOS.len()];
            Size::new(width, height)
        })
        .collect();
    let captions = (0..count)
        .map(|index| caption_height(MOCK_CAPTIONS[index % MOCK_CAPTIONS.len()], cell_width))
        .collect();
    AspectFitHeights::new(cell_width, media, captions)
        .with_caption_spacing(CAPTION_SPACING)
        .with_banner_height(banner_height)
}

fn caption_height(text: &str, width: f32) -> f32 {
    let per_line = (width / GLYPH_WIDTH).floor().max(1.0) as usize;
    let lines = text.chars().count().div_ceil(per_line).max(1);
    lines as f32 * LINE_HEIGHT
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,pinboard=info,pinboard_demo=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}
