use clap::Parser;
use glam::Vec2;
use label_placer::{
	align::Align,
	config::{self, LabelConfig},
	drawing::{self, PrimitivePayload},
	font::FontDesc,
	layout::Layout,
	log::LogErr,
	place_label,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Places a label on an offscreen canvas and prints where it ended up
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Text to display
	#[arg(default_value = "0")]
	text: String,

	/// Anchor, e.g. center, top_left, out_bottom_mid
	#[arg(long, default_value_t = Align::Center)]
	align: Align,

	#[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
	x: i32,

	#[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
	y: i32,

	/// Overrides the configured font size
	#[arg(long)]
	font_size: Option<f32>,

	/// Screen size as WIDTHxHEIGHT, overrides the config
	#[arg(long, value_parser = parse_size)]
	size: Option<Vec2>,

	/// Ignore config files
	#[arg(long)]
	no_config: bool,
}

fn parse_size(s: &str) -> Result<Vec2, String> {
	let (w, h) = s
		.split_once('x')
		.ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s}"))?;
	let w: u32 = w.parse().map_err(|e| format!("bad width: {e}"))?;
	let h: u32 = h.parse().map_err(|e| format!("bad height: {e}"))?;
	if w == 0 || h == 0 {
		return Err(format!("size must be non-zero, got {s}"));
	}
	Ok(Vec2::new(w as f32, h as f32))
}

fn init_logging() {
	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.with(
			/* read RUST_LOG env var */
			EnvFilter::builder()
				.with_default_directive(LevelFilter::INFO.into())
				.from_env_lossy()
				.add_directive("cosmic_text=info".parse().unwrap()), // safe
		)
		.init();
}

fn main() -> anyhow::Result<()> {
	init_logging();
	let args = Args::parse();

	let mut config = if args.no_config {
		LabelConfig::default()
	} else {
		config::load_config().log_err_with("Failed to load config")?
	};

	if let Some(size) = args.size {
		config.screen_width = size.x as u32;
		config.screen_height = size.y as u32;
	}

	log::info!(
		"screen {}x{}, default font size {}",
		config.screen_width,
		config.screen_height,
		config.font_size
	);

	let mut layout = Layout::from_config(&config)?;
	let root = layout.root_widget;

	let font = match args.font_size {
		Some(font_size) => layout.state.globals.fonts().register(FontDesc {
			size: font_size,
			..config.default_font().with_line_height((font_size * label_placer::font::DEFAULT_LINE_HEIGHT_RATIO).round())
		})?,
		None => layout.state.globals.fonts().default_font(),
	};

	place_label(&mut layout, root, &args.text, font, args.align, args.x, args.y)?;

	let screen = Vec2::new(config.screen_width as f32, config.screen_height as f32);
	layout.update(screen)?;
	layout.print_tree();

	for primitive in drawing::draw(&layout)? {
		let PrimitivePayload::Text(text) = &primitive.payload;
		println!(
			"\"{}\" pos={} size={} depth={:.2}",
			text.content, primitive.boundary.pos, primitive.boundary.size, primitive.depth
		);
	}

	Ok(())
}
