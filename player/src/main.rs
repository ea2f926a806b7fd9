mod config;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use engine::recording::Recording;
use engine::session::Session;
use log::{debug, info};
use memmap2::Mmap;

use config::PlayerConfig;

fn usage() -> &'static str {
    "Usage:\n  player <recording> <Tibia.pic> <Tibia.spr> <Tibia.dat> [config.json]\n\nPlays a captured session back against the supplied asset files, advancing\nthrough every frame in the recording and exiting 0 once the stream is\nexhausted, or non-zero on the first protocol or asset error.\n\nThe recording format (.trp, packet dump, tibia.com movie, or hex-text) is\ndetected from its magic bytes, falling back to the file extension."
}

struct Args {
    recording_path: PathBuf,
    pic_path: PathBuf,
    spr_path: PathBuf,
    dat_path: PathBuf,
    config_path: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut args = env::args_os().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            println!("{}", usage());
            std::process::exit(0);
        }
        positional.push(PathBuf::from(arg));
    }

    if positional.len() < 4 || positional.len() > 5 {
        return Err(anyhow!(
            "expected 4 or 5 arguments, got {}\n\n{}",
            positional.len(),
            usage()
        ));
    }

    let mut positional = positional.into_iter();
    Ok(Args {
        recording_path: positional.next().unwrap(),
        pic_path: positional.next().unwrap(),
        spr_path: positional.next().unwrap(),
        dat_path: positional.next().unwrap(),
        config_path: positional.next(),
    })
}

fn map_file(path: &Path) -> Result<Mmap> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    // Safety: the mapping is only ever read, and the file is not
    // expected to be truncated by another process during playback.
    unsafe { Mmap::map(&file) }
        .with_context(|| format!("failed to memory-map {}", path.display()))
}

fn open_recording(path: &Path, bytes: &[u8]) -> Result<Recording> {
    if bytes.starts_with(&core::constants::TRP_MAGIC) {
        return engine::recording::open_trp(bytes).context("failed to parse .trp recording");
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("trp") => {
            engine::recording::open_trp(bytes).context("failed to parse .trp recording")
        }
        Some("movie") => engine::recording::open_tibia_movie(bytes)
            .context("failed to parse tibia.com movie recording"),
        Some("txt") | Some("hex") => {
            let text = std::str::from_utf8(bytes)
                .context("hex-text recording is not valid UTF-8")?;
            engine::recording::open_hex_text(text).context("failed to parse hex-text recording")
        }
        _ => engine::recording::open_packet_dump(bytes)
            .context("failed to parse packet-dump recording"),
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => PlayerConfig::load(path)?,
        None => PlayerConfig::default(),
    };

    core::initialize_logger(config.level_filter(), config.log_file.as_deref())
        .map_err(|err| anyhow!("failed to initialize logger: {err}"))?;

    let recording_map = map_file(&args.recording_path)?;
    let pic_map = map_file(&args.pic_path)?;
    let spr_map = map_file(&args.spr_path)?;
    let dat_map = map_file(&args.dat_path)?;

    let recording = open_recording(&args.recording_path, &recording_map)?;
    let version = recording
        .declared_version()
        .ok_or_else(|| anyhow!("recording format does not declare a protocol version"))?;

    info!(
        "opened recording {} at version {}.{}.{}",
        args.recording_path.display(),
        version.major,
        version.minor,
        version.preview
    );

    let catalogue = core::version::VersionCatalogue::load(version, &dat_map, &spr_map, &pic_map)
        .context("failed to load asset catalogue")?;

    let mut session = Session::new(catalogue, recording);

    let mut tick = 0u32;
    let step = (16.0 * config.playback_speed.max(0.01)).round().max(1.0) as u32;
    while !session.is_finished() {
        session
            .advance_to(tick)
            .with_context(|| format!("playback failed at tick {tick}"))?;
        tick = tick.saturating_add(step);
        debug!("advanced to tick {tick}, current_tick={}", session.state.current_tick);
    }

    info!("playback reached end of recording at tick {}", session.state.current_tick);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
