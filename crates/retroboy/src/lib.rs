use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use retroboy_gb::{FrameOutcome, GameBoy};
use typed_builder::TypedBuilder;

pub const USAGE: &str = "usage: retroboy <rom> [frames] [--boot <path>] [--break <addr>]... [--dump <out.rgba>]";

/// What the headless host should do with one cartridge.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct RunOptions {
    #[builder(setter(into))]
    pub rom: PathBuf,
    #[builder(default = 60)]
    pub frames: u32,
    #[builder(default, setter(strip_option, into))]
    pub boot_rom: Option<PathBuf>,
    #[builder(default)]
    pub breakpoints: Vec<u16>,
    /// Raw 160x144 RGBA bytes of the last frame are written here.
    #[builder(default, setter(strip_option, into))]
    pub dump: Option<PathBuf>,
}

/// Parse the command line (without the program name).
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<RunOptions> {
    let mut args = args.into_iter();
    let mut rom = None;
    let mut frames = None;
    let mut boot_rom = None;
    let mut breakpoints = Vec::new();
    let mut dump = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--boot" => boot_rom = Some(PathBuf::from(value_for(&mut args, "--boot")?)),
            "--dump" => dump = Some(PathBuf::from(value_for(&mut args, "--dump")?)),
            "--break" => {
                let value = value_for(&mut args, "--break")?;
                breakpoints.push(parse_address(&value)?);
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'\n{USAGE}"),
            _ if rom.is_none() => rom = Some(PathBuf::from(&arg)),
            _ if frames.is_none() => {
                frames = Some(
                    arg.parse::<u32>()
                        .with_context(|| format!("invalid frame count '{arg}'"))?,
                )
            }
            _ => bail!("unexpected argument '{arg}'\n{USAGE}"),
        }
    }

    let rom = rom.ok_or_else(|| anyhow!("no ROM path provided\n{USAGE}"))?;
    Ok(RunOptions {
        rom,
        frames: frames.unwrap_or(60),
        boot_rom,
        breakpoints,
        dump,
    })
}

fn value_for(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| anyhow!("{flag} needs a value\n{USAGE}"))
}

/// Accepts `0x150`, `$150` or plain hex `150`.
fn parse_address(text: &str) -> Result<u16> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("$"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).with_context(|| format!("invalid address '{text}'"))
}

/// Load the cartridge, run the requested frames and report what happened.
pub fn run(options: &RunOptions) -> Result<()> {
    let rom = std::fs::read(&options.rom)
        .with_context(|| format!("failed to read ROM '{}'", options.rom.display()))?;

    let mut gb = GameBoy::new();
    let info = gb.load_rom(&rom).context("cartridge rejected")?;
    println!("{} ({}, {} KiB)", info.title, info.kind, info.rom_size / 1024);

    if let Some(path) = &options.boot_rom {
        let boot = std::fs::read(path)
            .with_context(|| format!("failed to read boot image '{}'", path.display()))?;
        gb.load_boot_rom(&boot)?;
    }
    for &pc in &options.breakpoints {
        gb.add_breakpoint(pc);
    }

    let mut frame = 0;
    while frame < options.frames {
        match gb.run_frame() {
            Ok(FrameOutcome::Completed) => frame += 1,
            Ok(FrameOutcome::Breakpoint(pc)) => {
                let next = gb.disassemble(pc);
                println!("break at {pc:04X}: {}", next.text);
                break;
            }
            Ok(FrameOutcome::Stopped) => {
                log::info!("CPU stopped after {frame} frames");
                break;
            }
            Ok(FrameOutcome::Frozen) => break,
            Err(err) => {
                eprintln!("{err} (frame {frame})");
                break;
            }
        }
    }

    let serial = gb.serial_output();
    if !serial.is_empty() {
        println!("serial: {}", String::from_utf8_lossy(serial));
    }
    println!("{}", gb.debug_snapshot());

    if let Some(path) = &options.dump {
        std::fs::write(path, gb.framebuffer())
            .with_context(|| format!("failed to write framebuffer to '{}'", path.display()))?;
        log::info!("framebuffer written to {}", path.display());
    }
    Ok(())
}
