fn main() {
    env_logger::init();

    let options = match retroboy::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    log::info!("running '{}' for {} frames", options.rom.display(), options.frames);

    if let Err(err) = retroboy::run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
