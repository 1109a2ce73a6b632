use std::env;

use clap::ArgMatches;
use log::{error, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use yansi::Paint;

use stylecharts::demo::{self, DemoConfig, DemoConfigBuilder};
use stylecharts::read::RcReader;
use stylecharts::style::Style;

mod app;

/// Sets up color choices and verbosity in the two libraries used for output.
fn configure_output(option: &str, verbose: bool) {
    let mut color_choice = ColorChoice::Auto;
    match option {
        "no" => {
            Paint::disable();
            color_choice = ColorChoice::Never;
        }
        "auto" => match env::var("TERM") {
            Ok(value) if value == "dumb" => {
                Paint::disable();
                color_choice = ColorChoice::Never;
            }
            _ => {
                if !atty::is(atty::Stream::Stdout) {
                    Paint::disable();
                }
            }
        },
        _ => color_choice = ColorChoice::Always,
    };
    TermLogger::init(
        if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        ConfigBuilder::new()
            .set_time_level(LevelFilter::Trace)
            .set_thread_level(LevelFilter::Trace)
            .set_target_level(LevelFilter::Trace)
            .build(),
        TerminalMode::Stderr,
        color_choice,
    )
    .unwrap_or_else(|_| eprintln!("[ERROR] Failed to configure logger"));
}

fn get_style(matches: &ArgMatches) -> Style {
    let mut style = Style::default();
    if let Some(path) = matches.get_one::<String>("rc-file") {
        let settings = RcReader::default().read(path).unwrap_or_else(|err| {
            error!("Could not open {}: {}", path, err);
            std::process::exit(1);
        });
        if let Err(err) = style.apply_rc(settings) {
            error!("{} (in {})", err, path);
            std::process::exit(1);
        }
    }
    if let Some(overrides) = matches.get_many::<String>("rc") {
        for string in overrides {
            let result =
                Style::parse_override(string).and_then(|(key, value)| style.set(&key, &value));
            if let Err(err) = result {
                error!("{}", err);
                std::process::exit(1);
            }
        }
    }
    style
}

fn get_config(matches: &ArgMatches) -> DemoConfig {
    let mut builder = DemoConfigBuilder::default();
    if let Some(resolution) = matches.get_one::<u64>("resolution") {
        builder.resolution(*resolution as usize);
    }
    if let Some(multiplier) = matches.get_one::<u64>("multiplier") {
        builder.multiplier(*multiplier as usize);
    }
    if let Some(bins) = matches.get_one::<u64>("bins") {
        builder.bins(*bins as usize);
    }
    if let Some(height) = matches.get_one::<u64>("height") {
        builder.height(*height as usize);
    }
    if let Some(start) = matches.get_one::<f64>("start") {
        builder.start(*start);
    }
    if let Some(end) = matches.get_one::<f64>("end") {
        builder.end(*end);
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        builder.seed(*seed);
    }
    builder.build().unwrap_or_else(|err| {
        error!("{}", err);
        std::process::exit(1);
    })
}

fn main() {
    let matches = app::get_app().get_matches();
    configure_output(
        matches.get_one::<String>("color").map_or("auto", |s| s.as_str()),
        matches.is_present("verbose"),
    );
    let style = get_style(&matches);
    let config = get_config(&matches);
    let width = matches.get_one::<u64>("width").map_or(110, |w| *w as usize);
    match demo::build_figure(&config, style, &mut config.rng()) {
        Ok(figure) => {
            print!("{:width$}", figure, width = width);
            println!();
            print!("{}", figure.summary());
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
